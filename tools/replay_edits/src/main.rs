//! Replay scripted edits against a time field
//!
//! Each script line is one command:
//!
//!   input <value> <caret>   raw edit: full new text and caret after the edit
//!   up <caret>              arrow up with the caret at <caret>
//!   down <caret>            arrow down with the caret at <caret>
//!   set <value>             replace the value from outside
//!
//! Blank lines and lines starting with `#` are skipped.
//!
//! Usage:
//!   cargo run -p replay_edits -- --seconds --initial 12:34:56 --script edits.txt
//!   printf 'input 12:341:56 6\nup 7\n' | cargo run -p replay_edits -- --seconds --json

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use timefield_core::{FieldConfig, KeyEvent, TimeField};

#[derive(Parser, Debug)]
#[command(name = "replay_edits")]
#[command(about = "Replay scripted edits against a masked time field")]
struct Args {
    /// Show the seconds segment
    #[arg(long)]
    seconds: bool,

    /// Show the millisecond segment (needs --seconds)
    #[arg(long)]
    millis: bool,

    /// Separator between hours, minutes and seconds
    #[arg(long, default_value_t = ':')]
    separator: char,

    /// Field configuration file (TOML); overrides the format flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial field value
    #[arg(short, long)]
    initial: Option<String>,

    /// Script file (defaults to stdin)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print one JSON object per command
    #[arg(long)]
    json: bool,

    /// Log soft rejections to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Input { value: String, caret: usize },
    Up { caret: usize },
    Down { caret: usize },
    Set { value: String },
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    line: usize,
    command: &'a str,
    value: &'a str,
    cursor: usize,
    changed: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => FieldConfig::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => FieldConfig::new(args.seconds, args.millis, args.separator),
    };

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let commands = parse_script(&script)?;
    tracing::debug!(count = commands.len(), ?config, "replaying script");

    let mut field = TimeField::new(config, args.initial.as_deref());
    if !args.json {
        println!("start\t{}\t{}", field.value(), field.cursor());
    }

    for (line, command) in commands {
        let name = match command {
            Command::Input { ref value, caret } => {
                field.on_input(value, caret);
                "input"
            }
            Command::Up { caret } => {
                field.process_key(KeyEvent::Up, caret);
                "up"
            }
            Command::Down { caret } => {
                field.process_key(KeyEvent::Down, caret);
                "down"
            }
            Command::Set { ref value } => {
                field.set_value(value);
                "set"
            }
        };

        let changed = field.context_mut().take_change();
        let outcome = Outcome {
            line,
            command: name,
            value: field.value(),
            cursor: field.cursor(),
            changed,
        };

        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{}\t{}\t{}", outcome.command, outcome.value, outcome.cursor);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new(default_filter),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse a script into commands tagged with their 1-based line number.
fn parse_script(script: &str) -> anyhow::Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (idx, raw) in script.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let command =
            parse_command(line.trim_start()).with_context(|| format!("line {}: {:?}", idx + 1, raw))?;
        commands.push((idx + 1, command));
    }
    Ok(commands)
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "input" => {
            // The value may hold spaces when the separator is a space, so the
            // caret is the last token.
            let Some((value, caret)) = rest.rsplit_once(' ') else {
                anyhow::bail!("input needs a value and a caret");
            };
            Ok(Command::Input {
                value: value.to_string(),
                caret: parse_caret(caret)?,
            })
        }
        "up" => Ok(Command::Up {
            caret: parse_caret(rest)?,
        }),
        "down" => Ok(Command::Down {
            caret: parse_caret(rest)?,
        }),
        "set" => Ok(Command::Set {
            value: rest.to_string(),
        }),
        _ => anyhow::bail!("Unknown command: {}. Use 'input', 'up', 'down' or 'set'", verb),
    }
}

fn parse_caret(token: &str) -> anyhow::Result<usize> {
    token
        .trim()
        .parse::<usize>()
        .with_context(|| format!("invalid caret {:?}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "# warm up\ninput 12:341:56 6\n\nup 7\ndown 1\nset 21:43:13\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                (
                    2,
                    Command::Input {
                        value: "12:341:56".into(),
                        caret: 6
                    }
                ),
                (4, Command::Up { caret: 7 }),
                (5, Command::Down { caret: 1 }),
                (
                    6,
                    Command::Set {
                        value: "21:43:13".into()
                    }
                ),
            ]
        );
    }

    #[test]
    fn input_value_may_contain_spaces() {
        assert_eq!(
            parse_command("input 12 341 56 6").unwrap(),
            Command::Input {
                value: "12 341 56".into(),
                caret: 6
            }
        );
    }

    #[test]
    fn empty_input_value_is_allowed() {
        assert_eq!(
            parse_command("input  0").unwrap(),
            Command::Input {
                value: String::new(),
                caret: 0
            }
        );
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!(parse_command("input 12:34").is_err());
        assert!(parse_command("up").is_err());
        assert!(parse_command("down x").is_err());
        assert!(parse_command("left 3").is_err());

        let err = parse_script("up 1\nup -1\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn replay_matches_field() {
        let commands = parse_script("input 12:341:56 6\nup 7\n").unwrap();
        let mut field = TimeField::new(FieldConfig::with_seconds(), Some("12:34:56"));
        for (_, command) in commands {
            match command {
                Command::Input { value, caret } => {
                    field.on_input(&value, caret);
                }
                Command::Up { caret } => {
                    field.process_key(KeyEvent::Up, caret);
                }
                _ => unreachable!(),
            }
        }
        assert_eq!(field.value(), "12:34:17");
    }
}
