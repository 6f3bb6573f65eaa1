// core/tests/canonical_properties.rs
//
// Invariants of the canonicalizer and the edit pipeline, checked over a
// fixed set of awkward inputs.

use timefield_core::{canonicalize, classify, Edit, FieldConfig, SegmentKind};

const CANDIDATES: &[&str] = &[
    "",
    ":",
    "::",
    "1",
    "12",
    "123",
    "12:",
    "12:3",
    "12:34",
    "12:345",
    "12:34:",
    "12:34:5",
    "12:34:56",
    "12:34:56.",
    "12:34:56.7",
    "12:34:56.789",
    "12:34:56.7891",
    "12:34:56.7.8",
    "99:99:99.999",
    "100:60:90.999",
    "ab:cd:ef.ghi",
    "1a:2b",
    "12-34-56",
    "..",
    "12:34:56:78",
    "9",
    "0:0:0.0",
];

fn configs() -> Vec<FieldConfig> {
    vec![
        FieldConfig::hours_minutes(),
        FieldConfig::with_seconds(),
        FieldConfig::with_millis(),
        FieldConfig::new(false, true, ':'),
        FieldConfig::new(true, true, '-'),
        FieldConfig::new(true, false, ' '),
    ]
}

fn assert_valid(config: &FieldConfig, value: &str) {
    assert_eq!(
        value.chars().count(),
        config.max_len(),
        "wrong length for {value:?}"
    );

    let chars: Vec<char> = value.chars().collect();
    let mut kinds = vec![SegmentKind::Hours, SegmentKind::Minutes];
    if config.show_seconds {
        kinds.push(SegmentKind::Seconds);
    }
    if config.millis_enabled() {
        kinds.push(SegmentKind::Millis);
    }
    for kind in kinds {
        let segment: String = chars[kind.range()].iter().collect();
        assert!(kind.accepts(&segment), "{kind:?} segment {segment:?} in {value:?}");
    }

    assert_eq!(chars[2], config.separator());
    if config.show_seconds {
        assert_eq!(chars[5], config.separator());
    }
    if config.millis_enabled() {
        assert_eq!(chars[8], '.');
    }
}

#[test]
fn output_has_fixed_length_and_valid_segments() {
    for config in configs() {
        let default_value = config.default_value();
        for candidate in CANDIDATES {
            let out = canonicalize(&config, candidate, &default_value, 0);
            assert_valid(&config, &out.value);
        }
    }
}

#[test]
fn canonicalize_is_idempotent() {
    for config in configs() {
        let default_value = config.default_value();
        for candidate in CANDIDATES {
            let once = canonicalize(&config, candidate, &default_value, 5);
            let twice = canonicalize(&config, &once.value, &default_value, once.cursor);
            assert_eq!(twice, once, "candidate {candidate:?}");
        }
    }
}

#[test]
fn valid_value_is_returned_unchanged() {
    for config in configs() {
        let default_value = config.default_value();
        for candidate in CANDIDATES {
            let valid = canonicalize(&config, candidate, &default_value, 0).value;
            let out = canonicalize(&config, &valid, "garbage", 7);
            assert_eq!(out.value, valid);
            assert_eq!(out.cursor, 7);
        }
    }
}

#[test]
fn cursor_never_grows() {
    for config in configs() {
        let default_value = config.default_value();
        for candidate in CANDIDATES {
            for cursor in 0..=12 {
                let out = canonicalize(&config, candidate, &default_value, cursor);
                assert!(out.cursor <= cursor);
            }
        }
    }
}

#[test]
fn every_single_char_edit_stays_valid() {
    let config = FieldConfig::with_millis();
    let old = "12:34:56.789";
    let chars: Vec<char> = old.chars().collect();

    for typed in ['0', '5', '9', ':', '.', 'x', ' '] {
        for caret in 0..=chars.len() {
            // Insert `typed` at `caret`, as a keypress would.
            let new: String = chars[..caret]
                .iter()
                .copied()
                .chain(std::iter::once(typed))
                .chain(chars[caret..].iter().copied())
                .collect();
            let candidate = classify(&config, &Edit::new(old, &new, caret + 1));
            let out = canonicalize(&config, &candidate.value, old, candidate.cursor);
            assert_valid(&config, &out.value);
        }
    }

    for caret in 0..chars.len() {
        // Delete the character after `caret`.
        let new: String = chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != caret)
            .map(|(_, &c)| c)
            .collect();
        let candidate = classify(&config, &Edit::new(old, &new, caret));
        let out = canonicalize(&config, &candidate.value, old, candidate.cursor);
        assert_valid(&config, &out.value);
    }
}

#[test]
fn listed_scenarios() {
    let hm = FieldConfig::hours_minutes();
    let secs = FieldConfig::with_seconds();
    let millis = FieldConfig::with_millis();

    assert_eq!(canonicalize(&millis, "", "00:00:00.000", 0).value, "00:00:00.000");
    assert_eq!(canonicalize(&secs, "12:34", "00:00:00", 0).value, "12:34:00");
    assert_eq!(canonicalize(&hm, "12:34:56", "00:00", 0).value, "12:34");
    assert_eq!(canonicalize(&hm, "1:00", "00:00", 0).value, "10:00");
    assert_eq!(canonicalize(&hm, "12:60", "00:00", 0).value, "12:00");
    assert_eq!(canonicalize(&secs, "12:60", "00:00:00", 0).value, "12:00:00");
    assert_eq!(
        canonicalize(&millis, "12:00:00.9", "00:00:00.000", 0).value,
        "12:00:00.900"
    );
}
