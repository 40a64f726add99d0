use libthai_core::engine::RecentCharWindow;
use libthai_core::grammar::{derive_cell, validate, Cell, Slot, Strictness, ValidationResult};
use libthai_core::{tis, tis_str, ThaiChar};
use pretty_assertions::assert_eq;

/// Every byte TIS-620 assigns a character to
fn all_chars() -> Vec<ThaiChar> {
    (0u8..=255).map(ThaiChar).filter(|c| c.to_char().is_some()).collect()
}

/// A spread of windows: empty, bare consonant, and the usual stacks
fn sample_windows() -> Vec<Vec<ThaiChar>> {
    ["", "ก", "ก่", "กิ", "กิ่", "กำ", "ก่ำ", "กุ้", "เก", "ฟ ", "่", "ั้"]
        .iter()
        .map(|s| tis_str(s))
        .collect()
}

#[test]
fn test_window_keeps_last_four() {
    let mut window = RecentCharWindow::new();
    let pushed = tis_str("กขคฆง");
    for &c in &pushed {
        window.push(c);
        assert!(window.len() <= RecentCharWindow::CAPACITY);
    }

    assert_eq!(window.snapshot(), pushed[1..].to_vec());
    assert_eq!(window.last(), Some(tis('ง')));

    window.reseed(&tis_str("ิ่"));
    assert_eq!(window.snapshot(), tis_str("ิ่"));

    window.clear();
    assert!(window.is_empty());
}

#[test]
fn test_derive_cell_stacks() {
    let cell = derive_cell(&tis_str("ขกิ่"), 4);
    assert_eq!(cell.base(), Some(tis('ก')));
    assert_eq!(cell.vowel(), Some(tis('ิ')));
    assert_eq!(cell.tone(), Some(tis('่')));
    assert_eq!(cell.active(), Some(Slot::Tone));
    assert_eq!(cell.len(), 3);
    assert_eq!(cell.chars().collect::<Vec<_>>(), tis_str("กิ่"));
}

#[test]
fn test_derive_cell_sara_am() {
    let cell = derive_cell(&tis_str("ก้ำ"), 4);
    assert_eq!(cell.chars().collect::<Vec<_>>(), tis_str("ก้ำ"));
    assert_eq!(cell.active(), Some(Slot::Am));
    assert_eq!(cell.last_char(), Some(ThaiChar::SARA_AM));
}

#[test]
fn test_derive_cell_boundaries() {
    // A new consonant closes the previous cell
    let cell = derive_cell(&tis_str("กิข"), 4);
    assert_eq!(cell.chars().collect::<Vec<_>>(), tis_str("ข"));

    // Following vowels stand alone
    let cell = derive_cell(&tis_str("กา"), 4);
    assert_eq!(cell.len(), 1);
    assert!(!cell.has_consonant_base());

    // Only the requested tail is considered
    let cell = derive_cell(&tis_str("กิ่"), 1);
    assert_eq!(cell.chars().collect::<Vec<_>>(), tis_str("่"));

    assert!(derive_cell(&[], 4).is_empty());
}

#[test]
fn test_passthrough_never_rejects() {
    for window in sample_windows() {
        let cell = derive_cell(&window, Cell::CAPACITY);
        for c in all_chars() {
            assert_eq!(validate(&cell, c, Strictness::Passthrough), ValidationResult::Accept);
        }
    }
}

#[test]
fn test_replace_stays_within_cell() {
    for window in sample_windows() {
        let cell = derive_cell(&window, Cell::CAPACITY);
        for c in all_chars() {
            for strictness in [Strictness::BasicCheck, Strictness::Strict] {
                if let ValidationResult::Replace { delete_backward, .. } = validate(&cell, c, strictness) {
                    assert_eq!(strictness, Strictness::Strict);
                    assert!(
                        delete_backward <= cell.len(),
                        "{:?} + {:?} deletes {}",
                        window,
                        c,
                        delete_backward
                    );
                }
            }
        }
    }
}

#[test]
fn test_basic_check() {
    let cell = derive_cell(&tis_str("ก่"), 4);
    assert_eq!(validate(&cell, tis('้'), Strictness::BasicCheck), ValidationResult::Reject);
    assert_eq!(validate(&cell, tis('ข'), Strictness::BasicCheck), ValidationResult::Accept);

    let cell = derive_cell(&tis_str("กิ"), 4);
    assert_eq!(validate(&cell, tis('ุ'), Strictness::BasicCheck), ValidationResult::Reject);
    assert_eq!(validate(&cell, tis('้'), Strictness::BasicCheck), ValidationResult::Accept);
}

#[test]
fn test_strict_reorders() {
    let replace = |delete_backward, s: &str| ValidationResult::Replace {
        delete_backward,
        replacement: tis_str(s),
    };

    let cell = derive_cell(&tis_str("ก่"), 4);
    assert_eq!(validate(&cell, tis('ิ'), Strictness::Strict), replace(1, "ิ่"));

    let cell = derive_cell(&tis_str("กิ"), 4);
    assert_eq!(validate(&cell, tis('ี'), Strictness::Strict), replace(1, "ี"));

    let cell = derive_cell(&tis_str("กิ่"), 4);
    assert_eq!(validate(&cell, tis('ี'), Strictness::Strict), replace(2, "ี่"));
    assert_eq!(validate(&cell, tis('้'), Strictness::Strict), replace(1, "้"));

    let cell = derive_cell(&tis_str("กำ"), 4);
    assert_eq!(validate(&cell, tis('้'), Strictness::Strict), replace(1, "้ำ"));

    let cell = derive_cell(&tis_str("ก่ำ"), 4);
    assert_eq!(validate(&cell, tis('้'), Strictness::Strict), replace(2, "้ำ"));
}

#[test]
fn test_strict_rejects_without_consonant() {
    let cell = derive_cell(&tis_str("เ"), 4);
    assert_eq!(validate(&cell, tis('เ'), Strictness::BasicCheck), ValidationResult::Accept);
    assert_eq!(validate(&cell, tis('เ'), Strictness::Strict), ValidationResult::Reject);

    let cell = derive_cell(&tis_str("่"), 4);
    assert_eq!(validate(&cell, tis('ิ'), Strictness::Strict), ValidationResult::Reject);
}

#[test]
fn test_strict_vowel_swap_keeps_the_mark() {
    // ์ cannot sit on ั, so swapping ิ for ั would drop it
    let cell = derive_cell(&tis_str("กิ์"), 4);
    assert_eq!(cell.tone(), Some(tis('์')));
    assert_eq!(validate(&cell, tis('ั'), Strictness::Strict), ValidationResult::Reject);

    // A tone that fits the new vowel moves across with it
    let cell = derive_cell(&tis_str("กิ่"), 4);
    assert_eq!(
        validate(&cell, tis('ั'), Strictness::Strict),
        ValidationResult::Replace {
            delete_backward: 2,
            replacement: tis_str("ั่"),
        }
    );
}
