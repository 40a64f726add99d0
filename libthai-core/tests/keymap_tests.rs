use libthai_core::keymap::{self, keypad_char, layout_rows, KeyboardLayout, ShiftLevel};
use libthai_core::{tis, KeySym, ModifierState};
use pretty_assertions::assert_eq;

#[test]
fn test_home_row_per_layout() {
    assert_eq!(keymap::map(KeyboardLayout::Ketmanee, 30, ShiftLevel::Unshifted), Some(tis('ฟ')));
    assert_eq!(keymap::map(KeyboardLayout::Manoonchai, 30, ShiftLevel::Unshifted), Some(tis('ง')));
    assert_eq!(keymap::map(KeyboardLayout::Pattachote, 30, ShiftLevel::Unshifted), Some(tis('้')));
    assert_eq!(keymap::map(KeyboardLayout::Tis820_2538, 30, ShiftLevel::Unshifted), Some(tis('ฟ')));
}

#[test]
fn test_keys_outside_table_are_unmapped() {
    for layout in KeyboardLayout::ALL {
        let defined: Vec<u16> = layout_rows(layout).iter().map(|r| r.keycode).collect();
        for keycode in 0..300u16 {
            if defined.contains(&keycode) {
                continue;
            }
            for level in [ShiftLevel::Unshifted, ShiftLevel::Shifted, ShiftLevel::AltShifted] {
                assert_eq!(keymap::map(layout, keycode, level), None, "{} keycode {}", layout, keycode);
            }
        }
    }
}

#[test]
fn test_tis820_extends_ketmanee() {
    for row in layout_rows(KeyboardLayout::Ketmanee) {
        for level in [ShiftLevel::Unshifted, ShiftLevel::Shifted] {
            assert_eq!(
                keymap::map(KeyboardLayout::Tis820_2538, row.keycode, level),
                keymap::map(KeyboardLayout::Ketmanee, row.keycode, level),
            );
        }
    }
    assert_eq!(keymap::map(KeyboardLayout::Ketmanee, 41, ShiftLevel::AltShifted), None);
    assert_eq!(keymap::map(KeyboardLayout::Tis820_2538, 41, ShiftLevel::AltShifted), Some(tis('๏')));
}

#[test]
fn test_layout_names() {
    for layout in KeyboardLayout::ALL {
        assert_eq!(layout.name().parse::<KeyboardLayout>().unwrap(), layout);
    }
    assert_eq!("ketmanee".parse::<KeyboardLayout>().unwrap(), KeyboardLayout::Ketmanee);
    assert_eq!("tis820-2538".parse::<KeyboardLayout>().unwrap(), KeyboardLayout::Tis820_2538);
    assert!("dvorak".parse::<KeyboardLayout>().is_err());
}

#[test]
fn test_shift_level_from_modifiers() {
    assert_eq!(ShiftLevel::from_modifiers(&ModifierState::default()), ShiftLevel::Unshifted);
    assert_eq!(ShiftLevel::from_modifiers(&ModifierState::shifted()), ShiftLevel::Shifted);
    let both = ModifierState {
        shift: true,
        alt_shift: true,
        ..ModifierState::default()
    };
    assert_eq!(ShiftLevel::from_modifiers(&both), ShiftLevel::AltShifted);
    assert_eq!(ShiftLevel::try_from(3u8), Err(3));
}

#[test]
fn test_keypad_overlay() {
    let kp7 = KeySym(KeySym::KP_0.raw() + 7);
    let num_lock = ModifierState {
        num_lock: true,
        ..ModifierState::default()
    };

    assert_eq!(keypad_char(kp7, &num_lock, ShiftLevel::AltShifted), Some(tis('๗')));
    assert_eq!(keypad_char(kp7, &num_lock, ShiftLevel::Unshifted), None);
    assert_eq!(keypad_char(kp7, &ModifierState::alt_shifted(), ShiftLevel::AltShifted), None);
    assert_eq!(keypad_char(KeySym::KP_ENTER, &num_lock, ShiftLevel::AltShifted), None);
}
