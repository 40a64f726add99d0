//! Keycode to Thai character mapping
//!
//! A pure lookup over static per-layout tables. Keycodes here are Linux
//! evdev codes; hosts that report X11 keycodes must subtract
//! [`EVDEV_OFFSET`] first (the session does this).

pub mod tables;

use std::fmt;
use std::str::FromStr;

use crate::engine::ModifierState;
use crate::error::Error;
use crate::types::{KeySym, ThaiChar};
use tables::{KeyRow, LayoutTable};

/// Difference between X11 keycodes and Linux evdev keycodes
pub const EVDEV_OFFSET: u16 = 8;

/// Supported keyboard layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardLayout {
    #[default]
    Ketmanee,
    Pattachote,
    Tis820_2538,
    Manoonchai,
}

impl KeyboardLayout {
    pub const ALL: [KeyboardLayout; 4] = [
        KeyboardLayout::Ketmanee,
        KeyboardLayout::Pattachote,
        KeyboardLayout::Tis820_2538,
        KeyboardLayout::Manoonchai,
    ];

    /// Name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            KeyboardLayout::Ketmanee => "KETMANEE",
            KeyboardLayout::Pattachote => "PATTACHOTE",
            KeyboardLayout::Tis820_2538 => "TIS820_2538",
            KeyboardLayout::Manoonchai => "MANOONCHAI",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            KeyboardLayout::Ketmanee => "Ketmanee",
            KeyboardLayout::Pattachote => "Pattachote",
            KeyboardLayout::Tis820_2538 => "TIS-820.2538",
            KeyboardLayout::Manoonchai => "Manoonchai",
        }
    }

    pub fn table(self) -> &'static LayoutTable {
        match self {
            KeyboardLayout::Ketmanee => &tables::KETMANEE,
            KeyboardLayout::Pattachote => &tables::PATTACHOTE,
            KeyboardLayout::Tis820_2538 => &tables::TIS820_2538,
            KeyboardLayout::Manoonchai => &tables::MANOONCHAI,
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '.' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "KETMANEE" | "KEDMANEE" => Ok(KeyboardLayout::Ketmanee),
            "PATTACHOTE" => Ok(KeyboardLayout::Pattachote),
            "TIS820_2538" | "TIS8202538" => Ok(KeyboardLayout::Tis820_2538),
            "MANOONCHAI" => Ok(KeyboardLayout::Manoonchai),
            _ => Err(Error::UnknownLayout(s.to_string())),
        }
    }
}

/// Shift level selected by the modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShiftLevel {
    #[default]
    Unshifted = 0,
    Shifted = 1,
    /// Secondary modifier distinct from Shift (Mod5 / AltGr)
    AltShifted = 2,
}

impl ShiftLevel {
    /// Level from modifiers: alternate-shift wins over Shift.
    pub fn from_modifiers(modifiers: &ModifierState) -> Self {
        if modifiers.alt_shift {
            ShiftLevel::AltShifted
        } else if modifiers.shift {
            ShiftLevel::Shifted
        } else {
            ShiftLevel::Unshifted
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for ShiftLevel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ShiftLevel::Unshifted),
            1 => Ok(ShiftLevel::Shifted),
            2 => Ok(ShiftLevel::AltShifted),
            other => Err(other),
        }
    }
}

/// Maps an evdev keycode at a shift level to a Thai character.
///
/// Returns `None` for keys the layout does not define; the caller must let
/// such keys through to the host untouched.
pub fn map(layout: KeyboardLayout, keycode: u16, level: ShiftLevel) -> Option<ThaiChar> {
    layout.table().lookup(keycode, level.index())
}

/// Keypad digits produce Thai digits when Num Lock is on and either the
/// alternate-shift level or Caps Lock is engaged.
pub fn keypad_char(keysym: KeySym, modifiers: &ModifierState, level: ShiftLevel) -> Option<ThaiChar> {
    let digit = keysym.keypad_digit()?;
    if modifiers.num_lock && (level == ShiftLevel::AltShifted || modifiers.caps_lock) {
        Some(ThaiChar(ThaiChar::THAI_DIGIT_ZERO.0 + digit))
    } else {
        None
    }
}

/// All rows of a layout, in table order
pub fn layout_rows(layout: KeyboardLayout) -> &'static [KeyRow] {
    layout.table().rows()
}
