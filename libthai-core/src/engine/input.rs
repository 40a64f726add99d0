//! Keyboard events as delivered by the host

use crate::types::KeySym;

/// A key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Symbolic key, used only to classify editing and modifier keys
    pub keysym: KeySym,
    /// Host (X11) keycode: evdev code + 8
    pub keycode: u16,
    /// Modifier keys state
    pub modifiers: ModifierState,
    pub is_release: bool,
}

impl KeyEvent {
    /// Creates a key press
    pub fn new(keysym: KeySym, keycode: u16, modifiers: ModifierState) -> Self {
        Self {
            keysym,
            keycode,
            modifiers,
            is_release: false,
        }
    }

    /// Creates a press of a named function key with no keycode.
    pub fn from_keysym(keysym: KeySym) -> Self {
        Self::new(keysym, 0, ModifierState::default())
    }

    /// The matching release event
    pub fn released(self) -> Self {
        Self {
            is_release: true,
            ..self
        }
    }
}

/// State of modifier and lock keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    /// Level-3 shift (AltGr / Mod5)
    pub alt_shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
    pub caps_lock: bool,
    pub num_lock: bool,
}

impl ModifierState {
    pub fn shifted() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn alt_shifted() -> Self {
        Self {
            alt_shift: true,
            ..Self::default()
        }
    }

    /// Ctrl, Alt or Super turn the key into a shortcut.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.super_key
    }

    /// Checks if no modifiers are active
    pub fn none(&self) -> bool {
        !(self.shift || self.alt_shift || self.has_command())
    }
}
