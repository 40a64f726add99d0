#![allow(dead_code)]

pub mod engine_helpers;

pub use engine_helpers::*;

use libthai_core::{KeyEvent, KeySym, ModifierState};

/// Host keycodes (evdev + 8) of the keys used in the tests, named by their
/// Ketmanee character.
pub mod keys {
    pub const KO_KAI: u16 = 40; // ก  (d)
    pub const KHO_KHAI: u16 = 20; // ข (-)
    pub const FO_FAN: u16 = 38; // ฟ  (a)
    pub const MAI_EK: u16 = 44; // ่  (j)
    pub const MAI_THO: u16 = 43; // ้  (h)
    pub const SARA_I: u16 = 56; // ิ  (b)
    pub const SARA_II: u16 = 30; // ี  (u)
    pub const SARA_AM: u16 = 26; // ำ  (e)
    pub const SARA_AA: u16 = 45; // า  (k)
    pub const SARA_E: u16 = 42; // เ  (g)
    pub const SPACE: u16 = 65;
    pub const KP_3: u16 = 81;
}

/// Press of a character key; the keysym only needs to be a plain one
pub fn press(keycode: u16) -> KeyEvent {
    KeyEvent::new(KeySym::from_latin1('x'), keycode, ModifierState::default())
}

pub fn press_with(keycode: u16, modifiers: ModifierState) -> KeyEvent {
    KeyEvent::new(KeySym::from_latin1('x'), keycode, modifiers)
}

pub fn press_keysym(keysym: KeySym) -> KeyEvent {
    KeyEvent::from_keysym(keysym)
}
