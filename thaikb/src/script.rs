//! Typing scripts: Latin text as typed on a QWERTY keyboard, with
//! `{Name}` escapes for function keys (`{BackSpace}`, `{Left}`, ...).
//! `{{` types a literal brace.

use libthai_core::{keysym_from_name, KeyEvent, KeySym, ModifierState};
use libthai_core::keymap::EVDEV_OFFSET;
use thiserror::Error;

use crate::qwerty;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown key name {{{0}}}")]
    UnknownKey(String),

    #[error("Unterminated key escape at character {0}")]
    UnterminatedEscape(usize),

    #[error("No QWERTY key produces {0:?}")]
    UnmappedChar(char),
}

/// One keystroke of a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// A printable key, by evdev keycode
    Char { ch: char, keycode: u16, shift: bool },
    /// A named function key
    Key(KeySym),
}

impl Stroke {
    /// Press event as a host would deliver it
    pub fn to_event(self) -> KeyEvent {
        match self {
            Stroke::Char { ch, keycode, shift } => {
                let modifiers = ModifierState {
                    shift,
                    ..ModifierState::default()
                };
                KeyEvent::new(KeySym::from_latin1(ch), keycode + EVDEV_OFFSET, modifiers)
            }
            Stroke::Key(keysym) => KeyEvent::from_keysym(keysym),
        }
    }
}

pub fn parse_script(script: &str) -> Result<Vec<Stroke>, ScriptError> {
    let mut strokes = Vec::new();
    let mut chars = script.chars().enumerate().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch == '{' {
            if chars.next_if(|&(_, c)| c == '{').is_some() {
                strokes.push(char_stroke('{')?);
                continue;
            }
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some((_, '}')) => break,
                    Some((_, c)) => name.push(c),
                    None => return Err(ScriptError::UnterminatedEscape(pos)),
                }
            }
            let keysym = keysym_from_name(&name).ok_or(ScriptError::UnknownKey(name))?;
            strokes.push(Stroke::Key(keysym));
        } else {
            strokes.push(char_stroke(ch)?);
        }
    }

    Ok(strokes)
}

fn char_stroke(ch: char) -> Result<Stroke, ScriptError> {
    let (keycode, shift) = qwerty::key_for_char(ch).ok_or(ScriptError::UnmappedChar(ch))?;
    Ok(Stroke::Char { ch, keycode, shift })
}
