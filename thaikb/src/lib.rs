pub mod qwerty;
pub mod script;

pub use libthai_core;

use libthai_core::grammar::{derive_cell, validate, Cell, Strictness, ValidationResult};
use libthai_core::{EngineConfig, Host, KeyOutput, KeySym, TextBufferHost, ThaiChar, ThaiEngine};
use script::{parse_script, ScriptError, Stroke};

/// One keystroke of a simulation and what the session did with it
#[derive(Debug, Clone)]
pub struct Step {
    pub stroke: Stroke,
    pub output: KeyOutput,
}

/// Result of typing a script into an in-memory text field
#[derive(Debug, Clone)]
pub struct Transcript {
    pub steps: Vec<Step>,
    pub text: String,
}

/// Types `script` into a fresh text field with the given settings.
///
/// Function keys only reach the session; the buffer itself applies
/// `BackSpace` so the result matches what a text field would show.
pub fn simulate(config: EngineConfig, script: &str, surrounding_text: bool) -> Result<Transcript, ScriptError> {
    let strokes = parse_script(script)?;
    let engine = ThaiEngine::new(config);
    let mut host = if surrounding_text {
        TextBufferHost::new()
    } else {
        TextBufferHost::without_surrounding_text()
    };
    let mut session = engine.create_session(&host);

    let mut steps = Vec::with_capacity(strokes.len());
    for stroke in strokes {
        let output = session.on_key_event(&mut host, &stroke.to_event());
        if !output.consumed {
            apply_default(&mut host, stroke);
        }
        log::debug!("{:?} -> {:?}", stroke, output);
        steps.push(Step { stroke, output });
    }

    Ok(Transcript {
        text: host.text(),
        steps,
    })
}

/// What a text field does with a key the input method let through
fn apply_default(host: &mut TextBufferHost, stroke: Stroke) {
    match stroke {
        Stroke::Key(KeySym::BACKSPACE) => host.delete_surrounding_text(-1, 1),
        Stroke::Key(KeySym::DELETE) => host.delete_surrounding_text(0, 1),
        Stroke::Key(KeySym::LEFT) => host.set_cursor(host.cursor().saturating_sub(1)),
        Stroke::Key(KeySym::RIGHT) => host.set_cursor(host.cursor() + 1),
        Stroke::Char { ch, .. } => host.commit_text(&ch.to_string()),
        Stroke::Key(_) => {}
    }
}

/// A character the validator would not have accepted as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Character offset in the checked text
    pub position: usize,
    pub ch: char,
    pub result: ValidationResult,
}

/// Replays `text` character by character through the validator.
///
/// Characters TIS-620 cannot represent break the context, as a non-Thai
/// keystroke would.
pub fn check_text(text: &str, strictness: Strictness) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut typed: Vec<ThaiChar> = Vec::new();

    for (position, ch) in text.chars().enumerate() {
        let Some(c) = ThaiChar::from_char(ch) else {
            typed.clear();
            continue;
        };
        let cell = derive_cell(&typed, Cell::CAPACITY);
        let result = validate(&cell, c, strictness);
        if !result.is_accept() {
            violations.push(Violation { position, ch, result });
        }
        typed.push(c);
    }

    violations
}
