//! Per input field keystroke handling

use crate::codec::{Tis620, Transcoder};
use crate::config::{EngineConfig, SharedConfig};
use crate::grammar::{derive_cell, is_accept, validate, Cell, Strictness, ValidationResult};
use crate::keymap::{self, ShiftLevel, EVDEV_OFFSET};
use crate::types::{KeySym, ThaiChar};

use super::host::{context_source_for, ContextSource, Host};
use super::input::KeyEvent;
use super::output::KeyOutput;
use super::window::RecentCharWindow;

/// One focused text field.
///
/// Owns the fallback character window; reads the shared configuration once
/// per keystroke.
#[derive(Debug)]
pub struct ThaiSession {
    config: SharedConfig,
    window: RecentCharWindow,
    context: Box<dyn ContextSource>,
    codec: Box<dyn Transcoder>,
}

impl ThaiSession {
    pub fn new(config: SharedConfig, host: &dyn Host) -> Self {
        Self {
            config,
            window: RecentCharWindow::new(),
            context: context_source_for(host),
            codec: Box::new(Tis620),
        }
    }

    /// Replaces the transcoder used for committed text
    pub fn with_transcoder(mut self, codec: Box<dyn Transcoder>) -> Self {
        self.codec = codec;
        self
    }

    /// Characters remembered from this session's own commits
    pub fn window(&self) -> &RecentCharWindow {
        &self.window
    }

    pub fn config(&self) -> EngineConfig {
        self.config.snapshot()
    }

    /// Composition was interrupted (focus change, host reset)
    pub fn on_reset(&mut self, host: &dyn Host) {
        self.window.clear();
        self.context = context_source_for(host);
    }

    pub fn on_activate(&mut self, host: &dyn Host) {
        self.context = context_source_for(host);
        log::debug!("Session activated, context from {:?}", self.context);
    }

    pub fn on_deactivate(&mut self) {
        log::debug!("Session deactivated");
    }

    /// Processes one key event against `host`.
    ///
    /// Returns whether the key was consumed and which edit was applied.
    pub fn on_key_event(&mut self, host: &mut dyn Host, event: &KeyEvent) -> KeyOutput {
        if event.is_release {
            return KeyOutput::pass();
        }
        if event.modifiers.has_command() || event.keysym.is_context_lost() {
            self.window.clear();
            return KeyOutput::pass();
        }
        if event.keysym == KeySym::NONE || event.keysym.is_context_intact() {
            return KeyOutput::pass();
        }

        let config = self.config.snapshot();
        let level = ShiftLevel::from_modifiers(&event.modifiers);
        let Some(c) = Self::resolve_char(&config, event, level) else {
            return KeyOutput::pass();
        };
        log::debug!(
            "keycode {} ShiftLevel: {} New Char: {:?}",
            event.keycode,
            level.index(),
            c
        );

        let context = self.context.context(&*host, &self.window, RecentCharWindow::CAPACITY);

        if !config.correction {
            return self.commit_checked(host, &context, c, config.strictness);
        }

        let cell = derive_cell(&context, Cell::CAPACITY);
        match validate(&cell, c, config.strictness) {
            ValidationResult::Reject => KeyOutput::swallow(),
            ValidationResult::Accept => match self.commit(host, &[c]) {
                Some(text) => {
                    self.window.push(c);
                    KeyOutput::commit(text)
                }
                None => KeyOutput::swallow(),
            },
            ValidationResult::Replace {
                delete_backward,
                replacement,
            } => self.apply_replace(host, delete_backward, &replacement),
        }
    }

    fn resolve_char(config: &EngineConfig, event: &KeyEvent, level: ShiftLevel) -> Option<ThaiChar> {
        if let Some(c) = keymap::keypad_char(event.keysym, &event.modifiers, level) {
            return Some(c);
        }
        let keycode = event.keycode.checked_sub(EVDEV_OFFSET)?;
        keymap::map(config.keyboard_layout, keycode, level)
    }

    /// Plain accept/reject against the previous character; the key is
    /// consumed either way.
    fn commit_checked(
        &mut self,
        host: &mut dyn Host,
        context: &[ThaiChar],
        c: ThaiChar,
        strictness: Strictness,
    ) -> KeyOutput {
        let previous = context.last().copied().unwrap_or(ThaiChar::NUL);
        if !is_accept(previous, c, strictness) {
            return KeyOutput::swallow();
        }
        match self.commit(host, &[c]) {
            Some(text) => {
                self.window.push(c);
                KeyOutput::commit(text)
            }
            None => KeyOutput::swallow(),
        }
    }

    fn apply_replace(
        &mut self,
        host: &mut dyn Host,
        delete_backward: usize,
        replacement: &[ThaiChar],
    ) -> KeyOutput {
        if delete_backward > 0 && !self.context.can_edit_committed() {
            log::debug!("Cannot edit committed text, rejecting correction");
            return KeyOutput::swallow();
        }
        let text = match self.codec.encode(replacement) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to encode replacement: {}", e);
                return KeyOutput::swallow();
            }
        };

        if delete_backward > 0 {
            host.delete_surrounding_text(-(delete_backward as isize), delete_backward);
        }
        log::debug!("Replace {} chars with: {}", delete_backward, text);
        host.commit_text(&text);
        self.window.reseed(replacement);

        if delete_backward > 0 {
            KeyOutput::delete_and_commit(delete_backward, text)
        } else {
            KeyOutput::commit(text)
        }
    }

    fn commit(&self, host: &mut dyn Host, chars: &[ThaiChar]) -> Option<String> {
        match self.codec.encode(chars) {
            Ok(text) if !text.is_empty() => {
                log::debug!("Commit String: {}", text);
                host.commit_text(&text);
                Some(text)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("Failed to commit {:?}: {}", chars, e);
                None
            }
        }
    }
}
