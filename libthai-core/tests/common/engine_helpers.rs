//! Helpers for driving a session against an in-memory text field

use libthai_core::engine::KeyOutput;
use libthai_core::grammar::Strictness;
use libthai_core::{EngineConfig, KeyEvent, KeyboardLayout, TextBufferHost, ThaiEngine, ThaiSession};

/// An engine, one session and the text field it types into
pub struct Harness {
    pub engine: ThaiEngine,
    pub session: ThaiSession,
    pub host: TextBufferHost,
}

impl Harness {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_host(config, TextBufferHost::new())
    }

    pub fn with_host(config: EngineConfig, host: TextBufferHost) -> Self {
        let engine = ThaiEngine::new(config);
        let session = engine.create_session(&host);
        Self {
            engine,
            session,
            host,
        }
    }

    pub fn key(&mut self, event: KeyEvent) -> KeyOutput {
        self.session.on_key_event(&mut self.host, &event)
    }

    /// Presses each host keycode in turn
    pub fn type_keys(&mut self, keycodes: &[u16]) -> Vec<KeyOutput> {
        keycodes.iter().map(|&k| self.key(super::press(k))).collect()
    }

    pub fn text(&self) -> String {
        self.host.text()
    }
}

pub fn config(layout: KeyboardLayout, correction: bool, strictness: Strictness) -> EngineConfig {
    EngineConfig {
        keyboard_layout: layout,
        correction,
        strictness,
    }
}

pub fn strict() -> EngineConfig {
    config(KeyboardLayout::Ketmanee, true, Strictness::Strict)
}
