//! libthai-core: Thai keystroke validation and correction
//!
//! Maps hardware keycodes to Thai characters through a keyboard layout,
//! checks each new character against the cell being composed and, in strict
//! mode, reorders vowels and tone marks typed out of order.

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod grammar;
pub mod keymap;
pub mod types;

pub use types::*;

// Re-export commonly used types
pub use codec::{CodecError, Tis620, Transcoder};
pub use config::{ConfigError, ConfigPatch, EngineConfig, SharedConfig};
pub use engine::{EditAction, Host, KeyEvent, KeyOutput, ModifierState, TextBufferHost, ThaiEngine, ThaiSession};
pub use error::{Error, Result};
pub use grammar::{Strictness, ValidationResult};
pub use keymap::{KeyboardLayout, ShiftLevel};
