//! libthai engine - keystroke processing
//!
//! A [`ThaiEngine`] owns the configuration and hands out one
//! [`ThaiSession`] per focused text field. Sessions map key events to Thai
//! characters and validate them against the text already typed.

mod engine;
mod input;
mod output;
mod session;

pub mod host;
pub mod window;

pub use engine::ThaiEngine;
pub use host::{ContextSource, Host, HostSurroundingText, LocalWindow, SurroundingText, TextBufferHost};
pub use input::{KeyEvent, ModifierState};
pub use output::{EditAction, KeyOutput};
pub use session::ThaiSession;
pub use window::RecentCharWindow;

// Re-export error types
pub use crate::error::{Error, Result};
