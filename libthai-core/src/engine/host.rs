//! The text field a session types into

use crate::codec::{Tis620, Transcoder};
use crate::types::ThaiChar;

use super::window::RecentCharWindow;

/// Text around the cursor as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurroundingText {
    pub text: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl SurroundingText {
    /// Up to `limit` characters immediately before the cursor
    pub fn before_cursor(&self, limit: usize) -> &str {
        let cursor = self.cursor.min(self.text.chars().count());
        let start = cursor.saturating_sub(limit);
        let byte_at = |n: usize| {
            self.text
                .char_indices()
                .nth(n)
                .map_or(self.text.len(), |(i, _)| i)
        };
        &self.text[byte_at(start)..byte_at(cursor)]
    }
}

/// Operations a session needs from the focused text field.
pub trait Host {
    /// Whether the host can report and edit text around the cursor
    fn supports_surrounding_text(&self) -> bool;

    fn surrounding_text(&self) -> Option<SurroundingText>;

    /// Deletes `len` characters starting `offset` characters from the cursor
    fn delete_surrounding_text(&mut self, offset: isize, len: usize);

    fn commit_text(&mut self, text: &str);
}

/// Where a session reads the characters before the cursor from.
pub trait ContextSource: Send + std::fmt::Debug {
    /// Trailing context, oldest first, at most `limit` characters
    fn context(&self, host: &dyn Host, window: &RecentCharWindow, limit: usize) -> Vec<ThaiChar>;

    /// Whether committed text can be deleted to apply a correction
    fn can_edit_committed(&self) -> bool;
}

/// Context read from the host's surrounding text
#[derive(Debug, Default)]
pub struct HostSurroundingText {
    codec: Tis620,
}

impl ContextSource for HostSurroundingText {
    fn context(&self, host: &dyn Host, _window: &RecentCharWindow, limit: usize) -> Vec<ThaiChar> {
        let Some(surrounding) = host.surrounding_text() else {
            return Vec::new();
        };
        let text = surrounding.before_cursor(limit);
        log::debug!("Surrounding text is: {:?}", text);
        match self.codec.decode(text) {
            Ok(chars) => chars,
            Err(e) => {
                log::debug!("Treating context as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn can_edit_committed(&self) -> bool {
        true
    }
}

/// Context kept by the session itself
#[derive(Debug, Default)]
pub struct LocalWindow;

impl ContextSource for LocalWindow {
    fn context(&self, _host: &dyn Host, window: &RecentCharWindow, limit: usize) -> Vec<ThaiChar> {
        let chars = window.snapshot();
        let start = chars.len().saturating_sub(limit);
        chars[start..].to_vec()
    }

    fn can_edit_committed(&self) -> bool {
        false
    }
}

/// Picks the context source matching what the host can do
pub fn context_source_for(host: &dyn Host) -> Box<dyn ContextSource> {
    if host.supports_surrounding_text() {
        Box::new(HostSurroundingText::default())
    } else {
        Box::new(LocalWindow)
    }
}

/// An in-memory text field.
///
/// Keeps the whole buffer and a cursor, and records every commit so callers
/// can inspect what a session did.
#[derive(Debug, Clone)]
pub struct TextBufferHost {
    text: Vec<char>,
    cursor: usize,
    surrounding_text: bool,
    commits: Vec<String>,
}

impl Default for TextBufferHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBufferHost {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            cursor: 0,
            surrounding_text: true,
            commits: Vec::new(),
        }
    }

    /// A host that cannot report surrounding text
    pub fn without_surrounding_text() -> Self {
        Self {
            surrounding_text: false,
            ..Self::new()
        }
    }

    /// Buffer holding `text` with the cursor at its end
    pub fn with_text(text: &str) -> Self {
        let mut host = Self::new();
        host.text = text.chars().collect();
        host.cursor = host.text.len();
        host
    }

    pub fn set_supports_surrounding_text(&mut self, enabled: bool) {
        self.surrounding_text = enabled;
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.len());
    }

    pub fn commits(&self) -> &[String] {
        &self.commits
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.commits.clear();
    }
}

impl Host for TextBufferHost {
    fn supports_surrounding_text(&self) -> bool {
        self.surrounding_text
    }

    fn surrounding_text(&self) -> Option<SurroundingText> {
        self.surrounding_text.then(|| SurroundingText {
            text: self.text(),
            cursor: self.cursor,
        })
    }

    fn delete_surrounding_text(&mut self, offset: isize, len: usize) {
        let start = (self.cursor as isize + offset).clamp(0, self.text.len() as isize) as usize;
        let end = (start + len).min(self.text.len());
        self.text.drain(start..end);
        if self.cursor > start {
            self.cursor = start + self.cursor.saturating_sub(end);
        }
    }

    fn commit_text(&mut self, text: &str) {
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.text.splice(self.cursor..self.cursor, inserted);
        self.cursor += count;
        self.commits.push(text.to_string());
    }
}
