use std::collections::VecDeque;

use crate::types::ThaiChar;

/// The last few characters committed by a session.
///
/// Used as composition context when the host cannot report the text around
/// the cursor. Holds at most [`CAPACITY`](Self::CAPACITY) characters, oldest
/// first.
#[derive(Debug, Clone, Default)]
pub struct RecentCharWindow {
    chars: VecDeque<ThaiChar>,
}

impl RecentCharWindow {
    pub const CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self {
            chars: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Appends `c`, evicting the oldest character when full
    pub fn push(&mut self, c: ThaiChar) {
        if self.chars.len() == Self::CAPACITY {
            self.chars.pop_front();
        }
        self.chars.push_back(c);
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Replaces the contents with the tail of `chars`
    pub fn reseed(&mut self, chars: &[ThaiChar]) {
        self.clear();
        for &c in chars {
            self.push(c);
        }
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<ThaiChar> {
        self.chars.iter().copied().collect()
    }

    pub fn last(&self) -> Option<ThaiChar> {
        self.chars.back().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
