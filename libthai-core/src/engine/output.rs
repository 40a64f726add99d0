//! What a keystroke did to the host

/// Result of processing a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutput {
    /// The host must not run its default handling for a consumed key
    pub consumed: bool,
    /// Edit applied to the host buffer
    pub action: EditAction,
}

/// Edits the session can apply through the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// No text change
    None,
    /// Insert text at cursor
    Commit(String),
    /// Delete characters before the cursor, then insert text
    DeleteAndCommit(usize, String),
}

impl KeyOutput {
    /// Key left for the host's default handling
    pub fn pass() -> Self {
        Self {
            consumed: false,
            action: EditAction::None,
        }
    }

    /// Key swallowed without changing the text
    pub fn swallow() -> Self {
        Self {
            consumed: true,
            action: EditAction::None,
        }
    }

    pub fn commit(text: String) -> Self {
        Self {
            consumed: true,
            action: EditAction::Commit(text),
        }
    }

    pub fn delete_and_commit(delete_count: usize, text: String) -> Self {
        Self {
            consumed: true,
            action: EditAction::DeleteAndCommit(delete_count, text),
        }
    }

    /// Text committed by this key, if any
    pub fn committed(&self) -> Option<&str> {
        match &self.action {
            EditAction::None => None,
            EditAction::Commit(text) | EditAction::DeleteAndCommit(_, text) => Some(text),
        }
    }
}
