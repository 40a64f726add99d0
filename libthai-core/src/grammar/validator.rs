//! Accept / reject / replace decisions for a new character

use crate::types::ThaiChar;
use super::cell::Cell;
use super::rules::{composes, is_accept, Strictness};

/// Outcome of validating one keystroke against the open cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Append the new character as typed
    Accept,
    /// Drop the keystroke
    Reject,
    /// Delete `delete_backward` committed characters, then commit `replacement`
    Replace {
        delete_backward: usize,
        replacement: Vec<ThaiChar>,
    },
}

impl ValidationResult {
    fn replace(delete_backward: usize, replacement: Vec<ThaiChar>) -> Self {
        ValidationResult::Replace {
            delete_backward,
            replacement,
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, ValidationResult::Accept)
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, ValidationResult::Reject)
    }
}

/// Decides what to do with `c` typed after `cell`.
///
/// Only `Strict` produces `Replace`, and a replacement never deletes more
/// characters than the cell holds.
pub fn validate(cell: &Cell, c: ThaiChar, strictness: Strictness) -> ValidationResult {
    if strictness == Strictness::Passthrough {
        return ValidationResult::Accept;
    }

    let previous = cell.last_char().unwrap_or(ThaiChar::NUL);
    if is_accept(previous, c, strictness) {
        return ValidationResult::Accept;
    }

    if strictness != Strictness::Strict {
        return ValidationResult::Reject;
    }

    reorder_cell(cell, c).unwrap_or(ValidationResult::Reject)
}

/// Cluster reflow: rewrite the tail of the cell so `c` lands in its slot.
fn reorder_cell(cell: &Cell, c: ThaiChar) -> Option<ValidationResult> {
    let base = cell.base().filter(|b| b.is_consonant())?;

    if c.is_combining_vowel() {
        if cell.am().is_some() || !composes(base, c) {
            return None;
        }
        return match (cell.vowel(), cell.tone()) {
            // Tone typed first: the vowel goes under it
            (None, Some(tone)) if composes(c, tone) => {
                Some(ValidationResult::replace(1, vec![c, tone]))
            }
            // Different vowel: swap it, only if the tone still fits on top
            (Some(old), None) if old != c => Some(ValidationResult::replace(1, vec![c])),
            (Some(old), Some(tone)) if old != c && composes(c, tone) => {
                Some(ValidationResult::replace(2, vec![c, tone]))
            }
            _ => None,
        };
    }

    if c.is_top_mark() {
        let carrier = cell.vowel().unwrap_or(base);
        if !composes(carrier, c) {
            return None;
        }
        return match (cell.tone(), cell.am()) {
            // Tone typed after SARA AM belongs before it
            (None, Some(am)) => Some(ValidationResult::replace(1, vec![c, am])),
            // Different tone replaces the old one
            (Some(old), am) if old != c => {
                let mut replacement = vec![c];
                let mut delete_backward = 1;
                if let Some(am) = am {
                    delete_backward += 1;
                    replacement.push(am);
                }
                Some(ValidationResult::replace(delete_backward, replacement))
            }
            _ => None,
        };
    }

    None
}
