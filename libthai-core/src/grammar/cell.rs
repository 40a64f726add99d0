//! Composition cells and their reconstruction from recent characters

use crate::types::{CharLevel, ThaiChar};
use super::rules::composes;

/// Position of a character inside a cell, in orthographic order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Consonant, or a standalone non-clustering character
    Base = 0,
    /// Above or below vowel
    Vowel = 1,
    /// Tone mark or top diacritic
    Tone = 2,
    /// SARA AM
    Am = 3,
}

impl Slot {
    pub fn of(c: ThaiChar) -> Slot {
        if c.is_sara_am() {
            return Slot::Am;
        }
        match c.level() {
            CharLevel::Above | CharLevel::Below => Slot::Vowel,
            CharLevel::Top => Slot::Tone,
            CharLevel::Base => Slot::Base,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One composition unit: up to four characters stacked on a base.
///
/// `active` is the slot filled by the most recently typed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    slots: [Option<ThaiChar>; Cell::CAPACITY],
    active: Option<Slot>,
}

impl Cell {
    pub const CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<ThaiChar> {
        self.slots[slot.index()]
    }

    pub fn base(&self) -> Option<ThaiChar> {
        self.get(Slot::Base)
    }

    pub fn vowel(&self) -> Option<ThaiChar> {
        self.get(Slot::Vowel)
    }

    pub fn tone(&self) -> Option<ThaiChar> {
        self.get(Slot::Tone)
    }

    pub fn am(&self) -> Option<ThaiChar> {
        self.get(Slot::Am)
    }

    pub fn active(&self) -> Option<Slot> {
        self.active
    }

    /// The most recently typed character of the cell
    pub fn last_char(&self) -> Option<ThaiChar> {
        self.active.and_then(|slot| self.get(slot))
    }

    /// Number of filled slots, which is also the number of trailing
    /// characters the cell spans in committed text.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    pub fn has_consonant_base(&self) -> bool {
        self.base().is_some_and(ThaiChar::is_consonant)
    }

    /// Characters in orthographic (typing) order
    pub fn chars(&self) -> impl Iterator<Item = ThaiChar> + '_ {
        self.slots.iter().flatten().copied()
    }

    fn set(&mut self, slot: Slot, c: ThaiChar) {
        self.slots[slot.index()] = Some(c);
    }
}

/// Rebuilds the open cell from the last `up_to` characters of `window`.
///
/// Walks backward from the newest character. An earlier character joins only
/// if it belongs to a slot before every slot filled so far and stacks with
/// the character after it; a base character closes the cell.
pub fn derive_cell(window: &[ThaiChar], up_to: usize) -> Cell {
    let take = up_to.min(Cell::CAPACITY).min(window.len());
    let tail = &window[window.len() - take..];

    let mut cell = Cell::new();
    let mut chars = tail.iter().rev().copied();
    let Some(last) = chars.next() else {
        return cell;
    };

    let mut lowest = Slot::of(last);
    cell.set(lowest, last);
    cell.active = Some(lowest);

    let mut after = last;
    for c in chars {
        if lowest == Slot::Base {
            break;
        }
        let slot = Slot::of(c);
        if slot >= lowest {
            break;
        }
        let joins = if after.is_sara_am() {
            c.is_consonant() || c.is_top_mark()
        } else {
            composes(c, after)
        };
        if !joins {
            break;
        }
        cell.set(slot, c);
        lowest = slot;
        after = c;
    }

    cell
}
