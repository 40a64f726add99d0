//! Static keycode tables for the supported Thai layouts
//!
//! Rows are keyed by Linux evdev keycode and hold the character produced at
//! shift levels 0, 1 and 2. `'\0'` marks an empty cell.

use crate::types::{tis, ThaiChar};

/// Exclusive upper bound on the keycodes any table covers
pub const KEYCODE_LIMIT: usize = 64;

/// One physical key: evdev keycode plus the character at each shift level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRow {
    pub keycode: u16,
    pub levels: [ThaiChar; 3],
}

const fn row(keycode: u16, chars: [char; 3]) -> KeyRow {
    KeyRow {
        keycode,
        levels: [tis(chars[0]), tis(chars[1]), tis(chars[2])],
    }
}

/// A complete layout, with a dense index for constant-time lookup
#[derive(Debug)]
pub struct LayoutTable {
    rows: &'static [KeyRow],
    index: [[ThaiChar; 3]; KEYCODE_LIMIT],
}

impl LayoutTable {
    const fn new(rows: &'static [KeyRow]) -> Self {
        let mut index = [[ThaiChar::NUL; 3]; KEYCODE_LIMIT];
        let mut i = 0;
        while i < rows.len() {
            index[rows[i].keycode as usize] = rows[i].levels;
            i += 1;
        }
        Self { rows, index }
    }

    pub fn rows(&self) -> &'static [KeyRow] {
        self.rows
    }

    pub fn lookup(&self, keycode: u16, level: usize) -> Option<ThaiChar> {
        let levels = self.index.get(keycode as usize)?;
        match levels.get(level) {
            Some(&c) if c != ThaiChar::NUL => Some(c),
            _ => None,
        }
    }
}

const KETMANEE_ROWS: &[KeyRow] = &[
    // Number row
    row(41, ['_', '%', '\0']),
    row(2, ['ๅ', '+', '๑']),
    row(3, ['/', '๑', '๒']),
    row(4, ['-', '๒', '๓']),
    row(5, ['ภ', '๓', '๔']),
    row(6, ['ถ', '๔', '๕']),
    row(7, ['ุ', 'ู', '๖']),
    row(8, ['ึ', '฿', '๗']),
    row(9, ['ค', '๕', '๘']),
    row(10, ['ต', '๖', '๙']),
    row(11, ['จ', '๗', '๐']),
    row(12, ['ข', '๘', '\0']),
    row(13, ['ช', '๙', '\0']),
    // Top row
    row(16, ['ๆ', '๐', '\0']),
    row(17, ['ไ', '"', '\0']),
    row(18, ['ำ', 'ฎ', '\0']),
    row(19, ['พ', 'ฑ', '\0']),
    row(20, ['ะ', 'ธ', '\0']),
    row(21, ['ั', 'ํ', '\0']),
    row(22, ['ี', '๊', '\0']),
    row(23, ['ร', 'ณ', '\0']),
    row(24, ['น', 'ฯ', '\0']),
    row(25, ['ย', 'ญ', '\0']),
    row(26, ['บ', 'ฐ', '\0']),
    row(27, ['ล', ',', '\0']),
    row(43, ['ฃ', 'ฅ', '\0']),
    // Home row
    row(30, ['ฟ', 'ฤ', '\0']),
    row(31, ['ห', 'ฆ', '\0']),
    row(32, ['ก', 'ฏ', '\0']),
    row(33, ['ด', 'โ', '\0']),
    row(34, ['เ', 'ฌ', '\0']),
    row(35, ['้', '็', '\0']),
    row(36, ['่', '๋', '\0']),
    row(37, ['า', 'ษ', '\0']),
    row(38, ['ส', 'ศ', '\0']),
    row(39, ['ว', 'ซ', '\0']),
    row(40, ['ง', '.', '\0']),
    // Bottom row
    row(44, ['ผ', '(', '\0']),
    row(45, ['ป', ')', '\0']),
    row(46, ['แ', 'ฉ', '\0']),
    row(47, ['อ', 'ฮ', '\0']),
    row(48, ['ิ', 'ฺ', '\0']),
    row(49, ['ื', '์', '\0']),
    row(50, ['ท', '?', '\0']),
    row(51, ['ม', 'ฒ', '\0']),
    row(52, ['ใ', 'ฬ', '\0']),
    row(53, ['ฝ', 'ฦ', '\0']),
    row(57, [' ', ' ', ' ']),
];

// Ketmanee plus the extra signs TIS 820-2538 places on the third level
const TIS820_2538_ROWS: &[KeyRow] = &[
    row(41, ['_', '%', '๏']),
    row(2, ['ๅ', '+', '๑']),
    row(3, ['/', '๑', '๒']),
    row(4, ['-', '๒', '๓']),
    row(5, ['ภ', '๓', '๔']),
    row(6, ['ถ', '๔', '๕']),
    row(7, ['ุ', 'ู', '๖']),
    row(8, ['ึ', '฿', '๗']),
    row(9, ['ค', '๕', '๘']),
    row(10, ['ต', '๖', '๙']),
    row(11, ['จ', '๗', '๐']),
    row(12, ['ข', '๘', '๚']),
    row(13, ['ช', '๙', '๛']),
    row(16, ['ๆ', '๐', '\0']),
    row(17, ['ไ', '"', '\0']),
    row(18, ['ำ', 'ฎ', '\0']),
    row(19, ['พ', 'ฑ', '\0']),
    row(20, ['ะ', 'ธ', '\0']),
    row(21, ['ั', 'ํ', '\0']),
    row(22, ['ี', '๊', '\0']),
    row(23, ['ร', 'ณ', '\0']),
    row(24, ['น', 'ฯ', '\0']),
    row(25, ['ย', 'ญ', '\0']),
    row(26, ['บ', 'ฐ', '\0']),
    row(27, ['ล', ',', '\0']),
    row(43, ['ฃ', 'ฅ', '\0']),
    row(30, ['ฟ', 'ฤ', '\0']),
    row(31, ['ห', 'ฆ', '\0']),
    row(32, ['ก', 'ฏ', '\0']),
    row(33, ['ด', 'โ', '\0']),
    row(34, ['เ', 'ฌ', '\0']),
    row(35, ['้', '็', '๎']),
    row(36, ['่', '๋', '\0']),
    row(37, ['า', 'ษ', '\0']),
    row(38, ['ส', 'ศ', '\0']),
    row(39, ['ว', 'ซ', '\0']),
    row(40, ['ง', '.', '\0']),
    row(44, ['ผ', '(', '\0']),
    row(45, ['ป', ')', '\0']),
    row(46, ['แ', 'ฉ', '\0']),
    row(47, ['อ', 'ฮ', '\0']),
    row(48, ['ิ', 'ฺ', '\0']),
    row(49, ['ื', '์', '\0']),
    row(50, ['ท', '?', '\0']),
    row(51, ['ม', 'ฒ', '\0']),
    row(52, ['ใ', 'ฬ', '\0']),
    row(53, ['ฝ', 'ฦ', '\0']),
    row(57, [' ', ' ', ' ']),
];

const PATTACHOTE_ROWS: &[KeyRow] = &[
    row(41, ['_', '฿', '\0']),
    row(2, ['=', '+', '๑']),
    row(3, ['๒', '"', '๒']),
    row(4, ['๓', '/', '๓']),
    row(5, ['๔', ',', '๔']),
    row(6, ['๕', '?', '๕']),
    row(7, ['ู', 'ุ', '๖']),
    row(8, ['๗', '_', '๗']),
    row(9, ['๘', '.', '๘']),
    row(10, ['๙', '(', '๙']),
    row(11, ['๐', ')', '๐']),
    row(12, ['๑', '-', '\0']),
    row(13, ['๖', '%', '\0']),
    row(16, ['็', '๊', '\0']),
    row(17, ['ต', 'ฤ', '\0']),
    row(18, ['ย', 'ๆ', '\0']),
    row(19, ['อ', 'ญ', '\0']),
    row(20, ['ร', 'ษ', '\0']),
    row(21, ['่', 'ึ', '\0']),
    row(22, ['ด', 'ฝ', '\0']),
    row(23, ['ม', 'ซ', '\0']),
    row(24, ['ว', 'ถ', '\0']),
    row(25, ['แ', 'ฒ', '\0']),
    row(26, ['ใ', 'ฯ', '\0']),
    row(27, ['ฌ', 'ฦ', '\0']),
    row(43, ['ฃ', 'ฅ', '\0']),
    row(30, ['้', '๋', '\0']),
    row(31, ['ท', 'ธ', '\0']),
    row(32, ['ง', 'ำ', '\0']),
    row(33, ['ก', 'ณ', '\0']),
    row(34, ['ั', '์', '\0']),
    row(35, ['ี', 'ื', '\0']),
    row(36, ['า', 'ผ', '\0']),
    row(37, ['น', 'ช', '\0']),
    row(38, ['เ', 'โ', '\0']),
    row(39, ['ไ', 'ฆ', '\0']),
    row(40, ['ข', 'ฑ', '\0']),
    row(44, ['บ', 'ฎ', '\0']),
    row(45, ['ป', 'ฏ', '\0']),
    row(46, ['ล', 'ฐ', '\0']),
    row(47, ['ห', 'ภ', '\0']),
    row(48, ['ิ', 'ฺ', '\0']),
    row(49, ['ค', 'ศ', '\0']),
    row(50, ['ส', 'ฮ', '\0']),
    row(51, ['ะ', 'ฟ', '\0']),
    row(52, ['จ', 'ฉ', '\0']),
    row(53, ['พ', 'ฬ', '\0']),
    row(57, [' ', ' ', ' ']),
];

const MANOONCHAI_ROWS: &[KeyRow] = &[
    row(41, ['`', '~', '\0']),
    row(2, ['1', '!', '๑']),
    row(3, ['2', '@', '๒']),
    row(4, ['3', '#', '๓']),
    row(5, ['4', '$', '๔']),
    row(6, ['5', '%', '๕']),
    row(7, ['6', '^', '๖']),
    row(8, ['7', '&', '๗']),
    row(9, ['8', '*', '๘']),
    row(10, ['9', '(', '๙']),
    row(11, ['0', ')', '๐']),
    row(12, ['-', '_', '\0']),
    row(13, ['=', '+', '\0']),
    row(16, ['ใ', 'ฒ', '\0']),
    row(17, ['ต', 'ฏ', '\0']),
    row(18, ['ห', 'ซ', '\0']),
    row(19, ['ล', 'ญ', '\0']),
    row(20, ['ส', 'ฟ', '\0']),
    row(21, ['ป', 'ฉ', '\0']),
    row(22, ['ั', 'ึ', '\0']),
    row(23, ['ก', 'ธ', '\0']),
    row(24, ['ิ', 'ฐ', '\0']),
    row(25, ['บ', 'ฎ', '\0']),
    row(26, ['็', 'ฆ', '\0']),
    row(27, ['ฬ', 'ฑ', '\0']),
    row(43, ['ฯ', 'ฌ', '\0']),
    row(30, ['ง', 'ษ', '\0']),
    row(31, ['เ', 'ถ', '\0']),
    row(32, ['ร', 'แ', '\0']),
    row(33, ['น', 'ช', '\0']),
    row(34, ['ม', 'พ', '\0']),
    row(35, ['อ', 'ผ', '\0']),
    row(36, ['า', 'ำ', '\0']),
    row(37, ['่', 'ข', '\0']),
    row(38, ['้', 'โ', '\0']),
    row(39, ['ว', 'ภ', '\0']),
    row(40, ['ื', '"', '\0']),
    row(44, ['ุ', 'ฤ', '\0']),
    row(45, ['ไ', 'ฝ', '\0']),
    row(46, ['ท', 'ๆ', '\0']),
    row(47, ['ย', 'ณ', '\0']),
    row(48, ['จ', '๊', '\0']),
    row(49, ['ค', '๋', '\0']),
    row(50, ['ี', '์', '\0']),
    row(51, ['ด', 'ศ', '\0']),
    row(52, ['ะ', 'ฮ', '\0']),
    row(53, ['ู', '?', '\0']),
    row(57, [' ', ' ', ' ']),
];

pub static KETMANEE: LayoutTable = LayoutTable::new(KETMANEE_ROWS);
pub static PATTACHOTE: LayoutTable = LayoutTable::new(PATTACHOTE_ROWS);
pub static TIS820_2538: LayoutTable = LayoutTable::new(TIS820_2538_ROWS);
pub static MANOONCHAI: LayoutTable = LayoutTable::new(MANOONCHAI_ROWS);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_tables() -> [(&'static str, &'static LayoutTable); 4] {
        [
            ("ketmanee", &KETMANEE),
            ("pattachote", &PATTACHOTE),
            ("tis820", &TIS820_2538),
            ("manoonchai", &MANOONCHAI),
        ]
    }

    #[test]
    fn test_rows_have_unique_keycodes_in_range() {
        for (name, table) in all_tables() {
            let mut seen = HashSet::new();
            for row in table.rows() {
                assert!((row.keycode as usize) < KEYCODE_LIMIT, "{}: {}", name, row.keycode);
                assert!(seen.insert(row.keycode), "{}: duplicate keycode {}", name, row.keycode);
            }
        }
    }

    #[test]
    fn test_every_cell_is_in_the_code_page() {
        // A literal outside TIS-620 would silently turn into NUL; level 0 must
        // always be populated, so a NUL there means a bad literal.
        for (name, table) in all_tables() {
            for row in table.rows() {
                assert_ne!(row.levels[0], ThaiChar::NUL, "{}: keycode {}", name, row.keycode);
            }
        }
    }

    #[test]
    fn test_index_agrees_with_rows() {
        for (_, table) in all_tables() {
            for row in table.rows() {
                for level in 0..3 {
                    let expected = Some(row.levels[level]).filter(|c| *c != ThaiChar::NUL);
                    assert_eq!(table.lookup(row.keycode, level), expected);
                }
            }
        }
    }
}
