//! Thai characters in the TIS-620 code page and their WTT 2.0 classes

use std::fmt;

/// A single character in the 8-bit TIS-620 code page.
///
/// Bytes below 0x80 are ASCII. Thai glyphs live in 0xA1..=0xFB.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ThaiChar(pub u8);

/// WTT 2.0 character classes used by the composition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Control characters and undefined code points
    Ctrl = 0,
    /// Non-composing characters (ASCII, digits, signs)
    Non = 1,
    /// Consonants
    Cons = 2,
    /// Leading vowels (เ แ โ ใ ไ)
    Lv = 3,
    /// Following vowels ะ า ำ
    Fv1 = 4,
    /// Following vowel ๅ
    Fv2 = 5,
    /// Vowel consonants ฤ ฦ
    Fv3 = 6,
    /// Below vowel ุ
    Bv1 = 7,
    /// Below vowel ู
    Bv2 = 8,
    /// Below diacritic ฺ
    Bd = 9,
    /// Tone marks
    Tone = 10,
    /// Above diacritics ์ ํ
    Ad1 = 11,
    /// Above diacritic ็
    Ad2 = 12,
    /// Above diacritic ๎
    Ad3 = 13,
    /// Above vowel ิ
    Av1 = 14,
    /// Above vowels ั ึ
    Av2 = 15,
    /// Above vowels ี ื
    Av3 = 16,
}

impl CharClass {
    pub const COUNT: usize = 17;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Vertical placement of a character inside a display cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharLevel {
    Base,
    Below,
    Above,
    Top,
}

use CharClass::*;

static CLASS_TABLE: [CharClass; 256] = build_class_table();

const fn build_class_table() -> [CharClass; 256] {
    let mut table = [Ctrl; 256];
    let mut i = 0x20;
    while i < 0x7F {
        table[i] = Non;
        i += 1;
    }
    table[0xA0] = Non;
    i = 0xA1;
    while i <= 0xCE {
        table[i] = Cons;
        i += 1;
    }
    table[0xC4] = Fv3;
    table[0xC6] = Fv3;
    table[0xCF] = Non;
    table[0xD0] = Fv1;
    table[0xD1] = Av2;
    table[0xD2] = Fv1;
    table[0xD3] = Fv1;
    table[0xD4] = Av1;
    table[0xD5] = Av3;
    table[0xD6] = Av2;
    table[0xD7] = Av3;
    table[0xD8] = Bv1;
    table[0xD9] = Bv2;
    table[0xDA] = Bd;
    table[0xDF] = Non;
    i = 0xE0;
    while i <= 0xE4 {
        table[i] = Lv;
        i += 1;
    }
    table[0xE5] = Fv2;
    table[0xE6] = Non;
    table[0xE7] = Ad2;
    i = 0xE8;
    while i <= 0xEB {
        table[i] = Tone;
        i += 1;
    }
    table[0xEC] = Ad1;
    table[0xED] = Ad1;
    table[0xEE] = Ad3;
    i = 0xEF;
    while i <= 0xFB {
        table[i] = Non;
        i += 1;
    }
    table
}

/// Distance between a TIS-620 Thai byte and its Unicode code point
const UNICODE_OFFSET: u32 = 0x0E00 - 0xA0;

impl ThaiChar {
    /// The NUL character, used as "no previous character"
    pub const NUL: Self = Self(0);
    pub const SARA_AM: Self = Self(0xD3);
    pub const SARA_AA: Self = Self(0xD2);
    pub const NIKHAHIT: Self = Self(0xED);
    pub const THAI_DIGIT_ZERO: Self = Self(0xF0);

    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }

    pub fn class(self) -> CharClass {
        CLASS_TABLE[self.0 as usize]
    }

    pub fn level(self) -> CharLevel {
        match self.class() {
            Av1 | Av2 | Av3 => CharLevel::Above,
            Bv1 | Bv2 | Bd => CharLevel::Below,
            Tone | Ad1 | Ad2 | Ad3 => CharLevel::Top,
            _ => CharLevel::Base,
        }
    }

    pub fn is_consonant(self) -> bool {
        self.class() == Cons
    }

    pub fn is_sara_am(self) -> bool {
        self == Self::SARA_AM
    }

    /// Above or below vowel (including the below diacritic PHINTHU)
    pub fn is_combining_vowel(self) -> bool {
        matches!(self.level(), CharLevel::Above | CharLevel::Below)
    }

    pub fn is_top_mark(self) -> bool {
        self.level() == CharLevel::Top
    }

    /// Converts a Unicode character, returning `None` if TIS-620 has no slot for it.
    pub const fn from_char(ch: char) -> Option<Self> {
        let cp = ch as u32;
        if cp < 0x80 {
            return Some(Self(cp as u8));
        }
        if (cp >= 0x0E01 && cp <= 0x0E3A) || (cp >= 0x0E3F && cp <= 0x0E5B) {
            return Some(Self((cp - UNICODE_OFFSET) as u8));
        }
        None
    }

    /// The Unicode character for this byte, `None` for unmapped bytes.
    pub fn to_char(self) -> Option<char> {
        match self.0 {
            0x00..=0x7F => Some(self.0 as char),
            0xA1..=0xDA | 0xDF..=0xFB => char::from_u32(self.0 as u32 + UNICODE_OFFSET),
            _ => None,
        }
    }
}

impl fmt::Debug for ThaiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) if !ch.is_control() => write!(f, "ThaiChar({:#04X} '{}')", self.0, ch),
            _ => write!(f, "ThaiChar({:#04X})", self.0),
        }
    }
}

impl fmt::Display for ThaiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) => write!(f, "{}", ch),
            None => write!(f, "\\x{:02X}", self.0),
        }
    }
}

impl From<u8> for ThaiChar {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<ThaiChar> for u8 {
    fn from(c: ThaiChar) -> Self {
        c.0
    }
}

/// Builds a `ThaiChar` from a character literal known to be in the code page.
///
/// Characters outside TIS-620 become NUL; only use this on literals.
pub const fn tis(ch: char) -> ThaiChar {
    match ThaiChar::from_char(ch) {
        Some(c) => c,
        None => ThaiChar::NUL,
    }
}

/// Converts a string of characters known to be in the code page.
pub fn tis_str(s: &str) -> Vec<ThaiChar> {
    s.chars().filter_map(ThaiChar::from_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_mapping() {
        assert_eq!(ThaiChar::from_char('ก'), Some(ThaiChar(0xA1)));
        assert_eq!(ThaiChar::from_char('ฮ'), Some(ThaiChar(0xCE)));
        assert_eq!(ThaiChar::from_char('๛'), Some(ThaiChar(0xFB)));
        assert_eq!(ThaiChar::from_char('a'), Some(ThaiChar(b'a')));
        assert_eq!(ThaiChar::from_char('\u{0E3B}'), None);
        assert_eq!(ThaiChar::from_char('é'), None);
        assert_eq!(ThaiChar(0xD3).to_char(), Some('ำ'));
        assert_eq!(ThaiChar(0xDB).to_char(), None);
        assert_eq!(ThaiChar(0x90).to_char(), None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(tis('ก').class(), CharClass::Cons);
        assert_eq!(tis('ฤ').class(), CharClass::Fv3);
        assert_eq!(tis('เ').class(), CharClass::Lv);
        assert_eq!(tis('ำ').class(), CharClass::Fv1);
        assert_eq!(tis('ิ').class(), CharClass::Av1);
        assert_eq!(tis('ู').class(), CharClass::Bv2);
        assert_eq!(tis('่').class(), CharClass::Tone);
        assert_eq!(tis('์').class(), CharClass::Ad1);
        assert_eq!(tis('๑').class(), CharClass::Non);
        assert_eq!(ThaiChar::NUL.class(), CharClass::Ctrl);
    }

    #[test]
    fn test_levels() {
        assert_eq!(tis('ก').level(), CharLevel::Base);
        assert_eq!(tis('ี').level(), CharLevel::Above);
        assert_eq!(tis('ุ').level(), CharLevel::Below);
        assert_eq!(tis('๊').level(), CharLevel::Top);
        assert_eq!(tis('็').level(), CharLevel::Top);
        assert_eq!(tis('ำ').level(), CharLevel::Base);
    }
}
