//! WTT 2.0 input sequence rules
//!
//! The table is indexed `[previous class][new class]` and tells whether the
//! new character composes into the previous cell, starts a new one, or is
//! refused. `SR` entries are refused only in strict mode.

use crate::types::{CharClass, ThaiChar};

/// Action for a pair of adjacent characters
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOp {
    /// Composes into the same display cell
    CP,
    /// Non-display character
    XC,
    /// Accepted, starts the next cell
    AC,
    /// Rejected
    RJ,
    /// Rejected in strict mode only
    SR,
}

/// Strictness of grammar enforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Never rejects
    Passthrough,
    /// Rejects sequences the composition table forbids
    #[default]
    BasicCheck,
    /// Also rejects strict-only sequences and may reorder a cell
    Strict,
}

use SequenceOp::*;

#[rustfmt::skip]
static SEQUENCE_TABLE: [[SequenceOp; CharClass::COUNT]; CharClass::COUNT] = [
    //         CTRL NON CONS LV  FV1 FV2 FV3 BV1 BV2 BD  TONE AD1 AD2 AD3 AV1 AV2 AV3
    /* CTRL */ [XC, AC, AC,  AC, AC, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* NON  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* CONS */ [XC, AC, AC,  AC, AC, SR, AC, CP, CP, CP, CP,  CP, CP, CP, CP, CP, CP],
    /* LV   */ [XC, SR, AC,  SR, SR, SR, SR, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* FV1  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* FV2  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* FV3  */ [XC, AC, SR,  AC, SR, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* BV1  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, CP,  CP, RJ, RJ, RJ, RJ, RJ],
    /* BV2  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, CP,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* BD   */ [XC, AC, AC,  AC, AC, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* TONE */ [XC, AC, AC,  AC, AC, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* AD1  */ [XC, AC, AC,  AC, AC, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* AD2  */ [XC, AC, AC,  AC, AC, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* AD3  */ [XC, AC, AC,  AC, AC, AC, AC, RJ, RJ, RJ, RJ,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* AV1  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, CP,  CP, RJ, RJ, RJ, RJ, RJ],
    /* AV2  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, CP,  RJ, RJ, RJ, RJ, RJ, RJ],
    /* AV3  */ [XC, AC, AC,  AC, AC, SR, AC, RJ, RJ, RJ, CP,  RJ, CP, RJ, RJ, RJ, RJ],
];

/// Orthographic restriction enforced only in strict mode
#[derive(Debug)]
pub struct StrictRule {
    pub description: &'static str,
    pub previous: &'static [CharClass],
    pub next: &'static [CharClass],
}

pub static STRICT_RULES: &[StrictRule] = &[
    StrictRule {
        description: "following vowel directly after an above or below vowel",
        previous: &[
            CharClass::Av1,
            CharClass::Av2,
            CharClass::Av3,
            CharClass::Bv1,
            CharClass::Bv2,
            CharClass::Bd,
        ],
        next: &[CharClass::Fv1],
    },
    StrictRule {
        description: "following vowel after a non-Thai character",
        previous: &[CharClass::Non],
        next: &[CharClass::Fv1],
    },
];

impl StrictRule {
    pub fn matches(&self, previous: ThaiChar, next: ThaiChar) -> bool {
        self.previous.contains(&previous.class()) && self.next.contains(&next.class())
    }
}

/// Table action for `next` typed after `previous`
pub fn sequence_op(previous: ThaiChar, next: ThaiChar) -> SequenceOp {
    SEQUENCE_TABLE[previous.class().index()][next.class().index()]
}

/// Whether `next` stacks onto `previous` in the same cell
pub fn composes(previous: ThaiChar, next: ThaiChar) -> bool {
    sequence_op(previous, next) == CP
}

/// Accept check for a single pair of characters
pub fn is_accept(previous: ThaiChar, next: ThaiChar, strictness: Strictness) -> bool {
    match strictness {
        Strictness::Passthrough => true,
        Strictness::BasicCheck => sequence_op(previous, next) != RJ,
        Strictness::Strict => {
            let op = sequence_op(previous, next);
            op != RJ
                && op != SR
                && !STRICT_RULES.iter().any(|rule| rule.matches(previous, next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tis;

    #[test]
    fn test_basic_sequences() {
        assert_eq!(sequence_op(tis('ก'), tis('่')), CP);
        assert_eq!(sequence_op(tis('ก'), tis('ข')), AC);
        assert_eq!(sequence_op(tis('่'), tis('้')), RJ);
        assert_eq!(sequence_op(tis('่'), tis('ิ')), RJ);
        assert_eq!(sequence_op(tis('ิ'), tis('่')), CP);
        assert_eq!(sequence_op(ThaiChar::NUL, tis('่')), RJ);
        assert_eq!(sequence_op(tis('เ'), tis('เ')), SR);
    }

    #[test]
    fn test_strictness_levels() {
        let lv = tis('เ');
        assert!(is_accept(lv, lv, Strictness::Passthrough));
        assert!(is_accept(lv, lv, Strictness::BasicCheck));
        assert!(!is_accept(lv, lv, Strictness::Strict));

        assert!(is_accept(tis('่'), tis('้'), Strictness::Passthrough));
        assert!(!is_accept(tis('่'), tis('้'), Strictness::BasicCheck));
    }

    #[test]
    fn test_strict_rules() {
        // กิา: a following vowel cannot sit after an above vowel
        assert!(is_accept(tis('ิ'), tis('า'), Strictness::BasicCheck));
        assert!(!is_accept(tis('ิ'), tis('า'), Strictness::Strict));
        assert!(!is_accept(tis('1'), tis('ะ'), Strictness::Strict));
        // Unknown context is not evidence of a missing base
        assert!(is_accept(ThaiChar::NUL, tis('า'), Strictness::Strict));
        assert!(is_accept(ThaiChar::NUL, tis('ำ'), Strictness::Strict));
        // เกาะ stays legal
        assert!(is_accept(tis('า'), tis('ะ'), Strictness::Strict));
        assert!(is_accept(tis('่'), tis('ำ'), Strictness::Strict));
    }
}
