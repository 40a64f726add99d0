//! Thai cell grammar: composition rules, cell reconstruction, validation

pub mod cell;
pub mod rules;
pub mod validator;

pub use cell::{derive_cell, Cell, Slot};
pub use rules::{composes, is_accept, sequence_op, SequenceOp, Strictness};
pub use validator::{validate, ValidationResult};
