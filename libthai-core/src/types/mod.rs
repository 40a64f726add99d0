pub mod keysyms;
pub mod thai_char;

pub use keysyms::*;
pub use thai_char::*;
