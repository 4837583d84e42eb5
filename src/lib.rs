//! Dot-decimal notation parsing and a cursor-annotated text box editor
//!
//! Two independent, stateless components: [`dotdec`] parses dot-delimited
//! integer strings and validates IPv4 candidates, and [`textbox`] applies a
//! single keystroke to a cursor-annotated string. Every operation is a pure
//! function over its string input.

pub mod dotdec;
pub mod error;
pub mod textbox;

pub use error::FormatError;
