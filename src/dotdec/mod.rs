//! Dot-decimal notation parsing

mod parser;

#[cfg(test)]
mod parser_tests;

pub use parser::*;
