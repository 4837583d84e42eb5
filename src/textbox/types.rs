//! Key values understood by the text box editor

use std::str::FromStr;

use crate::error::FormatError;

/// A single keystroke: cursor navigation or literal character insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the cursor one position left
    Left,
    /// Move the cursor one position right
    Right,
    /// Insert the character immediately before the cursor
    Insert(char),
}

impl FromStr for Key {
    type Err = FormatError;

    /// `"left"` and `"right"` are reserved navigation keywords; any other
    /// single-character string inserts that character. Longer strings are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Insert(c)),
                    _ => Err(FormatError::InvalidKey { key: s.to_string() }),
                }
            }
        }
    }
}
