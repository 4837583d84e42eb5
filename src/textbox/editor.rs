//! Cursor-annotated text box editing

use crate::error::FormatError;

use super::types::Key;

/// Character marking the cursor position inside a text box state
pub const CURSOR_MARKER: char = '|';

/// Apply one keystroke to a text box state, returning the new state.
///
/// A state is the text left of the cursor, the marker, then the text right of
/// it, e.g. `"abc|def"`. Navigation moves one character across the marker and
/// is a no-op when the cursor is already at that end; insertion appends to the
/// left segment. A state without exactly one marker is malformed.
pub fn apply(state: &str, key: Key) -> Result<String, FormatError> {
    let (left, right) = split_at_cursor(state)?;

    let next = match key {
        Key::Left => match left.chars().next_back() {
            Some(c) => {
                // Moved char becomes the first char right of the cursor
                let kept = &left[..left.len() - c.len_utf8()];
                format!("{}{}{}{}", kept, CURSOR_MARKER, c, right)
            }
            None => state.to_string(),
        },
        Key::Right => match right.chars().next() {
            Some(c) => {
                let rest = &right[c.len_utf8()..];
                format!("{}{}{}{}", left, c, CURSOR_MARKER, rest)
            }
            None => state.to_string(),
        },
        Key::Insert(c) => format!("{}{}{}{}", left, c, CURSOR_MARKER, right),
    };

    Ok(next)
}

/// Split a state into the text before and after its single cursor marker
fn split_at_cursor(state: &str) -> Result<(&str, &str), FormatError> {
    let mut markers = state.match_indices(CURSOR_MARKER);
    let pos = match markers.next() {
        Some((pos, _)) => pos,
        None => return Err(FormatError::CursorMarker { found: 0 }),
    };
    if markers.next().is_some() {
        return Err(FormatError::CursorMarker {
            found: state.matches(CURSOR_MARKER).count(),
        });
    }
    Ok((&state[..pos], &state[pos + CURSOR_MARKER.len_utf8()..]))
}
