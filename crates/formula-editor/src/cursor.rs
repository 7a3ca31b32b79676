use serde::{Deserialize, Serialize};

use crate::mapping::ExternInternMapping;

/// How a cursor placement was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    /// Plain tap/click: move the cursor, drop any selection.
    Single,
    /// Double tap/click: move the cursor and select the token or group under it.
    Double,
}

/// Where the extern cursor sits relative to its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorTokenPosition {
    Left,
    Middle,
    Right,
}

/// The token the cursor is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorToken {
    pub index: usize,
    pub position: CursorTokenPosition,
}

/// Attach the extern cursor `offset` to a token.
///
/// A cursor on the first char of a token sits left of it, on any later char in the middle.
/// A cursor on a separator belongs to the token just before it, looking back at most two chars so
/// a cursor after a trailing separator still finds its token.
pub fn resolve_cursor_token(mapping: &ExternInternMapping, offset: usize) -> Option<CursorToken> {
    let before = |back: usize| offset.checked_sub(back).and_then(|i| mapping.intern_index_at(i));

    if let Some(index) = mapping.intern_index_at(offset) {
        let position = if before(1) == Some(index) {
            CursorTokenPosition::Middle
        } else {
            CursorTokenPosition::Left
        };
        return Some(CursorToken { index, position });
    }

    let index = before(1).or_else(|| before(2))?;
    Some(CursorToken {
        index,
        position: CursorTokenPosition::Right,
    })
}
