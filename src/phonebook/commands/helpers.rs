use crate::error::{PhonebookError, Result};

/// Converts a 1-based position into a vector index, if it addresses one of `len` entries.
pub fn resolve_position(position: i64, len: usize) -> Result<usize> {
    usize::try_from(position)
        .ok()
        .filter(|p| (1..=len).contains(p))
        .map(|p| p - 1)
        .ok_or(PhonebookError::InvalidPosition { position, len })
}
