//! Shared pieces of the in-memory appointment and todo stores.

use thiserror::Error;

/// Maximum stored description length, in characters. Longer input is
/// clipped silently at construction time.
pub const MAX_DESCRIPTION_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} is out of range (store holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Clips a description to [`MAX_DESCRIPTION_LEN`] characters on a char
/// boundary.
pub fn clip_description(text: &str) -> String {
    match text.char_indices().nth(MAX_DESCRIPTION_LEN) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
