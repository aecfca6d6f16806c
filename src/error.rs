use thiserror::Error;

/// Errors returned by [`crate::SuffixIndex`] construction.
///
/// Search never errors: an empty pattern simply yields an empty result, and
/// any non-empty pattern is looked up against an already-built index.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SuffixArrayError {
    /// The input text is longer than [`crate::MAX_LENGTH`], so its positions
    /// (and the sentinel-terminated length) would not fit in the index's
    /// `u32` position width.
    #[error("text of length {len} exceeds the maximum supported length {max}")]
    TooLong { len: usize, max: usize },
}
