//! Suffix array construction and LCP-accelerated searching for indexing
//! small or median sized binary data in memory.
//!
//! The construction algorithm is SA-IS as described in
//! [Two Efficient Algorithms for Linear Time Suffix Array
//! Construction](https://ieeexplore.ieee.org/document/5582081). On top of
//! the plain suffix array, this crate builds an *enhanced* LCP array — the
//! usual adjacent-suffix LCP values from Kasai's algorithm, plus a sparse
//! table of range minima over exactly the intervals a Manber-Myers binary
//! search bisects — so that repeated pattern searches against the same text
//! run in `O(m log n)` character comparisons instead of `O(m log n)` *plus*
//! redundant re-comparison of already-known prefixes.

mod bucket;
mod encode;
mod error;
mod lcp;
mod sais;
mod search;
mod types;

#[cfg(test)]
mod fuzz;

pub use error::SuffixArrayError;
pub use encode::MAX_LENGTH;

use lcp::EnhancedLcp;

/// A text indexed for suffix and substring search.
///
/// Construction is `O(n)` (SA-IS); each [`search`](SuffixIndex::search) call
/// is `O(m log n)` where `m` is the pattern length, independent of how many
/// occurrences are found — [`expand`](search) only walks exactly as many
/// `SA` neighbors as there are matches.
#[derive(Clone)]
pub struct SuffixIndex<'s> {
    text: &'s [u8],
    s: Vec<u32>,
    sa: Vec<u32>,
    lcp: EnhancedLcp,
}

impl<'s> std::fmt::Debug for SuffixIndex<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixIndex")
            .field("len", &self.len())
            .finish()
    }
}

impl<'s> SuffixIndex<'s> {
    /// Builds a suffix index over `text`, or reports that `text` exceeds
    /// [`MAX_LENGTH`].
    pub fn try_new(text: &'s [u8]) -> Result<Self, SuffixArrayError> {
        let s = encode::encode(text)?;
        let mut sa = vec![0u32; s.len()];
        sais::construct(&s, 257, &mut sa);
        let lcp = EnhancedLcp::build(&s, &sa);
        Ok(SuffixIndex { text, s, sa, lcp })
    }

    /// Builds a suffix index over `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text.len() > MAX_LENGTH`. Use [`try_new`](Self::try_new)
    /// to handle oversized input without panicking.
    pub fn new(text: &'s [u8]) -> Self {
        Self::try_new(text).expect("text exceeds MAX_LENGTH")
    }

    /// All starting offsets in the original text at which `pattern` occurs,
    /// including overlapping occurrences. Returns an empty vector for an
    /// empty pattern or for a pattern with no occurrence.
    pub fn search(&self, pattern: &[u8]) -> Vec<usize> {
        let encoded: Vec<u32> = pattern.iter().map(|&b| b as u32 + 1).collect();
        search::search(&self.s, &self.sa, &self.lcp, &encoded)
    }

    /// The suffix array itself: `sa()[i]` is the starting offset of the
    /// `i`-th suffix in ascending lexicographic order, including the
    /// implicit empty suffix at `text.len()`.
    pub fn sa(&self) -> &[u32] {
        &self.sa
    }

    /// The adjacent-suffix LCP array: `lcp()[i]` is the length of the
    /// longest common prefix of the suffixes at `sa()[i-1]` and `sa()[i]`
    /// (`lcp()[0]` is always `0`).
    pub fn lcp(&self) -> &[u32] {
        self.lcp.adjacent()
    }

    /// The indexed text.
    pub fn text(&self) -> &'s [u8] {
        self.text
    }

    /// Length of the indexed text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
