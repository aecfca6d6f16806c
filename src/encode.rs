use crate::error::SuffixArrayError;

/// Maximum input length: positions and the sentinel-terminated length `m`
/// must both fit in a `u32`, and `NIL` (`u32::MAX`) is reserved as the
/// induced sort's "empty slot" marker.
pub const MAX_LENGTH: usize = (std::u32::MAX - 2) as usize;

/// Turns an input byte string into the sentinel-terminated integer sequence
/// `S` described by the data model: each byte maps to its unsigned value
/// plus one, and a trailing `0` sentinel compares strictly less than every
/// mapped byte. The mapping is injective by construction (`1..=256` covers
/// distinct byte values one-to-one) and preserves byte order.
pub fn encode(text: &[u8]) -> Result<Vec<u32>, SuffixArrayError> {
    if text.len() > MAX_LENGTH {
        return Err(SuffixArrayError::TooLong {
            len: text.len(),
            max: MAX_LENGTH,
        });
    }

    let mut s = Vec::with_capacity(text.len() + 1);
    s.extend(text.iter().map(|&b| b as u32 + 1));
    s.push(0);
    Ok(s)
}
