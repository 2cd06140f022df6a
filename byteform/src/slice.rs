//! The slice engine: bound normalization shared by every representation, plus one slicing function per representation.
//!
//! Bounds are signed. A negative bound counts back from the end of the value; a resolved bound is always clamped into `0..=len`, and a start past the end (or past the resolved end) yields an empty result rather than an error.

use core::ops::Range;

use bytes::Bytes;

use crate::value::Binary;

/// Resolves the signed `start` and optional signed `end` against a value of length `len`, producing the final well-formed byte/code-unit range. Computed once, before dispatching to a representation-specific slicing function.
pub(crate) fn normalize(len: usize, start: i64, end: Option<i64>) -> Range<usize> {
    let start = resolve_bound(len, start);
    let end = match end {
        Some(end) => resolve_bound(len, end),
        None => len,
    };

    // An end before the start denotes the empty range at `start`.
    start..end.max(start)
}

/// Resolves one signed bound: negative values wrap around from `len`, and the result is clamped into `0..=len`.
fn resolve_bound(len: usize, bound: i64) -> usize {
    if bound < 0 {
        (len as i64).saturating_add(bound).max(0) as usize
    } else {
        (bound as u64).min(len as u64) as usize
    }
}

/// Takes the code units of `text` at the given (already normalized) range.
pub(crate) fn slice_text(text: &str, range: Range<usize>) -> Binary {
    let count = range.end - range.start;
    let sliced: String = text.chars().skip(range.start).take(count).collect();
    Binary::from_text(sliced)
}

pub(crate) fn slice_byte_array(bytes: &[u8], range: Range<usize>) -> Binary {
    Binary::from_byte_array(bytes[range].to_vec())
}

pub(crate) fn slice_block(block: &[u8], range: Range<usize>) -> Binary {
    Binary::from_block(Box::from(&block[range]))
}

/// Unlike the copying slices above, this returns a zero-copy view into the same reference-counted allocation.
pub(crate) fn slice_buffer(buffer: &Bytes, range: Range<usize>) -> Binary {
    Binary::from_buffer(buffer.slice(range))
}
