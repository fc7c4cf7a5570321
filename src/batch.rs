//! Bounds-checked batch access to the stored node list.
//!
//! The consuming oracle contract cannot take the whole list in one call, so it pages through it
//! with an offset and a batch size.

use thiserror::Error;

/// The offset must address an element that exists. An empty list has no addressable element, so
/// every offset into it is invalid, including zero.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid start offset {start_offset} into node list of length {len}")]
pub struct InvalidOffsetError {
    pub start_offset: usize,
    pub len: usize,
}

/// A contiguous batch of node IDs, clipped to the end of the list. Shorter than `batch_size`
/// when fewer elements remain, empty only for `batch_size == 0`.
pub fn read_batch(
    nodes: &[String],
    start_offset: usize,
    batch_size: usize,
) -> Result<&[String], InvalidOffsetError> {
    if start_offset >= nodes.len() {
        return Err(InvalidOffsetError {
            start_offset,
            len: nodes.len(),
        });
    }

    let end = start_offset.saturating_add(batch_size).min(nodes.len());
    Ok(&nodes[start_offset..end])
}
