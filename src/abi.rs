//! Contract ABI encoding for the two values this tool prints.
//!
//! The consumer decodes stdout with a standard Ethereum ABI decoder, so the layout here has to
//! match the spec word for word: a gather run reports `(bool, uint256)`, a batch read reports
//! `(string[])`. The word layout is the whole point of this module, so it is written out rather
//! than hidden behind a codegen macro.

use alloy_primitives::U256;

const WORD_SIZE: usize = 32;

fn push_word(out: &mut Vec<u8>, value: U256) {
    out.extend_from_slice(&value.to_be_bytes::<WORD_SIZE>());
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}

/// `(bool success, uint256 count)`: two static words, no offsets.
pub fn encode_status_tuple(success: bool, count: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 * WORD_SIZE);
    push_word(&mut out, U256::from(success as u8));
    push_word(&mut out, U256::from(count));
    out
}

/// `(string[])`: the array is the single dynamic parameter, so the encoding leads with a word
/// pointing at it (always 0x20 here). Then the element count, one offset word per element
/// relative to the start of the offset area, and finally each string as a length word plus its
/// UTF-8 bytes zero-padded to the next word boundary.
pub fn encode_string_array(items: &[String]) -> Vec<u8> {
    let tail_len: usize = items
        .iter()
        .map(|item| WORD_SIZE + padded_len(item.len()))
        .sum();
    let mut out = Vec::with_capacity(2 * WORD_SIZE + items.len() * WORD_SIZE + tail_len);

    push_word(&mut out, U256::from(WORD_SIZE));
    push_word(&mut out, U256::from(items.len()));

    let mut item_offset = items.len() * WORD_SIZE;
    for item in items {
        push_word(&mut out, U256::from(item_offset));
        item_offset += WORD_SIZE + padded_len(item.len());
    }

    for item in items {
        push_word(&mut out, U256::from(item.len()));
        out.extend_from_slice(item.as_bytes());
        out.resize(out.len() + padded_len(item.len()) - item.len(), 0);
    }

    out
}
