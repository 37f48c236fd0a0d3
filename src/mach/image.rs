use super::{Word, MEMORY_SIZE};
use crate::error;
use crate::mach::Error;

/// Decode a binary image: each byte pair is one little-endian word.
/// A trailing odd byte is dropped.
pub fn load(bytes: &[u8]) -> Result<Vec<Word>, Error> {
    if bytes.len() / 2 > MEMORY_SIZE {
        return Err(error!(ImageTooLarge; "MORE THAN 32768 WORDS"));
    }
    if bytes.len() % 2 != 0 {
        tracing::warn!(len = bytes.len(), "image has an odd byte count, last byte ignored");
    }
    let words: Vec<Word> = bytes
        .chunks_exact(2)
        .map(|pair| Word::from_le_bytes([pair[0], pair[1]]))
        .collect();
    tracing::info!(words = words.len(), "image loaded");
    Ok(words)
}
