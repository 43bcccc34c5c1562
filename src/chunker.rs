//! Word-boundary text chunking under a soft size budget.
//!
//! Article bodies routinely exceed what a single summarization request can
//! carry, so they are split into chunks before being sent to the LLM. The
//! budget is measured in whitespace-delimited words, each costing its length
//! plus one for the separator. This is a proxy for model tokenization, not a
//! precise token count — callers should treat `max_size` as an approximation
//! of the true API limit, not a guarantee.

use tracing::debug;

/// Default chunk size budget, in word-length-plus-separator units.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 2048;

/// Split `text` into word-boundary chunks, each within `max_size`.
///
/// Words are accumulated into the current chunk until admitting the next
/// word would push the running size (`len(word) + 1` per word) past
/// `max_size`; the chunk is then closed and the word opens the next one.
/// Words are never split: a lone word longer than `max_size` becomes its
/// own over-budget chunk.
///
/// Joining the returned chunks with single spaces reproduces the
/// whitespace-normalized input. Empty or whitespace-only input yields an
/// empty vector.
pub fn split_into_chunks(text: &str, max_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_length = 0usize;

    for word in text.split_whitespace() {
        let word_length = word.len() + 1; // +1 for the joining space
        if current.is_empty() || current_length + word_length <= max_size {
            current.push(word);
            current_length += word_length;
        } else {
            chunks.push(current.join(" "));
            current = vec![word];
            current_length = word_length;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    debug!(
        input_len = text.len(),
        max_size,
        chunk_count = chunks.len(),
        "Split text into chunks"
    );
    chunks
}
