/// Synthesis requests have a payload size limit, so long text is split into
/// bounded chunks before being sent out.
pub const MAX_CHUNK_CHARS: usize = 2500;

/// Split text into ordered chunks of at most `max_len` bytes, preferring
/// sentence boundaries (`.`, `!`, `?` followed by whitespace).
///
/// Sentences accumulate into the current chunk; when the next sentence would
/// push the chunk past the limit, the chunk is flushed and a new one starts.
/// A single sentence longer than `max_len` is emitted as its own oversized
/// chunk rather than being sub-split — a known limitation, preferred over
/// silently truncating mid-sentence. Empty and whitespace-only chunks are
/// filtered out of the result.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        if text.trim().is_empty() {
            return Vec::new();
        }
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current_chunk = String::new();

    // Split on sentence-ending punctuation
    let sentence_pattern = regex::Regex::new(r"([.!?]+\s+)").unwrap();
    let mut last_end = 0;

    for mat in sentence_pattern.find_iter(text) {
        let sentence = &text[last_end..mat.end()];

        // If adding this sentence would exceed the limit, flush the current chunk
        if !current_chunk.is_empty() && current_chunk.len() + sentence.len() > max_len {
            chunks.push(current_chunk.trim().to_string());
            current_chunk = String::new();
        }

        current_chunk.push_str(sentence);
        last_end = mat.end();
    }

    // Handle remaining text after the last sentence boundary
    if last_end < text.len() {
        let remaining = &text[last_end..];

        if !current_chunk.is_empty() && current_chunk.len() + remaining.len() > max_len {
            chunks.push(current_chunk.trim().to_string());
            current_chunk = String::new();
        }

        current_chunk.push_str(remaining);
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk.trim().to_string());
    }

    chunks.retain(|chunk| !chunk.trim().is_empty());
    chunks
}
