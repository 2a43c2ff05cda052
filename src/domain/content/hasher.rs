/// Derive a short stable fingerprint from speakable text, used for cache
/// addressing.
///
/// Whitespace is collapsed to single spaces and the text is lowercased, so
/// two renderings of the same content hash identically. The hash itself is a
/// rolling multiplicative hash (`hash = hash * 31 + code`) with 32-bit
/// wraparound, encoded in base-36. It is a non-cryptographic fingerprint:
/// a collision only redirects a cache hit, it is not an integrity property.
pub fn content_hash(text: &str) -> String {
    let whitespace_pattern = regex::Regex::new(r"\s+").unwrap();
    let normalized = whitespace_pattern
        .replace_all(text, " ")
        .trim()
        .to_lowercase();

    let mut hash: i32 = 0;
    for c in normalized.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as u32 as i32);
    }

    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut encoded = Vec::new();
    while value > 0 {
        encoded.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }

    encoded.iter().rev().map(|&b| b as char).collect()
}
