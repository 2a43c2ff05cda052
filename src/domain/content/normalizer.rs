use html2text::from_read;

/// Extract plain speakable text from rich HTML content.
///
/// Strips markup, removes URLs (they read terribly out loud) and collapses
/// whitespace to single spaces. Returns an empty string for empty or
/// unparseable input; callers treat empty speakable text as "playback
/// disabled".
pub fn normalize(rich: &str) -> String {
    if rich.trim().is_empty() {
        return String::new();
    }

    // Convert HTML to plain text
    let plain_text = from_read(rich.as_bytes(), usize::MAX);

    // Remove URLs (both http and https)
    let url_pattern = regex::Regex::new(r"https?://[^\s]+").unwrap();
    let without_urls = url_pattern.replace_all(&plain_text, "");

    // Normalize whitespace (replace multiple spaces/newlines with single space)
    let whitespace_pattern = regex::Regex::new(r"\s+").unwrap();
    let normalized = whitespace_pattern.replace_all(&without_urls, " ");

    normalized.trim().to_string()
}
