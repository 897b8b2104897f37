// ABOUTME: Shared utility functions for Folio
// ABOUTME: ID generation and string helpers

use rand::Rng;

/// Generate a feedback ID (`fb-` followed by 12 alphanumeric characters)
pub fn generate_feedback_id() -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..12)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!("fb-{}", suffix)
}

/// Truncate to at most `max_chars` characters, respecting char boundaries
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
