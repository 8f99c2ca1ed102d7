//! String utilities

/// Truncate a string to at most `max_chars` characters, at a valid UTF-8
/// character boundary. Used to keep logged response bodies bounded.
pub fn truncate_str(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_str("No titles found.", 9), "No titles");
        assert_eq!(truncate_str("short", 100), "short");
    }

    #[test]
    fn test_truncate_at_char_boundary() {
        assert_eq!(truncate_str("héros #1", 2), "hé");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_str("", 10), "");
    }
}
