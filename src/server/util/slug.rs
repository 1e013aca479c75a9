//! URL slugs for forum threads.

use chrono::{DateTime, Utc};

/// Longest slug prefix derived from a title.
const MAX_SLUG_LENGTH: usize = 100;

/// Lowercases `title`, collapses runs of non-alphanumeric characters into a single `-`
/// and trims leading and trailing dashes, truncating to 100 characters.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Encodes a non-negative integer in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();

    String::from_utf8(out).unwrap_or_default()
}

/// Builds a unique thread slug: the slugified title plus a base-36 millisecond timestamp.
pub fn thread_slug(title: &str, now: DateTime<Utc>) -> String {
    let suffix = to_base36(now.timestamp_millis().max(0) as u64);
    let base = slugify(title);

    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_punctuation_and_case() {
        assert_eq!(slugify("Hello, World! Raising a Seed?"), "hello-world-raising-a-seed");
        assert_eq!(slugify("  --AI  agents--  "), "ai-agents");
    }

    #[test]
    fn truncates_long_titles() {
        let title = "a".repeat(150);
        assert_eq!(slugify(&title).len(), 100);
    }

    #[test]
    fn encodes_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn thread_slug_appends_timestamp() {
        let now = DateTime::from_timestamp_millis(36).unwrap();
        assert_eq!(thread_slug("Intro thread", now), "intro-thread-10");
        assert_eq!(thread_slug("!!!", now), "10");
    }
}
