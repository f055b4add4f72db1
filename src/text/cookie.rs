// ============================================================================
// Cookie Parsing
// Key lookup in a semicolon-delimited cookie string
// ============================================================================

/// Extract the value stored under `key` in a `;`-delimited cookie string.
///
/// Returns an empty string when the key is absent or either argument is
/// blank. A value containing `=` is cut at the first one, matching the
/// upstream split-based parser.
pub fn value_from_cookie(cookie: &str, key: &str) -> String {
    if cookie.is_empty() || key.is_empty() {
        return String::new();
    }

    let prefix = if key.contains('=') {
        key.to_string()
    } else {
        format!("{key}=")
    };

    cookie
        .split(';')
        .map(str::trim)
        .find(|part| part.starts_with(&prefix))
        .and_then(|part| part.split('=').nth(1))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_cookie() {
        let cookie = "session=abc123; theme=dark; lang=fr";
        assert_eq!(value_from_cookie(cookie, "session"), "abc123");
        assert_eq!(value_from_cookie(cookie, "theme"), "dark");
        assert_eq!(value_from_cookie(cookie, "lang"), "fr");
    }

    #[test]
    fn test_missing_key() {
        let cookie = "session=abc123";
        assert_eq!(value_from_cookie(cookie, "theme"), "");
        assert_eq!(value_from_cookie(cookie, ""), "");
        assert_eq!(value_from_cookie("", "session"), "");
    }

    #[test]
    fn test_key_is_a_prefix_of_another() {
        let cookie = "session_old=stale; session=fresh";
        assert_eq!(value_from_cookie(cookie, "session"), "fresh");
    }

    #[test]
    fn test_value_cut_at_second_equals() {
        assert_eq!(value_from_cookie("token=a=b", "token"), "a");
    }
}
