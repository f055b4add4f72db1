// ============================================================================
// Email Validation
// RFC-approximate format check, permissive on purpose
// ============================================================================

use regex::Regex;
use std::sync::LazyLock;

// Account part of allowed specials and dots between them, then a
// dot-separated domain with a letter-initial TLD of at least two characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~](\.?[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~])*@[a-zA-Z0-9](-*\.?[a-zA-Z0-9])*\.[a-zA-Z](-?[a-zA-Z0-9])+$",
    )
    .expect("email pattern compiles")
});

/// Validate the shape of an email address.
///
/// Checks `account@domain` with the account at most 64 characters, the
/// domain at most 255 with dot-separated labels of at most 63, plus a
/// permissive pattern check on the whole address. This is a format check,
/// not a deliverability check.
pub fn is_email_valid(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }

    let Some((account, domain)) = email.split_once('@') else {
        return false;
    };

    if account.is_empty() || domain.is_empty() {
        return false;
    }

    if account.len() > 64 || domain.len() > 255 {
        return false;
    }

    if domain.split('.').any(|label| label.len() > 63) {
        return false;
    }

    EMAIL_PATTERN.is_match(email)
}
