// ============================================================================
// Text Module
// String normalization, email format validation and cookie parsing
// ============================================================================

mod cookie;
mod email;
mod strings;

pub use cookie::value_from_cookie;
pub use email::is_email_valid;
pub use strings::{
    capitalize_first_letter_only, contains_digit, normalize_label, replace_last_comma_by_dot,
    slugify, strip_digits, strip_non_numeric, SpaceReplacement,
};
