// ============================================================================
// String Helpers
// Casing, numeric-input normalization and label slugging
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens to whitespace runs in [`normalize_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpaceReplacement {
    #[default]
    Remove,
    Underscore,
    Dash,
    Keep,
}

/// Capitalize the first character. With `lowercase_rest` the remainder is
/// lowercased, otherwise it stays untouched. Blank input comes back as-is.
pub fn capitalize_first_letter_only(text: &str, lowercase_rest: bool) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut chars = text.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    let rest = chars.as_str();
    let rest = if lowercase_rest {
        rest.to_lowercase()
    } else {
        rest.to_string()
    };

    format!("{}{rest}", first.to_uppercase())
}

/// Replace the last comma with a dot, treating it as the decimal separator.
///
/// With `remove_other_commas` every earlier comma is dropped as a thousands
/// separator. A string without commas comes back unchanged.
pub fn replace_last_comma_by_dot(text: &str, remove_other_commas: bool) -> String {
    let Some(last_comma) = text.rfind(',') else {
        return text.to_string();
    };

    let mut replaced = String::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        match ch {
            ',' if index == last_comma => replaced.push('.'),
            ',' if remove_other_commas => {},
            ch => replaced.push(ch),
        }
    }

    replaced
}

/// True when the string contains at least one ASCII digit.
pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Keep only the numeric characters of a string, preserving dots and, for a
/// negative input, minus signs.
///
/// With `normalize_comma` the input first goes through
/// [`replace_last_comma_by_dot`], so `"1 234,56"` becomes `"1234.56"`.
pub fn strip_non_numeric(text: &str, normalize_comma: bool, remove_other_commas: bool) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let normalized = if normalize_comma {
        replace_last_comma_by_dot(text, remove_other_commas)
    } else {
        text.to_string()
    };

    let negative = normalized.starts_with('-');

    normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || (negative && *c == '-'))
        .collect()
}

/// Remove every ASCII digit from a string.
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

// Latin diacritic folding table. Enough for the label vocabulary this crate
// produces (currency names, magnitude labels); anything still non-ASCII
// after folding is dropped by normalize_label.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}

const CURRENCY_SIGNS: [char; 8] = ['$', '€', '£', '¥', '¢', '₹', '₿', '₮'];

/// Normalize a label: fold diacritics, drop everything that is not a Latin
/// letter (optionally also digits, punctuation and currency signs), and
/// apply the whitespace policy. Case is preserved.
///
/// `normalize_label("A ticket to 大阪 costs ¥2000.", SpaceReplacement::Remove, true, true, true)`
/// is `"Atickettocosts"`.
pub fn normalize_label(
    text: &str,
    spaces: SpaceReplacement,
    remove_digits: bool,
    remove_punctuation: bool,
    remove_currency_signs: bool,
) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut kept = String::with_capacity(text.len());
    for ch in text.chars().map(fold_diacritic) {
        if ch.is_whitespace() {
            kept.push(' ');
        } else if ch.is_ascii_alphabetic() {
            kept.push(ch);
        } else if ch.is_ascii_digit() {
            if !remove_digits {
                kept.push(ch);
            }
        } else if CURRENCY_SIGNS.contains(&ch) {
            if !remove_currency_signs {
                kept.push(ch);
            }
        } else if ch.is_ascii_punctuation() {
            if !remove_punctuation {
                kept.push(ch);
            }
        }
        // anything else (emoji, non-Latin scripts) is dropped
    }

    let replacement = match spaces {
        SpaceReplacement::Remove => "",
        SpaceReplacement::Underscore => "_",
        SpaceReplacement::Dash => "-",
        SpaceReplacement::Keep => " ",
    };

    kept.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(replacement)
}

/// Turn a string into a URL-friendly slug: normalized label with dashes for
/// spaces, optionally lowercased.
pub fn slugify(text: &str, lowercase: bool) -> String {
    let slug = normalize_label(text, SpaceReplacement::Dash, true, true, true);

    if lowercase {
        slug.to_lowercase()
    } else {
        slug
    }
}
