// ============================================================================
// Numeric Module
// Validated decimal parsing, rounding rules and number formatting
// ============================================================================
//
// This module provides:
// - DecimalInput: accepted amount arguments (decimal, number, string)
// - NumericError: error taxonomy for the guard layer
// - truncate / round_half_up / round_up / round_down: the four rounding rules
// - format_number / label_number: normalized rendering with magnitude labels
//
// Design principles:
// - Every public function is total: invalid input logs a diagnostic and
//   yields the documented fallback instead of panicking
// - All arithmetic runs on rust_decimal, never on floats
// - Validation lives in one guard layer shared by every function

mod errors;
mod format;
mod guard;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use format::{format_number, label_number, THOUSANDS_SEPARATOR};
pub use guard::{DecimalInput, MAX_SCALE};
pub use rounding::{
    absolute, count_decimal_places, is_number, parse_amount, round_down, round_half_up, round_up,
    truncate,
};

pub(crate) use format::{labeled_magnitude, render_plain};
pub(crate) use guard::{repair_decimal_bounds, require_amount, require_scale, require_shift_factor};
