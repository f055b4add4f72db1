// ============================================================================
// Units Module
// Atomic-unit records and power-of-ten unit shifting
// ============================================================================

mod atomic;
mod shift;

pub use atomic::{atomic_unit_to_decimal, number_to_atomic_unit, AtomicUnit};
pub use shift::{shift_down, shift_up, DEFAULT_SHIFT_FACTOR};
