// ============================================================================
// Delay
// Non-blocking sleep with validated duration
// ============================================================================

use std::time::Duration;

/// Suspend the current task for `milliseconds`.
///
/// A negative or non-finite duration logs a diagnostic and resolves
/// immediately. There is no cancellation support beyond dropping the future.
pub async fn delay(milliseconds: f64) {
    if !milliseconds.is_finite() || milliseconds < 0.0 {
        tracing::error!("delay: duration must be a finite non-negative number of milliseconds");
        return;
    }

    tokio::time::sleep(Duration::from_secs_f64(milliseconds / 1000.0)).await;
}
