//! Geometric capacity growth shared by the token sequence and the emitter.
//!
//! Both buffers double their capacity when full, giving amortized O(1)
//! appends. Reservation goes through `try_reserve_exact` so exhaustion is
//! reported as a value instead of aborting the process.

use std::collections::TryReserveError;

/// Smallest capacity ever reserved.
pub const MIN_CAPACITY: usize = 64;

/// Capacity to grow to so that `required` elements fit.
///
/// Doubles `current` (at least [`MIN_CAPACITY`]) until it covers `required`.
pub fn next_capacity(current: usize, required: usize) -> usize {
    let mut cap = current.max(MIN_CAPACITY);
    while cap < required {
        cap = cap.saturating_mul(2);
    }
    cap
}

/// Make room for `additional` more elements in `buf`, doubling as needed.
///
/// Returns the capacity that was requested, for error reporting.
pub fn reserve<T>(buf: &mut Vec<T>, additional: usize) -> Result<(), (usize, TryReserveError)> {
    let required = buf.len().saturating_add(additional);
    if required <= buf.capacity() {
        return Ok(());
    }
    let target = next_capacity(buf.capacity(), required);
    buf.try_reserve_exact(target - buf.len())
        .map_err(|err| (target, err))
}
