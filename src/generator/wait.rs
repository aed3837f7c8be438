//! Millisecond-boundary wait for sequence exhaustion
//!
//! When a millisecond's sequence space runs out, the generator borrows the
//! next logical millisecond and sleeps, still holding the lock, until the
//! wall clock catches up.

use std::thread;
use std::time::Duration;

use super::time::unix_time_ns;

const NANOS_PER_MILLI: u128 = 1_000_000;

/// Duration until the wall clock reaches `target_ms` (absolute ms since
/// the Unix epoch); zero when the clock is already past it
#[inline]
pub(crate) fn until_wall_millisecond(target_ms: u64) -> Duration {
    let target_ns = target_ms as u128 * NANOS_PER_MILLI;
    let remaining = target_ns.saturating_sub(unix_time_ns());
    Duration::from_nanos(remaining as u64)
}

/// Sleep until the wall clock reaches the given absolute millisecond
///
/// The remainder is computed from the wall clock once; the sleep itself
/// runs on the platform's monotonic clock, so wall-clock adjustments made
/// mid-wait cannot stretch it.
#[inline]
pub(crate) fn sleep_until_wall_millisecond(target_ms: u64) {
    let remaining = until_wall_millisecond(target_ms);
    if !remaining.is_zero() {
        thread::sleep(remaining);
    }
}
