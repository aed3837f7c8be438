//! ID generation logic
//!
//! Core next_id() implementation: adopt a new millisecond, or increment
//! the sequence and wait out an exhausted one

use std::sync::PoisonError;

use crate::codec::{self, IdPayload};
use crate::error::FlakeIdError;

use super::wait::sleep_until_wall_millisecond;
use super::FlakeId;

impl FlakeId {
    /// Generate the next id
    ///
    /// Holds the state lock for the full call, including the bounded sleep
    /// after sequence exhaustion; concurrent callers serialize behind it.
    /// Fails only with [`FlakeIdError::TimestampOverflow`], once the
    /// elapsed time since the epoch no longer fits the 48-bit field.
    pub fn next_id(&self) -> Result<u64, FlakeIdError> {
        // No panic point exists while the lock is held, so a poisoned
        // lock still guards consistent counters.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.elapsed_ms();
        if state.elapsed < current {
            state.adopt_millisecond(current);
        } else if state.increment_sequence() {
            // The state now points one logical millisecond ahead of the
            // wall clock. Wait without releasing the lock, so no other
            // caller can observe a premature sequence reset.
            sleep_until_wall_millisecond(self.epoch_millis() + state.elapsed);
        }

        let payload = IdPayload {
            timestamp: state.elapsed,
            machine_id: self.machine_id(),
            sequence: state.sequence,
        };

        codec::encode(&payload)
    }
}
