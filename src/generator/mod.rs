//! Core FlakeId generator implementation
//!
//! Split into modules for testability:
//! - `state` - elapsed-time + sequence counters behind the lock
//! - `time` - wall-clock utilities
//! - `wait` - millisecond-boundary sleep
//! - `generate` - ID generation logic

mod generate;
mod state;
mod time;
mod wait;

use std::sync::Mutex;

use crate::codec::{self, IdPayload};
use crate::config::FlakeIdConfig;
use crate::error::FlakeIdError;

use state::GeneratorState;
use time::{time_since_epoch, unix_time_ms};

/// Thread-safe Snowflake-style id generator
///
/// All mutable state sits behind a single mutex; one `next_id` call owns
/// the lock for its entire read-decide-wait-write sequence. Independently
/// configured instances (distinct machine ids) share no state.
#[derive(Debug)]
pub struct FlakeId {
    state: Mutex<GeneratorState>,
    start_time: u64,
    machine_id: u8,
}

impl FlakeId {
    /// Create with the default configuration
    pub fn new() -> Result<Self, FlakeIdError> {
        Self::with_config(FlakeIdConfig::default())
    }

    /// Create with a custom configuration
    ///
    /// Fails with [`FlakeIdError::EpochInFuture`] when the configured epoch
    /// lies after the current wall-clock time. The machine id resolver runs
    /// exactly once, here; absent a resolver the machine id is 1.
    pub fn with_config(config: FlakeIdConfig) -> Result<Self, FlakeIdError> {
        let now_ms = unix_time_ms();
        let epoch_ms = config.epoch_millis();
        if epoch_ms > now_ms {
            return Err(FlakeIdError::EpochInFuture { epoch_ms, now_ms });
        }

        Ok(Self {
            state: Mutex::new(GeneratorState::new()),
            start_time: epoch_ms,
            machine_id: config.resolve_machine_id(),
        })
    }

    /// Machine id stamped into every id from this instance
    #[inline(always)]
    pub const fn machine_id(&self) -> u8 {
        self.machine_id
    }

    /// Epoch this instance measures timestamps from, ms since Unix epoch
    #[inline(always)]
    pub const fn epoch_millis(&self) -> u64 {
        self.start_time
    }

    /// Decompose an id into its timestamp, machine id, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> IdPayload {
        codec::decode(id)
    }

    /// Current elapsed offset since the configured epoch
    #[inline(always)]
    pub(crate) fn elapsed_ms(&self) -> u64 {
        time_since_epoch(self.start_time)
    }
}
