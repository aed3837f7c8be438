//! FlakeIdConfig builder for constructing configuration

use std::fmt;

use chrono::{DateTime, Utc};

use super::FlakeIdConfig;
use crate::machine_id::MachineIdResolver;

/// Default configuration values
pub(super) const DEFAULT_EPOCH_MS: u64 = 1_655_942_400_000; // June 23, 2022 UTC
pub(super) const DEFAULT_MACHINE_ID: u8 = 1;

/// Builder for FlakeIdConfig
pub struct FlakeIdConfigBuilder {
    pub(super) epoch_ms: u64,
    pub(super) machine_id_resolver: Option<Box<dyn MachineIdResolver>>,
}

impl FlakeIdConfigBuilder {
    /// Create a new FlakeIdConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch_ms: DEFAULT_EPOCH_MS,
            machine_id_resolver: None,
        }
    }

    /// Set the epoch as milliseconds since the Unix epoch, UTC
    ///
    /// Whether the epoch lies in the past is checked at generator
    /// construction, which owns the comparison against "now".
    pub fn epoch_millis(mut self, epoch_ms: u64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    /// Set the epoch from a calendar instant
    ///
    /// Instants before the Unix epoch clamp to 0.
    pub fn epoch_datetime(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch_ms = epoch.timestamp_millis().max(0) as u64;
        self
    }

    /// Install a machine id resolver
    ///
    /// Plain closures work: `.machine_id_resolver(|| 42)`. The resolver is
    /// invoked once, at generator construction.
    pub fn machine_id_resolver<R>(mut self, resolver: R) -> Self
    where
        R: MachineIdResolver + 'static,
    {
        self.machine_id_resolver = Some(Box::new(resolver));
        self
    }

    /// Build the final FlakeIdConfig
    pub fn build(self) -> FlakeIdConfig {
        FlakeIdConfig::from_builder(self)
    }
}

impl Default for FlakeIdConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlakeIdConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlakeIdConfigBuilder")
            .field("epoch_ms", &self.epoch_ms)
            .field("machine_id_resolver", &self.machine_id_resolver.is_some())
            .finish()
    }
}
