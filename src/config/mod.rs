//! Configuration for the FlakeId generator

mod builder;

use std::fmt;

pub use builder::FlakeIdConfigBuilder;
use builder::{DEFAULT_EPOCH_MS, DEFAULT_MACHINE_ID};

use crate::machine_id::MachineIdResolver;

/// Configuration for the FlakeId generator
///
/// Holds the epoch every timestamp is measured from and an optional
/// machine id resolver. Consumed by [`FlakeId::with_config`].
///
/// [`FlakeId::with_config`]: crate::FlakeId::with_config
pub struct FlakeIdConfig {
    epoch_ms: u64,
    machine_id_resolver: Option<Box<dyn MachineIdResolver>>,
}

impl FlakeIdConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: FlakeIdConfigBuilder) -> Self {
        Self {
            epoch_ms: b.epoch_ms,
            machine_id_resolver: b.machine_id_resolver,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> FlakeIdConfigBuilder {
        FlakeIdConfigBuilder::new()
    }

    /// Configured epoch, milliseconds since the Unix epoch, UTC
    #[inline(always)]
    pub const fn epoch_millis(&self) -> u64 {
        self.epoch_ms
    }

    /// Resolve the machine id: the configured resolver, or the default of 1
    ///
    /// Invoked exactly once, by the generator constructor.
    pub(crate) fn resolve_machine_id(&self) -> u8 {
        match &self.machine_id_resolver {
            Some(resolver) => resolver.resolve(),
            None => DEFAULT_MACHINE_ID,
        }
    }
}

impl Default for FlakeIdConfig {
    fn default() -> Self {
        Self {
            epoch_ms: DEFAULT_EPOCH_MS,
            machine_id_resolver: None,
        }
    }
}

impl fmt::Debug for FlakeIdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlakeIdConfig")
            .field("epoch_ms", &self.epoch_ms)
            .field("machine_id_resolver", &self.machine_id_resolver.is_some())
            .finish()
    }
}
