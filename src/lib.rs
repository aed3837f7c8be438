//! # FlakeId
//!
//! A Snowflake-style generator of compact, sortable 64-bit unique identifiers.
//!
//! Generated IDs are:
//! - 📈 Time-sorted (48-bit millisecond timestamp)
//! - 🔄 Monotonic per generator instance
//! - 🔒 Thread-safe
//! - 🌐 Distributed-ready (8-bit machine id, kept unique externally)

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod generator;
mod machine_id;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::FlakeIdConfig;
pub use config::FlakeIdConfigBuilder;
pub use error::FlakeIdError;
pub use generator::FlakeId;
pub use machine_id::{FixedMachineId, MachineIdResolver};

// Re-export codec surface at crate root
pub use codec::IdPayload;
pub use codec::{decode, encode};
