use thiserror::Error;

/// Represents errors that can occur during FlakeId operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlakeIdError {
    /// Error when the elapsed time since the epoch no longer fits the
    /// 48-bit timestamp field
    #[error("Timestamp {timestamp} overflows the 48-bit field. Maximum allowed value is {max}")]
    TimestampOverflow { timestamp: u64, max: u64 },
    /// Error when the configured epoch lies after the current time
    #[error("Epoch {epoch_ms} is after the current time {now_ms}. Refusing to create generator")]
    EpochInFuture { epoch_ms: u64, now_ms: u64 },
}
