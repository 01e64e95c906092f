//! Error type shared by configuration and time construction.

use thiserror::Error;

/// Errors raised when a clock face is configured with values it cannot
/// represent.
///
/// Touch handling and geometry never fail; these errors only surface at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The minute step is not one of 1, 5, 10, 15, 30 or 60.
    #[error("invalid minute step {0}: expected one of 1, 5, 10, 15, 30, 60")]
    InvalidMinuteStep(u8),
    /// The hour is outside 0-23.
    #[error("hour {0} is out of range 0-23")]
    HourOutOfRange(u8),
    /// The minute is outside 0-59.
    #[error("minute {0} is out of range 0-59")]
    MinuteOutOfRange(u8),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, ClockError>;
