//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// Platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// PWM operation failed
    Pwm(PwmError),
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Invalid reference clock or output frequency
    InvalidFrequency,
    /// Period of zero ticks
    InvalidPeriod,
    /// Duty longer than the period
    InvalidDutyCycle,
    /// Dead time longer than the duty
    InvalidDeadTime,
    /// Channel not available
    ChannelUnavailable,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
        }
    }
}
