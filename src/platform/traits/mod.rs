//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod pwm;

// Re-export trait interfaces
pub use gpio::{PinFunction, PinInterface};
pub use pwm::{PwmChannel, PwmChannelConfig, PwmInterface};
