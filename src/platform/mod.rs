//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the panel's PWM and pin-mux
//! peripherals. The drivers in `libraries` depend only on the traits defined
//! here, never on vendor registers, so a recording mock can stand in for the
//! hardware in tests.

pub mod error;
pub mod traits;

// Mock implementations (test builds or the `mock` feature)
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{PinFunction, PinInterface, PwmChannel, PwmChannelConfig, PwmInterface};
