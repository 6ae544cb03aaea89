//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform traits that can
//! be used for unit testing without requiring actual hardware. The mocks
//! record every clock, channel and pin-mux programming call so tests can
//! assert on the exact register values a driver produced.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod pwm;

pub use gpio::MockPin;
pub use pwm::{MockChannelState, MockPwm};
