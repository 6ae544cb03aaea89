//! Core systems
//!
//! Cross-cutting pieces shared by the peripheral drivers: the
//! interrupt-safe tick countdown and the logging abstraction.

pub mod countdown;
pub mod logging;

pub use countdown::{TickCountdown, TickHold};
