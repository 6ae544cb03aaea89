//! Output peripheral libraries
//!
//! Drivers for the panel's feedback peripherals, written against the
//! platform traits so they are testable off-hardware.
//!
//! ## Libraries
//!
//! - `sounder`: piezo tone generation on a complementary PWM pair
//! - `backlight`: LCD backlight brightness on an inverted PWM output

pub mod backlight;
pub mod sounder;

// Re-export commonly used types
pub use backlight::{Backlight, BoardVariant};
pub use sounder::Sounder;
