//! Panel configuration constants
//!
//! Compile-time configuration shared by the sounder and backlight drivers.
//! Everything here is a plain constant so timing behavior is predictable and
//! the values show up in the disassembly as immediates.

/// PWM reference clock in Hz.
///
/// 2 MHz keeps the 16-bit dead-time registers in range down to roughly 30 Hz
/// tone frequencies while leaving plenty of duty resolution at the top of the
/// audible band.
pub const PWM_CLOCK_HZ: u32 = 2_000_000;

/// Backlight PWM frequency in Hz.
///
/// 20 kHz is the display vendor's recommendation for the smoothed-input
/// inverter and is safely above the audible band.
pub const BACKLIGHT_PWM_HZ: u32 = 20_000;

/// Backlight PWM period in reference clock ticks.
pub const BACKLIGHT_PERIOD: u32 = PWM_CLOCK_HZ / BACKLIGHT_PWM_HZ;

/// Number of sounder volume steps. Volume requests above this are clamped.
pub const MAX_VOLUME: u32 = 5;

/// Brightness scale for the backlight; 0 is dark, `MAX_BRIGHTNESS` is full.
pub const MAX_BRIGHTNESS: u32 = 100;

// Compile-time validation of derived values
const _: () = assert!(BACKLIGHT_PERIOD > 1, "backlight period too coarse");
const _: () = assert!(
    PWM_CLOCK_HZ % BACKLIGHT_PWM_HZ == 0,
    "backlight frequency must divide the reference clock"
);
