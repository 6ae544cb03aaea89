//! PWM peripheral interface trait
//!
//! The panel's vendor PWM block is modeled as a narrow capability: clock
//! setup, per-channel register programming and channel gating. Driver code
//! depends on this trait, never on the register layout.

use crate::platform::Result;

/// Identifier of one hardware PWM channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmChannel(pub u8);

/// Register-level configuration for one PWM channel.
///
/// All values are in ticks of the shared reference clock. The dead times are
/// subtracted symmetrically around the duty edges of the complementary output
/// pair; they are 16-bit quantities in the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmChannelConfig {
    /// Period in reference clock ticks
    pub period: u32,
    /// Duty (active time) in reference clock ticks
    pub duty: u32,
    /// Dead time inserted on the high-side output, in ticks
    pub dead_time_high: u16,
    /// Dead time inserted on the low-side (complementary) output, in ticks
    pub dead_time_low: u16,
}

/// PWM peripheral interface trait
///
/// Platform implementations must provide this interface for the panel's PWM
/// block. Methods take `&self`: they map to volatile register writes, and
/// the sounder driver calls [`disable_channel`](PwmInterface::disable_channel)
/// from the periodic tick interrupt while mainline code holds the same
/// peripheral.
///
/// # Safety Invariants
///
/// - The reference clock must be configured before any channel is enabled
/// - A channel's configuration must not be rewritten while the tick interrupt
///   may act on that channel (the drivers enforce this with a hold flag)
pub trait PwmInterface {
    /// Program the shared reference clock.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidFrequency)` if the
    /// frequency is zero or unattainable.
    fn configure_clock(&self, frequency_hz: u32) -> Result<()>;

    /// Program period, duty and dead times for one channel.
    ///
    /// The channel keeps running with its previous settings until
    /// [`enable_channel`](PwmInterface::enable_channel) latches the new ones.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the configuration is degenerate
    /// (zero period, duty longer than the period, dead time longer than the
    /// duty) or the channel does not exist.
    fn configure_channel(&self, channel: PwmChannel, config: &PwmChannelConfig) -> Result<()>;

    /// Start driving the channel outputs.
    fn enable_channel(&self, channel: PwmChannel);

    /// Stop driving the channel outputs. Callable from interrupt context.
    fn disable_channel(&self, channel: PwmChannel);
}

impl<T: PwmInterface + ?Sized> PwmInterface for &T {
    fn configure_clock(&self, frequency_hz: u32) -> Result<()> {
        (**self).configure_clock(frequency_hz)
    }

    fn configure_channel(&self, channel: PwmChannel, config: &PwmChannelConfig) -> Result<()> {
        (**self).configure_channel(channel, config)
    }

    fn enable_channel(&self, channel: PwmChannel) {
        (**self).enable_channel(channel)
    }

    fn disable_channel(&self, channel: PwmChannel) {
        (**self).disable_channel(channel)
    }
}
