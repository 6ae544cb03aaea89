//! Piezo sounder driver
//!
//! The piezo sits across the complementary outputs of one PWM channel. Pitch
//! comes from the channel period; perceived volume comes from symmetric dead
//! time inserted around the 50% duty edges. The maximum fundamental component
//! needs a dead time of period/6; larger dead times reduce the volume at the
//! same pitch, at the expense of more high harmonics.
//!
//! Tone duration is counted down by a periodic tick (1 ms in the reference
//! setup) delivered from interrupt context. See
//! [`TickCountdown`](crate::core::countdown::TickCountdown) for the
//! mainline/interrupt discipline; the driver itself never blocks the tick.
//!
//! One tone at a time: a request arriving while a tone is sounding is
//! dropped, not queued.

use crate::config::{MAX_VOLUME, PWM_CLOCK_HZ};
use crate::core::countdown::TickCountdown;
use crate::platform::traits::{
    PinFunction, PinInterface, PwmChannel, PwmChannelConfig, PwmInterface,
};
use crate::platform::error::PwmError;
use crate::platform::{PlatformError, Result};

/// Volume step to on-time weighting, as a fraction of the period scaled by
/// [`VOLUME_SCALE`]. Monotonically increasing; the top entry keeps the dead
/// time non-negative at period/10.
const VOLUME_ON_TIME: [u32; MAX_VOLUME as usize] = [3, 9, 20, 40, 80];

/// Normalization divisor for [`VOLUME_ON_TIME`] entries.
const VOLUME_SCALE: u32 = 200;

const _: () = assert!(
    VOLUME_ON_TIME[MAX_VOLUME as usize - 1] <= VOLUME_SCALE / 2,
    "loudest on-time must not exceed half the period"
);

/// Piezo sounder on a complementary PWM channel pair.
///
/// # Type Parameters
///
/// * `P` - PWM peripheral
/// * `HI` - pin wired to the channel's high-side output
/// * `LO` - pin wired to the channel's low-side output
pub struct Sounder<P, HI, LO>
where
    P: PwmInterface,
    HI: PinInterface,
    LO: PinInterface,
{
    pwm: P,
    channel: PwmChannel,
    pin_high: HI,
    pin_low: LO,
    countdown: TickCountdown,
}

impl<P, HI, LO> Sounder<P, HI, LO>
where
    P: PwmInterface,
    HI: PinInterface,
    LO: PinInterface,
{
    /// Create the driver: disables the tone channel, programs the shared
    /// reference clock and parks both piezo pins low. Call before any other
    /// entry point.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the reference clock cannot be
    /// programmed.
    pub fn new(pwm: P, channel: PwmChannel, pin_high: HI, pin_low: LO) -> Result<Self> {
        pwm.disable_channel(channel);
        pwm.configure_clock(PWM_CLOCK_HZ)?;
        pin_high.set_function(PinFunction::OutputLow);
        pin_low.set_function(PinFunction::OutputLow);

        crate::log_info!("sounder: idle on channel {}", channel.0);

        Ok(Self {
            pwm,
            channel,
            pin_high,
            pin_low,
            countdown: TickCountdown::new(),
        })
    }

    /// Sound a tone of the given frequency and duration.
    ///
    /// Volume runs 1 to [`MAX_VOLUME`] and is clamped from above; 0 requests
    /// silence and is a no-op. A request arriving while a tone is still
    /// sounding is dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` for a zero frequency, or whatever the
    /// platform rejects about the computed channel configuration (an
    /// ultrasonic frequency collapses the period to zero ticks).
    pub fn beep(&self, frequency: u32, duration_ticks: u32, volume: u32) -> Result<()> {
        if volume == 0 {
            return Ok(());
        }
        if frequency == 0 {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }
        if volume > MAX_VOLUME {
            crate::log_warn!("sounder: volume {} clamped to {}", volume, MAX_VOLUME);
        }
        let volume = volume.min(MAX_VOLUME);

        // Keep the tick handler away while the channel registers are in flux.
        let _hold = self.countdown.hold();

        if self.countdown.active() {
            crate::log_trace!("sounder: busy, {} Hz request dropped", frequency);
            return Ok(());
        }

        let config = tone_config(frequency, volume);
        self.pwm.configure_channel(self.channel, &config)?;
        self.pwm.enable_channel(self.channel);
        self.pin_high.set_function(PinFunction::PwmHigh);
        self.pin_low.set_function(PinFunction::PwmLow);
        self.countdown.arm(duration_ticks);

        crate::log_debug!(
            "sounder: {} Hz for {} ticks at volume {}",
            frequency,
            duration_ticks,
            volume
        );
        Ok(())
    }

    /// Advance the tone countdown by one tick.
    ///
    /// Call exactly once per tick from the periodic interrupt. When the
    /// countdown expires the channel is disabled and both piezo pins are
    /// forced low, silencing the tone immediately. Skipped while a
    /// reconfiguration is in progress.
    pub fn tick(&self) {
        if self.countdown.tick() {
            self.pwm.disable_channel(self.channel);
            self.pin_high.set_function(PinFunction::OutputLow);
            self.pin_low.set_function(PinFunction::OutputLow);
        }
    }

    /// True while a tone is (or should be) still sounding.
    pub fn noisy(&self) -> bool {
        self.countdown.active()
    }
}

/// Compute the channel programming for a tone.
///
/// `volume` must already be clamped to `1..=MAX_VOLUME`.
fn tone_config(frequency: u32, volume: u32) -> PwmChannelConfig {
    let period = PWM_CLOCK_HZ / frequency;
    let on_time = period * VOLUME_ON_TIME[(volume - 1) as usize] / VOLUME_SCALE;
    let dead_time = (period / 2 - on_time) as u16;
    PwmChannelConfig {
        period,
        duty: period / 2,
        dead_time_high: dead_time,
        dead_time_low: dead_time,
    }
}
