//! LCD backlight driver
//!
//! The backlight inverter is fed by one PWM output with inverted polarity:
//! a higher duty produces a dimmer display. Newer panels smooth the PWM into
//! an analog control voltage with a narrow accepted range, so their duty is
//! interpolated inside a calibrated window instead of swept across the full
//! period. Which mapping applies is strapped on a board pin and detected once
//! at startup.
//!
//! Brightness is stateless: every call recomputes and reprograms the channel
//! in full, so repeating a setting is idempotent.

use crate::config::{BACKLIGHT_PERIOD, MAX_BRIGHTNESS, PWM_CLOCK_HZ};
use crate::platform::traits::{
    PinFunction, PinInterface, PwmChannel, PwmChannelConfig, PwmInterface,
};
use crate::platform::Result;

// The smoothed inverter input accepts roughly 0.7 V to 1.45 V against the
// 3.3 V rail. Inverted output, so the brightest setting maps to the low edge
// of the window. Tenths of a volt keep this in integer arithmetic.
const WINDOW_MIN_DUTY: u32 = BACKLIGHT_PERIOD * (330 - 145) / 330;
const WINDOW_MAX_DUTY: u32 = BACKLIGHT_PERIOD * (330 - 70) / 330;

const _: () = assert!(WINDOW_MIN_DUTY < WINDOW_MAX_DUTY);
const _: () = assert!(WINDOW_MAX_DUTY < BACKLIGHT_PERIOD);

/// Backlight inverter fit of the board, detected once at startup and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardVariant {
    /// First-generation inverter, driven across the full duty range
    Standard,
    /// Smoothed-PWM inverter input, duty confined to the calibrated analog
    /// window
    SmoothedInput,
}

impl BoardVariant {
    /// Read the variant strap once.
    ///
    /// Boards with the smoothed-input inverter have the strap grounded; on
    /// the others the pull-up reads high. Boards without the strap skip
    /// detection and construct the driver with [`BoardVariant::Standard`].
    pub fn detect<S: PinInterface>(strap: &S) -> Self {
        strap.set_function(PinFunction::InputPullUp);
        if strap.read() {
            BoardVariant::Standard
        } else {
            BoardVariant::SmoothedInput
        }
    }
}

/// LCD backlight on an inverted PWM output.
pub struct Backlight<P: PwmInterface> {
    pwm: P,
    channel: PwmChannel,
    variant: BoardVariant,
}

impl<P: PwmInterface> Backlight<P> {
    /// Create the driver: disables the backlight channel, programs the shared
    /// reference clock and routes the lamp pin to the PWM high-side output.
    /// The display stays dark until the first
    /// [`set_brightness`](Backlight::set_brightness) call.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the reference clock cannot be
    /// programmed.
    pub fn new<L: PinInterface>(
        pwm: P,
        channel: PwmChannel,
        lamp: &L,
        variant: BoardVariant,
    ) -> Result<Self> {
        pwm.disable_channel(channel);
        pwm.configure_clock(PWM_CLOCK_HZ)?;
        lamp.set_function(PinFunction::PwmHigh);

        crate::log_info!("backlight: {:?} inverter on channel {}", variant, channel.0);

        Ok(Self {
            pwm,
            channel,
            variant,
        })
    }

    /// Set the backlight brightness on a scale of 0 to [`MAX_BRIGHTNESS`].
    ///
    /// Values above the scale are clamped. The output polarity is inverted,
    /// so brightness 0 programs the variant's maximum duty and full
    /// brightness its minimum.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the platform rejects the channel
    /// configuration.
    pub fn set_brightness(&self, brightness: u32) -> Result<()> {
        let brightness = brightness.min(MAX_BRIGHTNESS);
        let dimming = MAX_BRIGHTNESS - brightness;
        let duty = match self.variant {
            BoardVariant::Standard => (BACKLIGHT_PERIOD - 1) * dimming / MAX_BRIGHTNESS,
            BoardVariant::SmoothedInput => {
                WINDOW_MIN_DUTY + (WINDOW_MAX_DUTY - WINDOW_MIN_DUTY) * dimming / MAX_BRIGHTNESS
            }
        };

        let config = PwmChannelConfig {
            period: BACKLIGHT_PERIOD,
            duty,
            dead_time_high: 0,
            dead_time_low: 0,
        };
        self.pwm.configure_channel(self.channel, &config)?;
        self.pwm.enable_channel(self.channel);

        crate::log_trace!("backlight: brightness {} duty {}", brightness, duty);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockPin, MockPwm};

    const CHANNEL: PwmChannel = PwmChannel(1);

    fn backlight(pwm: &MockPwm, variant: BoardVariant) -> Backlight<&MockPwm> {
        let lamp = MockPin::new();
        let backlight = Backlight::new(pwm, CHANNEL, &lamp, variant).unwrap();
        assert_eq!(lamp.function(), PinFunction::PwmHigh);
        backlight
    }

    fn duty_for(variant: BoardVariant, brightness: u32) -> u32 {
        let pwm = MockPwm::new();
        backlight(&pwm, variant).set_brightness(brightness).unwrap();
        pwm.channel(CHANNEL).config.unwrap().duty
    }

    #[test]
    fn test_detect_reads_strap_once() {
        let strap = MockPin::new();
        assert_eq!(BoardVariant::detect(&strap), BoardVariant::Standard);
        assert_eq!(strap.function(), PinFunction::InputPullUp);

        strap.set_input_high(false);
        assert_eq!(BoardVariant::detect(&strap), BoardVariant::SmoothedInput);
    }

    #[test]
    fn test_new_leaves_channel_dark() {
        let pwm = MockPwm::new();
        backlight(&pwm, BoardVariant::Standard);

        assert_eq!(pwm.clock_hz(), Some(PWM_CLOCK_HZ));
        assert!(!pwm.channel(CHANNEL).enabled);
        assert_eq!(pwm.channel(CHANNEL).config, None);
    }

    #[test]
    fn test_standard_duty_range() {
        // Inverted output: dark end is period-1, bright end is zero
        assert_eq!(
            duty_for(BoardVariant::Standard, 0),
            BACKLIGHT_PERIOD - 1
        );
        assert_eq!(duty_for(BoardVariant::Standard, MAX_BRIGHTNESS), 0);
    }

    #[test]
    fn test_smoothed_duty_window() {
        assert_eq!(duty_for(BoardVariant::SmoothedInput, 0), WINDOW_MAX_DUTY);
        assert_eq!(
            duty_for(BoardVariant::SmoothedInput, MAX_BRIGHTNESS),
            WINDOW_MIN_DUTY
        );

        // Every brightness stays inside the calibrated analog window
        for brightness in 0..=MAX_BRIGHTNESS {
            let duty = duty_for(BoardVariant::SmoothedInput, brightness);
            assert!((WINDOW_MIN_DUTY..=WINDOW_MAX_DUTY).contains(&duty));
        }
    }

    #[test]
    fn test_duty_monotonic_in_brightness() {
        for variant in [BoardVariant::Standard, BoardVariant::SmoothedInput] {
            let pwm = MockPwm::new();
            let backlight = backlight(&pwm, variant);
            let mut previous = u32::MAX;
            for brightness in 0..=MAX_BRIGHTNESS {
                backlight.set_brightness(brightness).unwrap();
                let state = pwm.channel(CHANNEL);
                assert!(state.enabled);
                let duty = state.config.unwrap().duty;
                assert!(duty <= previous, "duty must fall as brightness rises");
                previous = duty;
            }
        }
    }

    #[test]
    fn test_brightness_clamped_to_scale() {
        assert_eq!(
            duty_for(BoardVariant::Standard, MAX_BRIGHTNESS + 50),
            duty_for(BoardVariant::Standard, MAX_BRIGHTNESS)
        );
    }

    #[test]
    fn test_set_brightness_is_idempotent() {
        let pwm = MockPwm::new();
        let backlight = backlight(&pwm, BoardVariant::Standard);

        backlight.set_brightness(40).unwrap();
        let first = pwm.channel(CHANNEL);
        backlight.set_brightness(40).unwrap();
        assert_eq!(pwm.channel(CHANNEL), first);
        assert_eq!(pwm.configure_calls(), 2);
    }
}
