//! Mock PWM implementation for testing

use core::cell::RefCell;

use heapless::Vec;

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::{PwmChannel, PwmChannelConfig, PwmInterface},
    Result,
};

/// Number of channels the mock peripheral provides.
const MOCK_CHANNELS: usize = 4;

/// Capacity of the recorded configure-call history.
const HISTORY_DEPTH: usize = 16;

/// Snapshot of one mock channel for test verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockChannelState {
    /// Last configuration written to the channel, if any
    pub config: Option<PwmChannelConfig>,
    /// Whether the channel outputs are currently driven
    pub enabled: bool,
}

#[derive(Debug, Default)]
struct MockPwmState {
    clock_hz: Option<u32>,
    channels: [MockChannelState; MOCK_CHANNELS],
    history: Vec<(PwmChannel, PwmChannelConfig), HISTORY_DEPTH>,
}

/// Mock PWM peripheral
///
/// Tracks clock setup and per-channel register programming for test
/// verification, and validates configurations the way real hardware
/// constrains them. Interior mutability mirrors the `&self` register-write
/// contract of [`PwmInterface`].
#[derive(Debug, Default)]
pub struct MockPwm {
    state: RefCell<MockPwmState>,
}

impl MockPwm {
    /// Create a new mock PWM peripheral with all channels idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference clock programmed via `configure_clock`, if any.
    pub fn clock_hz(&self) -> Option<u32> {
        self.state.borrow().clock_hz
    }

    /// Snapshot of one channel's programmed state.
    ///
    /// # Panics
    ///
    /// Panics if the channel is outside the mock's range; tests address
    /// channels they created.
    pub fn channel(&self, channel: PwmChannel) -> MockChannelState {
        self.state.borrow().channels[channel.0 as usize]
    }

    /// Number of successful `configure_channel` calls so far.
    pub fn configure_calls(&self) -> usize {
        self.state.borrow().history.len()
    }
}

impl PwmInterface for MockPwm {
    fn configure_clock(&self, frequency_hz: u32) -> Result<()> {
        if frequency_hz == 0 {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }
        self.state.borrow_mut().clock_hz = Some(frequency_hz);
        Ok(())
    }

    fn configure_channel(&self, channel: PwmChannel, config: &PwmChannelConfig) -> Result<()> {
        if channel.0 as usize >= MOCK_CHANNELS {
            return Err(PlatformError::Pwm(PwmError::ChannelUnavailable));
        }
        if config.period == 0 {
            return Err(PlatformError::Pwm(PwmError::InvalidPeriod));
        }
        if config.duty > config.period {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        if u32::from(config.dead_time_high) > config.duty
            || u32::from(config.dead_time_low) > config.duty
        {
            return Err(PlatformError::Pwm(PwmError::InvalidDeadTime));
        }

        let mut state = self.state.borrow_mut();
        state.channels[channel.0 as usize].config = Some(*config);
        let _ = state.history.push((channel, *config));
        Ok(())
    }

    fn enable_channel(&self, channel: PwmChannel) {
        if let Some(ch) = self
            .state
            .borrow_mut()
            .channels
            .get_mut(channel.0 as usize)
        {
            ch.enabled = true;
        }
    }

    fn disable_channel(&self, channel: PwmChannel) {
        if let Some(ch) = self
            .state
            .borrow_mut()
            .channels
            .get_mut(channel.0 as usize)
        {
            ch.enabled = false;
        }
    }
}
