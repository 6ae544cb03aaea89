//! Pin multiplexing and digital input traits
//!
//! The drivers only need three things from a pin: route it to one of the PWM
//! peripheral's complementary outputs, park it as a forced-low digital
//! output, or read it as a strapped input. That narrow surface is captured
//! here instead of a full GPIO interface.

/// Pin multiplexer function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFunction {
    /// Route the pin to the PWM peripheral's high-side output
    PwmHigh,
    /// Route the pin to the PWM peripheral's low-side (complementary) output
    PwmLow,
    /// Plain digital output, driven low
    OutputLow,
    /// Digital input with the internal pull-up enabled
    InputPullUp,
}

/// Pin interface trait
///
/// Platform implementations must provide this interface for each pin handed
/// to a driver.
///
/// # Safety Invariants
///
/// - One owner per pin instance
/// - [`set_function`](PinInterface::set_function) must be callable from
///   interrupt context (the sounder parks its pins low from the tick handler)
pub trait PinInterface {
    /// Select the pin function.
    ///
    /// Mux writes do not fail on this hardware; a pin wired to a function it
    /// cannot carry is a board bug, not a runtime condition.
    fn set_function(&self, function: PinFunction);

    /// Read the digital level of the pin. Meaningful in input functions.
    fn read(&self) -> bool;
}

impl<T: PinInterface + ?Sized> PinInterface for &T {
    fn set_function(&self, function: PinFunction) {
        (**self).set_function(function)
    }

    fn read(&self) -> bool {
        (**self).read()
    }
}
