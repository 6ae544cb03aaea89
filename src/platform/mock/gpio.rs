//! Mock pin implementation for testing

use core::cell::Cell;

use crate::platform::traits::{PinFunction, PinInterface};

/// Mock pin
///
/// Tracks the selected pin function and simulates an external level for
/// input reads. A floating input reads high, matching the internal pull-up
/// on the real part; tests ground it with
/// [`set_input_high(false)`](MockPin::set_input_high).
#[derive(Debug)]
pub struct MockPin {
    function: Cell<PinFunction>,
    input_high: Cell<bool>,
}

impl MockPin {
    /// Create a new mock pin parked as a low digital output.
    pub fn new() -> Self {
        Self {
            function: Cell::new(PinFunction::OutputLow),
            input_high: Cell::new(true),
        }
    }

    /// Currently selected pin function.
    pub fn function(&self) -> PinFunction {
        self.function.get()
    }

    /// Set the external level seen by input reads.
    pub fn set_input_high(&self, high: bool) {
        self.input_high.set(high);
    }
}

impl Default for MockPin {
    fn default() -> Self {
        Self::new()
    }
}

impl PinInterface for MockPin {
    fn set_function(&self, function: PinFunction) {
        self.function.set(function);
    }

    fn read(&self) -> bool {
        self.input_high.get()
    }
}
