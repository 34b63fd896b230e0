//! GPIO output pins for RP2040
//!
//! Wraps `embassy-rp` push-pull outputs in the `pharos-hal` pin trait.

use embassy_rp::gpio::Output;
use pharos_hal::OutputPin;

/// A matrix row or column line driven by an RP2040 GPIO
///
/// Constructing the inner `Output` configures the pin as a push-pull
/// output; the initial level should be low so no LED lights up before
/// the first scan pass.
pub struct MatrixPin {
    pin: Output<'static>,
}

impl MatrixPin {
    /// Wrap an already-configured output pin
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for MatrixPin {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
