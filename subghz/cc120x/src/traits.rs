use core::convert::Infallible;

use embedded_hal::digital;

use crate::DriverError;

/// The raw bus capabilities needed to talk to the chip.
#[cfg_attr(test, mockall::automock)]
pub trait Bus {
    /// Clock out `byte` and return the byte clocked in at the same time.
    fn exchange(&mut self, byte: u8) -> Result<u8, DriverError>;

    /// Assert chip select (CSn low).
    fn select(&mut self) -> Result<(), DriverError>;

    /// Deassert chip select (CSn high).
    fn deselect(&mut self) -> Result<(), DriverError>;

    /// Sample the ready signal. The chip pulls SO low when it is ready for a transaction.
    fn is_ready(&mut self) -> Result<bool, DriverError>;
}

/// Placeholder for a reset pin that is not wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl digital::OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
