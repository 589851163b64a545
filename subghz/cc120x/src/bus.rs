use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

use crate::{traits::Bus, DriverError};

/// [`Bus`] over an embedded-hal spi bus with a manually driven chip select.
///
/// The chip signals readiness on its SO line, so `ready` is normally the
/// same physical pin as MISO, read as a plain gpio input.
pub struct PinBus<Spi, Cs, Ready> {
    spi: Spi,
    cs: Cs,
    ready: Ready,
}

impl<Spi, Cs, Ready> PinBus<Spi, Cs, Ready>
where
    Spi: SpiBus<u8>,
    Cs: OutputPin,
    Ready: InputPin,
{
    /// Create the bus and park chip select in its inactive (high) state.
    pub fn new(spi: Spi, mut cs: Cs, ready: Ready) -> Result<Self, DriverError> {
        cs.set_high().map_err(DriverError::pin)?;
        Ok(Self { spi, cs, ready })
    }

    /// Give the peripherals back.
    pub fn release(self) -> (Spi, Cs, Ready) {
        (self.spi, self.cs, self.ready)
    }
}

impl<Spi, Cs, Ready> Bus for PinBus<Spi, Cs, Ready>
where
    Spi: SpiBus<u8>,
    Cs: OutputPin,
    Ready: InputPin,
{
    fn exchange(&mut self, byte: u8) -> Result<u8, DriverError> {
        let mut word = [byte];
        self.spi
            .transfer_in_place(&mut word)
            .map_err(DriverError::spi)?;
        Ok(word[0])
    }

    fn select(&mut self) -> Result<(), DriverError> {
        self.cs.set_low().map_err(DriverError::pin)
    }

    /// Wait for the spi bus to go idle before chip select is released.
    fn deselect(&mut self) -> Result<(), DriverError> {
        self.spi.flush().map_err(DriverError::spi)?;
        self.cs.set_high().map_err(DriverError::pin)
    }

    fn is_ready(&mut self) -> Result<bool, DriverError> {
        self.ready.is_low().map_err(DriverError::pin)
    }
}
