use embedded_hal::{digital, spi};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The chip did not pull SO low within the configured ready timeout.
    BusNotReady,
    Spi(spi::ErrorKind),
    Pin(digital::ErrorKind),
    InvalidPartNumber,
    /// The write does not fit in the TX fifo.
    Capacity,
}

impl DriverError {
    pub(crate) fn spi<E: spi::Error>(error: E) -> Self {
        Self::Spi(error.kind())
    }

    pub(crate) fn pin<E: digital::Error>(error: E) -> Self {
        Self::Pin(error.kind())
    }
}
