use embedded_hal::{delay::DelayNs, digital::OutputPin};
use heapless::Vec;

use crate::{
    regs::{ext, pri, MarcStateValue},
    traits::Bus,
    Driver, DriverError, RX_FIFO_SIZE, TX_FIFO_SIZE,
};

/// Frames shorter than this carry no payload: byte 0 is the length,
/// byte 1 the target address and byte 2 the source address.
const TX_FRAME_MIN: usize = 3;

impl<B: Bus, Reset: OutputPin, Delay: DelayNs> Driver<B, Reset, Delay> {
    /// Read everything currently in the RX fifo.
    /// An empty fifo gives an empty result.
    /// This action _does_ update `last_status`.
    pub fn read_rx_fifo(&mut self) -> Result<Vec<u8, RX_FIFO_SIZE>, DriverError> {
        let mut buffer = Vec::new();

        let available = self.read_reg(ext::NUM_RXBYTES)? as usize;
        if available == 0 {
            return Ok(buffer);
        }

        let len = usize::min(available, RX_FIFO_SIZE);
        buffer
            .resize_default(len)
            .map_err(|_| DriverError::Capacity)?;
        self.read_regs(pri::FIFO, &mut buffer)?;

        trace!("Read {} bytes from RX fifo", len);
        Ok(buffer)
    }

    /// Write a frame to the TX fifo.
    ///
    /// Frames of 2 bytes or less are ignored. The frame is written with one
    /// trailing filler byte so the chip does not drop the last payload byte.
    pub fn write_tx_fifo(&mut self, frame: &[u8]) -> Result<(), DriverError> {
        if frame.len() < TX_FRAME_MIN {
            debug!("Ignoring {} byte TX frame", frame.len());
            return Ok(());
        }

        if frame.len() + 1 > TX_FIFO_SIZE {
            return Err(DriverError::Capacity);
        }

        self.write_padded(pri::FIFO, frame, 1)?;

        trace!("Wrote {} bytes to TX fifo", frame.len());
        Ok(())
    }

    /// Flush the fifo that is in an error state, if any.
    ///
    /// Returns the number of flushes done. A healthy chip gives 0.
    pub fn resolve_fifo_error(&mut self) -> Result<u8, DriverError> {
        let state = self.marc_state()?.marc_state();
        let mut flushed = 0;

        if state == Some(MarcStateValue::RX_FIFO_ERR) {
            warn!("RX fifo error, flushing");
            self.flush_rx_fifo()?;
            flushed += 1;
        }

        if state == Some(MarcStateValue::TX_FIFO_ERR) {
            warn!("TX fifo error, flushing");
            self.flush_tx_fifo()?;
            flushed += 1;
        }

        Ok(flushed)
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mocks::delay::MockDelay;

    use crate::{
        cmd::{Strobe, BURST_READ, BURST_WRITE, DUMMY, EXTENDED_ADDRESS, SINGLE_READ},
        testing::BusScript,
        traits::MockBus,
        DriverConfig,
    };

    use super::*;

    fn expect_marc_state(script: &mut BusScript, value: u8) {
        script.frame(&[
            (SINGLE_READ | EXTENDED_ADDRESS, 0x0F),
            (0x73, 0x0F),
            (DUMMY, value),
        ]);
    }

    fn expect_num_rxbytes(script: &mut BusScript, value: u8) {
        script.frame(&[
            (SINGLE_READ | EXTENDED_ADDRESS, 0x1F),
            (0xD7, 0x1F),
            (DUMMY, value),
        ]);
    }

    #[test]
    fn read_empty_rx_fifo() {
        // Given
        let mut script = BusScript::new();
        expect_num_rxbytes(&mut script, 0);
        let mut driver = script.into_driver();

        // When
        let received = driver.read_rx_fifo().unwrap();

        // Then
        assert!(received.is_empty());
    }

    #[test]
    fn read_rx_fifo() {
        // Given
        let mut script = BusScript::new();
        expect_num_rxbytes(&mut script, 3);
        script.frame(&[
            (BURST_READ | 0x3F, 0x1F),
            (DUMMY, 0x02),
            (DUMMY, 0x05),
            (DUMMY, 0xAA),
        ]);
        let mut driver = script.into_driver();

        // When
        let received = driver.read_rx_fifo().unwrap();

        // Then
        assert_eq!(&[0x02, 0x05, 0xAA], received.as_slice());
    }

    #[test]
    fn short_tx_frames_are_ignored() {
        // Given
        let mut driver =
            Driver::without_reset(MockBus::new(), MockDelay::new(), DriverConfig::default());

        // Then
        driver.write_tx_fifo(&[]).unwrap();
        driver.write_tx_fifo(&[0x01]).unwrap();
        driver.write_tx_fifo(&[0x01, 0x02]).unwrap();
    }

    #[test]
    fn write_tx_fifo_adds_trailing_byte() {
        // Given
        let mut script = BusScript::new();
        script.frame(&[
            (BURST_WRITE | 0x3F, 0x0F),
            (0x04, 0x0F),
            (0x10, 0x0F),
            (0x20, 0x0F),
            (0xAB, 0x0F),
            (0xCD, 0x0F),
            (0x00, 0x0F),
        ]);
        let mut driver = script.into_driver();

        // Then
        driver
            .write_tx_fifo(&[0x04, 0x10, 0x20, 0xAB, 0xCD])
            .unwrap();
    }

    #[test]
    fn oversized_tx_frame() {
        // Given
        let mut driver =
            Driver::without_reset(MockBus::new(), MockDelay::new(), DriverConfig::default());

        // Then
        assert_eq!(
            Err(DriverError::Capacity),
            driver.write_tx_fifo(&[0; TX_FIFO_SIZE])
        );
    }

    #[test]
    fn healthy_chip_has_no_fifo_error() {
        // Given
        let mut script = BusScript::new();
        expect_marc_state(&mut script, 0b0100_0001);
        expect_marc_state(&mut script, 0b0100_0001);
        let mut driver = script.into_driver();

        // Then
        assert_eq!(0, driver.resolve_fifo_error().unwrap());
        assert_eq!(0, driver.resolve_fifo_error().unwrap());
    }

    #[test]
    fn rx_fifo_error_is_flushed_once() {
        // Given
        let mut script = BusScript::new();
        expect_marc_state(&mut script, 0b0110_0000 | 17);
        script.frame(&[(Strobe::SFRX as u8, 0x6F)]);
        expect_marc_state(&mut script, 0b0100_0001);
        let mut driver = script.into_driver();

        // Then
        assert_eq!(1, driver.resolve_fifo_error().unwrap());
        assert_eq!(0, driver.resolve_fifo_error().unwrap());
    }

    #[test]
    fn tx_fifo_error_is_flushed() {
        // Given
        let mut script = BusScript::new();
        expect_marc_state(&mut script, 22);
        script.frame(&[(Strobe::SFTX as u8, 0x7F)]);
        let mut driver = script.into_driver();

        // Then
        assert_eq!(1, driver.resolve_fifo_error().unwrap());
    }
}
