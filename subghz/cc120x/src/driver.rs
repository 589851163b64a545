use embedded_hal::{delay::DelayNs, digital::OutputPin};
use num_traits::FromPrimitive;

use crate::{
    cmd::{Header, Strobe, DUMMY},
    config::{DriverConfig, RegisterSetting},
    regs::{ext, pri, RegisterAddress},
    traits::{Bus, NoPin},
    transport::Transport,
    DriverError, PartNumber, StatusByte, BROADCAST_ADDRESS_0,
};

/// The last mode requested by the caller.
///
/// The chip moves on by itself, e.g. back to idle after a transmission,
/// so poll the chip state rather than trusting this.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Uninitialized,
    Ready,
    Idle,
    Receiving,
    Transmitting,
    PoweredDown,
}

pub struct Driver<B: Bus, Reset: OutputPin, Delay: DelayNs> {
    pub(crate) transport: Transport<B, Delay>,
    reset: Option<Reset>,
    config: DriverConfig,
    address: u8,
    mode: Mode,
    pub(crate) last_status: Option<StatusByte>,
}

impl<B: Bus, Delay: DelayNs> Driver<B, NoPin, Delay> {
    /// Create a driver for a chip without a wired reset pin.
    /// Resets are then always done with the SRES strobe.
    pub fn without_reset(bus: B, delay: Delay, config: DriverConfig) -> Self {
        Self::new(bus, None, delay, config)
    }
}

impl<B: Bus, Reset: OutputPin, Delay: DelayNs> Driver<B, Reset, Delay> {
    pub fn new(bus: B, reset: Option<Reset>, delay: Delay, config: DriverConfig) -> Self {
        Self {
            transport: Transport::new(
                bus,
                delay,
                config.ready_timeout_us,
                config.ready_poll_interval_us,
            ),
            reset,
            config,
            address: BROADCAST_ADDRESS_0,
            mode: Mode::Uninitialized,
            last_status: None,
        }
    }

    /// Tear down the driver and hand back the bus, reset pin and delay.
    pub fn release(self) -> (B, Option<Reset>, Delay) {
        let (bus, delay) = self.transport.release();
        (bus, self.reset, delay)
    }

    /// Bring the chip up: release chip select, reset it and wait for it to settle.
    ///
    /// A failing reset is not detected here, poll the status afterwards.
    pub fn init(&mut self) -> Result<(), DriverError> {
        self.transport.end()?;

        if let Some(reset) = self.reset.as_mut() {
            reset.set_high().map_err(DriverError::pin)?; // Release chip reset pin.
            self.transport.delay_ms(self.config.power_on_settle_ms);
        }

        self.reset(true)?;
        self.transport.delay_ms(self.config.init_settle_ms);

        info!("Chip initialized");
        Ok(())
    }

    /// Reset the chip.
    /// A hardware reset is only done if requested and a reset pin is available,
    /// otherwise the SRES strobe is issued.
    pub fn reset(&mut self, hardware: bool) -> Result<(), DriverError> {
        if hardware && self.reset.is_some() {
            self.pulse_reset()?;
        } else {
            self.strobe(Strobe::SRES)?;
        }

        self.last_status = None;
        self.mode = Mode::Ready;
        Ok(())
    }

    fn pulse_reset(&mut self) -> Result<(), DriverError> {
        let Some(reset) = self.reset.as_mut() else {
            return Ok(());
        };

        reset.set_low().map_err(DriverError::pin)?; // Trigger chip reset pin.
        self.transport.delay_ms(self.config.reset_pulse_ms);
        reset.set_high().map_err(DriverError::pin)?; // Release chip reset pin.
        self.transport.delay_ms(self.config.reset_settle_ms);

        debug!("Hardware reset done");
        Ok(())
    }

    /// Write a configuration table.
    ///
    /// All settings are written as single register writes inside one transaction,
    /// and the chip is given time to settle afterwards.
    pub fn configure(&mut self, settings: &[RegisterSetting]) -> Result<(), DriverError> {
        if settings.is_empty() {
            return Ok(());
        }

        self.transport.transaction(|t| {
            for setting in settings {
                let header = Header::write(setting.address, 1);
                for &byte in header.as_ref() {
                    t.exchange(byte)?;
                }
                t.exchange(setting.value)?;
            }
            Ok(())
        })?;
        self.last_status = None;

        self.transport.delay_ms(self.config.configure_settle_ms);

        debug!("Wrote {} register settings", settings.len());
        Ok(())
    }

    /// Get the spi status returned by the last register read or strobe.
    /// Writing registers does not update status.
    pub fn last_status(&self) -> Option<StatusByte> {
        self.last_status
    }

    /// The mode last requested through this driver.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Strobe a command to the chip.
    /// This action _does_ update `last_status`.
    pub fn strobe(&mut self, strobe: Strobe) -> Result<StatusByte, DriverError> {
        let status = self.transport.transaction(|t| {
            let status = StatusByte(t.exchange(strobe as u8)?);
            if strobe == Strobe::SRES {
                // When SRES strobe is issued the CSn pin must be kept low until the SO pin goes low again.
                t.wait_until_ready()?;
            }
            Ok(status)
        })?;

        trace!("Strobe {:?}", strobe);
        self.last_status = Some(status);
        Ok(status)
    }

    /// Strobe a raw command byte.
    /// Bytes outside the strobe range are ignored and `None` is returned.
    pub fn strobe_raw(&mut self, command: u8) -> Result<Option<StatusByte>, DriverError> {
        match Strobe::from_u8(command) {
            Some(strobe) => self.strobe(strobe).map(Some),
            None => {
                debug!("Ignoring invalid strobe {:#x}", command);
                Ok(None)
            }
        }
    }

    pub fn idle(&mut self) -> Result<(), DriverError> {
        self.strobe(Strobe::SIDLE)?;
        self.mode = Mode::Idle;
        Ok(())
    }

    /// Enter sleep when chip select is released.
    pub fn power_down(&mut self) -> Result<(), DriverError> {
        self.strobe(Strobe::SPWD)?;
        self.mode = Mode::PoweredDown;
        Ok(())
    }

    /// Transmit what is in the TX fifo.
    pub fn transmit(&mut self) -> Result<(), DriverError> {
        self.strobe(Strobe::STX)?;
        self.mode = Mode::Transmitting;
        Ok(())
    }

    /// Start receiving into the RX fifo.
    pub fn receive(&mut self) -> Result<(), DriverError> {
        self.strobe(Strobe::SRX)?;
        self.mode = Mode::Receiving;
        Ok(())
    }

    /// Flush the RX fifo. Only valid in IDLE or RX_FIFO_ERR.
    pub fn flush_rx_fifo(&mut self) -> Result<(), DriverError> {
        self.strobe(Strobe::SFRX).map(|_| ())
    }

    /// Flush the TX fifo. Only valid in IDLE or TX_FIFO_ERR.
    pub fn flush_tx_fifo(&mut self) -> Result<(), DriverError> {
        self.strobe(Strobe::SFTX).map(|_| ())
    }

    /// Read a sequence of registers starting at `first` into `buffer`.
    /// Returns the number of bytes read, nothing is transferred for an empty buffer.
    /// This action _does_ update `last_status`.
    pub fn read_regs(
        &mut self,
        first: RegisterAddress,
        buffer: &mut [u8],
    ) -> Result<usize, DriverError> {
        if buffer.is_empty() {
            return Ok(0);
        }

        let header = Header::read(first, buffer.len());
        let status = self.transport.transaction(|t| {
            let (first_byte, rest) = header.as_ref().split_at(1);
            let status = StatusByte(t.exchange(first_byte[0])?);
            for &byte in rest {
                t.exchange(byte)?;
            }
            for value in buffer.iter_mut() {
                *value = t.exchange(DUMMY)?;
            }
            Ok(status)
        })?;

        self.last_status = Some(status);
        Ok(buffer.len())
    }

    /// Read a single register value from chip.
    /// This action _does_ update `last_status`.
    pub fn read_reg(&mut self, address: RegisterAddress) -> Result<u8, DriverError> {
        let mut value = [0];
        self.read_regs(address, &mut value)?;
        Ok(value[0])
    }

    /// Write a sequence of register values starting at `first`.
    /// Returns the number of bytes written, nothing is transferred for an empty slice.
    /// This action _does not_ update `last_status`.
    pub fn write_regs(&mut self, first: RegisterAddress, values: &[u8]) -> Result<usize, DriverError> {
        self.write_padded(first, values, 0)
    }

    /// Write a single register value to chip.
    /// This action _does not_ update `last_status`.
    pub fn write_reg(&mut self, address: RegisterAddress, value: u8) -> Result<(), DriverError> {
        self.write_regs(address, &[value]).map(|_| ())
    }

    /// Set `bits` in a register.
    /// The register is only written if its value changes. Returns whether it was written.
    pub fn update_reg(&mut self, address: RegisterAddress, bits: u8) -> Result<bool, DriverError> {
        let old = self.read_reg(address)?;
        let new = old | bits;
        if new == old {
            return Ok(false);
        }

        self.write_reg(address, new)?;
        Ok(true)
    }

    /// Write `values` followed by `padding` filler bytes in one access.
    pub(crate) fn write_padded(
        &mut self,
        first: RegisterAddress,
        values: &[u8],
        padding: usize,
    ) -> Result<usize, DriverError> {
        let len = values.len() + padding;
        if len == 0 {
            return Ok(0);
        }

        let header = Header::write(first, len);
        self.transport.transaction(|t| {
            for &byte in header.as_ref().iter().chain(values) {
                t.exchange(byte)?;
            }
            for _ in 0..padding {
                t.exchange(FIFO_PADDING)?;
            }
            Ok(())
        })?;

        self.last_status = None;
        Ok(len)
    }

    /// The device address last written or read, without bus access.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Read the device address from the chip and remember it.
    pub fn read_address(&mut self) -> Result<u8, DriverError> {
        self.address = self.read_reg(pri::DEV_ADDR)?;
        Ok(self.address)
    }

    pub fn set_address(&mut self, address: u8) -> Result<(), DriverError> {
        self.address = address;
        self.write_reg(pri::DEV_ADDR, address)
    }

    /// Read the chip part number.
    /// This action _does_ update `last_status`.
    pub fn read_part_number(&mut self) -> Result<PartNumber, DriverError> {
        match self.read_reg(ext::PARTNUMBER)? {
            0x20 => Ok(PartNumber::Cc1200),
            0x21 => Ok(PartNumber::Cc1201),
            _ => Err(DriverError::InvalidPartNumber),
        }
    }
}

/// Filler clocked out after a padded write.
const FIFO_PADDING: u8 = 0x00;
