use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    cmd::Strobe,
    regs::{ext, MarcState, MarcStatusOut, RegisterAddress},
    traits::Bus,
    Driver, DriverError, StatusByte,
};

/// The status and state registers that can be queried with [`Driver::status`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusType {
    /// The status byte returned by a SNOP strobe.
    Status,
    MarcState,
    MarcStatus0,
    MarcStatus1,
    ModemStatus0,
    ModemStatus1,
}

impl StatusType {
    /// The register holding the status, `None` for the strobe status byte.
    pub const fn address(self) -> Option<RegisterAddress> {
        match self {
            StatusType::Status => None,
            StatusType::MarcState => Some(ext::MARCSTATE),
            StatusType::MarcStatus0 => Some(ext::MARC_STATUS0),
            StatusType::MarcStatus1 => Some(ext::MARC_STATUS1),
            StatusType::ModemStatus0 => Some(ext::MODEM_STATUS0),
            StatusType::ModemStatus1 => Some(ext::MODEM_STATUS1),
        }
    }
}

/// Keep `keep_bits` of `raw` and shift the result.
///
/// A positive `shift` in 1..=8 shifts right, a negative in -8..=-1 shifts left.
/// Any other value leaves the masked byte as is.
pub const fn mask_and_shift(raw: u8, keep_bits: u8, shift: i8) -> u8 {
    let value = raw & keep_bits;
    match shift {
        1..=7 => value >> shift,
        -7..=-1 => value << -shift,
        8 | -8 => 0,
        _ => value,
    }
}

impl<B: Bus, Reset: OutputPin, Delay: DelayNs> Driver<B, Reset, Delay> {
    /// Read a status byte, keep `keep_bits` and shift it by `shift` (see [`mask_and_shift`]).
    ///
    /// [`StatusType::Status`] is read with a SNOP strobe,
    /// the other types with a single register read.
    pub fn status(
        &mut self,
        kind: StatusType,
        keep_bits: u8,
        shift: i8,
    ) -> Result<u8, DriverError> {
        let raw = match kind.address() {
            None => self.strobe(Strobe::SNOP)?.0,
            Some(address) => self.read_reg(address)?,
        };

        Ok(mask_and_shift(raw, keep_bits, shift))
    }

    /// Read the live chip status byte.
    pub fn status_byte(&mut self) -> Result<StatusByte, DriverError> {
        self.strobe(Strobe::SNOP)
    }

    pub fn marc_state(&mut self) -> Result<MarcState, DriverError> {
        self.read_reg(ext::MARCSTATE).map(MarcState)
    }

    /// The cause of the last MCU wakeup, `None` for codes not in the datasheet.
    pub fn marc_status_out(&mut self) -> Result<Option<MarcStatusOut>, DriverError> {
        let value = self.read_reg(ext::MARC_STATUS1)?;
        Ok(MarcStatusOut::from_bits(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        cmd::{DUMMY, EXTENDED_ADDRESS, SINGLE_READ},
        regs::MarcStateValue,
        testing::BusScript,
        State,
    };

    use super::*;

    #[test]
    fn mask_shift_table() {
        assert_eq!(0x1F, mask_and_shift(0xFF, 0x1F, 0));
        assert_eq!(0x03, mask_and_shift(0xFF, 0x1F, 3));
        assert_eq!(0x10, mask_and_shift(0x01, 0xFF, -4));
    }

    #[test]
    fn mask_shift_limits() {
        assert_eq!(0x00, mask_and_shift(0xFF, 0xFF, 8));
        assert_eq!(0x00, mask_and_shift(0xFF, 0xFF, -8));
        assert_eq!(0x0F, mask_and_shift(0xFF, 0x0F, 9));
        assert_eq!(0x0F, mask_and_shift(0xFF, 0x0F, -9));
        assert_eq!(0x80, mask_and_shift(0x01, 0xFF, -7));
    }

    #[test]
    fn status_uses_snop() {
        // Given
        let mut script = BusScript::new();
        script.frame(&[(Strobe::SNOP as u8, 0b0110_1111)]);
        let mut driver = script.into_driver();

        // When
        let state = driver.status(StatusType::Status, 0x70, 4).unwrap();

        // Then
        assert_eq!(0b110, state);
        assert_eq!(State::RX_FIFO_ERROR, driver.last_status().unwrap().state());
    }

    #[test]
    fn status_reads_register() {
        // Given
        let mut script = BusScript::new();
        script.frame(&[
            (SINGLE_READ | EXTENDED_ADDRESS, 0x0F),
            (0x73, 0x0F),
            (DUMMY, 0b0100_0001),
        ]);
        let mut driver = script.into_driver();

        // When
        let state = driver.status(StatusType::MarcState, 0x1F, 0).unwrap();

        // Then
        assert_eq!(MarcStateValue::IDLE as u8, state);
    }

    #[test]
    fn typed_marc_state() {
        // Given
        let mut script = BusScript::new();
        script.frame(&[
            (SINGLE_READ | EXTENDED_ADDRESS, 0x2F),
            (0x73, 0x2F),
            (DUMMY, 0b0010_0000 | 22),
        ]);
        let mut driver = script.into_driver();

        // When
        let state = driver.marc_state().unwrap();

        // Then
        assert_eq!(Some(MarcStateValue::TX_FIFO_ERR), state.marc_state());
        assert!(state.is_fifo_error());
    }

    #[test]
    fn marc_status_out() {
        // Given
        let mut script = BusScript::new();
        script.frame(&[
            (SINGLE_READ | EXTENDED_ADDRESS, 0x0F),
            (0x94, 0x0F),
            (DUMMY, 0x40),
        ]);
        let mut driver = script.into_driver();

        // Then
        assert_eq!(Some(MarcStatusOut::TxFinished), driver.marc_status_out().unwrap());
    }

    #[test]
    fn addresses() {
        assert_eq!(None, StatusType::Status.address());
        assert_eq!(Some(RegisterAddress(0x2F73)), StatusType::MarcState.address());
        assert_eq!(Some(RegisterAddress(0x2F95)), StatusType::MarcStatus0.address());
        assert_eq!(Some(RegisterAddress(0x2F94)), StatusType::MarcStatus1.address());
        assert_eq!(Some(RegisterAddress(0x2F93)), StatusType::ModemStatus0.address());
        assert_eq!(Some(RegisterAddress(0x2F92)), StatusType::ModemStatus1.address());
    }
}
