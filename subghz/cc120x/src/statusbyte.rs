use bitfield::bitfield;

bitfield! {
    /// The status byte clocked out by the chip during the first byte of every transaction.
    #[derive(Clone, Copy, PartialEq)]
    pub struct StatusByte(u8);
    impl Debug;
    /// Stays high until power and crystal have stabilized. Should always be low when using the SPI interface.
    pub chip_rdyn, _: 7;
    /// Indicates the current main state machine mode.
    state_bits, _: 6, 4;
    reserved, _: 3, 0;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    IDLE = 0b000,
    RX = 0b001,
    TX = 0b010,
    FSTXON = 0b011,
    CALIBRATE = 0b100,
    SETTLING = 0b101,
    RX_FIFO_ERROR = 0b110,
    TX_FIFO_ERROR = 0b111,
}

impl StatusByte {
    pub fn state(self) -> State {
        match self.state_bits() {
            0b000 => State::IDLE,
            0b001 => State::RX,
            0b010 => State::TX,
            0b011 => State::FSTXON,
            0b100 => State::CALIBRATE,
            0b101 => State::SETTLING,
            0b110 => State::RX_FIFO_ERROR,
            _ => State::TX_FIFO_ERROR,
        }
    }

    /// true if the chip is ready, false otherwise
    pub fn chip_rdy(self) -> bool {
        !self.chip_rdyn()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusByte {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "StatusByte({=u8:#x})", self.0)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn can_get_state() {
        // Given
        let byte = StatusByte(0b1_110_0000);

        // Then
        assert_eq!(State::RX_FIFO_ERROR, byte.state());
        assert_eq!(true, byte.chip_rdyn());
        assert_eq!(false, byte.chip_rdy());
    }

    #[test]
    fn ready_idle() {
        let byte = StatusByte(0x0F);
        assert_eq!(State::IDLE, byte.state());
        assert!(byte.chip_rdy());
    }
}
