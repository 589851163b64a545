pub const STROBE_FIRST: u8 = 0x30;
pub const STROBE_LAST: u8 = 0x3D;

/// Command strobes. Any byte in `STROBE_FIRST..=STROBE_LAST` is a strobe.
#[derive(Clone, Copy, Debug, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strobe {
    /// Reset chip
    SRES = 0x30,
    /// Enable and calibrate frequency synthesizer
    SFSTXON = 0x31,
    /// Turn off crystal oscillator (Enter XOFF state when CSn is de-asserted)
    SXOFF = 0x32,
    /// Calibrate frequency synthesizer and turn it off
    SCAL = 0x33,
    /// Enable RX
    SRX = 0x34,
    /// Enable TX
    STX = 0x35,
    /// Exit RX/TX and turn off frequency synthesizer
    SIDLE = 0x36,
    /// Automatic frequency compensation
    SAFC = 0x37,
    /// Start automatic RX polling sequence
    SWOR = 0x38,
    /// Enter SLEEP mode when CSn is de-asserted
    SPWD = 0x39,
    /// Flush the RX FIFO
    SFRX = 0x3A,
    /// Flush the TX FIFO
    SFTX = 0x3B,
    /// Reset real time clock
    SWORRST = 0x3C,
    /// No operation - may be used to get access to the chip status byte
    SNOP = 0x3D,
}
