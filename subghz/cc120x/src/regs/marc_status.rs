/// Cause of the last MCU wakeup, read from MARC_STATUS1.
#[derive(Debug, Clone, Copy, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarcStatusOut {
    NoFailure = 0x00,
    RxTimeout = 0x01,
    /// RX terminated based on carrier sense or PQT.
    RxTermination = 0x02,
    /// eWOR sync lost (16 slots with no reception).
    EworSyncLost = 0x03,
    PacketDiscardedLength = 0x04,
    PacketDiscardedAddress = 0x05,
    PacketDiscardedCrc = 0x06,
    TxFifoOverflow = 0x07,
    TxFifoUnderflow = 0x08,
    RxFifoOverflow = 0x09,
    RxFifoUnderflow = 0x0A,
    /// A TX strobe was ignored due to a busy channel.
    TxOnCcaFailed = 0x0B,
    TxFinished = 0x40,
    /// A packet is in the RX fifo ready to be read.
    RxFinished = 0x80,
}

impl MarcStatusOut {
    pub fn from_bits(value: u8) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(value)
    }
}
