use bitfield::bitfield;

bitfield! {
    /// The MARCSTATE register.
    #[derive(Clone, Copy)]
    pub struct MarcState(u8);
    impl Debug;
    not_used, _: 7;
    marc_2pin_state_bits, _: 6, 5;
    marc_state_bits, _: 4, 0;
}

/// Main radio control state.
#[derive(Debug, Clone, Copy, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum MarcStateValue {
    SLEEP = 0,
    IDLE = 1,
    XOFF = 2,
    BIAS_SETTLE_MC = 3,
    REG_SETTLE_MC = 4,
    MANCAL = 5,
    BIAS_SETTLE = 6,
    REG_SETTLE = 7,
    STARTCAL = 8,
    BWBOOST = 9,
    FS_LOCK = 10,
    IFADCON = 11,
    ENDCAL = 12,
    RX = 13,
    RX_END = 14,
    RXDCM = 15,
    TXRX_SWITCH = 16,
    RX_FIFO_ERR = 17,
    FSTXON = 18,
    TX = 19,
    TX_END = 20,
    RXTX_SWITCH = 21,
    TX_FIFO_ERR = 22,
    IFADCON_TXRX = 23,
    RESERVED = 24,
}

/// The coarse state mirrored on the MARC_2PIN_STATUS gpio outputs.
#[derive(Debug, Clone, Copy, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Marc2PinState {
    Settling = 0,
    Tx = 1,
    Idle = 2,
    Rx = 3,
}

impl MarcState {
    /// The decoded state, or `None` for the reserved codes 25-31.
    pub fn marc_state(&self) -> Option<MarcStateValue> {
        num_traits::FromPrimitive::from_u8(self.marc_state_bits())
    }

    pub fn marc_2pin_state(&self) -> Marc2PinState {
        match self.marc_2pin_state_bits() {
            0 => Marc2PinState::Settling,
            1 => Marc2PinState::Tx,
            2 => Marc2PinState::Idle,
            _ => Marc2PinState::Rx,
        }
    }

    pub fn is_fifo_error(&self) -> bool {
        matches!(
            self.marc_state(),
            Some(MarcStateValue::RX_FIFO_ERR | MarcStateValue::TX_FIFO_ERR)
        )
    }
}
