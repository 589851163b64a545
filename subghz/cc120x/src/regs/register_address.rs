use crate::cmd::EXTENDED_ADDRESS;

/// A 16 bit register address.
///
/// Addresses with high byte `0x2F` are in the extended register space, where
/// the low byte is the offset. All other addresses are in the normal space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressSpace {
    Normal,
    Extended,
}

impl RegisterAddress {
    pub const fn space(&self) -> AddressSpace {
        if (self.0 >> 8) as u8 == EXTENDED_ADDRESS {
            AddressSpace::Extended
        } else {
            AddressSpace::Normal
        }
    }

    pub const fn is_extended(&self) -> bool {
        matches!(self.space(), AddressSpace::Extended)
    }

    /// The address within its space.
    pub const fn offset(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<u16> for RegisterAddress {
    fn from(value: u16) -> Self {
        RegisterAddress(value)
    }
}
