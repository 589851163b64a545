use crate::regs::{AddressSpace, RegisterAddress};

use super::{ADDRESS_MASK, BURST_READ, BURST_WRITE, EXTENDED_ADDRESS, SINGLE_READ, SINGLE_WRITE};

pub const HEADER_MAX: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    Read,
    Write,
}

/// The one or two header bytes that start a register access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Header {
    buf: [u8; HEADER_MAX],
    len: usize,
}

impl Header {
    /// Header for accessing `len` bytes starting at `address`.
    /// A single byte uses the single opcode, anything longer uses burst.
    pub const fn new(access: Access, address: RegisterAddress, len: usize) -> Self {
        let opcode = match (access, len > 1) {
            (Access::Read, false) => SINGLE_READ,
            (Access::Read, true) => BURST_READ,
            (Access::Write, false) => SINGLE_WRITE,
            (Access::Write, true) => BURST_WRITE,
        };

        match address.space() {
            AddressSpace::Normal => Self {
                buf: [opcode | (address.offset() & ADDRESS_MASK), 0],
                len: 1,
            },
            AddressSpace::Extended => Self {
                buf: [opcode | EXTENDED_ADDRESS, address.offset()],
                len: 2,
            },
        }
    }

    pub const fn read(address: RegisterAddress, len: usize) -> Self {
        Self::new(Access::Read, address, len)
    }

    pub const fn write(address: RegisterAddress, len: usize) -> Self {
        Self::new(Access::Write, address, len)
    }

    pub const fn len(&self) -> usize {
        self.len
    }
}

impl AsRef<[u8]> for Header {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
