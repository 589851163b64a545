mod header;
mod strobe;

pub const SINGLE_WRITE: u8 = 0x00;
pub const BURST_WRITE: u8 = 0x40;
pub const SINGLE_READ: u8 = 0x80;
pub const BURST_READ: u8 = 0xC0;
/// Header selector for the extended register space.
pub const EXTENDED_ADDRESS: u8 = 0x2F;
/// Bits of the header byte that carry the address or selector.
pub const ADDRESS_MASK: u8 = 0x3F;
/// Dummy byte clocked out while reading.
pub const DUMMY: u8 = 0xFF;

pub use {
    header::{Access, Header, HEADER_MAX},
    strobe::{Strobe, STROBE_FIRST, STROBE_LAST},
};
