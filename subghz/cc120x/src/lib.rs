#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

#[macro_use]
extern crate num_derive;

mod bus;
pub mod cmd;
mod config;
pub mod configs;
mod driver;
mod error;
mod fifo;
pub mod regs;
mod status;
mod statusbyte;
#[cfg(test)]
mod testing;
mod transport;
pub mod traits;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PartNumber {
    Cc1200,
    Cc1201,
}

pub const RX_FIFO_SIZE: usize = 128;
pub const TX_FIFO_SIZE: usize = 128;

/// Broadcast addresses accepted when address filtering is enabled.
pub const BROADCAST_ADDRESS_0: u8 = 0x00;
pub const BROADCAST_ADDRESS_255: u8 = 0xFF;

pub use self::{
    bus::PinBus,
    cmd::Strobe,
    config::{DriverConfig, RegisterSetting},
    driver::{Driver, Mode},
    error::DriverError,
    status::{mask_and_shift, StatusType},
    statusbyte::{State, StatusByte},
    traits::NoPin,
    transport::Transport,
};

#[cfg(all(test, feature = "defmt"))]
mod defmt_tests {
    //! Required to satisfy defmt while running tests.
    //! All `defmt::` log statements are thrown away.

    #[defmt::global_logger]
    struct GlobalLogger;

    unsafe impl defmt::Logger for GlobalLogger {
        fn acquire() {}
        unsafe fn flush() {}
        unsafe fn release() {}
        unsafe fn write(_bytes: &[u8]) {}
    }

    defmt::timestamp!("");
}
