//! Register settings tables for [`Driver::configure`](crate::Driver::configure).

mod preferred;
mod rx_sniff;

pub use preferred::PREFERRED_SETTINGS;
pub use rx_sniff::RX_SNIFF_SETTINGS;
