use crate::regs::RegisterAddress;

/// A single register value from a configuration table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterSetting {
    pub address: RegisterAddress,
    pub value: u8,
}

impl RegisterSetting {
    pub const fn new(address: RegisterAddress, value: u8) -> Self {
        Self { address, value }
    }
}

/// Driver timing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Settle time after the reset pin is taken over, before the first reset.
    pub power_on_settle_ms: u32,
    /// Time the reset pin is held low.
    pub reset_pulse_ms: u32,
    /// Time after the reset pin is released.
    pub reset_settle_ms: u32,
    /// Time after the reset during `init()`.
    pub init_settle_ms: u32,
    /// Time after a configuration table is written.
    pub configure_settle_ms: u32,
    /// Maximum time to wait for the chip to pull SO low after chip select.
    /// `None` waits forever.
    pub ready_timeout_us: Option<u32>,
    pub ready_poll_interval_us: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            power_on_settle_ms: 100,
            reset_pulse_ms: 1_000,
            reset_settle_ms: 1_000,
            init_settle_ms: 1_000,
            configure_settle_ms: 2_000,
            ready_timeout_us: Some(2_000_000),
            ready_poll_interval_us: 10,
        }
    }
}
