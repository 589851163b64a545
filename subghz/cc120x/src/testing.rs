use embedded_hal_mocks::delay::MockDelay;
use mockall::{predicate::eq, Sequence};

use crate::{traits::MockBus, Driver, DriverConfig, NoPin};

/// Strictly ordered expectations on a [`MockBus`].
pub struct BusScript {
    bus: MockBus,
    seq: Sequence,
}

impl BusScript {
    pub fn new() -> Self {
        Self {
            bus: MockBus::new(),
            seq: Sequence::new(),
        }
    }

    /// Chip select followed by a ready chip.
    pub fn begin(&mut self) {
        self.bus
            .expect_select()
            .times(1)
            .in_sequence(&mut self.seq)
            .return_const(Ok(()));
        self.wait_ready();
    }

    pub fn wait_ready(&mut self) {
        self.bus
            .expect_is_ready()
            .times(1)
            .in_sequence(&mut self.seq)
            .return_const(Ok(true));
    }

    pub fn exchange(&mut self, tx: u8, rx: u8) {
        self.bus
            .expect_exchange()
            .with(eq(tx))
            .times(1)
            .in_sequence(&mut self.seq)
            .return_const(Ok(rx));
    }

    pub fn end(&mut self) {
        self.bus
            .expect_deselect()
            .times(1)
            .in_sequence(&mut self.seq)
            .return_const(Ok(()));
    }

    /// A complete transaction of `(tx, rx)` byte exchanges.
    pub fn frame(&mut self, exchanges: &[(u8, u8)]) {
        self.begin();
        for &(tx, rx) in exchanges {
            self.exchange(tx, rx);
        }
        self.end();
    }

    pub fn into_parts(self) -> (MockBus, Sequence) {
        (self.bus, self.seq)
    }

    /// A driver without reset pin that accepts any delay.
    pub fn into_driver(self) -> Driver<MockBus, NoPin, MockDelay> {
        Driver::without_reset(self.bus, MockDelay::permissive(), DriverConfig::default())
    }
}
