use embedded_hal::delay::DelayNs;

use crate::{traits::Bus, DriverError};

/// Transaction framing on top of a [`Bus`].
///
/// Every access is bracketed by [`Transport::begin`] and [`Transport::end`].
/// Transactions do not nest.
pub struct Transport<B: Bus, Delay: DelayNs> {
    bus: B,
    delay: Delay,
    ready_timeout_us: Option<u32>,
    ready_poll_interval_us: u32,
}

impl<B: Bus, Delay: DelayNs> Transport<B, Delay> {
    pub const fn new(
        bus: B,
        delay: Delay,
        ready_timeout_us: Option<u32>,
        ready_poll_interval_us: u32,
    ) -> Self {
        Self {
            bus,
            delay,
            ready_timeout_us,
            // A zero interval would never advance the elapsed time.
            ready_poll_interval_us: if ready_poll_interval_us == 0 {
                1
            } else {
                ready_poll_interval_us
            },
        }
    }

    pub fn release(self) -> (B, Delay) {
        (self.bus, self.delay)
    }

    /// Assert chip select and wait for the chip to become ready.
    /// Chip select is released again if the chip never gets ready.
    pub fn begin(&mut self) -> Result<(), DriverError> {
        self.bus.select()?;
        if let Err(e) = self.wait_until_ready() {
            self.bus.deselect()?;
            return Err(e);
        }
        Ok(())
    }

    /// Deassert chip select.
    pub fn end(&mut self) -> Result<(), DriverError> {
        self.bus.deselect()
    }

    pub fn exchange(&mut self, byte: u8) -> Result<u8, DriverError> {
        self.bus.exchange(byte)
    }

    /// Run `f` inside a single transaction.
    /// Chip select is deasserted when `f` returns, also if it fails.
    pub fn transaction<R, F>(&mut self, f: F) -> Result<R, DriverError>
    where
        F: FnOnce(&mut Self) -> Result<R, DriverError>,
    {
        self.begin()?;
        let result = f(self);
        let end = self.end();
        let value = result?;
        end?;
        Ok(value)
    }

    /// Wait until the chip signals ready on SO.
    ///
    /// Without a timeout this blocks until the chip responds.
    pub fn wait_until_ready(&mut self) -> Result<(), DriverError> {
        let Some(timeout_us) = self.ready_timeout_us else {
            while !self.bus.is_ready()? {}
            return Ok(());
        };

        let mut elapsed_us: u32 = 0;
        loop {
            if self.bus.is_ready()? {
                return Ok(());
            }
            if elapsed_us >= timeout_us {
                warn!("Chip not ready after {} us", elapsed_us);
                return Err(DriverError::BusNotReady);
            }
            self.delay.delay_us(self.ready_poll_interval_us);
            elapsed_us = elapsed_us.saturating_add(self.ready_poll_interval_us);
        }
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mocks::delay::MockDelay;
    use mockall::{predicate::eq, Sequence};

    use crate::traits::MockBus;

    use super::*;

    #[test]
    fn begin_waits_for_ready() {
        // Given
        let mut seq = Sequence::new();
        let mut bus = MockBus::new();
        bus.expect_select()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));
        bus.expect_is_ready()
            .times(2)
            .in_sequence(&mut seq)
            .return_const(Ok(false));
        bus.expect_is_ready()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(true));

        let mut delay = MockDelay::new();
        delay.expect_delay_us().with(eq(10)).times(2).return_const(());

        let mut transport = Transport::new(bus, delay, Some(100), 10);

        // When
        transport.begin().unwrap();
    }

    #[test]
    fn begin_times_out_and_releases_chip_select() {
        // Given
        let mut seq = Sequence::new();
        let mut bus = MockBus::new();
        bus.expect_select()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));
        bus.expect_is_ready()
            .times(4)
            .in_sequence(&mut seq)
            .return_const(Ok(false));
        bus.expect_deselect()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));

        let mut delay = MockDelay::new();
        delay.expect_delay_us().with(eq(10)).times(3).return_const(());

        let mut transport = Transport::new(bus, delay, Some(30), 10);

        // When
        let result = transport.begin();

        // Then
        assert_eq!(Err(DriverError::BusNotReady), result);
    }

    #[test]
    fn zero_poll_interval_still_times_out() {
        // Given
        let mut bus = MockBus::new();
        bus.expect_is_ready().times(4).return_const(Ok(false));

        let mut delay = MockDelay::new();
        delay.expect_delay_us().with(eq(1)).times(3).return_const(());

        let mut transport = Transport::new(bus, delay, Some(3), 0);

        // When
        let result = transport.wait_until_ready();

        // Then
        assert_eq!(Err(DriverError::BusNotReady), result);
    }

    #[test]
    fn unbounded_wait_polls_without_delay() {
        // Given
        let mut seq = Sequence::new();
        let mut bus = MockBus::new();
        bus.expect_is_ready()
            .times(5)
            .in_sequence(&mut seq)
            .return_const(Ok(false));
        bus.expect_is_ready()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(true));

        let mut transport = Transport::new(bus, MockDelay::new(), None, 10);

        // When
        transport.wait_until_ready().unwrap();
    }

    #[test]
    fn transaction_deselects_on_error() {
        // Given
        let mut seq = Sequence::new();
        let mut bus = MockBus::new();
        bus.expect_select()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));
        bus.expect_is_ready()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(true));
        bus.expect_exchange()
            .with(eq(0x80))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Err(DriverError::Spi(embedded_hal::spi::ErrorKind::Other)));
        bus.expect_deselect()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));

        let mut transport = Transport::new(bus, MockDelay::new(), Some(100), 10);

        // When
        let result = transport.transaction(|t| t.exchange(0x80));

        // Then
        assert!(matches!(result, Err(DriverError::Spi(_))));
    }
}
