use embedded_hal::spi;
use mockall::{mock, Sequence};

#[derive(Debug, Clone, Copy)]
pub struct SpiError;

impl spi::Error for SpiError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

mock! {
    #[derive(Debug)]
    pub SpiBus {}

    impl spi::ErrorType for SpiBus {
        type Error = SpiError;
    }

    impl spi::SpiBus<u8> for SpiBus {
        fn read(&mut self, words: &mut [u8]) -> Result<(), SpiError>;
        fn write(&mut self, words: &[u8]) -> Result<(), SpiError>;
        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), SpiError>;
        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), SpiError>;
        fn flush(&mut self) -> Result<(), SpiError>;
    }
}

impl MockSpiBus {
    /// Expect a single full-duplex byte exchange of `tx`, clocking in `rx`.
    pub fn expect_exchange(&mut self, seq: &mut Sequence, tx: u8, rx: u8) {
        self.expect_transfer_in_place()
            .withf(move |words| words.len() == 1 && words[0] == tx)
            .times(1)
            .in_sequence(seq)
            .returning(move |words| {
                words[0] = rx;
                Ok(())
            });
    }

    /// Expect a run of byte exchanges where every `tx[i]` clocks in `rx[i]`.
    pub fn expect_exchanges(&mut self, seq: &mut Sequence, tx: &[u8], rx: &[u8]) {
        assert_eq!(tx.len(), rx.len());
        for (&tx, &rx) in tx.iter().zip(rx) {
            self.expect_exchange(seq, tx, rx);
        }
    }

    /// Expect a byte exchange that fails on the bus.
    pub fn expect_exchange_error(&mut self, seq: &mut Sequence) {
        self.expect_transfer_in_place()
            .times(1)
            .in_sequence(seq)
            .returning(|_| Err(SpiError));
    }
}
