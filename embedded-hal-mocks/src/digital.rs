use embedded_hal::digital;
use mockall::{mock, Sequence};

#[derive(Debug, Clone, Copy)]
pub struct PinError;

impl digital::Error for PinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

mock! {
    #[derive(Debug)]
    pub Pin {}

    impl digital::ErrorType for Pin {
        type Error = PinError;
    }

    impl digital::OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), PinError>;
        fn set_high(&mut self) -> Result<(), PinError>;
    }

    impl digital::InputPin for Pin {
        fn is_high(&mut self) -> Result<bool, PinError>;
        fn is_low(&mut self) -> Result<bool, PinError>;
    }
}

impl MockPin {
    pub fn expect_low(&mut self, seq: &mut Sequence) {
        self.expect_set_low()
            .times(1)
            .in_sequence(seq)
            .return_const(Ok(()));
    }

    pub fn expect_high(&mut self, seq: &mut Sequence) {
        self.expect_set_high()
            .times(1)
            .in_sequence(seq)
            .return_const(Ok(()));
    }

    /// Expect the pin to be sampled once, reporting `low`.
    pub fn expect_sample_low(&mut self, seq: &mut Sequence, low: bool) {
        self.expect_is_low()
            .times(1)
            .in_sequence(seq)
            .return_const(Ok(low));
    }
}
