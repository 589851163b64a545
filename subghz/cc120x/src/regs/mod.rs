mod marc_state;
mod marc_status;
mod register_address;

pub use marc_state::{Marc2PinState, MarcState, MarcStateValue};
pub use marc_status::MarcStatusOut;
pub use register_address::{AddressSpace, RegisterAddress};

/// Normal register space, including the fifo access locations.
pub mod pri {
    use super::RegisterAddress;

    pub const IOCFG3: RegisterAddress = RegisterAddress(0x0000);
    pub const IOCFG2: RegisterAddress = RegisterAddress(0x0001);
    pub const IOCFG1: RegisterAddress = RegisterAddress(0x0002);
    pub const IOCFG0: RegisterAddress = RegisterAddress(0x0003);
    pub const SYNC3: RegisterAddress = RegisterAddress(0x0004);
    pub const SYNC2: RegisterAddress = RegisterAddress(0x0005);
    pub const SYNC1: RegisterAddress = RegisterAddress(0x0006);
    pub const SYNC0: RegisterAddress = RegisterAddress(0x0007);
    pub const SYNC_CFG1: RegisterAddress = RegisterAddress(0x0008);
    pub const SYNC_CFG0: RegisterAddress = RegisterAddress(0x0009);
    pub const DEVIATION_M: RegisterAddress = RegisterAddress(0x000A);
    pub const MODCFG_DEV_E: RegisterAddress = RegisterAddress(0x000B);
    pub const DCFILT_CFG: RegisterAddress = RegisterAddress(0x000C);
    pub const PREAMBLE_CFG1: RegisterAddress = RegisterAddress(0x000D);
    pub const PREAMBLE_CFG0: RegisterAddress = RegisterAddress(0x000E);
    pub const IQIC: RegisterAddress = RegisterAddress(0x000F);
    pub const CHAN_BW: RegisterAddress = RegisterAddress(0x0010);
    pub const MDMCFG1: RegisterAddress = RegisterAddress(0x0011);
    pub const MDMCFG0: RegisterAddress = RegisterAddress(0x0012);
    pub const SYMBOL_RATE2: RegisterAddress = RegisterAddress(0x0013);
    pub const SYMBOL_RATE1: RegisterAddress = RegisterAddress(0x0014);
    pub const SYMBOL_RATE0: RegisterAddress = RegisterAddress(0x0015);
    pub const AGC_REF: RegisterAddress = RegisterAddress(0x0016);
    pub const AGC_CS_THR: RegisterAddress = RegisterAddress(0x0017);
    pub const AGC_GAIN_ADJUST: RegisterAddress = RegisterAddress(0x0018);
    pub const AGC_CFG3: RegisterAddress = RegisterAddress(0x0019);
    pub const AGC_CFG2: RegisterAddress = RegisterAddress(0x001A);
    pub const AGC_CFG1: RegisterAddress = RegisterAddress(0x001B);
    pub const AGC_CFG0: RegisterAddress = RegisterAddress(0x001C);
    pub const FIFO_CFG: RegisterAddress = RegisterAddress(0x001D);
    pub const DEV_ADDR: RegisterAddress = RegisterAddress(0x001E);
    pub const SETTLING_CFG: RegisterAddress = RegisterAddress(0x001F);
    pub const FS_CFG: RegisterAddress = RegisterAddress(0x0020);
    pub const WOR_CFG1: RegisterAddress = RegisterAddress(0x0021);
    pub const WOR_CFG0: RegisterAddress = RegisterAddress(0x0022);
    pub const WOR_EVENT0_MSB: RegisterAddress = RegisterAddress(0x0023);
    pub const WOR_EVENT0_LSB: RegisterAddress = RegisterAddress(0x0024);
    pub const RXDCM_TIME: RegisterAddress = RegisterAddress(0x0025);
    pub const PKT_CFG2: RegisterAddress = RegisterAddress(0x0026);
    pub const PKT_CFG1: RegisterAddress = RegisterAddress(0x0027);
    pub const PKT_CFG0: RegisterAddress = RegisterAddress(0x0028);
    pub const RFEND_CFG1: RegisterAddress = RegisterAddress(0x0029);
    pub const RFEND_CFG0: RegisterAddress = RegisterAddress(0x002A);
    pub const PA_CFG1: RegisterAddress = RegisterAddress(0x002B);
    pub const PA_CFG0: RegisterAddress = RegisterAddress(0x002C);
    pub const ASK_CFG: RegisterAddress = RegisterAddress(0x002D);
    pub const PKT_LEN: RegisterAddress = RegisterAddress(0x002E);

    /// Direct fifo access, not used by the driver.
    pub const FIFO_DMA: RegisterAddress = RegisterAddress(0x003E);
    /// Standard fifo access: reads the RX fifo and writes the TX fifo.
    pub const FIFO: RegisterAddress = RegisterAddress(0x003F);
}

/// Extended register space.
pub mod ext {
    use super::RegisterAddress;

    pub const IF_MIX_CFG: RegisterAddress = RegisterAddress(0x2F00);
    pub const FREQOFF_CFG: RegisterAddress = RegisterAddress(0x2F01);
    pub const TOC_CFG: RegisterAddress = RegisterAddress(0x2F02);
    pub const MARC_SPARE: RegisterAddress = RegisterAddress(0x2F03);
    pub const ECG_CFG: RegisterAddress = RegisterAddress(0x2F04);
    pub const MDMCFG2: RegisterAddress = RegisterAddress(0x2F05);
    pub const EXT_CTRL: RegisterAddress = RegisterAddress(0x2F06);
    pub const RCCAL_FINE: RegisterAddress = RegisterAddress(0x2F07);
    pub const RCCAL_COARSE: RegisterAddress = RegisterAddress(0x2F08);
    pub const RCCAL_OFFSET: RegisterAddress = RegisterAddress(0x2F09);
    pub const FREQOFF1: RegisterAddress = RegisterAddress(0x2F0A);
    pub const FREQOFF0: RegisterAddress = RegisterAddress(0x2F0B);
    pub const FREQ2: RegisterAddress = RegisterAddress(0x2F0C);
    pub const FREQ1: RegisterAddress = RegisterAddress(0x2F0D);
    pub const FREQ0: RegisterAddress = RegisterAddress(0x2F0E);
    pub const IF_ADC2: RegisterAddress = RegisterAddress(0x2F0F);
    pub const IF_ADC1: RegisterAddress = RegisterAddress(0x2F10);
    pub const IF_ADC0: RegisterAddress = RegisterAddress(0x2F11);
    pub const FS_DIG1: RegisterAddress = RegisterAddress(0x2F12);
    pub const FS_DIG0: RegisterAddress = RegisterAddress(0x2F13);
    pub const FS_CAL3: RegisterAddress = RegisterAddress(0x2F14);
    pub const FS_CAL2: RegisterAddress = RegisterAddress(0x2F15);
    pub const FS_CAL1: RegisterAddress = RegisterAddress(0x2F16);
    pub const FS_CAL0: RegisterAddress = RegisterAddress(0x2F17);
    pub const FS_CHP: RegisterAddress = RegisterAddress(0x2F18);
    pub const FS_DIVTWO: RegisterAddress = RegisterAddress(0x2F19);
    pub const FS_DSM1: RegisterAddress = RegisterAddress(0x2F1A);
    pub const FS_DSM0: RegisterAddress = RegisterAddress(0x2F1B);
    pub const FS_DVC1: RegisterAddress = RegisterAddress(0x2F1C);
    pub const FS_DVC0: RegisterAddress = RegisterAddress(0x2F1D);
    pub const FS_LBI: RegisterAddress = RegisterAddress(0x2F1E);
    pub const FS_PFD: RegisterAddress = RegisterAddress(0x2F1F);
    pub const FS_PRE: RegisterAddress = RegisterAddress(0x2F20);
    pub const FS_REG_DIV_CML: RegisterAddress = RegisterAddress(0x2F21);
    pub const FS_SPARE: RegisterAddress = RegisterAddress(0x2F22);
    pub const FS_VCO4: RegisterAddress = RegisterAddress(0x2F23);
    pub const FS_VCO3: RegisterAddress = RegisterAddress(0x2F24);
    pub const FS_VCO2: RegisterAddress = RegisterAddress(0x2F25);
    pub const FS_VCO1: RegisterAddress = RegisterAddress(0x2F26);
    pub const FS_VCO0: RegisterAddress = RegisterAddress(0x2F27);
    pub const XOSC5: RegisterAddress = RegisterAddress(0x2F32);
    pub const XOSC4: RegisterAddress = RegisterAddress(0x2F33);
    pub const XOSC3: RegisterAddress = RegisterAddress(0x2F34);
    pub const XOSC2: RegisterAddress = RegisterAddress(0x2F35);
    pub const XOSC1: RegisterAddress = RegisterAddress(0x2F36);
    pub const XOSC0: RegisterAddress = RegisterAddress(0x2F37);
    pub const RSSI1: RegisterAddress = RegisterAddress(0x2F71);
    pub const RSSI0: RegisterAddress = RegisterAddress(0x2F72);
    pub const MARCSTATE: RegisterAddress = RegisterAddress(0x2F73);
    pub const LQI_VAL: RegisterAddress = RegisterAddress(0x2F74);
    pub const PARTNUMBER: RegisterAddress = RegisterAddress(0x2F8F);
    pub const PARTVERSION: RegisterAddress = RegisterAddress(0x2F90);
    pub const SERIAL_STATUS: RegisterAddress = RegisterAddress(0x2F91);
    pub const MODEM_STATUS1: RegisterAddress = RegisterAddress(0x2F92);
    pub const MODEM_STATUS0: RegisterAddress = RegisterAddress(0x2F93);
    pub const MARC_STATUS1: RegisterAddress = RegisterAddress(0x2F94);
    pub const MARC_STATUS0: RegisterAddress = RegisterAddress(0x2F95);
    pub const RXFIRST: RegisterAddress = RegisterAddress(0x2FD2);
    pub const TXFIRST: RegisterAddress = RegisterAddress(0x2FD3);
    pub const RXLAST: RegisterAddress = RegisterAddress(0x2FD4);
    pub const TXLAST: RegisterAddress = RegisterAddress(0x2FD5);
    pub const NUM_TXBYTES: RegisterAddress = RegisterAddress(0x2FD6);
    pub const NUM_RXBYTES: RegisterAddress = RegisterAddress(0x2FD7);
    pub const FIFO_NUM_TXBYTES: RegisterAddress = RegisterAddress(0x2FD8);
    pub const FIFO_NUM_RXBYTES: RegisterAddress = RegisterAddress(0x2FD9);
}
