use crate::{
    config::RegisterSetting,
    regs::{ext::*, pri::*},
};

/// Packet mode settings exported from TI SmartRF Studio.
///
/// Address Config = Address check, 0x00 and 0xFF broadcast
/// Bit Rate = 4.8
/// Carrier Frequency = 867.999878
/// Deviation = 3.986359
/// Device Address = 0
/// Manchester Enable = false
/// Modulation Format = 2-FSK
/// Packet Bit Length = 0
/// Packet Length = 255
/// Packet Length Mode = Variable
/// RX Filter BW = 25.252525
/// Symbol rate = 4.8
/// Whitening = false
pub const PREFERRED_SETTINGS: &[RegisterSetting] = &[
    RegisterSetting::new(IOCFG2, 0x06), // PKT_SYNC_RXTX
    RegisterSetting::new(DEVIATION_M, 0xD1),
    RegisterSetting::new(MODCFG_DEV_E, 0x00),
    RegisterSetting::new(DCFILT_CFG, 0x5D),
    RegisterSetting::new(PREAMBLE_CFG0, 0x8A),
    RegisterSetting::new(IQIC, 0xCB),
    RegisterSetting::new(CHAN_BW, 0x61),
    RegisterSetting::new(MDMCFG1, 0x40),
    RegisterSetting::new(MDMCFG0, 0x05),
    RegisterSetting::new(SYMBOL_RATE2, 0x5F),
    RegisterSetting::new(SYMBOL_RATE1, 0x75),
    RegisterSetting::new(SYMBOL_RATE0, 0x10),
    RegisterSetting::new(AGC_REF, 0x33),
    RegisterSetting::new(AGC_CS_THR, 0xEC),
    RegisterSetting::new(AGC_CFG1, 0x51),
    RegisterSetting::new(AGC_CFG0, 0x87),
    RegisterSetting::new(FIFO_CFG, 0x80), // CRC_AUTOFLUSH
    RegisterSetting::new(FS_CFG, 0x12),
    RegisterSetting::new(PKT_CFG2, 0x00), // Always give a clear channel indication
    RegisterSetting::new(PKT_CFG1, 0x1F), // Address check and append status
    RegisterSetting::new(RFEND_CFG1, 0x0F), // RXOFF_MODE: IDLE
    RegisterSetting::new(RFEND_CFG0, 0x00), // TXOFF_MODE: IDLE
    RegisterSetting::new(PKT_CFG0, 0x20), // Variable packet length
    RegisterSetting::new(PKT_LEN, 0xFF),
    RegisterSetting::new(IF_MIX_CFG, 0x1C),
    RegisterSetting::new(FREQOFF_CFG, 0x22),
    RegisterSetting::new(MDMCFG2, 0x0C),
    RegisterSetting::new(FREQ2, 0x56),
    RegisterSetting::new(FREQ1, 0xCC),
    RegisterSetting::new(FREQ0, 0xCC),
    RegisterSetting::new(IF_ADC1, 0xEE),
    RegisterSetting::new(IF_ADC0, 0x10),
    RegisterSetting::new(FS_DIG1, 0x07),
    RegisterSetting::new(FS_DIG0, 0xAF),
    RegisterSetting::new(FS_CAL1, 0x40),
    RegisterSetting::new(FS_CAL0, 0x0E),
    RegisterSetting::new(FS_DIVTWO, 0x03),
    RegisterSetting::new(FS_DSM0, 0x33),
    RegisterSetting::new(FS_DVC0, 0x17),
    RegisterSetting::new(FS_PFD, 0x00),
    RegisterSetting::new(FS_PRE, 0x6E),
    RegisterSetting::new(FS_REG_DIV_CML, 0x1C),
    RegisterSetting::new(FS_SPARE, 0xAC),
    RegisterSetting::new(FS_VCO0, 0xB5),
    RegisterSetting::new(XOSC5, 0x0E),
    RegisterSetting::new(XOSC1, 0x03),
    RegisterSetting::new(PARTNUMBER, 0x20),
    RegisterSetting::new(PARTVERSION, 0x11),
];
