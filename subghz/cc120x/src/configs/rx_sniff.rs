use crate::{
    config::RegisterSetting,
    regs::{ext::*, pri::*},
};

/// RX sniff mode settings exported from TI SmartRF Studio.
///
/// Address Config = No address check
/// Bit Rate = 2.4
/// Carrier Frequency = 867.999878
/// Deviation = 3.986359
/// Modulation Format = 2-FSK
/// Packet Length = 255
/// Packet Length Mode = Variable
/// RX Filter BW = 25.252525
/// Symbol rate = 2.4
/// Whitening = false
pub const RX_SNIFF_SETTINGS: &[RegisterSetting] = &[
    RegisterSetting::new(IOCFG2, 0x06),
    RegisterSetting::new(DEVIATION_M, 0xD1),
    RegisterSetting::new(MODCFG_DEV_E, 0x00),
    RegisterSetting::new(DCFILT_CFG, 0x5D),
    RegisterSetting::new(PREAMBLE_CFG0, 0x8A),
    RegisterSetting::new(IQIC, 0xCB),
    RegisterSetting::new(CHAN_BW, 0x61),
    RegisterSetting::new(MDMCFG1, 0x40),
    RegisterSetting::new(MDMCFG0, 0x05),
    RegisterSetting::new(SYMBOL_RATE2, 0x4F),
    RegisterSetting::new(SYMBOL_RATE1, 0x75),
    RegisterSetting::new(SYMBOL_RATE0, 0x10),
    RegisterSetting::new(AGC_REF, 0x33),
    RegisterSetting::new(AGC_CS_THR, 0x09),
    RegisterSetting::new(AGC_CFG1, 0x40),
    RegisterSetting::new(AGC_CFG0, 0x83),
    RegisterSetting::new(FIFO_CFG, 0x00),
    RegisterSetting::new(SETTLING_CFG, 0x03),
    RegisterSetting::new(FS_CFG, 0x12),
    RegisterSetting::new(WOR_CFG0, 0x20),
    RegisterSetting::new(WOR_EVENT0_MSB, 0x03),
    RegisterSetting::new(WOR_EVENT0_LSB, 0xE7),
    RegisterSetting::new(PKT_CFG2, 0x00), // Always give clear channel indication
    RegisterSetting::new(PKT_CFG0, 0x20), // Variable packet length
    RegisterSetting::new(RFEND_CFG0, 0x09), // Terminate on bad packet and on carrier sense
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
    RegisterSetting::new(FS_DSM1, 0x02),
    RegisterSetting::new(FS_DSM0, 0x33),
    RegisterSetting::new(FS_DVC1, 0xF3),
    RegisterSetting::new(FS_DVC0, 0x13),
    RegisterSetting::new(FS_PFD, 0x00),
    RegisterSetting::new(FS_PRE, 0x6E),
    RegisterSetting::new(FS_REG_DIV_CML, 0x1C),
    RegisterSetting::new(FS_SPARE, 0xAC),
    RegisterSetting::new(FS_VCO0, 0xB8),
    RegisterSetting::new(XOSC5, 0x0E),
];
