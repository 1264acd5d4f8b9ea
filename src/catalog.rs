//! Named parameter sets for the catalogued CRC variants.
//!
//! Source: Greg Cook's CRC catalogue, <https://reveng.sourceforge.io/crc-catalogue/all.htm>.
//!
//! Every variant comes in two forms:
//!
//! - [`params`] holds `const` [`Params`] values, validated at compile time and
//!   usable without `std`; build an engine with [`Crc::new`].
//! - The `static`s in this module (with the `std` feature) are [`Preset`]s:
//!   each builds its engine lazily on first use and shares it afterwards.
//!
//! Catalogue aliases (`CRC_32`, `X25`, `KERMIT`, ...) are re-exports of their
//! canonical entry, in both forms.
//!
//! [`Params`]: crate::Params
//! [`Crc::new`]: crate::Crc::new
//! [`Preset`]: crate::Preset

macro_rules! catalog {
  (
    variants {
      $(
        $(#[$vmeta:meta])*
        $name:ident: $ty:ty = ($width:expr, $poly:expr, $init:expr, $xorout:expr, $refin:expr, $refout:expr);
      )*
    }
    aliases {
      $(
        $(#[$ameta:meta])*
        $alias:ident = $target:ident;
      )*
    }
  ) => {
    /// Compile-time validated parameter sets, available without `std`.
    pub mod params {
      use crate::params::Params;

      $(
        $(#[$vmeta])*
        pub const $name: Params<$ty> = match Params::<$ty>::new($width, $poly, $init, $xorout, $refin, $refout) {
          Ok(params) => params,
          Err(_) => panic!("catalogue entry out of range"),
        };
      )*

      $(
        $(#[$ameta])*
        pub use self::$target as $alias;
      )*
    }

    $(
      #[cfg(feature = "std")]
      $(#[$vmeta])*
      pub static $name: crate::preset::Preset<$ty> = crate::preset::Preset::new(self::params::$name);
    )*

    $(
      #[cfg(feature = "std")]
      $(#[$ameta])*
      pub use self::$target as $alias;
    )*
  };
}

catalog! {
  variants {
    /// CRC-3/GSM.
    CRC_3_GSM: u8 = (3, 0x3, 0x0, 0x7, false, false);
    /// CRC-3/ROHC.
    CRC_3_ROHC: u8 = (3, 0x3, 0x7, 0x0, true, true);

    /// CRC-4/INTERLAKEN.
    CRC_4_INTERLAKEN: u8 = (4, 0x3, 0xF, 0xF, false, false);
    /// CRC-4/G-704 (alias: CRC-4/ITU).
    CRC_4_G_704: u8 = (4, 0x3, 0x0, 0x0, true, true);

    /// CRC-5/USB.
    CRC_5_USB: u8 = (5, 0x05, 0x1F, 0x1F, true, true);
    /// CRC-5/EPC-C1G2 (alias: CRC-5/EPC).
    CRC_5_EPC_C1G2: u8 = (5, 0x09, 0x09, 0x00, false, false);
    /// CRC-5/G-704 (alias: CRC-5/ITU).
    CRC_5_G_704: u8 = (5, 0x15, 0x00, 0x00, true, true);

    /// CRC-6/G-704 (alias: CRC-6/ITU).
    CRC_6_G_704: u8 = (6, 0x03, 0x00, 0x00, true, true);
    /// CRC-6/CDMA2000-B.
    CRC_6_CDMA2000_B: u8 = (6, 0x07, 0x3F, 0x00, false, false);
    /// CRC-6/DARC.
    CRC_6_DARC: u8 = (6, 0x19, 0x00, 0x00, true, true);
    /// CRC-6/CDMA2000-A.
    CRC_6_CDMA2000_A: u8 = (6, 0x27, 0x3F, 0x00, false, false);
    /// CRC-6/GSM.
    CRC_6_GSM: u8 = (6, 0x2F, 0x00, 0x3F, false, false);

    /// CRC-7/MMC (alias: CRC-7).
    CRC_7_MMC: u8 = (7, 0x09, 0x00, 0x00, false, false);
    /// CRC-7/UMTS.
    CRC_7_UMTS: u8 = (7, 0x45, 0x00, 0x00, false, false);
    /// CRC-7/ROHC.
    CRC_7_ROHC: u8 = (7, 0x4F, 0x7F, 0x00, true, true);

    /// CRC-8/SMBUS (alias: CRC-8).
    CRC_8_SMBUS: u8 = (8, 0x07, 0x00, 0x00, false, false);
    /// CRC-8/I-432-1.
    CRC_8_I_432_1: u8 = (8, 0x07, 0x00, 0x55, false, false);
    /// CRC-8/ROHC.
    CRC_8_ROHC: u8 = (8, 0x07, 0xFF, 0x00, true, true);
    /// CRC-8/GSM-A.
    CRC_8_GSM_A: u8 = (8, 0x1D, 0x00, 0x00, false, false);
    /// CRC-8/MIFARE-MAD.
    CRC_8_MIFARE_MAD: u8 = (8, 0x1D, 0xC7, 0x00, false, false);
    /// CRC-8/I-CODE.
    CRC_8_I_CODE: u8 = (8, 0x1D, 0xFD, 0x00, false, false);
    /// CRC-8/HITAG.
    CRC_8_HITAG: u8 = (8, 0x1D, 0xFF, 0x00, false, false);
    /// CRC-8/SAE-J1850.
    CRC_8_SAE_J1850: u8 = (8, 0x1D, 0xFF, 0xFF, false, false);
    /// CRC-8/TECH-3250 (aliases: CRC-8/AES, CRC-8/EBU).
    CRC_8_TECH_3250: u8 = (8, 0x1D, 0xFF, 0x00, true, true);
    /// CRC-8/OPENSAFETY.
    CRC_8_OPENSAFETY: u8 = (8, 0x2F, 0x00, 0x00, false, false);
    /// CRC-8/AUTOSAR.
    CRC_8_AUTOSAR: u8 = (8, 0x2F, 0xFF, 0xFF, false, false);
    /// CRC-8/NRSC-5.
    CRC_8_NRSC_5: u8 = (8, 0x31, 0xFF, 0x00, false, false);
    /// CRC-8/MAXIM-DOW (aliases: CRC-8/MAXIM, DOW-CRC).
    CRC_8_MAXIM_DOW: u8 = (8, 0x31, 0x00, 0x00, true, true);
    /// CRC-8/DARC.
    CRC_8_DARC: u8 = (8, 0x39, 0x00, 0x00, true, true);
    /// CRC-8/GSM-B.
    CRC_8_GSM_B: u8 = (8, 0x49, 0x00, 0xFF, false, false);
    /// CRC-8/LTE.
    CRC_8_LTE: u8 = (8, 0x9B, 0x00, 0x00, false, false);
    /// CRC-8/CDMA2000.
    CRC_8_CDMA2000: u8 = (8, 0x9B, 0xFF, 0x00, false, false);
    /// CRC-8/WCDMA.
    CRC_8_WCDMA: u8 = (8, 0x9B, 0x00, 0x00, true, true);
    /// CRC-8/BLUETOOTH.
    CRC_8_BLUETOOTH: u8 = (8, 0xA7, 0x00, 0x00, true, true);
    /// CRC-8/DVB-S2.
    CRC_8_DVB_S2: u8 = (8, 0xD5, 0x00, 0x00, false, false);

    /// CRC-10/GSM.
    CRC_10_GSM: u16 = (10, 0x175, 0x000, 0x3FF, false, false);
    /// CRC-10/ATM (aliases: CRC-10, CRC-10/I-610).
    CRC_10_ATM: u16 = (10, 0x233, 0x000, 0x000, false, false);
    /// CRC-10/CDMA2000.
    CRC_10_CDMA2000: u16 = (10, 0x3D9, 0x3FF, 0x000, false, false);

    /// CRC-11/UMTS.
    CRC_11_UMTS: u16 = (11, 0x307, 0x000, 0x000, false, false);
    /// CRC-11/FLEXRAY.
    CRC_11_FLEXRAY: u16 = (11, 0x385, 0x01A, 0x000, false, false);

    /// CRC-12/DECT (alias: X-CRC-12).
    CRC_12_DECT: u16 = (12, 0x80F, 0x000, 0x000, false, false);
    /// CRC-12/UMTS (alias: CRC-12/3GPP). The only catalogued variant with
    /// `refin` and `refout` disagreeing.
    CRC_12_UMTS: u16 = (12, 0x80F, 0x000, 0x000, false, true);
    /// CRC-12/GSM.
    CRC_12_GSM: u16 = (12, 0xD31, 0x000, 0xFFF, false, false);
    /// CRC-12/CDMA2000.
    CRC_12_CDMA2000: u16 = (12, 0xF13, 0xFFF, 0x000, false, false);

    /// CRC-13/BBC.
    CRC_13_BBC: u16 = (13, 0x1CF5, 0x0000, 0x0000, false, false);

    /// CRC-14/DARC.
    CRC_14_DARC: u16 = (14, 0x0805, 0x0000, 0x0000, true, true);
    /// CRC-14/GSM.
    CRC_14_GSM: u16 = (14, 0x202D, 0x0000, 0x3FFF, false, false);

    /// CRC-15/CAN (alias: CRC-15).
    CRC_15_CAN: u16 = (15, 0x4599, 0x0000, 0x0000, false, false);
    /// CRC-15/MPT1327.
    CRC_15_MPT1327: u16 = (15, 0x6815, 0x0000, 0x0001, false, false);

    /// CRC-16/DECT-X (alias: X-CRC-16).
    CRC_16_DECT_X: u16 = (16, 0x0589, 0x0000, 0x0000, false, false);
    /// CRC-16/DECT-R (alias: R-CRC-16).
    CRC_16_DECT_R: u16 = (16, 0x0589, 0x0000, 0x0001, false, false);
    /// CRC-16/NRSC-5.
    CRC_16_NRSC_5: u16 = (16, 0x080B, 0xFFFF, 0x0000, true, true);
    /// CRC-16/XMODEM (aliases: CRC-16/ACORN, CRC-16/LTE, CRC-16/V-41-MSB, XMODEM, ZMODEM).
    CRC_16_XMODEM: u16 = (16, 0x1021, 0x0000, 0x0000, false, false);
    /// CRC-16/GSM.
    CRC_16_GSM: u16 = (16, 0x1021, 0x0000, 0xFFFF, false, false);
    /// CRC-16/SPI-FUJITSU (alias: CRC-16/AUG-CCITT).
    CRC_16_SPI_FUJITSU: u16 = (16, 0x1021, 0x1D0F, 0x0000, false, false);
    /// CRC-16/IBM-3740 (aliases: CRC-16/AUTOSAR, CRC-16/CCITT-FALSE).
    CRC_16_IBM_3740: u16 = (16, 0x1021, 0xFFFF, 0x0000, false, false);
    /// CRC-16/GENIBUS (aliases: CRC-16/DARC, CRC-16/EPC, CRC-16/EPC-C1G2, CRC-16/I-CODE).
    CRC_16_GENIBUS: u16 = (16, 0x1021, 0xFFFF, 0xFFFF, false, false);
    /// CRC-16/KERMIT (aliases: CRC-16/BLUETOOTH, CRC-16/CCITT, CRC-16/CCITT-TRUE, CRC-16/V-41-LSB, CRC-CCITT, KERMIT).
    CRC_16_KERMIT: u16 = (16, 0x1021, 0x0000, 0x0000, true, true);
    /// CRC-16/TMS37157.
    CRC_16_TMS37157: u16 = (16, 0x1021, 0x89EC, 0x0000, true, true);
    /// CRC-16/RIELLO.
    CRC_16_RIELLO: u16 = (16, 0x1021, 0xB2AA, 0x0000, true, true);
    /// CRC-16/ISO-IEC-14443-3-A (alias: CRC-A).
    CRC_16_ISO_IEC_14443_3_A: u16 = (16, 0x1021, 0xC6C6, 0x0000, true, true);
    /// CRC-16/MCRF4XX.
    CRC_16_MCRF4XX: u16 = (16, 0x1021, 0xFFFF, 0x0000, true, true);
    /// CRC-16/IBM-SDLC (aliases: CRC-16/ISO-HDLC, CRC-16/ISO-IEC-14443-3-B, CRC-16/X-25, CRC-B, X-25).
    CRC_16_IBM_SDLC: u16 = (16, 0x1021, 0xFFFF, 0xFFFF, true, true);
    /// CRC-16/PROFIBUS (alias: CRC-16/IEC-61158-2).
    CRC_16_PROFIBUS: u16 = (16, 0x1DCF, 0xFFFF, 0xFFFF, false, false);
    /// CRC-16/EN-13757.
    CRC_16_EN_13757: u16 = (16, 0x3D65, 0x0000, 0xFFFF, false, false);
    /// CRC-16/DNP.
    CRC_16_DNP: u16 = (16, 0x3D65, 0x0000, 0xFFFF, true, true);
    /// CRC-16/OPENSAFETY-A.
    CRC_16_OPENSAFETY_A: u16 = (16, 0x5935, 0x0000, 0x0000, false, false);
    /// CRC-16/M17.
    CRC_16_M17: u16 = (16, 0x5935, 0xFFFF, 0x0000, false, false);
    /// CRC-16/LJ1200.
    CRC_16_LJ1200: u16 = (16, 0x6F63, 0x0000, 0x0000, false, false);
    /// CRC-16/OPENSAFETY-B.
    CRC_16_OPENSAFETY_B: u16 = (16, 0x755B, 0x0000, 0x0000, false, false);
    /// CRC-16/UMTS (aliases: CRC-16/BUYPASS, CRC-16/VERIFONE).
    CRC_16_UMTS: u16 = (16, 0x8005, 0x0000, 0x0000, false, false);
    /// CRC-16/DDS-110.
    CRC_16_DDS_110: u16 = (16, 0x8005, 0x800D, 0x0000, false, false);
    /// CRC-16/CMS.
    CRC_16_CMS: u16 = (16, 0x8005, 0xFFFF, 0x0000, false, false);
    /// CRC-16/ARC (aliases: ARC, CRC-16, CRC-16/LHA, CRC-IBM).
    CRC_16_ARC: u16 = (16, 0x8005, 0x0000, 0x0000, true, true);
    /// CRC-16/MAXIM-DOW (alias: CRC-16/MAXIM).
    CRC_16_MAXIM_DOW: u16 = (16, 0x8005, 0x0000, 0xFFFF, true, true);
    /// CRC-16/MODBUS (alias: MODBUS).
    CRC_16_MODBUS: u16 = (16, 0x8005, 0xFFFF, 0x0000, true, true);
    /// CRC-16/USB.
    CRC_16_USB: u16 = (16, 0x8005, 0xFFFF, 0xFFFF, true, true);
    /// CRC-16/T10-DIF.
    CRC_16_T10_DIF: u16 = (16, 0x8BB7, 0x0000, 0x0000, false, false);
    /// CRC-16/TELEDISK.
    CRC_16_TELEDISK: u16 = (16, 0xA097, 0x0000, 0x0000, false, false);
    /// CRC-16/CDMA2000.
    CRC_16_CDMA2000: u16 = (16, 0xC867, 0xFFFF, 0x0000, false, false);

    /// CRC-17/CAN-FD.
    CRC_17_CAN_FD: u32 = (17, 0x1_685B, 0x0_0000, 0x0_0000, false, false);

    /// CRC-21/CAN-FD.
    CRC_21_CAN_FD: u32 = (21, 0x10_2899, 0x00_0000, 0x00_0000, false, false);

    /// CRC-24/BLE.
    CRC_24_BLE: u32 = (24, 0x00_065B, 0x55_5555, 0x00_0000, true, true);
    /// CRC-24/INTERLAKEN.
    CRC_24_INTERLAKEN: u32 = (24, 0x32_8B63, 0xFF_FFFF, 0xFF_FFFF, false, false);
    /// CRC-24/FLEXRAY-B.
    CRC_24_FLEXRAY_B: u32 = (24, 0x5D_6DCB, 0xAB_CDEF, 0x00_0000, false, false);
    /// CRC-24/FLEXRAY-A.
    CRC_24_FLEXRAY_A: u32 = (24, 0x5D_6DCB, 0xFE_DCBA, 0x00_0000, false, false);
    /// CRC-24/LTE-B.
    CRC_24_LTE_B: u32 = (24, 0x80_0063, 0x00_0000, 0x00_0000, false, false);
    /// CRC-24/OS-9.
    CRC_24_OS_9: u32 = (24, 0x80_0063, 0xFF_FFFF, 0xFF_FFFF, false, false);
    /// CRC-24/LTE-A.
    CRC_24_LTE_A: u32 = (24, 0x86_4CFB, 0x00_0000, 0x00_0000, false, false);
    /// CRC-24/OPENPGP (alias: CRC-24).
    CRC_24_OPENPGP: u32 = (24, 0x86_4CFB, 0xB7_04CE, 0x00_0000, false, false);

    /// CRC-30/CDMA.
    CRC_30_CDMA: u32 = (30, 0x2030_B9C7, 0x3FFF_FFFF, 0x3FFF_FFFF, false, false);

    /// CRC-31/PHILIPS.
    CRC_31_PHILIPS: u32 = (31, 0x04C1_1DB7, 0x7FFF_FFFF, 0x7FFF_FFFF, false, false);

    /// CRC-32/XFER.
    CRC_32_XFER: u32 = (32, 0x0000_00AF, 0x0000_0000, 0x0000_0000, false, false);
    /// CRC-32/CKSUM (aliases: CKSUM, CRC-32/POSIX).
    CRC_32_CKSUM: u32 = (32, 0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF, false, false);
    /// CRC-32/MPEG-2.
    CRC_32_MPEG_2: u32 = (32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, false, false);
    /// CRC-32/BZIP2 (aliases: CRC-32/AAL5, CRC-32/DECT-B, B-CRC-32).
    CRC_32_BZIP2: u32 = (32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false, false);
    /// CRC-32/JAMCRC (alias: JAMCRC).
    CRC_32_JAMCRC: u32 = (32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, true, true);
    /// CRC-32/ISO-HDLC (aliases: CRC-32, CRC-32/ADCCP, CRC-32/V-42, CRC-32/XZ, PKZIP).
    CRC_32_ISO_HDLC: u32 = (32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
    /// CRC-32/ISCSI (aliases: CRC-32/BASE91-C, CRC-32/CASTAGNOLI, CRC-32/INTERLAKEN, CRC-32C).
    CRC_32_ISCSI: u32 = (32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
    /// CRC-32/MEF (uses Koopman's polynomial).
    CRC_32_MEF: u32 = (32, 0x741B_8CD7, 0xFFFF_FFFF, 0x0000_0000, true, true);
    /// CRC-32/CD-ROM-EDC.
    CRC_32_CD_ROM_EDC: u32 = (32, 0x8001_801B, 0x0000_0000, 0x0000_0000, true, true);
    /// CRC-32/AIXM (alias: CRC-32Q).
    CRC_32_AIXM: u32 = (32, 0x8141_41AB, 0x0000_0000, 0x0000_0000, false, false);
    /// CRC-32/BASE91-D (alias: CRC-32D).
    CRC_32_BASE91_D: u32 = (32, 0xA833_982B, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
    /// CRC-32/AUTOSAR.
    CRC_32_AUTOSAR: u32 = (32, 0xF4AC_FB13, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

    /// CRC-40/GSM.
    CRC_40_GSM: u64 = (40, 0x00_0482_0009, 0x00_0000_0000, 0xFF_FFFF_FFFF, false, false);

    /// CRC-64/GO-ISO.
    CRC_64_GO_ISO: u64 = (64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF, true, true);
    /// CRC-64/MS.
    CRC_64_MS: u64 = (64, 0x259C_84CB_A642_6349, 0xFFFF_FFFF_FFFF_FFFF, 0x0000_0000_0000_0000, true, true);
    /// CRC-64/ECMA-182 (alias: CRC-64).
    CRC_64_ECMA_182: u64 = (64, 0x42F0_E1EB_A9EA_3693, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, false, false);
    /// CRC-64/WE.
    CRC_64_WE: u64 = (64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF, false, false);
    /// CRC-64/XZ (alias: CRC-64/GO-ECMA).
    CRC_64_XZ: u64 = (64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF, true, true);
    /// CRC-64/REDIS.
    CRC_64_REDIS: u64 = (64, 0xAD93_D235_94C9_35A9, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, true, true);
  }

  aliases {
    /// Alias of [`CRC_8_SMBUS`].
    CRC_8 = CRC_8_SMBUS;
    /// Alias of [`CRC_16_ARC`].
    CRC_16 = CRC_16_ARC;
    /// Alias of [`CRC_32_ISO_HDLC`].
    CRC_32 = CRC_32_ISO_HDLC;
    /// Alias of [`CRC_64_ECMA_182`].
    CRC_64 = CRC_64_ECMA_182;

    /// Alias of [`CRC_32_ISCSI`].
    CRC_32C = CRC_32_ISCSI;
    /// Alias of [`CRC_32_BASE91_D`].
    CRC_32D = CRC_32_BASE91_D;
    /// Alias of [`CRC_32_AIXM`].
    CRC_32Q = CRC_32_AIXM;

    /// Alias of [`CRC_16_ISO_IEC_14443_3_A`].
    CRC_A = CRC_16_ISO_IEC_14443_3_A;
    /// Alias of [`CRC_16_IBM_SDLC`].
    CRC_B = CRC_16_IBM_SDLC;

    /// Alias of [`CRC_16_IBM_SDLC`].
    X25 = CRC_16_IBM_SDLC;
    /// Alias of [`CRC_16_IBM_SDLC`].
    CRC_16_X_25 = CRC_16_IBM_SDLC;
    /// Alias of [`CRC_16_XMODEM`].
    XMODEM = CRC_16_XMODEM;
    /// Alias of [`CRC_16_KERMIT`].
    KERMIT = CRC_16_KERMIT;
    /// Alias of [`CRC_16_KERMIT`].
    CRC_16_CCITT = CRC_16_KERMIT;
    /// Alias of [`CRC_16_IBM_3740`], commonly misidentified as CRC-16/CCITT.
    CRC_16_CCITT_FALSE = CRC_16_IBM_3740;
    /// Alias of [`CRC_16_SPI_FUJITSU`].
    CRC_16_AUG_CCITT = CRC_16_SPI_FUJITSU;
    /// Alias of [`CRC_16_KERMIT`].
    V41_LSB = CRC_16_KERMIT;
    /// Alias of [`CRC_16_XMODEM`].
    V41_MSB = CRC_16_XMODEM;

    /// Alias of [`CRC_32_ISO_HDLC`].
    PKZIP = CRC_32_ISO_HDLC;
    /// Alias of [`CRC_32_ISO_HDLC`].
    V42 = CRC_32_ISO_HDLC;
    /// Alias of [`CRC_32_ISO_HDLC`].
    XZ = CRC_32_ISO_HDLC;
    /// Alias of [`CRC_32_CKSUM`].
    POSIX = CRC_32_CKSUM;
    /// Alias of [`CRC_32_ISCSI`].
    CASTAGNOLI = CRC_32_ISCSI;
  }
}

#[cfg(test)]
mod tests {
  use crate::Crc;
  use super::params;

  #[test]
  fn params_constants_build_engines_without_std() {
    assert_eq!(Crc::new(params::CRC_32_ISO_HDLC).checksum(b"123456789"), 0xCBF4_3926);
    assert_eq!(Crc::new(params::CRC_8).checksum(b"123456789"), 0xF4);
    assert_eq!(Crc::new(params::KERMIT).checksum(b"123456789"), 0x2189);
  }

  #[cfg(feature = "std")]
  #[test]
  fn presets_expose_their_params() {
    use super::{CRC_16_ARC, CRC_64_XZ};
    assert_eq!(CRC_16_ARC.params(), params::CRC_16_ARC);
    assert_eq!(Crc::new(CRC_64_XZ.params()).checksum(b"123456789"), CRC_64_XZ.checksum(b"123456789"));
  }
}
