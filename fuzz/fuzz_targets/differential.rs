//! Differential fuzzing against the `crc` crate.
//!
//! Compares catalogue presets against the same algorithms from a
//! well-established implementation to catch any discrepancies.

#![no_main]

use libfuzzer_sys::fuzz_target;

const REF_CRC5_USB: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_5_USB);
const REF_CRC12_UMTS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_12_UMTS);
const REF_CRC16_ARC: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);
const REF_CRC32_ISO_HDLC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const REF_CRC64_XZ: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_XZ);

fuzz_target!(|data: &[u8]| {
  test_crc5_usb_differential(data);
  test_crc12_umts_differential(data);
  test_crc16_arc_differential(data);
  test_crc32_iso_hdlc_differential(data);
  test_crc64_xz_differential(data);
});

fn test_crc5_usb_differential(data: &[u8]) {
  let ours = bitcrc::catalog::CRC_5_USB.checksum(data);
  let reference = REF_CRC5_USB.checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-5/USB differential mismatch: ours={:#04x}, reference={:#04x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_crc12_umts_differential(data: &[u8]) {
  // The one catalogued variant with refin != refout.
  let ours = bitcrc::catalog::CRC_12_UMTS.checksum(data);
  let reference = REF_CRC12_UMTS.checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-12/UMTS differential mismatch: ours={:#05x}, reference={:#05x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_crc16_arc_differential(data: &[u8]) {
  let ours = bitcrc::catalog::CRC_16_ARC.checksum(data);
  let reference = REF_CRC16_ARC.checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-16/ARC differential mismatch: ours={:#06x}, reference={:#06x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_crc32_iso_hdlc_differential(data: &[u8]) {
  let ours = bitcrc::catalog::CRC_32_ISO_HDLC.checksum(data);
  let reference = REF_CRC32_ISO_HDLC.checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-32/ISO-HDLC differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours,
    reference,
    data.len()
  );

  // Self-consistency check: streaming should match one-shot
  let mut digest = bitcrc::catalog::CRC_32_ISO_HDLC.digest();
  digest.update(data);
  assert_eq!(digest.finalize(), ours, "CRC-32/ISO-HDLC self-consistency mismatch");
}

fn test_crc64_xz_differential(data: &[u8]) {
  let ours = bitcrc::catalog::CRC_64_XZ.checksum(data);
  let reference = REF_CRC64_XZ.checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-64/XZ differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours,
    reference,
    data.len()
  );

  // Self-consistency check: streaming should match one-shot
  let mut digest = bitcrc::catalog::CRC_64_XZ.digest();
  digest.update(data);
  assert_eq!(digest.finalize(), ours, "CRC-64/XZ self-consistency mismatch");
}
