//! Property tests pinning the engine to an independent definition.
//!
//! The oracle here computes CRCs in the normal (MSB-first, left-shifting)
//! convention, one bit at a time, straight from the six-parameter model. The
//! engine computes in the reflected convention with a table fast path, so
//! agreement between the two exercises the reflection and normalization logic
//! as well as the table/tail split.

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::Crc;
use crate::catalog::params;
use crate::width::Width;

/// Bit-serial CRC in the normal convention over the first `bit_len` bits.
///
/// No tables, no reflected parameter storage; `refin` only selects which end
/// of each input byte is consumed first.
fn normal_bitwise(
  width: u32,
  poly: u64,
  init: u64,
  xorout: u64,
  refin: bool,
  refout: bool,
  data: &[u8],
  bit_len: usize,
) -> u64 {
  let mask = u64::MAX >> (64 - width);
  let top = 1u64 << (width - 1);
  let mut reg = init;
  for i in 0..bit_len {
    let byte = data[i / 8];
    let bit = if refin { (byte >> (i % 8)) & 1 } else { (byte >> (7 - i % 8)) & 1 };
    reg ^= u64::from(bit) << (width - 1);
    reg = if reg & top != 0 { ((reg << 1) ^ poly) & mask } else { (reg << 1) & mask };
  }
  let out = if refout { reg.reverse_bits() >> (64 - width) } else { reg };
  (out ^ xorout) & mask
}

fn data_and_bit_len() -> impl Strategy<Value = (Vec<u8>, usize)> {
  proptest::collection::vec(any::<u8>(), 0..=512).prop_flat_map(|data| {
    let max_bits = data.len() * 8;
    (Just(data), 0..=max_bits)
  })
}

macro_rules! oracle_agreement {
  ($name:ident, $params:expr) => {
    proptest! {
      #[test]
      fn $name((data, bit_len) in data_and_bit_len()) {
        let p = $params;
        let engine = Crc::new(p);
        let ours = u64::from(engine.checksum_bits(&data, bit_len));
        let expected = normal_bitwise(
          p.width(),
          u64::from(p.poly()),
          u64::from(p.init()),
          u64::from(p.xorout()),
          p.refin(),
          p.refout(),
          &data,
          bit_len,
        );
        prop_assert_eq!(ours, expected, "bit_len {} of {} bytes", bit_len, data.len());
      }
    }
  };
}

oracle_agreement!(crc3_gsm_matches_the_oracle, params::CRC_3_GSM);
oracle_agreement!(crc5_usb_matches_the_oracle, params::CRC_5_USB);
oracle_agreement!(crc12_umts_matches_the_oracle, params::CRC_12_UMTS);
oracle_agreement!(crc16_xmodem_matches_the_oracle, params::CRC_16_XMODEM);
oracle_agreement!(crc32_iso_hdlc_matches_the_oracle, params::CRC_32_ISO_HDLC);
oracle_agreement!(crc40_gsm_matches_the_oracle, params::CRC_40_GSM);
oracle_agreement!(crc64_ecma_182_matches_the_oracle, params::CRC_64_ECMA_182);

/// Feeds `data` through a digest in chunks described by `chunk_pattern`,
/// cycling through the pattern until the input is exhausted.
fn apply_chunking<W: Width>(crc: &Crc<W>, data: &[u8], chunk_pattern: &[usize]) -> W {
  let mut digest = crc.digest();
  let mut offset = 0;
  let mut idx = 0;
  while offset < data.len() {
    let size = chunk_pattern[idx % chunk_pattern.len()].max(1);
    let end = (offset + size).min(data.len());
    digest.update(&data[offset..end]);
    offset = end;
    idx += 1;
  }
  digest.finalize()
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn chunked_updates_match_oneshot_lsb_first(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk_pattern in proptest::collection::vec(1usize..=512, 1..=32),
  ) {
    let crc = Crc::new(params::CRC_32_ISO_HDLC);
    prop_assert_eq!(apply_chunking(&crc, &data, &chunk_pattern), crc.checksum(&data));
  }

  #[test]
  fn chunked_updates_match_oneshot_msb_first(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk_pattern in proptest::collection::vec(1usize..=512, 1..=32),
  ) {
    let crc = Crc::new(params::CRC_16_GENIBUS);
    prop_assert_eq!(apply_chunking(&crc, &data, &chunk_pattern), crc.checksum(&data));
  }

  #[test]
  fn checksum_bits_over_whole_bytes_matches_checksum(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let crc = Crc::new(params::CRC_16_ARC);
    prop_assert_eq!(crc.checksum_bits(&data, data.len() * 8), crc.checksum(&data));
  }

  #[test]
  fn nibble_feeding_matches_bytes_lsb_first(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let crc = Crc::new(params::CRC_5_USB);
    let mut digest = crc.digest();
    for &byte in &data {
      digest.update_bits(&[byte], 4);
      digest.update_bits(&[byte >> 4], 4);
    }
    prop_assert_eq!(digest.finalize(), crc.checksum(&data));
  }

  #[test]
  fn nibble_feeding_matches_bytes_msb_first(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let crc = Crc::new(params::CRC_16_GENIBUS);
    let mut digest = crc.digest();
    for &byte in &data {
      digest.update_bits(&[byte], 4);
      digest.update_bits(&[byte << 4], 4);
    }
    prop_assert_eq!(digest.finalize(), crc.checksum(&data));
  }

  #[test]
  fn a_cut_at_any_bit_resumes_cleanly_lsb_first(
    data in proptest::collection::vec(any::<u8>(), 1..=256),
    cut in any::<usize>(),
  ) {
    let crc = Crc::new(params::CRC_5_USB);
    let cut = cut % (data.len() * 8 + 1);
    let (idx, k) = (cut / 8, cut % 8);

    let mut digest = crc.digest();
    digest.update_bits(&data, cut);
    if k > 0 {
      digest.update_bits(&[data[idx] >> k], 8 - k);
      digest.update(&data[idx + 1..]);
    } else {
      digest.update(&data[idx..]);
    }
    prop_assert_eq!(digest.finalize(), crc.checksum(&data), "cut at bit {}", cut);
  }

  #[test]
  fn a_cut_at_any_bit_resumes_cleanly_msb_first(
    data in proptest::collection::vec(any::<u8>(), 1..=256),
    cut in any::<usize>(),
  ) {
    let crc = Crc::new(params::CRC_16_GENIBUS);
    let cut = cut % (data.len() * 8 + 1);
    let (idx, k) = (cut / 8, cut % 8);

    let mut digest = crc.digest();
    digest.update_bits(&data, cut);
    if k > 0 {
      digest.update_bits(&[data[idx] << k], 8 - k);
      digest.update(&data[idx + 1..]);
    } else {
      digest.update(&data[idx..]);
    }
    prop_assert_eq!(digest.finalize(), crc.checksum(&data), "cut at bit {}", cut);
  }
}
