//! Bit-granular streaming behavior across update boundaries.

use bitcrc::{Crc, catalog};

/// Deterministic pseudo-random bytes (xorshift64*).
fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed.max(1);
  let mut out = Vec::with_capacity(len);
  while out.len() < len {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    out.extend_from_slice(&state.wrapping_mul(0x2545_F491_4F6C_DD1D).to_le_bytes());
  }
  out.truncate(len);
  out
}

#[test]
fn usb_stream_cut_inside_a_byte() {
  // Four whole bytes, the two low bits of '5', its remaining six bits, then
  // the rest of the message.
  let mut digest = catalog::CRC_5_USB.digest();
  digest.update_bits(b"12345", 8 * 4 + 2);
  digest.update_bits(&[0x35 >> 2], 6);
  digest.update(b"6789");
  assert_eq!(digest.finalize(), 0x19);
  assert_eq!(catalog::CRC_5_USB.checksum(b"123456789"), 0x19);
}

#[test]
fn msb_first_stream_cut_inside_a_byte() {
  // XMODEM consumes each byte from the top, so the continuation byte is the
  // original shifted left.
  let expected = catalog::CRC_16_XMODEM.checksum(b"123456789");
  let mut digest = catalog::CRC_16_XMODEM.digest();
  digest.update_bits(b"12345", 8 * 4 + 2);
  digest.update_bits(&[0x35 << 2], 6);
  digest.update(b"6789");
  assert_eq!(digest.finalize(), expected);
}

#[test]
fn split_at_every_bit_offset_lsb_first() {
  let crc = Crc::new(catalog::params::CRC_5_USB);
  let data = gen_bytes(64, 0x9E37_79B9_7F4A_7C15);
  let expected = crc.checksum(&data);
  for cut in 0..=data.len() * 8 {
    let (idx, k) = (cut / 8, cut % 8);
    let mut digest = crc.digest();
    digest.update_bits(&data, cut);
    if k > 0 {
      digest.update_bits(&[data[idx] >> k], 8 - k);
      digest.update(&data[idx + 1..]);
    } else {
      digest.update(&data[idx..]);
    }
    assert_eq!(digest.finalize(), expected, "cut at bit {cut}");
  }
}

#[test]
fn split_at_every_bit_offset_msb_first() {
  let crc = Crc::new(catalog::params::CRC_16_GENIBUS);
  let data = gen_bytes(64, 0x0123_4567_89AB_CDEF);
  let expected = crc.checksum(&data);
  for cut in 0..=data.len() * 8 {
    let (idx, k) = (cut / 8, cut % 8);
    let mut digest = crc.digest();
    digest.update_bits(&data, cut);
    if k > 0 {
      digest.update_bits(&[data[idx] << k], 8 - k);
      digest.update(&data[idx + 1..]);
    } else {
      digest.update(&data[idx..]);
    }
    assert_eq!(digest.finalize(), expected, "cut at bit {cut}");
  }
}

#[test]
fn one_bit_at_a_time_lsb_first() {
  let data = gen_bytes(32, 0xDEAD_BEEF_CAFE_F00D);
  let expected = catalog::CRC_32_ISO_HDLC.checksum(&data);
  let mut digest = catalog::CRC_32_ISO_HDLC.digest();
  for &byte in &data {
    for bit in 0..8 {
      digest.update_bits(&[byte >> bit], 1);
    }
  }
  assert_eq!(digest.finalize(), expected);
}

#[test]
fn one_bit_at_a_time_msb_first() {
  let data = gen_bytes(32, 0xFEED_FACE_0BAD_F00D);
  let expected = catalog::CRC_16_GSM.checksum(&data);
  let mut digest = catalog::CRC_16_GSM.digest();
  for &byte in &data {
    for bit in 0..8 {
      digest.update_bits(&[byte << bit], 1);
    }
  }
  assert_eq!(digest.finalize(), expected);
}

#[test]
fn unused_bits_of_a_partial_byte_are_ignored() {
  // 34 bits: four whole bytes plus two bits of the fifth. LSB-first variants
  // read the low end of the byte, MSB-first variants the high end; whatever
  // sits in the remaining six bits must not matter.
  let lsb = catalog::CRC_5_USB.checksum_bits(b"1234\x01", 34);
  assert_eq!(catalog::CRC_5_USB.checksum_bits(b"1234\xfd", 34), lsb);
  assert_eq!(catalog::CRC_5_USB.checksum_bits(b"1234\x35", 34), lsb);

  let msb = catalog::CRC_16_XMODEM.checksum_bits(b"1234\x40", 34);
  assert_eq!(catalog::CRC_16_XMODEM.checksum_bits(b"1234\x7f", 34), msb);
  assert_eq!(catalog::CRC_16_XMODEM.checksum_bits(b"1234\x5a", 34), msb);
}

#[test]
fn chunked_byte_updates_match_oneshot() {
  let crc = catalog::CRC_64_XZ.crc();
  for (len, seed) in [(1usize, 3), (7, 11), (64, 17), (255, 23), (1024, 29), (4096, 31)] {
    let data = gen_bytes(len, seed);
    let expected = crc.checksum(&data);
    for chunk in [1usize, 3, 8, 64, 511] {
      let mut digest = crc.digest();
      for piece in data.chunks(chunk) {
        digest.update(piece);
      }
      assert_eq!(digest.finalize(), expected, "len {len} chunk {chunk}");
    }
  }
}

#[test]
fn checksum_bits_over_the_full_length_matches_checksum() {
  let data = gen_bytes(513, 0xA5A5_A5A5_5A5A_5A5A);
  for (ours, reference) in [
    (catalog::CRC_16_ARC.checksum_bits(&data, data.len() * 8), catalog::CRC_16_ARC.checksum(&data)),
    (catalog::CRC_16_GENIBUS.checksum_bits(&data, data.len() * 8), catalog::CRC_16_GENIBUS.checksum(&data)),
  ] {
    assert_eq!(ours, reference);
  }
}

#[test]
fn params_space_engines_match_their_presets() {
  let data = gen_bytes(129, 0x1357_9BDF_0246_8ACE);
  assert_eq!(Crc::new(catalog::params::CRC_12_UMTS).checksum(&data), catalog::CRC_12_UMTS.checksum(&data));
  assert_eq!(Crc::new(catalog::params::CRC_40_GSM).checksum(&data), catalog::CRC_40_GSM.checksum(&data));
  assert_eq!(Crc::new(catalog::params::CRC_64_REDIS).checksum(&data), catalog::CRC_64_REDIS.checksum(&data));
}
