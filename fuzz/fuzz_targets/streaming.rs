//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of update calls, including a cut in the
//! middle of a byte, produce the same result as a one-shot computation.

#![no_main]

use arbitrary::Arbitrary;
use bitcrc::catalog;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Bit position at which the mid-byte split tests cut the stream
  split_bit: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming_crc32(data, &input.chunk_sizes);
  test_streaming_genibus(data, &input.chunk_sizes);

  test_bit_split_usb(data, input.split_bit);
  test_bit_split_xmodem(data, input.split_bit);
});

fn test_streaming_crc32(data: &[u8], chunk_sizes: &[usize]) {
  let expected = catalog::CRC_32_ISO_HDLC.checksum(data);

  let mut digest = catalog::CRC_32_ISO_HDLC.digest();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    digest.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(digest.finalize(), expected, "crc32 streaming mismatch");
}

fn test_streaming_genibus(data: &[u8], chunk_sizes: &[usize]) {
  let expected = catalog::CRC_16_GENIBUS.checksum(data);

  let mut digest = catalog::CRC_16_GENIBUS.digest();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    digest.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(digest.finalize(), expected, "crc16/genibus streaming mismatch");
}

fn test_bit_split_usb(data: &[u8], split_bit: usize) {
  let expected = catalog::CRC_5_USB.checksum(data);
  let cut = split_bit % (data.len() * 8 + 1);
  let (idx, k) = (cut / 8, cut % 8);

  // LSB-first: a byte split after k bits resumes with the byte shifted right.
  let mut digest = catalog::CRC_5_USB.digest();
  digest.update_bits(data, cut);
  if k > 0 {
    digest.update_bits(&[data[idx] >> k], 8 - k);
    digest.update(&data[idx + 1..]);
  } else {
    digest.update(&data[idx..]);
  }

  assert_eq!(digest.finalize(), expected, "crc5/usb bit-split mismatch at bit {cut}");
}

fn test_bit_split_xmodem(data: &[u8], split_bit: usize) {
  let expected = catalog::CRC_16_XMODEM.checksum(data);
  let cut = split_bit % (data.len() * 8 + 1);
  let (idx, k) = (cut / 8, cut % 8);

  // MSB-first: a byte split after k bits resumes with the byte shifted left.
  let mut digest = catalog::CRC_16_XMODEM.digest();
  digest.update_bits(data, cut);
  if k > 0 {
    digest.update_bits(&[data[idx] << k], 8 - k);
    digest.update(&data[idx + 1..]);
  } else {
    digest.update(&data[idx..]);
  }

  assert_eq!(digest.finalize(), expected, "crc16/xmodem bit-split mismatch at bit {cut}");
}
