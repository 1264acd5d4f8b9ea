//! Bit-order reversal.
//!
//! The engine computes in the reflected (LSB-first) convention throughout, so
//! MSB-first parameters and input bytes are reversed at the boundary. Per-byte
//! reversal on the bulk path goes through a precomputed table.

// All indexing here is into a 256-entry table with indices bounded by the loop
// counter or derived from a `u8`; clippy cannot see this in const contexts.
#![allow(clippy::indexing_slicing)]

use crate::width::Width;

/// Reverses the low `bits` bits of `value`. Higher bits are discarded.
#[inline]
pub(crate) fn reflect<W: Width>(value: W, bits: u32) -> W {
  value.reverse_bits() >> (W::BITS - bits)
}

/// Every byte value with its bit order reversed.
pub(crate) static BYTE_REFLECT: [u8; 256] = byte_reflect_table();

const fn byte_reflect_table() -> [u8; 256] {
  let mut table = [0u8; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = (i as u8).reverse_bits();
    i += 1;
  }
  table
}

const _: () = {
  let table = byte_reflect_table();
  assert!(table[0x00] == 0x00);
  assert!(table[0x01] == 0x80);
  assert!(table[0x35] == 0xAC);
  assert!(table[0xFF] == 0xFF);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reflect_small_windows() {
    assert_eq!(reflect(0b1u8, 1), 0b1);
    assert_eq!(reflect(0b01u8, 2), 0b10);
    assert_eq!(reflect(0b011u8, 3), 0b110);
    assert_eq!(reflect(0b0011_0101u8, 8), 0b1010_1100);
  }

  #[test]
  fn reflect_discards_bits_above_the_window() {
    assert_eq!(reflect(0xF0u8, 4), 0x0);
    assert_eq!(reflect(0xF1u8, 4), 0x8);
    assert_eq!(reflect(0xFF05u16, 5), reflect(0x05u16, 5));
  }

  #[test]
  fn reflect_is_an_involution_below_the_window() {
    for bits in [3u32, 5, 7, 8] {
      for v in 0..=255u8 {
        let masked = v & (0xFF >> (8 - bits));
        assert_eq!(reflect(reflect(masked, bits), bits), masked, "bits {bits} value {v:#04x}");
      }
    }
  }

  #[test]
  fn full_width_reflection_of_known_polynomials() {
    assert_eq!(reflect(0x8005u16, 16), 0xA001);
    assert_eq!(reflect(0x04C1_1DB7u32, 32), 0xEDB8_8320);
    assert_eq!(reflect(0x42F0_E1EB_A9EA_3693u64, 64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn byte_table_matches_reflect() {
    for b in 0..=255u8 {
      assert_eq!(BYTE_REFLECT[usize::from(b)], reflect(b, 8));
    }
  }
}
