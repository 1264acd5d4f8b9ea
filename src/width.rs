//! Register-width abstraction for the CRC engine.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitXor, Shr};

mod sealed {
  pub trait Sealed {}
  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
  impl Sealed for u64 {}
}

/// Unsigned integer types that can hold a CRC register.
///
/// The register type is picked by the caller and must be at least as wide as the
/// algorithm's `width`: a CRC-17 needs `u32` or `u64`, a CRC-5 fits in any of
/// them. Registers wider than the CRC cost a little throughput but compute the
/// same values.
///
/// This trait is sealed; it is implemented for exactly `u8`, `u16`, `u32` and
/// `u64`.
pub trait Width:
  sealed::Sealed
  + Copy
  + Eq
  + Hash
  + Debug
  + BitAnd<Output = Self>
  + BitXor<Output = Self>
  + Shr<u32, Output = Self>
  + 'static
{
  /// Bit width of the register type.
  const BITS: u32;
  /// The all-zeros register.
  const ZERO: Self;
  /// The value `1`.
  const ONE: Self;

  /// Zero-extends a byte into the register.
  fn from_byte(byte: u8) -> Self;

  /// Truncates the register to its low byte.
  fn low_byte(self) -> u8;

  /// Reverses the order of all bits in the register.
  fn reverse_bits(self) -> Self;

  /// `self >> 8`, defined as zero for the 8-bit register.
  fn shr8(self) -> Self;
}

impl Width for u8 {
  const BITS: u32 = u8::BITS;
  const ZERO: Self = 0;
  const ONE: Self = 1;

  #[inline]
  fn from_byte(byte: u8) -> Self {
    byte
  }

  #[inline]
  fn low_byte(self) -> u8 {
    self
  }

  #[inline]
  fn reverse_bits(self) -> Self {
    u8::reverse_bits(self)
  }

  #[inline]
  fn shr8(self) -> Self {
    0
  }
}

macro_rules! impl_width {
  ($($ty:ty),* $(,)?) => {$(
    impl Width for $ty {
      const BITS: u32 = <$ty>::BITS;
      const ZERO: Self = 0;
      const ONE: Self = 1;

      #[inline]
      fn from_byte(byte: u8) -> Self {
        Self::from(byte)
      }

      #[inline]
      fn low_byte(self) -> u8 {
        self as u8
      }

      #[inline]
      fn reverse_bits(self) -> Self {
        <$ty>::reverse_bits(self)
      }

      #[inline]
      fn shr8(self) -> Self {
        self >> 8
      }
    }
  )*};
}

impl_width!(u16, u32, u64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shr8_is_total_on_every_register() {
    assert_eq!(0xABu8.shr8(), 0);
    assert_eq!(0xAB00u16.shr8(), 0xAB);
    assert_eq!(0xAB00_0000u32.shr8(), 0x00AB_0000);
    assert_eq!(u64::MAX.shr8(), u64::MAX >> 8);
  }

  #[test]
  fn byte_round_trip() {
    for b in 0..=255u8 {
      assert_eq!(u8::from_byte(b).low_byte(), b);
      assert_eq!(u16::from_byte(b).low_byte(), b);
      assert_eq!(u32::from_byte(b).low_byte(), b);
      assert_eq!(u64::from_byte(b).low_byte(), b);
    }
  }

  #[test]
  fn low_byte_truncates() {
    assert_eq!(0x1234u16.low_byte(), 0x34);
    assert_eq!(0xDEAD_BEEFu32.low_byte(), 0xEF);
    assert_eq!(0x0123_4567_89AB_CDEFu64.low_byte(), 0xEF);
  }
}
