//! Validated CRC parameter sets.

use core::fmt;

use crate::width::Width;

/// The parameters defining a CRC variant, in the conventional six-field model.
///
/// `poly`, `init` and `xorout` are given MSB-first (as catalogues print them),
/// regardless of the reflection flags. A `Params` can only be obtained through
/// its `new` constructor, so holding one guarantees that `width` fits the
/// register type `W` and that the three values fit in `width` bits.
///
/// Construction is `const`; the whole preset catalogue is validated at compile
/// time this way.
///
/// # Examples
///
/// ```
/// use bitcrc::Params;
///
/// let arc = Params::<u16>::new(16, 0x8005, 0x0000, 0x0000, true, true)?;
/// assert_eq!(arc.width(), 16);
///
/// // A CRC-17 does not fit a 16-bit register.
/// assert!(Params::<u16>::new(17, 0, 0, 0, false, false).is_err());
/// # Ok::<(), bitcrc::ParamsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params<W: Width> {
  width: u32,
  poly: W,
  init: W,
  xorout: W,
  refin: bool,
  refout: bool,
}

macro_rules! impl_params_new {
  ($($ty:ty),* $(,)?) => {$(
    impl Params<$ty> {
      /// Validates and packages a parameter set.
      ///
      /// `width` must be between 1 and the bit width of the register type, and
      /// `poly`, `init` and `xorout` must each fit in `width` bits.
      pub const fn new(
        width: u32,
        poly: $ty,
        init: $ty,
        xorout: $ty,
        refin: bool,
        refout: bool,
      ) -> Result<Self, ParamsError> {
        if width == 0 || width > <$ty>::BITS {
          return Err(ParamsError::WidthOutOfRange { width, max: <$ty>::BITS });
        }
        let limit = <$ty>::MAX >> (<$ty>::BITS - width);
        if poly > limit || init > limit || xorout > limit {
          return Err(ParamsError::ValueOutOfRange { width });
        }
        Ok(Self { width, poly, init, xorout, refin, refout })
      }
    }
  )*};
}

impl_params_new!(u8, u16, u32, u64);

impl<W: Width> Params<W> {
  /// The CRC width in bits.
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// The generator polynomial, MSB-first, without the implicit leading term.
  #[must_use]
  pub const fn poly(&self) -> W {
    self.poly
  }

  /// The initial register value, MSB-first.
  #[must_use]
  pub const fn init(&self) -> W {
    self.init
  }

  /// The value XORed into the register to produce the final CRC.
  #[must_use]
  pub const fn xorout(&self) -> W {
    self.xorout
  }

  /// Whether input bytes are consumed LSB-first.
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  /// Whether the register is read out LSB-first.
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }
}

/// Rejected CRC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// `width` was zero or larger than the register type.
  WidthOutOfRange {
    /// The rejected width.
    width: u32,
    /// The widest CRC the register type can hold.
    max: u32,
  },
  /// `poly`, `init` or `xorout` needs more than `width` bits.
  ValueOutOfRange {
    /// The width the values were checked against.
    width: u32,
  },
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::WidthOutOfRange { width, max } => {
        write!(f, "width {width} must be between 1 and {max}")
      }
      Self::ValueOutOfRange { width } => {
        write!(f, "poly, init or xorout does not fit in {width} bits")
      }
    }
  }
}

impl core::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::string::ToString;

  use super::*;

  #[test]
  fn accepts_boundary_widths_and_values() {
    assert!(Params::<u8>::new(1, 0x1, 0x1, 0x1, true, true).is_ok());
    assert!(Params::<u8>::new(8, 0xFF, 0xFF, 0xFF, true, true).is_ok());
    assert!(Params::<u8>::new(3, 0x7, 0x7, 0x7, false, false).is_ok());
    assert!(Params::<u64>::new(64, u64::MAX, u64::MAX, u64::MAX, false, false).is_ok());
  }

  #[test]
  fn rejects_zero_width() {
    assert_eq!(
      Params::<u32>::new(0, 0, 0, 0, false, false),
      Err(ParamsError::WidthOutOfRange { width: 0, max: 32 })
    );
  }

  #[test]
  fn rejects_width_beyond_the_register() {
    assert_eq!(
      Params::<u8>::new(9, 0, 0, 0, false, false),
      Err(ParamsError::WidthOutOfRange { width: 9, max: 8 })
    );
    assert!(Params::<u16>::new(17, 0, 0, 0, true, true).is_err());
    assert!(Params::<u64>::new(65, 0, 0, 0, false, false).is_err());
  }

  #[test]
  fn rejects_values_wider_than_width() {
    assert_eq!(
      Params::<u8>::new(3, 0x8, 0x0, 0x0, false, false),
      Err(ParamsError::ValueOutOfRange { width: 3 })
    );
    assert!(Params::<u8>::new(3, 0x0, 0x8, 0x0, false, false).is_err());
    assert!(Params::<u8>::new(3, 0x0, 0x0, 0x8, false, false).is_err());
    assert!(Params::<u16>::new(12, 0x1000, 0x000, 0x000, false, false).is_err());
    assert!(Params::<u16>::new(12, 0xFFF, 0xFFF, 0xFFF, true, true).is_ok());
  }

  #[test]
  fn accessors_round_trip() {
    let p = Params::<u16>::new(12, 0x80F, 0x001, 0xFFF, false, true).unwrap();
    assert_eq!(p.width(), 12);
    assert_eq!(p.poly(), 0x80F);
    assert_eq!(p.init(), 0x001);
    assert_eq!(p.xorout(), 0xFFF);
    assert!(!p.refin());
    assert!(p.refout());
  }

  #[test]
  fn display_messages() {
    assert_eq!(
      ParamsError::WidthOutOfRange { width: 65, max: 64 }.to_string(),
      "width 65 must be between 1 and 64"
    );
    assert_eq!(
      ParamsError::ValueOutOfRange { width: 12 }.to_string(),
      "poly, init or xorout does not fit in 12 bits"
    );
  }

  #[test]
  fn error_implements_the_error_trait() {
    fn assert_error<T: core::error::Error>() {}
    assert_error::<ParamsError>();
  }
}
