//! The CRC engine: table construction and register updates.
//!
//! The engine always computes in the reflected (LSB-first, right-shifting)
//! convention. `poly` and `init` are reflected once at construction; MSB-first
//! variants (`refin == false`) instead reflect each input byte at the boundary
//! and un-reflect the register on readout. One recurrence and one table layout
//! therefore serve every variant.
//!
//! Whole input bytes go through the 256-entry table, one lookup per byte. A
//! trailing partial byte (1 to 7 bits) goes through the tableless bit-serial
//! path, which advances the same recurrence one bit at a time. The two paths
//! leave identical register state at every byte boundary.
//!
//! The register never carries bits at or above `width`: `init` is masked by
//! parameter validation, and the recurrence only right-shifts and XORs values
//! below `2^width`. No masking is needed between updates.

// Table lookups are indexed by values derived from a `u8` and stay below 256;
// `data` indexing is guarded by the bit-length check in `update_bits`.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use crate::digest::Digest;
use crate::params::Params;
use crate::reflect::{BYTE_REFLECT, reflect};
use crate::width::Width;

/// A table-driven engine for one CRC variant.
///
/// Construction computes the 256-entry table, so build an engine once per
/// variant and share it; [`checksum`], [`checksum_bits`] and [`digest`] all
/// take `&self`. For catalogued variants the [`catalog`] statics do the
/// sharing for you.
///
/// [`checksum`]: Crc::checksum
/// [`checksum_bits`]: Crc::checksum_bits
/// [`digest`]: Crc::digest
/// [`catalog`]: crate::catalog
///
/// # Example
///
/// ```
/// use bitcrc::{Crc, Params};
///
/// let crc = Crc::new(Params::<u32>::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true)?);
/// assert_eq!(crc.checksum(b"123456789"), 0xCBF4_3926);
/// # Ok::<(), bitcrc::ParamsError>(())
/// ```
#[derive(Clone)]
pub struct Crc<W: Width> {
  params: Params<W>,
  refpoly: W,
  refinit: W,
  table: [W; 256],
}

impl<W: Width> Crc<W> {
  /// Builds an engine from validated parameters.
  #[must_use]
  pub fn new(params: Params<W>) -> Self {
    let refpoly = reflect(params.poly(), params.width());
    let refinit = reflect(params.init(), params.width());
    let mut table = [W::ZERO; 256];
    for (i, entry) in table.iter_mut().enumerate().skip(1) {
      *entry = bitwise_fold(refpoly, W::ZERO, i as u8, 8);
    }
    Self { params, refpoly, refinit, table }
  }

  /// Computes the CRC of `data` in one call.
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> W {
    self.value_of(self.update_bytes(self.refinit, data))
  }

  /// Computes the CRC of the first `bit_len` bits of `data`.
  ///
  /// Each byte contributes its bits starting from the least significant bit
  /// when `refin` is set and from the most significant bit otherwise. A
  /// trailing partial byte contributes only its first `bit_len % 8` bits in
  /// that order; its remaining bits are ignored.
  ///
  /// # Panics
  ///
  /// Panics if `bit_len` exceeds the number of bits in `data`.
  ///
  /// # Example
  ///
  /// ```
  /// use bitcrc::catalog::CRC_3_GSM;
  ///
  /// // The four bits 1,0,1,0: an MSB-first variant reads them from the top
  /// // of the byte down.
  /// assert_eq!(CRC_3_GSM.checksum_bits(&[0b1010_0000], 4), 0x4);
  /// ```
  #[must_use]
  pub fn checksum_bits(&self, data: &[u8], bit_len: usize) -> W {
    self.value_of(self.update_bits(self.refinit, data, bit_len))
  }

  /// Starts a streaming computation bound to this engine.
  #[must_use]
  pub fn digest(&self) -> Digest<'_, W> {
    Digest::new(self)
  }

  /// The parameters this engine was built from.
  #[must_use]
  pub const fn params(&self) -> Params<W> {
    self.params
  }

  /// Advances `reg` by whole bytes through the table.
  pub(crate) fn update_bytes(&self, mut reg: W, data: &[u8]) -> W {
    if self.params.refin() {
      for &byte in data {
        reg = self.table[usize::from(reg.low_byte() ^ byte)] ^ reg.shr8();
      }
    } else {
      for &byte in data {
        let byte = BYTE_REFLECT[usize::from(byte)];
        reg = self.table[usize::from(reg.low_byte() ^ byte)] ^ reg.shr8();
      }
    }
    reg
  }

  /// Advances `reg` by the first `bit_len` bits of `data`.
  ///
  /// Whole bytes take the table path; a trailing partial byte takes the
  /// bit-serial path.
  pub(crate) fn update_bits(&self, mut reg: W, data: &[u8], bit_len: usize) -> W {
    assert!(
      bit_len.div_ceil(8) <= data.len(),
      "bit_len is greater than the number of bits in the input data"
    );
    let full = bit_len / 8;
    let tail = (bit_len % 8) as u32;
    reg = self.update_bytes(reg, &data[..full]);
    if tail > 0 {
      reg = self.update_tail(reg, data[full], tail);
    }
    reg
  }

  /// Folds the first `bits` (1 to 8) bits of `byte` into `reg` without the
  /// table.
  fn update_tail(&self, reg: W, byte: u8, bits: u32) -> W {
    let byte = if self.params.refin() { byte } else { BYTE_REFLECT[usize::from(byte)] };
    bitwise_fold(self.refpoly, reg, byte & (0xFF >> (8 - bits)), bits)
  }

  /// The register value a fresh computation starts from.
  pub(crate) fn initial(&self) -> W {
    self.refinit
  }

  /// Reads `reg` out in the variant's output bit order, without `xorout`.
  pub(crate) fn residue_of(&self, reg: W) -> W {
    if self.params.refout() { reg } else { reflect(reg, self.params.width()) }
  }

  /// Reads `reg` out as a finished CRC value.
  pub(crate) fn value_of(&self, reg: W) -> W {
    self.residue_of(reg) ^ self.params.xorout()
  }
}

impl<W: Width> fmt::Debug for Crc<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc").field("params", &self.params).finish_non_exhaustive()
  }
}

/// Folds the low `bits` bits of `byte` into `reg` with the reflected
/// bit-serial recurrence. `byte` must already be LSB-first with unused bits
/// cleared.
fn bitwise_fold<W: Width>(refpoly: W, reg: W, byte: u8, bits: u32) -> W {
  let mut reg = reg ^ W::from_byte(byte);
  for _ in 0..bits {
    reg = if reg & W::ONE != W::ZERO { (reg >> 1) ^ refpoly } else { reg >> 1 };
  }
  reg
}
