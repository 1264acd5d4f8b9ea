//! Lazily-built, shareable engines for catalogued parameter sets.

use std::sync::OnceLock;

use crate::crc::Crc;
use crate::digest::Digest;
use crate::params::Params;
use crate::width::Width;

/// A [`Crc`] engine built on first use.
///
/// Building an engine computes its 256-entry table. A `Preset` defers that
/// work until the preset is actually used, so linking the whole catalogue
/// costs nothing at startup; presets never touched never build anything. The
/// engine is built at most once, even under concurrent first access, and is
/// shared read-only afterwards.
///
/// The convenience methods pay one initialization check per call. Callers on
/// a hot path can hold the `&Crc` from [`Preset::crc`] instead.
///
/// # Example
///
/// ```
/// use bitcrc::catalog::CRC_32;
///
/// assert_eq!(CRC_32.checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Debug)]
pub struct Preset<W: Width> {
  params: Params<W>,
  cell: OnceLock<Crc<W>>,
}

impl<W: Width> Preset<W> {
  /// Wraps validated parameters. No table is computed yet.
  #[must_use]
  pub const fn new(params: Params<W>) -> Self {
    Self { params, cell: OnceLock::new() }
  }

  /// The underlying engine, built on first call.
  pub fn crc(&self) -> &Crc<W> {
    self.cell.get_or_init(|| Crc::new(self.params))
  }

  /// One-shot CRC over whole bytes. See [`Crc::checksum`].
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> W {
    self.crc().checksum(data)
  }

  /// One-shot CRC over the first `bit_len` bits of `data`. See
  /// [`Crc::checksum_bits`].
  ///
  /// # Panics
  ///
  /// Panics if `bit_len` exceeds the number of bits in `data`.
  #[must_use]
  pub fn checksum_bits(&self, data: &[u8], bit_len: usize) -> W {
    self.crc().checksum_bits(data, bit_len)
  }

  /// Starts a streaming computation on the shared engine.
  #[must_use]
  pub fn digest(&self) -> Digest<'_, W> {
    self.crc().digest()
  }

  /// The parameters behind this preset.
  #[must_use]
  pub const fn params(&self) -> Params<W> {
    self.params
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use crate::catalog;
  use super::*;

  #[test]
  fn the_engine_is_built_once() {
    let preset = Preset::new(catalog::params::CRC_32_ISO_HDLC);
    assert!(core::ptr::eq(preset.crc(), preset.crc()));
  }

  #[test]
  fn concurrent_first_access_agrees() {
    let preset = Preset::new(catalog::params::CRC_32_ISO_HDLC);
    std::thread::scope(|scope| {
      for _ in 0..8 {
        scope.spawn(|| {
          assert_eq!(preset.checksum(b"123456789"), 0xCBF4_3926);
        });
      }
    });
    assert!(core::ptr::eq(preset.crc(), preset.crc()));
  }

  #[test]
  fn a_static_preset_hands_out_one_engine() {
    assert!(core::ptr::eq(catalog::CRC_32.crc(), catalog::CRC_32.crc()));
  }

  #[test]
  fn aliases_share_the_canonical_engine() {
    assert!(core::ptr::eq(catalog::CRC_32.crc(), catalog::CRC_32_ISO_HDLC.crc()));
    assert!(core::ptr::eq(catalog::KERMIT.crc(), catalog::CRC_16_KERMIT.crc()));
  }

  #[test]
  fn digest_from_a_preset_matches_checksum() {
    let mut digest = catalog::CRC_16_ARC.digest();
    digest.update(b"123456789");
    assert_eq!(digest.finalize(), catalog::CRC_16_ARC.checksum(b"123456789"));
  }
}
