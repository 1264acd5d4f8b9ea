//! Streaming CRC computation.

use crate::crc::Crc;
use crate::width::Width;

/// A streaming CRC session borrowing its [`Crc`] engine.
///
/// A digest is two words of state and is cheap to create, clone and throw
/// away. Feed it with [`update`] and [`update_bits`] in any mix; the result is
/// identical to a single [`Crc::checksum_bits`] call over the concatenated bit
/// stream, even when one byte's bits are split across calls.
///
/// For `refin` variants bits are taken from the least significant end of each
/// byte, so a byte split after `k` bits resumes with the original byte shifted
/// right by `k`. For MSB-first variants bits are taken from the most
/// significant end and a split byte resumes with the byte shifted left by `k`.
///
/// [`update`]: Digest::update
/// [`update_bits`]: Digest::update_bits
///
/// # Example
///
/// ```
/// use bitcrc::catalog::CRC_32;
///
/// let mut digest = CRC_32.digest();
/// digest.update(b"12345");
/// digest.update(b"6789");
/// assert_eq!(digest.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Digest<'a, W: Width> {
  crc: &'a Crc<W>,
  reg: W,
}

impl<'a, W: Width> Digest<'a, W> {
  pub(crate) fn new(crc: &'a Crc<W>) -> Self {
    Self { crc, reg: crc.initial() }
  }

  /// Feeds whole bytes.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.reg = self.crc.update_bytes(self.reg, data);
  }

  /// Feeds the first `bit_len` bits of `data`.
  ///
  /// The stream may be cut anywhere, including inside a byte; see the type
  /// docs for how a split byte resumes.
  ///
  /// # Panics
  ///
  /// Panics if `bit_len` exceeds the number of bits in `data`.
  ///
  /// # Example
  ///
  /// ```
  /// use bitcrc::catalog::CRC_5_USB;
  ///
  /// let mut digest = CRC_5_USB.digest();
  /// // Four whole bytes plus the two low bits of '5' (0x35)...
  /// digest.update_bits(b"12345", 8 * 4 + 2);
  /// // ...then its remaining six bits, then the rest.
  /// digest.update_bits(&[0x35 >> 2], 6);
  /// digest.update(b"6789");
  /// assert_eq!(digest.finalize(), 0x19);
  /// ```
  pub fn update_bits(&mut self, data: &[u8], bit_len: usize) {
    self.reg = self.crc.update_bits(self.reg, data, bit_len);
  }

  /// The CRC of everything fed so far.
  ///
  /// Does not consume the digest; more input may follow.
  #[must_use]
  pub fn finalize(&self) -> W {
    self.crc.value_of(self.reg)
  }

  /// The register in output bit order, without the final `xorout`.
  ///
  /// Feeding a message followed by its own CRC (the codeword) leaves this at
  /// the variant's published residue constant, whatever the message was.
  #[must_use]
  pub fn residue(&self) -> W {
    self.crc.residue_of(self.reg)
  }

  /// Restarts the computation, keeping the engine binding.
  pub fn reset(&mut self) {
    self.reg = self.crc.initial();
  }
}
