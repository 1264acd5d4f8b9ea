//! Arbitrary-precision CRC calculation.
//!
//! `bitcrc` computes CRCs of any width from 1 to 64 bits over input of any
//! *bit* length: a message does not have to end on a byte boundary, and a
//! stream may be split mid-byte across update calls. One generic engine
//! reproduces every variant in Greg Cook's CRC catalogue
//! (<https://reveng.sourceforge.io/crc-catalogue/all.htm>), parameterized by
//! the conventional six values: `width`, `poly`, `init`, `xorout`, `refin` and
//! `refout`.
//!
//! Whole input bytes run through a precomputed 256-entry table, one lookup per
//! byte. A trailing partial byte (7 or fewer bits) runs through a tableless
//! bit-serial path that leaves the register exactly as if the bits had gone
//! through the table.
//!
//! # Picking an entry point
//!
//! | Entry point | Use when |
//! |---|---|
//! | [`catalog`] statics (`std`) | you want a named variant, built lazily and shared |
//! | [`catalog::params`] + [`Crc::new`] | `no_std`, or you control the engine's lifetime |
//! | [`Params`]`::new` + [`Crc::new`] | a custom or private polynomial |
//!
//! The engine is generic over the register type: `u8`, `u16`, `u32` or `u64`,
//! at least as wide as the CRC width (a CRC-17 needs `u32` or `u64`). The
//! catalogue picks the smallest fitting type for each variant.
//!
//! # Examples
//!
//! ```
//! use bitcrc::catalog::CRC_5_USB;
//!
//! // One-shot, whole bytes.
//! assert_eq!(CRC_5_USB.checksum(b"123456789"), 0x19);
//!
//! // The same stream cut inside a byte: four whole bytes plus the two low
//! // bits of '5' (0x35), then its remaining six bits, then the rest.
//! let mut digest = CRC_5_USB.digest();
//! digest.update_bits(b"12345", 8 * 4 + 2);
//! digest.update_bits(&[0x35 >> 2], 6);
//! digest.update(b"6789");
//! assert_eq!(digest.finalize(), 0x19);
//! ```
//!
//! Custom parameters work the same way; `0xA2EB` is a polynomial from
//! Koopman's CRC zoo:
//!
//! ```
//! use bitcrc::{Crc, Params};
//!
//! let zoo = Crc::new(Params::<u16>::new(16, 0xA2EB, 0xFFFF, 0xFFFF, true, true)?);
//! assert_eq!(zoo.checksum(b"123456789"), 0x4E4C);
//! # Ok::<(), bitcrc::ParamsError>(())
//! ```
//!
//! # `no_std` support
//!
//! The crate is `no_std` compatible and allocation-free. Disabling the `std`
//! feature drops the lazily-initialized [`catalog`] statics and keeps
//! everything else:
//!
//! ```toml
//! [dependencies]
//! bitcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
mod crc;
mod digest;
mod params;
#[cfg(feature = "std")]
mod preset;
mod proptests;
mod reflect;
mod width;

pub use crc::Crc;
pub use digest::Digest;
pub use params::{Params, ParamsError};
#[cfg(feature = "std")]
pub use preset::Preset;
pub use width::Width;
