//! BLAKE2b (RFC 7693).
//!
//! Portable, `no_std`, pure Rust implementation: streaming or one-shot,
//! with optional key (keyed/MAC mode), salt, personalization, and digest
//! lengths from 1 to 64 bytes.
//!
//! # One-shot
//!
//! ```rust
//! let digest = blake2b::hash(b"hello world");
//! assert_eq!(digest.as_bytes().len(), 64);
//! ```
//!
//! # Streaming
//!
//! ```rust
//! let mut state = blake2b::Blake2b::new();
//! state.update(b"hello ");
//! state.update(b"world");
//! assert_eq!(state.finalize(), blake2b::hash(b"hello world"));
//! ```
//!
//! # Keyed, with parameters
//!
//! ```rust
//! use blake2b::Params;
//!
//! let digest = Params::new()
//!   .hash_length(32)
//!   .key(b"my shared secret")
//!   .personal(b"example-app-v1.0")
//!   .hash(b"message")?;
//! assert_eq!(digest.as_bytes().len(), 32);
//! # Ok::<(), blake2b::Error>(())
//! ```
//!
//! All parameter validation happens at state construction and is reported
//! as an [`Error`]; once a state exists, hashing cannot fail.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod compress;
mod error;
mod hasher;
mod params;

pub use error::Error;
pub use hasher::{Blake2b, Blake2b256, Blake2b512, Hash};
pub use params::Params;
pub use traits::Digest;

/// Compression block length in bytes.
pub const BLOCK_LEN: usize = 128;

/// Maximum (and default) digest length in bytes.
pub const OUT_LEN: usize = 64;

/// Maximum key length in bytes.
pub const KEY_LEN: usize = 64;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Personalization length in bytes.
pub const PERSONAL_LEN: usize = 16;

/// Compute the unkeyed 64-byte BLAKE2b digest of `data` in one shot.
///
/// Shorthand for the default [`Params`]; use [`Params::hash`] for keyed or
/// non-default-length digests.
#[must_use]
pub fn hash(data: &[u8]) -> Hash {
  let mut state = Blake2b::new();
  state.update(data);
  state.finalize()
}
