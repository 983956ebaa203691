//! Parameter block construction.
//!
//! The 64-byte parameter block is transient: it configures the initial
//! chaining value at state construction and is not retained afterwards.

#![allow(clippy::indexing_slicing)] // Fixed parameter block layout

use core::fmt;

use crate::{
  error::Error,
  hasher::{Blake2b, Hash},
  KEY_LEN, OUT_LEN, PERSONAL_LEN, SALT_LEN,
};

/// Builder for keyed, salted, personalized, variable-length BLAKE2b.
///
/// Holds borrowed parameters; validation happens when a state is built, so
/// setters cannot fail and chain freely.
///
/// # Example
///
/// ```rust
/// use blake2b::Params;
///
/// let mut state = Params::new()
///   .hash_length(32)
///   .key(b"session key")
///   .to_state()?;
/// state.update(b"some message");
/// let digest = state.finalize();
/// assert_eq!(digest.as_bytes().len(), 32);
/// # Ok::<(), blake2b::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Params<'a> {
  out_len: usize,
  key: &'a [u8],
  salt: Option<&'a [u8]>,
  personal: Option<&'a [u8]>,
}

impl<'a> Params<'a> {
  /// Default parameters: unkeyed, no salt or personalization, 64-byte digest.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      out_len: OUT_LEN,
      key: &[],
      salt: None,
      personal: None,
    }
  }

  /// Digest length in bytes, `1..=64`. Defaults to 64.
  #[must_use]
  pub const fn hash_length(mut self, out_len: usize) -> Self {
    self.out_len = out_len;
    self
  }

  /// Key for keyed hashing (MAC mode), at most 64 bytes. An empty key means
  /// unkeyed hashing.
  #[must_use]
  pub const fn key(mut self, key: &'a [u8]) -> Self {
    self.key = key;
    self
  }

  /// Salt, exactly 16 bytes when supplied. Absent means all-zero.
  #[must_use]
  pub const fn salt(mut self, salt: &'a [u8]) -> Self {
    self.salt = Some(salt);
    self
  }

  /// Personalization string, exactly 16 bytes when supplied. Absent means
  /// all-zero.
  #[must_use]
  pub const fn personal(mut self, personal: &'a [u8]) -> Self {
    self.personal = Some(personal);
    self
  }

  /// Build a ready-to-stream hashing state.
  ///
  /// # Errors
  ///
  /// Returns the [`Error`] variant naming the first invalid parameter.
  pub fn to_state(&self) -> Result<Blake2b, Error> {
    self.validate()?;
    Ok(Blake2b::with_parameters(self.out_len, self.key, &self.encode()))
  }

  /// Compute the digest of `data` in one shot with these parameters.
  ///
  /// # Errors
  ///
  /// Same conditions as [`Params::to_state`].
  pub fn hash(&self, data: &[u8]) -> Result<Hash, Error> {
    let mut state = self.to_state()?;
    state.update(data);
    Ok(state.finalize())
  }

  fn validate(&self) -> Result<(), Error> {
    if self.out_len == 0 || self.out_len > OUT_LEN {
      return Err(Error::OutputLength);
    }
    if self.key.len() > KEY_LEN {
      return Err(Error::KeyLength);
    }
    if let Some(salt) = self.salt {
      if salt.len() != SALT_LEN {
        return Err(Error::SaltLength);
      }
    }
    if let Some(personal) = self.personal {
      if personal.len() != PERSONAL_LEN {
        return Err(Error::PersonalLength);
      }
    }
    Ok(())
  }

  /// Encode the 64-byte parameter block. Callers must have validated first.
  ///
  /// Layout (RFC 7693 section 2.5, sequential mode): digest length, key
  /// length, fanout = 1, depth = 1, then leaf length, node offset, node
  /// depth, inner length, and reserved bytes all zero, salt at 32..48,
  /// personalization at 48..64.
  pub(crate) fn encode(&self) -> [u8; 64] {
    let mut block = [0u8; 64];
    block[0] = self.out_len as u8;
    block[1] = self.key.len() as u8;
    block[2] = 1; // fanout
    block[3] = 1; // depth
    if let Some(salt) = self.salt {
      block[32..32 + SALT_LEN].copy_from_slice(salt);
    }
    if let Some(personal) = self.personal {
      block[48..48 + PERSONAL_LEN].copy_from_slice(personal);
    }
    block
  }
}

impl Default for Params<'_> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// Key material is redacted; only its length is shown.
impl fmt::Debug for Params<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Params")
      .field("out_len", &self.out_len)
      .field("key_len", &self.key.len())
      .field("salt", &self.salt)
      .field("personal", &self.personal)
      .finish()
  }
}
