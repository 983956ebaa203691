//! Invalid-argument errors reported at state construction.

use core::fmt;

/// Invalid hashing parameters.
///
/// Returned by [`Params::to_state`](crate::Params::to_state),
/// [`Params::hash`](crate::Params::hash), and the fallible [`Blake2b`]
/// constructors. Each variant identifies the offending argument; nothing is
/// clamped or truncated. An absent key, salt, or personalization is always
/// valid.
///
/// Once a state has been constructed, no further errors are possible.
///
/// [`Blake2b`]: crate::Blake2b
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// Requested digest length was zero or above [`OUT_LEN`](crate::OUT_LEN).
  OutputLength,
  /// Key was longer than [`KEY_LEN`](crate::KEY_LEN) bytes.
  KeyLength,
  /// Salt was supplied but not exactly [`SALT_LEN`](crate::SALT_LEN) bytes.
  SaltLength,
  /// Personalization was supplied but not exactly
  /// [`PERSONAL_LEN`](crate::PERSONAL_LEN) bytes.
  PersonalLength,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OutputLength => f.write_str("digest length must be between 1 and 64 bytes"),
      Self::KeyLength => f.write_str("key must be at most 64 bytes"),
      Self::SaltLength => f.write_str("salt must be exactly 16 bytes"),
      Self::PersonalLength => f.write_str("personalization must be exactly 16 bytes"),
    }
  }
}

impl core::error::Error for Error {}
