//! Streaming hash state and digest output.

#![allow(clippy::indexing_slicing)] // Fixed-size block buffer management

use core::fmt;

use traits::Digest;

use crate::{
  compress::{IV, compress},
  error::Error,
  params::Params,
  BLOCK_LEN, OUT_LEN,
};

/// A finished BLAKE2b digest.
///
/// Stores up to [`OUT_LEN`] bytes inline; the valid prefix is the digest
/// length fixed at state construction. Bytes past the digest length are
/// always zero.
#[derive(Clone, Copy)]
pub struct Hash {
  bytes: [u8; OUT_LEN],
  len: u8,
}

impl Hash {
  /// The digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.len as usize]
  }
}

impl AsRef<[u8]> for Hash {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq for Hash {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl Eq for Hash {}

impl fmt::Debug for Hash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Hash(\"")?;
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    f.write_str("\")")
  }
}

/// BLAKE2b hash state: any key, salt, personalization, and digest length
/// accepted by [`Params`].
///
/// Obtained from [`Params::to_state`] or the constructors below; fed with
/// [`update`](Blake2b::update); consumed by [`finalize`](Blake2b::finalize).
/// Consuming `finalize` makes reuse after finalization a compile error, so
/// the state machine cannot be driven out of order.
#[derive(Clone)]
pub struct Blake2b {
  h: [u64; 8],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  bytes_hashed: u128,
  out_len: usize,
}

impl Blake2b {
  /// Unkeyed state with the default 64-byte digest length.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_parameters(OUT_LEN, &[], &Params::new().encode())
  }

  /// Unkeyed state with a digest length of `out_len` bytes.
  ///
  /// # Errors
  ///
  /// [`Error::OutputLength`] unless `1 <= out_len <= 64`.
  pub fn with_output_len(out_len: usize) -> Result<Self, Error> {
    Params::new().hash_length(out_len).to_state()
  }

  /// Keyed state (MAC mode) with a digest length of `out_len` bytes.
  ///
  /// # Errors
  ///
  /// [`Error::KeyLength`] if `key` exceeds 64 bytes, or
  /// [`Error::OutputLength`] unless `1 <= out_len <= 64`.
  pub fn new_keyed(key: &[u8], out_len: usize) -> Result<Self, Error> {
    Params::new().hash_length(out_len).key(key).to_state()
  }

  /// The digest length this state will produce, in bytes.
  #[inline]
  #[must_use]
  pub fn output_len(&self) -> usize {
    self.out_len
  }

  /// Build a state from an already-validated parameter set.
  ///
  /// The chaining value is the IV XORed with the parameter block words. A
  /// non-empty key is staged as a zero-padded first block, held in the
  /// buffer so the first compression consumes it like any other
  /// non-terminal block.
  pub(crate) fn with_parameters(out_len: usize, key: &[u8], param_block: &[u8; 64]) -> Self {
    let mut h = IV;
    let (words, _) = param_block.as_chunks::<8>();
    for (i, w) in words.iter().enumerate() {
      h[i] ^= u64::from_le_bytes(*w);
    }

    let mut state = Self {
      h,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      bytes_hashed: 0,
      out_len,
    };
    if !key.is_empty() {
      state.buf[..key.len()].copy_from_slice(key);
      state.buf_len = BLOCK_LEN;
    }
    state
  }

  /// Absorb `data`. May be called any number of times; the digest does not
  /// depend on how the input is chunked.
  pub fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      // Keep a full block buffered until we know there is more input, so the
      // final block can be marked with the `is_last` flag.
      if self.buf_len == BLOCK_LEN && !data.is_empty() {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, &self.buf, self.bytes_hashed, false);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      // If `rest` is empty, hold back the last full block for finalization.
      let (to_compress, last_full) = if rest.is_empty() {
        (&blocks[..blocks.len() - 1], Some(blocks[blocks.len() - 1]))
      } else {
        (blocks, None)
      };

      for block in to_compress {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, block, self.bytes_hashed, false);
      }

      if let Some(last) = last_full {
        self.buf.copy_from_slice(&last);
        self.buf_len = BLOCK_LEN;
      }
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  /// Pad and compress the terminal block, then serialize the digest.
  ///
  /// Consumes the state; the terminal compression happens exactly once.
  #[must_use]
  pub fn finalize(self) -> Hash {
    let mut h = self.h;
    let mut buf = self.buf;
    let len = self.buf_len;

    buf[len..].fill(0);
    let t = self.bytes_hashed.wrapping_add(len as u128);
    compress(&mut h, &buf, t, true);

    let mut bytes = [0u8; OUT_LEN];
    for (i, word) in h.iter().copied().enumerate() {
      bytes[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
    }
    bytes[self.out_len..].fill(0);
    Hash {
      bytes,
      len: self.out_len as u8,
    }
  }
}

impl Default for Blake2b {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// The chaining value and buffer contain message-derived material; keep them
// out of Debug output.
impl fmt::Debug for Blake2b {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2b")
      .field("out_len", &self.out_len)
      .finish_non_exhaustive()
  }
}

/// BLAKE2b-512: fixed 64-byte output, unkeyed, implementing
/// [`traits::Digest`].
#[derive(Clone)]
pub struct Blake2b512(Blake2b);

impl Default for Blake2b512 {
  #[inline]
  fn default() -> Self {
    Self(Blake2b::new())
  }
}

impl Digest for Blake2b512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let digest = self.0.clone().finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(digest.as_bytes());
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

/// BLAKE2b-256: fixed 32-byte output, unkeyed, implementing
/// [`traits::Digest`].
#[derive(Clone)]
pub struct Blake2b256(Blake2b);

impl Default for Blake2b256 {
  #[inline]
  fn default() -> Self {
    Self(Blake2b::with_parameters(32, &[], &Params::new().hash_length(32).encode()))
  }
}

impl Digest for Blake2b256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let digest = self.0.clone().finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_bytes());
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
