//! Differential tests against independent implementations: the RustCrypto
//! `blake2` crate for the fixed unkeyed types and `blake2b_simd` for the
//! full parameter space.

use blake2b::{Blake2b256, Blake2b512, Digest as _, Params};
use proptest::prelude::*;

fn blake2b512_ref(data: &[u8]) -> [u8; 64] {
  use blake2::Digest as _;
  let out = blake2::Blake2b512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

fn params_ref(data: &[u8], key: &[u8], out_len: usize, salt: &[u8; 16], personal: &[u8; 16]) -> Vec<u8> {
  let mut params = blake2b_simd::Params::new();
  params.hash_length(out_len).key(key).salt(salt).personal(personal);
  params.hash(data).as_bytes().to_vec()
}

proptest! {
  #[test]
  fn blake2b512_one_shot_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2b512::digest(&data), blake2b512_ref(&data));
  }

  #[test]
  fn blake2b512_streaming_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2b512_ref(&data);
    let mut h = Blake2b512::new();

    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }
    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn blake2b256_matches_blake2b_simd(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let mut params = blake2b_simd::Params::new();
    params.hash_length(32);
    let expected = params.hash(&data);
    prop_assert_eq!(&Blake2b256::digest(&data)[..], expected.as_bytes());
  }

  #[test]
  fn full_parameter_space_matches_blake2b_simd(
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    key in proptest::collection::vec(any::<u8>(), 0..=64usize),
    out_len in 1..=64usize,
    salt in any::<[u8; 16]>(),
    personal in any::<[u8; 16]>(),
  ) {
    let ours = Params::new()
      .hash_length(out_len)
      .key(&key)
      .salt(&salt)
      .personal(&personal)
      .hash(&data)
      .unwrap();
    prop_assert_eq!(ours.as_bytes(), &params_ref(&data, &key, out_len, &salt, &personal)[..]);
  }

  #[test]
  fn keyed_streaming_matches_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    key in proptest::collection::vec(any::<u8>(), 1..=64usize),
  ) {
    let expected = Params::new().key(&key).hash(&data).unwrap();
    let mut state = Params::new().key(&key).to_state().unwrap();

    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 131) + 1;
      let end = core::cmp::min(data.len(), i + step);
      state.update(&data[i..end]);
      i = end;
    }
    prop_assert_eq!(state.finalize(), expected);
  }
}
