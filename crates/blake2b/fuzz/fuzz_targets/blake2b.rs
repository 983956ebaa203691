#![no_main]

use blake2b::{Blake2b512, Digest as _, Params};
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  // Unkeyed: one-shot, streaming, and the RustCrypto oracle must agree.
  {
    let ours = Blake2b512::digest(input);
    let mut h = Blake2b512::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use blake2::Digest as _;
    let ref_out = blake2::Blake2b512::digest(input);
    let mut expected = [0u8; 64];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  // Parameterized: derive key and digest length from the input, compare
  // against blake2b_simd.
  {
    let out_len = if input.is_empty() { 64 } else { (input[0] as usize % 64) + 1 };
    let key_len = split.min(64);
    let (key, msg) = input.split_at(key_len);

    let ours = Params::new().hash_length(out_len).key(key).hash(msg).unwrap();

    let mut params = blake2b_simd::Params::new();
    params.hash_length(out_len).key(key);
    assert_eq!(ours.as_bytes(), params.hash(msg).as_bytes());

    let mut state = Params::new().hash_length(out_len).key(key).to_state().unwrap();
    for chunk in msg.chunks(7) {
      state.update(chunk);
    }
    assert_eq!(state.finalize(), ours);
  }
});
