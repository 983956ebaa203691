//! Known-answer tests.
//!
//! Unkeyed vectors are the RFC 7693 appendix digest and the classic test
//! strings; keyed vectors are the first rows of the official BLAKE2b KAT
//! corpus (64-byte key `00 01 .. 3f`, message bytes `00 01 02 ..`).

use blake2b::{Blake2b, Blake2b256, Blake2b512, Digest as _, Params};

fn decode(s: &str) -> Vec<u8> {
  hex::decode(s).unwrap()
}

fn kat_key() -> Vec<u8> {
  (0u8..64).collect()
}

#[test]
fn rfc7693_empty_message() {
  let expected = decode(
    "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
     d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be8b8",
  );
  assert_eq!(blake2b::hash(b"").as_bytes(), &expected[..]);
  assert_eq!(&Blake2b512::digest(b"")[..], &expected[..]);
}

#[test]
fn abc() {
  let expected = decode(
    "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
     7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
  );
  assert_eq!(blake2b::hash(b"abc").as_bytes(), &expected[..]);
}

#[test]
fn quick_brown_fox() {
  let expected = decode(
    "a8add4bdddfd93e4877d2746e62817b116364a1fa7bc148d95090bc7333b3673\
     f82401cf7aa2e4cb1ecd90296e3f14cb5413f8ed77be73045b13914cdcd6a918",
  );
  let input = b"The quick brown fox jumps over the lazy dog";
  assert_eq!(blake2b::hash(input).as_bytes(), &expected[..]);
}

#[test]
fn empty_message_256() {
  let expected = decode("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8");
  let digest = Params::new().hash_length(32).hash(b"").unwrap();
  assert_eq!(digest.as_bytes(), &expected[..]);
  assert_eq!(&Blake2b256::digest(b"")[..], &expected[..]);
}

#[test]
fn keyed_kat_empty_message() {
  let expected = decode(
    "10ebb67700b1868efb4417987acf4690ae9d972fb7a590c2f02871799aaa4786\
     b5e996e8f0f4eb981fc214b005f42d2ff4233499391653df7aefcbc13fc51568",
  );
  let digest = Params::new().key(&kat_key()).hash(b"").unwrap();
  assert_eq!(digest.as_bytes(), &expected[..]);
}

#[test]
fn keyed_kat_one_byte_message() {
  let expected = decode(
    "961f6dd1e4dd30f63901690c512e78e4b45e4742ed197c3c5e45c549fd25f2e4\
     187b0bc9fe30492b16b0d0bc4ef9b0f34c7003fac09a5ef1532e69430234cebd",
  );
  let digest = Params::new().key(&kat_key()).hash(&[0x00]).unwrap();
  assert_eq!(digest.as_bytes(), &expected[..]);
}

#[test]
fn keyed_kat_reproduced_by_streaming() {
  let expected = Params::new().key(&kat_key()).hash(&[0x00]).unwrap();
  let mut state = Blake2b::new_keyed(&kat_key(), 64).unwrap();
  state.update(&[]);
  state.update(&[0x00]);
  state.update(&[]);
  assert_eq!(state.finalize(), expected);
}
