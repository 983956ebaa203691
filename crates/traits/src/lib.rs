//! Core hashing traits for the blake2b workspace.
//!
//! This crate provides the foundational trait that the workspace's hash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Contents
//!
//! - [`Digest`] - Streaming cryptographic hash functions with a fixed-size
//!   output, one-shot helpers, and reset support.
//! - [`io`] - `std`-gated [`Read`](std::io::Read)/[`Write`](std::io::Write)
//!   adapters that hash transparently during I/O.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
