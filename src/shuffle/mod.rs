//! Deterministic shuffle: a seedable LCG and the Fisher-Yates permutation
//! that consumes it.
//!
//! Output is bit-exact across ports for a given seed, which is what the
//! cross-language parity fixtures check.

pub mod input;
pub mod knuth;
pub mod lcg;

pub use input::{format_sequence, parse_sequence, resolve_seed, SeedSource};
pub use knuth::knuth_shuffle;
pub use lcg::Lcg;
