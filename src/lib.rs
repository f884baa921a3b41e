//! prose-lang tooling: the spec/skills installer, the source hash sync
//! checker and the deterministic Knuth shuffle used for parity fixtures.

pub mod config;
pub mod console;
pub mod installer;
pub mod shuffle;
pub mod sync_check;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
