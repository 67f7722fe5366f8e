#![deny(missing_docs)]
#![no_std]

//! Facade crate for the linear collections.
//!
//! Re-exports the `no_std` [`Queue`] and [`Stack`] from `linear-collections-core-rs` so that
//! downstream crates depend on a single package.

pub use linear_collections_core_rs::{
  queue::{Queue, QueueCursor, QueueError},
  stack::{Stack, StackError},
};


/// Returns the version of this crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

/// Returns a short description of what the facade exposes.
#[must_use]
pub const fn readiness_message() -> &'static str {
  "linear-collections re-exports the FIFO Queue and LIFO Stack"
}
