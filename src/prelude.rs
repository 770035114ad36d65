//! Prelude module for the computus crate.
//!
//! Re-exports the derive macros used across the crate from derive_more.

pub use derive_more::{Deref, Display, Into};
