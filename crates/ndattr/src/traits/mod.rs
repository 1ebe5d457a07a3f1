//! Extension traits for attribute values.

/// Live-value refresh hook invoked before reads.
pub mod refresh;

pub use refresh::Refresh;
