//! Core types for attribute values.
//!
//! This module contains the data structures the crate is built around:
//! - `AttrKind` : the closed set of data kinds
//! - `AttrSource` : provenance classification
//! - `Scalar` : one numeric value, with kind conversions
//! - `VecValue` / `AttrValue` : the tagged payload union
//! - `Attribute` : the attribute value container itself

pub mod attribute;
pub mod kind;
pub mod scalar;
pub mod source;
pub mod value;

pub use attribute::Attribute;
pub use kind::AttrKind;
pub use scalar::{Scalar, ScalarType};
pub use source::AttrSource;
pub use value::{AttrValue, VecValue};
