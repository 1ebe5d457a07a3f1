//! Typed, self-describing attribute values for detector metadata.
//!
//! An [`Attribute`] is a named, described, provenance-tagged container for
//! exactly one value of one data kind: a signed or unsigned integer of four
//! widths, a float of two widths, a string, or an owned vector of any of the
//! ten numeric kinds. The kind is fixed once and is immutable afterwards;
//! every read and write is checked against it. Numeric reads may convert
//! between scalar kinds with standard cast semantics, string and vector
//! access requires an exact kind match.
//!
//! ```
//! use ndattr::{AttrKind, AttrSource, Attribute};
//!
//! let mut gain = Attribute::new("gain", "detector gain", AttrSource::Parameter, "GAIN");
//! gain.set_data_type(AttrKind::Float64)?;
//! gain.set_scalar(3.9f64)?;
//!
//! // Lossy numeric conversion on read is part of the contract.
//! assert_eq!(gain.get_scalar::<i32>()?, 3);
//! # Ok::<(), ndattr::AttrError>(())
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AttrError, AttrResult};
pub use traits::Refresh;
pub use types::{AttrKind, AttrSource, AttrValue, Attribute, Scalar, ScalarType, VecValue};
