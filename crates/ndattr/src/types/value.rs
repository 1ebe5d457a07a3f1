//! Attribute payloads.
//!
//! [`AttrValue`] is the tagged union an attribute stores: nothing, one
//! scalar, one string, or one owned vector of a scalar element type.
//! [`VecValue`] covers the ten vector kinds, tagged by element type.

use serde::{Deserialize, Serialize};

use crate::types::{AttrKind, Scalar};

/// An owned sequence of one scalar element type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum VecValue {
    /// Signed 8-bit integers.
    Int8(Vec<i8>),
    /// Unsigned 8-bit integers.
    UInt8(Vec<u8>),
    /// Signed 16-bit integers.
    Int16(Vec<i16>),
    /// Unsigned 16-bit integers.
    UInt16(Vec<u16>),
    /// Signed 32-bit integers.
    Int32(Vec<i32>),
    /// Unsigned 32-bit integers.
    UInt32(Vec<u32>),
    /// Signed 64-bit integers.
    Int64(Vec<i64>),
    /// Unsigned 64-bit integers.
    UInt64(Vec<u64>),
    /// 32-bit floats.
    Float32(Vec<f32>),
    /// 64-bit floats.
    Float64(Vec<f64>),
}

impl VecValue {
    /// The vector kind of this payload.
    pub fn kind(&self) -> AttrKind {
        match self {
            VecValue::Int8(_) => AttrKind::VecInt8,
            VecValue::UInt8(_) => AttrKind::VecUInt8,
            VecValue::Int16(_) => AttrKind::VecInt16,
            VecValue::UInt16(_) => AttrKind::VecUInt16,
            VecValue::Int32(_) => AttrKind::VecInt32,
            VecValue::UInt32(_) => AttrKind::VecUInt32,
            VecValue::Int64(_) => AttrKind::VecInt64,
            VecValue::UInt64(_) => AttrKind::VecUInt64,
            VecValue::Float32(_) => AttrKind::VecFloat32,
            VecValue::Float64(_) => AttrKind::VecFloat64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            VecValue::Int8(v) => v.len(),
            VecValue::UInt8(v) => v.len(),
            VecValue::Int16(v) => v.len(),
            VecValue::UInt16(v) => v.len(),
            VecValue::Int32(v) => v.len(),
            VecValue::UInt32(v) => v.len(),
            VecValue::Int64(v) => v.len(),
            VecValue::UInt64(v) => v.len(),
            VecValue::Float32(v) => v.len(),
            VecValue::Float64(v) => v.len(),
        }
    }

    /// True when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total payload size in bytes: element count times native element width.
    pub fn byte_size(&self) -> usize {
        let width = match self {
            VecValue::Int8(_) | VecValue::UInt8(_) => 1,
            VecValue::Int16(_) | VecValue::UInt16(_) => 2,
            VecValue::Int32(_) | VecValue::UInt32(_) | VecValue::Float32(_) => 4,
            VecValue::Int64(_) | VecValue::UInt64(_) | VecValue::Float64(_) => 8,
        };
        self.len() * width
    }

    /// The first element, if any, as a scalar. Used by diagnostics.
    pub fn first(&self) -> Option<Scalar> {
        match self {
            VecValue::Int8(v) => v.first().copied().map(Scalar::Int8),
            VecValue::UInt8(v) => v.first().copied().map(Scalar::UInt8),
            VecValue::Int16(v) => v.first().copied().map(Scalar::Int16),
            VecValue::UInt16(v) => v.first().copied().map(Scalar::UInt16),
            VecValue::Int32(v) => v.first().copied().map(Scalar::Int32),
            VecValue::UInt32(v) => v.first().copied().map(Scalar::UInt32),
            VecValue::Int64(v) => v.first().copied().map(Scalar::Int64),
            VecValue::UInt64(v) => v.first().copied().map(Scalar::UInt64),
            VecValue::Float32(v) => v.first().copied().map(Scalar::Float32),
            VecValue::Float64(v) => v.first().copied().map(Scalar::Float64),
        }
    }

    /// An empty sequence of the given vector kind, `None` otherwise.
    pub fn empty_of(kind: AttrKind) -> Option<VecValue> {
        let empty = match kind {
            AttrKind::VecInt8 => VecValue::Int8(Vec::new()),
            AttrKind::VecUInt8 => VecValue::UInt8(Vec::new()),
            AttrKind::VecInt16 => VecValue::Int16(Vec::new()),
            AttrKind::VecUInt16 => VecValue::UInt16(Vec::new()),
            AttrKind::VecInt32 => VecValue::Int32(Vec::new()),
            AttrKind::VecUInt32 => VecValue::UInt32(Vec::new()),
            AttrKind::VecInt64 => VecValue::Int64(Vec::new()),
            AttrKind::VecUInt64 => VecValue::UInt64(Vec::new()),
            AttrKind::VecFloat32 => VecValue::Float32(Vec::new()),
            AttrKind::VecFloat64 => VecValue::Float64(Vec::new()),
            _ => return None,
        };
        Some(empty)
    }
}

/// The payload of an attribute: exactly one active representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AttrValue {
    /// No value; the attribute kind is not yet fixed.
    Undefined,
    /// One numeric value.
    Scalar(Scalar),
    /// One string value.
    String(String),
    /// One owned numeric sequence.
    Vector(VecValue),
}

impl AttrValue {
    /// The kind this payload corresponds to.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Undefined => AttrKind::Undefined,
            AttrValue::Scalar(s) => s.kind(),
            AttrValue::String(_) => AttrKind::String,
            AttrValue::Vector(v) => v.kind(),
        }
    }

    /// Payload size in bytes.
    ///
    /// Scalars report their native width, strings their length plus one for
    /// the wire-format terminator byte, vectors their element count times the
    /// element width, and an undefined payload reports zero.
    pub fn byte_size(&self) -> usize {
        match self {
            AttrValue::Undefined => 0,
            AttrValue::Scalar(s) => s.byte_size(),
            AttrValue::String(s) => s.len() + 1,
            AttrValue::Vector(v) => v.byte_size(),
        }
    }

    /// The zero/empty payload a freshly typed attribute holds.
    pub fn default_for(kind: AttrKind) -> AttrValue {
        if let Some(zero) = Scalar::zero_of(kind) {
            return AttrValue::Scalar(zero);
        }
        if let Some(empty) = VecValue::empty_of(kind) {
            return AttrValue::Vector(empty);
        }
        match kind {
            AttrKind::String => AttrValue::String(String::new()),
            _ => AttrValue::Undefined,
        }
    }

    /// Borrows the scalar payload, if active.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            AttrValue::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// Borrows the string payload, if active.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the vector payload, if active.
    pub fn as_vector(&self) -> Option<&VecValue> {
        match self {
            AttrValue::Vector(v) => Some(v),
            _ => None,
        }
    }
}
