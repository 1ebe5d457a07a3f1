//! Data kinds for attribute values.
//!
//! [`AttrKind`] is the closed set of types an attribute value can hold. The
//! discriminants are stable wire values: scalar numeric kinds occupy the
//! contiguous range 0..=9, `String` is 10, the vector kinds occupy 11..=20
//! and `Undefined` is 21. External code relies on the scalar range being
//! contiguous to classify kinds with a single range check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AttrError;

/// Data kind of an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum AttrKind {
    /// Signed 8-bit integer.
    Int8 = 0,
    /// Unsigned 8-bit integer.
    UInt8 = 1,
    /// Signed 16-bit integer.
    Int16 = 2,
    /// Unsigned 16-bit integer.
    UInt16 = 3,
    /// Signed 32-bit integer.
    Int32 = 4,
    /// Unsigned 32-bit integer.
    UInt32 = 5,
    /// Signed 64-bit integer.
    Int64 = 6,
    /// Unsigned 64-bit integer.
    UInt64 = 7,
    /// 32-bit float.
    Float32 = 8,
    /// 64-bit float.
    Float64 = 9,
    /// Dynamic length string.
    String = 10,
    /// Vector of signed 8-bit integers.
    VecInt8 = 11,
    /// Vector of unsigned 8-bit integers.
    VecUInt8 = 12,
    /// Vector of signed 16-bit integers.
    VecInt16 = 13,
    /// Vector of unsigned 16-bit integers.
    VecUInt16 = 14,
    /// Vector of signed 32-bit integers.
    VecInt32 = 15,
    /// Vector of unsigned 32-bit integers.
    VecUInt32 = 16,
    /// Vector of signed 64-bit integers.
    VecInt64 = 17,
    /// Vector of unsigned 64-bit integers.
    VecUInt64 = 18,
    /// Vector of 32-bit floats.
    VecFloat32 = 19,
    /// Vector of 64-bit floats.
    VecFloat64 = 20,
    /// Kind not yet fixed.
    Undefined = 21,
}

impl AttrKind {
    /// Returns true for the ten scalar numeric kinds.
    pub fn is_scalar(self) -> bool {
        (self as i32) >= (AttrKind::Int8 as i32) && (self as i32) <= (AttrKind::Float64 as i32)
    }

    /// Returns true for the ten vector kinds.
    pub fn is_vector(self) -> bool {
        (self as i32) >= (AttrKind::VecInt8 as i32) && (self as i32) <= (AttrKind::VecFloat64 as i32)
    }

    /// Maps a vector kind to its element kind.
    pub fn element_kind(self) -> Option<AttrKind> {
        match self {
            AttrKind::VecInt8 => Some(AttrKind::Int8),
            AttrKind::VecUInt8 => Some(AttrKind::UInt8),
            AttrKind::VecInt16 => Some(AttrKind::Int16),
            AttrKind::VecUInt16 => Some(AttrKind::UInt16),
            AttrKind::VecInt32 => Some(AttrKind::Int32),
            AttrKind::VecUInt32 => Some(AttrKind::UInt32),
            AttrKind::VecInt64 => Some(AttrKind::Int64),
            AttrKind::VecUInt64 => Some(AttrKind::UInt64),
            AttrKind::VecFloat32 => Some(AttrKind::Float32),
            AttrKind::VecFloat64 => Some(AttrKind::Float64),
            _ => None,
        }
    }

    /// Native byte width of a scalar kind, `None` for everything else.
    pub fn scalar_width(self) -> Option<usize> {
        match self {
            AttrKind::Int8 | AttrKind::UInt8 => Some(1),
            AttrKind::Int16 | AttrKind::UInt16 => Some(2),
            AttrKind::Int32 | AttrKind::UInt32 | AttrKind::Float32 => Some(4),
            AttrKind::Int64 | AttrKind::UInt64 | AttrKind::Float64 => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttrKind::Int8 => "Int8",
            AttrKind::UInt8 => "UInt8",
            AttrKind::Int16 => "Int16",
            AttrKind::UInt16 => "UInt16",
            AttrKind::Int32 => "Int32",
            AttrKind::UInt32 => "UInt32",
            AttrKind::Int64 => "Int64",
            AttrKind::UInt64 => "UInt64",
            AttrKind::Float32 => "Float32",
            AttrKind::Float64 => "Float64",
            AttrKind::String => "String",
            AttrKind::VecInt8 => "VecInt8",
            AttrKind::VecUInt8 => "VecUInt8",
            AttrKind::VecInt16 => "VecInt16",
            AttrKind::VecUInt16 => "VecUInt16",
            AttrKind::VecInt32 => "VecInt32",
            AttrKind::VecUInt32 => "VecUInt32",
            AttrKind::VecInt64 => "VecInt64",
            AttrKind::VecUInt64 => "VecUInt64",
            AttrKind::VecFloat32 => "VecFloat32",
            AttrKind::VecFloat64 => "VecFloat64",
            AttrKind::Undefined => "Undefined",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<i32> for AttrKind {
    type Error = AttrError;

    /// Converts a raw wire value back into a kind. Out-of-range values are a
    /// checked error rather than an unchecked cast.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let kind = match value {
            0 => AttrKind::Int8,
            1 => AttrKind::UInt8,
            2 => AttrKind::Int16,
            3 => AttrKind::UInt16,
            4 => AttrKind::Int32,
            5 => AttrKind::UInt32,
            6 => AttrKind::Int64,
            7 => AttrKind::UInt64,
            8 => AttrKind::Float32,
            9 => AttrKind::Float64,
            10 => AttrKind::String,
            11 => AttrKind::VecInt8,
            12 => AttrKind::VecUInt8,
            13 => AttrKind::VecInt16,
            14 => AttrKind::VecUInt16,
            15 => AttrKind::VecInt32,
            16 => AttrKind::VecUInt32,
            17 => AttrKind::VecInt64,
            18 => AttrKind::VecUInt64,
            19 => AttrKind::VecFloat32,
            20 => AttrKind::VecFloat64,
            21 => AttrKind::Undefined,
            other => return Err(AttrError::InvalidKind(other)),
        };
        Ok(kind)
    }
}
