//! Scalar numeric values.
//!
//! [`Scalar`] holds exactly one value of one of the ten numeric kinds.
//! Conversions between numeric kinds use Rust's standard `as` cast semantics:
//! integer narrowing wraps, float-to-integer truncates toward zero and
//! saturates at the target bounds. The lossy behavior is intentional and part
//! of the read contract.

use serde::{Deserialize, Serialize};

use crate::error::{AttrError, AttrResult};
use crate::types::{AttrKind, VecValue};

/// A single numeric value tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Scalar {
    /// Signed 8-bit integer.
    Int8(i8),
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// 32-bit float.
    Float32(f32),
    /// 64-bit float.
    Float64(f64),
}

impl Scalar {
    /// The kind of this scalar.
    pub fn kind(self) -> AttrKind {
        match self {
            Scalar::Int8(_) => AttrKind::Int8,
            Scalar::UInt8(_) => AttrKind::UInt8,
            Scalar::Int16(_) => AttrKind::Int16,
            Scalar::UInt16(_) => AttrKind::UInt16,
            Scalar::Int32(_) => AttrKind::Int32,
            Scalar::UInt32(_) => AttrKind::UInt32,
            Scalar::Int64(_) => AttrKind::Int64,
            Scalar::UInt64(_) => AttrKind::UInt64,
            Scalar::Float32(_) => AttrKind::Float32,
            Scalar::Float64(_) => AttrKind::Float64,
        }
    }

    /// Native byte width of the stored value.
    pub fn byte_size(self) -> usize {
        match self {
            Scalar::Int8(_) | Scalar::UInt8(_) => 1,
            Scalar::Int16(_) | Scalar::UInt16(_) => 2,
            Scalar::Int32(_) | Scalar::UInt32(_) | Scalar::Float32(_) => 4,
            Scalar::Int64(_) | Scalar::UInt64(_) | Scalar::Float64(_) => 8,
        }
    }

    /// Converts this scalar to the requested numeric kind.
    ///
    /// Returns `KindMismatch` if `requested` is not a scalar numeric kind.
    pub fn convert(self, requested: AttrKind) -> AttrResult<Scalar> {
        let converted = match requested {
            AttrKind::Int8 => Scalar::Int8(i8::from_scalar(self)),
            AttrKind::UInt8 => Scalar::UInt8(u8::from_scalar(self)),
            AttrKind::Int16 => Scalar::Int16(i16::from_scalar(self)),
            AttrKind::UInt16 => Scalar::UInt16(u16::from_scalar(self)),
            AttrKind::Int32 => Scalar::Int32(i32::from_scalar(self)),
            AttrKind::UInt32 => Scalar::UInt32(u32::from_scalar(self)),
            AttrKind::Int64 => Scalar::Int64(i64::from_scalar(self)),
            AttrKind::UInt64 => Scalar::UInt64(u64::from_scalar(self)),
            AttrKind::Float32 => Scalar::Float32(f32::from_scalar(self)),
            AttrKind::Float64 => Scalar::Float64(f64::from_scalar(self)),
            other => {
                return Err(AttrError::KindMismatch {
                    stored: self.kind(),
                    requested: other,
                })
            }
        };
        Ok(converted)
    }

    /// Converts the value to `f64`, losing precision for wide integers.
    pub fn as_f64(self) -> f64 {
        f64::from_scalar(self)
    }

    /// The zero value of a scalar kind, `None` for non-scalar kinds.
    pub fn zero_of(kind: AttrKind) -> Option<Scalar> {
        let zero = match kind {
            AttrKind::Int8 => Scalar::Int8(0),
            AttrKind::UInt8 => Scalar::UInt8(0),
            AttrKind::Int16 => Scalar::Int16(0),
            AttrKind::UInt16 => Scalar::UInt16(0),
            AttrKind::Int32 => Scalar::Int32(0),
            AttrKind::UInt32 => Scalar::UInt32(0),
            AttrKind::Int64 => Scalar::Int64(0),
            AttrKind::UInt64 => Scalar::UInt64(0),
            AttrKind::Float32 => Scalar::Float32(0.0),
            AttrKind::Float64 => Scalar::Float64(0.0),
            _ => return None,
        };
        Some(zero)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int8(v) => write!(f, "{v}"),
            Scalar::UInt8(v) => write!(f, "{v}"),
            Scalar::Int16(v) => write!(f, "{v}"),
            Scalar::UInt16(v) => write!(f, "{v}"),
            Scalar::Int32(v) => write!(f, "{v}"),
            Scalar::UInt32(v) => write!(f, "{v}"),
            Scalar::Int64(v) => write!(f, "{v}"),
            Scalar::UInt64(v) => write!(f, "{v}"),
            Scalar::Float32(v) => write!(f, "{v}"),
            Scalar::Float64(v) => write!(f, "{v}"),
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// The ten primitive numeric types a scalar or vector payload can hold.
///
/// Sealed: implemented exactly for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`,
/// `i64`, `u64`, `f32` and `f64`.
pub trait ScalarType: private::Sealed + Copy {
    /// The scalar kind corresponding to `Self`.
    const KIND: AttrKind;
    /// The vector kind whose elements are `Self`.
    const VEC_KIND: AttrKind;

    /// Reads any scalar as `Self`, applying numeric cast semantics.
    fn from_scalar(value: Scalar) -> Self;
    /// Wraps `self` in its scalar variant.
    fn into_scalar(self) -> Scalar;
    /// Wraps an owned sequence in its vector variant.
    fn wrap_vec(values: Vec<Self>) -> VecValue;
    /// Borrows the matching vector variant, `None` on any other variant.
    fn slice_of(vec: &VecValue) -> Option<&[Self]>;
}

macro_rules! impl_scalar_type {
    ($ty:ty, $kind:ident, $vec_kind:ident) => {
        impl private::Sealed for $ty {}

        impl ScalarType for $ty {
            const KIND: AttrKind = AttrKind::$kind;
            const VEC_KIND: AttrKind = AttrKind::$vec_kind;

            fn from_scalar(value: Scalar) -> Self {
                match value {
                    Scalar::Int8(v) => v as $ty,
                    Scalar::UInt8(v) => v as $ty,
                    Scalar::Int16(v) => v as $ty,
                    Scalar::UInt16(v) => v as $ty,
                    Scalar::Int32(v) => v as $ty,
                    Scalar::UInt32(v) => v as $ty,
                    Scalar::Int64(v) => v as $ty,
                    Scalar::UInt64(v) => v as $ty,
                    Scalar::Float32(v) => v as $ty,
                    Scalar::Float64(v) => v as $ty,
                }
            }

            fn into_scalar(self) -> Scalar {
                Scalar::$kind(self)
            }

            fn wrap_vec(values: Vec<Self>) -> VecValue {
                VecValue::$kind(values)
            }

            fn slice_of(vec: &VecValue) -> Option<&[Self]> {
                match vec {
                    VecValue::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Scalar {
            fn from(value: $ty) -> Self {
                Scalar::$kind(value)
            }
        }
    };
}

impl_scalar_type!(i8, Int8, VecInt8);
impl_scalar_type!(u8, UInt8, VecUInt8);
impl_scalar_type!(i16, Int16, VecInt16);
impl_scalar_type!(u16, UInt16, VecUInt16);
impl_scalar_type!(i32, Int32, VecInt32);
impl_scalar_type!(u32, UInt32, VecUInt32);
impl_scalar_type!(i64, Int64, VecInt64);
impl_scalar_type!(u64, UInt64, VecUInt64);
impl_scalar_type!(f32, Float32, VecFloat32);
impl_scalar_type!(f64, Float64, VecFloat64);
