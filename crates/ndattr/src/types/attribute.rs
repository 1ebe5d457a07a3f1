//! The attribute value container.
//!
//! An [`Attribute`] is a named, described unit of metadata holding exactly
//! one value of one fixed kind, together with provenance information. The
//! data kind is fixed once, either at construction time or through
//! [`Attribute::set_data_type`], and can never change afterwards. All reads
//! and writes are checked against the fixed kind; numeric reads may convert
//! between scalar kinds, string and vector access never converts.

use std::io;

use serde::Serialize;
use tracing::warn;

use crate::error::{AttrError, AttrResult};
use crate::types::{AttrKind, AttrSource, AttrValue, Scalar, ScalarType};

/// A typed, self-describing attribute value.
///
/// Owns its payload outright: strings and vectors are copied by value, never
/// aliased. Cloning performs a deep copy of every field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    name: String,
    description: String,
    source: AttrSource,
    source_label: String,
    locator: String,
    value: AttrValue,
}

impl Attribute {
    /// Creates an untyped attribute.
    ///
    /// The data kind stays `Undefined` until [`Attribute::set_data_type`] is
    /// called or a value is supplied through [`Attribute::with_value`]. The
    /// source label is derived from `source` here and is not user-settable.
    pub fn new(name: &str, description: &str, source: AttrSource, locator: &str) -> Attribute {
        Attribute {
            name: name.to_string(),
            description: description.to_string(),
            source,
            source_label: source.label().to_string(),
            locator: locator.to_string(),
            value: AttrValue::Undefined,
        }
    }

    /// Creates an attribute and fixes its kind from the supplied value.
    ///
    /// An `AttrValue::Undefined` value leaves the attribute untyped, matching
    /// construction without an initial value.
    pub fn with_value(
        name: &str,
        description: &str,
        source: AttrSource,
        locator: &str,
        value: AttrValue,
    ) -> AttrResult<Attribute> {
        let mut attr = Attribute::new(name, description, source, locator);
        if !matches!(value, AttrValue::Undefined) {
            attr.set_data_type(value.kind())?;
            attr.set_value(value)?;
        }
        Ok(attr)
    }

    /// The attribute name. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where the value originates.
    pub fn source(&self) -> AttrSource {
        self.source
    }

    /// The label derived from the source kind at construction time.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// The free-text source locator (channel name, parameter key, ...).
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// The fixed data kind, `Undefined` until typed.
    pub fn kind(&self) -> AttrKind {
        self.value.kind()
    }

    /// Fixes the data kind of this attribute. This can only happen once.
    ///
    /// Setting the kind it already has is a no-op success; live sources
    /// re-register and call this repeatedly. Any concrete kind is accepted,
    /// scalar, string or vector; `Undefined` is rejected. Fixing the kind
    /// installs a zero or empty payload of that kind.
    pub fn set_data_type(&mut self, kind: AttrKind) -> AttrResult<()> {
        let current = self.value.kind();
        if kind == current {
            return Ok(());
        }
        if current != AttrKind::Undefined {
            warn!(name = %self.name, %current, requested = %kind, "data kind already fixed");
            return Err(AttrError::AlreadyTyped {
                current,
                requested: kind,
            });
        }
        if kind == AttrKind::Undefined {
            warn!(name = %self.name, "invalid data kind");
            return Err(AttrError::InvalidKind(kind as i32));
        }
        self.value = AttrValue::default_for(kind);
        Ok(())
    }

    /// Stores a value of the fixed kind.
    ///
    /// While the kind is still `Undefined` every concrete value is rejected
    /// with `NotTyped`; storing `AttrValue::Undefined` is then a no-op, the
    /// absent-value case. Once typed, the supplied value must match the fixed
    /// kind exactly; strings and vectors are replaced wholesale. Storing a
    /// string byte-identical to the current one does not touch the
    /// allocation.
    pub fn set_value(&mut self, value: AttrValue) -> AttrResult<()> {
        let fixed = self.value.kind();
        if fixed == AttrKind::Undefined {
            if matches!(value, AttrValue::Undefined) {
                return Ok(());
            }
            return Err(AttrError::NotTyped);
        }
        match (&mut self.value, value) {
            (AttrValue::Scalar(slot), AttrValue::Scalar(new)) if slot.kind() == new.kind() => {
                *slot = new;
                Ok(())
            }
            (AttrValue::String(slot), AttrValue::String(new)) => {
                if *slot != new {
                    *slot = new;
                }
                Ok(())
            }
            (AttrValue::Vector(slot), AttrValue::Vector(new)) if slot.kind() == new.kind() => {
                *slot = new;
                Ok(())
            }
            (_, other) => Err(AttrError::WrongKind {
                expected: other.kind(),
                stored: fixed,
            }),
        }
    }

    /// Stores a scalar of the exact fixed kind.
    pub fn set_scalar<T: ScalarType>(&mut self, value: T) -> AttrResult<()> {
        let fixed = self.value.kind();
        if fixed != T::KIND {
            return Err(AttrError::WrongKind {
                expected: T::KIND,
                stored: fixed,
            });
        }
        self.value = AttrValue::Scalar(value.into_scalar());
        Ok(())
    }

    /// Stores a string value; the fixed kind must be `String`.
    ///
    /// Storing a string equal to the current one is a cheap no-op that keeps
    /// the existing allocation; otherwise the buffer is reused where its
    /// capacity allows.
    pub fn set_string(&mut self, value: &str) -> AttrResult<()> {
        let fixed = self.value.kind();
        match &mut self.value {
            AttrValue::String(slot) => {
                if slot.as_str() != value {
                    slot.clear();
                    slot.push_str(value);
                }
                Ok(())
            }
            _ => Err(AttrError::WrongKind {
                expected: AttrKind::String,
                stored: fixed,
            }),
        }
    }

    /// Replaces the owned sequence; the fixed kind must be the vector kind of
    /// `T`. No partial or append update, the sequence is replaced wholesale.
    pub fn set_vec<T: ScalarType>(&mut self, values: Vec<T>) -> AttrResult<()> {
        let fixed = self.value.kind();
        if fixed != T::VEC_KIND {
            return Err(AttrError::WrongKind {
                expected: T::VEC_KIND,
                stored: fixed,
            });
        }
        self.value = AttrValue::Vector(T::wrap_vec(values));
        Ok(())
    }

    /// Returns the fixed kind and the payload size in bytes.
    ///
    /// The size is the native scalar width, the string length plus one for
    /// the terminator byte, the vector element count times the element width,
    /// or zero while untyped. This is the contract a downstream serializer
    /// relies on for tag-length-value records.
    pub fn value_info(&self) -> (AttrKind, usize) {
        (self.value.kind(), self.value.byte_size())
    }

    /// Reads the stored scalar converted to the requested numeric kind.
    ///
    /// Narrowing conversions wrap or truncate with Rust's standard cast
    /// semantics; that lossiness is deliberate. String, vector and untyped
    /// attributes are not numerically convertible and fail with
    /// `KindMismatch`; use the exact-kind getters for those.
    pub fn get_scalar_as(&self, requested: AttrKind) -> AttrResult<Scalar> {
        match &self.value {
            AttrValue::Scalar(s) => s.convert(requested),
            other => Err(AttrError::KindMismatch {
                stored: other.kind(),
                requested,
            }),
        }
    }

    /// Reads the stored scalar as `T`, converting between numeric kinds.
    pub fn get_scalar<T: ScalarType>(&self) -> AttrResult<T> {
        match &self.value {
            AttrValue::Scalar(s) => Ok(T::from_scalar(*s)),
            other => Err(AttrError::KindMismatch {
                stored: other.kind(),
                requested: T::KIND,
            }),
        }
    }

    /// Borrows the string value. The fixed kind must be exactly `String`.
    pub fn get_string(&self) -> AttrResult<&str> {
        match &self.value {
            AttrValue::String(s) => Ok(s),
            other => Err(AttrError::WrongKind {
                expected: AttrKind::String,
                stored: other.kind(),
            }),
        }
    }

    /// Borrows the vector elements. The fixed kind must be exactly the
    /// vector kind of `T`; no element conversion is performed.
    pub fn get_vec<T: ScalarType>(&self) -> AttrResult<&[T]> {
        match &self.value {
            AttrValue::Vector(v) => T::slice_of(v).ok_or(AttrError::WrongKind {
                expected: T::VEC_KIND,
                stored: v.kind(),
            }),
            other => Err(AttrError::WrongKind {
                expected: T::VEC_KIND,
                stored: other.kind(),
            }),
        }
    }

    /// Copies only the payload into an already-allocated target attribute.
    ///
    /// Identity and provenance fields of the target are assumed to already
    /// match; this exists so a hot per-event path can reuse an instance
    /// instead of cloning. The copy goes through the target's type check, so
    /// a kind mismatch fails cleanly. A full deep copy is just [`Clone`].
    pub fn copy_value_into(&self, target: &mut Attribute) -> AttrResult<()> {
        target.set_value(self.value.clone())
    }

    /// Writes a human-readable dump of every field to `out`.
    ///
    /// For vector payloads only the first element is printed. Purely
    /// diagnostic; the format is not parseable output.
    pub fn describe<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Attribute:")?;
        writeln!(out, "  name={}", self.name)?;
        writeln!(out, "  description={}", self.description)?;
        writeln!(out, "  source kind={}", self.source as i32)?;
        writeln!(out, "  source label={}", self.source_label)?;
        writeln!(out, "  source={}", self.locator)?;
        writeln!(out, "  dataType={}", self.value.kind())?;
        match &self.value {
            AttrValue::Undefined => {}
            AttrValue::Scalar(s) => writeln!(out, "  value={s}")?,
            AttrValue::String(s) => writeln!(out, "  value={s}")?,
            AttrValue::Vector(v) => match v.first() {
                Some(first) => writeln!(out, "  value of first element={first}")?,
                None => writeln!(out, "  value=<empty>")?,
            },
        }
        Ok(())
    }

    /// Serializes the attribute into a JSON value for diagnostics.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VecValue;

    fn typed(kind: AttrKind) -> Attribute {
        let mut attr = Attribute::new("attr", "test attribute", AttrSource::Constant, "");
        attr.set_data_type(kind).expect("fix data kind");
        attr
    }

    #[test]
    fn test_new_is_untyped() {
        let attr = Attribute::new("temp", "sensor reading", AttrSource::Driver, "CAM1:TEMP");
        assert_eq!(attr.kind(), AttrKind::Undefined);
        assert_eq!(attr.name(), "temp");
        assert_eq!(attr.description(), "sensor reading");
        assert_eq!(attr.source(), AttrSource::Driver);
        assert_eq!(attr.source_label(), "NDAttrSourceDriver");
        assert_eq!(attr.locator(), "CAM1:TEMP");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let attr = Attribute::new("", "", AttrSource::Undefined, "");
        assert_eq!(attr.name(), "");
        assert_eq!(attr.source_label(), "Undefined");
    }

    #[test]
    fn test_with_value_fixes_kind() {
        let attr = Attribute::with_value(
            "gain",
            "",
            AttrSource::Parameter,
            "GAIN",
            AttrValue::Scalar(Scalar::Float64(2.5)),
        )
        .expect("construct with value");
        assert_eq!(attr.kind(), AttrKind::Float64);
        assert_eq!(attr.get_scalar::<f64>().expect("read back"), 2.5);
    }

    #[test]
    fn test_with_value_undefined_stays_untyped() {
        let attr = Attribute::with_value("a", "", AttrSource::Constant, "", AttrValue::Undefined)
            .expect("construct without value");
        assert_eq!(attr.kind(), AttrKind::Undefined);
    }

    #[test]
    fn test_scalar_round_trip_all_kinds() {
        let values = [
            Scalar::Int8(-5),
            Scalar::UInt8(200),
            Scalar::Int16(-3000),
            Scalar::UInt16(60000),
            Scalar::Int32(-70000),
            Scalar::UInt32(4_000_000_000),
            Scalar::Int64(-5_000_000_000),
            Scalar::UInt64(18_000_000_000_000_000_000),
            Scalar::Float32(1.5),
            Scalar::Float64(-2.25),
        ];
        for value in values {
            let attr =
                Attribute::with_value("v", "", AttrSource::Constant, "", AttrValue::Scalar(value))
                    .expect("construct");
            let read = attr.get_scalar_as(value.kind()).expect("same-kind read");
            assert_eq!(read, value);
        }
    }

    #[test]
    fn test_set_data_type_idempotent() {
        let mut attr = typed(AttrKind::Int32);
        attr.set_scalar(7i32).expect("store");
        assert_eq!(attr.set_data_type(AttrKind::Int32), Ok(()));
        // Repeated set leaves the stored value unchanged.
        assert_eq!(attr.get_scalar::<i32>(), Ok(7));
    }

    #[test]
    fn test_set_data_type_rejects_change() {
        let mut attr = typed(AttrKind::Int32);
        assert_eq!(
            attr.set_data_type(AttrKind::Float64),
            Err(AttrError::AlreadyTyped {
                current: AttrKind::Int32,
                requested: AttrKind::Float64,
            })
        );
        assert_eq!(attr.kind(), AttrKind::Int32);
    }

    #[test]
    fn test_set_data_type_rejects_undefined() {
        let mut attr = Attribute::new("a", "", AttrSource::Constant, "");
        assert_eq!(
            attr.set_data_type(AttrKind::Undefined),
            Err(AttrError::InvalidKind(AttrKind::Undefined as i32))
        );
        assert_eq!(attr.kind(), AttrKind::Undefined);
    }

    #[test]
    fn test_set_data_type_accepts_string_and_vector_kinds() {
        assert_eq!(typed(AttrKind::String).kind(), AttrKind::String);
        assert_eq!(typed(AttrKind::VecFloat32).kind(), AttrKind::VecFloat32);
    }

    #[test]
    fn test_typed_attribute_reads_zero_before_first_store() {
        let attr = typed(AttrKind::Int16);
        assert_eq!(attr.get_scalar::<i16>(), Ok(0));
        let attr = typed(AttrKind::String);
        assert_eq!(attr.get_string(), Ok(""));
    }

    #[test]
    fn test_set_value_on_untyped_attribute() {
        let mut attr = Attribute::new("a", "", AttrSource::Constant, "");
        // Absent value is a no-op.
        assert_eq!(attr.set_value(AttrValue::Undefined), Ok(()));
        assert_eq!(
            attr.set_value(AttrValue::Scalar(Scalar::Int8(1))),
            Err(AttrError::NotTyped)
        );
        assert_eq!(attr.kind(), AttrKind::Undefined);
    }

    #[test]
    fn test_set_value_requires_exact_kind() {
        let mut attr = typed(AttrKind::Int32);
        assert_eq!(attr.set_value(AttrValue::Scalar(Scalar::Int32(9))), Ok(()));
        let err = attr
            .set_value(AttrValue::Scalar(Scalar::Int8(1)))
            .unwrap_err();
        assert_eq!(
            err,
            AttrError::WrongKind {
                expected: AttrKind::Int8,
                stored: AttrKind::Int32,
            }
        );
        assert_eq!(attr.get_scalar::<i32>(), Ok(9));
    }

    #[test]
    fn test_string_equal_store_keeps_allocation() {
        let mut attr = typed(AttrKind::String);
        attr.set_string("plugin chain A").expect("first store");
        let ptr = attr.get_string().expect("read").as_ptr();
        attr.set_string("plugin chain A").expect("equal store");
        assert_eq!(attr.get_string().expect("read").as_ptr(), ptr);
        assert_eq!(attr.get_string(), Ok("plugin chain A"));
    }

    #[test]
    fn test_string_setter_wrong_kind() {
        let mut attr = typed(AttrKind::Int32);
        assert_eq!(
            attr.set_string("oops"),
            Err(AttrError::WrongKind {
                expected: AttrKind::String,
                stored: AttrKind::Int32,
            })
        );
    }

    #[test]
    fn test_vector_round_trip() {
        let mut attr = typed(AttrKind::VecUInt16);
        attr.set_vec(vec![1u16, 2, 3]).expect("store vector");
        assert_eq!(attr.get_vec::<u16>().expect("read vector"), &[1, 2, 3]);
        // Replacement is wholesale, not append.
        attr.set_vec(vec![9u16]).expect("replace vector");
        assert_eq!(attr.get_vec::<u16>().expect("read vector"), &[9]);
    }

    #[test]
    fn test_vector_mismatch_leaves_value_untouched() {
        let mut attr = typed(AttrKind::VecInt8);
        attr.set_vec(vec![1i8, 2, 3]).expect("store vector");
        let err = attr.get_vec::<f64>().unwrap_err();
        assert_eq!(
            err,
            AttrError::WrongKind {
                expected: AttrKind::VecFloat64,
                stored: AttrKind::VecInt8,
            }
        );
        assert!(attr.set_vec(vec![1.0f64]).is_err());
        assert_eq!(attr.get_vec::<i8>().expect("still intact"), &[1, 2, 3]);
    }

    #[test]
    fn test_numeric_conversion_on_read() {
        let attr = Attribute::with_value(
            "v",
            "",
            AttrSource::Constant,
            "",
            AttrValue::Scalar(Scalar::Float64(3.9)),
        )
        .expect("construct");
        assert_eq!(attr.get_scalar::<i32>(), Ok(3));
        assert_eq!(
            attr.get_scalar_as(AttrKind::Int32),
            Ok(Scalar::Int32(3))
        );
        assert_eq!(attr.get_scalar::<f32>(), Ok(3.9f64 as f32));
    }

    #[test]
    fn test_generic_read_rejects_non_numeric() {
        let attr = typed(AttrKind::String);
        assert_eq!(
            attr.get_scalar_as(AttrKind::Int32),
            Err(AttrError::KindMismatch {
                stored: AttrKind::String,
                requested: AttrKind::Int32,
            })
        );
        let attr = typed(AttrKind::Int32);
        assert_eq!(
            attr.get_scalar_as(AttrKind::VecInt32),
            Err(AttrError::KindMismatch {
                stored: AttrKind::Int32,
                requested: AttrKind::VecInt32,
            })
        );
    }

    #[test]
    fn test_value_info() {
        let mut attr = typed(AttrKind::String);
        attr.set_string("abc").expect("store");
        assert_eq!(attr.value_info(), (AttrKind::String, 4));

        let mut attr = typed(AttrKind::VecFloat32);
        attr.set_vec(vec![0.0f32; 5]).expect("store");
        assert_eq!(attr.value_info(), (AttrKind::VecFloat32, 20));

        let attr = typed(AttrKind::UInt64);
        assert_eq!(attr.value_info(), (AttrKind::UInt64, 8));

        let attr = Attribute::new("a", "", AttrSource::Constant, "");
        assert_eq!(attr.value_info(), (AttrKind::Undefined, 0));
    }

    #[test]
    fn test_undefined_instance_rejects_typed_reads() {
        let attr = Attribute::new("a", "", AttrSource::Constant, "");
        assert!(attr.get_scalar::<i32>().is_err());
        assert!(attr.get_string().is_err());
        assert!(attr.get_vec::<f64>().is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut attr = typed(AttrKind::VecInt32);
        attr.set_vec((0..100).collect::<Vec<i32>>()).expect("store");
        let mut copy = attr.clone();
        let mut elements: Vec<i32> = copy.get_vec::<i32>().expect("read copy").to_vec();
        elements[0] = -1;
        copy.set_vec(elements).expect("mutate copy");
        assert_eq!(attr.get_vec::<i32>().expect("original intact")[0], 0);
        assert_eq!(copy.get_vec::<i32>().expect("copy changed")[0], -1);
    }

    #[test]
    fn test_copy_value_into_reuses_target() {
        let source = Attribute::with_value(
            "v",
            "",
            AttrSource::Driver,
            "",
            AttrValue::Scalar(Scalar::Int32(41)),
        )
        .expect("construct");
        let mut target = typed(AttrKind::Int32);
        source.copy_value_into(&mut target).expect("payload copy");
        assert_eq!(target.get_scalar::<i32>(), Ok(41));
    }

    #[test]
    fn test_copy_value_into_checks_kind() {
        let source = Attribute::with_value(
            "v",
            "",
            AttrSource::Driver,
            "",
            AttrValue::Scalar(Scalar::Int32(41)),
        )
        .expect("construct");
        let mut target = typed(AttrKind::Float64);
        assert!(source.copy_value_into(&mut target).is_err());
        assert_eq!(target.get_scalar::<f64>(), Ok(0.0));
    }

    #[test]
    fn test_describe_lists_fields() {
        let mut attr = Attribute::new("ring", "ring current", AttrSource::ProcessVariable, "S:RING");
        attr.set_data_type(AttrKind::Float64).expect("fix kind");
        attr.set_scalar(101.5f64).expect("store");
        let mut out = Vec::new();
        attr.describe(&mut out).expect("describe");
        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("name=ring"));
        assert!(text.contains("description=ring current"));
        assert!(text.contains("source label=NDAttrSourceEPICSPV"));
        assert!(text.contains("source=S:RING"));
        assert!(text.contains("dataType=Float64"));
        assert!(text.contains("value=101.5"));
    }

    #[test]
    fn test_describe_vector_prints_first_element_only() {
        let mut attr = typed(AttrKind::VecInt32);
        attr.set_vec(vec![7, 8, 9]).expect("store");
        let mut out = Vec::new();
        attr.describe(&mut out).expect("describe");
        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("value of first element=7"));
        assert!(!text.contains('8'));

        let empty = typed(AttrKind::VecInt32);
        let mut out = Vec::new();
        empty.describe(&mut out).expect("describe empty vector");
        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("value=<empty>"));
    }

    #[test]
    fn test_to_json() {
        let attr = Attribute::with_value(
            "gain",
            "detector gain",
            AttrSource::Parameter,
            "GAIN",
            AttrValue::Scalar(Scalar::Float64(2.0)),
        )
        .expect("construct");
        let json = attr.to_json().expect("serialize attribute");
        assert_eq!(json["name"], "gain");
        assert_eq!(json["source_label"], "NDAttrSourceParam");
    }
}
