//! Provenance classification for attribute values.
//!
//! [`AttrSource`] records where an attribute's value originates: a device
//! driver, a parameter store, a live process variable, a computed function or
//! a fixed constant. The label strings are wire-stable and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AttrError, AttrResult};

/// Short-form labels, indexed by discriminant.
static SHORT_LABELS: [&str; 5] = ["DRIVER", "PARAM", "EPICS_PV", "FUNCTION", "CONST"];

/// Where an attribute's value comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum AttrSource {
    /// Value supplied directly by a driver.
    Driver = 0,
    /// Value read from a parameter store.
    Parameter = 1,
    /// Value read from a live process variable.
    ProcessVariable = 2,
    /// Value computed by a user-supplied function.
    Function = 3,
    /// Fixed constant value.
    Constant = 4,
    /// Source not known.
    Undefined = 5,
}

impl AttrSource {
    /// Long-form label, derived deterministically from the source kind.
    pub fn label(self) -> &'static str {
        match self {
            AttrSource::Driver => "NDAttrSourceDriver",
            AttrSource::Parameter => "NDAttrSourceParam",
            AttrSource::ProcessVariable => "NDAttrSourceEPICSPV",
            AttrSource::Function => "NDAttrSourceFunct",
            AttrSource::Constant => "NDAttrSourceConst",
            AttrSource::Undefined => "Undefined",
        }
    }

    /// Short-form label for the known sources, `None` for `Undefined`.
    pub fn short_label(self) -> Option<&'static str> {
        SHORT_LABELS.get(self as usize).copied()
    }

    /// Short-form label looked up by raw index.
    ///
    /// Out-of-range indices are a checked error, not undefined behavior.
    pub fn short_label_for(index: usize) -> AttrResult<&'static str> {
        SHORT_LABELS
            .get(index)
            .copied()
            .ok_or(AttrError::InvalidKind(index as i32))
    }

    /// Normalizes a raw discriminant, mapping anything unknown to `Undefined`.
    pub fn from_raw(value: i32) -> AttrSource {
        match value {
            0 => AttrSource::Driver,
            1 => AttrSource::Parameter,
            2 => AttrSource::ProcessVariable,
            3 => AttrSource::Function,
            4 => AttrSource::Constant,
            _ => AttrSource::Undefined,
        }
    }
}

impl fmt::Display for AttrSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
