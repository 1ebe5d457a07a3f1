//! Error handling for attribute operations.
//!
//! Every fallible operation in this crate returns [`AttrResult`]. The error
//! kinds distinguish the ways a typed access can be rejected; callers that
//! only care about success or failure can keep checking `is_ok()`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AttrKind;

/// Errors that can occur when typing or accessing an attribute value.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrError {
    /// A value write was attempted before the data kind was fixed.
    #[error("data kind is not set")]
    NotTyped,
    /// An attempt to change an already fixed data kind.
    #[error("data kind already fixed to {current}, cannot change to {requested}")]
    AlreadyTyped {
        /// The kind the attribute is fixed to.
        current: AttrKind,
        /// The kind the caller asked for.
        requested: AttrKind,
    },
    /// A kind value outside the accepted range.
    #[error("invalid data kind value {0}")]
    InvalidKind(i32),
    /// A typed accessor was invoked against a different fixed kind.
    #[error("wrong kind: accessor expects {expected}, stored kind is {stored}")]
    WrongKind {
        /// The kind the accessor operates on.
        expected: AttrKind,
        /// The kind the attribute is fixed to.
        stored: AttrKind,
    },
    /// A generic read requested a kind the stored value cannot convert to.
    #[error("cannot convert stored {stored} to requested {requested}")]
    KindMismatch {
        /// The kind the attribute is fixed to.
        stored: AttrKind,
        /// The kind the caller asked for.
        requested: AttrKind,
    },
}

/// Result alias used by all fallible attribute operations.
pub type AttrResult<T> = Result<T, AttrError>;
