//! Live-value refresh hook.
//!
//! Attributes whose values come from an external source (a live process
//! variable, a driver parameter) implement [`Refresh`] to pull the current
//! value before a read. The plain [`Attribute`](crate::Attribute) stores pure
//! data and keeps the default no-op.

use crate::error::AttrResult;
use crate::types::Attribute;

/// Contract for refreshing an attribute value from its source.
///
/// An aggregate may call [`Refresh::refresh`] before any read, and may call
/// it repeatedly. A failed refresh must leave the previously stored value
/// intact.
pub trait Refresh {
    /// Updates the stored value from the external source.
    ///
    /// The default implementation does nothing and succeeds.
    fn refresh(&mut self) -> AttrResult<()> {
        Ok(())
    }
}

impl Refresh for Attribute {}
