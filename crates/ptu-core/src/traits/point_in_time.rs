//! PointInTime: the capability a type needs to serve as a profile time axis.

use std::hash::Hash;

use crate::errors::TemporalResult;
use crate::time::{TimeField, TimeUnit};

/// A discrete point on a time axis.
///
/// Ordering, equality and hashing must all agree on the same notion of
/// "the same moment": two values that compare `Equal` must be `==` and hash
/// identically. Profiles group points by this key when joining.
///
/// Arithmetic and field access are fallible: a type reports units or fields
/// it cannot represent as [`TemporalError::UnsupportedUnit`] or
/// [`TemporalError::UnsupportedField`].
///
/// [`TemporalError::UnsupportedUnit`]: crate::errors::TemporalError::UnsupportedUnit
/// [`TemporalError::UnsupportedField`]: crate::errors::TemporalError::UnsupportedField
pub trait PointInTime: Ord + Hash + Clone + Sized {
    /// Returns a copy shifted by `amount` multiples of `unit`.
    fn plus(&self, amount: i64, unit: TimeUnit) -> TemporalResult<Self>;

    /// Reads a calendar field.
    fn field_value(&self, field: TimeField) -> TemporalResult<i64>;

    /// Whole `unit`s from `self` to `other`, truncated toward zero.
    /// Negative when `other` is earlier.
    fn units_between(&self, other: &Self, unit: TimeUnit) -> TemporalResult<i64>;
}
