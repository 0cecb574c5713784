//! # ptu-profile
//!
//! Immutable time-keyed profiles over any [`PointInTime`] axis, with inner,
//! left and outer joins and fold-based flattening.
//!
//! [`PointInTime`]: ptu_core::PointInTime

pub mod flatten;
pub mod join;
pub mod point;
pub mod profile;

pub use flatten::{flatten_inner, flatten_left, flatten_outer};
pub use join::JoinKind;
pub use point::Point;
pub use profile::Profile;
