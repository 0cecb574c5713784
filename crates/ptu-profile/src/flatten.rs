//! Flatten a sequence of profiles into one by repeated joins.
//!
//! Each helper is a strict left fold using exactly one join policy. The outer
//! flatten starts from [`Profile::empty`], its identity. An empty profile
//! would wipe out every inner or left join, so those two reduce from the
//! first profile instead and return an empty profile for an empty sequence.

use ptu_core::PointInTime;

use crate::profile::Profile;

/// Fold with [`Profile::zip`].
pub fn flatten_outer<T, V, I, F>(profiles: I, mut combine: F) -> Profile<T, V>
where
    T: PointInTime,
    V: Clone,
    I: IntoIterator<Item = Profile<T, V>>,
    F: FnMut(&V, &V) -> V,
{
    profiles
        .into_iter()
        .fold(Profile::empty(), |acc, profile| acc.zip(&profile, &mut combine))
}

/// Fold with [`Profile::zip_inner`].
pub fn flatten_inner<T, V, I, F>(profiles: I, mut combine: F) -> Profile<T, V>
where
    T: PointInTime,
    V: Clone,
    I: IntoIterator<Item = Profile<T, V>>,
    F: FnMut(&V, &V) -> V,
{
    let mut profiles = profiles.into_iter();
    let Some(first) = profiles.next() else {
        return Profile::empty();
    };
    profiles.fold(first, |acc, profile| acc.zip_inner(&profile, &mut combine))
}

/// Fold with [`Profile::zip_left`].
pub fn flatten_left<T, V, I, F>(profiles: I, mut combine: F) -> Profile<T, V>
where
    T: PointInTime,
    V: Clone,
    I: IntoIterator<Item = Profile<T, V>>,
    F: FnMut(&V, &V) -> V,
{
    let mut profiles = profiles.into_iter();
    let Some(first) = profiles.next() else {
        return Profile::empty();
    };
    profiles.fold(first, |acc, profile| acc.zip_left(&profile, &mut combine))
}
