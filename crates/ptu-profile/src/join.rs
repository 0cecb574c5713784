//! Point-wise joins between two profiles.
//!
//! All three joins group points by time through a hash map, so they run in
//! O(n + m) expected time. Output points are emitted in first-seen order:
//! times of `self` first, then times only `other` has.

use std::borrow::Cow;
use std::collections::HashMap;

use ptu_core::PointInTime;

use crate::point::Point;
use crate::profile::Profile;

/// Which keys survive a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Union of keys.
    Outer,
    /// Keys present on both sides.
    Inner,
    /// Keys of the left-hand profile.
    Left,
}

/// Accumulated value for one time key.
struct Group<'a, T, V: Clone> {
    time: &'a T,
    value: Cow<'a, V>,
    left: bool,
    right: bool,
}

impl<T: PointInTime, V: Clone> Profile<T, V> {
    /// Outer join. Times on both sides get `combine(this, other)`, times on
    /// one side pass through unchanged.
    pub fn zip<F>(&self, other: &Self, combine: F) -> Self
    where
        F: FnMut(&V, &V) -> V,
    {
        self.join(other, JoinKind::Outer, combine)
    }

    /// Inner join. Only times on both sides survive, as `combine(this, other)`.
    pub fn zip_inner<F>(&self, other: &Self, combine: F) -> Self
    where
        F: FnMut(&V, &V) -> V,
    {
        self.join(other, JoinKind::Inner, combine)
    }

    /// Left join. Every time of `self` survives, combined with `other` where
    /// `other` has the same time.
    pub fn zip_left<F>(&self, other: &Self, combine: F) -> Self
    where
        F: FnMut(&V, &V) -> V,
    {
        self.join(other, JoinKind::Left, combine)
    }

    /// Join with an explicit [`JoinKind`].
    ///
    /// Duplicate times are folded left to right over `self` then `other`,
    /// so `combine` is only skipped for points whose time appears once.
    pub fn join<F>(&self, other: &Self, kind: JoinKind, mut combine: F) -> Self
    where
        F: FnMut(&V, &V) -> V,
    {
        let mut slots: HashMap<&T, usize> = HashMap::with_capacity(self.len() + other.len());
        let mut groups: Vec<Group<'_, T, V>> = Vec::with_capacity(self.len());

        for point in self.iter() {
            match slots.get(&point.time) {
                Some(&slot) => {
                    let group = &mut groups[slot];
                    group.value = Cow::Owned(combine(&*group.value, &point.value));
                }
                None => {
                    slots.insert(&point.time, groups.len());
                    groups.push(Group {
                        time: &point.time,
                        value: Cow::Borrowed(&point.value),
                        left: true,
                        right: false,
                    });
                }
            }
        }

        for point in other.iter() {
            match slots.get(&point.time) {
                Some(&slot) => {
                    let group = &mut groups[slot];
                    group.value = Cow::Owned(combine(&*group.value, &point.value));
                    group.right = true;
                }
                None if kind == JoinKind::Outer => {
                    slots.insert(&point.time, groups.len());
                    groups.push(Group {
                        time: &point.time,
                        value: Cow::Borrowed(&point.value),
                        left: false,
                        right: true,
                    });
                }
                None => {}
            }
        }

        let points: Vec<Point<T, V>> = groups
            .into_iter()
            .filter(|group| match kind {
                JoinKind::Outer => true,
                JoinKind::Inner => group.left && group.right,
                JoinKind::Left => group.left,
            })
            .map(|group| Point::new(group.time.clone(), group.value.into_owned()))
            .collect();

        let unit = match kind {
            JoinKind::Left => self.unit(),
            JoinKind::Outer | JoinKind::Inner => match (self.unit(), other.unit()) {
                (Some(a), Some(b)) => Some(a.finer(b)),
                (a, b) => a.or(b),
            },
        };

        tracing::trace!(
            kind = ?kind,
            left = self.len(),
            right = other.len(),
            joined = points.len(),
            "profiles joined"
        );

        Profile::from_points(points, unit)
    }
}
