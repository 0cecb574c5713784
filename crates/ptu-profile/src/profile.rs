//! Profile: an immutable sequence of points on a time axis.

use ptu_core::{PointInTime, TemporalResult, TimeUnit};

use crate::point::Point;

/// An immutable, time-keyed sequence of points.
///
/// Construction does not enforce unique times; every join does, emitting at
/// most one point per distinct time. Points keep the order they were built or
/// joined in. Call [`sorted`](Self::sorted) for time order.
///
/// A profile also remembers the unit it was built with (its scale). The scale
/// is metadata only and does not take part in equality.
#[derive(Debug, Clone)]
pub struct Profile<T, V> {
    points: Vec<Point<T, V>>,
    unit: Option<TimeUnit>,
}

impl<T, V> Profile<T, V> {
    /// A profile with no points and no scale.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            unit: None,
        }
    }

    pub fn from_points(points: Vec<Point<T, V>>, unit: Option<TimeUnit>) -> Self {
        Self { points, unit }
    }

    pub fn points(&self) -> &[Point<T, V>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point<T, V>> {
        self.points
    }

    pub fn unit(&self) -> Option<TimeUnit> {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T, V>> {
        self.points.iter()
    }
}

impl<T: PointInTime, V> Profile<T, V> {
    /// One point per value at `start`, `start + unit`, `start + 2 * unit`, ...
    pub fn of(
        start: &T,
        unit: impl Into<TimeUnit>,
        values: impl IntoIterator<Item = V>,
    ) -> TemporalResult<Self> {
        let unit = unit.into();
        let points = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Ok(Point::new(unit.add_to(start, i as i64)?, value)))
            .collect::<TemporalResult<Vec<_>>>()?;
        Ok(Self::from_points(points, Some(unit)))
    }

    /// `value` repeated at every unit step of `[start, end_exclusive)`.
    ///
    /// An interval that is empty or reversed yields an empty profile.
    pub fn between(
        start: &T,
        end_exclusive: &T,
        unit: impl Into<TimeUnit>,
        value: V,
    ) -> TemporalResult<Self>
    where
        V: Clone,
    {
        let unit = unit.into();
        let count = unit.between(start, end_exclusive)?;
        if count <= 0 {
            tracing::debug!(count, %unit, "empty interval, no points generated");
            return Ok(Self::from_points(Vec::new(), Some(unit)));
        }
        let points = (0..count)
            .map(|i| Ok(Point::new(unit.add_to(start, i)?, value.clone())))
            .collect::<TemporalResult<Vec<_>>>()?;
        Ok(Self::from_points(points, Some(unit)))
    }

    /// The first point at exactly `time`.
    pub fn get(&self, time: &T) -> Option<&Point<T, V>> {
        self.points.iter().find(|point| &point.time == time)
    }

    /// The value of [`get`](Self::get).
    pub fn value_at(&self, time: &T) -> Option<&V> {
        self.get(time).map(|point| &point.value)
    }

    /// The same points in ascending time order; equal times keep their order.
    pub fn sorted(mut self) -> Self {
        self.points.sort_by(|a, b| a.time.cmp(&b.time));
        self
    }
}

impl<T, V> Default for Profile<T, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq, V: PartialEq> PartialEq for Profile<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T: Eq, V: Eq> Eq for Profile<T, V> {}

impl<T, V> IntoIterator for Profile<T, V> {
    type Item = Point<T, V>;
    type IntoIter = std::vec::IntoIter<Point<T, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T, V> IntoIterator for &'a Profile<T, V> {
    type Item = &'a Point<T, V>;
    type IntoIter = std::slice::Iter<'a, Point<T, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn equality_ignores_scale() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let a = Profile::from_points(vec![Point::new(t, 1)], Some(TimeUnit::Quarters));
        let b = Profile::from_points(vec![Point::new(t, 1)], None);
        assert_eq!(a, b);
    }

    #[test]
    fn sorted_is_stable_for_equal_times() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        let profile = Profile::from_points(
            vec![Point::new(t1, 'c'), Point::new(t0, 'a'), Point::new(t1, 'd'), Point::new(t0, 'b')],
            None,
        );
        let values: Vec<char> = profile.sorted().iter().map(|p| p.value).collect();
        assert_eq!(values, vec!['a', 'b', 'c', 'd']);
    }
}
