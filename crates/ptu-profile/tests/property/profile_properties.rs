//! Property tests for profile construction and joins.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use chrono::NaiveDate;
use chrono_tz::Europe::Amsterdam;

use ptu_core::{Ptu, Quarters, TimeUnit};
use ptu_profile::{Point, Profile};

fn origin() -> Ptu {
    Ptu::new(NaiveDate::from_ymd_opt(2024, 3, 30).unwrap(), 0, Amsterdam).unwrap()
}

fn slot(offset: i64) -> Ptu {
    Quarters.advance(&origin(), offset).unwrap()
}

// Profiles with unique times, spread over a window that crosses a DST change.
fn profile() -> impl Strategy<Value = Profile<Ptu, i64>> {
    prop::collection::btree_map(0i64..300, -1_000i64..1_000, 0..40).prop_map(|points| {
        let points = points
            .into_iter()
            .map(|(offset, value)| Point::new(slot(offset), value))
            .collect();
        Profile::from_points(points, Some(TimeUnit::Quarters))
    })
}

fn as_map(profile: &Profile<Ptu, i64>) -> BTreeMap<Ptu, i64> {
    profile.iter().map(|p| (p.time.clone(), p.value)).collect()
}

fn keys(profile: &Profile<Ptu, i64>) -> BTreeSet<Ptu> {
    profile.iter().map(|p| p.time.clone()).collect()
}

fn combine(a: &i64, b: &i64) -> i64 {
    a * 3 - b
}

proptest! {
    #[test]
    fn prop_empty_identities(a in profile()) {
        let empty = Profile::empty();
        prop_assert_eq!(a.zip_left(&empty, combine), a.clone());
        prop_assert_eq!(a.zip(&empty, combine), a.clone());
        prop_assert_eq!(a.zip_inner(&empty, combine), Profile::empty());
    }
}

proptest! {
    #[test]
    fn prop_outer_values(a in profile(), b in profile()) {
        let zipped = a.zip(&b, combine);
        let (ma, mb) = (as_map(&a), as_map(&b));
        prop_assert_eq!(zipped.len(), keys(&a).union(&keys(&b)).count());
        for point in &zipped {
            let expected = match (ma.get(&point.time), mb.get(&point.time)) {
                (Some(x), Some(y)) => combine(x, y),
                (Some(x), None) => *x,
                (None, Some(y)) => *y,
                (None, None) => unreachable!("joined time from neither side"),
            };
            prop_assert_eq!(point.value, expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_inner_keys_are_intersection(a in profile(), b in profile()) {
        let joined = a.zip_inner(&b, combine);
        let expected: BTreeSet<Ptu> = keys(&a).intersection(&keys(&b)).cloned().collect();
        prop_assert_eq!(keys(&joined), expected);
        prop_assert_eq!(joined.len(), keys(&joined).len());
    }
}

proptest! {
    #[test]
    fn prop_left_keys_are_left_keys(a in profile(), b in profile()) {
        let joined = a.zip_left(&b, combine);
        prop_assert_eq!(keys(&joined), keys(&a));
        let mb = as_map(&b);
        for (point, left) in joined.iter().zip(a.iter()) {
            let expected = match mb.get(&point.time) {
                Some(y) => combine(&left.value, y),
                None => left.value,
            };
            prop_assert_eq!(point.value, expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_between_length_and_values(start in 0i64..300, end in 0i64..300, value in any::<i32>()) {
        let (s, e) = (slot(start), slot(end));
        let profile = Profile::between(&s, &e, Quarters, value).unwrap();
        let steps = Quarters.steps_between(&s, &e).unwrap();
        prop_assert_eq!(profile.len() as i64, steps.max(0));
        prop_assert!(profile.iter().all(|p| p.value == value));
        prop_assert!(profile.get(&e).is_none());
    }
}

proptest! {
    #[test]
    fn prop_of_times_follow_advance(start in 0i64..300, values in prop::collection::vec(any::<u8>(), 0..50)) {
        let s = slot(start);
        let profile = Profile::of(&s, Quarters, values.clone()).unwrap();
        prop_assert_eq!(profile.len(), values.len());
        for (i, point) in profile.iter().enumerate() {
            prop_assert_eq!(&point.time, &Quarters.advance(&s, i as i64).unwrap());
            prop_assert_eq!(point.value, values[i]);
        }
        prop_assert!(profile.points().windows(2).all(|w| w[0].time < w[1].time));
    }
}
