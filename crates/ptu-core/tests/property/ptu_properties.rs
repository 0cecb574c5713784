//! Property tests for the quarter-hour index: snapping, round trips and
//! agreement between arithmetic and measurement.

use proptest::prelude::*;

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Europe::Amsterdam;
use chrono_tz::Tz;

use ptu_core::{PointInTime, Ptu, Quarters, TimeUnit};

// 2000-01-01 .. 2040-01-01 in seconds since the epoch.
fn instant() -> impl Strategy<Value = DateTime<Tz>> {
    (946_684_800i64..2_208_988_800i64).prop_map(|secs| {
        Utc.timestamp_opt(secs, 0)
            .unwrap()
            .with_timezone(&Amsterdam)
    })
}

proptest! {
    #[test]
    fn prop_snapping_is_a_floor(t in instant(), offset in 0i64..15) {
        let ptu = Ptu::from_instant(t).unwrap();
        let boundary = *ptu.instant();
        prop_assert!(boundary <= t);
        prop_assert!(t - boundary < Duration::minutes(15));

        let shifted = Ptu::from_instant(boundary + Duration::minutes(offset)).unwrap();
        prop_assert_eq!(shifted, ptu);
    }
}

proptest! {
    #[test]
    fn prop_round_trip_through_instant(t in instant()) {
        let ptu = Ptu::from_instant(t).unwrap();
        let again = Ptu::from_instant(*ptu.instant()).unwrap();
        prop_assert_eq!(&again, &ptu);
        prop_assert_eq!(again.date(), ptu.date());
        prop_assert_eq!(again.index(), ptu.index());
    }
}

proptest! {
    #[test]
    fn prop_raw_index_round_trips(day_offset in 0i64..3_000, index in -200i64..300) {
        let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            + Duration::days(day_offset);
        let ptu = Ptu::new(date, index, Amsterdam).unwrap();
        let rebuilt = Ptu::from_instant(*ptu.instant()).unwrap();
        prop_assert_eq!(rebuilt, ptu);
    }
}

proptest! {
    #[test]
    fn prop_advance_then_measure(t in instant(), steps in -2_000i64..2_000) {
        let start = Ptu::from_instant(t).unwrap();
        let end = Quarters.advance(&start, steps).unwrap();
        prop_assert_eq!(Quarters.steps_between(&start, &end).unwrap(), steps);
        prop_assert_eq!(start.units_between(&end, TimeUnit::Quarters).unwrap(), steps);
    }
}

proptest! {
    #[test]
    fn prop_order_matches_instant(a in instant(), b in instant()) {
        let pa = Ptu::from_instant(a).unwrap();
        let pb = Ptu::from_instant(b).unwrap();
        prop_assert_eq!(pa.cmp(&pb), pa.instant().cmp(pb.instant()));
        prop_assert_eq!(pa == pb, pa.instant() == pb.instant());
    }
}
