use chrono::prelude::*;
use chrono_tz::Tz;

/// The calendar date a timestamp in millis falls on in the given timezone
pub fn local_date(timestamp_millis: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|dt| dt.date_naive())
}

/// Timestamp in millis of the given local wall clock time on `date`.
///
/// Returns `None` when the wall clock time is skipped by a DST transition.
/// When it is repeated the earliest instant is chosen.
pub fn at_local_time(date: NaiveDate, time: NaiveTime, tz: &Tz) -> Option<i64> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono_tz::{Europe::Oslo, UTC};

    #[test]
    fn it_finds_local_date() {
        // 2021-03-01T23:30:00Z is already March 2nd in Oslo
        let ts = Utc.with_ymd_and_hms(2021, 3, 1, 23, 30, 0).unwrap().timestamp_millis();
        assert_eq!(local_date(ts, &UTC), NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(local_date(ts, &Oslo), NaiveDate::from_ymd_opt(2021, 3, 2));
    }

    #[test]
    fn it_rejects_skipped_local_times() {
        // Clocks in Oslo jump from 02:00 to 03:00 on 2021-03-28
        let date = NaiveDate::from_ymd_opt(2021, 3, 28).unwrap();
        let skipped = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        assert!(at_local_time(date, skipped, &Oslo).is_none());

        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2021, 3, 28, 7, 0, 0).unwrap();
        assert_eq!(at_local_time(date, nine, &Oslo), Some(expected.timestamp_millis()));
    }
}
