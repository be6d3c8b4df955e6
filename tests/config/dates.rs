use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use mnb_rs::{MnbError, ToRateDate};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn strings_reduce_to_calendar_dates() {
    assert_eq!("2025-04-22".to_rate_date().unwrap(), d(2025, 4, 22));
    assert_eq!(" 2025-04-22 ".to_rate_date().unwrap(), d(2025, 4, 22));
    assert_eq!(
        "2025-04-22T23:59:59+02:00".to_rate_date().unwrap(),
        d(2025, 4, 22)
    );
    assert_eq!("2025-04-22 10:00:00".to_rate_date().unwrap(), d(2025, 4, 22));
    assert_eq!(
        String::from("2025-04-22T10:00:00").to_rate_date().unwrap(),
        d(2025, 4, 22)
    );
}

#[test]
fn timestamps_keep_their_own_calendar_date() {
    let cet = FixedOffset::east_opt(3600).unwrap();
    let late = cet.with_ymd_and_hms(2025, 1, 1, 0, 30, 0).single().unwrap();
    assert_eq!(late.to_rate_date().unwrap(), d(2025, 1, 1));

    let utc = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).single().unwrap();
    assert_eq!(utc.to_rate_date().unwrap(), d(2024, 12, 31));
}

#[test]
fn garbage_is_an_invalid_date() {
    for bad in ["", "yesterday", "2025-13-01", "22.04.2025"] {
        let err = bad.to_rate_date().unwrap_err();
        assert!(matches!(err, MnbError::InvalidDate(_)), "{bad:?} gave {err:?}");
    }
}
