use chrono::{NaiveDate, TimeDelta};
use jantari_calendar::{
    CalendarError, ShamsiDate, days_in_month, gregorian_to_shamsi, parse_gregorian,
    shamsi_to_gregorian,
};

fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn nowruz_1404_reference() {
    let shamsi = gregorian_to_shamsi(greg(2025, 3, 21));
    assert_eq!(shamsi, ShamsiDate::new(1404, 1, 1).unwrap());
}

#[test]
fn end_of_shamsi_year_1404() {
    // 2026-03-20 falls in month 12 of year 1404.
    let shamsi = gregorian_to_shamsi(greg(2026, 3, 20));
    assert_eq!(shamsi.year(), 1404);
    assert_eq!(shamsi.month(), 12);
}

#[test]
fn nowruz_boundary_is_contiguous() {
    let last = gregorian_to_shamsi(greg(2025, 3, 20));
    let first = gregorian_to_shamsi(greg(2025, 3, 21));
    assert_eq!(last, ShamsiDate::new(1403, 12, 29).unwrap());
    assert_eq!(first, ShamsiDate::new(1404, 1, 1).unwrap());
}

#[test]
fn converted_dates_always_satisfy_month_invariants() {
    let mut day = greg(1990, 1, 1);
    let end = greg(2050, 1, 1);
    while day < end {
        let s = gregorian_to_shamsi(day);
        assert!(
            (1..=12).contains(&s.month()),
            "month {} out of range for {day}",
            s.month()
        );
        let max = days_in_month(s.year(), s.month()).unwrap();
        assert!(
            (1..=max).contains(&s.day()),
            "day {} out of range for {}-{:02} ({day})",
            s.day(),
            s.year(),
            s.month()
        );
        day += TimeDelta::days(1);
    }
}

#[test]
fn sixty_years_of_round_trips() {
    let mut day = greg(1990, 1, 1);
    let end = greg(2050, 1, 1);
    while day < end {
        let back = shamsi_to_gregorian(gregorian_to_shamsi(day)).unwrap();
        assert_eq!(back, day, "round trip failed on {day}");
        day += TimeDelta::days(1);
    }
}

#[test]
fn every_valid_shamsi_date_round_trips() {
    for year in 1395..=1410 {
        for month in 1..=12u8 {
            let max = days_in_month(year, month).unwrap();
            for d in 1..=max {
                let date = ShamsiDate::new(year, month, d).unwrap();
                let g = shamsi_to_gregorian(date).unwrap();
                assert_eq!(gregorian_to_shamsi(g), date, "round trip failed for {date}");
            }
        }
    }
}

#[test]
fn shamsi_dates_convert_in_order() {
    // Ordering survives conversion in both directions.
    let a = shamsi_to_gregorian(ShamsiDate::new(1404, 6, 31).unwrap()).unwrap();
    let b = shamsi_to_gregorian(ShamsiDate::new(1404, 7, 1).unwrap()).unwrap();
    assert_eq!(a + TimeDelta::days(1), b);
}

#[test]
fn parse_then_convert() {
    let date = parse_gregorian("2025-04-20").unwrap();
    assert_eq!(
        gregorian_to_shamsi(date),
        ShamsiDate::new(1404, 1, 31).unwrap()
    );
}

#[test]
fn parse_rejects_malformed_input() {
    for bad in ["", "2025", "2025-02-30", "21/03/2025", "yesterday"] {
        assert!(
            matches!(
                parse_gregorian(bad),
                Err(CalendarError::InvalidDate { .. })
            ),
            "expected parse failure for {bad:?}"
        );
    }
}

#[test]
fn invalid_shamsi_dates_are_unrepresentable() {
    assert!(ShamsiDate::new(1404, 13, 1).is_err());
    assert!(ShamsiDate::new(1404, 7, 31).is_err());
    assert!(ShamsiDate::new(1403, 12, 30).is_err());
}
