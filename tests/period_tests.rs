use chrono::{NaiveDate, NaiveDateTime};
use hirebill::core::calculator::period::{period_label, resolve_period};
use hirebill::models::period::PeriodKind;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").expect("datetime")
}

#[test]
fn biweekly_mid_month_of_a_wednesday_month() {
    // January 2025 starts on a Wednesday; the 20th is a Monday.
    let p = resolve_period(PeriodKind::Biweekly, d("2025-01-20"));
    assert_eq!(p.start, dt("2025-01-15 00:00:00.000"));
    assert_eq!(p.end, dt("2025-01-28 23:59:59.999"));
}

#[test]
fn biweekly_first_bucket() {
    let p = resolve_period(PeriodKind::Biweekly, d("2025-01-05"));
    assert_eq!(p.start, dt("2025-01-01 00:00:00"));
    assert_eq!(p.end, dt("2025-01-14 23:59:59.999"));
}

#[test]
fn biweekly_uses_the_preceding_sunday_day_of_month() {
    // Saturday Feb 1st: the preceding Sunday is Jan 26, bucket 1 of February.
    let p = resolve_period(PeriodKind::Biweekly, d("2025-02-01"));
    assert_eq!(p.start, dt("2025-02-15 00:00:00"));
    assert_eq!(p.end, dt("2025-02-28 23:59:59.999"));
    assert!(!p.contains(&dt("2025-02-01 12:00:00")));
}

#[test]
fn biweekly_third_bucket_spills_into_next_month() {
    // Sunday the 28th → bucket 2
    let p = resolve_period(PeriodKind::Biweekly, d("2025-09-28"));
    assert_eq!(p.start, dt("2025-09-29 00:00:00"));
    assert_eq!(p.end, dt("2025-10-12 23:59:59.999"));
}

#[test]
fn week_starts_on_sunday() {
    let p = resolve_period(PeriodKind::Week, d("2025-01-20"));
    assert_eq!(p.start, dt("2025-01-19 00:00:00"));
    assert_eq!(p.end, dt("2025-01-25 23:59:59.999"));

    let sunday = resolve_period(PeriodKind::Week, d("2025-01-19"));
    assert_eq!(sunday, p);
}

#[test]
fn day_covers_the_whole_day() {
    let p = resolve_period(PeriodKind::Day, d("2025-03-10"));
    assert_eq!(p.start, dt("2025-03-10 00:00:00"));
    assert_eq!(p.end, dt("2025-03-10 23:59:59.999"));
}

#[test]
fn month_handles_leap_years_and_december() {
    let feb = resolve_period(PeriodKind::Month, d("2024-02-10"));
    assert_eq!(feb.start, dt("2024-02-01 00:00:00"));
    assert_eq!(feb.end, dt("2024-02-29 23:59:59.999"));

    let feb = resolve_period(PeriodKind::Month, d("2025-02-10"));
    assert_eq!(feb.end, dt("2025-02-28 23:59:59.999"));

    let dec = resolve_period(PeriodKind::Month, d("2025-12-31"));
    assert_eq!(dec.start, dt("2025-12-01 00:00:00"));
    assert_eq!(dec.end, dt("2025-12-31 23:59:59.999"));
}

#[test]
fn resolution_is_idempotent() {
    for kind in [
        PeriodKind::Day,
        PeriodKind::Week,
        PeriodKind::Biweekly,
        PeriodKind::Month,
    ] {
        let reference = d("2025-06-17");
        assert_eq!(resolve_period(kind, reference), resolve_period(kind, reference));
        let p = resolve_period(kind, reference);
        assert!(p.start <= p.end);
    }
}

#[test]
fn bounds_are_inclusive() {
    let p = resolve_period(PeriodKind::Day, d("2025-03-10"));
    assert!(p.contains(&p.start));
    assert!(p.contains(&p.end));
    assert!(!p.contains(&dt("2025-03-11 00:00:00")));
    assert!(!p.contains(&dt("2025-03-09 23:59:59.999")));
}

#[test]
fn labels_use_us_dates() {
    assert_eq!(
        period_label(PeriodKind::Biweekly, d("2025-01-20")),
        "Biweekly - 01/20/2025"
    );
    assert_eq!(period_label(PeriodKind::Month, d("2025-12-01")), "Month - 12/01/2025");
}

#[test]
fn period_codes_parse() {
    assert_eq!(PeriodKind::from_code("weekly"), Some(PeriodKind::Week));
    assert_eq!(PeriodKind::from_code(" BIWEEKLY "), Some(PeriodKind::Biweekly));
    assert_eq!(PeriodKind::from_code("month"), Some(PeriodKind::Month));
    assert_eq!(PeriodKind::from_code("quarter"), None);
}
