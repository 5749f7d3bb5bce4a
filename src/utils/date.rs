use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local wall-clock instant.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a stored record date into a local instant.
///
/// Dirty data never fails: empty or unparseable values fall back to `now`,
/// which keeps them out of historical periods.
pub fn safe_parse_instant(raw: &str, now: NaiveDateTime) -> NaiveDateTime {
    parse_instant(raw).unwrap_or(now)
}

pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 3339 with offset → local wall clock
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // date only → local midnight
    parse_date(s).map(start_of_day)
}

pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 of the given day.
pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}

/// The Sunday on or before `d`.
pub fn sunday_on_or_before(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_sunday() as i64;
    d - Duration::days(back)
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

pub fn last_of_month(d: NaiveDate) -> NaiveDate {
    month_last_day(d.year(), d.month())
        .and_then(|last| d.with_day(last))
        .unwrap_or(d)
}

/// MM/DD/YYYY, the format used in period labels.
pub fn us_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}
