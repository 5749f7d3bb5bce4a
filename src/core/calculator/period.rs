use crate::models::period::{Period, PeriodKind};
use crate::utils::date::{
    end_of_day, first_of_month, last_of_month, start_of_day, sunday_on_or_before, us_date,
};
use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive `[start, end]` range of `kind` around `reference`.
pub fn resolve_period(kind: PeriodKind, reference: NaiveDate) -> Period {
    let (first, last) = match kind {
        PeriodKind::Day => (reference, reference),

        PeriodKind::Week => {
            let sunday = sunday_on_or_before(reference);
            (sunday, sunday + Duration::days(6))
        }

        // Two 14-day buckets anchored on the 1st of the month. The bucket is
        // picked from the day-of-month of the preceding Sunday, which may
        // belong to the previous month.
        PeriodKind::Biweekly => {
            let week_start = sunday_on_or_before(reference);
            let week_number = (week_start.day() / 14) as i64;
            let start = first_of_month(reference) + Duration::days(week_number * 14);
            (start, start + Duration::days(13))
        }

        PeriodKind::Month => (first_of_month(reference), last_of_month(reference)),
    };

    Period {
        start: start_of_day(first),
        end: end_of_day(last),
    }
}

/// e.g. `Biweekly - 01/20/2025`
pub fn period_label(kind: PeriodKind, reference: NaiveDate) -> String {
    format!("{} - {}", kind.title(), us_date(reference))
}
