use crate::models::hour_log_entry::HourLogEntry;
use crate::models::payment_status::PaymentStatus;
use crate::models::period::Period;
use crate::models::work_record::WorkRecord;
use crate::utils::date::safe_parse_instant;
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Anything owned by a candidate and dated.
pub trait PeriodRecord {
    fn owner_id(&self) -> &str;
    fn raw_date(&self) -> &str;
}

/// A dated record that also carries a payment status.
pub trait PayableRecord: PeriodRecord {
    fn payment_status(&self) -> PaymentStatus;
}

impl PeriodRecord for HourLogEntry {
    fn owner_id(&self) -> &str {
        &self.candidate_id
    }

    fn raw_date(&self) -> &str {
        &self.entry_date
    }
}

impl PeriodRecord for WorkRecord {
    fn owner_id(&self) -> &str {
        &self.employee_id
    }

    fn raw_date(&self) -> &str {
        &self.date
    }
}

impl PayableRecord for WorkRecord {
    fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentView {
    /// pending / unpaid
    Unpaid,
    Paid,
}

impl PaymentView {
    pub fn from_paid_flag(paid: bool) -> Self {
        if paid {
            PaymentView::Paid
        } else {
            PaymentView::Unpaid
        }
    }

    /// Archived records are in neither view.
    pub fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            PaymentView::Paid => status == PaymentStatus::Paid,
            PaymentView::Unpaid => status == PaymentStatus::Pending,
        }
    }
}

fn in_period<R: PeriodRecord>(r: &R, period: &Period, now: NaiveDateTime) -> bool {
    period.contains(&safe_parse_instant(r.raw_date(), now))
}

/// Records of `owner_ids` dated inside `period` whose status matches `view`.
/// An empty owner set selects nothing.
pub fn filter_records<'a, R: PayableRecord>(
    records: &'a [R],
    owner_ids: &HashSet<String>,
    period: &Period,
    view: PaymentView,
) -> Vec<&'a R> {
    if owner_ids.is_empty() {
        return Vec::new();
    }

    let now = crate::utils::date::now();
    records
        .iter()
        .filter(|r| owner_ids.contains(r.owner_id()))
        .filter(|r| in_period(*r, period, now))
        .filter(|r| view.matches(r.payment_status()))
        .collect()
}

/// Period filter for the hour log, which has no payment status.
/// `None` selects every owner.
pub fn filter_by_period<'a, R: PeriodRecord>(
    records: &'a [R],
    owner_ids: Option<&HashSet<String>>,
    period: &Period,
) -> Vec<&'a R> {
    let now = crate::utils::date::now();
    records
        .iter()
        .filter(|r| owner_ids.is_none_or(|ids| ids.contains(r.owner_id())))
        .filter(|r| in_period(*r, period, now))
        .collect()
}
