use super::normalize::normalize_to_hours;
use crate::config::EarningsConfig;
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::work_record::WorkRecord;

/// Where an hour-log total is computed. The per-set bonus differs between
/// the entry screens and the summary views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetBonusContext {
    EntryCreation,
    Summary,
}

impl SetBonusContext {
    pub fn bonus(&self, cfg: &EarningsConfig) -> f64 {
        match self {
            SetBonusContext::EntryCreation => cfg.per_set_bonus_entry_creation,
            SetBonusContext::Summary => cfg.per_set_bonus_summary,
        }
    }
}

/// `(hours + break + meetings) * rate + sets * per_set_bonus`
pub fn hour_log_entry_total(entry: &HourLogEntry, per_set_bonus: f64) -> f64 {
    entry.billable_hours() * entry.rate_per_hour + entry.sets_added as f64 * per_set_bonus
}

/// Billable hours of a work record (talk + wait + break + meeting).
pub fn work_record_hours(rec: &WorkRecord) -> f64 {
    normalize_to_hours(&rec.talk_time)
        + normalize_to_hours(&rec.wait_time)
        + normalize_to_hours(&rec.break_minutes)
        + normalize_to_hours(&rec.meeting_minutes)
}

pub fn work_record_total(rec: &WorkRecord, set_bonus: f64) -> f64 {
    work_record_hours(rec) * rec.rate_per_hour + rec.sets_added as f64 * set_bonus
}

/// Record total plus the separately tracked Moe's amount.
pub fn combined_total(rec: &WorkRecord, set_bonus: f64) -> f64 {
    work_record_total(rec, set_bonus) + rec.moes_total
}

/// Moe's summary view: flat hourly fee plus a per-set fee. Not related to
/// `WorkRecord::moes_total`.
pub fn moes_summary_total(total_billable_hours: f64, total_sets: i64, cfg: &EarningsConfig) -> f64 {
    total_billable_hours * cfg.moes_hour_rate + total_sets as f64 * cfg.moes_set_bonus
}

pub fn average_per_owner(total: f64, owners: usize) -> f64 {
    total / owners.max(1) as f64
}

/// What is still owed on one entry, never negative.
pub fn entry_outstanding(entry: &HourLogEntry, per_set_bonus: f64) -> f64 {
    (hour_log_entry_total(entry, per_set_bonus) - entry.balance_paid).max(0.0)
}

pub fn amount_owed<'a, I>(entries: I, per_set_bonus: f64) -> f64
where
    I: IntoIterator<Item = &'a HourLogEntry>,
{
    entries
        .into_iter()
        .map(|e| entry_outstanding(e, per_set_bonus))
        .sum()
}

/// Display rounding (2 decimals).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
