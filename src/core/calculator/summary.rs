use super::earnings::{
    combined_total, hour_log_entry_total, moes_summary_total, work_record_hours, work_record_total,
};
use super::normalize::normalize_to_minutes;
use crate::config::EarningsConfig;
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::summary::{BillingSummary, ClientPaymentTotals, MoesSummary, OwnerBreakdown};
use crate::models::work_record::WorkRecord;
use std::collections::{BTreeMap, HashMap};

pub fn owner_name(names: &HashMap<String, String>, owner_id: &str) -> String {
    names
        .get(owner_id)
        .cloned()
        .unwrap_or_else(|| format!("Employee {}", owner_id))
}

/// Per-owner accumulator that keeps first-seen order.
struct Breakdown<'a> {
    names: &'a HashMap<String, String>,
    rows: Vec<OwnerBreakdown>,
    index: HashMap<String, usize>,
}

impl<'a> Breakdown<'a> {
    fn new(names: &'a HashMap<String, String>) -> Self {
        Self {
            names,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, owner_id: &str, hours: f64, sets: i64, rate: f64, earnings: f64) {
        let idx = match self.index.get(owner_id) {
            Some(i) => *i,
            None => {
                self.rows.push(OwnerBreakdown {
                    owner_id: owner_id.to_string(),
                    name: owner_name(self.names, owner_id),
                    hours: 0.0,
                    sets: 0,
                    rate,
                    earnings: 0.0,
                    entry_count: 0,
                });
                self.index.insert(owner_id.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };

        let row = &mut self.rows[idx];
        row.hours += hours;
        row.sets += sets;
        // last record's rate wins
        row.rate = rate;
        row.earnings += earnings;
        row.entry_count += 1;
    }
}

/// Hour-log summary. Categories: `hours`, `break`, `meetings` (minutes).
pub fn summarize_hour_log(
    entries: &[&HourLogEntry],
    names: &HashMap<String, String>,
    period_label: String,
    per_set_bonus: f64,
) -> BillingSummary {
    let mut minutes: BTreeMap<String, f64> = BTreeMap::new();
    let mut breakdown = Breakdown::new(names);
    let mut total_sets = 0;
    let mut total_earnings = 0.0;
    let mut total_balance_paid = 0.0;

    for e in entries {
        *minutes.entry("hours".into()).or_default() += e.hours_added * 60.0;
        *minutes.entry("break".into()).or_default() += e.break_hours * 60.0;
        *minutes.entry("meetings".into()).or_default() += e.meetings_hours * 60.0;

        let earned = hour_log_entry_total(e, per_set_bonus);
        total_sets += e.sets_added;
        total_earnings += earned;
        total_balance_paid += e.balance_paid;

        breakdown.add(
            &e.candidate_id,
            e.billable_hours(),
            e.sets_added,
            e.rate_per_hour,
            earned,
        );
    }

    BillingSummary {
        total_minutes_by_category: minutes,
        total_sets,
        total_earnings,
        per_owner_breakdown: breakdown.rows,
        period_label,
        record_count: entries.len(),
        total_balance_paid,
    }
}

/// Work-record summary. Categories: `talk`, `wait`, `break`, `meeting`.
pub fn summarize_work_records(
    records: &[&WorkRecord],
    names: &HashMap<String, String>,
    period_label: String,
    set_bonus: f64,
) -> BillingSummary {
    let mut minutes: BTreeMap<String, f64> = BTreeMap::new();
    let mut breakdown = Breakdown::new(names);
    let mut total_sets = 0;
    let mut total_earnings = 0.0;

    for r in records {
        *minutes.entry("talk".into()).or_default() += normalize_to_minutes(&r.talk_time);
        *minutes.entry("wait".into()).or_default() += normalize_to_minutes(&r.wait_time);
        *minutes.entry("break".into()).or_default() += normalize_to_minutes(&r.break_minutes);
        *minutes.entry("meeting".into()).or_default() += normalize_to_minutes(&r.meeting_minutes);

        let earned = work_record_total(r, set_bonus);
        total_sets += r.sets_added;
        total_earnings += earned;

        breakdown.add(
            &r.employee_id,
            work_record_hours(r),
            r.sets_added,
            r.rate_per_hour,
            earned,
        );
    }

    BillingSummary {
        total_minutes_by_category: minutes,
        total_sets,
        total_earnings,
        per_owner_breakdown: breakdown.rows,
        period_label,
        record_count: records.len(),
        total_balance_paid: 0.0,
    }
}

pub fn client_payment_summary(records: &[&WorkRecord], set_bonus: f64) -> ClientPaymentTotals {
    let total: f64 = records.iter().map(|r| work_record_total(r, set_bonus)).sum();
    let moes_total: f64 = records.iter().map(|r| r.moes_total).sum();
    let combined: f64 = records.iter().map(|r| combined_total(r, set_bonus)).sum();

    ClientPaymentTotals {
        total,
        moes_total,
        combined_total: combined,
    }
}

pub fn moes_summary(records: &[&WorkRecord], cfg: &EarningsConfig) -> MoesSummary {
    let total_billable_hours: f64 = records.iter().map(|r| work_record_hours(r)).sum();
    let total_sets: i64 = records.iter().map(|r| r.sets_added).sum();

    MoesSummary {
        total_billable_hours,
        total_sets,
        moes_total: moes_summary_total(total_billable_hours, total_sets, cfg),
        record_count: records.len(),
    }
}

pub fn top_by_earnings(summary: &BillingSummary, n: usize) -> Vec<&OwnerBreakdown> {
    let mut rows: Vec<&OwnerBreakdown> = summary.per_owner_breakdown.iter().collect();
    rows.sort_by(|a, b| b.earnings.total_cmp(&a.earnings));
    rows.truncate(n);
    rows
}

pub fn top_by_hours(summary: &BillingSummary, n: usize) -> Vec<&OwnerBreakdown> {
    let mut rows: Vec<&OwnerBreakdown> = summary.per_owner_breakdown.iter().collect();
    rows.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    rows.truncate(n);
    rows
}
