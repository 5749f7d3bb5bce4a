use super::earnings::{amount_owed, hour_log_entry_total};
use crate::errors::{AppError, AppResult};
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::payment_status::PaymentStatus;
use crate::models::summary::BalanceUpdate;
use crate::models::work_record::WorkRecord;
use crate::utils::date::{now, safe_parse_instant};
use std::collections::HashSet;

/// Requested ids plus every record sharing a payment batch with one of them.
///
/// One level only: batch members do not pull in further batches. The result
/// keeps the requested ids first, then batch members in store order, without
/// duplicates.
pub fn expand_payment_batch(ids: &[String], all: &[WorkRecord]) -> Vec<String> {
    let requested: HashSet<&str> = ids.iter().map(String::as_str).collect();

    let batches: HashSet<&str> = all
        .iter()
        .filter(|r| requested.contains(r.id.as_str()))
        .filter_map(WorkRecord::batch_id)
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for id in ids {
        if seen.insert(id.clone()) {
            out.push(id.clone());
        }
    }

    for r in all {
        if let Some(b) = r.batch_id()
            && batches.contains(b)
            && seen.insert(r.id.clone())
        {
            out.push(r.id.clone());
        }
    }

    out
}

/// In-memory transition to `paid`. Returns the ids of the records that end
/// up paid (already-paid records included).
pub fn mark_as_paid(ids: &[String], all: &mut [WorkRecord]) -> AppResult<Vec<String>> {
    if ids.is_empty() {
        return Err(AppError::Validation(
            "No records selected to mark as paid".into(),
        ));
    }

    let expanded = expand_payment_batch(ids, all);
    let targets: HashSet<&str> = expanded.iter().map(String::as_str).collect();

    for r in all.iter_mut() {
        if targets.contains(r.id.as_str()) {
            r.payment_status = PaymentStatus::Paid;
        }
    }

    let present: HashSet<&str> = all.iter().map(|r| r.id.as_str()).collect();
    Ok(expanded
        .iter()
        .filter(|id| present.contains(id.as_str()))
        .cloned()
        .collect())
}

/// Validate a payment amount against what is owed.
pub fn validate_payment(amount: f64, owed: f64) -> AppResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::InvalidAmount(
            "Please enter a valid payment amount".into(),
        ));
    }
    if amount - owed > 1e-9 {
        return Err(AppError::Validation(format!(
            "Payment amount cannot exceed amount owed ({:.2})",
            owed
        )));
    }
    Ok(())
}

/// Spread `amount` over `entries`, oldest first, filling each entry up to
/// what it still owes.
pub fn distribute_payment(
    entries: &[HourLogEntry],
    amount: f64,
    per_set_bonus: f64,
) -> AppResult<Vec<BalanceUpdate>> {
    if entries.is_empty() {
        return Err(AppError::Validation(
            "No entries found to record payment".into(),
        ));
    }

    validate_payment(amount, amount_owed(entries, per_set_bonus))?;

    let reference = now();
    let mut sorted: Vec<&HourLogEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| safe_parse_instant(&e.entry_date, reference));

    let mut remaining = amount;
    let mut updates = Vec::new();

    for entry in sorted {
        if remaining <= 0.0 {
            break;
        }

        let owed = hour_log_entry_total(entry, per_set_bonus);
        let open = (owed - entry.balance_paid).max(0.0);
        if open <= 0.0 {
            continue;
        }

        let pay = remaining.min(open);
        updates.push(BalanceUpdate {
            entry_id: entry.id.clone(),
            amount_applied: pay,
            new_balance: entry.balance_paid + pay,
        });
        remaining -= pay;
    }

    Ok(updates)
}
