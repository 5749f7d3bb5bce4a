use crate::core::calculator::payment::{distribute_payment, expand_payment_batch};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::payment_status::PaymentStatus;
use crate::models::summary::BalanceUpdate;
use crate::models::work_record::WorkRecord;
use std::collections::HashSet;

/// Result of a store-backed mark-as-paid: the ids written and the work
/// records as re-read after the writes. `batch_mates` counts written ids
/// that were not requested but shared a payment batch with one that was.
#[derive(Debug, Clone)]
pub struct PaidOutcome {
    pub updated: Vec<String>,
    pub batch_mates: usize,
    pub records: Vec<WorkRecord>,
}

pub struct PaymentLogic;

impl PaymentLogic {
    /// Mark records (and their batch mates) as paid, one write per record.
    /// The first failing write aborts the loop; earlier writes stay.
    pub fn mark_as_paid<S: RecordStore>(store: &S, ids: &[String]) -> AppResult<PaidOutcome> {
        if ids.is_empty() {
            return Err(AppError::Validation(
                "No records selected to mark as paid".into(),
            ));
        }

        let all = store.work_records()?;
        let expanded = expand_payment_batch(ids, &all);

        let mut updated = Vec::new();
        for id in &expanded {
            if store.set_payment_status(id, PaymentStatus::Paid)? {
                updated.push(id.clone());
            }
        }

        let _ = store.log(
            "paid",
            &updated.len().to_string(),
            &format!(
                "Marked {} record(s) as paid ({} requested)",
                updated.len(),
                ids.len()
            ),
        );

        let requested: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let batch_mates = updated
            .iter()
            .filter(|id| !requested.contains(id.as_str()))
            .count();

        let records = store.work_records()?;
        Ok(PaidOutcome {
            updated,
            batch_mates,
            records,
        })
    }

    fn select_entries<S: RecordStore>(store: &S, ids: &[String]) -> AppResult<Vec<HourLogEntry>> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(store
            .hour_log_entries()?
            .into_iter()
            .filter(|e| wanted.contains(e.id.as_str()))
            .collect())
    }

    /// Record a client payment over the given entries, oldest first.
    pub fn record_payment<S: RecordStore>(
        store: &S,
        entry_ids: &[String],
        amount: f64,
        per_set_bonus: f64,
    ) -> AppResult<Vec<BalanceUpdate>> {
        let entries = Self::select_entries(store, entry_ids)?;
        let updates = distribute_payment(&entries, amount, per_set_bonus)?;

        for u in &updates {
            store.set_balance_paid(&u.entry_id, u.new_balance)?;
        }

        let _ = store.log(
            "pay",
            &format!("{:.2}", amount),
            &format!("Payment spread over {} entr(y/ies)", updates.len()),
        );

        Ok(updates)
    }

    /// Reset `balance_paid` to 0. Unknown ids are skipped.
    pub fn clear_payments<S: RecordStore>(store: &S, entry_ids: &[String]) -> AppResult<usize> {
        let entries = Self::select_entries(store, entry_ids)?;

        for e in &entries {
            store.set_balance_paid(&e.id, 0.0)?;
        }

        let _ = store.log(
            "pay_clear",
            &entries.len().to_string(),
            "Cleared recorded payments",
        );

        Ok(entries.len())
    }
}
