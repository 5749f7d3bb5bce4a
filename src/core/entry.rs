use crate::core::calculator::counters::{apply_entry_create, apply_entry_delete, apply_entry_edit};
use crate::core::calculator::normalize::snap_break_hours;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::candidate::CumulativeCounters;
use crate::models::hour_log_entry::{HourLogEntry, HourLogEntryPatch};

/// Input of a new hour-log entry, as collected by `entry add`.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub candidate_id: String,
    pub entry_date: String,
    pub hours_added: f64,
    /// `None` → candidate's current rate
    pub rate_per_hour: Option<f64>,
    pub sets_added: i64,
    pub balance_paid: f64,
    pub break_hours: f64,
    pub meetings_hours: f64,
    pub notes: Option<String>,
}

/// Write paths of the hour log. Each action writes the entry first and the
/// candidate counters second.
pub struct EntryLogic;

fn check_hours(label: &str, v: f64) -> AppResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be a non-negative number",
            label
        )));
    }
    Ok(())
}

/// The entry write already happened; wrap a failing candidate update so the
/// caller can tell the two apart.
fn second_write<S: RecordStore>(
    store: &S,
    entry_id: &str,
    candidate_id: &str,
    counters: CumulativeCounters,
    rate: Option<f64>,
) -> AppResult<()> {
    store
        .update_candidate_counters(candidate_id, counters, rate)
        .map_err(|e| AppError::PartialWrite {
            entry_id: entry_id.to_string(),
            step: "candidate counters update",
            source: Box::new(e),
        })
}

impl EntryLogic {
    pub fn create<S: RecordStore>(store: &S, input: NewEntry) -> AppResult<HourLogEntry> {
        check_hours("Hours", input.hours_added)?;
        if input.sets_added < 0 {
            return Err(AppError::Validation("Sets must not be negative".into()));
        }

        let candidate = store.candidate(&input.candidate_id)?;
        let rate = input.rate_per_hour.unwrap_or(candidate.rate_per_hour);
        check_hours("Rate", rate)?;

        let mut entry = HourLogEntry::new(
            uuid::Uuid::new_v4().to_string(),
            candidate.id.clone(),
            input.entry_date,
            input.hours_added,
            rate,
        );
        entry.sets_added = input.sets_added;
        entry.balance_paid = input.balance_paid.max(0.0);
        entry.break_hours = snap_break_hours(input.break_hours);
        entry.meetings_hours = snap_break_hours(input.meetings_hours);
        entry.notes = input.notes.filter(|n| !n.trim().is_empty());

        // snapshots = candidate totals after this entry
        let counters = apply_entry_create(candidate.counters(), &entry);
        entry.active_hours = counters.active_hours;
        entry.number_of_sets = counters.number_of_sets;

        store.insert_hour_log_entry(&entry)?;
        second_write(store, &entry.id, &candidate.id, counters, Some(rate))?;

        let _ = store.log(
            "add",
            &entry.id,
            &format!(
                "Logged {:.2}h / {} sets for {}",
                entry.hours_added, entry.sets_added, candidate.name
            ),
        );

        Ok(entry)
    }

    pub fn edit<S: RecordStore>(
        store: &S,
        entry_id: &str,
        patch: &HourLogEntryPatch,
    ) -> AppResult<HourLogEntry> {
        if let Some(h) = patch.hours_added {
            check_hours("Hours", h)?;
        }
        if let Some(r) = patch.rate_per_hour {
            check_hours("Rate", r)?;
        }
        if patch.sets_added.is_some_and(|s| s < 0) {
            return Err(AppError::Validation("Sets must not be negative".into()));
        }

        let old = store.hour_log_entry(entry_id)?;
        let mut new = patch.apply_to(&old);
        new.break_hours = snap_break_hours(new.break_hours);
        new.meetings_hours = snap_break_hours(new.meetings_hours);

        store.update_hour_log_entry(&new)?;

        let delta_hours = new.hours_added - old.hours_added;
        let delta_sets = new.sets_added - old.sets_added;

        if delta_hours != 0.0 || delta_sets != 0 || patch.rate_per_hour.is_some() {
            let candidate = store
                .candidate(&old.candidate_id)
                .map_err(|e| AppError::PartialWrite {
                    entry_id: new.id.clone(),
                    step: "candidate lookup",
                    source: Box::new(e),
                })?;
            let counters = apply_entry_edit(candidate.counters(), &old, &new);
            second_write(
                store,
                &new.id,
                &candidate.id,
                counters,
                patch.rate_per_hour,
            )?;
        }

        let _ = store.log(
            "edit",
            &new.id,
            &format!(
                "Hours {:.2} → {:.2}, sets {} → {}",
                old.hours_added, new.hours_added, old.sets_added, new.sets_added
            ),
        );

        Ok(new)
    }

    pub fn delete<S: RecordStore>(store: &S, entry_id: &str) -> AppResult<HourLogEntry> {
        let old = store.hour_log_entry(entry_id)?;

        store.delete_hour_log_entry(entry_id)?;

        let candidate = store
            .candidate(&old.candidate_id)
            .map_err(|e| AppError::PartialWrite {
                entry_id: old.id.clone(),
                step: "candidate lookup",
                source: Box::new(e),
            })?;
        let counters = apply_entry_delete(candidate.counters(), &old);
        second_write(store, &old.id, &candidate.id, counters, None)?;

        let _ = store.log(
            "del",
            &old.id,
            &format!("Removed {:.2}h / {} sets", old.hours_added, old.sets_added),
        );

        Ok(old)
    }
}
