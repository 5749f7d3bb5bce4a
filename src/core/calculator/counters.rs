use crate::models::candidate::CumulativeCounters;
use crate::models::hour_log_entry::HourLogEntry;

/// New entry: add its billable hours (including break and meetings) and sets.
pub fn apply_entry_create(c: CumulativeCounters, entry: &HourLogEntry) -> CumulativeCounters {
    CumulativeCounters {
        active_hours: c.active_hours + entry.billable_hours(),
        number_of_sets: c.number_of_sets + entry.sets_added,
    }
}

/// Edit: only the worked hours and the sets move the counters.
pub fn apply_entry_edit(
    c: CumulativeCounters,
    old: &HourLogEntry,
    new: &HourLogEntry,
) -> CumulativeCounters {
    let delta_hours = new.hours_added - old.hours_added;
    let delta_sets = new.sets_added - old.sets_added;

    CumulativeCounters {
        active_hours: (c.active_hours + delta_hours).max(0.0),
        number_of_sets: (c.number_of_sets + delta_sets).max(0),
    }
}

pub fn apply_entry_delete(c: CumulativeCounters, entry: &HourLogEntry) -> CumulativeCounters {
    CumulativeCounters {
        active_hours: (c.active_hours - entry.hours_added).max(0.0),
        number_of_sets: (c.number_of_sets - entry.sets_added).max(0),
    }
}

/// Counters rebuilt from scratch as a fold over a candidate's entries.
pub fn recompute_counters<'a, I>(entries: I) -> CumulativeCounters
where
    I: IntoIterator<Item = &'a HourLogEntry>,
{
    entries
        .into_iter()
        .fold(CumulativeCounters::default(), apply_entry_create)
}
