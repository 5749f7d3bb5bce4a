use serde::{Deserialize, Serialize};

/// One logged work session of a candidate (probation / training ledger).
///
/// `active_hours` and `number_of_sets` are the candidate's totals *after*
/// this entry was applied, not deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLogEntry {
    pub id: String,
    pub candidate_id: String,
    pub entry_date: String,
    pub hours_added: f64,
    pub rate_per_hour: f64,
    pub active_hours: f64,
    pub number_of_sets: i64,
    #[serde(default)]
    pub sets_added: i64,
    #[serde(default)]
    pub balance_paid: f64,
    #[serde(default)]
    pub break_hours: f64,
    #[serde(default)]
    pub meetings_hours: f64,
    pub notes: Option<String>,
}

impl HourLogEntry {
    /// Bare entry with zeroed snapshots; the caller seeds them from the
    /// candidate before persisting.
    pub fn new(
        id: String,
        candidate_id: String,
        entry_date: String,
        hours_added: f64,
        rate_per_hour: f64,
    ) -> Self {
        Self {
            id,
            candidate_id,
            entry_date,
            hours_added,
            rate_per_hour,
            active_hours: 0.0,
            number_of_sets: 0,
            sets_added: 0,
            balance_paid: 0.0,
            break_hours: 0.0,
            meetings_hours: 0.0,
            notes: None,
        }
    }

    /// hours + break + meetings
    pub fn billable_hours(&self) -> f64 {
        self.hours_added + self.break_hours + self.meetings_hours
    }
}

/// Partial update of an entry. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct HourLogEntryPatch {
    pub entry_date: Option<String>,
    pub hours_added: Option<f64>,
    pub rate_per_hour: Option<f64>,
    pub sets_added: Option<i64>,
    pub balance_paid: Option<f64>,
    pub break_hours: Option<f64>,
    pub meetings_hours: Option<f64>,
    pub notes: Option<String>,
}

impl HourLogEntryPatch {
    pub fn apply_to(&self, entry: &HourLogEntry) -> HourLogEntry {
        let mut out = entry.clone();
        if let Some(d) = &self.entry_date {
            out.entry_date = d.clone();
        }
        if let Some(h) = self.hours_added {
            out.hours_added = h;
        }
        if let Some(r) = self.rate_per_hour {
            out.rate_per_hour = r;
        }
        if let Some(s) = self.sets_added {
            out.sets_added = s;
        }
        if let Some(b) = self.balance_paid {
            out.balance_paid = b;
        }
        if let Some(b) = self.break_hours {
            out.break_hours = b;
        }
        if let Some(m) = self.meetings_hours {
            out.meetings_hours = m;
        }
        if let Some(n) = &self.notes {
            out.notes = Some(n.clone());
        }
        out
    }
}
