use serde::{Deserialize, Serialize};

/// Running totals kept on the candidate row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CumulativeCounters {
    pub active_hours: f64,
    pub number_of_sets: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub alias: Option<String>,
    pub client_id: Option<String>,
    pub rate_per_hour: f64,
    pub active_hours: f64,
    pub number_of_sets: i64,
    pub created_at: String,
}

impl Candidate {
    pub fn new(id: String, name: String, client_id: Option<String>, rate_per_hour: f64) -> Self {
        Self {
            id,
            name,
            alias: None,
            client_id,
            rate_per_hour,
            active_hours: 0.0,
            number_of_sets: 0,
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Alias wins over the legal name in client-facing breakdowns.
    pub fn display_name(&self) -> &str {
        match self.alias.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => &self.name,
        }
    }

    pub fn counters(&self) -> CumulativeCounters {
        CumulativeCounters {
            active_hours: self.active_hours,
            number_of_sets: self.number_of_sets,
        }
    }
}
