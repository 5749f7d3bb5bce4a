use super::{payment_status::PaymentStatus, time_value::TimeValue};
use serde::{Deserialize, Serialize};

/// Client-facing billing record of an employee (separate ledger from the
/// hour log).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: String,
    pub employee_id: String,
    pub date: String,
    #[serde(default)]
    pub talk_time: TimeValue,
    #[serde(default)]
    pub wait_time: TimeValue,
    #[serde(default)]
    pub break_minutes: TimeValue,
    #[serde(default)]
    pub meeting_minutes: TimeValue,
    pub rate_per_hour: f64,
    #[serde(default)]
    pub sets_added: i64,
    #[serde(default)]
    pub moes_total: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_batch_id: Option<String>,
    pub created_at: String,
}

impl WorkRecord {
    pub fn new(id: String, employee_id: String, date: String, rate_per_hour: f64) -> Self {
        Self {
            id,
            employee_id,
            date,
            talk_time: TimeValue::Missing,
            wait_time: TimeValue::Missing,
            break_minutes: TimeValue::Missing,
            meeting_minutes: TimeValue::Missing,
            rate_per_hour,
            sets_added: 0,
            moes_total: 0.0,
            payment_status: PaymentStatus::Pending,
            payment_batch_id: None,
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Batch key, ignoring blank ids.
    pub fn batch_id(&self) -> Option<&str> {
        self.payment_batch_id
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }
}
