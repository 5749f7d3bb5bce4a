use serde::{Deserialize, Serialize};

/// Payment state of a work record.
///
/// The portal historically wrote both `pending` and `unpaid` for the same
/// state, so both spellings collapse into [`PaymentStatus::Pending`] when a
/// record is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Archived,
}

impl PaymentStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Archived => "archived",
        }
    }

    /// Strict parse: only the known spellings.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "unpaid" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "archived" => Some(PaymentStatus::Archived),
            _ => None,
        }
    }

    /// Lenient parse used at ingestion: missing or unknown → pending.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_db_str).unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}
