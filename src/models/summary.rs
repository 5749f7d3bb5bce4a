use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the per-owner breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerBreakdown {
    pub owner_id: String,
    pub name: String,
    pub hours: f64,
    pub sets: i64,
    pub rate: f64,
    pub earnings: f64,
    pub entry_count: usize,
}

/// Aggregate handed to the presentation layer (tables, exports).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingSummary {
    /// Category name → minutes (`hours`, `break`, `meetings` for the hour
    /// log; `talk`, `wait`, `break`, `meeting` for work records).
    pub total_minutes_by_category: BTreeMap<String, f64>,
    pub total_sets: i64,
    pub total_earnings: f64,
    pub per_owner_breakdown: Vec<OwnerBreakdown>,
    pub period_label: String,
    pub record_count: usize,
    /// Sum of `balance_paid`; always 0 for work records.
    pub total_balance_paid: f64,
}

impl BillingSummary {
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes_by_category.values().sum()
    }

    pub fn category_minutes(&self, category: &str) -> f64 {
        self.total_minutes_by_category
            .get(category)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn owner(&self, owner_id: &str) -> Option<&OwnerBreakdown> {
        self.per_owner_breakdown
            .iter()
            .find(|o| o.owner_id == owner_id)
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Client payment view: billed work plus the separately tracked Moe's
/// earnings carried on each record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ClientPaymentTotals {
    pub total: f64,
    pub moes_total: f64,
    pub combined_total: f64,
}

/// Moe's summary view (billable hours at a flat rate plus a per-set fee).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MoesSummary {
    pub total_billable_hours: f64,
    pub total_sets: i64,
    pub moes_total: f64,
    pub record_count: usize,
}

/// New `balance_paid` for one hour-log entry after distributing a payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceUpdate {
    pub entry_id: String,
    pub amount_applied: f64,
    pub new_balance: f64,
}
