use crate::models::summary::BillingSummary;
use serde::Serialize;

/// Flat per-owner row for CSV / XLSX.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OwnerRowExport {
    pub period: String,
    pub owner_id: String,
    pub name: String,
    pub hours: f64,
    pub sets: i64,
    pub rate: f64,
    pub earnings: f64,
    pub entry_count: usize,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "period",
        "owner_id",
        "name",
        "hours",
        "sets",
        "rate",
        "earnings",
        "entry_count",
    ]
}

/// Money and hours are rounded to cents here, at the output boundary.
pub fn summary_rows(summary: &BillingSummary) -> Vec<OwnerRowExport> {
    let r2 = crate::core::calculator::earnings::round2;

    summary
        .per_owner_breakdown
        .iter()
        .map(|o| OwnerRowExport {
            period: summary.period_label.clone(),
            owner_id: o.owner_id.clone(),
            name: o.name.clone(),
            hours: r2(o.hours),
            sets: o.sets,
            rate: r2(o.rate),
            earnings: r2(o.earnings),
            entry_count: o.entry_count,
        })
        .collect()
}

pub(crate) fn row_to_strings(r: &OwnerRowExport) -> Vec<String> {
    vec![
        r.period.clone(),
        r.owner_id.clone(),
        r.name.clone(),
        format!("{:.2}", r.hours),
        r.sets.to_string(),
        format!("{:.2}", r.rate),
        format!("{:.2}", r.earnings),
        r.entry_count.to_string(),
    ]
}
