use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Biweekly,
    #[default]
    Month,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Biweekly => "biweekly",
            PeriodKind::Month => "month",
        }
    }

    /// "Day", "Week", ... as shown in period labels.
    pub fn title(&self) -> &'static str {
        match self {
            PeriodKind::Day => "Day",
            PeriodKind::Week => "Week",
            PeriodKind::Biweekly => "Biweekly",
            PeriodKind::Month => "Month",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "day" | "daily" => Some(PeriodKind::Day),
            "week" | "weekly" => Some(PeriodKind::Week),
            "biweekly" => Some(PeriodKind::Biweekly),
            "month" | "monthly" => Some(PeriodKind::Month),
            _ => None,
        }
    }
}

/// Inclusive range of local wall-clock instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}
