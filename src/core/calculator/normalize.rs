use crate::models::time_value::TimeValue;

/// Canonical minutes of a work-record duration, never negative.
///
/// Numbers are already minutes. `H:M:S` strings become
/// `H*60 + M + round(S/60)`. Anything else counts as 0.
pub fn normalize_to_minutes(value: &TimeValue) -> f64 {
    match value {
        TimeValue::Minutes(m) if m.is_finite() => m.max(0.0),
        TimeValue::Minutes(_) => 0.0,
        TimeValue::Text(s) => hms_to_minutes(s),
        TimeValue::Missing => 0.0,
    }
}

pub fn normalize_to_hours(value: &TimeValue) -> f64 {
    normalize_to_minutes(value) / 60.0
}

fn hms_to_minutes(s: &str) -> f64 {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 3 {
        return 0.0;
    }

    let field = |p: &str| p.trim().parse::<i64>().unwrap_or(0).max(0) as f64;
    let h = field(parts[0]);
    let m = field(parts[1]);
    let sec = field(parts[2]);

    h * 60.0 + m + (sec / 60.0).round()
}

/// Break / meeting hours on an hour-log entry: only 0.5, 0.75 or 1 are
/// accepted, everything else is 0.
pub fn snap_break_hours(value: f64) -> f64 {
    const ALLOWED: [f64; 3] = [0.5, 0.75, 1.0];
    if ALLOWED.iter().any(|a| (value - a).abs() < 1e-9) {
        value
    } else {
        0.0
    }
}
