//! Time utilities: hour inputs typed on the entry screens and HH:MM display.

/// Parse the "hours added" input of an hour-log entry.
///
/// Accepts decimal hours (`1.5`) or `H:M:S` (`01:30:00`). In the `H:M:S`
/// form seconds stay fractional (`H + M/60 + S/3600`). Non-digit noise inside
/// a field is dropped and an empty field counts as 0.
pub fn parse_hours_input(raw: &str) -> f64 {
    let s = raw.trim();
    if s.contains(':') {
        let mut parts = s.split(':').map(digits_only);
        let h = parts.next().unwrap_or(0) as f64;
        let m = parts.next().unwrap_or(0) as f64;
        let sec = parts.next().unwrap_or(0) as f64;
        return (h * 60.0 + m + sec / 60.0) / 60.0;
    }

    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

fn digits_only(field: &str) -> i64 {
    let digits: String = field.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Minutes as `HH:MM` (whole hours, rounded minutes).
pub fn format_minutes_hhmm(minutes: f64) -> String {
    let total = if minutes.is_finite() {
        minutes.max(0.0).round() as i64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}
