//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Currency amount with 2 decimals. Rounding happens only here.
pub fn money(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{:.2}", sign, symbol, amount.abs())
}

/// Decimal hours with 2 decimals, e.g. `1.50h`.
pub fn hours(h: f64) -> String {
    format!("{:.2}h", h)
}

/// Short id for table display (uuids are long).
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
