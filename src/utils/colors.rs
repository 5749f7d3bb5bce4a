/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Amount color:
/// \>0 → yellow (still owed)
/// 0 → green (settled)
pub fn color_for_outstanding(value: f64) -> &'static str {
    if value > 0.005 { YELLOW } else { GREEN }
}

/// Payment status color: paid green, pending yellow, archived grey.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "paid" => GREEN,
        "pending" => YELLOW,
        _ => GREY,
    }
}

/// Grey out zero / empty cells.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "00:00" || v == "0" || v == "$0.00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
