use crate::db::log::{LogLine, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "client_add" | "candidate_add" | "record_add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "paid" | "pay" => Colour::Cyan,
        "pay_clear" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        _ => Colour::White,
    }
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries: Vec<LogLine> = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|l| l.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|l| l.operation.len() + l.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for l in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&l.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(l.date.clone());

            let plain = if l.target.is_empty() {
                l.operation.clone()
            } else {
                format!("{} ({})", l.operation, l.target)
            };
            let plain = truncate_visible(&plain, OP_WIDTH_MAX);

            // only the operation word is coloured
            let color = color_for_operation(&l.operation);
            let colored = match plain.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(plain.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                l.id,
                date,
                colored,
                padding,
                l.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
