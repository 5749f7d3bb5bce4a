pub mod backup;
pub mod candidate;
pub mod client;
pub mod config;
pub mod db;
pub mod entry;
pub mod export;
pub mod init;
pub mod log;
pub mod paid;
pub mod pay;
pub mod record;
pub mod summary;

use crate::cli::parser::PeriodArgs;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::period::PeriodKind;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Open the configured database with the schema up to date.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// `--date` (or today) as a calendar date.
pub(crate) fn reference_date(raw: Option<&String>) -> AppResult<NaiveDate> {
    match raw {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

pub(crate) fn resolve_period_args(
    args: &PeriodArgs,
    cfg: &Config,
) -> AppResult<(PeriodKind, NaiveDate)> {
    let kind = args.period.unwrap_or(cfg.default_period);
    let reference = reference_date(args.date.as_ref())?;
    Ok((kind, reference))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
