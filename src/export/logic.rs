use crate::config::Config;
use crate::core::calculator::filter::PaymentView;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::summary_rows;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportKind};
use crate::models::period::PeriodKind;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Everything `export` needs besides the store.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub format: ExportFormat,
    pub file: String,
    pub period: PeriodKind,
    pub reference: NaiveDate,
    pub candidate: Option<String>,
    pub client: Option<String>,
    pub paid: bool,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Build the requested summary and write it. Returns the written path,
    /// or `None` when there was nothing to export.
    pub fn export(pool: &DbPool, cfg: &Config, req: &ExportRequest) -> AppResult<Option<PathBuf>> {
        let path = absolute_output(&req.file)?;

        let summary = match req.kind {
            ExportKind::Hours => Core::hour_log_summary(
                pool,
                cfg,
                req.period,
                req.reference,
                req.candidate.as_deref(),
            )?,
            ExportKind::Records => {
                let client = req.client.as_deref().ok_or_else(|| {
                    AppError::Validation("--client is required for record exports".into())
                })?;
                Core::work_record_summary(
                    pool,
                    cfg,
                    client,
                    req.period,
                    req.reference,
                    PaymentView::from_paid_flag(req.paid),
                )?
            }
        };

        if summary.is_empty() {
            warning(format!(
                "No data found for {}. Nothing exported.",
                summary.period_label
            ));
            return Ok(None);
        }

        ensure_writable(&path, req.force)?;

        let rows = summary_rows(&summary);
        match req.format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&summary, &path)?,
            ExportFormat::Xlsx => export_xlsx(&summary, &rows, &path)?,
        }

        let _ = ttlog(
            &pool.conn,
            "export",
            req.format.as_str(),
            &format!("{} → {}", summary.period_label, path.display()),
        );

        Ok(Some(path))
    }
}
