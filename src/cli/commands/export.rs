use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        period,
        candidate,
        client,
        paid,
        force,
    } = cmd
    {
        let pool = super::open_store(cfg)?;
        let (period_kind, reference) = super::resolve_period_args(period, cfg)?;

        let req = ExportRequest {
            kind: *kind,
            format: *format,
            file: file.clone(),
            period: period_kind,
            reference,
            candidate: candidate.clone(),
            client: client.clone(),
            paid: *paid,
            force: *force,
        };
        ExportLogic::export(&pool, cfg, &req)?;
    }
    Ok(())
}
