use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::filter::PaymentView;
use crate::core::logic::Core;
use crate::core::payment::PaymentLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Paid {
        ids,
        client,
        period,
    } = cmd
    {
        let pool = super::open_store(cfg)?;

        let mut targets = ids.clone();
        if let Some(c) = client {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let unpaid = Core::client_records(&pool, c, kind, reference, PaymentView::Unpaid)?;
            targets.extend(unpaid.into_iter().map(|r| r.id));
        }

        let outcome = PaymentLogic::mark_as_paid(&pool, &targets)?;

        if outcome.batch_mates > 0 {
            info(format!(
                "{} additional record(s) included through payment batches.",
                outcome.batch_mates
            ));
        }
        success(format!(
            "{} record(s) marked as paid.",
            outcome.updated.len()
        ));

        let pending = outcome
            .records
            .iter()
            .filter(|r| r.payment_status.is_pending())
            .count();
        info(format!("{} record(s) still pending.", pending));
    }

    Ok(())
}
