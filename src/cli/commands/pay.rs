use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::earnings::amount_owed;
use crate::core::logic::Core;
use crate::core::payment::PaymentLogic;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{money, short_id};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay {
        client,
        amount,
        clear,
        period,
    } = cmd
    {
        let pool = super::open_store(cfg)?;
        let cur = cfg.currency_symbol.as_str();

        if !clear.is_empty() {
            let n = PaymentLogic::clear_payments(&pool, clear)?;
            success(format!("Cleared recorded payments on {} entr(y/ies).", n));
            return Ok(());
        }

        let client = client.as_ref().ok_or_else(|| {
            AppError::Validation("Use --client with --amount, or --clear <ids>".into())
        })?;

        let owners = Core::client_owner_ids(&pool.candidates()?, client);
        let (kind, reference) = super::resolve_period_args(period, cfg)?;
        let entries = Core::entries_in_period(&pool, kind, reference, Some(&owners))?;
        let owed = amount_owed(&entries, cfg.per_set_bonus_summary);

        let Some(raw) = amount else {
            info(format!("Amount owed: {}", money(owed, cur)));
            return Ok(());
        };

        // unparseable input is rejected by the payment validation
        let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        let ids: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();

        let updates = PaymentLogic::record_payment(&pool, &ids, value, cfg.per_set_bonus_summary)?;

        for u in &updates {
            println!(
                "  {}  +{}  → {}",
                short_id(&u.entry_id),
                money(u.amount_applied, cur),
                money(u.new_balance, cur)
            );
        }
        success(format!(
            "Payment of {} recorded. Remaining owed: {}",
            money(value, cur),
            money((owed - value).max(0.0), cur)
        ));
    }

    Ok(())
}
