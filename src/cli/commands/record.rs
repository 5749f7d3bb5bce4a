use crate::cli::parser::{Commands, RecordAction};
use crate::config::Config;
use crate::core::calculator::earnings::{combined_total, work_record_hours};
use crate::core::calculator::filter::PaymentView;
use crate::core::calculator::normalize::normalize_to_minutes;
use crate::core::calculator::period::period_label;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::queries::insert_work_record;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::payment_status::PaymentStatus;
use crate::models::time_value::TimeValue;
use crate::models::work_record::WorkRecord;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{money, short_id};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes_hhmm;

fn time_arg(raw: &Option<String>) -> TimeValue {
    raw.as_deref().map(TimeValue::from_input).unwrap_or_default()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Record { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_store(cfg)?;

    match action {
        RecordAction::Add {
            employee,
            date,
            talk,
            wait,
            break_time,
            meeting,
            rate,
            sets,
            moes,
            batch,
            status,
        } => {
            let candidate = pool.candidate(employee)?;

            let status = match status {
                Some(s) => PaymentStatus::from_db_str(s).ok_or_else(|| {
                    AppError::Validation(format!(
                        "Invalid status '{}'. Use pending, unpaid, paid or archived.",
                        s
                    ))
                })?,
                None => PaymentStatus::Pending,
            };

            let mut rec = WorkRecord::new(
                uuid::Uuid::new_v4().to_string(),
                candidate.id.clone(),
                super::reference_date(date.as_ref())?
                    .format("%Y-%m-%d")
                    .to_string(),
                rate.unwrap_or(candidate.rate_per_hour),
            );
            rec.talk_time = time_arg(talk);
            rec.wait_time = time_arg(wait);
            rec.break_minutes = time_arg(break_time);
            rec.meeting_minutes = time_arg(meeting);
            rec.sets_added = *sets;
            rec.moes_total = *moes;
            rec.payment_status = status;
            rec.payment_batch_id = batch.clone().filter(|b| !b.trim().is_empty());

            insert_work_record(&pool.conn, &rec)?;
            let _ = ttlog(&pool.conn, "record_add", &rec.id, &candidate.name);

            success(format!(
                "Work record {} added: {} ({} incl. Moe's).",
                rec.id,
                format_minutes_hhmm(work_record_hours(&rec) * 60.0),
                money(
                    combined_total(&rec, cfg.work_record_set_bonus),
                    &cfg.currency_symbol
                )
            ));
        }

        RecordAction::List {
            client,
            paid,
            period,
        } => {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let view = PaymentView::from_paid_flag(*paid);
            let records = Core::client_records(&pool, client, kind, reference, view)?;

            if records.is_empty() {
                info(format!("No records for {}.", period_label(kind, reference)));
                return Ok(());
            }

            let names = Core::owner_names(&pool.candidates()?);
            let cur = cfg.currency_symbol.as_str();

            let mut table = Table::new(vec![
                Column::new("ID", 8),
                Column::new("DATE", 10),
                Column::new("EMPLOYEE", 18),
                Column::new("TALK", 6),
                Column::new("WAIT", 6),
                Column::new("BRK", 6),
                Column::new("MTG", 6),
                Column::new("SETS", 4),
                Column::new("TOTAL", 10),
                Column::new("STATUS", 8),
                Column::new("BATCH", 8),
            ]);

            for r in &records {
                let status = r.payment_status.to_db_str();
                table.add_row(vec![
                    short_id(&r.id),
                    r.date.chars().take(10).collect(),
                    crate::core::calculator::summary::owner_name(&names, &r.employee_id),
                    format_minutes_hhmm(normalize_to_minutes(&r.talk_time)),
                    format_minutes_hhmm(normalize_to_minutes(&r.wait_time)),
                    format_minutes_hhmm(normalize_to_minutes(&r.break_minutes)),
                    format_minutes_hhmm(normalize_to_minutes(&r.meeting_minutes)),
                    r.sets_added.to_string(),
                    money(combined_total(r, cfg.work_record_set_bonus), cur),
                    format!("{}{}{}", color_for_status(status), status, RESET),
                    r.batch_id().unwrap_or("").to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
