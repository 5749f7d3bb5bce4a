use crate::cli::parser::{Commands, SummaryAction};
use crate::config::Config;
use crate::core::calculator::earnings::{average_per_owner, round2};
use crate::core::calculator::filter::PaymentView;
use crate::core::calculator::period::{period_label, resolve_period};
use crate::core::calculator::summary::{top_by_earnings, top_by_hours};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::summary::BillingSummary;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, hours, money, pad_left};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes_hhmm;

const TOP_N: usize = 3;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Summary { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_store(cfg)?;
    let cur = cfg.currency_symbol.as_str();

    match action {
        SummaryAction::Hours { period, candidate } => {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let summary =
                Core::hour_log_summary(&pool, cfg, kind, reference, candidate.as_deref())?;

            print_breakdown(&summary, cur);
            if summary.is_empty() {
                return Ok(());
            }

            let owed = (summary.total_earnings - summary.total_balance_paid).max(0.0);
            println!("Balance paid: {}", money(summary.total_balance_paid, cur));
            println!("Outstanding:  {}", bold(&money(owed, cur)));
            println!(
                "Average per candidate: {}",
                money(
                    average_per_owner(
                        summary.total_earnings,
                        summary.per_owner_breakdown.len()
                    ),
                    cur
                )
            );

            if summary.per_owner_breakdown.len() > 1 {
                println!("\nTop by earnings:");
                for (i, o) in top_by_earnings(&summary, TOP_N).iter().enumerate() {
                    println!("  {}. {} {}", i + 1, o.name, money(o.earnings, cur));
                }
                println!("Top by hours:");
                for (i, o) in top_by_hours(&summary, TOP_N).iter().enumerate() {
                    println!("  {}. {} {}", i + 1, o.name, hours(o.hours));
                }
            }
        }

        SummaryAction::Records {
            client,
            paid,
            period,
        } => {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let summary = Core::work_record_summary(
                &pool,
                cfg,
                client,
                kind,
                reference,
                PaymentView::from_paid_flag(*paid),
            )?;

            print_breakdown(&summary, cur);
            if !summary.is_empty() {
                for cat in ["talk", "wait", "break", "meeting"] {
                    println!(
                        "{:<8} {}",
                        cat,
                        format_minutes_hhmm(summary.category_minutes(cat))
                    );
                }
            }
        }

        SummaryAction::Moes { period } => {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let moes = Core::moes(&pool, cfg, kind, reference)?;
            let p = resolve_period(kind, reference);

            header(format!("Moe's - {}", period_label(kind, reference)));
            println!(
                "Range:          {} → {}",
                p.start.format("%Y-%m-%d"),
                p.end.format("%Y-%m-%d")
            );
            println!("Records:        {}", moes.record_count);
            println!("Billable hours: {}", hours(moes.total_billable_hours));
            println!("Sets:           {}", moes.total_sets);
            println!(
                "Moe's total:    {}",
                bold(&money(moes.moes_total, cur))
            );
        }

        SummaryAction::Payment {
            client,
            paid,
            period,
        } => {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let totals = Core::client_payment(
                &pool,
                cfg,
                client,
                kind,
                reference,
                PaymentView::from_paid_flag(*paid),
            )?;

            header(format!(
                "{} payments - {}",
                if *paid { "Paid" } else { "Unpaid" },
                period_label(kind, reference)
            ));
            println!("Total:          {}", pad_left(&money(totals.total, cur), 12));
            println!("Moe's:          {}", pad_left(&money(totals.moes_total, cur), 12));
            println!(
                "Combined total: {}",
                bold(&pad_left(&money(totals.combined_total, cur), 12))
            );
        }
    }

    Ok(())
}

fn print_breakdown(summary: &BillingSummary, cur: &str) {
    header(&summary.period_label);

    if summary.is_empty() {
        info("No records in this period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("NAME", 22),
        Column::new("HOURS", 8),
        Column::new("SETS", 5),
        Column::new("RATE", 9),
        Column::new("EARNINGS", 11),
        Column::new("ENTRIES", 7),
    ]);

    for o in &summary.per_owner_breakdown {
        table.add_row(vec![
            o.name.clone(),
            format!("{:.2}", round2(o.hours)),
            o.sets.to_string(),
            money(o.rate, cur),
            money(o.earnings, cur),
            o.entry_count.to_string(),
        ]);
    }
    print!("{}", table.render());

    println!(
        "\nTotal: {} / {} sets / {} over {} record(s)",
        hours(summary.total_minutes() / 60.0),
        summary.total_sets,
        bold(&money(summary.total_earnings, cur)),
        summary.record_count
    );
}
