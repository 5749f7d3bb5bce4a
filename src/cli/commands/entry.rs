use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::core::calculator::earnings::{SetBonusContext, entry_outstanding, hour_log_entry_total};
use crate::core::entry::{EntryLogic, NewEntry};
use crate::core::logic::Core;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::hour_log_entry::{HourLogEntry, HourLogEntryPatch};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_outstanding, colorize_optional};
use crate::utils::formatting::{hours, money, short_id};
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_hours_input;
use std::collections::HashSet;

fn entry_date_arg(raw: Option<&String>) -> AppResult<String> {
    Ok(super::reference_date(raw)?.format("%Y-%m-%d").to_string())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Entry { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_store(cfg)?;
    let earnings = cfg.earnings();
    let cur = cfg.currency_symbol.as_str();

    match action {
        EntryAction::Add {
            candidate,
            hours: hours_raw,
            date,
            rate,
            sets,
            break_hours,
            meetings,
            balance,
            notes,
        } => {
            let input = NewEntry {
                candidate_id: candidate.clone(),
                entry_date: entry_date_arg(date.as_ref())?,
                hours_added: parse_hours_input(hours_raw),
                rate_per_hour: *rate,
                sets_added: *sets,
                balance_paid: *balance,
                break_hours: *break_hours,
                meetings_hours: *meetings,
                notes: notes.clone(),
            };

            if input.break_hours != 0.0 || input.meetings_hours != 0.0 {
                info("Break and meeting hours accept 0.5, 0.75 or 1; other values count as 0.");
            }

            let entry = EntryLogic::create(&pool, input)?;
            let total =
                hour_log_entry_total(&entry, SetBonusContext::EntryCreation.bonus(&earnings));

            success(format!(
                "Entry {} logged: {} ({} total).",
                entry.id,
                hours(entry.billable_hours()),
                money(total, cur)
            ));
            info(format!(
                "Candidate totals: {} / {} sets.",
                hours(entry.active_hours),
                entry.number_of_sets
            ));
        }

        EntryAction::Edit {
            id,
            hours: hours_raw,
            date,
            rate,
            sets,
            break_hours,
            meetings,
            balance,
            notes,
        } => {
            let entry_date = match date {
                Some(_) => Some(entry_date_arg(date.as_ref())?),
                None => None,
            };

            let patch = HourLogEntryPatch {
                entry_date,
                hours_added: hours_raw.as_deref().map(parse_hours_input),
                rate_per_hour: *rate,
                sets_added: *sets,
                balance_paid: *balance,
                break_hours: *break_hours,
                meetings_hours: *meetings,
                notes: notes.clone(),
            };

            let entry = EntryLogic::edit(&pool, id, &patch)?;
            let total =
                hour_log_entry_total(&entry, SetBonusContext::EntryCreation.bonus(&earnings));

            success(format!(
                "Entry {} updated: {} ({} total).",
                entry.id,
                hours(entry.billable_hours()),
                money(total, cur)
            ));
        }

        EntryAction::Del { id, yes } => {
            let entry = pool.hour_log_entry(id)?;

            let prompt = format!(
                "Delete entry {} ({} on {})? This action is irreversible.",
                entry.id,
                hours(entry.hours_added),
                entry.entry_date
            );
            if !*yes && !super::ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            match EntryLogic::delete(&pool, id) {
                Ok(_) => success(format!("Entry {} has been deleted.", id)),
                Err(e) if e.is_partial_write() => {
                    warning("Entry deleted but the candidate totals were not updated.");
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        EntryAction::List { candidate, period } => {
            let (kind, reference) = super::resolve_period_args(period, cfg)?;
            let only: Option<HashSet<String>> =
                candidate.as_ref().map(|c| HashSet::from([c.clone()]));

            let entries = Core::entries_in_period(&pool, kind, reference, only.as_ref())?;
            if entries.is_empty() {
                info(format!(
                    "No entries for {}.",
                    crate::core::calculator::period::period_label(kind, reference)
                ));
                return Ok(());
            }

            let names = Core::owner_names(&pool.candidates()?);
            print_entries(&entries, &names, earnings.per_set_bonus_summary, cur);
        }
    }

    Ok(())
}

fn print_entries(
    entries: &[HourLogEntry],
    names: &std::collections::HashMap<String, String>,
    bonus: f64,
    cur: &str,
) {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("DATE", 10),
        Column::new("CANDIDATE", 18),
        Column::new("HOURS", 7),
        Column::new("BRK", 5),
        Column::new("MTG", 5),
        Column::new("SETS", 4),
        Column::new("RATE", 9),
        Column::new("TOTAL", 10),
        Column::new("PAID", 10),
        Column::new("OWED", 10),
    ]);

    let mut notes: Vec<(String, String)> = Vec::new();

    for e in entries {
        let owed = entry_outstanding(e, bonus);
        let owed_cell = format!(
            "{}{}{}",
            color_for_outstanding(owed),
            money(owed, cur),
            RESET
        );

        table.add_row(vec![
            short_id(&e.id),
            e.entry_date.chars().take(10).collect(),
            names
                .get(&e.candidate_id)
                .cloned()
                .unwrap_or_else(|| short_id(&e.candidate_id)),
            format!("{:.2}", e.hours_added),
            colorize_optional(&format!("{}", e.break_hours)),
            colorize_optional(&format!("{}", e.meetings_hours)),
            e.sets_added.to_string(),
            money(e.rate_per_hour, cur),
            money(hour_log_entry_total(e, bonus), cur),
            colorize_optional(&money(e.balance_paid, cur)),
            owed_cell,
        ]);

        if let Some(n) = e.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            notes.push((short_id(&e.id), n.to_string()));
        }
    }

    print!("{}", table.render());

    if !notes.is_empty() {
        println!("\nNotes:");
        for (id, n) in notes {
            let wrapped = textwrap::fill(&n, textwrap::Options::new(72).subsequent_indent("          "));
            println!("  {:<8} {}", id, wrapped);
        }
    }
}
