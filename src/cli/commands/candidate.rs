use crate::cli::parser::{CandidateAction, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::queries::{insert_candidate, list_candidates, load_client};
use crate::errors::{AppError, AppResult};
use crate::models::candidate::Candidate;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{hours, money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Candidate { action } = cmd {
        let pool = super::open_store(cfg)?;

        match action {
            CandidateAction::Add {
                name,
                client,
                rate,
                alias,
            } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(AppError::Validation(
                        "Candidate name must not be empty".into(),
                    ));
                }
                if !rate.is_finite() || *rate < 0.0 {
                    return Err(AppError::InvalidAmount(format!("rate {}", rate)));
                }
                if let Some(c) = client {
                    load_client(&pool.conn, c)?;
                }

                let mut cand = Candidate::new(
                    uuid::Uuid::new_v4().to_string(),
                    name.to_string(),
                    client.clone(),
                    *rate,
                );
                cand.alias = alias.clone().filter(|a| !a.trim().is_empty());

                insert_candidate(&pool.conn, &cand)?;
                let _ = ttlog(&pool.conn, "candidate_add", &cand.id, &cand.name);

                success(format!("Candidate '{}' added (id {}).", cand.name, cand.id));
            }

            CandidateAction::List { client } => {
                let candidates: Vec<Candidate> = list_candidates(&pool.conn)?
                    .into_iter()
                    .filter(|c| client.is_none() || c.client_id == *client)
                    .collect();

                if candidates.is_empty() {
                    info("No candidates found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("ID", 36),
                    Column::new("NAME", 22),
                    Column::new("RATE", 10),
                    Column::new("HOURS", 10),
                    Column::new("SETS", 6),
                ]);
                for c in candidates {
                    table.add_row(vec![
                        c.id.clone(),
                        c.display_name().to_string(),
                        money(c.rate_per_hour, &cfg.currency_symbol),
                        hours(c.active_hours),
                        c.number_of_sets.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
