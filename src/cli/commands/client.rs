use crate::cli::parser::{ClientAction, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::queries::{insert_client, list_candidates, list_clients};
use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Client { action } = cmd {
        let pool = super::open_store(cfg)?;

        match action {
            ClientAction::Add { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(AppError::Validation("Client name must not be empty".into()));
                }

                let client = Client::new(uuid::Uuid::new_v4().to_string(), name.to_string());
                insert_client(&pool.conn, &client)?;
                let _ = ttlog(&pool.conn, "client_add", &client.id, &client.name);

                success(format!("Client '{}' added (id {}).", client.name, client.id));
            }

            ClientAction::List => {
                let clients = list_clients(&pool.conn)?;
                if clients.is_empty() {
                    info("No clients yet.");
                    return Ok(());
                }

                let candidates = list_candidates(&pool.conn)?;

                let mut table = Table::new(vec![
                    Column::new("ID", 36),
                    Column::new("NAME", 24),
                    Column::new("CANDIDATES", 10),
                ]);
                for c in clients {
                    let n = candidates
                        .iter()
                        .filter(|cand| cand.client_id.as_deref() == Some(c.id.as_str()))
                        .count();
                    table.add_row(vec![c.id, c.name, n.to_string()]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
