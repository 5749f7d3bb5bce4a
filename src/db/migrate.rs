use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Versioned schema step. Applied versions are recorded in the `log` table
/// as `migration_applied` rows.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> rusqlite::Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_clients_candidates",
        description: "Created clients and candidates tables",
        apply: create_clients_candidates,
    },
    Migration {
        version: "20250301_0002_create_hour_log_entries",
        description: "Created hour_log_entries table",
        apply: create_hour_log_entries,
    },
    Migration {
        version: "20250301_0003_create_work_records",
        description: "Created work_records table",
        apply: create_work_records,
    },
    Migration {
        version: "20250318_0004_entry_breaks_and_balance",
        description: "Added break_hours, meetings_hours, balance_paid to hour_log_entries",
        apply: add_entry_breaks_and_balance,
    },
    Migration {
        version: "20250402_0005_work_record_payment_batch",
        description: "Added payment_batch_id to work_records",
        apply: add_payment_batch,
    },
];

/// Ensure that the `log` table exists. It also tracks applied migrations,
/// so it is created outside the versioned steps.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_clients_candidates(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS candidates (
            id              TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            alias           TEXT,
            client_id       TEXT,
            rate_per_hour   REAL NOT NULL DEFAULT 0,
            active_hours    REAL NOT NULL DEFAULT 0,
            number_of_sets  INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_candidates_client ON candidates(client_id);
        "#,
    )
}

fn create_hour_log_entries(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS hour_log_entries (
            id              TEXT PRIMARY KEY,
            candidate_id    TEXT NOT NULL,
            entry_date      TEXT NOT NULL,
            hours_added     REAL NOT NULL DEFAULT 0,
            rate_per_hour   REAL NOT NULL DEFAULT 0,
            active_hours    REAL NOT NULL DEFAULT 0,
            number_of_sets  INTEGER NOT NULL DEFAULT 0,
            sets_added      INTEGER NOT NULL DEFAULT 0,
            notes           TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_entries_candidate ON hour_log_entries(candidate_id, entry_date);
        "#,
    )
}

// Time columns are declared without a type: values keep their storage
// class, so minutes (REAL) and "HH:MM:SS" (TEXT) both survive.
fn create_work_records(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_records (
            id               TEXT PRIMARY KEY,
            employee_id      TEXT NOT NULL,
            date             TEXT NOT NULL,
            talk_time,
            wait_time,
            break_minutes,
            meeting_minutes,
            rate_per_hour    REAL NOT NULL DEFAULT 0,
            sets_added       INTEGER NOT NULL DEFAULT 0,
            moes_total       REAL NOT NULL DEFAULT 0,
            payment_status   TEXT NOT NULL DEFAULT 'pending',
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_employee ON work_records(employee_id, date);
        "#,
    )
}

fn has_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn add_entry_breaks_and_balance(conn: &Connection) -> rusqlite::Result<()> {
    for (col, ddl) in [
        ("break_hours", "REAL NOT NULL DEFAULT 0"),
        ("meetings_hours", "REAL NOT NULL DEFAULT 0"),
        ("balance_paid", "REAL NOT NULL DEFAULT 0"),
    ] {
        if !has_column(conn, "hour_log_entries", col)? {
            conn.execute_batch(&format!(
                "ALTER TABLE hour_log_entries ADD COLUMN {} {};",
                col, ddl
            ))?;
        }
    }
    Ok(())
}

fn add_payment_batch(conn: &Connection) -> rusqlite::Result<()> {
    if !has_column(conn, "work_records", "payment_batch_id")? {
        conn.execute_batch("ALTER TABLE work_records ADD COLUMN payment_batch_id TEXT;")?;
    }
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_records_batch ON work_records(payment_batch_id);",
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet recorded in the log.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations in order.
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        (m.apply)(conn)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;

        success(format!("Migration applied: {}", m.version));
        applied += 1;
    }

    Ok(applied)
}
