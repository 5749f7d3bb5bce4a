use crate::errors::{AppError, AppResult};
use crate::models::candidate::{Candidate, CumulativeCounters};
use crate::models::client::Client;
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::payment_status::PaymentStatus;
use crate::models::work_record::WorkRecord;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Lenient column readers
// ---------------------------

/// Numeric column that may hold dirty data: NULL or unparseable text → 0.
fn num(row: &Row, col: &str) -> Result<f64> {
    Ok(match row.get_ref(col)? {
        ValueRef::Integer(i) => i as f64,
        ValueRef::Real(f) if f.is_finite() => f,
        ValueRef::Text(t) => std::str::from_utf8(t)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|f| f.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    })
}

fn int(row: &Row, col: &str) -> Result<i64> {
    Ok(num(row, col)?.trunc() as i64)
}

// ---------------------------
// Clients
// ---------------------------

pub fn map_client(row: &Row) -> Result<Client> {
    Ok(Client {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_client(conn: &Connection, c: &Client) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clients (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![c.id, c.name, c.created_at],
    )?;
    Ok(())
}

pub fn list_clients(conn: &Connection) -> AppResult<Vec<Client>> {
    let mut stmt = conn.prepare("SELECT * FROM clients ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_client)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn load_client(conn: &Connection, id: &str) -> AppResult<Client> {
    conn.query_row("SELECT * FROM clients WHERE id = ?1", [id], map_client)
        .optional()?
        .ok_or_else(|| AppError::not_found("Client", id))
}

// ---------------------------
// Candidates
// ---------------------------

pub fn map_candidate(row: &Row) -> Result<Candidate> {
    Ok(Candidate {
        id: row.get("id")?,
        name: row.get("name")?,
        alias: row.get("alias")?,
        client_id: row.get("client_id")?,
        rate_per_hour: num(row, "rate_per_hour")?,
        active_hours: num(row, "active_hours")?,
        number_of_sets: int(row, "number_of_sets")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_candidate(conn: &Connection, c: &Candidate) -> AppResult<()> {
    conn.execute(
        "INSERT INTO candidates (id, name, alias, client_id, rate_per_hour, active_hours, number_of_sets, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            c.id,
            c.name,
            c.alias,
            c.client_id,
            c.rate_per_hour,
            c.active_hours,
            c.number_of_sets,
            c.created_at,
        ],
    )?;
    Ok(())
}

pub fn list_candidates(conn: &Connection) -> AppResult<Vec<Candidate>> {
    let mut stmt = conn.prepare("SELECT * FROM candidates ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_candidate)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn load_candidate(conn: &Connection, id: &str) -> AppResult<Candidate> {
    conn.query_row("SELECT * FROM candidates WHERE id = ?1", [id], map_candidate)
        .optional()?
        .ok_or_else(|| AppError::not_found("Candidate", id))
}

/// Write the cumulative counters, and the rate when given.
pub fn update_candidate_counters(
    conn: &Connection,
    id: &str,
    counters: CumulativeCounters,
    rate: Option<f64>,
) -> AppResult<()> {
    let changed = match rate {
        Some(r) => conn.execute(
            "UPDATE candidates SET active_hours = ?1, number_of_sets = ?2, rate_per_hour = ?3
             WHERE id = ?4",
            params![counters.active_hours, counters.number_of_sets, r, id],
        )?,
        None => conn.execute(
            "UPDATE candidates SET active_hours = ?1, number_of_sets = ?2 WHERE id = ?3",
            params![counters.active_hours, counters.number_of_sets, id],
        )?,
    };

    if changed == 0 {
        return Err(AppError::not_found("Candidate", id));
    }
    Ok(())
}

// ---------------------------
// Hour log entries
// ---------------------------

pub fn map_entry(row: &Row) -> Result<HourLogEntry> {
    Ok(HourLogEntry {
        id: row.get("id")?,
        candidate_id: row.get("candidate_id")?,
        entry_date: row.get::<_, Option<String>>("entry_date")?.unwrap_or_default(),
        hours_added: num(row, "hours_added")?,
        rate_per_hour: num(row, "rate_per_hour")?,
        active_hours: num(row, "active_hours")?,
        number_of_sets: int(row, "number_of_sets")?,
        sets_added: int(row, "sets_added")?,
        balance_paid: num(row, "balance_paid")?,
        break_hours: num(row, "break_hours")?,
        meetings_hours: num(row, "meetings_hours")?,
        notes: row.get("notes")?,
    })
}

pub fn insert_entry(conn: &Connection, e: &HourLogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO hour_log_entries
            (id, candidate_id, entry_date, hours_added, rate_per_hour, active_hours,
             number_of_sets, sets_added, balance_paid, break_hours, meetings_hours, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            e.id,
            e.candidate_id,
            e.entry_date,
            e.hours_added,
            e.rate_per_hour,
            e.active_hours,
            e.number_of_sets,
            e.sets_added,
            e.balance_paid,
            e.break_hours,
            e.meetings_hours,
            e.notes,
        ],
    )?;
    Ok(())
}

pub fn update_entry(conn: &Connection, e: &HourLogEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE hour_log_entries SET
            entry_date = ?2, hours_added = ?3, rate_per_hour = ?4, active_hours = ?5,
            number_of_sets = ?6, sets_added = ?7, balance_paid = ?8, break_hours = ?9,
            meetings_hours = ?10, notes = ?11
         WHERE id = ?1",
        params![
            e.id,
            e.entry_date,
            e.hours_added,
            e.rate_per_hour,
            e.active_hours,
            e.number_of_sets,
            e.sets_added,
            e.balance_paid,
            e.break_hours,
            e.meetings_hours,
            e.notes,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::not_found("Hour log entry", &e.id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM hour_log_entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::not_found("Hour log entry", id));
    }
    Ok(())
}

pub fn load_entry(conn: &Connection, id: &str) -> AppResult<HourLogEntry> {
    conn.query_row(
        "SELECT * FROM hour_log_entries WHERE id = ?1",
        [id],
        map_entry,
    )
    .optional()?
    .ok_or_else(|| AppError::not_found("Hour log entry", id))
}

pub fn list_entries(conn: &Connection) -> AppResult<Vec<HourLogEntry>> {
    let mut stmt =
        conn.prepare("SELECT * FROM hour_log_entries ORDER BY entry_date ASC, rowid ASC")?;
    let rows = stmt.query_map([], map_entry)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn update_entry_balance(conn: &Connection, id: &str, balance: f64) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE hour_log_entries SET balance_paid = ?1 WHERE id = ?2",
        params![balance, id],
    )?;
    if changed == 0 {
        return Err(AppError::not_found("Hour log entry", id));
    }
    Ok(())
}

// ---------------------------
// Work records
// ---------------------------

pub fn map_work_record(row: &Row) -> Result<WorkRecord> {
    let status: Option<String> = row.get("payment_status")?;

    Ok(WorkRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date: row.get::<_, Option<String>>("date")?.unwrap_or_default(),
        talk_time: row.get("talk_time")?,
        wait_time: row.get("wait_time")?,
        break_minutes: row.get("break_minutes")?,
        meeting_minutes: row.get("meeting_minutes")?,
        rate_per_hour: num(row, "rate_per_hour")?,
        sets_added: int(row, "sets_added")?,
        moes_total: num(row, "moes_total")?,
        payment_status: PaymentStatus::normalize(status.as_deref()),
        payment_batch_id: row.get("payment_batch_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_work_record(conn: &Connection, r: &WorkRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_records
            (id, employee_id, date, talk_time, wait_time, break_minutes, meeting_minutes,
             rate_per_hour, sets_added, moes_total, payment_status, payment_batch_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            r.id,
            r.employee_id,
            r.date,
            r.talk_time,
            r.wait_time,
            r.break_minutes,
            r.meeting_minutes,
            r.rate_per_hour,
            r.sets_added,
            r.moes_total,
            r.payment_status.to_db_str(),
            r.payment_batch_id,
            r.created_at,
        ],
    )?;
    Ok(())
}

pub fn list_work_records(conn: &Connection) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM work_records ORDER BY date ASC, rowid ASC")?;
    let rows = stmt.query_map([], map_work_record)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

/// Returns false when no row has that id.
pub fn update_payment_status(conn: &Connection, id: &str, status: PaymentStatus) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE work_records SET payment_status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(changed > 0)
}
