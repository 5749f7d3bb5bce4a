#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hirebill::db::initialize::init_db;
use hirebill::db::pool::DbPool;
use hirebill::db::queries::{insert_candidate, insert_client};
use hirebill::models::candidate::Candidate;
use hirebill::models::client::Client;
use hirebill::models::hour_log_entry::HourLogEntry;
use hirebill::models::payment_status::PaymentStatus;
use hirebill::models::time_value::TimeValue;
use hirebill::models::work_record::WorkRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hb() -> Command {
    cargo_bin_cmd!("hirebill")
}

/// Unique test DB path inside the system temp dir, any previous file removed
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hirebill.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two clients; client-1 owns cand-1 (rate 10) and cand-2 (rate 15,
/// alias "Bobby"), client-2 owns cand-3.
pub fn seed(pool: &DbPool) {
    init_db(&pool.conn).expect("init db");

    for (id, name) in [("client-1", "Acme"), ("client-2", "Globex")] {
        insert_client(&pool.conn, &Client::new(id.into(), name.into())).expect("client");
    }

    let c1 = Candidate::new("cand-1".into(), "Alice".into(), Some("client-1".into()), 10.0);
    let mut c2 = Candidate::new("cand-2".into(), "Robert".into(), Some("client-1".into()), 15.0);
    c2.alias = Some("Bobby".into());
    let c3 = Candidate::new("cand-3".into(), "Carol".into(), Some("client-2".into()), 12.0);

    for c in [c1, c2, c3] {
        insert_candidate(&pool.conn, &c).expect("candidate");
    }
}

pub fn seeded_memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    seed(&pool);
    pool
}

/// Seed a file DB for CLI tests.
pub fn seeded_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    seed(&pool);
    db_path
}

pub fn entry(id: &str, candidate: &str, date: &str, hours: f64, rate: f64) -> HourLogEntry {
    HourLogEntry::new(id.into(), candidate.into(), date.into(), hours, rate)
}

pub fn record(id: &str, employee: &str, date: &str, status: PaymentStatus) -> WorkRecord {
    let mut r = WorkRecord::new(id.into(), employee.into(), date.into(), 15.0);
    r.talk_time = TimeValue::minutes(60.0);
    r.payment_status = status;
    r
}

pub fn batched(mut r: WorkRecord, batch: &str) -> WorkRecord {
    r.payment_batch_id = Some(batch.into());
    r
}
