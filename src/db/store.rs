//! Record store seam used by the write paths (entries, payments).
//!
//! Every call is one independent write or read; there is no transaction
//! spanning several calls.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::candidate::{Candidate, CumulativeCounters};
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::payment_status::PaymentStatus;
use crate::models::work_record::WorkRecord;

pub trait RecordStore {
    fn candidate(&self, id: &str) -> AppResult<Candidate>;
    fn candidates(&self) -> AppResult<Vec<Candidate>>;
    fn update_candidate_counters(
        &self,
        id: &str,
        counters: CumulativeCounters,
        rate: Option<f64>,
    ) -> AppResult<()>;

    fn hour_log_entry(&self, id: &str) -> AppResult<HourLogEntry>;
    fn hour_log_entries(&self) -> AppResult<Vec<HourLogEntry>>;
    fn insert_hour_log_entry(&self, entry: &HourLogEntry) -> AppResult<()>;
    fn update_hour_log_entry(&self, entry: &HourLogEntry) -> AppResult<()>;
    fn delete_hour_log_entry(&self, id: &str) -> AppResult<()>;
    fn set_balance_paid(&self, id: &str, balance: f64) -> AppResult<()>;

    fn work_records(&self) -> AppResult<Vec<WorkRecord>>;
    /// false when the id is unknown
    fn set_payment_status(&self, id: &str, status: PaymentStatus) -> AppResult<bool>;

    /// Audit trail.
    fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

impl RecordStore for DbPool {
    fn candidate(&self, id: &str) -> AppResult<Candidate> {
        queries::load_candidate(&self.conn, id)
    }

    fn candidates(&self) -> AppResult<Vec<Candidate>> {
        queries::list_candidates(&self.conn)
    }

    fn update_candidate_counters(
        &self,
        id: &str,
        counters: CumulativeCounters,
        rate: Option<f64>,
    ) -> AppResult<()> {
        queries::update_candidate_counters(&self.conn, id, counters, rate)
    }

    fn hour_log_entry(&self, id: &str) -> AppResult<HourLogEntry> {
        queries::load_entry(&self.conn, id)
    }

    fn hour_log_entries(&self) -> AppResult<Vec<HourLogEntry>> {
        queries::list_entries(&self.conn)
    }

    fn insert_hour_log_entry(&self, entry: &HourLogEntry) -> AppResult<()> {
        queries::insert_entry(&self.conn, entry)
    }

    fn update_hour_log_entry(&self, entry: &HourLogEntry) -> AppResult<()> {
        queries::update_entry(&self.conn, entry)
    }

    fn delete_hour_log_entry(&self, id: &str) -> AppResult<()> {
        queries::delete_entry(&self.conn, id)
    }

    fn set_balance_paid(&self, id: &str, balance: f64) -> AppResult<()> {
        queries::update_entry_balance(&self.conn, id, balance)
    }

    fn work_records(&self) -> AppResult<Vec<WorkRecord>> {
        queries::list_work_records(&self.conn)
    }

    fn set_payment_status(&self, id: &str, status: PaymentStatus) -> AppResult<bool> {
        queries::update_payment_status(&self.conn, id, status)
    }

    fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
