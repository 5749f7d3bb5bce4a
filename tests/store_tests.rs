mod common;

use chrono::NaiveDate;
use common::{batched, record, seeded_memory_pool};
use hirebill::config::Config;
use hirebill::core::calculator::filter::PaymentView;
use hirebill::core::entry::{EntryLogic, NewEntry};
use hirebill::core::logic::Core;
use hirebill::core::payment::PaymentLogic;
use hirebill::db::migrate::{pending_migrations, run_pending_migrations};
use hirebill::db::pool::DbPool;
use hirebill::db::queries::insert_work_record;
use hirebill::db::store::RecordStore;
use hirebill::errors::{AppError, AppResult};
use hirebill::models::candidate::{Candidate, CumulativeCounters};
use hirebill::models::hour_log_entry::{HourLogEntry, HourLogEntryPatch};
use hirebill::models::payment_status::PaymentStatus;
use hirebill::models::period::PeriodKind;
use hirebill::models::time_value::TimeValue;
use hirebill::models::work_record::WorkRecord;

fn new_entry(candidate: &str, date: &str, hours: f64, sets: i64) -> NewEntry {
    NewEntry {
        candidate_id: candidate.into(),
        entry_date: date.into(),
        hours_added: hours,
        sets_added: sets,
        ..Default::default()
    }
}

fn counters_of(pool: &DbPool, id: &str) -> CumulativeCounters {
    pool.candidate(id).expect("candidate").counters()
}

fn jan20() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 20).expect("date")
}

fn test_config() -> Config {
    Config::with_database(":memory:".into())
}

/// Delegates to SQLite but refuses every candidate counter update.
struct CounterWriteFails(DbPool);

impl RecordStore for CounterWriteFails {
    fn candidate(&self, id: &str) -> AppResult<Candidate> {
        self.0.candidate(id)
    }
    fn candidates(&self) -> AppResult<Vec<Candidate>> {
        self.0.candidates()
    }
    fn update_candidate_counters(
        &self,
        _id: &str,
        _counters: CumulativeCounters,
        _rate: Option<f64>,
    ) -> AppResult<()> {
        Err(AppError::Other("store offline".into()))
    }
    fn hour_log_entry(&self, id: &str) -> AppResult<HourLogEntry> {
        self.0.hour_log_entry(id)
    }
    fn hour_log_entries(&self) -> AppResult<Vec<HourLogEntry>> {
        self.0.hour_log_entries()
    }
    fn insert_hour_log_entry(&self, entry: &HourLogEntry) -> AppResult<()> {
        self.0.insert_hour_log_entry(entry)
    }
    fn update_hour_log_entry(&self, entry: &HourLogEntry) -> AppResult<()> {
        self.0.update_hour_log_entry(entry)
    }
    fn delete_hour_log_entry(&self, id: &str) -> AppResult<()> {
        self.0.delete_hour_log_entry(id)
    }
    fn set_balance_paid(&self, id: &str, balance: f64) -> AppResult<()> {
        self.0.set_balance_paid(id, balance)
    }
    fn work_records(&self) -> AppResult<Vec<WorkRecord>> {
        self.0.work_records()
    }
    fn set_payment_status(&self, id: &str, status: PaymentStatus) -> AppResult<bool> {
        self.0.set_payment_status(id, status)
    }
    fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.0.log(operation, target, message)
    }
}

#[test]
fn migrations_run_once() {
    let pool = seeded_memory_pool();
    assert!(pending_migrations(&pool.conn).expect("pending").is_empty());
    assert_eq!(run_pending_migrations(&pool.conn).expect("rerun"), 0);
}

#[test]
fn fresh_database_has_every_migration_pending() {
    let pool = DbPool::in_memory().expect("db");
    let pending = pending_migrations(&pool.conn).expect("pending");
    assert_eq!(pending.len(), 5);
    assert_eq!(run_pending_migrations(&pool.conn).expect("run"), 5);
}

#[test]
fn create_updates_counters_and_snapshots() {
    let pool = seeded_memory_pool();

    let mut input = new_entry("cand-1", "2025-01-20", 2.0, 3);
    input.break_hours = 0.5;
    input.meetings_hours = 0.3; // snapped to 0
    let e = EntryLogic::create(&pool, input).expect("create");

    assert_eq!(e.rate_per_hour, 10.0);
    assert_eq!(e.break_hours, 0.5);
    assert_eq!(e.meetings_hours, 0.0);
    assert_eq!(e.active_hours, 2.5);
    assert_eq!(e.number_of_sets, 3);

    let stored = pool.hour_log_entry(&e.id).expect("stored");
    assert_eq!(stored, e);
    assert_eq!(
        counters_of(&pool, "cand-1"),
        CumulativeCounters {
            active_hours: e.active_hours,
            number_of_sets: e.number_of_sets
        }
    );
}

#[test]
fn explicit_rate_becomes_the_candidate_rate() {
    let pool = seeded_memory_pool();
    let mut input = new_entry("cand-1", "2025-01-20", 1.0, 0);
    input.rate_per_hour = Some(18.0);
    EntryLogic::create(&pool, input).expect("create");
    assert_eq!(pool.candidate("cand-1").expect("c").rate_per_hour, 18.0);
}

#[test]
fn invalid_entries_are_rejected_before_any_write() {
    let pool = seeded_memory_pool();

    let err = EntryLogic::create(&pool, new_entry("cand-1", "2025-01-20", -1.0, 0))
        .expect_err("negative hours");
    assert!(matches!(err, AppError::Validation(_)));

    let err = EntryLogic::create(&pool, new_entry("ghost", "2025-01-20", 1.0, 0))
        .expect_err("unknown candidate");
    assert!(matches!(err, AppError::NotFound { .. }));

    assert!(pool.hour_log_entries().expect("list").is_empty());
}

#[test]
fn edit_moves_counters_by_the_delta() {
    let pool = seeded_memory_pool();
    let e = EntryLogic::create(&pool, new_entry("cand-1", "2025-01-20", 2.0, 3)).expect("create");

    let patch = HourLogEntryPatch {
        hours_added: Some(3.5),
        sets_added: Some(1),
        ..Default::default()
    };
    let edited = EntryLogic::edit(&pool, &e.id, &patch).expect("edit");

    assert_eq!(edited.hours_added, 3.5);
    assert_eq!(
        counters_of(&pool, "cand-1"),
        CumulativeCounters {
            active_hours: 3.5,
            number_of_sets: 1
        }
    );
}

#[test]
fn notes_only_edit_leaves_counters_alone() {
    let pool = seeded_memory_pool();
    let e = EntryLogic::create(&pool, new_entry("cand-2", "2025-01-20", 2.0, 0)).expect("create");
    let before = counters_of(&pool, "cand-2");

    let patch = HourLogEntryPatch {
        notes: Some("late start".into()),
        ..Default::default()
    };
    let edited = EntryLogic::edit(&pool, &e.id, &patch).expect("edit");

    assert_eq!(edited.notes.as_deref(), Some("late start"));
    assert_eq!(counters_of(&pool, "cand-2"), before);
}

#[test]
fn create_then_delete_round_trips() {
    let pool = seeded_memory_pool();
    EntryLogic::create(&pool, new_entry("cand-1", "2025-01-10", 1.25, 2)).expect("first");
    let before = counters_of(&pool, "cand-1");

    let e = EntryLogic::create(&pool, new_entry("cand-1", "2025-01-20", 4.0, 5)).expect("create");
    EntryLogic::delete(&pool, &e.id).expect("delete");

    assert_eq!(counters_of(&pool, "cand-1"), before);
    assert!(matches!(
        pool.hour_log_entry(&e.id),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn failing_counter_update_is_a_partial_write() {
    let pool = seeded_memory_pool();
    let store = CounterWriteFails(pool);

    let err = EntryLogic::create(&store, new_entry("cand-1", "2025-01-20", 2.0, 1))
        .expect_err("partial");
    assert!(err.is_partial_write());

    // the entry itself is kept, the counters are not
    let entries = store.hour_log_entries().expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(counters_of(&store.0, "cand-1"), CumulativeCounters::default());

    let AppError::PartialWrite { entry_id, .. } = err else {
        panic!("expected a partial write");
    };
    assert_eq!(entry_id, entries[0].id);
}

fn seed_records(pool: &DbPool) {
    let mut r1 = batched(record("r1", "cand-1", "2025-01-05", PaymentStatus::Pending), "B");
    r1.talk_time = TimeValue::text("01:30:00");
    r1.sets_added = 2;
    r1.moes_total = 10.0;

    let records = vec![
        r1,
        batched(record("r2", "cand-2", "2025-01-06", PaymentStatus::Pending), "B"),
        record("r3", "cand-2", "2025-01-07", PaymentStatus::Pending),
        record("r4", "cand-3", "2025-01-07", PaymentStatus::Pending),
        record("r5", "cand-1", "2025-01-08", PaymentStatus::Archived),
    ];
    for r in &records {
        insert_work_record(&pool.conn, r).expect("insert record");
    }
}

#[test]
fn time_values_keep_their_shape_in_sqlite() {
    let pool = seeded_memory_pool();
    seed_records(&pool);

    let all = pool.work_records().expect("records");
    let r1 = all.iter().find(|r| r.id == "r1").expect("r1");
    let r2 = all.iter().find(|r| r.id == "r2").expect("r2");

    assert_eq!(r1.talk_time, TimeValue::text("01:30:00"));
    assert_eq!(r2.talk_time, TimeValue::minutes(60.0));
    assert_eq!(r2.wait_time, TimeValue::Missing);
}

#[test]
fn dirty_rows_are_read_leniently() {
    let pool = seeded_memory_pool();
    seed_records(&pool);
    pool.conn
        .execute(
            "UPDATE work_records SET payment_status = 'unpaid', rate_per_hour = 'n/a' WHERE id = 'r3'",
            [],
        )
        .expect("dirty update");

    let r3 = pool
        .work_records()
        .expect("records")
        .into_iter()
        .find(|r| r.id == "r3")
        .expect("r3");
    assert_eq!(r3.payment_status, PaymentStatus::Pending);
    assert_eq!(r3.rate_per_hour, 0.0);
}

#[test]
fn store_mark_as_paid_follows_batches() {
    let pool = seeded_memory_pool();
    seed_records(&pool);

    let outcome = PaymentLogic::mark_as_paid(&pool, &["r1".to_string()]).expect("paid");
    assert_eq!(outcome.updated, vec!["r1".to_string(), "r2".to_string()]);
    assert_eq!(outcome.batch_mates, 1);

    for r in &outcome.records {
        let expected = match r.id.as_str() {
            "r1" | "r2" => PaymentStatus::Paid,
            "r5" => PaymentStatus::Archived,
            _ => PaymentStatus::Pending,
        };
        assert_eq!(r.payment_status, expected, "{}", r.id);
    }

    let err = PaymentLogic::mark_as_paid(&pool, &[]).expect_err("empty");
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn batch_mates_ignore_duplicate_and_unknown_ids() {
    let pool = seeded_memory_pool();
    seed_records(&pool);

    let ids: Vec<String> = ["r1", "r3", "r1", "ghost", "r3"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let outcome = PaymentLogic::mark_as_paid(&pool, &ids).expect("paid");

    assert_eq!(
        outcome.updated,
        vec!["r1".to_string(), "r3".to_string(), "r2".to_string()]
    );
    assert_eq!(outcome.batch_mates, 1);
}

#[test]
fn client_views_after_payment() {
    let pool = seeded_memory_pool();
    seed_records(&pool);
    let cfg = test_config();

    let unpaid = Core::client_records(&pool, "client-1", PeriodKind::Month, jan20(), PaymentView::Unpaid)
        .expect("unpaid");
    assert_eq!(unpaid.len(), 3);

    PaymentLogic::mark_as_paid(&pool, &["r1".to_string()]).expect("paid");

    let totals = Core::client_payment(&pool, &cfg, "client-1", PeriodKind::Month, jan20(), PaymentView::Paid)
        .expect("totals");
    // r1: 1.5h * 15 + 2 * 20 = 62.50, plus moes 10; r2: 1h * 15 = 15
    assert_eq!(totals.total, 77.5);
    assert_eq!(totals.moes_total, 10.0);
    assert_eq!(totals.combined_total, 87.5);

    let unpaid = Core::client_records(&pool, "client-1", PeriodKind::Month, jan20(), PaymentView::Unpaid)
        .expect("unpaid");
    let ids: Vec<&str> = unpaid.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3"]);
}

#[test]
fn record_and_clear_payments() {
    let pool = seeded_memory_pool();
    let a = EntryLogic::create(&pool, new_entry("cand-1", "2025-01-02", 2.0, 0)).expect("a");
    let b = EntryLogic::create(&pool, new_entry("cand-1", "2025-01-09", 1.0, 0)).expect("b");
    let ids = vec![b.id.clone(), a.id.clone()];

    let updates = PaymentLogic::record_payment(&pool, &ids, 25.0, 20.0).expect("pay");
    assert_eq!(updates.len(), 2);
    assert_eq!(pool.hour_log_entry(&a.id).expect("a").balance_paid, 20.0);
    assert_eq!(pool.hour_log_entry(&b.id).expect("b").balance_paid, 5.0);

    let err = PaymentLogic::record_payment(&pool, &ids, 5.01, 20.0).expect_err("over");
    assert!(matches!(err, AppError::Validation(_)));

    let cleared = PaymentLogic::clear_payments(&pool, &[a.id.clone(), "ghost".into()])
        .expect("clear");
    assert_eq!(cleared, 1);
    assert_eq!(pool.hour_log_entry(&a.id).expect("a").balance_paid, 0.0);
    assert_eq!(pool.hour_log_entry(&b.id).expect("b").balance_paid, 5.0);
}

#[test]
fn hour_log_summary_uses_the_summary_bonus() {
    let pool = seeded_memory_pool();
    let cfg = test_config();

    let mut input = new_entry("cand-1", "2025-01-20", 2.0, 3);
    input.break_hours = 0.5;
    EntryLogic::create(&pool, input).expect("create");
    EntryLogic::create(&pool, new_entry("cand-2", "2025-02-03", 1.0, 0)).expect("february");

    let s = Core::hour_log_summary(&pool, &cfg, PeriodKind::Month, jan20(), None).expect("summary");
    assert_eq!(s.record_count, 1);
    assert_eq!(s.total_earnings, 85.0);
    assert_eq!(s.category_minutes("hours"), 120.0);
    assert_eq!(s.category_minutes("break"), 30.0);
    assert_eq!(s.period_label, "Month - 01/20/2025");

    let only = Core::hour_log_summary(&pool, &cfg, PeriodKind::Month, jan20(), Some("cand-2"))
        .expect("summary");
    assert!(only.is_empty());
}

#[test]
fn moes_summary_covers_every_employee() {
    let pool = seeded_memory_pool();
    seed_records(&pool);
    let cfg = test_config();

    let m = Core::moes(&pool, &cfg, PeriodKind::Month, jan20()).expect("moes");
    // five records, 1.5h + 4 * 1h, two sets
    assert_eq!(m.record_count, 5);
    assert_eq!(m.total_billable_hours, 5.5);
    assert_eq!(m.total_sets, 2);
    assert_eq!(m.moes_total, 5.5 * 2.0 + 2.0 * 5.0);
}
