mod common;

use common::{entry, record};
use hirebill::config::EarningsConfig;
use hirebill::core::calculator::earnings::{
    SetBonusContext, amount_owed, average_per_owner, combined_total, entry_outstanding,
    hour_log_entry_total, moes_summary_total, round2, work_record_hours, work_record_total,
};
use hirebill::models::hour_log_entry::HourLogEntry;
use hirebill::models::payment_status::PaymentStatus;
use hirebill::models::time_value::TimeValue;

fn scenario_entry() -> HourLogEntry {
    let mut e = entry("e1", "cand-1", "2025-01-20", 2.0, 10.0);
    e.break_hours = 0.5;
    e.sets_added = 3;
    e
}

#[test]
fn entry_total_depends_on_the_bonus_context() {
    let cfg = EarningsConfig::default();
    let e = scenario_entry();

    let on_entry = hour_log_entry_total(&e, SetBonusContext::EntryCreation.bonus(&cfg));
    let in_summary = hour_log_entry_total(&e, SetBonusContext::Summary.bonus(&cfg));

    assert_eq!(round2(on_entry), 40.00);
    assert_eq!(round2(in_summary), 85.00);
}

#[test]
fn default_bonuses() {
    let cfg = EarningsConfig::default();
    assert_eq!(cfg.per_set_bonus_entry_creation, 5.0);
    assert_eq!(cfg.per_set_bonus_summary, 20.0);
    assert_eq!(cfg.work_record_set_bonus, 20.0);
    assert_eq!(cfg.moes_hour_rate, 2.0);
    assert_eq!(cfg.moes_set_bonus, 5.0);
}

#[test]
fn work_record_and_combined_totals() {
    let cfg = EarningsConfig::default();
    let mut r = record("r1", "cand-1", "2025-01-20", PaymentStatus::Pending);
    r.talk_time = TimeValue::text("01:30:00");
    r.wait_time = TimeValue::minutes(0.0);
    r.sets_added = 2;
    r.moes_total = 10.0;

    assert_eq!(work_record_hours(&r), 1.5);
    assert_eq!(round2(work_record_total(&r, cfg.work_record_set_bonus)), 62.50);
    assert_eq!(round2(combined_total(&r, cfg.work_record_set_bonus)), 72.50);
}

#[test]
fn work_record_hours_mix_numeric_and_text_fields() {
    let mut r = record("r1", "cand-1", "2025-01-20", PaymentStatus::Pending);
    r.talk_time = TimeValue::minutes(30.0);
    r.wait_time = TimeValue::text("00:15:00");
    r.break_minutes = TimeValue::text("garbage");
    r.meeting_minutes = TimeValue::minutes(15.0);
    assert_eq!(work_record_hours(&r), 1.0);
}

#[test]
fn moes_summary_is_a_flat_fee() {
    let cfg = EarningsConfig::default();
    assert_eq!(moes_summary_total(2.0, 3, &cfg), 19.0);
    assert_eq!(moes_summary_total(0.0, 0, &cfg), 0.0);
}

#[test]
fn average_never_divides_by_zero() {
    assert_eq!(average_per_owner(100.0, 0), 100.0);
    assert_eq!(average_per_owner(100.0, 4), 25.0);
}

#[test]
fn outstanding_never_goes_negative() {
    let mut e = scenario_entry();
    e.balance_paid = 30.0;
    assert_eq!(entry_outstanding(&e, 5.0), 10.0);

    e.balance_paid = 100.0;
    assert_eq!(entry_outstanding(&e, 5.0), 0.0);
}

#[test]
fn amount_owed_sums_the_open_balances() {
    let a = scenario_entry();
    let mut b = entry("e2", "cand-1", "2025-01-21", 1.0, 10.0);
    b.balance_paid = 4.0;
    assert_eq!(amount_owed([&a, &b], 5.0), 46.0);
    assert_eq!(amount_owed(Vec::<&HourLogEntry>::new(), 5.0), 0.0);
}

#[test]
fn rounding_keeps_two_decimals() {
    assert_eq!(round2(62.5), 62.5);
    assert_eq!(round2(2.344), 2.34);
    assert_eq!(round2(2.346), 2.35);
}
