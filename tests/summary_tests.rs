mod common;

use common::{entry, record};
use hirebill::core::calculator::summary::{
    client_payment_summary, owner_name, summarize_hour_log, summarize_work_records,
    top_by_earnings, top_by_hours,
};
use hirebill::models::hour_log_entry::HourLogEntry;
use hirebill::models::payment_status::PaymentStatus;
use hirebill::models::time_value::TimeValue;
use hirebill::models::work_record::WorkRecord;
use std::collections::HashMap;

fn names() -> HashMap<String, String> {
    HashMap::from([
        ("cand-1".to_string(), "Alice".to_string()),
        ("cand-2".to_string(), "Bobby".to_string()),
    ])
}

fn entries() -> Vec<HourLogEntry> {
    let mut a = entry("e1", "cand-1", "2025-01-02", 2.0, 10.0);
    a.break_hours = 0.5;
    a.sets_added = 1;
    a.balance_paid = 10.0;

    let b = entry("e2", "cand-2", "2025-01-03", 4.0, 15.0);

    let mut c = entry("e3", "cand-1", "2025-01-04", 1.0, 12.0);
    c.meetings_hours = 1.0;

    vec![a, b, c]
}

#[test]
fn hour_log_totals_and_categories() {
    let all = entries();
    let refs: Vec<&HourLogEntry> = all.iter().collect();
    let s = summarize_hour_log(&refs, &names(), "Month - 01/15/2025".into(), 20.0);

    assert_eq!(s.record_count, 3);
    assert_eq!(s.total_sets, 1);
    // 25 + 20, 60, 24
    assert_eq!(s.total_earnings, 129.0);
    assert_eq!(s.total_balance_paid, 10.0);
    assert_eq!(s.category_minutes("hours"), 420.0);
    assert_eq!(s.category_minutes("break"), 30.0);
    assert_eq!(s.category_minutes("meetings"), 60.0);
    assert_eq!(s.total_minutes(), 510.0);
}

#[test]
fn breakdown_keeps_first_seen_order_and_last_rate() {
    let all = entries();
    let refs: Vec<&HourLogEntry> = all.iter().collect();
    let s = summarize_hour_log(&refs, &names(), String::new(), 20.0);

    let order: Vec<&str> = s
        .per_owner_breakdown
        .iter()
        .map(|o| o.owner_id.as_str())
        .collect();
    assert_eq!(order, vec!["cand-1", "cand-2"]);

    let alice = s.owner("cand-1").expect("alice");
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.hours, 4.5);
    assert_eq!(alice.rate, 12.0);
    assert_eq!(alice.entry_count, 2);
    assert_eq!(alice.earnings, 69.0);
}

#[test]
fn unknown_owners_get_a_placeholder_name() {
    assert_eq!(owner_name(&names(), "cand-9"), "Employee cand-9");
    assert_eq!(owner_name(&names(), "cand-2"), "Bobby");
}

fn records() -> Vec<WorkRecord> {
    let mut a = record("r1", "cand-1", "2025-01-02", PaymentStatus::Pending);
    a.talk_time = TimeValue::text("01:30:00");
    a.sets_added = 2;
    a.moes_total = 10.0;

    let mut b = record("r2", "cand-9", "2025-01-03", PaymentStatus::Pending);
    b.talk_time = TimeValue::minutes(30.0);
    b.wait_time = TimeValue::text("00:15:00");
    b.break_minutes = TimeValue::minutes(15.0);
    b.meeting_minutes = TimeValue::text("bad");

    vec![a, b]
}

#[test]
fn work_record_summary_categories() {
    let all = records();
    let refs: Vec<&WorkRecord> = all.iter().collect();
    let s = summarize_work_records(&refs, &names(), "Week - 01/02/2025".into(), 20.0);

    assert_eq!(s.category_minutes("talk"), 120.0);
    assert_eq!(s.category_minutes("wait"), 15.0);
    assert_eq!(s.category_minutes("break"), 15.0);
    assert_eq!(s.category_minutes("meeting"), 0.0);
    assert_eq!(s.total_sets, 2);
    assert_eq!(s.total_earnings, 62.5 + 15.0);
    assert_eq!(s.total_balance_paid, 0.0);
    assert_eq!(s.owner("cand-9").expect("unknown").name, "Employee cand-9");
}

#[test]
fn client_payment_totals_include_moes() {
    let all = records();
    let refs: Vec<&WorkRecord> = all.iter().collect();
    let t = client_payment_summary(&refs, 20.0);

    assert_eq!(t.total, 77.5);
    assert_eq!(t.moes_total, 10.0);
    assert_eq!(t.combined_total, 87.5);

    let empty = client_payment_summary(&[], 20.0);
    assert_eq!(empty.combined_total, 0.0);
}

#[test]
fn top_lists_rank_owners() {
    let all = entries();
    let refs: Vec<&HourLogEntry> = all.iter().collect();
    let s = summarize_hour_log(&refs, &names(), String::new(), 20.0);

    let by_earnings: Vec<&str> = top_by_earnings(&s, 3).iter().map(|o| o.owner_id.as_str()).collect();
    assert_eq!(by_earnings, vec!["cand-1", "cand-2"]);

    let by_hours: Vec<&str> = top_by_hours(&s, 1).iter().map(|o| o.owner_id.as_str()).collect();
    assert_eq!(by_hours, vec!["cand-1"]);
}
