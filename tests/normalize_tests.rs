use hirebill::core::calculator::normalize::{normalize_to_hours, normalize_to_minutes, snap_break_hours};
use hirebill::models::time_value::TimeValue;
use hirebill::utils::time::{format_minutes_hhmm, parse_hours_input};

#[test]
fn numeric_minutes_pass_through() {
    assert_eq!(normalize_to_minutes(&TimeValue::minutes(90.0)), 90.0);
    assert_eq!(normalize_to_minutes(&TimeValue::minutes(12.5)), 12.5);
    assert_eq!(normalize_to_minutes(&TimeValue::minutes(0.0)), 0.0);
}

#[test]
fn negative_and_non_finite_numbers_are_zero() {
    assert_eq!(normalize_to_minutes(&TimeValue::minutes(-5.0)), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::minutes(f64::NAN)), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::minutes(f64::INFINITY)), 0.0);
}

#[test]
fn hms_strings_round_seconds_to_the_nearest_minute() {
    assert_eq!(normalize_to_minutes(&TimeValue::text("01:30:00")), 90.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("00:00:30")), 1.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("00:00:29")), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("2:05:59")), 126.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text(" 10:00:00 ")), 600.0);
}

#[test]
fn malformed_input_degrades_to_zero() {
    assert_eq!(normalize_to_minutes(&TimeValue::Missing), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("")), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("abc")), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("1:30")), 0.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("1:2:3:4")), 0.0);
}

#[test]
fn bad_components_clamp_to_zero() {
    assert_eq!(normalize_to_minutes(&TimeValue::text("-1:30:00")), 30.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("01:xx:00")), 60.0);
    assert_eq!(normalize_to_minutes(&TimeValue::text("-5:-5:-5")), 0.0);
}

#[test]
fn huge_hms_fields_stay_finite_and_non_negative() {
    let got = normalize_to_minutes(&TimeValue::text("9223372036854775807:00:00"));
    assert!(got.is_finite());
    assert!(got > 0.0);

    let got = normalize_to_minutes(&TimeValue::text("0:9223372036854775807:9223372036854775807"));
    assert!(got.is_finite());
    assert!(got > 0.0);

    // out of i64 range is not an integer, so the field counts as 0
    assert_eq!(
        normalize_to_minutes(&TimeValue::text("99999999999999999999:01:00")),
        1.0
    );
}

#[test]
fn hms_is_monotonic_in_every_component() {
    for h in 0..4i64 {
        for m in 0..60i64 {
            for s in [0i64, 29, 30, 59] {
                let raw = format!("{:02}:{:02}:{:02}", h, m, s);
                let got = normalize_to_minutes(&TimeValue::text(raw.clone()));
                let expected = (h * 60 + m) as f64 + (s as f64 / 60.0).round();
                assert_eq!(got, expected, "{}", raw);

                let more_h = format!("{:02}:{:02}:{:02}", h + 1, m, s);
                assert!(normalize_to_minutes(&TimeValue::text(more_h)) >= got);
            }
        }
    }
}

#[test]
fn hours_are_minutes_over_sixty() {
    assert_eq!(normalize_to_hours(&TimeValue::text("01:30:00")), 1.5);
    assert_eq!(normalize_to_hours(&TimeValue::minutes(45.0)), 0.75);
}

#[test]
fn from_input_distinguishes_numbers_and_text() {
    assert_eq!(TimeValue::from_input("45"), TimeValue::Minutes(45.0));
    assert_eq!(TimeValue::from_input("00:45:00"), TimeValue::text("00:45:00"));
    assert_eq!(TimeValue::from_input("  "), TimeValue::Missing);
}

#[test]
fn break_hours_snap_to_allowed_values() {
    assert_eq!(snap_break_hours(0.5), 0.5);
    assert_eq!(snap_break_hours(0.75), 0.75);
    assert_eq!(snap_break_hours(1.0), 1.0);
    assert_eq!(snap_break_hours(0.25), 0.0);
    assert_eq!(snap_break_hours(2.0), 0.0);
    assert_eq!(snap_break_hours(-0.5), 0.0);
}

#[test]
fn hours_input_accepts_decimal_and_hms() {
    assert_eq!(parse_hours_input("1.5"), 1.5);
    assert_eq!(parse_hours_input("01:30:00"), 1.5);
    assert!((parse_hours_input("01:30:36") - 1.51).abs() < 1e-9);
    assert_eq!(parse_hours_input("abc"), 0.0);
    assert_eq!(parse_hours_input(""), 0.0);
    assert_eq!(parse_hours_input("-2"), 0.0);
}

#[test]
fn minutes_render_as_hhmm() {
    assert_eq!(format_minutes_hhmm(90.0), "01:30");
    assert_eq!(format_minutes_hhmm(0.0), "00:00");
    assert_eq!(format_minutes_hhmm(-10.0), "00:00");
    assert_eq!(format_minutes_hhmm(605.0), "10:05");
}

#[test]
fn minutes_round_before_splitting_into_hours() {
    assert_eq!(format_minutes_hhmm(59.5), "01:00");
    assert_eq!(format_minutes_hhmm(119.6), "02:00");
    assert_eq!(format_minutes_hhmm(59.4), "00:59");
    assert_eq!(format_minutes_hhmm(f64::NAN), "00:00");
}
