// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Duration derivation tests.
//!
//! All three strategies must agree on `stop - start`; the structural copy
//! must also keep every field of the shape it was given.

use activity_shapes::services::{add_duration, duration, ActivityBase, WithDuration};
use activity_shapes::{Activity, Position, Run, Sport, SportKind, Sporting, Timed, Tracked};

fn sample_run() -> Run {
    Run::new(
        Activity::new(10.0, 25.0),
        5000.0,
        vec![Position::new(0.0, 0.0)],
    )
}

#[test]
fn test_all_strategies_agree_on_unit_activity() {
    let a = Activity::new(1.0, 2.0);

    assert_eq!(ActivityBase::new(a.start, a.stop).duration(), 1.0);
    assert_eq!(duration(&a), 1.0);
    assert_eq!(add_duration(&a).duration, 1.0);
}

#[test]
fn test_function_and_copy_match_stop_minus_start() {
    let cases = [
        (0.0, 0.0),
        (1.0, 2.0),
        (-5.0, 5.0),
        (1_700_000_000.0, 1_700_003_600.0),
        (2.5, 7.75),
        // Reversed interval is not rejected, just negative
        (10.0, 4.0),
    ];

    for (start, stop) in cases {
        let a = Activity::new(start, stop);
        assert_eq!(duration(&a), stop - start, "free function for {a:?}");
        assert_eq!(add_duration(&a).duration, stop - start, "copy for {a:?}");
    }
}

#[test]
fn test_free_function_does_not_touch_input() {
    let s = Activity::new(3.0, 9.0).sport(SportKind::Swim, 1500.0);
    let before = s.clone();

    assert_eq!(duration(&s), 6.0);
    assert_eq!(duration(&s), 6.0);
    assert_eq!(s, before);
}

#[test]
fn test_copy_preserves_activity_fields() {
    let a = Activity::new(1.0, 2.0);
    let x = add_duration(&a);

    assert_eq!(x.value, a);
    assert_eq!(x.start(), 1.0);
    assert_eq!(x.stop(), 2.0);
    assert_eq!(x.duration, 1.0);
}

#[test]
fn test_copy_preserves_sport_fields() {
    let s = Activity::new(1.0, 2.0).sport(SportKind::Run, 0.0);
    let x: WithDuration<Sport> = add_duration(&s);

    assert_eq!(x.duration, 1.0);
    assert_eq!(x.kind(), SportKind::Run);
    assert_eq!(x.distance(), 0.0);
    assert_eq!(x.value, s);
}

#[test]
fn test_copy_preserves_run_fields() {
    let r = sample_run();
    let x: WithDuration<Run> = add_duration(&r);

    assert_eq!(x.duration, 15.0);
    assert_eq!(x.kind(), SportKind::Run);
    assert_eq!(x.distance(), 5000.0);
    assert_eq!(x.track(), &[Position::new(0.0, 0.0)]);
    assert_eq!(x.into_inner(), r);
}

#[test]
fn test_copy_leaves_original_unchanged() {
    let r = sample_run();
    let before = r.clone();

    let _ = add_duration(&r);

    assert_eq!(r, before);
}

#[test]
fn test_copy_applied_twice_adds_identical_duration() {
    let s = Activity::new(1.0, 2.0).sport(SportKind::Run, 0.0);

    let once = add_duration(&s);
    let twice = add_duration(&once);

    assert_eq!(twice.duration, once.duration);
    assert_eq!(twice.value, once);
    // Still usable as a sport after two rounds
    assert_eq!(twice.kind(), SportKind::Run);
}

/// Generic code written against the narrowest shape accepts every wider one.
fn total_duration<T: Timed>(items: &[T]) -> f64 {
    items.iter().map(|x| duration(x)).sum()
}

#[test]
fn test_wider_shapes_usable_where_activity_expected() {
    let a = Activity::new(0.0, 1.0);
    let s = Activity::new(0.0, 2.0).sport(SportKind::Swim, 50.0);
    let r = sample_run();

    assert_eq!(total_duration(&[a]), 1.0);
    assert_eq!(total_duration(&[s.clone()]), 2.0);
    assert_eq!(total_duration(&[r.clone()]), 15.0);
    assert_eq!(total_duration(&[add_duration(&r)]), 15.0);

    let narrowed: &Activity = r.as_ref();
    assert_eq!(*narrowed, Activity::new(10.0, 25.0));
    let narrowed: &Sport = r.as_ref();
    assert_eq!(narrowed.kind, SportKind::Run);
}

#[test]
fn test_base_record_duration_is_frozen() {
    let mut base = ActivityBase::new(1.0, 2.0);
    assert_eq!(base.duration(), 1.0);

    base.value.start = 100.0;
    base.value.stop = 500.0;

    assert_eq!(base.duration(), 1.0, "duration must not follow start/stop");
    // The free function sees the new values
    assert_eq!(duration(&base), 400.0);
}

#[test]
fn test_base_record_from_activity() {
    let base = ActivityBase::from(Activity::new(10.0, 25.0));
    assert_eq!(base.duration(), 15.0);
    assert_eq!(base.start(), 10.0);
    assert_eq!(base.stop(), 25.0);
}

#[test]
fn test_run_on_base_keeps_its_fields_and_frozen_duration() {
    let mut base: ActivityBase<Run> = ActivityBase::from(sample_run());
    assert_eq!(base.duration(), 15.0);

    base.value.sport.activity.start = 0.0;
    base.value.sport.activity.stop = 1000.0;

    assert_eq!(base.duration(), 15.0, "duration must not follow start/stop");
    assert_eq!(duration(&base), 1000.0);
    assert_eq!(base.kind(), SportKind::Run);
    assert_eq!(base.distance(), 5000.0);
    assert_eq!(base.track(), &[Position::new(0.0, 0.0)]);

    let narrowed: &Sport = base.as_ref();
    assert_eq!(narrowed.distance, 5000.0);
}

#[test]
fn test_sport_on_base_serializes_flat() {
    let s = Activity::new(1.0, 4.0).sport(SportKind::Swim, 100.0);
    let base = ActivityBase::from_shape(s.clone());

    let value = serde_json::to_value(&base).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({"start": 1.0, "stop": 4.0, "kind": "swim", "distance": 100.0, "duration": 3.0})
    );
    assert_eq!(base.into_inner(), s);
}

#[test]
fn test_run_constructor_fixes_kind() {
    let r = Run::new(Activity::new(0.0, 1.0), 100.0, vec![]);
    assert_eq!(r.kind(), SportKind::Run);
    assert!(r.track().is_empty());
}
