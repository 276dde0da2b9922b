//! Integration tests for animated values through the public API.

use std::cell::Cell;
use std::rc::Rc;

use animcam::*;
use proptest::prelude::*;

fn with_counter<T: Interpolate + 'static>(value: T, speed: f32) -> (AnimatedValue<T>, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let animated = AnimatedValue::with_listener(value, speed, move || counter.set(counter.get() + 1));
    (animated, hits)
}

#[test]
fn test_scalar_walkthrough() {
    let (mut zoom, hits) = with_counter(0.0_f32, 2.0);
    zoom.set_target(10.0);
    assert_eq!(hits.get(), 0);

    assert!(zoom.update(0.25));
    assert_eq!(zoom.progress(), 0.5);
    assert_eq!(zoom.value(), 5.0);

    assert!(zoom.update(0.25));
    assert_eq!(zoom.progress(), 1.0);
    assert_eq!(zoom.value(), 10.0);
    assert!(!zoom.is_animating());

    assert!(!zoom.update(0.25));
    assert_eq!(zoom.value(), 10.0);
    assert_eq!(hits.get(), 2);
}

#[test]
fn test_vector_same_target_does_nothing() {
    let (mut pivot, hits) = with_counter(Vec3::ZERO, 1.0);
    pivot.set_target(Vec3::ZERO);
    assert!(!pivot.is_animating());
    assert!(!pivot.update(0.1));
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_double_stop_notifies_nothing() {
    let (mut distance, hits) = with_counter(2.0_f32, 1.0);
    distance.set_target(6.0);
    distance.update(0.5);
    let after_update = hits.get();

    distance.stop();
    let settled = distance.value();
    distance.stop();
    assert_eq!(distance.value(), settled);
    assert_eq!(hits.get(), after_update);
}

#[test]
fn test_jump_while_idle() {
    let (mut distance, hits) = with_counter(1.0_f32, 1.0);
    distance.set_value(1.0);
    assert_eq!(hits.get(), 0);
    distance.set_value(4.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(distance.value(), 4.0);
    assert!(!distance.is_animating());
}

#[test]
fn test_rotation_transition_stays_normalized() {
    let target = Quat::from_rotation_y(2.5) * Quat::from_rotation_x(0.4);
    let mut rotation = AnimQuat::new(Quat::IDENTITY, 4.0);
    rotation.set_target(target);

    while rotation.update(0.03) {
        assert!((rotation.value().length() - 1.0).abs() < 1e-4);
    }
    assert_eq!(rotation.value(), target);
}

#[test]
fn test_observer_flag_pattern() {
    // An owner can learn about changes without handing itself to the callback.
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let mut rotation = AnimQuat::with_listener(Quat::IDENTITY, 1.0, move || flag.set(true));

    rotation.set_target(Quat::from_rotation_z(1.0));
    assert!(!dirty.get());
    rotation.update(0.1);
    assert!(dirty.replace(false));
    rotation.stop();
    assert!(!dirty.get());
}

proptest! {
    #[test]
    fn prop_converges_in_expected_steps(
        start in -1000.0_f32..1000.0,
        target in -1000.0_f32..1000.0,
        speed in 0.1_f32..20.0,
        fps in prop::sample::select(vec![24.0_f32, 30.0, 50.0, 60.0, 90.0, 120.0, 144.0, 240.0]),
    ) {
        let dt = 1.0 / fps;
        let steps = (1.0 / (f64::from(speed) * f64::from(dt))).ceil() as u32;

        let mut animated = AnimFloat::new(start, speed);
        animated.set_target(target);
        for _ in 0..steps {
            animated.update(dt);
        }

        prop_assert_eq!(animated.value(), target);
        prop_assert!(!animated.is_animating());
    }

    #[test]
    fn prop_converges_with_power_of_two_steps(
        start in -1000.0_f32..1000.0,
        target in -1000.0_f32..1000.0,
        speed_steps in 1_u32..=16,
        dt_shift in 1_i32..=8,
    ) {
        let speed = speed_steps as f32;
        let dt = 2.0_f32.powi(-dt_shift);
        let steps = (1.0 / (f64::from(speed) * f64::from(dt))).ceil() as u32;

        let mut animated = AnimFloat::new(start, speed);
        animated.set_target(target);
        for _ in 0..steps {
            prop_assert!(animated.is_animating());
            animated.update(dt);
        }

        prop_assert_eq!(animated.value(), target);
        prop_assert!(!animated.is_animating());
    }

    #[test]
    fn prop_vector_converges_exactly(
        x in -50.0_f32..50.0,
        y in -50.0_f32..50.0,
        z in -50.0_f32..50.0,
        speed in 0.5_f32..20.0,
    ) {
        let target = Vec3::new(x, y, z);
        let mut animated = AnimVec3::new(Vec3::ONE, speed);
        animated.set_target(target);

        let mut guard = 0;
        while animated.update(0.01) {
            guard += 1;
            prop_assert!(guard < 1000);
        }
        prop_assert_eq!(animated.value(), target);
        prop_assert_eq!(animated.progress(), 1.0);
    }

    #[test]
    fn prop_idle_update_changes_nothing(value in -100.0_f32..100.0, dt in any::<f32>()) {
        let (mut animated, hits) = with_counter(value, 3.0);
        prop_assert!(!animated.update(dt));
        prop_assert_eq!(animated.value(), value);
        prop_assert_eq!(animated.target(), value);
        prop_assert_eq!(animated.start(), value);
        prop_assert_eq!(animated.progress(), 1.0);
        prop_assert_eq!(animated.speed(), 3.0);
        prop_assert_eq!(hits.get(), 0);
    }

    #[test]
    fn prop_progress_stays_in_unit_range(deltas in prop::collection::vec(-2.0_f32..2.0, 1..20)) {
        let mut animated = AnimFloat::new(0.0, 1.5);
        animated.set_target(1.0);
        for dt in deltas {
            animated.update(dt);
            prop_assert!((0.0..=1.0).contains(&animated.progress()));
            prop_assert_eq!(animated.is_animating(), animated.progress() < 1.0);
        }
    }
}
