//! Integration tests driving the rigs frame by frame.

use animcam::*;

const DT: f32 = 1.0 / 60.0;

fn run_until_settled(camera: &mut TopDownCamera) -> u32 {
    let idle = RigInput::new();
    let mut frames = 0;
    while camera.is_animating() {
        camera.update(DT, &idle);
        frames += 1;
        assert!(frames < 10_000, "camera never settled");
    }
    frames
}

#[test]
fn test_top_down_focus_settle_time_depends_on_speed_only() {
    let mut near = TopDownCamera::new(TopDownOptions::default()).unwrap();
    let mut far = TopDownCamera::new(TopDownOptions::default()).unwrap();

    near.focus(Some(FocusTarget::new(1, Vec3::new(1.0, 0.0, 0.0))), false, false);
    far.focus(Some(FocusTarget::new(1, Vec3::new(100.0, 0.0, 0.0))), false, false);

    // focus_smoothing = 5 covers the whole transition in 0.2 s.
    assert_eq!(run_until_settled(&mut near), run_until_settled(&mut far));
    assert_eq!(far.pivot(), Vec3::new(100.0, 0.0, 0.0));
}

#[test]
fn test_top_down_options_from_json() {
    let options = TopDownOptions::from_json_str(
        r#"{
            "default_rotation": [60.0, 0.0, 0.0],
            "default_zoom": 8.0,
            "max_zoom": 20.0
        }"#,
    )
    .unwrap();
    let camera = TopDownCamera::new(options).unwrap();

    assert_eq!(camera.distance(), 8.0);
    assert!((camera.pose().tilt_degrees() - 60.0).abs() < 1e-3);
}

#[test]
fn test_top_down_bad_json_is_error() {
    let result = TopDownOptions::from_json_str(r#"{ "default_zoom": "far" }"#);
    assert!(matches!(result, Err(AnimcamError::Json(_))));
}

#[test]
fn test_top_down_follow_then_pan_breaks_follow() {
    let mut camera = TopDownCamera::new(TopDownOptions::default()).unwrap();
    let mut target = Vec3::new(2.0, 0.0, 2.0);
    camera.follow(Some(FocusTarget::new(5, target)), true);

    for _ in 0..30 {
        target.z -= 0.1;
        camera.update(DT, &RigInput::new());
        camera.late_update(target);
    }
    assert!(camera.is_following());

    camera.update(DT, &RigInput::new().panning().with_look(Vec2::new(1.0, 0.0)));
    assert!(!camera.is_following());
    assert!(!camera.is_animating());

    // Later follow positions are ignored.
    let pivot = camera.pivot();
    camera.late_update(Vec3::splat(50.0));
    assert_eq!(camera.pivot_target(), pivot);
}

#[test]
fn test_top_down_camera_keeps_orbit_distance() {
    let mut camera = TopDownCamera::new(TopDownOptions::default()).unwrap();
    camera.set_move_activation(MoveActivation::Always);

    let input = RigInput::new()
        .rotating()
        .with_look(Vec2::new(0.7, -0.3))
        .with_move(Vec2::new(0.5, 1.0));
    for _ in 0..20 {
        camera.update(DT, &input);
    }

    let offset = camera.pose().position - camera.pivot();
    assert!((offset.length() - camera.distance()).abs() < 1e-3);
    assert!(offset.normalize().dot(-camera.pose().forward()) > 0.999);
}

#[test]
fn test_free_move_home_cycle() {
    let mut camera = FreeMoveCamera::new(FreeMoveOptions::default()).unwrap();
    let home = FocusTarget::new(11, Vec3::new(0.0, 2.0, 0.0));
    camera.set_home(Some(home), true);
    assert_eq!(camera.pivot(), home.position);

    camera.update(DT, &RigInput::new().moving().with_move(Vec2::new(1.0, 1.0)));
    assert!(camera.pivot() != home.position);

    camera.focus_home();
    assert_eq!(camera.pivot(), home.position);
    assert_eq!(camera.distance(), 10.0);
}

#[test]
fn test_view_matrix_puts_pivot_ahead() {
    let camera = FreeMoveCamera::new(FreeMoveOptions::default()).unwrap();
    let in_view = camera.pose().view_matrix().transform_point3(camera.pivot());
    assert!(in_view.x.abs() < 1e-4);
    assert!(in_view.y.abs() < 1e-4);
    assert!((in_view.z + camera.distance()).abs() < 1e-4);
}
