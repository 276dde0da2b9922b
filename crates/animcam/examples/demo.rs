//! Demo showing basic animcam usage without a window.
//!
//! A top-down camera focuses an object, follows it while it moves, then
//! the user zooms in. Each frame prints the camera pose.

use animcam::*;

fn main() -> Result<()> {
    init_logging();

    let mut camera = TopDownCamera::new(TopDownOptions::default())?;
    let dt = 1.0 / 30.0;
    let idle = RigInput::new();

    // Glide to a crate sitting away from the origin.
    let crate_target = FocusTarget::new(1, Vec3::new(6.0, 0.0, -3.0));
    camera.focus(Some(crate_target), false, true);
    let mut frame = 0;
    while camera.is_animating() {
        camera.update(dt, &idle);
        frame += 1;
    }
    println!(
        "Focused after {frame} frames: pivot {} distance {:.2}",
        camera.pivot(),
        camera.distance()
    );

    // Follow a walker heading along +X.
    let mut walker = Vec3::new(0.0, 0.0, 4.0);
    camera.follow(Some(FocusTarget::new(2, walker)), true);
    for _ in 0..60 {
        walker.x += 2.0 * dt;
        camera.update(dt, &idle);
        camera.late_update(walker);
    }
    println!(
        "Following walker at {walker}: pivot {} camera {}",
        camera.pivot(),
        camera.pose().position
    );

    // Two zoom clicks, the second with the faster modifier.
    camera.update(dt, &RigInput::new().with_zoom(1.0));
    camera.update(dt, &RigInput::new().with_zoom(1.0).faster());
    while camera.is_animating() {
        camera.update(dt, &idle);
        camera.late_update(walker);
    }
    println!("Zoomed to distance {:.2}", camera.distance_target());

    Ok(())
}
