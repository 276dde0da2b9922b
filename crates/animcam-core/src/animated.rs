//! Animated values: a start/target pair advanced by the host's frame delta.
//!
//! An [`AnimatedValue`] is either idle (settled on its target) or
//! transitioning. Progress is a normalized fraction advanced by
//! `delta_time * speed` on every [`update`](AnimatedValue::update), so the
//! time to settle depends on the speed only, never on the distance between
//! start and target.
//!
//! Progress is accumulated in `f64` and snapped to 1 within
//! [`SETTLE_TOLERANCE`], so `ceil(1 / (speed * dt))` steps of a fixed `dt`
//! always land exactly on the target.

use glam::{Quat, Vec3};

use crate::interpolate::Interpolate;
use crate::notify::{ListenerId, Listeners};

/// Progress this close to 1 counts as settled.
pub const SETTLE_TOLERANCE: f64 = 1e-6;

/// Animated scalar.
pub type AnimFloat = AnimatedValue<f32>;
/// Animated position or direction.
pub type AnimVec3 = AnimatedValue<Vec3>;
/// Animated rotation.
pub type AnimQuat = AnimatedValue<Quat>;

/// A value that moves from a start toward a target over time.
#[derive(Debug)]
pub struct AnimatedValue<T> {
    start: T,
    target: T,
    progress: f64,
    animating: bool,
    speed: f32,
    blend: fn(T, T, f32) -> T,
    listeners: Listeners,
}

impl<T: Interpolate> AnimatedValue<T> {
    /// Creates an idle value using the type's own blend.
    pub fn new(value: T, speed: f32) -> Self {
        Self::with_blend(value, speed, T::interpolate)
    }

    /// Creates an idle value with one change callback already subscribed.
    pub fn with_listener(value: T, speed: f32, callback: impl FnMut() + 'static) -> Self {
        let mut animated = Self::new(value, speed);
        animated.subscribe(callback);
        animated
    }
}

impl<T: Copy + PartialEq> AnimatedValue<T> {
    /// Creates an idle value with a caller-supplied blend function.
    pub fn with_blend(value: T, speed: f32, blend: fn(T, T, f32) -> T) -> Self {
        Self {
            start: value,
            target: value,
            progress: 1.0,
            animating: false,
            speed,
            blend,
            listeners: Listeners::new(),
        }
    }

    /// Returns the observable value.
    ///
    /// Once progress reaches 1 this is the target itself, not a blend result.
    #[must_use]
    pub fn value(&self) -> T {
        if self.progress >= 1.0 {
            self.target
        } else {
            (self.blend)(self.start, self.target, self.progress as f32)
        }
    }

    /// Settles immediately at `value`. Same as [`stop_at`](Self::stop_at).
    pub fn set_value(&mut self, value: T) {
        self.stop_at(value);
    }

    /// Returns the value the current transition converges to.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Returns the departure point of the current transition.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the normalized progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress as f32
    }

    /// Returns whether a transition is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Returns the progress gained per unit of time.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Changes the speed used by the current and future transitions.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Starts a transition from the observable value to `value` at the
    /// current speed. Does nothing if `value` already is the target.
    pub fn set_target(&mut self, value: T) {
        self.set_target_with_speed(value, self.speed);
    }

    /// Like [`set_target`](Self::set_target) but also replaces the speed.
    pub fn set_target_with_speed(&mut self, value: T, speed: f32) {
        if self.target != value {
            self.begin(self.value(), value, speed);
        }
    }

    /// Starts a transition from an explicit `start` rather than the
    /// observable value.
    ///
    /// Does nothing only if both `start` and `target` already match.
    pub fn set_target_from(&mut self, start: T, target: T) {
        self.set_target_from_with_speed(start, target, self.speed);
    }

    /// Like [`set_target_from`](Self::set_target_from) but also replaces
    /// the speed.
    pub fn set_target_from_with_speed(&mut self, start: T, target: T, speed: f32) {
        if self.target != target || self.start != start {
            self.begin(start, target, speed);
        }
    }

    /// Settles at the observable value. Never notifies.
    pub fn stop(&mut self) {
        let current = self.value();
        self.start = current;
        self.target = current;
        self.progress = 1.0;
        self.animating = false;
    }

    /// Settles at `value`.
    ///
    /// Notifies once if a transition was cut short or the observable value
    /// actually changed.
    pub fn stop_at(&mut self, value: T) {
        let notify = self.progress < 1.0 || self.value() != value;

        self.start = value;
        self.target = value;
        self.progress = 1.0;
        self.animating = false;

        if notify {
            self.listeners.notify();
        }
    }

    /// Advances the transition by `delta_time`.
    ///
    /// Returns `false` without touching any state when idle. Otherwise
    /// advances, notifies once and returns `true`, including on the step
    /// that settles the value.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if !self.animating {
            return false;
        }

        let step = f64::from(delta_time) * f64::from(self.speed);
        self.progress = (self.progress + step).clamp(0.0, 1.0);
        if self.progress >= 1.0 - SETTLE_TOLERANCE {
            self.progress = 1.0;
            self.animating = false;
        }

        self.listeners.notify();
        true
    }

    /// Subscribes a change callback.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Removes a change callback. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn begin(&mut self, start: T, target: T, speed: f32) {
        if speed <= 0.0 || speed.is_nan() {
            log::warn!("animated value started with speed {speed}; the transition will not settle");
        }

        self.start = start;
        self.target = target;
        self.speed = speed;
        self.progress = 0.0;
        self.animating = true;
    }
}
