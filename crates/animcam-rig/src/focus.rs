//! Focus targets and the near/far toggle on repeated focus.

use glam::Vec3;

/// Something the camera can focus on.
///
/// The `id` is the host's identity for the object; focusing the same id
/// twice in a row toggles between the near and far distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    /// Host-side identity of the focused object.
    pub id: u64,
    /// World position to center on.
    pub position: Vec3,
}

impl FocusTarget {
    /// Creates a focus target.
    #[must_use]
    pub fn new(id: u64, position: Vec3) -> Self {
        Self { id, position }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusKey {
    Origin,
    Object(u64),
}

impl From<Option<&FocusTarget>> for FocusKey {
    fn from(target: Option<&FocusTarget>) -> Self {
        target.map_or(FocusKey::Origin, |t| FocusKey::Object(t.id))
    }
}

/// Remembers the last focus so a repeat can toggle the distance.
#[derive(Debug, Default)]
pub(crate) struct FocusTracker {
    last: Option<FocusKey>,
}

impl FocusTracker {
    /// Records `target` and returns the distance to focus it at.
    ///
    /// A new target gets `near`. Repeating the last target switches to
    /// `near * far_factor` unless `current` already is at least that far,
    /// in which case it comes back to `near`.
    pub(crate) fn distance_for(
        &mut self,
        target: Option<&FocusTarget>,
        current: f32,
        near: f32,
        far_factor: f32,
    ) -> f32 {
        let key = FocusKey::from(target);
        if self.last == Some(key) {
            let far = near * far_factor;
            if current < far {
                far
            } else {
                near
            }
        } else {
            self.last = Some(key);
            near
        }
    }

    /// Returns the world position a focus call centers on.
    pub(crate) fn position_of(target: Option<&FocusTarget>) -> Vec3 {
        target.map_or(Vec3::ZERO, |t| t.position)
    }
}
