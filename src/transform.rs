//! Camera transform math.
//!
//! Pure functions that project a point from world space into the
//! camera-relative screen space of a [`CameraState`] and back again.
//!
//! # Pipeline
//!
//! Forward (world → screen):
//! 1. translate by the camera offset
//! 2. rotate by the camera rotation (degrees)
//! 3. scale uniformly by the camera zoom
//!
//! Inverse (screen → world) undoes the same steps in reverse order. Both
//! directions snap components smaller than [`EPSILON`] to exactly `0.0` so
//! repeated rotations do not accumulate floating-point noise around zero.
//!
//! Directions and scales are scalars, so they compose by addition and
//! multiplication and need no helpers beyond [`safe_zoom`].

use glam::DVec2;

/// Components with an absolute value below this are snapped to zero.
pub const EPSILON: f64 = 1e-12;

/// Smallest magnitude delivered in place of a zero zoom or scale.
pub const MIN_SCALE: f64 = 1e-10;

const RADIANS_PER_DEGREE: f64 = std::f64::consts::PI / 180.0;

/// Position, zoom and rotation of a camera.
///
/// `position` holds the *negated* user-facing camera position: moving the
/// camera right stores a more negative x offset. `rotation` is the native
/// angle in degrees; user-facing directions are offset by 90° (see
/// [`crate::systems::camera`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Offset added to world positions before rotation.
    pub position: DVec2,
    /// Uniform scale factor, `1.0` means no scaling.
    pub zoom: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl CameraState {
    /// The camera that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        position: DVec2::ZERO,
        zoom: 1.0,
        rotation: 0.0,
    };
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Snap a value within [`EPSILON`] of zero to exactly zero.
pub fn apply_epsilon(value: f64) -> f64 {
    if value.abs() < EPSILON { 0.0 } else { value }
}

fn apply_epsilon_vec(v: DVec2) -> DVec2 {
    DVec2::new(apply_epsilon(v.x), apply_epsilon(v.y))
}

/// Replace a zero (or NaN) zoom with [`MIN_SCALE`] so it can be divided by.
pub fn safe_zoom(zoom: f64) -> f64 {
    if zoom == 0.0 || zoom.is_nan() {
        MIN_SCALE
    } else {
        zoom
    }
}

/// Coerce an incoming number the way block arguments are cast: NaN becomes 0.
pub fn cast_number(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// Rotate a 2D vector by `angle_degrees`.
fn rotate(v: DVec2, angle_degrees: f64) -> DVec2 {
    let (sin, cos) = (angle_degrees * RADIANS_PER_DEGREE).sin_cos();
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Project a world-space point into the camera's screen space.
pub fn forward(point: DVec2, camera: &CameraState) -> DVec2 {
    let offset = point + camera.position;
    apply_epsilon_vec(rotate(offset, camera.rotation) * camera.zoom)
}

/// Recover the world-space point that `forward` mapped to `point`.
///
/// A zero zoom is replaced with [`MIN_SCALE`]; the result is then only an
/// approximation of the original point.
pub fn inverse(point: DVec2, camera: &CameraState) -> DVec2 {
    let scaled = point / safe_zoom(camera.zoom);
    apply_epsilon_vec(rotate(scaled, -camera.rotation) - camera.position)
}

/// Move `xy` by `steps` units along `direction_degrees`.
///
/// Uses the same step formula as moving an object forward: `0°` points
/// along +x and `90°` along +y.
pub fn translate_angled_movement(xy: DVec2, steps: f64, direction_degrees: f64) -> DVec2 {
    let (sin, cos) = (direction_degrees * RADIANS_PER_DEGREE).sin_cos();
    apply_epsilon_vec(DVec2::new(xy.x + steps * cos, xy.y + steps * sin))
}
