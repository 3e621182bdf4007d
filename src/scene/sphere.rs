//! Virtual sphere math used by the arcball

use glam::{Mat4, Quat, Vec2, Vec3};

/// Cross products shorter than this are treated as parallel vectors.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Project a point in normalized device coordinates onto the unit sphere.
///
/// Points inside the unit disk are lifted onto the front hemisphere.
/// Points on or outside the rim are pulled onto the rim (`z = 0`).
/// Returns `None` for non-finite input.
pub fn project_to_sphere(ndc: Vec2) -> Option<Vec3> {
    if !ndc.is_finite() {
        return None;
    }

    let length_squared = ndc.length_squared();
    if length_squared <= 1.0 {
        let z = (1.0 - length_squared).max(0.0).sqrt();
        Some(Vec3::new(ndc.x, ndc.y, z).normalize())
    } else {
        let rim = ndc / length_squared.sqrt();
        Some(Vec3::new(rim.x, rim.y, 0.0))
    }
}

/// Rotation taking unit vector `from` to unit vector `to`, with the angle
/// scaled by `sensitivity`.
///
/// Returns `None` when there is no usable rotation: parallel or anti-parallel
/// vectors (no unique axis), a zero angle, or non-finite input.
pub fn rotation_between(from: Vec3, to: Vec3, sensitivity: f32) -> Option<Quat> {
    let axis = from.cross(to);
    let axis_length = axis.length();
    if !axis_length.is_finite() || axis_length < PARALLEL_EPSILON {
        return None;
    }

    // atan2 keeps small angles exact where acos(dot) rounds them away
    let angle = axis_length.atan2(from.dot(to)) * sensitivity;
    if !angle.is_finite() || angle == 0.0 {
        return None;
    }

    Some(Quat::from_axis_angle(axis / axis_length, angle))
}

/// Right-handed look-at toward the origin with world `+Y` as the preferred up.
///
/// The up vector is re-orthogonalized against the viewing direction. When the
/// eye sits on the Y axis, `+Z` is used instead.
pub fn look_at_origin(eye: Vec3) -> Mat4 {
    let forward = (-eye).normalize_or_zero();
    let mut up = Vec3::Y;
    if forward.cross(up).length_squared() < PARALLEL_EPSILON {
        up = Vec3::Z;
    }
    let up = (up - forward * forward.dot(up)).normalize_or_zero();
    Mat4::look_at_rh(eye, Vec3::ZERO, up)
}
