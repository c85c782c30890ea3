//! 2D vector helpers on top of glam
//!
//! Positions are integer pixels (`IVec2`), velocities and directions are
//! real (`Vec2`).

use glam::{IVec2, Vec2};

/// Unit vector pointing along `angle` (radians, screen coordinates)
#[inline]
pub fn unit_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Move an integer position by a real displacement
///
/// The displacement is truncated toward zero before it is applied, so
/// sub-pixel motion is dropped symmetrically in both directions. Huge
/// displacements saturate at the `i32` range.
#[inline]
pub fn displace(pos: IVec2, delta: Vec2) -> IVec2 {
    pos.saturating_add(delta.as_ivec2())
}

/// Reflect `velocity` off a surface whose normal is `axis`
///
/// The component along `axis` is negated and scaled by `coef_perp`; the
/// tangential remainder is scaled by `coef_par`. With both coefficients at
/// 1 this is a mirror reflection and preserves speed.
///
/// # Panics
/// If `axis` is the zero vector. There is no surface to reflect against.
pub fn flip_velocity(velocity: Vec2, axis: Vec2, coef_perp: f32, coef_par: f32) -> Vec2 {
    assert!(
        axis != Vec2::ZERO && axis.is_finite(),
        "reflection axis must be a non-zero finite vector, got {axis}"
    );
    let axis = axis.normalize();
    let normal_part = velocity.dot(axis) * axis;
    let tangent_part = velocity - normal_part;
    -normal_part * coef_perp + tangent_part * coef_par
}
