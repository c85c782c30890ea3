//! Oriented rectangular walls and ball-vs-wall collision
//!
//! The tricky part of the game: a wall is a rectangle at an arbitrary angle,
//! so each collision is classified in the wall's own frame before the ball
//! is reflected. The frame is
//! - `normal`: unit vector across the wall (its width axis)
//! - `parallel`: unit vector along the wall (its length axis)
//!
//! Detection is discrete: a ball fast enough to cross a whole wall within
//! one tick passes through it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::vector::unit_from_angle;
use crate::error::GeometryError;
use crate::render::{Color, Renderer};

/// Which part of the wall a ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallHit {
    /// One of the two short ends
    EndCap,
    /// One of the two long sides
    Face,
    /// A corner, by index into `Wall::vertices`
    Corner(usize),
}

/// A finite oriented rectangle
///
/// Serialize-only: the frame and vertices are derived in `Wall::new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wall {
    center: Vec2,
    length: f32,
    width: f32,
    angle: f32,
    normal: Vec2,
    parallel: Vec2,
    vertices: [Vec2; 4],
    color: Color,
}

impl Wall {
    pub fn new(
        center: Vec2,
        length: f32,
        width: f32,
        angle: f32,
        color: Color,
    ) -> Result<Self, GeometryError> {
        if !(length > 0.0) {
            return Err(GeometryError::NonPositiveExtent {
                dimension: "length",
                value: length,
            });
        }
        if !(width > 0.0) {
            return Err(GeometryError::NonPositiveExtent {
                dimension: "width",
                value: width,
            });
        }
        if !(center.is_finite() && angle.is_finite() && length.is_finite() && width.is_finite()) {
            return Err(GeometryError::NonFinite {
                what: "wall geometry",
            });
        }

        let normal = unit_from_angle(angle);
        let parallel = normal.perp();

        let half_w = normal * (width / 2.0);
        let half_l = parallel * (length / 2.0);
        // Wound around the rectangle so they draw as a polygon
        let vertices = [
            center + half_w + half_l,
            center + half_w - half_l,
            center - half_w - half_l,
            center - half_w + half_l,
        ];

        Ok(Self {
            center,
            length,
            width,
            angle,
            normal,
            parallel,
            vertices,
            color,
        })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    pub fn parallel(&self) -> Vec2 {
        self.parallel
    }

    pub fn vertices(&self) -> &[Vec2; 4] {
        &self.vertices
    }

    /// Ball center relative to the wall center, as (normal, parallel) offsets
    fn local_offset(&self, point: Vec2) -> (f32, f32) {
        let d = point - self.center;
        (d.dot(self.normal), d.dot(self.parallel))
    }

    /// Resolve a collision between `ball` and this wall
    ///
    /// On a hit the ball is moved back by one tick of displacement and its
    /// velocity is reflected elastically. Returns which part was hit; at
    /// most one part responds per call.
    pub fn collision(&self, ball: &mut Ball, dt: f32) -> Option<WallHit> {
        let r = ball.radius();
        let pos = ball.pos().as_vec2();
        let (dn, dp) = self.local_offset(pos);
        let half_w = self.width / 2.0;
        let half_l = self.length / 2.0;

        // End caps: across-wall offset inside the width, near either end
        if dn.abs() <= half_w && (dp.abs() - half_l).abs() <= r {
            ball.back_out(dt);
            ball.flip_vel(self.parallel, 1.0, 1.0);
            log::trace!("end-cap hit at {pos}");
            return Some(WallHit::EndCap);
        }

        // Long faces: along-wall offset inside the length, near either side
        if dp.abs() <= half_l && (dn.abs() - half_w).abs() <= r {
            ball.back_out(dt);
            ball.flip_vel(self.normal, 1.0, 1.0);
            log::trace!("face hit at {pos}");
            return Some(WallHit::Face);
        }

        for (i, vertex) in self.vertices.iter().enumerate() {
            let to_ball = pos - *vertex;
            if to_ball.length() > r {
                continue;
            }
            // Centered exactly on the corner: no direction to bounce in
            let Some(axis) = to_ball.try_normalize() else {
                continue;
            };
            ball.back_out(dt);
            ball.flip_vel(axis, 1.0, 1.0);
            log::trace!("corner {i} hit at {pos}");
            return Some(WallHit::Corner(i));
        }

        None
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.fill_polygon(&self.vertices, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn ball(pos: (i32, i32), vel: (f32, f32), radius: f32) -> Ball {
        Ball::new(IVec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), radius, Color::RED).unwrap()
    }

    fn upright_wall() -> Wall {
        Wall::new(Vec2::new(400.0, 300.0), 100.0, 25.0, 0.0, Color::GREY).unwrap()
    }

    #[test]
    fn test_frame_for_zero_angle() {
        let wall = upright_wall();
        assert_eq!(wall.normal(), Vec2::new(1.0, 0.0));
        assert_eq!(wall.parallel(), Vec2::new(0.0, 1.0));
        assert!(wall.vertices().contains(&Vec2::new(412.5, 350.0)));
        assert!(wall.vertices().contains(&Vec2::new(387.5, 250.0)));
    }

    #[test]
    fn test_face_hit_flips_and_backs_out() {
        let wall = upright_wall();
        let mut b = ball((430, 300), (-20.0, 0.0), 15.0);

        // One tick out the ball is still clear of the wall
        assert_eq!(wall.collision(&mut b.clone(), 1.0), None);

        b.move_step(1.0, 0.0, IVec2::new(800, 600), Default::default());
        assert_eq!(b.pos(), IVec2::new(410, 300));

        assert_eq!(wall.collision(&mut b, 1.0), Some(WallHit::Face));
        assert!((b.vel() - Vec2::new(20.0, 0.0)).length() < 1e-4);
        assert_eq!(b.pos(), IVec2::new(430, 300));
    }

    #[test]
    fn test_end_cap_hit() {
        let wall = upright_wall();
        let mut b = ball((400, 240), (0.0, 20.0), 10.0);
        assert_eq!(wall.collision(&mut b, 1.0), Some(WallHit::EndCap));
        assert!((b.vel() - Vec2::new(0.0, -20.0)).length() < 1e-4);
        assert_eq!(b.pos(), IVec2::new(400, 220));
    }

    #[test]
    fn test_corner_hit() {
        let wall = upright_wall();
        let mut b = ball((420, 358), (-5.0, -5.0), 12.0);
        let speed = b.vel().length();

        let hit = wall.collision(&mut b, 1.0);
        let Some(WallHit::Corner(i)) = hit else {
            panic!("expected corner hit, got {hit:?}");
        };
        assert_eq!(wall.vertices()[i], Vec2::new(412.5, 350.0));
        assert!((b.vel().length() - speed).abs() < 1e-4);
        // Now heading away from the corner
        let axis = (Vec2::new(420.0, 358.0) - Vec2::new(412.5, 350.0)).normalize();
        assert!(b.vel().dot(axis) > 0.0);
        assert_eq!(b.pos(), IVec2::new(425, 363));
    }

    #[test]
    fn test_end_cap_takes_precedence_over_face() {
        let wall = upright_wall();
        // Inside the corner region: satisfies both the end-cap and face tests
        let mut b = ball((410, 345), (-4.0, 6.0), 15.0);
        assert_eq!(wall.collision(&mut b, 1.0), Some(WallHit::EndCap));
        assert!((b.vel() - Vec2::new(-4.0, -6.0)).length() < 1e-4);
    }

    #[test]
    fn test_miss() {
        let wall = upright_wall();
        let mut b = ball((100, 100), (5.0, 5.0), 10.0);
        assert_eq!(wall.collision(&mut b, 1.0), None);
        assert_eq!(b.pos(), IVec2::new(100, 100));
    }

    #[test]
    fn test_rotated_wall_face_hit() {
        // Lying flat: length along x, faces at y = 290 and 310
        let wall = Wall::new(Vec2::new(400.0, 300.0), 100.0, 20.0, FRAC_PI_2, Color::GREY).unwrap();
        let mut b = ball((420, 285), (3.0, 10.0), 10.0);
        assert_eq!(wall.collision(&mut b, 1.0), Some(WallHit::Face));
        assert!((b.vel() - Vec2::new(3.0, -10.0)).length() < 1e-3);
        assert_eq!(b.pos(), IVec2::new(417, 275));
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        assert!(matches!(
            Wall::new(Vec2::ZERO, 0.0, 10.0, 0.0, Color::GREY),
            Err(GeometryError::NonPositiveExtent {
                dimension: "length",
                ..
            })
        ));
        assert!(matches!(
            Wall::new(Vec2::ZERO, 10.0, -1.0, 0.0, Color::GREY),
            Err(GeometryError::NonPositiveExtent {
                dimension: "width",
                ..
            })
        ));
        assert!(Wall::new(Vec2::ZERO, 10.0, 10.0, f32::NAN, Color::GREY).is_err());
    }

    #[test]
    fn test_snapshot_carries_derived_frame() {
        let json = serde_json::to_value(upright_wall()).unwrap();
        assert_eq!(json["normal"], serde_json::json!([1.0, 0.0]));
        assert_eq!(json["parallel"], serde_json::json!([0.0, 1.0]));
        assert_eq!(json["vertices"].as_array().map(Vec::len), Some(4));
    }

    proptest! {
        #[test]
        fn prop_frame_is_orthonormal(angle in -4.0 * PI..4.0 * PI) {
            let wall = Wall::new(Vec2::new(10.0, 10.0), 30.0, 5.0, angle, Color::GREY).unwrap();
            prop_assert!((wall.normal().length() - 1.0).abs() < 1e-5);
            prop_assert!((wall.parallel().length() - 1.0).abs() < 1e-5);
            prop_assert!(wall.normal().dot(wall.parallel()).abs() < 1e-5);
        }

        #[test]
        fn prop_wall_hits_preserve_speed(
            x in 300i32..500,
            y in 200i32..400,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
            angle in 0.0f32..PI,
        ) {
            let wall = Wall::new(Vec2::new(400.0, 300.0), 100.0, 25.0, angle, Color::GREY).unwrap();
            let mut b = ball((x, y), (vx, vy), 15.0);
            let before = b.vel().length();
            if wall.collision(&mut b, 1.0).is_some() {
                prop_assert!((b.vel().length() - before).abs() <= 1e-3 * (1.0 + before));
            } else {
                prop_assert_eq!(b.vel(), Vec2::new(vx, vy));
            }
        }
    }
}
