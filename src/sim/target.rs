//! Circular targets

use glam::IVec2;
use serde::Serialize;

use super::ball::Ball;
use crate::error::GeometryError;
use crate::render::{Color, Renderer};

/// A static circular goal
///
/// Serialize-only: a target is built through `Target::new`, which checks the radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    pos: IVec2,
    radius: f32,
    color: Color,
    alive: bool,
}

impl Target {
    pub fn new(pos: IVec2, radius: f32, color: Color) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius {
                entity: "target",
                radius,
            });
        }
        Ok(Self {
            pos,
            radius,
            color,
            alive: true,
        })
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether `ball` touches or overlaps this target
    pub fn check_collision(&self, ball: &Ball) -> bool {
        let dist = (ball.pos() - self.pos).as_vec2().length();
        dist <= ball.radius() + self.radius
    }

    /// Mark as struck
    pub fn hit(&mut self) {
        self.alive = false;
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.fill_circle(self.pos.as_vec2(), self.radius, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: i32, y: i32, radius: f32) -> Ball {
        Ball::new(IVec2::new(x, y), Vec2::ZERO, radius, Color::RED).unwrap()
    }

    #[test]
    fn test_touching_counts_as_collision() {
        let target = Target::new(IVec2::new(100, 100), 20.0, Color::BLUE).unwrap();
        assert!(target.check_collision(&ball_at(130, 100, 10.0)));
        assert!(!target.check_collision(&ball_at(131, 100, 10.0)));
    }

    #[test]
    fn test_diagonal_distance() {
        let target = Target::new(IVec2::new(0, 0), 2.0, Color::BLUE).unwrap();
        // 3-4-5 triangle
        assert!(target.check_collision(&ball_at(3, 4, 3.0)));
        assert!(!target.check_collision(&ball_at(3, 4, 2.9)));
    }

    #[test]
    fn test_check_is_pure() {
        let target = Target::new(IVec2::new(10, 10), 5.0, Color::BLUE).unwrap();
        let before = target.clone();
        let _ = target.check_collision(&ball_at(10, 10, 5.0));
        assert_eq!(target, before);
        assert!(target.is_alive());
    }

    #[test]
    fn test_hit_kills() {
        let mut target = Target::new(IVec2::new(10, 10), 5.0, Color::BLUE).unwrap();
        target.hit();
        assert!(!target.is_alive());
    }

    #[test]
    fn test_rejects_zero_radius() {
        assert!(Target::new(IVec2::ZERO, 0.0, Color::BLUE).is_err());
    }
}
