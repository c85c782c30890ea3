//! Projectile fired by the gun

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::vector::{displace, flip_velocity};
use crate::error::GeometryError;
use crate::render::{Color, Renderer};

/// Restitution pair applied when bouncing off the screen edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeBounce {
    /// Scale on the velocity component along the edge normal
    pub restitution: f32,
    /// Scale on the velocity component along the edge
    pub friction: f32,
}

impl Default for EdgeBounce {
    fn default() -> Self {
        Self {
            restitution: crate::consts::EDGE_RESTITUTION,
            friction: crate::consts::EDGE_FRICTION,
        }
    }
}

/// A ball entity
///
/// Serialize-only: a ball is built through `Ball::new`, which checks the radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    pos: IVec2,
    vel: Vec2,
    radius: f32,
    color: Color,
    alive: bool,
}

impl Ball {
    pub fn new(pos: IVec2, vel: Vec2, radius: f32, color: Color) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius {
                entity: "ball",
                radius,
            });
        }
        if !vel.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "ball velocity",
            });
        }
        Ok(Self {
            pos,
            vel,
            radius,
            color,
            alive: true,
        })
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Speed in pixels per tick
    pub fn speed(&self, dt: f32) -> f32 {
        self.vel.length() * dt
    }

    /// Advance one tick: gravity, integration, edge bounces, settling
    pub fn move_step(&mut self, dt: f32, gravity: f32, screen: IVec2, bounce: EdgeBounce) {
        self.vel.y += gravity * dt;
        self.pos = displace(self.pos, self.vel * dt);

        self.check_walls(screen, bounce);

        // Resting on the floor
        if self.speed(dt) < 1.0 && self.pos.y as f32 > screen.y as f32 - 2.0 * self.radius {
            self.kill();
        }
    }

    /// Clamp the ball inside the screen, bouncing off whichever edges it crossed
    pub fn check_walls(&mut self, screen: IVec2, bounce: EdgeBounce) {
        let r = self.radius;
        // Integer clamp bounds that keep the whole disc on screen
        let low = IVec2::splat(r.ceil() as i32);
        let high = screen - IVec2::splat(r.ceil() as i32);

        for (axis, normal) in [(0, Vec2::X), (1, Vec2::Y)] {
            let p = self.pos[axis] as f32;
            if p - r < 0.0 {
                self.pos[axis] = low[axis];
                self.flip_vel(normal, bounce.restitution, bounce.friction);
            } else if p + r > screen[axis] as f32 {
                self.pos[axis] = high[axis];
                self.flip_vel(-normal, bounce.restitution, bounce.friction);
            }
        }
    }

    /// Reflect velocity off a surface with normal `axis`
    ///
    /// # Panics
    /// If `axis` is zero.
    pub fn flip_vel(&mut self, axis: Vec2, coef_perp: f32, coef_par: f32) {
        self.vel = flip_velocity(self.vel, axis, coef_perp, coef_par);
    }

    /// Undo one tick of displacement
    pub fn back_out(&mut self, dt: f32) {
        self.pos = displace(self.pos, -self.vel * dt);
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.fill_circle(self.pos.as_vec2(), self.radius, self.color);
    }
}
