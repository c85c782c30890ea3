//! The player's launcher

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::vector::unit_from_angle;
use crate::error::GeometryError;
use crate::render::{Color, Renderer};

/// Barrel length at minimum power
const BARREL_BASE: f32 = 20.0;
/// Barrel width
const BARREL_WIDTH: f32 = 7.0;

/// Vertical nudge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    Up,
    Down,
}

/// An aimable, chargeable gun
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    pos: IVec2,
    /// Aim (radians, screen coordinates)
    angle: f32,
    power: f32,
    min_power: f32,
    max_power: f32,
    /// Charging: fire button held
    active: bool,
}

impl Gun {
    pub fn new(pos: IVec2, min_power: f32, max_power: f32) -> Self {
        Self {
            pos,
            angle: 0.0,
            power: min_power,
            min_power,
            max_power,
            active: false,
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn min_power(&self) -> f32 {
        self.min_power
    }

    pub fn max_power(&self) -> f32 {
        self.max_power
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Aim at the pointer
    pub fn set_angle(&mut self, pointer: Vec2) {
        let d = pointer - self.pos.as_vec2();
        if d != Vec2::ZERO {
            self.angle = d.y.atan2(d.x);
        }
    }

    /// Start charging
    pub fn turn_on(&mut self) {
        self.active = true;
    }

    /// Charge one step while active
    pub fn gain_power(&mut self) {
        if self.active && self.power < self.max_power {
            self.power = (self.power + 1.0).min(self.max_power);
        }
    }

    /// Fire a ball from the muzzle and reset the charge
    pub fn shoot(&mut self, radius: f32, color: Color) -> Result<Ball, GeometryError> {
        let vel = unit_from_angle(self.angle) * self.power;
        let ball = Ball::new(self.pos, vel, radius, color)?;
        self.active = false;
        self.power = self.min_power;
        Ok(ball)
    }

    /// Move the gun one step up or down, staying on screen
    pub fn nudge(&mut self, direction: Nudge, step: i32, screen_height: i32) {
        let y = match direction {
            Nudge::Up => self.pos.y.saturating_sub(step),
            Nudge::Down => self.pos.y.saturating_add(step),
        };
        self.pos.y = y.clamp(0, screen_height);
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        let color = if self.active { Color::RED } else { Color::GREY };
        let start = self.pos.as_vec2();
        let end = start + unit_from_angle(self.angle) * (BARREL_BASE + self.power);
        renderer.line(start, end, BARREL_WIDTH, color);
    }
}
