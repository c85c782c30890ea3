//! Demo mode: the game plays itself
//!
//! Produces the same `TickInput` a player would. Aims at the nearest live
//! target, compensating for the drop of a full-power shot, charges to full
//! power and releases. Keeps at most `MAX_BALLS_IN_FLIGHT` balls on the
//! field, so a ball stuck bouncing on a wall does not stall the demo.

use glam::Vec2;
use rand::Rng;

use super::input::{InputEvent, MouseButton, TickInput};
use super::manager::Manager;

const MAX_BALLS_IN_FLIGHT: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    shots: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots released so far
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Input for the next tick of `manager`
    pub fn next_input<R: Rng>(&mut self, manager: &Manager<R>) -> TickInput {
        let gun = manager.gun();
        let config = manager.config();
        let origin = gun.pos().as_vec2();

        let nearest = manager
            .targets()
            .iter()
            .filter(|t| t.is_alive())
            .map(|t| t.pos().as_vec2())
            .min_by(|a, b| {
                a.distance_squared(origin)
                    .partial_cmp(&b.distance_squared(origin))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let pointer = match nearest {
            Some(target) => {
                // Lead upward by the fall over the flight time at full power
                let speed = gun.max_power() / config.dt;
                let flight = target.distance(origin) / speed.max(f32::EPSILON);
                let drop = 0.5 * config.gravity * flight * flight;
                target - Vec2::new(0.0, drop)
            }
            None => config.center(),
        };

        let mut input = TickInput::idle(pointer);
        if gun.is_active() {
            if gun.power() >= gun.max_power() {
                input.events.push(InputEvent::MouseUp(MouseButton::FIRE));
                self.shots += 1;
            }
        } else if manager.balls().len() < MAX_BALLS_IN_FLIGHT && nearest.is_some() {
            input.events.push(InputEvent::MouseDown(MouseButton::FIRE));
        }
        input
    }
}
