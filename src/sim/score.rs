//! Score bookkeeping
//!
//! Only the two counters are stored. The score is derived from them every
//! time it is read, so it can never go stale or negative.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::{Color, Renderer};

/// Line height of the score readout
const LINE_HEIGHT: f32 = 24.0;
const ORIGIN: Vec2 = Vec2::new(10.0, 10.0);

/// Hit and shot counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    targets_hit: u32,
    balls_used: u32,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets_hit(&self) -> u32 {
        self.targets_hit
    }

    pub fn balls_used(&self) -> u32 {
        self.balls_used
    }

    pub fn target_hit(&mut self) {
        self.targets_hit += 1;
    }

    pub fn ball_used(&mut self) {
        self.balls_used += 1;
    }

    /// Hits minus shots, floored at zero
    pub fn score(&self) -> u32 {
        self.targets_hit.saturating_sub(self.balls_used)
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        let lines = [
            format!("Score: {}", self.score()),
            format!("Targets hit: {}", self.targets_hit),
            format!("Balls used: {}", self.balls_used),
        ];
        for (i, line) in lines.iter().enumerate() {
            let pos = ORIGIN + Vec2::new(0.0, i as f32 * LINE_HEIGHT);
            renderer.text(pos, line, Color::WHITE);
        }
    }
}
