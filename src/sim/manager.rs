//! Fixed-order tick orchestration and wave lifecycle
//!
//! One call to `Manager::process` is one frame:
//! handle events → maybe spawn a wave → collisions → prune → move → draw.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, EdgeBounce};
use super::gun::{Gun, Nudge};
use super::input::{InputEvent, Key, MouseButton, TickInput};
use super::score::ScoreTable;
use super::target::Target;
use super::wall::Wall;
use crate::config::GameConfig;
use crate::error::{ConfigError, GeometryError};
use crate::render::{Color, Renderer};

/// Arena lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaPhase {
    /// No targets and no balls: the next wave spawns this tick
    Idle,
    /// At least one target or ball on the field
    Active,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// A quit event arrived; the caller should stop ticking
    pub quit: bool,
    /// Phase observed at the spawn check
    pub phase: ArenaPhase,
    pub wave_spawned: bool,
}

/// Owns every entity and advances the game one tick at a time
#[derive(Debug, Clone)]
pub struct Manager<R = Pcg32> {
    config: GameConfig,
    rng: R,
    balls: Vec<Ball>,
    targets: Vec<Target>,
    walls: Vec<Wall>,
    gun: Gun,
    score: ScoreTable,
    phase: ArenaPhase,
    tick_count: u64,
    wave_index: u32,
}

impl Manager<Pcg32> {
    /// Manager with a PCG generator seeded from `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Manager<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let gun = Gun::new(config.gun_start(), config.gun_min_power, config.gun_max_power);
        Ok(Self {
            config,
            rng,
            balls: Vec::new(),
            targets: Vec::new(),
            walls: Vec::new(),
            gun,
            score: ScoreTable::new(),
            phase: ArenaPhase::Idle,
            tick_count: 0,
            wave_index: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn gun(&self) -> &Gun {
        &self.gun
    }

    pub fn score(&self) -> &ScoreTable {
        &self.score
    }

    /// Phase seen at the most recent spawn check
    pub fn phase(&self) -> ArenaPhase {
        self.phase
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of waves spawned so far
    pub fn wave_index(&self) -> u32 {
        self.wave_index
    }

    fn arena_phase(&self) -> ArenaPhase {
        if self.targets.is_empty() && self.balls.is_empty() {
            ArenaPhase::Idle
        } else {
            ArenaPhase::Active
        }
    }

    /// Advance the game by one tick and draw the result
    pub fn process(
        &mut self,
        input: &TickInput,
        renderer: &mut impl Renderer,
    ) -> Result<TickOutcome, GeometryError> {
        self.tick_count += 1;

        let quit = self.handle_events(input)?;

        self.phase = self.arena_phase();
        let wave_spawned = self.phase == ArenaPhase::Idle;
        if wave_spawned {
            self.spawn_wave()?;
        }

        self.check_collisions();
        self.check_alive();
        self.move_entities();
        self.draw(renderer);

        Ok(TickOutcome {
            quit,
            phase: self.phase,
            wave_spawned,
        })
    }

    /// Apply this tick's input; returns whether quit was requested
    fn handle_events(&mut self, input: &TickInput) -> Result<bool, GeometryError> {
        let mut quit = false;
        self.gun.set_angle(input.pointer);

        for event in &input.events {
            match *event {
                InputEvent::Quit => quit = true,
                InputEvent::KeyDown(key) => {
                    let direction = match key {
                        Key::Up => Nudge::Up,
                        Key::Down => Nudge::Down,
                    };
                    self.gun
                        .nudge(direction, self.config.gun_step, self.config.screen_height);
                }
                InputEvent::KeyUp(_) => {}
                InputEvent::MouseDown(MouseButton::FIRE) => self.gun.turn_on(),
                InputEvent::MouseUp(MouseButton::FIRE) if self.gun.is_active() => self.fire()?,
                InputEvent::MouseDown(_) | InputEvent::MouseUp(_) => {}
            }
        }

        Ok(quit)
    }

    fn fire(&mut self) -> Result<(), GeometryError> {
        let color = self.random_color();
        let power = self.gun.power();
        let ball = self.gun.shoot(self.config.ball_radius, color)?;
        self.score.ball_used();
        log::debug!(
            "Shot #{} at power {power}, velocity {}",
            self.score.balls_used(),
            ball.vel()
        );
        self.balls.push(ball);
        Ok(())
    }

    /// Replace the walls and put a fresh set of targets on the field
    ///
    /// The whole wave is built before anything on the field changes, so a
    /// failed constructor leaves the arena as it was.
    fn spawn_wave(&mut self) -> Result<(), GeometryError> {
        let score = self.score.score();

        let targets = (0..self.config.targets_per_wave)
            .map(|_| self.random_target(score))
            .collect::<Result<Vec<_>, _>>()?;
        let wall_count =
            self.config.base_walls + (score / self.config.score_per_extra_wall) as usize;
        let walls = (0..wall_count)
            .map(|_| self.random_wall())
            .collect::<Result<Vec<_>, _>>()?;

        self.wave_index += 1;
        self.targets.extend(targets);
        self.walls = walls;

        log::info!(
            "Wave {}: {} targets, {} walls (score {})",
            self.wave_index,
            self.targets.len(),
            self.walls.len(),
            score
        );
        Ok(())
    }

    /// Targets shrink as the score grows, down to the configured floor
    fn random_target(&mut self, score: u32) -> Result<Target, GeometryError> {
        let cfg = &self.config;
        let base = self
            .rng
            .random_range(cfg.target_radius_min..=cfg.target_radius_max);
        let radius = (i64::from(base) - i64::from(score)).max(i64::from(cfg.target_radius_floor));
        // radius <= max(target_radius_max, floor), so it fits in i32
        let radius = radius as i32;

        let x = self
            .rng
            .random_range(cfg.screen_width / 2 + radius..=cfg.screen_width - radius);
        let y = self.rng.random_range(radius..=cfg.screen_height - radius);
        let color = self.random_color();
        Target::new(IVec2::new(x, y), radius as f32, color)
    }

    fn random_wall(&mut self) -> Result<Wall, GeometryError> {
        let w = self.config.screen_width as f32;
        let h = self.config.screen_height as f32;
        let center = Vec2::new(
            self.rng.random_range(w * 0.25..=w * 0.9),
            self.rng.random_range(h * 0.1..=h * 0.9),
        );
        let length = self
            .rng
            .random_range(self.config.wall_length_min..=self.config.wall_length_max);
        let width = self
            .rng
            .random_range(self.config.wall_width_min..=self.config.wall_width_max);
        let angle = self.rng.random_range(0.0..std::f32::consts::PI);
        Wall::new(center, length, width, angle, Color::GREY)
    }

    fn random_color(&mut self) -> Color {
        Color::PALETTE[self.rng.random_range(0..Color::PALETTE.len())]
    }

    fn check_collisions(&mut self) {
        let dt = self.config.dt;
        for ball in &mut self.balls {
            for target in self.targets.iter_mut().filter(|t| t.is_alive()) {
                if target.check_collision(ball) {
                    target.hit();
                    self.score.target_hit();
                    log::debug!(
                        "Target at {} hit, score {}",
                        target.pos(),
                        self.score.score()
                    );
                }
            }
            for wall in &self.walls {
                wall.collision(ball, dt);
            }
        }
    }

    /// Drop settled balls and struck targets
    fn check_alive(&mut self) {
        self.balls.retain(Ball::is_alive);
        self.targets.retain(Target::is_alive);
    }

    fn move_entities(&mut self) {
        let bounce = EdgeBounce {
            restitution: self.config.edge_restitution,
            friction: self.config.edge_friction,
        };
        let screen = self.config.screen();
        for ball in &mut self.balls {
            ball.move_step(self.config.dt, self.config.gravity, screen, bounce);
        }
        self.gun.gain_power();
    }

    fn draw(&self, renderer: &mut impl Renderer) {
        renderer.clear(Color::BLACK);
        for wall in &self.walls {
            wall.draw(renderer);
        }
        for target in &self.targets {
            target.draw(renderer);
        }
        for ball in &self.balls {
            ball.draw(renderer);
        }
        self.gun.draw(renderer);
        self.score.draw(renderer);
    }
}
