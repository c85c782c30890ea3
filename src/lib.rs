//! Artillery - projectile physics core for a gun-and-targets game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, waves)
//! - `render`: Draw-call boundary consumed by a frontend
//! - `config`: Immutable game configuration
//! - `error`: Construction and configuration errors

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, GeometryError};
pub use render::{Color, DrawCommand, RecordingRenderer, Renderer};
pub use sim::{ArenaPhase, Manager, TickInput, TickOutcome};

/// Default game constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    /// Frontend frame rate; the simulation itself runs one step per frame
    pub const FPS: u32 = 30;
    /// Simulation timestep in ticks
    pub const DT: f32 = 1.0;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Screen-edge bounce: normal restitution
    pub const EDGE_RESTITUTION: f32 = 0.8;
    /// Screen-edge bounce: tangential friction
    pub const EDGE_FRICTION: f32 = 0.9;

    /// Gun defaults
    pub const GUN_MIN_POWER: f32 = 10.0;
    pub const GUN_MAX_POWER: f32 = 40.0;
    /// Vertical nudge per key press
    pub const GUN_STEP: i32 = 10;
    pub const GUN_START: (i32, i32) = (40, 450);

    /// Wave defaults
    pub const TARGETS_PER_WAVE: usize = 3;
    pub const TARGET_RADIUS_MIN: i32 = 15;
    pub const TARGET_RADIUS_MAX: i32 = 30;
    /// Targets never shrink below this
    pub const TARGET_RADIUS_FLOOR: i32 = 3;
    pub const BASE_WALLS: usize = 5;
    /// One extra wall per this many points
    pub const SCORE_PER_EXTRA_WALL: u32 = 10;
    pub const WALL_LENGTH_MIN: f32 = 40.0;
    pub const WALL_LENGTH_MAX: f32 = 120.0;
    pub const WALL_WIDTH_MIN: f32 = 10.0;
    pub const WALL_WIDTH_MAX: f32 = 25.0;
}
