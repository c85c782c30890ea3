//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - No windowing or platform dependencies; drawing goes through `Renderer`

pub mod autopilot;
pub mod ball;
pub mod gun;
pub mod input;
pub mod manager;
pub mod score;
pub mod target;
pub mod vector;
pub mod wall;

pub use autopilot::Autopilot;
pub use ball::{Ball, EdgeBounce};
pub use gun::{Gun, Nudge};
pub use input::{InputEvent, Key, MouseButton, TickInput};
pub use manager::{ArenaPhase, Manager, TickOutcome};
pub use score::ScoreTable;
pub use target::Target;
pub use vector::{flip_velocity, unit_from_angle};
pub use wall::{Wall, WallHit};
