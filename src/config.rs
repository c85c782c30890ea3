//! Game configuration
//!
//! Screen size, physics constants and wave tuning, bundled into one
//! immutable value handed to the `Manager` at construction. Loadable from a
//! JSON file; every field falls back to the defaults in `crate::consts`.

use std::fs;
use std::path::Path;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub screen_width: i32,
    pub screen_height: i32,
    /// Frame rate the frontend clock should hold
    pub fps: u32,

    // === Physics ===
    /// Timestep per tick
    pub dt: f32,
    /// Downward acceleration (screen y grows downward)
    pub gravity: f32,
    pub ball_radius: f32,
    /// Normal restitution for screen-edge bounces
    pub edge_restitution: f32,
    /// Tangential friction for screen-edge bounces
    pub edge_friction: f32,

    // === Gun ===
    pub gun_min_power: f32,
    pub gun_max_power: f32,
    pub gun_step: i32,
    pub gun_start: (i32, i32),

    // === Waves ===
    pub targets_per_wave: usize,
    pub target_radius_min: i32,
    pub target_radius_max: i32,
    pub target_radius_floor: i32,
    pub base_walls: usize,
    pub score_per_extra_wall: u32,
    pub wall_length_min: f32,
    pub wall_length_max: f32,
    pub wall_width_min: f32,
    pub wall_width_max: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            dt: DT,
            gravity: GRAVITY,
            ball_radius: BALL_RADIUS,
            edge_restitution: EDGE_RESTITUTION,
            edge_friction: EDGE_FRICTION,

            gun_min_power: GUN_MIN_POWER,
            gun_max_power: GUN_MAX_POWER,
            gun_step: GUN_STEP,
            gun_start: GUN_START,

            targets_per_wave: TARGETS_PER_WAVE,
            target_radius_min: TARGET_RADIUS_MIN,
            target_radius_max: TARGET_RADIUS_MAX,
            target_radius_floor: TARGET_RADIUS_FLOOR,
            base_walls: BASE_WALLS,
            score_per_extra_wall: SCORE_PER_EXTRA_WALL,
            wall_length_min: WALL_LENGTH_MIN,
            wall_length_max: WALL_LENGTH_MAX,
            wall_width_min: WALL_WIDTH_MIN,
            wall_width_max: WALL_WIDTH_MAX,
        }
    }
}

impl GameConfig {
    /// Arena extent as a vector
    pub fn screen(&self) -> IVec2 {
        IVec2::new(self.screen_width, self.screen_height)
    }

    /// Arena center
    pub fn center(&self) -> Vec2 {
        self.screen().as_vec2() / 2.0
    }

    pub fn gun_start(&self) -> IVec2 {
        IVec2::new(self.gun_start.0, self.gun_start.1)
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::invalid(
                "screen",
                format!("{}x{} is not a positive size", self.screen_width, self.screen_height),
            ));
        }
        if self.fps == 0 {
            return Err(ConfigError::invalid("fps", "must be non-zero"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::invalid("dt", format!("{} is not positive", self.dt)));
        }
        // Per-tick motion must stay well inside the arena so integer positions cannot overflow
        let span = self.screen_width.min(self.screen_height) as f32;
        let fall = self.gravity.abs() * self.dt * self.dt;
        if !(fall.is_finite() && fall <= span) {
            return Err(ConfigError::invalid(
                "gravity",
                format!("{} per tick exceeds the arena size {span}", self.gravity),
            ));
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::invalid("ball_radius", "must be positive"));
        }
        if 2.0 * self.ball_radius > self.screen_width.min(self.screen_height) as f32 {
            return Err(ConfigError::invalid("ball_radius", "ball does not fit the screen"));
        }
        for (field, coef) in [
            ("edge_restitution", self.edge_restitution),
            ("edge_friction", self.edge_friction),
        ] {
            if !(0.0..=1.0).contains(&coef) {
                return Err(ConfigError::invalid(field, format!("{coef} outside [0, 1]")));
            }
        }
        if !(self.gun_min_power >= 0.0 && self.gun_min_power <= self.gun_max_power) {
            return Err(ConfigError::invalid(
                "gun_min_power",
                format!("{} > max {}", self.gun_min_power, self.gun_max_power),
            ));
        }
        let muzzle = self.gun_max_power * self.dt;
        if !(muzzle.is_finite() && muzzle <= span) {
            return Err(ConfigError::invalid(
                "gun_max_power",
                format!("{} per tick exceeds the arena size {span}", self.gun_max_power),
            ));
        }
        if !(0..=self.screen_height).contains(&self.gun_step) {
            return Err(ConfigError::invalid(
                "gun_step",
                format!("{} outside [0, {}]", self.gun_step, self.screen_height),
            ));
        }
        if self.targets_per_wave == 0 {
            return Err(ConfigError::invalid("targets_per_wave", "must be non-zero"));
        }
        if self.target_radius_floor <= 0 {
            return Err(ConfigError::invalid("target_radius_floor", "must be positive"));
        }
        if self.target_radius_min > self.target_radius_max {
            return Err(ConfigError::invalid("target_radius_min", "range is inverted"));
        }
        if 2 * self.target_radius_max.max(self.target_radius_floor) >= self.screen_width / 2
            || 2 * self.target_radius_max.max(self.target_radius_floor) >= self.screen_height
        {
            return Err(ConfigError::invalid("target_radius_max", "targets do not fit the arena"));
        }
        if self.score_per_extra_wall == 0 {
            return Err(ConfigError::invalid("score_per_extra_wall", "must be non-zero"));
        }
        if !(self.wall_length_min > 0.0 && self.wall_length_min <= self.wall_length_max) {
            return Err(ConfigError::invalid("wall_length_min", "range must be positive and ordered"));
        }
        if !(self.wall_width_min > 0.0 && self.wall_width_min <= self.wall_width_max) {
            return Err(ConfigError::invalid("wall_width_min", "range must be positive and ordered"));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_power() {
        let config = GameConfig {
            gun_min_power: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "gun_min_power", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_restitution() {
        let config = GameConfig {
            edge_restitution: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "gravity": 2.5, "targets_per_wave": 4 }"#).unwrap();
        assert_eq!(config.gravity, 2.5);
        assert_eq!(config.targets_per_wave, 4);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("artillery-config-{}.json", std::process::id()));
        let config = GameConfig {
            gun_step: 7,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let path = std::env::temp_dir().join(format!("artillery-bad-{}.json", std::process::id()));
        fs::write(&path, "{ \"gravity\": ").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_runaway_gravity() {
        for gravity in [1e10, -1e10, f32::INFINITY, f32::NAN] {
            let config = GameConfig {
                gravity,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { field: "gravity", .. })
            ));
        }
        // Large dt scales the per-tick fall too
        let config = GameConfig {
            dt: 1e6,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_runaway_power() {
        for gun_max_power in [f32::INFINITY, 1e10, 601.0] {
            let config = GameConfig {
                gun_max_power,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { field: "gun_max_power", .. })
            ));
        }
        let config = GameConfig {
            gun_max_power: 600.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_gun_step() {
        for gun_step in [i32::MAX, 601, -1] {
            let config = GameConfig {
                gun_step,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { field: "gun_step", .. })
            ));
        }
    }
}
