use crate::vec3::Vec3;

/// Ball placement configuration
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallConfig {
    /// Spawn position, also the reset target after every roll
    pub position: Vec3,
    /// Maximum lateral offset from the lane center (world units)
    pub lateral_limit: f64,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.5, -9.0),
            lateral_limit: 1.2,
        }
    }
}

/// Aim and launch-speed configuration
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallControlConfig {
    /// Aim yaw range is [-aimLimit, aimLimit] (radians)
    pub aim_limit: f64,
    /// Launch speed at trigger value 0
    pub min_speed: f64,
    /// Launch speed at trigger value 1
    pub max_speed: f64,
    /// Scales aim yaw into the lateral impulse component
    pub lateral_impulse_factor: f64,
}

impl Default for BallControlConfig {
    fn default() -> Self {
        Self {
            aim_limit: 0.25,             // radians (~14 degrees)
            min_speed: 5.0,
            max_speed: 20.0,
            lateral_impulse_factor: 120.0,
        }
    }
}

/// Roll and end-of-game delays
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingConfig {
    /// Delay between a shot and the pin/ball reset (ms)
    pub time_to_next_throw_ms: u64,
    /// Delay between the last roll's reset and the start menu (ms)
    pub end_game_time_after_last_throw_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            time_to_next_throw_ms: 5000,
            end_game_time_after_last_throw_ms: 4000,
        }
    }
}

/// Session rules: who plays and for how many rolls
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Turn order is the order of this list
    pub players: Vec<String>,
    /// Rolls per player per game
    pub total_attempts: usize,
    /// Pins instantiated on every reset
    pub pin_count: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            players: vec!["Player 1".to_string(), "Player 2".to_string()],
            total_attempts: 5,
            pin_count: 10,
        }
    }
}

/// Camera spawn, consumed by the engine layer only
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfig {
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.2, -13.0),
        }
    }
}

/// Root game configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default)]
    pub ball: BallConfig,
    #[serde(default)]
    pub ball_control: BallControlConfig,
    #[serde(default = "default_gravity")]
    pub gravity: Vec3,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub time: TimingConfig,
    #[serde(default)]
    pub game: RulesConfig,
}

fn default_gravity() -> Vec3 {
    Vec3::new(0.0, -9.81, 0.0)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball: BallConfig::default(),
            ball_control: BallControlConfig::default(),
            gravity: default_gravity(),
            camera: CameraConfig::default(),
            time: TimingConfig::default(),
            game: RulesConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path, e))?;
        serde_json::from_str(&text).map_err(|e| format!("failed to parse {}: {}", path, e))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.game.players.is_empty() {
            return Err("players must not be empty".to_string());
        }
        if self.game.total_attempts == 0 {
            return Err("totalAttempts must be > 0".to_string());
        }
        if self.game.pin_count == 0 {
            return Err("pinCount must be > 0".to_string());
        }
        if !self.ball_control.min_speed.is_finite() || !self.ball_control.max_speed.is_finite() {
            return Err("speed bounds must be finite".to_string());
        }
        if self.ball_control.min_speed >= self.ball_control.max_speed {
            return Err("minSpeed must be < maxSpeed".to_string());
        }
        if !self.ball_control.aim_limit.is_finite() || self.ball_control.aim_limit <= 0.0 {
            return Err("aimLimit must be finite and > 0".to_string());
        }
        if !self.ball_control.lateral_impulse_factor.is_finite() {
            return Err("lateralImpulseFactor must be finite".to_string());
        }
        if !self.ball.lateral_limit.is_finite() || self.ball.lateral_limit <= 0.0 {
            return Err("ball lateralLimit must be finite and > 0".to_string());
        }
        if !self.ball.position.is_finite() {
            return Err("ball position must be finite".to_string());
        }
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        if self.time.time_to_next_throw_ms == 0 {
            return Err("timeToNextThrowMs must be > 0".to_string());
        }
        if self.time.end_game_time_after_last_throw_ms == 0 {
            return Err("endGameTimeAfterLastThrowMs must be > 0".to_string());
        }
        Ok(())
    }
}
