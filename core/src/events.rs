use crate::collision::BodyRef;
use crate::player::Player;
use bowling_shared::vec3::Vec3;

// === Input layer -> game loop ===

/// Commands into the game loop from the engine/input layer.
#[derive(Debug, Clone, Copy)]
pub enum GameCommand {
    /// Start-menu trigger: begin a fresh game
    StartGame,
    /// One aim axis sample, x in [-1, 1]
    AimInput { axis_x: f64 },
    /// Shoot request carrying the trigger pull value in [0, 1]
    Shoot { trigger: f64 },
    /// A physics collision-end notification
    CollisionEnded { a: BodyRef, b: BodyRef },
}

// === Game loop -> engine layer ===

/// Side effects for the engine layer, broadcast by the game loop.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// New aim state: write the ball's lateral offset and the
    /// aim-indicator yaw
    AimUpdated { ball_x: f64, yaw: f64 },
    /// Apply a launch impulse to the ball body at its current position
    ApplyImpulse { impulse: Vec3, at: Vec3 },
    PlayShootSound,
    /// Safety cutoff for the shoot sound
    StopShootSound,
    /// First strike of a pin this roll
    PinSound { pin: u8 },
    /// Dispose every current pin and instantiate a fresh set
    RespawnPins { generation: u32 },
    /// Zero the ball's linear and angular velocity, reset its rotation,
    /// and move it to `position`
    ResetBall { position: Vec3 },
    ScoreboardUpdate(ScoreboardMsg),
    HideScoreboard,
    ShowStartMenu,
}

/// Scoreboard snapshot pushed to the display after every roll.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardMsg {
    pub players: Vec<PlayerScoreWire>,
    pub current_player_index: usize,
    pub current_frame_index: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreWire {
    pub name: String,
    pub scores: Vec<u32>,
    pub overall_score: u32,
}

impl PlayerScoreWire {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            scores: player.scores.clone(),
            overall_score: player.overall_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoreboard_serializes_camel_case() {
        let msg = ScoreboardMsg {
            players: vec![PlayerScoreWire {
                name: "A".to_string(),
                scores: vec![3, 10],
                overall_score: 13,
            }],
            current_player_index: 0,
            current_frame_index: 2,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"overallScore\":13"));
        assert!(json.contains("\"currentFrameIndex\":2"));
        let parsed: ScoreboardMsg = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.players[0].scores, vec![3, 10]);
    }

    #[test]
    fn wire_snapshot_matches_player() {
        let mut player = Player::new("B");
        player.record_roll(4);
        player.record_roll(6);
        let wire = PlayerScoreWire::from_player(&player);
        assert_eq!(wire.name, "B");
        assert_eq!(wire.scores, vec![4, 6]);
        assert_eq!(wire.overall_score, 10);
    }
}
