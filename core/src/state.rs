use crate::aim::{self, AimSample};
use crate::events::{PlayerScoreWire, ScoreboardMsg};
use crate::pins::{PinSet, RollTracker};
use crate::player::Player;
use bowling_shared::config::GameConfig;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting in the start menu; gameplay input is ignored
    NotStarted,
    InProgress,
    /// Last roll settled; waiting for the end-game delay to run out
    Ended,
}

/// Canonical turn/frame/score state, owned exclusively by the game loop.
/// Every mutation goes through a method here so the turn invariants hold.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    current_player_index: usize,
    /// Roll number within each player's turn. Stays in
    /// [0, total_attempts) while the phase is InProgress.
    current_frame_index: usize,
    total_attempts: usize,
    phase: GamePhase,
    /// True from the moment a shot fires until the settle reset completes
    ball_is_rolled: bool,
    aim: AimSample,
    pins: PinSet,
    roll: RollTracker,
    spawn_x: f64,
}

impl Game {
    /// Build a fresh session from the configuration. Configuration errors
    /// abort construction.
    pub fn new(config: &GameConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            players: config.game.players.iter().map(|name| Player::new(name.clone())).collect(),
            current_player_index: 0,
            current_frame_index: 0,
            total_attempts: config.game.total_attempts,
            phase: GamePhase::NotStarted,
            ball_is_rolled: false,
            aim: AimSample {
                ball_x: config.ball.position.x,
                yaw: 0.0,
            },
            pins: PinSet::new(config.game.pin_count),
            roll: RollTracker::default(),
            spawn_x: config.ball.position.x,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase == GamePhase::InProgress
    }

    pub fn ball_is_rolled(&self) -> bool {
        self.ball_is_rolled
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    pub fn aim(&self) -> AimSample {
        self.aim
    }

    pub fn pin_generation(&self) -> u32 {
        self.pins.generation()
    }

    /// Begin a fresh game: zero every counter and score. The external
    /// start-menu flow is the only caller.
    pub fn start(&mut self) {
        self.reset_session();
        self.phase = GamePhase::InProgress;
    }

    /// Back to the pre-game state once the start menu is up again.
    pub fn reset(&mut self) {
        self.reset_session();
        self.phase = GamePhase::NotStarted;
    }

    fn reset_session(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.current_player_index = 0;
        self.current_frame_index = 0;
        self.ball_is_rolled = false;
        self.roll.clear();
    }

    /// Apply one aim sample. Returns None while a roll is in flight: aim
    /// input is ignored until the reset completes.
    pub fn apply_aim(
        &mut self,
        axis_x: f64,
        lateral_limit: f64,
        aim_limit: f64,
    ) -> Option<AimSample> {
        if self.ball_is_rolled {
            return None;
        }
        self.aim = aim::angle_to_aim(axis_x, lateral_limit, aim_limit);
        Some(self.aim)
    }

    /// Latch the in-flight state for an accepted shot. Returns false if a
    /// roll is already in flight; the caller must not apply an impulse.
    pub fn begin_roll(&mut self) -> bool {
        if self.ball_is_rolled {
            return false;
        }
        self.ball_is_rolled = true;
        true
    }

    /// Bookkeep a struck pin. True when the pin counts, i.e. its first
    /// strike this roll while the ball is in flight.
    pub fn register_pin_struck(&mut self, pin: u8) -> bool {
        if !self.ball_is_rolled {
            return false;
        }
        self.roll.count(pin)
    }

    /// Value of the roll in flight so far.
    pub fn roll_score(&self) -> u32 {
        self.roll.score()
    }

    /// Append the completed roll's value to the current player.
    pub fn record_roll(&mut self, value: u32) {
        self.players[self.current_player_index].record_roll(value);
    }

    /// Advance the turn. A wraparound to the first player starts the next
    /// frame.
    pub fn switch_player(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        if self.current_player_index == 0 {
            self.current_frame_index += 1;
        }
    }

    /// True exactly once per game: the last player's roll of the last
    /// frame.
    pub fn is_last_roll(&self) -> bool {
        self.current_frame_index == self.total_attempts - 1
            && self.current_player_index == self.players.len() - 1
    }

    /// Replace the pin set; returns the new generation for the respawn
    /// request.
    pub fn respawn_pins(&mut self) -> u32 {
        self.pins.respawn()
    }

    /// Reset the per-roll pin bookkeeping. Runs on every settle.
    pub fn initialize_pins(&mut self) {
        self.roll.clear();
    }

    /// Clear the in-flight latch and put the tracked lateral offset back
    /// at the spawn column.
    pub fn finish_roll(&mut self) {
        self.ball_is_rolled = false;
        self.aim.ball_x = self.spawn_x;
    }

    /// Last roll settled: gameplay input stays off until the menu cycle
    /// completes.
    pub fn finish_game(&mut self) {
        self.phase = GamePhase::Ended;
    }

    pub fn scoreboard(&self) -> ScoreboardMsg {
        ScoreboardMsg {
            players: self.players.iter().map(PlayerScoreWire::from_player).collect(),
            current_player_index: self.current_player_index,
            current_frame_index: self.current_frame_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game() -> Game {
        let mut config = GameConfig::default();
        config.game.players = vec!["A".to_string(), "B".to_string()];
        config.game.total_attempts = 5;
        Game::new(&config).unwrap()
    }

    #[test]
    fn new_game_is_not_started() {
        let game = test_game();
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(!game.is_started());
        assert!(!game.ball_is_rolled());
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.current_frame_index(), 0);
    }

    #[test]
    fn invalid_config_aborts_construction() {
        let mut config = GameConfig::default();
        config.game.players.clear();
        assert!(Game::new(&config).is_err());
    }

    #[test]
    fn start_moves_to_in_progress() {
        let mut game = test_game();
        game.start();
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn full_rotation_restores_player_and_advances_frame() {
        let mut game = test_game();
        game.start();
        let players = game.players().len();
        for _ in 0..players {
            game.switch_player();
        }
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.current_frame_index(), 1);
    }

    #[test]
    fn is_last_roll_true_exactly_once_per_game() {
        let mut game = test_game();
        game.start();
        let rolls = game.players().len() * game.total_attempts();
        let mut last_roll_hits = 0;
        for roll in 0..rolls {
            if game.is_last_roll() {
                last_roll_hits += 1;
                assert_eq!(roll, rolls - 1);
                assert_eq!(game.current_frame_index(), game.total_attempts() - 1);
                assert_eq!(game.current_player_index(), game.players().len() - 1);
            }
            game.switch_player();
        }
        assert_eq!(last_roll_hits, 1);
    }

    #[test]
    fn record_roll_goes_to_the_current_player() {
        let mut game = test_game();
        game.start();
        game.record_roll(7);
        game.switch_player();
        game.record_roll(3);
        assert_eq!(game.players()[0].scores, vec![7]);
        assert_eq!(game.players()[1].scores, vec![3]);
        assert_eq!(game.players()[0].overall_score, 7);
    }

    #[test]
    fn pin_strikes_require_a_roll_in_flight() {
        let mut game = test_game();
        game.start();
        assert!(!game.register_pin_struck(0));

        assert!(game.begin_roll());
        assert!(game.register_pin_struck(0));
        assert!(!game.register_pin_struck(0));
        assert!(game.register_pin_struck(5));
        assert_eq!(game.roll_score(), 2);
    }

    #[test]
    fn begin_roll_rejects_reentrant_shot() {
        let mut game = test_game();
        game.start();
        assert!(game.begin_roll());
        assert!(!game.begin_roll());
    }

    #[test]
    fn aim_is_ignored_while_ball_is_rolled() {
        let mut game = test_game();
        game.start();
        assert!(game.apply_aim(0.5, 1.2, 0.25).is_some());
        game.begin_roll();
        assert!(game.apply_aim(-0.5, 1.2, 0.25).is_none());
        // previous aim survives the dropped sample
        assert_eq!(game.aim().yaw, 0.125);
    }

    #[test]
    fn finish_roll_clears_latch_and_recenters_ball() {
        let mut game = test_game();
        game.start();
        game.apply_aim(1.0, 1.2, 0.25);
        game.begin_roll();
        game.finish_roll();
        assert!(!game.ball_is_rolled());
        assert_eq!(game.aim().ball_x, 0.0);
    }

    #[test]
    fn initialize_pins_resets_roll_tracking() {
        let mut game = test_game();
        game.start();
        game.begin_roll();
        game.register_pin_struck(1);
        game.initialize_pins();
        assert_eq!(game.roll_score(), 0);
    }

    #[test]
    fn respawn_pins_bumps_generation() {
        let mut game = test_game();
        let first = game.respawn_pins();
        let second = game.respawn_pins();
        assert_eq!(second, first + 1);
        assert_eq!(game.pin_generation(), second);
    }

    // 2 players, 5 attempts, 10 rolls total. The turn has advanced 9
    // times when the 10th roll begins, and that roll is the last one.
    #[test]
    fn two_player_five_attempt_game_runs_ten_rolls() {
        let mut game = test_game();
        game.start();

        let mut switches = 0;
        for roll in 0..10 {
            assert!(game.is_started());
            assert!(
                game.current_frame_index() < game.total_attempts(),
                "frame index must stay bounded while in progress"
            );
            game.begin_roll();
            game.register_pin_struck((roll % 10) as u8);
            game.record_roll(game.roll_score());

            let last = game.is_last_roll();
            assert_eq!(last, roll == 9);
            if last {
                game.finish_game();
            } else {
                assert_eq!(switches, roll);
            }
            game.switch_player();
            switches += 1;
            game.finish_roll();
            game.initialize_pins();
        }

        assert_eq!(switches, 10);
        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.players()[0].scores.len(), 5);
        assert_eq!(game.players()[1].scores.len(), 5);
    }

    #[test]
    fn reset_returns_to_pre_game_state() {
        let mut game = test_game();
        game.start();
        game.record_roll(8);
        game.switch_player();
        game.finish_game();
        game.reset();

        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.current_frame_index(), 0);
        assert!(game.players().iter().all(|p| p.scores.is_empty()));
    }

    #[test]
    fn scoreboard_snapshots_all_players() {
        let mut game = test_game();
        game.start();
        game.record_roll(6);
        let board = game.scoreboard();
        assert_eq!(board.players.len(), 2);
        assert_eq!(board.players[0].overall_score, 6);
        assert_eq!(board.current_player_index, 0);
    }
}
