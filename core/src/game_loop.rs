use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::collision::{classify, CollisionOutcome};
use crate::events::{EngineEvent, GameCommand};
use crate::state::{Game, GamePhase};
use crate::throw;
use bowling_shared::config::GameConfig;
use bowling_shared::vec3::Vec3;

/// Safety cutoff for the shoot sound, independent of the sound's length
const SHOOT_SOUND_CUTOFF: Duration = Duration::from_millis(1500);

/// Timer firings routed back into the loop
#[derive(Debug, Clone, Copy)]
enum TimerEvent {
    /// The roll-settle delay ran out; finalize the roll
    RollSettled,
    /// The end-game delay ran out; hand control back to the start menu
    EndGameElapsed,
    ShootSoundCutoff,
}

/// Pending one-shot timers. Handles are kept so a restart can drop a
/// stale end-game timer instead of letting it fire into the new game.
#[derive(Default)]
struct Timers {
    settle: Option<JoinHandle<()>>,
    end_game: Option<JoinHandle<()>>,
    sound_cutoff: Option<JoinHandle<()>>,
}

impl Timers {
    fn abort_all(&mut self) {
        for handle in [
            self.settle.take(),
            self.end_game.take(),
            self.sound_cutoff.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.abort();
        }
    }
}

fn schedule(tx: &mpsc::Sender<TimerEvent>, event: TimerEvent, delay: Duration) -> JoinHandle<()> {
    let tx = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(event).await;
    })
}

/// Run the game loop. Owns the canonical `Game` state: commands arrive on
/// `cmd_rx`, engine side effects leave on `engine_tx`, and the settle and
/// end-game delays come back through an internal timer channel. Returns
/// when the command channel closes; fails fast on invalid configuration.
pub async fn run_game_loop(
    mut cmd_rx: mpsc::Receiver<GameCommand>,
    engine_tx: broadcast::Sender<EngineEvent>,
    config: GameConfig,
) -> Result<(), String> {
    let mut game = Game::new(&config)?;
    let (timer_tx, mut timer_rx) = mpsc::channel::<TimerEvent>(8);
    let mut timers = Timers::default();

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(cmd) => {
                        handle_command(cmd, &mut game, &engine_tx, &timer_tx, &mut timers, &config)
                    }
                    None => break,
                }
            }

            Some(event) = timer_rx.recv() => {
                handle_timer(event, &mut game, &engine_tx, &timer_tx, &mut timers, &config);
            }
        }
    }

    timers.abort_all();
    tracing::info!("Game loop ended");
    Ok(())
}

fn handle_command(
    cmd: GameCommand,
    game: &mut Game,
    engine_tx: &broadcast::Sender<EngineEvent>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    timers: &mut Timers,
    config: &GameConfig,
) {
    match cmd {
        GameCommand::StartGame => {
            if game.phase() == GamePhase::InProgress {
                tracing::warn!("start requested while a game is in progress; ignored");
                return;
            }
            // A stale end-game timer from the previous session must not
            // fire into the new one.
            if let Some(handle) = timers.end_game.take() {
                handle.abort();
            }
            game.start();
            let _ = engine_tx.send(EngineEvent::ScoreboardUpdate(game.scoreboard()));
            tracing::info!(
                players = game.players().len(),
                attempts = game.total_attempts(),
                "game started"
            );
        }

        GameCommand::AimInput { axis_x } => {
            if !game.is_started() {
                return;
            }
            match game.apply_aim(
                axis_x,
                config.ball.lateral_limit,
                config.ball_control.aim_limit,
            ) {
                Some(aim) => {
                    let _ = engine_tx.send(EngineEvent::AimUpdated {
                        ball_x: aim.ball_x,
                        yaw: aim.yaw,
                    });
                }
                None => tracing::debug!("aim input dropped, roll in flight"),
            }
        }

        GameCommand::Shoot { trigger } => {
            if !game.is_started() {
                tracing::debug!("shot dropped, no game in progress");
                return;
            }
            if !game.begin_roll() {
                // Re-entrant shot: reject it instead of double-applying
                // the impulse.
                tracing::warn!("shot rejected, roll already in flight");
                return;
            }
            let roll = throw::roll_event(trigger, game.aim().yaw, &config.ball_control);
            let at = Vec3::new(
                game.aim().ball_x,
                config.ball.position.y,
                config.ball.position.z,
            );
            let _ = engine_tx.send(EngineEvent::ApplyImpulse {
                impulse: roll.launch_vector,
                at,
            });
            let _ = engine_tx.send(EngineEvent::PlayShootSound);
            timers.sound_cutoff = Some(schedule(
                timer_tx,
                TimerEvent::ShootSoundCutoff,
                SHOOT_SOUND_CUTOFF,
            ));
            timers.settle = Some(schedule(
                timer_tx,
                TimerEvent::RollSettled,
                Duration::from_millis(config.time.time_to_next_throw_ms),
            ));
            tracing::debug!(speed = roll.speed, "ball launched");
        }

        GameCommand::CollisionEnded { a, b } => {
            // Collisions only matter while a roll is in flight.
            if !game.ball_is_rolled() {
                return;
            }
            match classify(a, b) {
                CollisionOutcome::PinStruck(pin) => {
                    if game.register_pin_struck(pin) {
                        let _ = engine_tx.send(EngineEvent::PinSound { pin });
                    }
                }
                CollisionOutcome::BallOffLane => tracing::debug!("ball left the lane"),
                CollisionOutcome::Ignored => {}
            }
        }
    }
}

fn handle_timer(
    event: TimerEvent,
    game: &mut Game,
    engine_tx: &broadcast::Sender<EngineEvent>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    timers: &mut Timers,
    config: &GameConfig,
) {
    match event {
        TimerEvent::RollSettled => {
            timers.settle = None;
            on_roll_settled(game, engine_tx, timer_tx, timers, config);
        }
        TimerEvent::EndGameElapsed => {
            timers.end_game = None;
            let _ = engine_tx.send(EngineEvent::HideScoreboard);
            let _ = engine_tx.send(EngineEvent::ShowStartMenu);
            game.reset();
            tracing::info!("game over, start menu shown");
        }
        TimerEvent::ShootSoundCutoff => {
            timers.sound_cutoff = None;
            let _ = engine_tx.send(EngineEvent::StopShootSound);
        }
    }
}

/// The settle callback: the single place a roll is finalized.
fn on_roll_settled(
    game: &mut Game,
    engine_tx: &broadcast::Sender<EngineEvent>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    timers: &mut Timers,
    config: &GameConfig,
) {
    let value = game.roll_score();
    game.record_roll(value);

    // Full reset: dispose the old pin set, instantiate a fresh one, put
    // the ball back on its spawn. These events are queued before the
    // in-flight latch clears below, so a pending shot cannot race them.
    let generation = game.respawn_pins();
    let _ = engine_tx.send(EngineEvent::RespawnPins { generation });
    let _ = engine_tx.send(EngineEvent::ResetBall {
        position: config.ball.position,
    });
    let _ = engine_tx.send(EngineEvent::ScoreboardUpdate(game.scoreboard()));

    if game.is_last_roll() {
        game.finish_game();
        timers.end_game = Some(schedule(
            timer_tx,
            TimerEvent::EndGameElapsed,
            Duration::from_millis(config.time.end_game_time_after_last_throw_ms),
        ));
        tracing::info!("last roll settled, game over pending");
    }

    game.switch_player();
    game.finish_roll();
    game.initialize_pins();

    tracing::debug!(
        value,
        player = game.current_player_index(),
        frame = game.current_frame_index(),
        "roll settled"
    );
}
