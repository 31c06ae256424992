use bowling_core::bot::{BotPersonality, BotPlayer};
use bowling_core::collision::BodyRef;
use bowling_core::events::{EngineEvent, GameCommand};
use bowling_core::game_loop::run_game_loop;
use bowling_core::lane;
use bowling_shared::config::GameConfig;
use tokio::sync::{broadcast, mpsc};

/// Headless demo: a scripted bot plays one full game against the
/// deterministic lane model, with every scoreboard printed as it lands.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            let mut config = GameConfig::default();
            // Keep the headless run snappy.
            config.time.time_to_next_throw_ms = 400;
            config.time.end_game_time_after_last_throw_ms = 600;
            config
        }
    };

    // Validate configuration before starting
    if let Err(e) = config.validate() {
        eprintln!("Invalid game configuration: {}", e);
        std::process::exit(1);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameCommand>(64);
    let (engine_tx, mut engine_rx) = broadcast::channel::<EngineEvent>(64);

    let loop_config = config.clone();
    let loop_handle = tokio::spawn(async move {
        if let Err(e) = run_game_loop(cmd_rx, engine_tx, loop_config).await {
            tracing::error!("game loop failed: {}", e);
        }
    });

    let mut bot = BotPlayer::new(BotPersonality::Accurate, 42);
    let pin_count = config.game.pin_count;
    let rolls_total = config.game.players.len() * config.game.total_attempts;
    let mut rolls_done = 0usize;

    tracing::info!(rolls = rolls_total, "starting scripted game");
    cmd_tx.send(GameCommand::StartGame).await.unwrap();
    send_throw(&cmd_tx, &mut bot).await;

    while let Ok(event) = engine_rx.recv().await {
        match event {
            EngineEvent::ApplyImpulse { impulse, at } => {
                // The lane model stands in for the physics engine here.
                for pin in lane::struck_pins(impulse, at.x, pin_count) {
                    cmd_tx
                        .send(GameCommand::CollisionEnded {
                            a: BodyRef::Ball,
                            b: BodyRef::Pin(pin),
                        })
                        .await
                        .unwrap();
                }
            }
            EngineEvent::ResetBall { .. } => {
                rolls_done += 1;
                if rolls_done < rolls_total {
                    send_throw(&cmd_tx, &mut bot).await;
                }
            }
            EngineEvent::ScoreboardUpdate(board) => {
                tracing::info!(
                    scoreboard = %serde_json::to_string(&board).unwrap_or_default(),
                    "scores"
                );
            }
            EngineEvent::ShowStartMenu => {
                tracing::info!(rolls = rolls_done, "back at the start menu");
                break;
            }
            _ => {}
        }
    }

    drop(cmd_tx);
    let _ = loop_handle.await;
}

async fn send_throw(cmd_tx: &mpsc::Sender<GameCommand>, bot: &mut BotPlayer) {
    cmd_tx
        .send(GameCommand::AimInput {
            axis_x: bot.next_aim(),
        })
        .await
        .unwrap();
    cmd_tx
        .send(GameCommand::Shoot {
            trigger: bot.next_trigger(),
        })
        .await
        .unwrap();
}
