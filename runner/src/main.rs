mod autopilot;
mod config;
mod driver;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::config::Validate;
use snake_engine::game::SessionController;
use snake_engine::{log, logger};

use autopilot::Autopilot;
use config::get_config_manager;
use driver::SessionDriver;

#[derive(Parser)]
#[command(name = "snake_runner", about = "Plays snake sessions headlessly with an autopilot")]
struct Args {
    /// YAML config file; defaults to snake_runner_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    sessions: Option<u32>,

    /// Player name, repeat for several players
    #[arg(long = "player")]
    players: Vec<String>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long, value_enum)]
    autopilot: Option<AutopilotArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum AutopilotArg {
    Greedy,
    Random,
}

impl From<AutopilotArg> for Autopilot {
    fn from(arg: AutopilotArg) -> Self {
        match arg {
            AutopilotArg::Greedy => Autopilot::Greedy,
            AutopilotArg::Random => Autopilot::Random,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config).get_config()?;
    if let Some(sessions) = args.sessions {
        config.sessions = sessions;
    }
    if !args.players.is_empty() {
        config.players = args.players;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }
    if let Some(autopilot) = args.autopilot {
        config.autopilot = autopilot.into();
    }
    config.validate()?;

    let controller = match config.seed {
        Some(seed) => SessionController::new(config.engine.clone(), seed)?,
        None => SessionController::with_random_seed(config.engine.clone())?,
    };
    let grid = *controller.grid();
    log!(
        "Snake runner on {}x{} grid, {} session(s), {:?} autopilot",
        grid.width(),
        grid.height(),
        config.sessions,
        config.autopilot
    );

    let driver = SessionDriver::new(controller, config.autopilot, config.max_ticks);

    for index in 0..config.sessions as usize {
        let player = config.player_for_session(index).to_string();
        let player_number = driver.controller().lock().await.next_player_number();
        log!("Player {} enters as {:?}", player_number, player);

        match driver.run_session(&player).await {
            Some(report) => log!(
                "Game over {}! Score: {} after {} ticks ({:?})",
                report.result.player,
                report.result.score,
                report.ticks,
                report.reason
            ),
            None => log!("Session for {:?} did not start", player),
        }
    }

    let controller = driver.controller();
    let controller = controller.lock().await;
    log!("Score to beat: {}", controller.high_score());
    log!("Top {}", config.engine.leaderboard_size);
    for (rank, entry) in controller.top_scores().iter().enumerate() {
        log!("{}. {} {}", rank + 1, entry.player, entry.score);
    }
    if controller.leaderboard().is_empty() {
        log!("No scores yet!");
    }

    Ok(())
}
