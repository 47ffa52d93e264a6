mod colors;
mod config;
mod game_ui;
mod offline;
mod state;
mod ui;

use clap::Parser;
use tictactoe_common::config::ConfigManager;
use tictactoe_common::logger::init_logger;
use tictactoe_common::log;
use tokio::sync::mpsc;

use crate::config::{Config, get_config_manager};
use crate::offline::local_game_task;
use crate::state::SharedState;
use crate::ui::TicTacToeApp;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client")]
#[command(about = "Tic-Tac-Toe against an unbeatable computer opponent")]
struct Args {
    /// Path to the YAML config; defaults to the file next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,
}

fn load_config(path: Option<&str>) -> Config {
    let result = match path {
        Some(path) => ConfigManager::from_yaml_file(path).get_config(),
        None => get_config_manager().get_config(),
    };
    result.unwrap_or_else(|e| {
        log!("Failed to load config ({}), using defaults", e);
        Config::default()
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.use_log_prefix.then(|| "Client".to_string()));

    let config = load_config(args.config.as_deref());

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let game_config = config.tictactoe.clone();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(local_game_task(shared_state_clone, command_rx, game_config));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([240.0, 240.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(shared_state, command_tx)))),
    )?;

    log!("Window closed");
    Ok(())
}
