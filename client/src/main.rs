mod broadcaster;
mod command;
mod config;
mod ui;

use clap::{Parser, ValueEnum};
use std::io::{Stdout, Write};
use tictactoe_common::games::tictactoe::TicTacToeSession;
use tictactoe_common::logger::{self, LoggerSettings};
use tictactoe_common::{GameBroadcaster, GameMode, log};

use broadcaster::ConsoleBroadcaster;
use command::{ClientCommand, parse_command};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VsComputer => GameMode::VsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Overrides the configured starting mode.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Writes the effective config back to the config file.
    #[arg(long)]
    save_config: bool,
}

type ConsoleSession = TicTacToeSession<ConsoleBroadcaster<Stdout>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(mode) = args.mode {
        config.game.default_mode = mode.into();
    }

    let prefix = match config.logging.prefix.clone() {
        Some(prefix) => Some(prefix),
        None if args.use_log_prefix => Some("Client".to_string()),
        None => None,
    };
    logger::init_logger(LoggerSettings {
        prefix,
        verbose: args.verbose || config.logging.verbose,
    });

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config);
    }

    let broadcaster = ConsoleBroadcaster::stdout(config.labels.clone());
    let mut session = TicTacToeSession::new(config.game.default_mode, broadcaster);

    session.broadcaster().print(ui::help_text());
    session.select_mode(config.game.default_mode);
    log!("Client started in {:?} mode", config.game.default_mode);

    for line in std::io::stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(ClientCommand::Quit) => break,
            Ok(command) => run_command(&mut session, command),
            Err(message) => session.broadcaster().print(&message),
        }
    }

    std::io::stdout().flush()?;
    log!("Client shut down");
    Ok(())
}

fn run_command(session: &mut ConsoleSession, command: ClientCommand) {
    match command {
        ClientCommand::Place(cell) => {
            if let Err(e) = session.submit_move(cell) {
                session.broadcaster().print(&ui::render_rejection(e));
            }
        }
        ClientCommand::SelectMode(mode) => session.select_mode(mode),
        ClientCommand::Restart => session.request_restart(),
        ClientCommand::ResetScores => session.reset_scores(),
        ClientCommand::ShowScores => {
            let scores = session.query_state().scores;
            session.broadcaster().broadcast_scores(&scores);
        }
        ClientCommand::ShowBoard => {
            let state = session.query_state();
            session.broadcaster().broadcast_state(&state);
        }
        ClientCommand::Help => session.broadcaster().print(ui::help_text()),
        ClientCommand::Quit => {}
    }
}
