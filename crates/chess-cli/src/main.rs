use chess_cli::{CliConfig, Session};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess moves in coordinate notation")]
struct Cli {
    /// Configuration file (defaults to chess.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log level, overriding the configuration file
    #[arg(long)]
    log_level: Option<String>,
    /// Do not print the board after each move
    #[arg(long)]
    no_board: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.no_board {
        config.show_board = false;
    }

    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let game = match config.new_game() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(setup = ?config.setup, to_move = %game.side_to_move(), "starting session");

    let mut session = Session::new(game, config);
    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), &mut io::stdout()) {
        eprintln!("I/O error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
