//! Line-oriented command loop.

use crate::config::CliConfig;
use crate::render;
use chess_engine::rules::CastleSide;
use chess_engine::{Game, GameStatus, MoveKind, MoveOutcome};
use std::io::{self, BufRead, Write};
use tracing::info;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Board,
    Moves,
    History,
    Quit,
    Help,
    /// Anything else is handed to the engine as a move.
    Move(String),
}

impl Command {
    /// Parses a trimmed input line; `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let command = match line.to_ascii_lowercase().as_str() {
            "" => return None,
            "board" => Command::Board,
            "moves" => Command::Moves,
            "history" => Command::History,
            "quit" | "exit" => Command::Quit,
            "help" | "?" => Command::Help,
            _ => Command::Move(line.to_string()),
        };
        Some(command)
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// A game plus the display preferences it is shown with.
pub struct Session {
    game: Game,
    config: CliConfig,
}

impl Session {
    pub fn new(game: Game, config: CliConfig) -> Self {
        Session { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.print_board(out)?;
        self.prompt(out)?;
        for line in input.lines() {
            let Some(command) = Command::parse(&line?) else {
                self.prompt(out)?;
                continue;
            };
            if self.execute(command, out)? == Flow::Stop {
                break;
            }
            self.prompt(out)?;
        }
        Ok(())
    }

    /// Executes a single command.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Stop),
            Command::Help => {
                writeln!(out, "Enter a move such as e2e4 or e7e8q.")?;
                writeln!(out, "Commands: board, moves, history, help, quit")?;
            }
            Command::Board => self.print_board(out)?,
            Command::Moves => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(|m| m.to_uci()).collect();
                if moves.is_empty() {
                    writeln!(out, "No legal moves.")?;
                } else {
                    writeln!(out, "{}", moves.join(" "))?;
                }
            }
            Command::History => {
                let history = self.game.history().to_notation();
                if history.is_empty() {
                    writeln!(out, "No moves yet.")?;
                }
                for (number, pair) in history.chunks(2).enumerate() {
                    writeln!(out, "{}. {}", number + 1, pair.join(" "))?;
                }
            }
            Command::Move(notation) => match self.game.make_move(&notation) {
                Ok(outcome) => {
                    info!(mov = %outcome.mov, ply = self.game.ply_count(), "move accepted");
                    self.report(&outcome, out)?;
                    if self.config.show_board {
                        self.print_board(out)?;
                    }
                    if outcome.checkmate {
                        return Ok(Flow::Stop);
                    }
                }
                Err(error) => writeln!(out, "Rejected {}: {}", notation, error)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn report(&self, outcome: &MoveOutcome, out: &mut impl Write) -> io::Result<()> {
        let description = match outcome.kind {
            MoveKind::Regular => String::new(),
            MoveKind::Capture => " (capture)".to_string(),
            MoveKind::Castle(CastleSide::Kingside) => " (castles kingside)".to_string(),
            MoveKind::Castle(CastleSide::Queenside) => " (castles queenside)".to_string(),
            MoveKind::EnPassant => " (en passant)".to_string(),
            MoveKind::Promotion(kind) => {
                format!(" (promotes to {})", kind.to_string().to_lowercase())
            }
        };
        writeln!(out, "{}{}", outcome.mov, description)?;

        let mover = self.game.side_to_move().opposite();
        match self.game.status() {
            GameStatus::Checkmate => writeln!(out, "Checkmate. {} wins.", mover)?,
            GameStatus::Check => writeln!(out, "Check.")?,
            GameStatus::Stalemate => writeln!(out, "Stalemate.")?,
            GameStatus::Ongoing => {}
        }
        Ok(())
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render::board(self.game.board()))?;
        if self.config.show_captured {
            if let Some(captured) = render::captured(self.game.board()) {
                writeln!(out, "Captured: {}", captured)?;
            }
        }
        Ok(())
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{} to move> ", self.game.side_to_move())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn quiet() -> CliConfig {
        CliConfig {
            show_board: false,
            ..CliConfig::default()
        }
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("  "), None);
        assert_eq!(Command::parse("BOARD"), Some(Command::Board));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(
            Command::parse(" e2e4 "),
            Some(Command::Move("e2e4".to_string()))
        );
    }

    #[test]
    fn plays_moves_and_reports_rejections() {
        let mut session = Session::new(Game::new(), quiet());
        let text = run(&mut session, "e2e4\ne2e4\ne7e5\nhistory\nquit\ne1e2\n");
        assert!(text.contains("Rejected e2e4"));
        assert!(text.contains("1. e2e4 e7e5"));
        assert_eq!(session.game().ply_count(), 2);
        assert_eq!(session.game().side_to_move(), Color::White);
    }

    #[test]
    fn stops_on_checkmate() {
        let mut session = Session::new(Game::new(), quiet());
        let text = run(&mut session, "f2f3\ne7e5\ng2g4\nd8h4\nmoves\n");
        assert!(text.contains("Checkmate. Black wins."));
        assert!(!text.contains("No legal moves."));
    }

    #[test]
    fn lists_legal_moves() {
        let config = CliConfig::from_toml(
            r#"
setup = "empty"
pieces = "Ph7"
"#,
        )
        .unwrap();
        let mut session = Session::new(config.new_game().unwrap(), quiet());
        let mut out = Vec::new();
        session.execute(Command::Moves, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "h7h8q h7h8r h7h8b h7h8n\n");
    }

    #[test]
    fn shows_captured_pieces_with_the_board() {
        let config = CliConfig::from_toml(
            r#"
setup = "empty"
pieces = "Pc4 qd5"
"#,
        )
        .unwrap();
        let mut session = Session::new(config.new_game().unwrap(), config);
        let mut out = Vec::new();
        session
            .execute(Command::Move("c4d5".to_string()), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("c4d5 (capture)\n"));
        assert!(text.contains("Captured: q"));
    }
}
