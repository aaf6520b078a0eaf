//! The interactive console session.
//!
//! The session owns the application's single mutable "current state" cell.
//! The engine only ever hands back new immutable snapshots; the session
//! decides whether to publish one by comparing it with what it holds, which
//! is also how rejected inputs are detected (the engine's rejections are
//! silent no-ops, not errors).

use std::io::{self, BufRead};

use tracing::{debug, info, warn};

use fianchetto_core::{GameState, Position};

use crate::command::{Command, parse_command};
use crate::error::CliError;

const HELP: &str = "commands:
  select <sq>      show legal destinations for the piece on <sq>
  move <sq> <sq>   play a move
  show             print the board
  status           print side to move and game status
  reset            start a new game
  help             this text
  quit             leave";

/// Holds the current [`GameState`] and applies commands to it.
pub struct Session {
    state: GameState,
}

impl Session {
    /// Create a session holding a fresh game.
    pub fn new() -> Session {
        Session {
            state: GameState::new(),
        }
    }

    /// Return the current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one command and return the text to print (may be empty).
    pub fn handle(&mut self, command: Command) -> String {
        match command {
            Command::Select(at) => self.handle_select(at),
            Command::Move { from, to } => self.handle_move(from, to),
            Command::Show => format!("{}", self.state.board().pretty()),
            Command::Status => self.status_line(),
            Command::Reset => {
                info!("game reset");
                self.state = GameState::new();
                "new game".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => "bye".to_string(),
            Command::Unknown(word) => {
                if word.is_empty() {
                    String::new()
                } else {
                    warn!(%word, "unknown command");
                    format!("unknown command: {word} (try help)")
                }
            }
        }
    }

    fn handle_select(&mut self, at: Position) -> String {
        let next = self.state.select(at);
        if next == self.state {
            return format!("nothing to select at {at}");
        }
        self.state = next;

        let mut squares: Vec<String> = self
            .state
            .legal_destinations()
            .iter()
            .map(Position::to_string)
            .collect();
        if squares.is_empty() {
            return format!("{at}: no legal moves");
        }
        squares.sort();
        format!("{at}: {}", squares.join(" "))
    }

    fn handle_move(&mut self, from: Position, to: Position) -> String {
        let next = self.state.validate_and_move(from, to);
        if next == self.state {
            debug!(%from, %to, "move rejected");
            return format!("illegal move: {from} {to}");
        }
        info!(%from, %to, status = %next.status(), "move played");
        self.state = next;
        format!("{}\n{}", self.state.board().pretty(), self.status_line())
    }

    fn status_line(&self) -> String {
        format!(
            "{} to move ({})",
            self.state.side_to_move(),
            self.state.status()
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Read commands from stdin until `quit` or end of input.
pub fn run() -> Result<(), CliError> {
    let mut session = Session::new();
    println!("{}", session.state().board().pretty());
    println!("type 'help' for commands");

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => {
                println!("bye");
                break;
            }
            Ok(command) => {
                let output = session.handle(command);
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
