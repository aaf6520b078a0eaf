//! Console command parsing.

use fianchetto_core::Position;

use crate::error::CliError;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `select e2` — select a square and list its legal destinations.
    Select(Position),
    /// `move e2 e4` — attempt a move.
    Move {
        /// Source square.
        from: Position,
        /// Destination square.
        to: Position,
    },
    /// `show` — print the board.
    Show,
    /// `status` — print the side to move and game status.
    Status,
    /// `reset` — start a fresh game.
    Reset,
    /// `help` — list commands.
    Help,
    /// `quit` — end the session.
    Quit,
    /// Anything unrecognized (including empty input), echoed back.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&word) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match word {
        "select" | "s" => Ok(Command::Select(parse_square(tokens.get(1))?)),
        "move" | "m" => Ok(Command::Move {
            from: parse_square(tokens.get(1))?,
            to: parse_square(tokens.get(2))?,
        }),
        "show" | "board" => Ok(Command::Show),
        "status" => Ok(Command::Status),
        "reset" => Ok(Command::Reset),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse one square token, if present.
fn parse_square(token: Option<&&str>) -> Result<Position, CliError> {
    let token = token.ok_or(CliError::MissingSquare)?;
    Position::from_algebraic(token).ok_or_else(|| CliError::InvalidSquare {
        square: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_command};
    use crate::error::CliError;
    use fianchetto_core::Position;

    #[test]
    fn parses_select() {
        assert_eq!(
            parse_command("select e2").unwrap(),
            Command::Select(Position::from_algebraic("e2").unwrap())
        );
        assert_eq!(
            parse_command("s a7").unwrap(),
            Command::Select(Position::from_algebraic("a7").unwrap())
        );
    }

    #[test]
    fn parses_move() {
        assert_eq!(
            parse_command("move e2 e4").unwrap(),
            Command::Move {
                from: Position::from_algebraic("e2").unwrap(),
                to: Position::from_algebraic("e4").unwrap(),
            }
        );
    }

    #[test]
    fn parses_bare_words() {
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("board").unwrap(), Command::Show);
        assert_eq!(parse_command("status").unwrap(), Command::Status);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn whitespace_is_forgiven() {
        assert_eq!(
            parse_command("  move   e2    e4 ").unwrap(),
            Command::Move {
                from: Position::from_algebraic("e2").unwrap(),
                to: Position::from_algebraic("e4").unwrap(),
            }
        );
    }

    #[test]
    fn missing_square_is_an_error() {
        assert!(matches!(
            parse_command("select"),
            Err(CliError::MissingSquare)
        ));
        assert!(matches!(
            parse_command("move e2"),
            Err(CliError::MissingSquare)
        ));
    }

    #[test]
    fn bad_square_is_an_error() {
        assert!(matches!(
            parse_command("select z9"),
            Err(CliError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("move e2 e9"),
            Err(CliError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn unknown_and_empty_input_pass_through() {
        assert_eq!(
            parse_command("castle").unwrap(),
            Command::Unknown("castle".to_string())
        );
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
        assert_eq!(parse_command("   ").unwrap(), Command::Unknown(String::new()));
    }
}
