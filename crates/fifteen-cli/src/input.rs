use fifteen_core::Direction;
use std::fmt;

/// One parsed line of move input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide a tile: `<direction> <number>`, direction in w/a/s/d.
    Move(Direction, u8),
    /// `q` or `Q`.
    Quit,
}

/// Why a move line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First token is not a direction or the quit command.
    UnknownCommand(String),
    /// Second token is absent or not a tile number.
    BadNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(token) => write!(f, "Unknown command: {token}"),
            CommandError::BadNumber(token) => write!(f, "Invalid number: {token}"),
        }
    }
}

/// Parse a `"<direction> <number>"` move line, or the quit command.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().unwrap_or("");

    if head == "q" || head == "Q" {
        return Ok(Command::Quit);
    }

    let dir: Direction = head
        .parse()
        .map_err(|_| CommandError::UnknownCommand(head.to_string()))?;

    let number = tokens.next().unwrap_or("");
    let tile: u8 = number
        .parse()
        .map_err(|_| CommandError::BadNumber(number.to_string()))?;

    Ok(Command::Move(dir, tile))
}

/// Parse a whitespace-separated tile ordering. Yields the raw numbers; the
/// board constructor decides whether they form a permutation.
pub fn parse_layout(line: &str) -> Result<Vec<u8>, String> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| format!("Invalid number: {token}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_commands() {
        assert_eq!(parse_command("w 12"), Ok(Command::Move(Direction::Up, 12)));
        assert_eq!(parse_command("a 5"), Ok(Command::Move(Direction::Left, 5)));
        assert_eq!(
            parse_command("  s   3 "),
            Ok(Command::Move(Direction::Down, 3))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown_direction() {
        assert_eq!(
            parse_command("x 1"),
            Err(CommandError::UnknownCommand("x".to_string()))
        );
        assert_eq!(
            parse_command(""),
            Err(CommandError::UnknownCommand(String::new()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        assert_eq!(
            parse_command("w"),
            Err(CommandError::BadNumber(String::new()))
        );
        assert_eq!(
            parse_command("w twelve"),
            Err(CommandError::BadNumber("twelve".to_string()))
        );
        assert_eq!(
            parse_command("w 300"),
            Err(CommandError::BadNumber("300".to_string()))
        );
        // Tiles outside 1..=15 still parse; the board rejects them.
        assert_eq!(parse_command("w 200"), Ok(Command::Move(Direction::Up, 200)));
    }

    #[test]
    fn test_parse_layout_lines() {
        let line = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16";
        let nums = parse_layout(line).unwrap();
        assert_eq!(nums.len(), 16);
        assert_eq!(nums[0], 1);
        assert_eq!(nums[15], 16);

        assert!(parse_layout("1 2 three").is_err());
        assert_eq!(parse_layout(""), Ok(Vec::new()));
    }
}
