//! Players: anything that can decide the next move.
//!
//! The turn loop holds one boxed [`Player`] per colour, chosen at setup.
//! [`HumanPlayer`] reads moves from a text stream; the computer player
//! lives in [`crate::engine`].

use std::io::{BufRead, Write};

use crate::board::{Board, Move, Pos, Stone};
use crate::error::PlayerError;
use crate::eval::{best_suggestions, DEFAULT_SUGGESTIONS_PER_LENGTH};

/// The capability shared by human and computer players
pub trait Player {
    /// Colour this player moves
    fn stone(&self) -> Stone;

    /// Choose a move for the position; `None` means the player gives up.
    fn decide_move(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
    ) -> Result<Option<Move>, PlayerError>;

    /// Tell the player something about its last move (e.g. why it was
    /// rejected).
    fn notify(&mut self, _message: &str) -> Result<(), PlayerError> {
        Ok(())
    }
}

/// What one line of human input asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Pos),
    Hint,
    Quit,
}

/// Parse "x y" (or "x,y"), "hint", or "quit" against a board of `size`
fn parse_command(line: &str, size: u8) -> Result<Command, String> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "hint" => return Ok(Command::Hint),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [x, y] = parts.as_slice() else {
        return Err("Enter a move as 'x y', or 'hint' / 'quit'".to_string());
    };

    let coord = |s: &str| -> Result<u8, String> {
        match s.parse::<u8>() {
            Ok(v) if v < size => Ok(v),
            _ => Err(format!("Coordinates must be between 0 and {}", size - 1)),
        }
    };
    Ok(Command::Play(Pos::new(coord(*x)?, coord(*y)?)))
}

/// A player typing moves on a text stream
pub struct HumanPlayer<R, W> {
    stone: Stone,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(stone: Stone, input: R, output: W) -> Self {
        Self {
            stone,
            input,
            output,
        }
    }

    fn show_hints(&mut self, board: &Board) -> Result<(), PlayerError> {
        let hints = best_suggestions(board, self.stone, DEFAULT_SUGGESTIONS_PER_LENGTH);
        if hints.is_empty() {
            writeln!(self.output, "No suggestions yet")?;
        }
        for (len, tiles) in hints.iter().rev() {
            let tiles: Vec<String> = tiles.iter().map(Pos::to_string).collect();
            writeln!(self.output, "  {} in a row: {}", len, tiles.join(" "))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn decide_move(
        &mut self,
        board: &Board,
        _last_move: Option<Move>,
    ) -> Result<Option<Move>, PlayerError> {
        loop {
            write!(
                self.output,
                "{} ({}) move [x y | hint | quit]: ",
                self.stone,
                self.stone.symbol()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input
                return Ok(None);
            }

            match parse_command(&line, board.size()) {
                Ok(Command::Play(pos)) => return Ok(Some(Move::new(pos, self.stone))),
                Ok(Command::Hint) => self.show_hints(board)?,
                Ok(Command::Quit) => return Ok(None),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), PlayerError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
