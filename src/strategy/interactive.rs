//! Human player prompted on a text stream.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::core::{GameError, Move, Result};
use crate::rules::{Game, Position};

use super::Strategy;

/// Reads moves typed by a human.
///
/// Shows the position, prompts, and keeps asking until the reply parses
/// and is legal.
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    /// Prompt on `output` and read replies from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, text: std::fmt::Arguments<'_>) -> Result<()> {
        self.output
            .write_fmt(text)
            .and_then(|()| self.output.flush())
            .map_err(|err| GameError::io("write prompt", err))
    }
}

impl Interactive<StdinLock<'static>, Stdout> {
    /// Prompt on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<S: Position, R: BufRead, W: Write> Strategy<S> for Interactive<R, W> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn choose_move(&mut self, game: &Game<S>) -> Result<Move> {
        if game.is_over() {
            return Err(GameError::GameOver);
        }

        self.say(format_args!("{game}\n"))?;

        loop {
            self.say(format_args!("Enter a move: "))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|err| GameError::io("read move", err))?;
            if read == 0 {
                return Err(GameError::InputClosed);
            }

            match game.str_to_move(&line) {
                Ok(mv) if game.is_legal(&mv) => return Ok(mv),
                Ok(mv) => {
                    let legal: Vec<String> =
                        game.legal_moves().iter().map(ToString::to_string).collect();
                    log::trace!("rejected illegal move {}", mv);
                    self.say(format_args!(
                        "'{mv}' is not legal here. Legal moves: {}\n",
                        legal.join(", ")
                    ))?;
                }
                Err(err) => self.say(format_args!("{err}\n"))?,
            }
        }
    }
}
