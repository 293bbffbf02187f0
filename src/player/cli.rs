#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;
use std::vec::Vec;

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::core::{Coordinate, ShotError, TargetView};
use crate::ui;

use super::Player;

/// Problems reading a shot from the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter exactly two numbers, row then column (got {0})")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is off the board")]
    TooLarge(String),
    #[error("input closed")]
    Closed,
}

/// Parse a 1-based "row col" pair into a board coordinate.
///
/// Both tokens must be plain non-negative integers; ones too large for a
/// coordinate are refused as off the board. Bounds are left to the
/// board, so "0 3" parses and is then refused as off the board.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    // all digits, so parsing only fails on overflow
    token
        .parse()
        .map_err(|_| InputError::TooLarge(token.to_string()))
}

/// Human player typing shots at a console.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_shot(
        &mut self,
        _rng: &mut SmallRng,
        _view: &TargetView<'_>,
    ) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "{}", ui::PROMPT)?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(InputError::Closed.into());
            }
            match parse_coord(&self.line) {
                Ok(coord) => return Ok(coord),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, error: ShotError) {
        let _ = writeln!(self.output, "{}", ui::rejection_message(error));
    }
}
