#![cfg(feature = "std")]

//! Console rendering: side-by-side boards, banner and shot messages.

use std::fmt::Write;
use std::string::String;

use crate::core::{Board, Cell, Coordinate, GameStatus, ShotError, ShotOutcome, ShotReport, Side};

pub const PROMPT: &str = "Your move (row col): ";

const RULE: &str = "==============================================================";

/// Greeting shown once at start-up.
pub fn banner() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:^62}", "SEA BATTLE");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:^62}", "Fire by typing two numbers: row and column");
    let _ = writeln!(out, "{:^62}", "e.g. \"3 5\" fires at row 3, column 5");
    let _ = writeln!(out, "{:^62}", "A hit or a sink earns another shot");
    let _ = write!(out, "{}", RULE);
    out
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss | Cell::Fog => '.',
    }
}

fn row_glyphs(board: &Board, row: usize, reveal: bool) -> String {
    let mut out = String::new();
    for col in 0..board.size() {
        let coord = Coordinate::new(row as i32, col as i32);
        let cell = if reveal {
            board.cell(coord)
        } else {
            board.public_cell(coord)
        };
        let _ = write!(out, " {} |", glyph(cell.unwrap_or(Cell::Empty)));
    }
    out
}

fn header(size: usize) -> String {
    let mut out = String::from("   |");
    for col in 1..=size {
        let _ = write!(out, " {} |", col);
    }
    out
}

/// Both boards next to each other. Ships show on `own` only.
pub fn render_boards(own: &Board, own_title: &str, enemy: &Board, enemy_title: &str) -> String {
    let head = header(own.size());
    let width = head.chars().count();
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}    {}", own_title, enemy_title, width = width);
    let _ = writeln!(out, "{}    {}", head, header(enemy.size()));
    for row in 0..own.size() {
        let _ = writeln!(
            out,
            "{:>2} |{}    {:>2} |{}",
            row + 1,
            row_glyphs(own, row, true),
            row + 1,
            row_glyphs(enemy, row, false)
        );
    }
    let _ = write!(
        out,
        "{:<width$}    {}",
        format!("Ships lost: {}/{}", own.sunk_count(), own.ships().len()),
        format!("Ships sunk: {}/{}", enemy.sunk_count(), enemy.ships().len()),
        width = width
    );
    out
}

pub fn outcome_message(outcome: ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Hit => String::from("Hit! The ship is wounded."),
        ShotOutcome::Miss => String::from("Miss."),
        ShotOutcome::Sunk(class) => format!("{} destroyed!", class),
    }
}

pub fn rejection_message(error: ShotError) -> String {
    match error {
        ShotError::OutOfBounds(coord) => format!("{} is off the board, try again.", coord),
        ShotError::AlreadyTargeted(coord) => format!("You already fired at {}, try again.", coord),
        ShotError::GameOver => String::from("The match is over."),
    }
}

/// One line describing a shot, naming the shooter by `names`.
pub fn describe_shot(report: &ShotReport, names: [&str; 2]) -> String {
    format!(
        "{} fires at {}: {}",
        name_of(report.shooter, names),
        report.target,
        outcome_message(report.outcome)
    )
}

/// Closing line once the match is decided.
pub fn result_message(status: GameStatus, names: [&str; 2]) -> Option<String> {
    match status {
        GameStatus::Won(side) => Some(format!("{} wins!", name_of(side, names))),
        GameStatus::InProgress => None,
    }
}

fn name_of(side: Side, names: [&str; 2]) -> &str {
    match side {
        Side::First => names[0],
        Side::Second => names[1],
    }
}
