//! Match controller: two boards, alternating turns, extra shot on a hit.

use core::fmt;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use super::board::Board;
use super::common::{PlacementError, ShotError, ShotOutcome};
use super::coordinate::Coordinate;
use super::placement::random_board;
use crate::player::Player;

/// Seat in a match. `First` fires on even turns; the human sits there in an
/// interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// One accepted shot and where it left the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Side to fire next; the shooter again after a hit or sink.
    pub next: Side,
    pub status: GameStatus,
}

/// Per-side totals for a finished or running match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideSummary {
    pub shots_fired: usize,
    /// Opponent ships this side has sunk.
    pub ships_sunk: usize,
    /// Own ships lost.
    pub ships_lost: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Option<Side>,
    /// Times the turn passed from one side to the other.
    pub turns: usize,
    pub first: SideSummary,
    pub second: SideSummary,
}

/// Both boards and whose turn it is. Board `i` belongs to side `i`.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    turn_index: usize,
    shots: [usize; 2],
    status: GameStatus,
}

impl Game {
    /// Fresh match with a randomly laid out standard fleet on each side.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, PlacementError> {
        let first = random_board(rng)?;
        let second = random_board(rng)?;
        Ok(Self::from_boards(first, second))
    }

    /// Match over prepared boards; `first` fires first.
    pub fn from_boards(first: Board, second: Board) -> Self {
        Self {
            boards: [first, second],
            turn_index: 0,
            shots: [0; 2],
            status: GameStatus::InProgress,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Side to fire next: `First` on even turn indices.
    pub fn turn(&self) -> Side {
        if self.turn_index % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Fire at the opponent of the side whose turn it is.
    ///
    /// A hit or sink keeps the turn, a miss passes it. The match is decided
    /// the moment either board has every ship sunk.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotReport, ShotError> {
        if self.is_over() {
            return Err(ShotError::GameOver);
        }
        let shooter = self.turn();
        let outcome = self.boards[shooter.opponent().index()].resolve_shot(target)?;
        self.shots[shooter.index()] += 1;

        for side in [Side::First, Side::Second] {
            if self.board(side).all_sunk() {
                self.status = GameStatus::Won(side.opponent());
                info!("{} side wins after {} turns", side.opponent(), self.turn_index);
                break;
            }
        }
        if !self.is_over() && !outcome.grants_extra_shot() {
            self.turn_index += 1;
        }
        debug!("{} fired at {}: {:?}", shooter, target, outcome);

        Ok(ShotReport {
            shooter,
            target,
            outcome,
            next: self.turn(),
            status: self.status,
        })
    }

    /// Ask the side to move for a shot and apply it.
    ///
    /// Off-board and repeated shots go back to the player, which is asked
    /// again without losing the turn.
    pub fn step(
        &mut self,
        rng: &mut SmallRng,
        first: &mut dyn Player,
        second: &mut dyn Player,
    ) -> anyhow::Result<ShotReport> {
        loop {
            if self.is_over() {
                return Err(anyhow::anyhow!(ShotError::GameOver));
            }
            let side = self.turn();
            let player: &mut dyn Player = match side {
                Side::First => &mut *first,
                Side::Second => &mut *second,
            };
            let view = self.boards[side.opponent().index()].target_view();
            let target = player.next_shot(rng, &view)?;
            match self.fire(target) {
                Ok(report) => {
                    player.handle_shot_result(target, report.outcome);
                    return Ok(report);
                }
                Err(ShotError::GameOver) => return Err(anyhow::anyhow!(ShotError::GameOver)),
                Err(err) => {
                    warn!("{} side: {}", side, err);
                    player.handle_rejected_shot(target, err);
                }
            }
        }
    }

    /// Play until one side wins and return the winner.
    pub fn play_out(
        &mut self,
        rng: &mut SmallRng,
        first: &mut dyn Player,
        second: &mut dyn Player,
    ) -> anyhow::Result<Side> {
        loop {
            if let GameStatus::Won(side) = self.step(rng, first, second)?.status {
                return Ok(side);
            }
        }
    }

    pub fn summary(&self) -> MatchSummary {
        let side_summary = |side: Side| SideSummary {
            shots_fired: self.shots_fired(side),
            ships_sunk: self.board(side.opponent()).sunk_count(),
            ships_lost: self.board(side).sunk_count(),
        };
        MatchSummary {
            winner: self.winner(),
            turns: self.turn_index,
            first: side_summary(Side::First),
            second: side_summary(Side::Second),
        }
    }
}
