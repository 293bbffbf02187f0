//! Hunt-and-target shot selection against one opponent board.
//! Reads the opponent only through a `TargetView`.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use super::board::TargetView;
use super::config::BOARD_SIZE;
use super::coordinate::Coordinate;

/// Line a wounded ship lies on, inferred from two of its hit cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Hits share a row; the ship runs along it.
    Row(i32),
    /// Hits share a column; the ship runs along it.
    Column(i32),
}

impl Axis {
    fn between(a: Coordinate, b: Coordinate) -> Option<Axis> {
        if a.x == b.x {
            Some(Axis::Row(a.x))
        } else if a.y == b.y {
            Some(Axis::Column(a.y))
        } else {
            None
        }
    }

    pub fn contains(self, coord: Coordinate) -> bool {
        match self {
            Axis::Row(x) => coord.x == x,
            Axis::Column(y) => coord.y == y,
        }
    }
}

/// What the shooter remembers about the ship it is finishing off.
///
/// `wounded` lists hits on the current target in the order they landed;
/// `candidates` holds the orthogonal neighbours still worth a shot. Both are
/// cleared when the target sinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingMemory {
    wounded: Vec<Coordinate>,
    candidates: Vec<Coordinate>,
}

impl TargetingMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wounded(&self) -> &[Coordinate] {
        &self.wounded
    }

    pub fn candidates(&self) -> &[Coordinate] {
        &self.candidates
    }

    /// Target mode while a wounded ship is being finished off.
    pub fn is_targeting(&self) -> bool {
        !self.wounded.is_empty()
    }

    /// Axis inferred from the first two wounded cells.
    pub fn axis(&self) -> Option<Axis> {
        match self.wounded.as_slice() {
            [first, second, ..] => Axis::between(*first, *second),
            _ => None,
        }
    }

    /// Record a hit that did not sink its ship.
    ///
    /// Its in-board orthogonal neighbours join the candidates. From the second
    /// hit on, candidates off the ship's axis are dropped.
    pub fn record_hit(&mut self, coord: Coordinate) {
        if self.wounded.contains(&coord) {
            return;
        }
        self.wounded.push(coord);
        for next in coord.orthogonal_neighbors() {
            if next.is_within(BOARD_SIZE)
                && !self.wounded.contains(&next)
                && !self.candidates.contains(&next)
            {
                self.candidates.push(next);
            }
        }
        if let Some(axis) = self.axis() {
            self.candidates.retain(|c| axis.contains(*c));
            debug!("target axis {:?}, {} candidates left", axis, self.candidates.len());
        }
    }

    /// Forget the current target, back to hunting.
    pub fn reset(&mut self) {
        self.wounded.clear();
        self.candidates.clear();
    }

    /// Drop candidates already fired upon or already recorded as wounded.
    pub fn purge(&mut self, view: &TargetView<'_>) {
        let wounded = &self.wounded;
        self.candidates
            .retain(|c| view.contains(*c) && !view.is_targeted(*c) && !wounded.contains(c));
    }

    /// Take a random surviving candidate, if any.
    pub fn next_candidate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        view: &TargetView<'_>,
    ) -> Option<Coordinate> {
        self.purge(view);
        if self.candidates.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.candidates.len());
        Some(self.candidates.swap_remove(idx))
    }
}

/// Uniformly random cell not yet fired upon. `None` once the board is exhausted.
pub fn hunt<R: Rng + ?Sized>(rng: &mut R, view: &TargetView<'_>) -> Option<Coordinate> {
    if view.is_exhausted() {
        return None;
    }
    let open: Vec<Coordinate> = view.untargeted().collect();
    Some(open[rng.random_range(0..open.len())])
}

/// Hunt-and-target pick: finish a wounded ship first, otherwise hunt.
pub fn hunt_and_target<R: Rng + ?Sized>(
    rng: &mut R,
    memory: &mut TargetingMemory,
    view: &TargetView<'_>,
) -> Option<Coordinate> {
    if memory.is_targeting() {
        if let Some(coord) = memory.next_candidate(rng, view) {
            return Some(coord);
        }
        debug!("no candidates around wounded ship, hunting");
    }
    hunt(rng, view)
}
