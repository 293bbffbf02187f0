//! Ship classes and placed ships.

use core::fmt;

use super::coordinate::Coordinate;

/// Direction a ship extends from its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along the row: the column grows.
    Horizontal,
    /// Along the column: the row grows.
    Vertical,
}

impl Orientation {
    /// Step from one ship cell to the next.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipClass {
    name: &'static str,
    length: u8,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: u8) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> u8 {
        self.length
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Damage state of a ship. Transitions only run forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShipState {
    Intact,
    Damaged,
    Sunk,
}

/// A ship anchored at its bow, with the health it has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    bow: Coordinate,
    orientation: Orientation,
    health: u8,
}

impl Ship {
    /// A fresh ship at full health. Bounds are checked when it is placed on a board.
    pub fn new(class: ShipClass, bow: Coordinate, orientation: Orientation) -> Self {
        Self {
            class,
            bow,
            orientation,
            health: class.length(),
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> u8 {
        self.class.length()
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    /// The `length` cells starting at the bow, in order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let bow = self.bow;
        (0..i32::from(self.length())).map(move |i| bow.offset(dx * i, dy * i))
    }

    /// Whether a shot at `coord` lands on this ship. Does not record damage.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|cell| cell == coord)
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn state(&self) -> ShipState {
        if self.health == 0 {
            ShipState::Sunk
        } else if self.health < self.length() {
            ShipState::Damaged
        } else {
            ShipState::Intact
        }
    }

    /// Take one point of damage. A sunk ship stays sunk.
    pub(crate) fn take_hit(&mut self) -> ShipState {
        self.health = self.health.saturating_sub(1);
        self.state()
    }
}
