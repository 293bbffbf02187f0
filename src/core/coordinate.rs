use core::fmt;

/// A position on the sea, `x` being the row and `y` the column.
///
/// Coordinates carry no bounds of their own; a [`Board`](crate::core::Board)
/// decides whether a coordinate lies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// The four orthogonal steps: north, south, west, east.
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Whether the coordinate lies in `[0, size)²`.
    pub fn is_within(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// Row and column indices, if the coordinate lies in `[0, size)²`.
    pub fn to_cell(self, size: usize) -> Option<(usize, usize)> {
        self.is_within(size)
            .then_some((self.x as usize, self.y as usize))
    }

    pub fn from_cell((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }

    /// North, south, west and east neighbours, unclipped.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        ORTHOGONAL.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Chebyshev distance, the number of king moves between two cells.
    pub fn chebyshev(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Formats as the 1-based "row col" pair a player types.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", i64::from(self.x) + 1, i64::from(self.y) + 1)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
