//! Grid coordinate type and distance metrics.
//!
//! `Position` uses signed `i32` components so that stepping off the west or
//! north edge yields a representable (and rejectable) coordinate instead of
//! wrapping.  Every position handed out by the framework is in bounds; only
//! candidate neighbours are ever outside `[0, grid_size)`.

use std::fmt;

/// A cell on the square simulation grid.  `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance. Drives every movement decision.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance.  Informational only; never used to pick moves.
    pub fn euclidean(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` if both components lie in `[0, grid_size)`.
    #[inline]
    pub fn in_bounds(self, grid_size: u32) -> bool {
        let size = i64::from(grid_size);
        (0..size).contains(&i64::from(self.x)) && (0..size).contains(&i64::from(self.y))
    }

    /// The orthogonal neighbour one step in `dir`.  May be out of bounds.
    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbours(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Row-major index into a `grid_size × grid_size` buffer.
    ///
    /// Only meaningful for in-bounds positions.
    #[inline]
    pub fn index(self, grid_size: u32) -> usize {
        self.y as usize * grid_size as usize + self.x as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves.  `Up` decreases `y` (row 0 is the top
/// line of a rendered grid).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed enumeration order.  Ties in move selection resolve toward the
    /// earlier entry.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}
