//! The render snapshot: a character matrix derived from a [`Frame`].
//!
//! A `GridView` is never a source of truth.  It is rebuilt from the
//! authoritative obstacle, robot, target and path state every time it is
//! needed and dropped afterwards.

use std::fmt;

use bg_core::Position;
use bg_sim::Frame;

/// What a grid cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Trail,
    Obstacle,
    Robot,
    Light,
    /// The target on the final frame.
    Beacon,
}

impl Cell {
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty    => '.',
            Cell::Trail    => '*',
            Cell::Obstacle => '#',
            Cell::Robot    => 'R',
            Cell::Light    => 'L',
            Cell::Beacon   => 'B',
        }
    }
}

/// Row-major `grid_size × grid_size` cell matrix.  Row = `y`, column = `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    size:  u32,
    cells: Vec<Cell>,
}

impl GridView {
    /// Paint `frame` in fixed precedence: obstacles, then the robot, then the
    /// target (which hides a co-located robot), then the path trail on cells
    /// that are still empty.
    pub fn from_frame(frame: &Frame<'_>) -> Self {
        let size = frame.grid_size;
        let mut view = Self {
            size,
            cells: vec![Cell::Empty; size as usize * size as usize],
        };

        for pos in frame.obstacles.iter() {
            view.paint(pos, Cell::Obstacle);
        }
        view.paint(frame.robot, Cell::Robot);
        view.paint(frame.target, if frame.terminal { Cell::Beacon } else { Cell::Light });
        for &pos in frame.path {
            if view.get(pos) == Some(Cell::Empty) {
                view.paint(pos, Cell::Trail);
            }
        }
        view
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The cell at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.in_bounds(self.size).then(|| self.cells[pos.index(self.size)])
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    fn paint(&mut self, pos: Position, cell: Cell) {
        if pos.in_bounds(self.size) {
            let i = pos.index(self.size);
            self.cells[i] = cell;
        }
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
