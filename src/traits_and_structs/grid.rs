use crate::error::GridError;

use super::cell::{is_living, CellState};
use super::direction::{Direction, NEIGHBOURHOOD};

/// Fixed-size Life grid. Cells past the edges do not exist: there is no
/// wraparound and no implicit dead border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let size = width.checked_mul(height).ok_or(invalid)?;
        Ok(Self {
            cells: vec![CellState::Dead; size],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_state(&self, x: usize, y: usize) -> Result<CellState, GridError> {
        let i = self.checked_idx(x, y)?;
        Ok(self.cells[i])
    }

    /// Overwrite a cell. Any state may be written, transient ones included.
    pub fn set_state(&mut self, x: usize, y: usize, value: CellState) -> Result<(), GridError> {
        let i = self.checked_idx(x, y)?;
        self.cells[i] = value;
        Ok(())
    }

    /// State of the cell one `direction` away from `(x, y)`, or `None` if that
    /// lands off the grid.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<CellState> {
        let (nx, ny) = direction.offset(x, y)?;
        self.grid_idx(nx, ny).map(|i| self.cells[i])
    }

    pub fn count_living_neighbours(&self, x: usize, y: usize) -> u8 {
        NEIGHBOURHOOD
            .iter()
            .filter(|&&d| is_living(self.neighbor(x, y, d)))
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// The first pass marks cells `Dying` or `Newborn`, counting neighbours on
    /// a snapshot of the previous generation so earlier marks in the scan are
    /// never seen. The second pass commits the markers.
    pub fn step(&mut self) {
        let prev = self.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let n = prev.count_living_neighbours(x, y);
                let idx = x + y * self.width;
                if prev.cells[idx] == CellState::Alive {
                    if !(2..=3).contains(&n) {
                        self.cells[idx] = CellState::Dying;
                    }
                } else if n == 3 {
                    self.cells[idx] = CellState::Newborn;
                }
            }
        }

        for c in self.cells.iter_mut() {
            *c = c.committed();
        }
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = CellState::Dead;
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Alive).count()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    fn grid_idx<I: TryInto<usize>>(&self, x: I, y: I) -> Option<usize> {
        if let (Ok(x), Ok(y)) = (x.try_into(), y.try_into()) {
            if x < self.width && y < self.height {
                Some(x + y * self.width)
            } else {
                None
            }
        } else {
            None
        }
    }

    fn checked_idx(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.grid_idx(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}
