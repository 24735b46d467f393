use std::ops::Add;

/// A unit offset on the grid. Axis directions combine by addition, so
/// `Direction::UP + Direction::RIGHT` is the upper-right diagonal and
/// opposite directions cancel out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

impl Direction {
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    const fn join(self, other: Direction) -> Direction {
        Direction {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }

    /// Apply the offset to `(x, y)`, returning `None` if it would go below zero.
    /// Upper bounds are left to the caller.
    pub fn offset(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(self.dx)?;
        let ny = y.checked_add_signed(self.dy)?;
        Some((nx, ny))
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, other: Direction) -> Direction {
        self.join(other)
    }
}

/// The Moore neighbourhood.
pub const NEIGHBOURHOOD: [Direction; 8] = [
    Direction::UP,
    Direction::DOWN,
    Direction::LEFT,
    Direction::RIGHT,
    Direction::UP.join(Direction::RIGHT),
    Direction::UP.join(Direction::LEFT),
    Direction::DOWN.join(Direction::RIGHT),
    Direction::DOWN.join(Direction::LEFT),
];
