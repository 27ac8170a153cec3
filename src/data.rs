use std::fmt;

/// A grid site, addressed the way callers see it: 1-indexed row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    /// The neighbouring site in direction `d`, or `None` if it falls off an n×n grid.
    pub fn step_toward(&self, d: Direction, n: usize) -> Option<Site> {
        let (row, col) = match d {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::West => (self.row, self.col.checked_sub(1)?),
            Direction::East => (self.row, self.col + 1),
        };
        if row == 0 || col == 0 || row > n || col > n {
            None
        } else {
            Some(Site { row, col })
        }
    }

    pub fn neighbors(&self, n: usize) -> Vec<Site> {
        Direction::adjacent_directions()
            .into_iter()
            .filter_map(|d| self.step_toward(d, n))
            .collect()
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}
