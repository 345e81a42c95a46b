#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Headings in cyclic order: left turn is the predecessor, right turn the
/// successor, modulo 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    pub fn turned_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn turned_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }
}

/// Cell states of the net. Cells outside the cross footprint are permanently
/// `NotExist`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    NotExist,
    Empty,
    Food,
    Occupied,
    Dead,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::NotExist => ' ',
            Cell::Empty => '_',
            Cell::Food => 'o',
            Cell::Occupied => '*',
            Cell::Dead => 'x',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TurnLeft,
    Forward,
    TurnRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_cyclic() {
        assert_eq!(Direction::Up.turned_right(), Direction::Right);
        assert_eq!(Direction::Up.turned_left(), Direction::Left);
        assert_eq!(Direction::Left.turned_right(), Direction::Up);
        assert_eq!(Direction::Left.turned_left(), Direction::Down);
    }

    #[test]
    fn test_opposite() {
        for dir in [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ] {
            assert!(dir.is_opposite(&dir.opposite()));
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(!dir.is_opposite(&dir.turned_left()));
            assert!(!dir.is_opposite(&dir.turned_right()));
        }
    }
}
