use crate::grid::Cell;
use std::ops::{Index, IndexMut};

/// 4-way heading of the alien
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Heading from `from` to `to`
    ///
    /// A column change decides east/west, otherwise a row change decides
    /// south/north. Identical cells have no heading.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let row_diff = to.row - from.row;
        let col_diff = to.col - from.col;

        if col_diff > 0 {
            Some(Direction::East)
        } else if col_diff < 0 {
            Some(Direction::West)
        } else if row_diff > 0 {
            Some(Direction::South)
        } else if row_diff < 0 {
            Some(Direction::North)
        } else {
            None
        }
    }

    /// Pixel step (dx, dy) for one tick of movement
    pub const fn step(self) -> (f32, f32) {
        match self {
            Direction::North => (0.0, -1.0),
            Direction::East => (1.0, 0.0),
            Direction::South => (0.0, 1.0),
            Direction::West => (-1.0, 0.0),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// One value per direction, always complete
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionMap<T> {
    values: [T; 4],
}

impl<T> DirectionMap<T> {
    pub fn new(north: T, east: T, south: T, west: T) -> Self {
        DirectionMap {
            values: [north, east, south, west],
        }
    }

    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        DirectionMap {
            values: Direction::ALL.map(&mut f),
        }
    }

    /// Build with a fallible constructor, stopping at the first error
    pub fn try_from_fn<E>(mut f: impl FnMut(Direction) -> Result<T, E>) -> Result<Self, E> {
        let north = f(Direction::North)?;
        let east = f(Direction::East)?;
        let south = f(Direction::South)?;
        let west = f(Direction::West)?;
        Ok(Self::new(north, east, south, west))
    }
}

impl<T> Index<Direction> for DirectionMap<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        &self.values[direction.slot()]
    }
}

impl<T> IndexMut<Direction> for DirectionMap<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.values[direction.slot()]
    }
}
