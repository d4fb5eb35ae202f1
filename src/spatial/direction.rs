//! Grid coordinates and cardinal directions
//!
//! The stage grid uses +x for Right and +y for Up. Coordinates order row-major
//! (y first, then x), which is the canonical visiting order of the compiler.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Integer grid cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, growing to the right
    pub x: i32,
    /// Row, growing upwards
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step once in the given direction
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let offset = direction.offset();
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Rotate a unit offset a quarter turn clockwise, `(x, y) -> (y, -x)`
    #[must_use]
    pub const fn orthogonal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Component along the given axis
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coordinate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along x
    Horizontal,
    /// Along y
    Vertical,
}

/// Cardinal direction on the stage grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards +y
    Up,
    /// Towards -y
    Down,
    /// Towards -x
    Left,
    /// Towards +x
    Right,
}

impl Direction {
    /// Fixed probing order used by the wall tracer
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// Opposite direction
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step for this direction
    pub const fn offset(self) -> Coordinate {
        match self {
            Self::Up => Coordinate::new(0, 1),
            Self::Down => Coordinate::new(0, -1),
            Self::Left => Coordinate::new(-1, 0),
            Self::Right => Coordinate::new(1, 0),
        }
    }

    /// Up or Down
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Left or Right
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Axis a gate facing this direction spans
    ///
    /// Gates facing Up or Down lie along x, gates facing Left or Right along y.
    pub const fn span_axis(self) -> Axis {
        if self.is_vertical() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Dense index used by claim sets
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
