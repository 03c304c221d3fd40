//! Single-tile step directions.
//!
//! Each step between adjacent tiles carries a compact numeric code:
//!
//! ```text
//!          dx
//!        -1 0 1
//!        ------
//!    -1 | 5 1 6
//! dy  0 | 2 . 3
//!     1 | 8 4 7
//! ```
//!
//! Names are in grid coordinates (Y grows down), not on-screen isometric
//! directions.

use std::fmt;

use crate::geom::Point;

/// Code table indexed by `3 * dy + 4 + dx`. Slot 4 is the self-step.
const CODES: [u8; 9] = [5, 1, 6, 2, 0, 3, 8, 4, 7];

/// One of the eight steps to an adjacent tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Up = 1,
    Left = 2,
    Right = 3,
    Down = 4,
    UpLeft = 5,
    UpRight = 6,
    DownRight = 7,
    DownLeft = 8,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Numeric code in `1..=8`.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Up),
            2 => Some(Self::Left),
            3 => Some(Self::Right),
            4 => Some(Self::Down),
            5 => Some(Self::UpLeft),
            6 => Some(Self::UpRight),
            7 => Some(Self::DownRight),
            8 => Some(Self::DownLeft),
            _ => None,
        }
    }

    /// The direction of the step `from → to`, or `None` unless the two
    /// tiles are distinct 8-neighbours.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        if d.x.abs() > 1 || d.y.abs() > 1 {
            return None;
        }
        let idx = (3 * d.y + 4 + d.x) as usize;
        Self::from_code(CODES[idx])
    }

    /// Displacement of a single step in this direction.
    pub const fn offset(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
            Self::Down => Point::new(0, 1),
            Self::UpLeft => Point::new(-1, -1),
            Self::UpRight => Point::new(1, -1),
            Self::DownRight => Point::new(1, 1),
            Self::DownLeft => Point::new(-1, 1),
        }
    }

    /// Whether the step changes both coordinates.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self as u8 >= 5
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            Self::Up => "↑",
            Self::Left => "←",
            Self::Right => "→",
            Self::Down => "↓",
            Self::UpLeft => "↖",
            Self::UpRight => "↗",
            Self::DownRight => "↘",
            Self::DownLeft => "↙",
        };
        f.write_str(sym)
    }
}

/// Positions visited when following `steps` from `start`, excluding `start`.
pub fn walk(start: Point, steps: &[Direction]) -> Vec<Point> {
    let mut cur = start;
    steps
        .iter()
        .map(|d| {
            cur = cur + d.offset();
            cur
        })
        .collect()
}
