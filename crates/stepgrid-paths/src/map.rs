//! ASCII tile maps.
//!
//! A [`TileMap`] parses a text picture of a level into solid and open tiles.
//! It is the reference [`StepPather`]: walkability is bounds-checked and
//! diagonal steps may not cut solid corners.

use std::fmt;

use stepgrid_core::{Point, Range};

use crate::cost::corner_clear;
use crate::traits::StepPather;

/// Characters a map may contain.
pub const MAP_RUNES: &str = "#.SE";

/// A rectangular level read from text.
///
/// `#` is a wall, `.` is floor, and `S` and `E` are floor tiles marking the
/// start and the end. Lines are separated by `'\n'` and must all have the
/// same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    solid: Vec<bool>,
    size: Point,
    start: Option<Point>,
    end: Option<Point>,
}

impl TileMap {
    /// Parse a map. Whitespace around the whole text is ignored, a trailing
    /// `'\r'` on each line too.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let mut solid = Vec::with_capacity(s.len());
        let mut start = None;
        let mut end = None;
        let mut w: Option<i32> = None;
        let mut h = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    '#' => solid.push(true),
                    '.' => solid.push(false),
                    'S' => {
                        start = Some(p);
                        solid.push(false);
                    }
                    'E' => {
                        end = Some(p);
                        solid.push(false);
                    }
                    _ => {
                        return Err(MapError::InvalidRune {
                            ch,
                            pos: p,
                            content: s.to_string(),
                        });
                    }
                }
                x += 1;
            }
            match w {
                Some(w) if w != x => return Err(MapError::InconsistentSize(s.to_string())),
                Some(_) => {}
                None => w = Some(x),
            }
            h += 1;
        }

        let size = match w {
            Some(w) if w > 0 => Point::new(w, h),
            _ => Point::ZERO,
        };
        log::trace!("parsed {}x{} map", size.x, size.y);
        Ok(Self {
            solid,
            size,
            start,
            end,
        })
    }

    /// Width and height in tiles.
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.size.x, self.size.y)
    }

    /// The `S` tile, if any. With several, the last one read wins.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The `E` tile, if any.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether `p` is a wall. Everything outside the map counts as wall.
    pub fn is_solid(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.solid[i],
            None => true,
        }
    }

    /// Render the map back to text, drawing `*` on every tile of `path`
    /// except the start and end markers.
    pub fn render(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity((self.size.x as usize + 1) * self.size.y as usize);
        for p in self.bounds() {
            let ch = if Some(p) == self.start {
                'S'
            } else if Some(p) == self.end {
                'E'
            } else if path.contains(&p) {
                '*'
            } else if self.is_solid(p) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
            if p.x == self.size.x - 1 {
                out.push('\n');
            }
        }
        out
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y * self.size.x + p.x) as usize)
    }
}

impl StepPather for TileMap {
    fn walkable(&self, p: Point) -> bool {
        !self.is_solid(p)
    }

    fn can_step(&self, from: Point, to: Point) -> bool {
        corner_clear(from, to, |p| self.is_solid(p))
    }
}

/// Errors that can occur when parsing a [`TileMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside [`MAP_RUNES`] was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "map: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{content}"
                )
            }
        }
    }
}

impl std::error::Error for MapError {}
