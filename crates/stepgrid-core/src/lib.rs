//! **stepgrid-core** — geometry types shared by the *stepgrid* crates.
//!
//! Tile positions ([`Point`]), rectangles ([`Range`]) and single-tile step
//! directions ([`Direction`]).

pub mod direction;
pub mod geom;

pub use direction::{Direction, walk};
pub use geom::{Point, Range, RangeIter};
