//! Step costs, the search heuristic and the corner-cutting rule.
//!
//! Costs are doubled so a diagonal step can cost 3 against a cardinal 2,
//! approximating the √2 ratio with integers.

use stepgrid_core::{Direction, Point};

/// Cost of a step that keeps one coordinate fixed.
pub const CARDINAL_STEP_COST: i32 = 2;

/// Cost of a step that changes both coordinates.
pub const DIAGONAL_STEP_COST: i32 = 3;

/// Neighbour expansion order: the four diagonals, then the four cardinals.
///
/// The order decides which of several equal-cost paths is returned, so it
/// must not change.
pub const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance: the number of king moves between two points,
/// and the ring a tile lies on around a centre.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Cost of stepping between the adjacent tiles `a` and `b`.
#[inline]
pub fn step_cost(a: Point, b: Point) -> i32 {
    if a.x == b.x || a.y == b.y {
        CARDINAL_STEP_COST
    } else {
        DIAGONAL_STEP_COST
    }
}

/// Estimated cost from `a` to `b`: doubled Manhattan distance.
#[inline]
pub fn heuristic(a: Point, b: Point) -> i32 {
    CARDINAL_STEP_COST * manhattan(a, b)
}

/// Numeric code (1–8) of the step `from → to`, or 0 if the tiles are not
/// distinct neighbours.
#[inline]
pub fn direction_code(from: Point, to: Point) -> u8 {
    Direction::between(from, to).map_or(0, Direction::code)
}

/// Whether stepping `from → to` avoids clipping a solid corner.
///
/// A diagonal step needs both tiles flanking the destination clear:
///
/// ```text
///  A X
///  X B
/// ```
///
/// Cardinal steps (and anything that is not a diagonal step) always pass.
pub fn corner_clear(from: Point, to: Point, is_solid: impl Fn(Point) -> bool) -> bool {
    let flanks = match Direction::between(from, to) {
        Some(Direction::UpLeft) => [to.shift(0, 1), to.shift(1, 0)],
        Some(Direction::UpRight) => [to.shift(0, 1), to.shift(-1, 0)],
        Some(Direction::DownRight) => [to.shift(0, -1), to.shift(-1, 0)],
        Some(Direction::DownLeft) => [to.shift(1, 0), to.shift(0, -1)],
        _ => return true,
    };
    !is_solid(flanks[0]) && !is_solid(flanks[1])
}
