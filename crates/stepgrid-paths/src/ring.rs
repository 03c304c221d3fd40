//! Nearest-tile search over expanding rings.
//!
//! Rings are squares around the start with their four extreme corners cut
//! off. Each ring `r ≥ 2` also carries the corners `(±(r-1), ±(r-1))` cut
//! from ring `r - 1`, so over radii `0..=R` every tile of the square of
//! half-width `R` is visited exactly once, except its own four corners.
//!
//! ```text
//!   r = 2        r = 3
//!   . x x x .    . x x x x x .
//!   x x . x x    x x . . . x x
//!   x . o . x    x . . . . . x
//!   x x . x x    x . . o . . x
//!   . x x x .    x . . . . . x
//!                x x . . . x x
//!                . x x x x x .
//! ```
//!
//! Ring 1 is therefore just the four cardinal neighbours.

use stepgrid_core::Point;

use crate::error::CrawlError;

/// Radii beyond this are never searched.
pub const MAX_RADIUS_LIMIT: u32 = 50;

pub const DEFAULT_MIN_RADIUS: u32 = 0;

pub const DEFAULT_MAX_RADIUS: u32 = 18;

/// Walk the rings `min_radius..=max_radius` in order, calling `f` with each
/// offset from the centre, and return the first `Some` it produces.
///
/// `max_radius` is clamped to [`MAX_RADIUS_LIMIT`]. Nothing is visited when
/// `min_radius` is larger than the clamped maximum.
pub fn crawl<T>(
    min_radius: u32,
    max_radius: u32,
    mut f: impl FnMut(Point) -> Option<T>,
) -> Option<T> {
    let max_radius = max_radius.min(MAX_RADIUS_LIMIT);
    (min_radius..=max_radius).find_map(|r| {
        if r == 0 {
            f(Point::ZERO)
        } else {
            ring(r as i32).find_map(&mut f)
        }
    })
}

/// Offsets of ring `r ≥ 1`, in scan order.
fn ring(r: i32) -> impl Iterator<Item = Point> {
    let poles = [Point::new(0, r), Point::new(0, -r)];
    let rows = (1..r).flat_map(move |i| {
        [
            Point::new(-i, r),
            Point::new(i, r),
            Point::new(-i, -r),
            Point::new(i, -r),
        ]
    });
    let c = r - 1;
    let corners = [
        Point::new(-c, c),
        Point::new(c, c),
        Point::new(-c, -c),
        Point::new(c, -c),
    ]
    .into_iter()
    .filter(move |_| r > 1);
    let sides = [Point::new(-r, 0), Point::new(r, 0)];
    let cols = (1..r).flat_map(move |i| {
        [
            Point::new(-r, i),
            Point::new(r, i),
            Point::new(-r, -i),
            Point::new(r, -i),
        ]
    });
    poles
        .into_iter()
        .chain(rows)
        .chain(corners)
        .chain(sides)
        .chain(cols)
}

/// The first tile around `start`, ring by ring, for which `predicate` holds.
///
/// Errors tell an empty search area apart from a search that found nothing.
pub fn try_find_closest_valid_position(
    mut predicate: impl FnMut(Point) -> bool,
    start: Point,
    min_radius: u32,
    max_radius: u32,
) -> Result<Point, CrawlError> {
    let max = max_radius.min(MAX_RADIUS_LIMIT);
    if min_radius > max {
        log::debug!("ring search around {start}: radius {min_radius} > {max}");
        return Err(CrawlError::InvalidRadiusRange {
            min: min_radius,
            max,
        });
    }
    crawl(min_radius, max, |d| {
        let p = start + d;
        predicate(p).then_some(p)
    })
    .ok_or(CrawlError::NotFound)
}

/// [`try_find_closest_valid_position`] collapsing every failure to `None`.
///
/// The usual radii are [`DEFAULT_MIN_RADIUS`] and [`DEFAULT_MAX_RADIUS`].
pub fn find_closest_valid_position(
    predicate: impl FnMut(Point) -> bool,
    start: Point,
    min_radius: u32,
    max_radius: u32,
) -> Option<Point> {
    try_find_closest_valid_position(predicate, start, min_radius, max_radius).ok()
}
