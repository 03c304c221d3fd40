use stepgrid_core::Point;

use crate::cost::corner_clear;

/// World queries needed by [`PathSearch`](crate::PathSearch).
///
/// Implementations must be deterministic for a given world state and must
/// answer `false` for out-of-bounds tiles; the search itself never
/// bounds-checks.
pub trait StepPather {
    /// Whether a walker may stand on `p`.
    fn walkable(&self, p: Point) -> bool;

    /// Whether the step from `from` to the adjacent `to` is allowed.
    ///
    /// Must accept every cardinal step. The default accepts everything.
    fn can_step(&self, from: Point, to: Point) -> bool {
        let _ = (from, to);
        true
    }
}

/// Pather built from a single walkability closure. Diagonals may cut
/// corners.
pub struct FnPather<F: Fn(Point) -> bool> {
    pub walkable: F,
}

impl<F: Fn(Point) -> bool> StepPather for FnPather<F> {
    fn walkable(&self, p: Point) -> bool {
        (self.walkable)(p)
    }
}

/// Pather that forbids cutting solid corners.
///
/// `walkable` decides where a walker may stand; `solid` marks tiles that
/// block a diagonal squeeze past them. The two usually differ: a tile holding
/// a monster is not walkable yet does not block a corner.
pub struct SolidPather<W, S>
where
    W: Fn(Point) -> bool,
    S: Fn(Point) -> bool,
{
    pub walkable: W,
    pub solid: S,
}

impl<W, S> StepPather for SolidPather<W, S>
where
    W: Fn(Point) -> bool,
    S: Fn(Point) -> bool,
{
    fn walkable(&self, p: Point) -> bool {
        (self.walkable)(p)
    }

    fn can_step(&self, from: Point, to: Point) -> bool {
        corner_clear(from, to, &self.solid)
    }
}

impl<P: StepPather + ?Sized> StepPather for &P {
    fn walkable(&self, p: Point) -> bool {
        (**self).walkable(p)
    }

    fn can_step(&self, from: Point, to: Point) -> bool {
        (**self).can_step(from, to)
    }
}
