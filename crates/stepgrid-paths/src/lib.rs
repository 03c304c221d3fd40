//! Bounded pathfinding on 8-connected tile grids.
//!
//! Two independent searches:
//!
//! - **Path search** ([`PathSearch::find`], [`find_path`]): A\* with a fixed
//!   node budget and a cap on path length, returning the steps as
//!   [`Direction`]s. Ties are broken deterministically, so the same world
//!   always yields the same path.
//! - **Ring search** ([`find_closest_valid_position`]): scans expanding
//!   rings around a tile for the nearest one satisfying a predicate.
//!
//! The world is described through [`StepPather`]: which tiles can be stood
//! on, and which steps between adjacent tiles are allowed. [`FnPather`] and
//! [`SolidPather`] wrap closures; [`TileMap`] parses an ASCII level.
//!
//! | Step | Cost |
//! |---|---|
//! | cardinal | [`CARDINAL_STEP_COST`] |
//! | diagonal | [`DIAGONAL_STEP_COST`] |
//!
//! Failures are reported as values ([`PathError`], [`CrawlError`]); nothing
//! here panics on well-behaved callbacks.

mod config;
mod cost;
mod error;
mod frontier;
mod map;
mod pool;
mod ring;
mod search;
mod traits;
mod visited;

pub use config::{DEFAULT_MAX_PATH_LENGTH, DEFAULT_NODE_CAPACITY, SearchConfig};
pub use cost::{
    CARDINAL_STEP_COST, DIAGONAL_STEP_COST, NEIGHBOR_OFFSETS, chebyshev, corner_clear,
    direction_code, heuristic, manhattan, step_cost,
};
pub use error::{CrawlError, PathError};
pub use map::{MAP_RUNES, MapError, TileMap};
pub use ring::{
    DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, MAX_RADIUS_LIMIT, crawl, find_closest_valid_position,
    try_find_closest_valid_position,
};
pub use search::{PathSearch, SearchState, find_path, find_path_with};
pub use stepgrid_core::{Direction, Point};
pub use traits::{FnPather, SolidPather, StepPather};
