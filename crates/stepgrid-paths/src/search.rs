//! Bounded A* over the 8-connected tile grid.
//!
//! The search works on a fixed node budget and a path-length cap, and
//! reports failure rather than growing past either. Frontier ties are FIFO
//! and neighbours are tried in [`NEIGHBOR_OFFSETS`] order, so results are
//! fully deterministic.

use stepgrid_core::{Direction, Point};

use crate::config::SearchConfig;
use crate::cost::{NEIGHBOR_OFFSETS, heuristic, step_cost};
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::pool::{NodeId, NodePool};
use crate::traits::{FnPather, StepPather};
use crate::visited::VisitedSet;

/// Lifecycle of the most recent [`PathSearch::find`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search has run yet.
    Initialized,
    /// A search is in progress. Only held inside [`PathSearch::find`];
    /// callers always see one of the settled states below.
    Searching,
    /// The goal was reached.
    Succeeded,
    /// The frontier emptied before the goal was reached.
    Exhausted,
    /// The node budget or the path-length cap stopped the search.
    Aborted,
}

/// Reusable path search context.
///
/// Owns the node pool, frontier and visited set; all of them are reset at
/// the start of every [`find`](Self::find), so nothing leaks between calls
/// and separate contexts never interfere.
pub struct PathSearch {
    config: SearchConfig,
    pool: NodePool,
    frontier: Frontier,
    visited: VisitedSet,
    state: SearchState,
}

impl Default for PathSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSearch {
    /// A search context with the default limits.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            pool: NodePool::new(config.node_capacity),
            frontier: Frontier::new(),
            visited: VisitedSet::new(),
            state: SearchState::Initialized,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the limits used by subsequent searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
        self.pool.set_capacity(config.node_capacity);
    }

    /// Outcome of the last search.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Nodes allocated by the last search.
    #[inline]
    pub fn nodes_used(&self) -> usize {
        self.pool.len()
    }

    /// Nodes expanded by the last search.
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.visited.len()
    }

    /// Find a path from `start` to `goal`.
    ///
    /// Returns the steps to take, in order; an empty list means `start` is
    /// already the goal. The goal tile itself need not be walkable: it is
    /// always accepted as the final step, which lets a walker path up to an
    /// occupied target.
    pub fn find<P: StepPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Direction>, PathError> {
        let result = self.run(pather, start, goal);
        self.state = match result {
            Ok(_) => SearchState::Succeeded,
            Err(PathError::Unreachable) => SearchState::Exhausted,
            Err(_) => SearchState::Aborted,
        };
        if let Err(e) = &result {
            log::debug!(
                "no path {start} -> {goal}: {e} ({} nodes, {} expanded, {} queued)",
                self.pool.len(),
                self.visited.len(),
                self.frontier.len()
            );
        }
        result
    }

    fn reset(&mut self) {
        self.pool.reset();
        self.frontier.clear();
        self.visited.clear();
    }

    fn run<P: StepPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Direction>, PathError> {
        self.reset();
        self.state = SearchState::Searching;
        if start == goal {
            return Ok(Vec::new());
        }

        let root = self
            .pool
            .allocate(start, 0, heuristic(start, goal), None)
            .ok_or_else(|| self.budget_exceeded())?;
        self.frontier.insert(&self.pool, root);

        while let Some(cur) = self.frontier.pop_cheapest() {
            self.visited.insert(&mut self.pool, cur);
            if self.pool[cur].pos == goal {
                return self.reconstruct(cur);
            }
            self.expand(pather, cur, goal)?;
        }
        Err(PathError::Unreachable)
    }

    /// Try all eight neighbours of `cur`.
    fn expand<P: StepPather>(
        &mut self,
        pather: &P,
        cur: NodeId,
        goal: Point,
    ) -> Result<(), PathError> {
        let pos = self.pool[cur].pos;
        for off in NEIGHBOR_OFFSETS {
            let candidate = pos + off;
            let ok = pather.walkable(candidate);
            if (ok && pather.can_step(pos, candidate)) || (!ok && candidate == goal) {
                self.relax_edge(pather, cur, candidate, goal)?;
            }
        }
        Ok(())
    }

    /// Offer `cur → candidate` to the candidate's node, creating it if new.
    fn relax_edge<P: StepPather>(
        &mut self,
        pather: &P,
        cur: NodeId,
        candidate: Point,
        goal: Point,
    ) -> Result<(), PathError> {
        let cur_pos = self.pool[cur].pos;
        let g = self.pool[cur].g + step_cost(cur_pos, candidate);

        if let Some(open) = self.frontier.find(&self.pool, candidate) {
            self.pool[cur].add_child(open);
            if g < self.pool[open].g && pather.can_step(cur_pos, candidate) {
                self.pool[open].relax(cur, g);
            }
        } else if let Some(closed) = self.visited.find(&self.pool, candidate) {
            self.pool[cur].add_child(closed);
            if g < self.pool[closed].g && pather.can_step(cur_pos, candidate) {
                self.pool[closed].relax(cur, g);
                self.visited
                    .propagate_relaxation(&mut self.pool, pather, closed);
            }
        } else {
            let fresh = self
                .pool
                .allocate(candidate, g, heuristic(candidate, goal), Some(cur))
                .ok_or_else(|| self.budget_exceeded())?;
            self.frontier.insert(&self.pool, fresh);
            self.pool[cur].add_child(fresh);
        }
        Ok(())
    }

    /// Walk parent links back from `end` and emit the steps start-first.
    fn reconstruct(&self, end: NodeId) -> Result<Vec<Direction>, PathError> {
        let limit = self.config.max_path_length;
        let mut steps = Vec::new();
        let mut node = end;
        while let Some(parent) = self.pool[node].parent {
            if steps.len() >= limit {
                break;
            }
            let from = self.pool[parent].pos;
            let to = self.pool[node].pos;
            debug_assert!(from.is_adjacent(to), "parent link {from} -> {to}");
            steps.extend(Direction::between(from, to));
            node = parent;
        }
        if steps.len() >= limit {
            return Err(PathError::TooLong { limit });
        }
        steps.reverse();
        Ok(steps)
    }

    #[inline]
    fn budget_exceeded(&self) -> PathError {
        PathError::BudgetExceeded {
            capacity: self.pool.capacity(),
        }
    }
}

/// Find a path with a throwaway [`PathSearch`] and default limits.
///
/// `walkable` must return `false` for tiles outside the world. Diagonal steps
/// may cut corners; use [`find_path_with`] and a [`SolidPather`]
/// (or any [`StepPather`]) to forbid that.
///
/// [`SolidPather`]: crate::SolidPather
pub fn find_path(
    walkable: impl Fn(Point) -> bool,
    start: Point,
    goal: Point,
) -> Option<Vec<Direction>> {
    find_path_with(&FnPather { walkable }, start, goal)
}

/// [`find_path`] for an arbitrary [`StepPather`].
pub fn find_path_with<P: StepPather>(
    pather: &P,
    start: Point,
    goal: Point,
) -> Option<Vec<Direction>> {
    PathSearch::new().find(pather, start, goal).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileMap;
    use rand::RngExt;
    use stepgrid_core::walk;

    fn codes(steps: &[Direction]) -> Vec<u8> {
        steps.iter().map(|d| d.code()).collect()
    }

    fn open_field(start: Point, goal: Point) -> Option<Vec<u8>> {
        find_path(|_| true, start, goal).map(|s| codes(&s))
    }

    // Maze fixtures; `#` is solid, `S` start, `E` end.

    const SINGLE_PATH: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
##...##.#.#E..#
#######.#.###.#
###...#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############";

    const BRIDGES: &str = "\
###############
#.S...........#
#.............#
#.............#
#.............#
#.............#
############.##
#.............#
#.............#
#.............#
#.............#
#.............#
###.###########
#.....E.......#
###############";

    const SPLIT_ROOM: &str = "\
###############
#.S...........#
#.............#
#.............#
#.............#
#.............#
#.............#
#.............#
#.............#
#.............#
#.............#
#.............#
###############
#.....E.......#
###############";

    const SPLIT_ROOM_BIG: &str = "\
##############################
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#............................#
#.....S......................#
##############################
#.....E......................#
##############################";

    // A cheaper route to an already-expanded tile is found late; the
    // improvement must flow down to the tiles expanded through it.
    const LATE_SHORTCUT: &str = "\
#########
#....#..#
#.......#
#.....#.#
#.#..#S.#
#E#.....#
#########";

    const PILLAR: &str = "\
#####
#S..#
#.#.#
#..E#
#####";

    /// Wraps a map so diagonals may cut corners.
    struct NoCorners<'a>(&'a TileMap);

    impl StepPather for NoCorners<'_> {
        fn walkable(&self, p: Point) -> bool {
            self.0.walkable(p)
        }
    }

    fn solve(map: &str, corners: bool) -> (Result<Vec<u8>, PathError>, SearchState) {
        let map = TileMap::parse(map).unwrap();
        let (start, end) = (map.start().unwrap(), map.end().unwrap());
        let mut ps = PathSearch::new();
        let r = if corners {
            ps.find(&map, start, end)
        } else {
            ps.find(&NoCorners(&map), start, end)
        };
        (r.map(|s| codes(&s)), ps.state())
    }

    #[test]
    fn path_to_self() {
        for p in [Point::new(8, 8), Point::new(0, 0), Point::new(-4, 17)] {
            assert_eq!(open_field(p, p), Some(vec![]));
            assert_eq!(find_path(|_| false, p, p), Some(vec![]));
        }
    }

    #[test]
    fn two_steps_each_cardinal() {
        let s = Point::new(8, 8);
        assert_eq!(open_field(s, Point::new(8, 6)), Some(vec![1, 1]));
        assert_eq!(open_field(s, Point::new(6, 8)), Some(vec![2, 2]));
        assert_eq!(open_field(s, Point::new(10, 8)), Some(vec![3, 3]));
        assert_eq!(open_field(s, Point::new(8, 10)), Some(vec![4, 4]));
    }

    #[test]
    fn diagonals_first() {
        let s = Point::new(8, 8);
        assert_eq!(open_field(s, Point::new(5, 6)), Some(vec![5, 5, 2]));
        assert_eq!(open_field(s, Point::new(4, 4)), Some(vec![5, 5, 5, 5]));
        assert_eq!(open_field(s, Point::new(10, 12)), Some(vec![7, 7, 4, 4]));
        assert_eq!(
            open_field(s, Point::new(12, 20)),
            Some(vec![7, 7, 7, 7, 4, 4, 4, 4, 4, 4, 4, 4])
        );
        assert_eq!(open_field(Point::ZERO, Point::new(-3, 2)), Some(vec![8, 8, 2]));
    }

    #[test]
    fn long_paths() {
        let s = Point::new(56, 56);
        let mut ps = PathSearch::new();
        let walk_all = FnPather { walkable: |_| true };

        assert_eq!(
            ps.find(&walk_all, s, Point::new(0, 0)),
            Err(PathError::TooLong { limit: 25 })
        );
        assert_eq!(ps.state(), SearchState::Aborted);

        let steps = ps.find(&walk_all, s, s.shift(24, 24)).unwrap();
        assert_eq!(steps, vec![Direction::DownRight; 24]);
        assert_eq!(ps.state(), SearchState::Succeeded);

        assert_eq!(
            ps.find(&walk_all, s, s.shift(25, 25)),
            Err(PathError::TooLong { limit: 25 })
        );
    }

    #[test]
    fn custom_length_limit() {
        let mut ps = PathSearch::with_config(SearchConfig::default().with_max_path_length(3));
        let walk_all = FnPather { walkable: |_| true };
        let s = Point::new(8, 8);
        assert_eq!(
            ps.find(&walk_all, s, Point::new(8, 11)),
            Err(PathError::TooLong { limit: 3 })
        );
        assert_eq!(
            ps.find(&walk_all, s, Point::new(8, 10)).map(|d| codes(&d)),
            Ok(vec![4, 4])
        );
    }

    #[test]
    fn node_budget_aborts() {
        let walk_all = FnPather { walkable: |_| true };
        let mut ps = PathSearch::with_config(SearchConfig::default().with_node_capacity(1));
        assert_eq!(
            ps.find(&walk_all, Point::ZERO, Point::new(3, 0)),
            Err(PathError::BudgetExceeded { capacity: 1 })
        );
        assert_eq!(ps.state(), SearchState::Aborted);

        // The start plus its eight neighbours fit, the next layer does not.
        ps.set_config(SearchConfig::default().with_node_capacity(9));
        assert_eq!(
            ps.find(&walk_all, Point::ZERO, Point::new(3, 3)),
            Err(PathError::BudgetExceeded { capacity: 9 })
        );
        assert_eq!(ps.nodes_used(), 9);

        ps.set_config(SearchConfig::default());
        assert_eq!(
            ps.find(&walk_all, Point::ZERO, Point::new(3, 3)).map(|d| codes(&d)),
            Ok(vec![7, 7, 7])
        );
    }

    #[test]
    fn zero_capacity_fails_cleanly() {
        let mut ps = PathSearch::with_config(SearchConfig::default().with_node_capacity(0));
        assert_eq!(
            ps.find(&FnPather { walkable: |_| true }, Point::ZERO, Point::new(1, 0)),
            Err(PathError::BudgetExceeded { capacity: 0 })
        );
        // Standing on the goal needs no nodes at all.
        assert_eq!(
            ps.find(&FnPather { walkable: |_| true }, Point::ZERO, Point::ZERO),
            Ok(vec![])
        );
    }

    #[test]
    fn unwalkable_goal_is_still_reachable() {
        let goal = Point::new(10, 8);
        assert_eq!(
            find_path(|p| p != goal, Point::new(8, 8), goal).map(|s| codes(&s)),
            Some(vec![3, 3])
        );
        let goal = Point::new(12, 11);
        assert_eq!(
            find_path(|p| p != goal, Point::new(8, 8), goal).map(|s| codes(&s)),
            Some(vec![7, 7, 7, 3])
        );
    }

    #[test]
    fn unwalkable_tiles_are_avoided() {
        let wall = Point::new(1, 0);
        let steps = find_path(|p| p != wall, Point::ZERO, Point::new(3, 0)).unwrap();
        assert_eq!(codes(&steps), vec![6, 7, 3]);
        assert!(!walk(Point::ZERO, &steps).contains(&wall));
    }

    #[test]
    fn corner_rule_changes_route() {
        assert_eq!(solve(PILLAR, false).0, Ok(vec![3, 7, 4]));
        assert_eq!(solve(PILLAR, true).0, Ok(vec![3, 3, 4, 4]));
    }

    #[test]
    fn single_path_maze() {
        let (r, state) = solve(SINGLE_PATH, false);
        assert_eq!(
            r,
            Ok(vec![1, 6, 7, 7, 6, 6, 7, 4, 4, 4, 4, 7, 6, 1, 1, 1, 1, 6, 3, 3, 7, 8, 8, 4])
        );
        assert_eq!(state, SearchState::Succeeded);

        // Without corner cutting the only route is too long.
        assert_eq!(solve(SINGLE_PATH, true).0, Err(PathError::TooLong { limit: 25 }));
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let (r, state) = solve(SPLIT_ROOM, true);
        assert_eq!(r, Err(PathError::Unreachable));
        assert_eq!(state, SearchState::Exhausted);
    }

    #[test]
    fn big_walled_off_goal_exceeds_budget() {
        let (r, state) = solve(SPLIT_ROOM_BIG, false);
        assert_eq!(r, Err(PathError::BudgetExceeded { capacity: 300 }));
        assert_eq!(state, SearchState::Aborted);
    }

    #[test]
    fn closed_nodes_pick_up_late_shortcuts() {
        assert_eq!(solve(LATE_SHORTCUT, false).0, Ok(vec![5, 2, 2, 2, 8, 4]));
    }

    #[test]
    fn late_shortcut_map_with_corner_rule() {
        // No closed node improves here; this pins the route only.
        assert_eq!(solve(LATE_SHORTCUT, true).0, Ok(vec![4, 2, 2, 5, 1, 2, 2, 4, 4]));
    }

    #[test]
    fn bridges_through_narrow_gaps() {
        let (r, state) = solve(BRIDGES, false);
        assert_eq!(
            r,
            Ok(vec![7, 7, 7, 7, 3, 3, 3, 3, 3, 7, 8, 8, 8, 8, 8, 2, 2, 2, 8, 7, 3, 3])
        );
        assert_eq!(state, SearchState::Succeeded);

        // Squeezing past the gap corners is what keeps the route short.
        assert_eq!(solve(BRIDGES, true).0, Err(PathError::TooLong { limit: 25 }));
    }

    #[test]
    fn state_is_settled_after_every_find() {
        let map = TileMap::parse(SPLIT_ROOM).unwrap();
        let mut ps = PathSearch::new();
        for (start, goal) in [
            (map.start().unwrap(), map.end().unwrap()),
            (Point::new(1, 1), Point::new(3, 3)),
            (Point::new(2, 2), Point::new(2, 2)),
        ] {
            let _ = ps.find(&map, start, goal);
            assert_ne!(ps.state(), SearchState::Searching);
        }
    }

    #[test]
    fn repeated_searches_do_not_leak_state() {
        let map = TileMap::parse(SINGLE_PATH).unwrap();
        let (start, end) = (map.start().unwrap(), map.end().unwrap());
        let nc = NoCorners(&map);

        let mut ps = PathSearch::new();
        let first = ps.find(&nc, start, end);
        let first_nodes = ps.nodes_used();

        // Something unrelated that fails on the budget in between.
        let big = TileMap::parse(SPLIT_ROOM_BIG).unwrap();
        let _ = ps.find(&big, big.start().unwrap(), big.end().unwrap());

        let second = ps.find(&nc, start, end);
        assert_eq!(first, second);
        assert_eq!(ps.nodes_used(), first_nodes);
        assert_eq!(second, PathSearch::new().find(&nc, start, end));
    }

    #[test]
    fn initial_state() {
        let ps = PathSearch::default();
        assert_eq!(ps.state(), SearchState::Initialized);
        assert_eq!(ps.nodes_used(), 0);
        assert_eq!(ps.nodes_expanded(), 0);
        assert_eq!(ps.config(), SearchConfig::default());
    }

    #[test_log::test]
    fn random_maps_yield_valid_paths() {
        let mut rng = rand::rng();
        let mut ps = PathSearch::new();
        for _ in 0..200 {
            let (w, h) = (12, 10);
            let mut text = String::new();
            for y in 0..h {
                for x in 0..w {
                    let edge = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                    text.push(if edge || rng.random_range(0..4) == 0 { '#' } else { '.' });
                }
                text.push('\n');
            }
            let map = TileMap::parse(&text).unwrap();
            let start = Point::new(rng.random_range(1..w - 1), rng.random_range(1..h - 1));
            let goal = Point::new(rng.random_range(1..w - 1), rng.random_range(1..h - 1));

            let result = ps.find(&map, start, goal);
            assert_eq!(result, ps.find(&map, start, goal), "not idempotent");

            let Ok(steps) = result else {
                continue;
            };
            assert!(steps.len() < 25);
            let mut at = start;
            for (i, d) in steps.iter().enumerate() {
                let next = at + d.offset();
                if i + 1 < steps.len() {
                    assert!(map.walkable(next), "stepped onto {next}");
                }
                // A solid goal is entered without the corner check.
                if map.walkable(next) {
                    assert!(map.can_step(at, next), "cut a corner {at} -> {next}");
                }
                at = next;
            }
            assert_eq!(at, goal);
        }
    }
}
