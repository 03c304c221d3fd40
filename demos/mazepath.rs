//! Solve an ASCII maze and print the route.
//!
//! Run: cargo run --bin mazepath [MAP_FILE]
//!
//! The map uses `#` for walls, `.` for floor, `S` for the start and `E` for
//! the end. Diagonal moves may not cut wall corners. Without a file a
//! built-in map is solved. Set `RUST_LOG=debug` for search diagnostics.

use stepgrid_core::walk;
use stepgrid_paths::{
    DEFAULT_MAX_RADIUS, PathSearch, StepPather, TileMap, find_closest_valid_position,
};

const BUILTIN_MAP: &str = "\
#########
#....#..#
#.......#
#.....#.#
#.#..#S.#
#E#.....#
#########";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let text = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: cannot read {path}: {e}");
                std::process::exit(1);
            }
        },
        None => BUILTIN_MAP.to_string(),
    };

    let map = match TileMap::parse(&text) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let (Some(start), Some(end)) = (map.start(), map.end()) else {
        eprintln!("Error: map needs both an S and an E tile");
        std::process::exit(1);
    };
    log::info!("{}x{} map, {start} -> {end}", map.size().x, map.size().y);

    let mut search = PathSearch::new();
    match search.find(&map, start, end) {
        Ok(steps) => {
            print!("{}", map.render(&walk(start, &steps)));
            let arrows: String = steps.iter().map(|d| d.to_string()).collect();
            println!("{} steps: {arrows}", steps.len());
            log::info!(
                "{} nodes allocated, {} expanded",
                search.nodes_used(),
                search.nodes_expanded()
            );
        }
        Err(e) => {
            print!("{}", map.render(&[]));
            println!("no path: {e}");
            let nearest = find_closest_valid_position(
                |p| map.walkable(p) && search.find(&map, start, p).is_ok(),
                end,
                1,
                DEFAULT_MAX_RADIUS,
            );
            match nearest {
                Some(p) => println!("closest reachable tile to E: {p}"),
                None => println!("nothing reachable near E"),
            }
            std::process::exit(1);
        }
    }
}
