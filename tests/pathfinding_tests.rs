mod common;

use alien_maze::pathfinding::format_path;
use alien_maze::{bfs, Cell, ObjectMap, PathError, RoadGraph};
use common::{assert_walkable, flip_horizontal, parse_maze, reference_distances, road_cells, CITY};
use proptest::prelude::*;

/// Check every ordered pair of road cells against the reference distances
fn check_all_pairs(map: &ObjectMap) {
    let graph = RoadGraph::build(map);
    let cells = road_cells(map);

    for &start in &cells {
        let distances = reference_distances(map, start);
        for &end in &cells {
            match (bfs(start, end, &graph), distances.get(&end)) {
                (Ok(path), Some(&hops)) => {
                    assert_walkable(map, &path, start, end);
                    assert_eq!(
                        path.len() - 1,
                        hops,
                        "{} -> {} took {}",
                        start,
                        end,
                        format_path(&path)
                    );
                }
                (Err(e), None) => {
                    assert_eq!(e, PathError::Unreachable { start, end });
                }
                (result, expected) => {
                    panic!("{} -> {}: got {:?}, reference {:?}", start, end, result, expected);
                }
            }
        }
    }
}

#[test]
fn test_open_square_corner_to_corner() {
    let map = parse_maze(
        "
        ###
        ###
        ###
        ",
    );
    let graph = RoadGraph::build(&map);
    let path = bfs(Cell::new(0, 0), Cell::new(2, 2), &graph).unwrap();

    assert_eq!(path.len(), 5);
    assert_walkable(&map, &path, Cell::new(0, 0), Cell::new(2, 2));
}

#[test]
fn test_start_equals_end() {
    let graph = RoadGraph::build(&parse_maze(CITY));
    for &cell in graph.cells() {
        assert_eq!(bfs(cell, cell, &graph), Ok(vec![cell]));
    }
}

#[test]
fn test_city_all_pairs_shortest() {
    check_all_pairs(&parse_maze(CITY));
}

#[test]
fn test_city_mirrored_all_pairs_shortest() {
    check_all_pairs(&flip_horizontal(&parse_maze(CITY)));
}

#[test]
fn test_route_around_block() {
    let map = parse_maze(
        "
        #####
        #...#
        #.###
        #.#..
        ###..
        ",
    );
    let graph = RoadGraph::build(&map);
    let start = Cell::new(0, 2);
    let end = Cell::new(3, 2);

    let path = bfs(start, end, &graph).unwrap();
    assert_walkable(&map, &path, start, end);
    // East side is 7 hops, west side is 9
    assert_eq!(path.len(), 8);
    assert!(path.contains(&Cell::new(2, 2)));
}

#[test]
fn test_island_is_unreachable() {
    let graph = RoadGraph::build(&parse_maze(CITY));
    let result = bfs(Cell::new(0, 0), Cell::new(7, 7), &graph);
    assert_eq!(
        result,
        Err(PathError::Unreachable {
            start: Cell::new(0, 0),
            end: Cell::new(7, 7)
        })
    );
}

#[test]
fn test_non_road_start_is_unreachable() {
    let graph = RoadGraph::build(&parse_maze(CITY));
    assert!(bfs(Cell::new(1, 1), Cell::new(0, 0), &graph).is_err());
}

proptest! {
    #[test]
    fn prop_bfs_matches_reference_distance(
        rows in 1i32..6,
        cols in 1i32..6,
        bits in proptest::collection::vec(proptest::bool::weighted(0.7), 36),
    ) {
        let roads: Vec<Cell> = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Cell::new(r, c)))
            .filter(|cell| bits[(cell.row * 6 + cell.col) as usize])
            .collect();
        let map = ObjectMap::with_roads(rows, cols, &roads);
        check_all_pairs(&map);
    }
}
