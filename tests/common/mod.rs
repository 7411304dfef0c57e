#![allow(dead_code)]

use alien_maze::{Cell, ObjectMap};
use std::collections::{HashMap, VecDeque};

/// Parse a maze drawn as text
/// Format:
/// - #: road
/// - .: empty
///
/// Blank lines are skipped, surrounding whitespace is trimmed.
pub fn parse_maze(text: &str) -> ObjectMap {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let rows = lines.len() as i32;
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;

    let mut roads = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '#' {
                roads.push(Cell::new(r as i32, c as i32));
            }
        }
    }

    ObjectMap::with_roads(rows, cols, &roads)
}

/// Flip a maze horizontally (mirror left-right)
pub fn flip_horizontal(map: &ObjectMap) -> ObjectMap {
    let mut flipped = ObjectMap::new(map.rows, map.cols);
    for row in 0..map.rows {
        for col in 0..map.cols {
            let cell = Cell::new(row, col);
            let mirrored = Cell::new(row, map.cols - 1 - col);
            flipped.set_object(mirrored, map.object(cell).cloned());
        }
    }
    flipped
}

/// Hop distance from `from` to every reachable road cell, walking the map
/// directly rather than the road graph
pub fn reference_distances(map: &ObjectMap, from: Cell) -> HashMap<Cell, usize> {
    let mut dist = HashMap::new();
    if !map.is_road(from) {
        return dist;
    }

    let mut queue = VecDeque::new();
    dist.insert(from, 0);
    queue.push_back(from);

    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Cell::new(cell.row + dr, cell.col + dc);
            if map.is_road(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    dist
}

/// Every road cell of the map in row-major order
pub fn road_cells(map: &ObjectMap) -> Vec<Cell> {
    let mut cells = Vec::new();
    for row in 0..map.rows {
        for col in 0..map.cols {
            let cell = Cell::new(row, col);
            if map.is_road(cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Panics unless `path` runs from `start` to `end` over adjacent road cells
pub fn assert_walkable(map: &ObjectMap, path: &[Cell], start: Cell, end: Cell) {
    assert!(!path.is_empty(), "path must not be empty");
    assert_eq!(path[0], start, "path must begin at start");
    assert_eq!(*path.last().unwrap(), end, "path must finish at end");

    for cell in path {
        assert!(map.is_road(*cell), "{} is not road", cell);
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

/// Maze with loops, dead ends and a detached island in the bottom right
pub const CITY: &str = "
    #######.
    #..#..#.
    #..####.
    ####..#.
    ...#..#.
    ...####.
    .......#
    ......##
";
