use crate::grid::{Cell, ObjectMap};
use crate::road_graph::RoadGraph;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no road route from {start} to {end}")]
    Unreachable { start: Cell, end: Cell },
    #[error("road graph has no road cells")]
    NoRoadCells,
}

/// Breadth-first search over the road graph
///
/// Returns the shortest path in hops, `path[0] == start` and the last
/// element is `end`. Neighbours are explored in the graph's stored order, so
/// ties between equally short routes always resolve the same way.
pub fn bfs(start: Cell, end: Cell, graph: &RoadGraph) -> Result<Vec<Cell>, PathError> {
    if start == end {
        return Ok(vec![start]);
    }

    let mut visited: HashSet<Cell> = HashSet::new();
    let mut prev: HashMap<Cell, Cell> = HashMap::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        for &n in graph.neighbours(current) {
            if n == end {
                prev.insert(n, current);
                let path = reconstruct_path(&prev, start, end);
                trace!(path = %format_path(&path), "bfs found path");
                return Ok(path);
            }

            if visited.insert(n) {
                prev.insert(n, current);
                queue.push_back(n);
            }
        }
    }

    trace!(visited = visited.len(), "bfs exhausted queue");
    Err(PathError::Unreachable { start, end })
}

/// Walk predecessors back from `end` and reverse
fn reconstruct_path(prev: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match prev.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

/// Format path for display
pub fn format_path(path: &[Cell]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, cell) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&cell.to_string());
    }
    result
}

/// Text view of the maze
///
/// Symbols:
/// - `A`: alien cell
/// - `*`: remaining path cell
/// - `#`: road
/// - `.`: anything else
pub fn render_ascii(map: &ObjectMap, path: &[Cell], alien: Option<Cell>) -> String {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    let mut result = String::new();

    for row in 0..map.rows {
        for col in 0..map.cols {
            let cell = Cell::new(row, col);
            let symbol = if Some(cell) == alien {
                'A'
            } else if on_path.contains(&cell) {
                '*'
            } else if map.is_road(cell) {
                '#'
            } else {
                '.'
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}
