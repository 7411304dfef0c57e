use crate::direction::Direction;
use crate::grid::Cell;
use crate::pathfinding::{bfs, format_path, PathError};
use crate::road_graph::RoadGraph;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

/// Cursor over the current route through the road graph
///
/// `init` plans the first leg between two random road cells. Each `advance`
/// moves the cursor one cell along the route; once the cursor rests on the
/// goal, the next `advance` plans a fresh leg from there to a new random
/// destination. There is no terminal state.
pub struct MazePath<R: Rng = StdRng> {
    graph: RoadGraph,
    rng: R,
    path: Vec<Cell>,
    cursor: usize,
    legs: u64,
}

impl<R: Rng> MazePath<R> {
    /// Create an uninitialised maze path, call `init` before use
    pub fn new(graph: RoadGraph, rng: R) -> Self {
        MazePath {
            graph,
            rng,
            path: Vec::new(),
            cursor: 0,
            legs: 0,
        }
    }

    /// Start from a known route with the cursor on its first cell
    pub fn from_path(graph: RoadGraph, path: Vec<Cell>, rng: R) -> Self {
        let legs = if path.is_empty() { 0 } else { 1 };
        MazePath {
            graph,
            rng,
            path,
            cursor: 0,
            legs,
        }
    }

    /// Plan the first leg from a random road cell
    pub fn init(&mut self) -> Result<(), PathError> {
        let start = self
            .graph
            .random_cell(&mut self.rng)
            .ok_or(PathError::NoRoadCells)?;
        self.plan_from(start);
        Ok(())
    }

    /// Move to the next cell, or plan a new leg when standing on the goal
    pub fn advance(&mut self) {
        if self.path.is_empty() {
            warn!("advance called before init");
            return;
        }

        if self.is_at_goal() {
            let start = self.path[self.cursor];
            self.plan_from(start);
        } else {
            self.cursor += 1;
        }
    }

    /// Replace the route with a shortest path from `start` to a random
    /// destination in the same connected part of the graph
    fn plan_from(&mut self, start: Cell) {
        let end = self
            .graph
            .random_cell_connected_to(start, &mut self.rng)
            .unwrap_or(start);

        self.path = match bfs(start, end, &self.graph) {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "falling back to standing still");
                vec![start]
            }
        };
        self.cursor = 0;
        self.legs += 1;

        debug!(
            leg = self.legs,
            hops = self.path.len() - 1,
            path = %format_path(&self.path),
            "planned new leg"
        );
    }

    /// Cell the cursor rests on, `None` before `init`
    pub fn current_cell(&self) -> Option<Cell> {
        self.path.get(self.cursor).copied()
    }

    /// Cell the cursor moves to next, `None` on the goal
    pub fn next_cell(&self) -> Option<Cell> {
        self.path.get(self.cursor + 1).copied()
    }

    /// Heading of the current edge
    ///
    /// On the goal this is the heading the goal was entered with. A route of
    /// a single cell has no heading and callers keep the previous one.
    pub fn current_direction(&self) -> Option<Direction> {
        let current = self.current_cell()?;
        if self.is_at_goal() {
            let prev = self.path.get(self.cursor.checked_sub(1)?)?;
            Direction::between(*prev, current)
        } else {
            Direction::between(current, self.next_cell()?)
        }
    }

    pub fn is_at_goal(&self) -> bool {
        !self.path.is_empty() && self.cursor == self.path.len() - 1
    }

    pub fn goal(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of legs planned so far
    pub fn legs(&self) -> u64 {
        self.legs
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }
}
