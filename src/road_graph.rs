use crate::grid::{Cell, ObjectMap};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Adjacency over the road cells of a map
///
/// Every road cell has an entry listing its road neighbours in the fixed
/// order north, south, west, east. Non-road cells have no entry.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    adjacency: HashMap<Cell, Vec<Cell>>,
    /// Road cells in row-major order
    cells: Vec<Cell>,
    component: HashMap<Cell, usize>,
    components: Vec<Vec<Cell>>,
}

impl RoadGraph {
    /// Build the graph from the object layer of a map
    pub fn build(map: &ObjectMap) -> Self {
        let mut adjacency = HashMap::new();
        let mut cells = Vec::new();

        for row in 0..map.rows {
            for col in 0..map.cols {
                let cell = Cell::new(row, col);
                if map.is_road(cell) {
                    adjacency.insert(cell, road_neighbours(map, cell));
                    cells.push(cell);
                }
            }
        }

        let mut graph = RoadGraph {
            adjacency,
            cells,
            component: HashMap::new(),
            components: Vec::new(),
        };
        graph.label_components();

        debug!(
            road_cells = graph.cells.len(),
            components = graph.components.len(),
            "built road graph"
        );
        graph
    }

    /// Flood fill every road cell, assigning a component index
    fn label_components(&mut self) {
        for &seed in &self.cells {
            if self.component.contains_key(&seed) {
                continue;
            }

            let id = self.components.len();
            let mut members = Vec::new();
            let mut stack = vec![seed];
            self.component.insert(seed, id);

            while let Some(current) = stack.pop() {
                members.push(current);
                for &next in self.adjacency.get(&current).into_iter().flatten() {
                    if self.component.contains_key(&next) {
                        continue;
                    }
                    self.component.insert(next, id);
                    stack.push(next);
                }
            }

            members.sort();
            self.components.push(members);
        }
    }

    /// Road neighbours of `cell`, empty for non-road cells
    pub fn neighbours(&self, cell: Cell) -> &[Cell] {
        self.adjacency.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.adjacency.contains_key(&cell)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the connected component holding `cell`
    pub fn component_of(&self, cell: Cell) -> Option<usize> {
        self.component.get(&cell).copied()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// True when every road cell can reach every other one
    pub fn is_connected(&self) -> bool {
        self.components.len() <= 1
    }

    /// Uniformly random road cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        self.cells.choose(rng).copied()
    }

    /// Uniformly random road cell reachable from `from`
    ///
    /// Equivalent to `random_cell` on a connected graph. May return `from`.
    pub fn random_cell_connected_to<R: Rng + ?Sized>(&self, from: Cell, rng: &mut R) -> Option<Cell> {
        let id = self.component_of(from)?;
        self.components[id].choose(rng).copied()
    }
}

/// Neighbours of a road cell that are themselves road, in N, S, W, E order
fn road_neighbours(map: &ObjectMap, cell: Cell) -> Vec<Cell> {
    [
        Cell::new(cell.row - 1, cell.col),
        Cell::new(cell.row + 1, cell.col),
        Cell::new(cell.row, cell.col - 1),
        Cell::new(cell.row, cell.col + 1),
    ]
    .into_iter()
    .filter(|&n| map.is_road(n))
    .collect()
}
