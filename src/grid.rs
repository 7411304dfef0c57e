use serde::{Deserialize, Serialize};
use std::fmt;

/// Object name that marks a cell as walkable road
pub const ROAD: &str = "road";

/// A coordinate on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    /// Top-left pixel of this cell
    pub fn to_pixels(&self, tile_size: f32) -> (f32, f32) {
        (self.col as f32 * tile_size, self.row as f32 * tile_size)
    }

    /// True if `other` shares an edge with this cell
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Static object placed on a tile (road, rock, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellObject {
    pub name: String,
}

impl CellObject {
    pub fn new(name: impl Into<String>) -> Self {
        CellObject { name: name.into() }
    }

    pub fn is_road(&self) -> bool {
        self.name == ROAD
    }
}

/// Per-cell object metadata for the whole map
/// Empty cells are `None`, only cells whose object is named "road" are walkable
#[derive(Debug, Clone)]
pub struct ObjectMap {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<Option<CellObject>>,
}

impl ObjectMap {
    /// Create a map with every cell empty
    pub fn new(rows: i32, cols: i32) -> Self {
        ObjectMap {
            rows,
            cols,
            cells: vec![None; (rows.max(0) * cols.max(0)) as usize],
        }
    }

    /// Build from nested rows as found in the tilemap file
    /// Short rows are padded with empty cells, the widest row sets the column count
    pub fn from_rows(rows: Vec<Vec<Option<CellObject>>>) -> Self {
        let row_count = rows.len() as i32;
        let col_count = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let mut map = Self::new(row_count, col_count);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, object) in row.into_iter().enumerate() {
                let id = map.get_id(r as i32, c as i32);
                map.cells[id as usize] = object;
            }
        }
        map
    }

    /// Create a map with road placed on the given cells
    pub fn with_roads(rows: i32, cols: i32, roads: &[Cell]) -> Self {
        let mut map = Self::new(rows, cols);
        for &cell in roads {
            map.set_object(cell, Some(CellObject::new(ROAD)));
        }
        map
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Convert (row, col) to a flat cell ID
    pub fn get_id(&self, row: i32, col: i32) -> i32 {
        col + row * self.cols
    }

    pub fn object(&self, cell: Cell) -> Option<&CellObject> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[self.get_id(cell.row, cell.col) as usize].as_ref()
    }

    pub fn set_object(&mut self, cell: Cell, object: Option<CellObject>) {
        if self.in_bounds(cell) {
            let id = self.get_id(cell.row, cell.col);
            self.cells[id as usize] = object;
        }
    }

    /// Out of bounds is never road
    pub fn is_road(&self, cell: Cell) -> bool {
        self.object(cell).map(CellObject::is_road).unwrap_or(false)
    }
}
