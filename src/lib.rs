pub mod agent;
pub mod animated_tile;
pub mod animation;
pub mod assets;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod maze_path;
pub mod pathfinding;
pub mod road_graph;
pub mod scene;
pub mod surface;
pub mod tilemap;

pub use agent::Agent;
pub use assets::{AssetError, AssetStore};
pub use direction::{Direction, DirectionMap};
pub use error::SceneError;
pub use grid::{Cell, CellObject, ObjectMap};
pub use maze_path::MazePath;
pub use pathfinding::{bfs, PathError};
pub use road_graph::RoadGraph;
pub use scene::Scene;
pub use surface::Surface;
pub use tilemap::Tilemap;
