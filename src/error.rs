use crate::assets::AssetError;
use crate::pathfinding::PathError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a scene from starting
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("missing required element: {0}")]
    MissingRequiredElement(String),
    #[error("invalid tilemap: {0}")]
    Tilemap(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
