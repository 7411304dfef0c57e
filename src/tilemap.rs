use crate::assets::AssetStore;
use crate::error::SceneError;
use crate::grid::{Cell, CellObject, ObjectMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tilemap file as exported by the map editor
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tilemap {
    /// Pixel width and height of one tile
    pub tile_size: u32,
    /// Pre-rendered static layers, drawn in order at the origin
    #[serde(default)]
    pub tilemap: Vec<String>,
    #[serde(default)]
    pub objectmap: Vec<Vec<Option<CellObject>>>,
    #[serde(default)]
    pub animationmap: Vec<AnimationLayer>,
    #[serde(default)]
    pub animations: Vec<AnimationDef>,
    #[serde(default)]
    pub tile_sets: Vec<TileSet>,
}

/// Grid of animation indices, `null` for tiles without animation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationLayer {
    pub tilemap: Vec<Vec<Option<usize>>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationDef {
    pub name: String,
    pub frames: Vec<FrameDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameDef {
    /// Milliseconds the frame stays on screen
    pub duration: f64,
    pub tile: TileRef,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRef {
    pub tileset_idx: usize,
    pub tile_idx: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TileSet {
    pub tiles: Vec<String>,
}

/// An animated tile placement resolved from the animation layers
#[derive(Debug, Clone, Copy)]
pub struct AnimationPlacement<'a> {
    pub cell: Cell,
    pub animation: &'a AnimationDef,
}

impl Tilemap {
    /// Parse a tilemap, a zero `tileSize` is rejected
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let tilemap: Tilemap = serde_json::from_str(json)?;
        if tilemap.tile_size == 0 {
            return Err(SceneError::MissingRequiredElement(
                "non-zero tileSize".to_string(),
            ));
        }
        Ok(tilemap)
    }

    /// Load from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn object_map(&self) -> ObjectMap {
        ObjectMap::from_rows(self.objectmap.clone())
    }

    pub fn rows(&self) -> usize {
        self.objectmap.len()
    }

    pub fn cols(&self) -> usize {
        self.objectmap.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Pixel width of the whole map
    pub fn width(&self) -> u32 {
        self.cols() as u32 * self.tile_size
    }

    pub fn height(&self) -> u32 {
        self.rows() as u32 * self.tile_size
    }

    /// Asset name of static layer `idx`
    pub fn layer_name(idx: usize) -> String {
        idx.to_string()
    }

    /// Asset name of frame `idx` of `animation`
    pub fn frame_name(animation: &AnimationDef, idx: usize) -> String {
        format!("{}{}", animation.name, idx)
    }

    /// Image source of a tileset tile
    pub fn tile_source(&self, tile: TileRef) -> Result<&str, SceneError> {
        self.tile_sets
            .get(tile.tileset_idx)
            .and_then(|set| set.tiles.get(tile.tile_idx))
            .map(String::as_str)
            .ok_or_else(|| {
                SceneError::MissingRequiredElement(format!(
                    "tile {} of tileset {}",
                    tile.tile_idx, tile.tileset_idx
                ))
            })
    }

    /// Register every layer and animation frame image under its asset name
    pub fn register_images<T>(&self, store: &mut AssetStore<T>) -> Result<(), SceneError> {
        for (idx, src) in self.tilemap.iter().enumerate() {
            store.register(Self::layer_name(idx), src.clone());
        }

        for animation in &self.animations {
            for (idx, frame) in animation.frames.iter().enumerate() {
                let src = self.tile_source(frame.tile)?;
                store.register(Self::frame_name(animation, idx), src);
            }
        }

        Ok(())
    }

    /// Every tile that carries an animation, layer by layer in row-major order
    ///
    /// Indices pointing past the animation list are skipped.
    pub fn animation_placements(&self) -> Vec<AnimationPlacement<'_>> {
        let mut placements = Vec::new();

        for layer in &self.animationmap {
            for (r, row) in layer.tilemap.iter().enumerate() {
                for (c, &slot) in row.iter().enumerate() {
                    let Some(animation) = slot.and_then(|idx| self.animations.get(idx)) else {
                        continue;
                    };
                    placements.push(AnimationPlacement {
                        cell: Cell::new(r as i32, c as i32),
                        animation,
                    });
                }
            }
        }

        placements
    }
}
