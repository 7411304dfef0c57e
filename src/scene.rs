use crate::agent::Agent;
use crate::animated_tile::{AnimatedTile, TimedFrame};
use crate::animation::Animation;
use crate::assets::{AssetError, AssetStore};
use crate::config::AlienConfig;
use crate::direction::{Direction, DirectionMap};
use crate::error::SceneError;
use crate::grid::ObjectMap;
use crate::maze_path::MazePath;
use crate::pathfinding::render_ascii;
use crate::road_graph::RoadGraph;
use crate::surface::Surface;
use crate::tilemap::Tilemap;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

/// Register every image a scene built from `tilemap` will ask for
pub fn register_scene_images<T>(
    tilemap: &Tilemap,
    alien: &AlienConfig,
    store: &mut AssetStore<T>,
) -> Result<(), SceneError> {
    tilemap.register_images(store)?;
    for direction in Direction::ALL {
        for name in alien.frames(direction) {
            store.register(name.clone(), alien.sprite_source(name));
        }
    }
    Ok(())
}

/// The whole maze scene: static layers, decorative animations and the alien
///
/// Owns every component. The host calls `step` once per display frame; while
/// paused nothing is updated or drawn.
pub struct Scene<I, R: Rng = StdRng> {
    tile_size: u32,
    width: f32,
    height: f32,
    layers: Vec<I>,
    animated_tiles: Vec<AnimatedTile<I>>,
    agent: Agent<I, R>,
    object_map: ObjectMap,
    playing: bool,
}

impl<I: Clone, R: Rng> Scene<I, R> {
    /// Assemble the scene from a loaded tilemap and image store
    ///
    /// Every image is resolved here; a missing one is fatal.
    pub fn build(
        tilemap: &Tilemap,
        images: &AssetStore<I>,
        alien: &AlienConfig,
        rng: R,
    ) -> Result<Self, SceneError> {
        let tile_size = tilemap.tile_size;
        let size = tile_size as f32;

        let layers = (0..tilemap.tilemap.len())
            .map(|idx| images.get(&Tilemap::layer_name(idx)).cloned())
            .collect::<Result<Vec<I>, AssetError>>()?;

        let animated_tiles = tilemap
            .animation_placements()
            .into_iter()
            .map(|placement| -> Result<AnimatedTile<I>, AssetError> {
                let frames = placement
                    .animation
                    .frames
                    .iter()
                    .enumerate()
                    .map(|(idx, frame)| -> Result<TimedFrame<I>, AssetError> {
                        let name = Tilemap::frame_name(placement.animation, idx);
                        Ok(TimedFrame {
                            image: images.get(&name)?.clone(),
                            duration_ms: frame.duration,
                        })
                    })
                    .collect::<Result<Vec<_>, AssetError>>()?;
                let (x, y) = placement.cell.to_pixels(size);
                Ok(AnimatedTile::new(x, y, size, size, frames))
            })
            .collect::<Result<Vec<_>, AssetError>>()?;

        let sprites = DirectionMap::try_from_fn(|direction| -> Result<Animation<I>, SceneError> {
            let names = alien.frames(direction);
            if names.is_empty() {
                return Err(SceneError::MissingRequiredElement(format!(
                    "{} alien animation frames",
                    direction.name()
                )));
            }
            let frames = names
                .iter()
                .map(|name| images.get(name).cloned())
                .collect::<Result<Vec<I>, AssetError>>()?;
            Ok(Animation::new(frames))
        })?;

        let object_map = tilemap.object_map();
        let graph = RoadGraph::build(&object_map);
        info!(
            road_cells = graph.len(),
            components = graph.component_count(),
            animated_tiles = animated_tiles.len(),
            "building scene"
        );

        let mut maze_path = MazePath::new(graph, rng);
        maze_path.init()?;
        info!(
            start = ?maze_path.current_cell(),
            goal = ?maze_path.goal(),
            "first leg planned"
        );

        let mut agent = Agent::new(maze_path, sprites, tile_size, alien.frame_ms);
        agent.init();

        Ok(Scene {
            tile_size,
            width: tilemap.width() as f32,
            height: tilemap.height() as f32,
            layers,
            animated_tiles,
            agent,
            object_map,
            playing: true,
        })
    }
}

impl<I, R: Rng> Scene<I, R> {
    pub fn update(&mut self, elapsed_ms: f64) {
        for tile in &mut self.animated_tiles {
            tile.update(elapsed_ms);
        }
        self.agent.update(elapsed_ms);
    }

    pub fn draw<S: Surface<Image = I>>(&self, surface: &mut S) {
        for layer in &self.layers {
            surface.draw_image(layer, 0.0, 0.0, self.width, self.height);
        }
        for tile in &self.animated_tiles {
            tile.draw(surface);
        }
        self.agent.draw(surface);
    }

    /// Draw the frozen scene with `pause_image` stretched over the canvas
    ///
    /// Returns false without an image, the caller draws its own overlay.
    pub fn draw_paused<S: Surface<Image = I>>(&self, surface: &mut S, pause_image: Option<&I>) -> bool {
        self.draw(surface);
        match pause_image {
            Some(image) => {
                surface.draw_image(image, 0.0, 0.0, self.width, self.height);
                true
            }
            None => false,
        }
    }

    /// Update and draw one frame if playing, returns whether anything ran
    pub fn step<S: Surface<Image = I>>(&mut self, elapsed_ms: f64, surface: &mut S) -> bool {
        if !self.playing {
            return false;
        }
        self.update(elapsed_ms);
        self.draw(surface);
        true
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Pause or resume; time spent paused is not counted by the animations
    pub fn set_playing(&mut self, playing: bool) {
        if playing && !self.playing {
            for tile in &mut self.animated_tiles {
                tile.resync_clock();
            }
            self.agent.resync_clock();
        }
        if playing != self.playing {
            info!(playing, "play state changed");
        }
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.set_playing(!self.playing);
        self.playing
    }

    /// Maze as text with the remaining route and the alien marked
    pub fn ascii_snapshot(&self) -> String {
        let maze_path = self.agent.maze_path();
        let remaining = &maze_path.path()[maze_path.cursor().min(maze_path.path().len())..];
        render_ascii(&self.object_map, remaining, self.agent.cell())
    }

    pub fn agent(&self) -> &Agent<I, R> {
        &self.agent
    }

    pub fn animated_tiles(&self) -> &[AnimatedTile<I>] {
        &self.animated_tiles
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
