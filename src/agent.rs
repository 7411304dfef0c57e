use crate::animation::{Animation, FrameClock};
use crate::direction::{Direction, DirectionMap};
use crate::grid::Cell;
use crate::maze_path::MazePath;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::Rng;

/// Default time between sprite frames
pub const DEFAULT_FRAME_MS: f64 = 100.0;

/// The alien: walks the maze path one pixel per tick
///
/// The pixel position is decoupled from the grid. Each edge of the route is
/// covered in exactly `tile_size` ticks, after which the maze path advances.
pub struct Agent<I, R: Rng = StdRng> {
    maze_path: MazePath<R>,
    sprites: DirectionMap<Animation<I>>,
    /// Direction whose animation is shown
    animation: Direction,
    clock: FrameClock,
    frame_ms: f64,
    tile_size: u32,
    x: f32,
    y: f32,
    /// Pixels travelled on the current edge
    pixels_moved: u32,
}

impl<I, R: Rng> Agent<I, R> {
    pub fn new(
        maze_path: MazePath<R>,
        sprites: DirectionMap<Animation<I>>,
        tile_size: u32,
        frame_ms: f64,
    ) -> Self {
        Agent {
            maze_path,
            sprites,
            animation: Direction::South,
            clock: FrameClock::new(),
            frame_ms,
            tile_size: tile_size.max(1),
            x: 0.0,
            y: 0.0,
            pixels_moved: 0,
        }
    }

    /// Snap onto the current cell of the maze path
    pub fn init(&mut self) {
        if let Some(cell) = self.maze_path.current_cell() {
            let (x, y) = cell.to_pixels(self.tile_size as f32);
            self.x = x;
            self.y = y;
        }
        self.pixels_moved = 0;
        self.select_animation();
    }

    /// Advance animation and position by one tick
    pub fn update(&mut self, elapsed_ms: f64) {
        self.clock.tick(elapsed_ms);
        if self.clock.fire(self.frame_ms) {
            self.sprites[self.animation].next_frame();
        }

        // Standing on the goal there is no edge to walk, wait out the tile
        if self.maze_path.next_cell().is_some() {
            if let Some(direction) = self.maze_path.current_direction() {
                let (dx, dy) = direction.step();
                self.x += dx;
                self.y += dy;
            }
        }

        self.pixels_moved += 1;
        if self.pixels_moved == self.tile_size {
            self.maze_path.advance();
            self.pixels_moved = 0;
        }

        self.select_animation();
    }

    /// Blit the current frame half a tile above the occupied tile
    pub fn draw<S: Surface<Image = I>>(&self, surface: &mut S) {
        let size = self.tile_size as f32;
        let x = self.x;
        let y = self.y - size / 2.0;

        surface.clear_rect(x, y, size, size);
        if let Some(frame) = self.sprites[self.animation].current_frame() {
            surface.draw_image(frame, x, y, size, size);
        }
    }

    /// Follow the path's heading; a route without one keeps the old animation
    fn select_animation(&mut self) {
        if let Some(direction) = self.maze_path.current_direction() {
            if direction != self.animation {
                self.sprites[self.animation].stop();
                self.animation = direction;
            }
        }

        let current = &mut self.sprites[self.animation];
        if !current.is_playing() {
            current.play();
        }
    }

    /// Drop time spent while the scene was paused
    pub fn resync_clock(&mut self) {
        self.clock.resync();
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Direction of the animation being shown
    pub fn direction(&self) -> Direction {
        self.animation
    }

    pub fn cell(&self) -> Option<Cell> {
        self.maze_path.current_cell()
    }

    pub fn frame_index(&self) -> usize {
        self.sprites[self.animation].frame_index()
    }

    pub fn pixels_moved(&self) -> u32 {
        self.pixels_moved
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn maze_path(&self) -> &MazePath<R> {
        &self.maze_path
    }
}
