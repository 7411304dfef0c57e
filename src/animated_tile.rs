use crate::animation::FrameClock;
use crate::surface::Surface;

/// One frame of a decorative tile animation
#[derive(Debug, Clone, PartialEq)]
pub struct TimedFrame<I> {
    pub image: I,
    pub duration_ms: f64,
}

/// Looping animation pinned to one map tile
#[derive(Debug, Clone)]
pub struct AnimatedTile<I> {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    frames: Vec<TimedFrame<I>>,
    index: usize,
    clock: FrameClock,
}

impl<I> AnimatedTile<I> {
    pub fn new(x: f32, y: f32, width: f32, height: f32, frames: Vec<TimedFrame<I>>) -> Self {
        AnimatedTile {
            x,
            y,
            width,
            height,
            frames,
            index: 0,
            clock: FrameClock::new(),
        }
    }

    /// Switch to the next frame once the current one has been shown long enough
    pub fn update(&mut self, elapsed_ms: f64) {
        self.clock.tick(elapsed_ms);

        let Some(frame) = self.frames.get(self.index) else {
            return;
        };
        if self.clock.fire(frame.duration_ms) {
            self.index = (self.index + 1) % self.frames.len();
        }
    }

    pub fn draw<S: Surface<Image = I>>(&self, surface: &mut S) {
        if let Some(frame) = self.frames.get(self.index) {
            surface.clear_rect(self.x, self.y, self.width, self.height);
            surface.draw_image(&frame.image, self.x, self.y, self.width, self.height);
        }
    }

    pub fn resync_clock(&mut self) {
        self.clock.resync();
    }

    pub fn frame_index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
