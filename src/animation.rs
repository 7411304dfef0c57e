/// Accumulates wall-clock time between ticks
///
/// Fed with the monotonically increasing elapsed milliseconds of the frame
/// callback, so animation speed does not depend on the render frame rate.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_elapsed: Option<f64>,
    accumulated: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the time since the previous tick, the first tick only anchors
    pub fn tick(&mut self, elapsed_ms: f64) {
        if let Some(last) = self.last_elapsed {
            self.accumulated += (elapsed_ms - last).max(0.0);
        }
        self.last_elapsed = Some(elapsed_ms);
    }

    /// Consume the accumulated time once it reaches `threshold_ms`
    ///
    /// The accumulator restarts from zero, so this fires at most once per
    /// threshold window whatever the tick rate.
    pub fn fire(&mut self, threshold_ms: f64) -> bool {
        if self.accumulated >= threshold_ms {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    /// Forget the last anchor, the next tick adds no time
    pub fn resync(&mut self) {
        self.last_elapsed = None;
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

/// Looping sequence of frames
#[derive(Debug, Clone)]
pub struct Animation<I> {
    frames: Vec<I>,
    index: usize,
    playing: bool,
}

impl<I> Animation<I> {
    pub fn new(frames: Vec<I>) -> Self {
        Animation {
            frames,
            index: 0,
            playing: false,
        }
    }

    /// Start playback, keeping the current frame
    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Step to the next frame, wrapping at the end. No-op while stopped.
    pub fn next_frame(&mut self) {
        if self.playing && !self.frames.is_empty() {
            self.index = (self.index + 1) % self.frames.len();
        }
    }

    pub fn frame_index(&self) -> usize {
        self.index
    }

    pub fn current_frame(&self) -> Option<&I> {
        self.frames.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
