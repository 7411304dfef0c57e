/// Something images can be blitted onto
pub trait Surface {
    type Image;

    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32, w: f32, h: f32);

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall<I> {
    Image { image: I, x: f32, y: f32, w: f32, h: f32 },
    Clear { x: f32, y: f32, w: f32, h: f32 },
}

/// Surface that keeps a log of draw calls instead of rendering
#[derive(Debug, Clone)]
pub struct RecordingSurface<I> {
    pub calls: Vec<DrawCall<I>>,
}

impl<I> Default for RecordingSurface<I> {
    fn default() -> Self {
        RecordingSurface { calls: Vec::new() }
    }
}

impl<I: Clone> RecordingSurface<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Images drawn so far, in order
    pub fn images(&self) -> Vec<I> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image { image, .. } => Some(image.clone()),
                DrawCall::Clear { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl<I: Clone> Surface for RecordingSurface<I> {
    type Image = I;

    fn draw_image(&mut self, image: &I, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Image {
            image: image.clone(),
            x,
            y,
            w,
            h,
        });
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Clear { x, y, w, h });
    }
}
