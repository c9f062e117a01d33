//! Scrolling window onto the world.
//!
//! The view only moves when the player gets closer than `margin` pixels to a
//! screen edge, and then by exactly the overshoot. Offsets are kept as whole
//! pixels so every world pixel lands on a screen pixel.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
    pub margin: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, margin: f32) -> Self {
        Self {
            left: 0,
            bottom: 0,
            width,
            height,
            margin,
        }
    }

    /// Scroll so the box `left..right` x `bottom..top` sits inside the margins.
    /// Returns whether the view moved.
    pub fn scroll_to_keep_visible(&mut self, left: f32, right: f32, bottom: f32, top: f32) -> bool {
        let mut changed = false;
        let mut view_left = self.left as f32;
        let mut view_bottom = self.bottom as f32;
        let width = self.width as f32;
        let height = self.height as f32;

        let left_boundary = view_left + self.margin;
        if left < left_boundary {
            view_left -= left_boundary - left;
            changed = true;
        }

        let right_boundary = view_left + width - self.margin;
        if right > right_boundary {
            view_left += right - right_boundary;
            changed = true;
        }

        let top_boundary = view_bottom + height - self.margin;
        if top > top_boundary {
            view_bottom += top - top_boundary;
            changed = true;
        }

        let bottom_boundary = view_bottom + self.margin;
        if bottom < bottom_boundary {
            view_bottom -= bottom_boundary - bottom;
            changed = true;
        }

        // Truncate toward zero, not floor.
        self.left = view_left.trunc() as i32;
        self.bottom = view_bottom.trunc() as i32;
        changed
    }

    /// `(left, right, bottom, top)` of the visible world, inclusive pixels.
    pub fn projection(&self) -> (i32, i32, i32, i32) {
        (
            self.left,
            self.left + self.width as i32 - 1,
            self.bottom,
            self.bottom + self.height as i32 - 1,
        )
    }

    /// Window coordinates (origin top-left, y down) to world coordinates.
    pub fn screen_to_world(&self, x: f64, y: f64) -> (f32, f32) {
        (
            self.left as f32 + x as f32,
            self.bottom as f32 + (self.height as f32 - y as f32),
        )
    }
}
