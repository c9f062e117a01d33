use glam::{Mat4, Vec2};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Pixel-exact 2D camera addressed by its bottom-left world corner.
///
/// The visible world rectangle is `left..left + width` by
/// `bottom..bottom + height`, one world unit per physical pixel.
pub struct Camera2D {
    pub origin: Vec2,
    pub viewport: (u32, u32),
}

impl Camera2D {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            origin: Vec2::ZERO,
            viewport: (viewport_width, viewport_height),
        }
    }

    pub fn set_origin(&mut self, left: i32, bottom: i32) {
        self.origin = Vec2::new(left as f32, bottom as f32);
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.origin.x,
            self.origin.x + self.viewport.0 as f32,
            self.origin.y,
            self.origin.y + self.viewport.1 as f32,
            -1.0,
            1.0,
        )
    }

    pub fn build_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_ndc(camera: &Camera2D, x: f32, y: f32) -> Vec2 {
        let clip = camera.projection() * Vec4::new(x, y, 0.0, 1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }

    #[test]
    fn origin_maps_to_bottom_left_of_clip_space() {
        let camera = Camera2D::new(800, 600);
        let ndc = to_ndc(&camera, 0.0, 0.0);
        assert!((ndc.x + 1.0).abs() < 1e-5);
        assert!((ndc.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn scrolled_origin_shifts_visible_rectangle() {
        let mut camera = Camera2D::new(800, 600);
        camera.set_origin(-150, 40);
        let bottom_left = to_ndc(&camera, -150.0, 40.0);
        let top_right = to_ndc(&camera, 650.0, 640.0);
        assert!((bottom_left.x + 1.0).abs() < 1e-5);
        assert!((bottom_left.y + 1.0).abs() < 1e-5);
        assert!((top_right.x - 1.0).abs() < 1e-5);
        assert!((top_right.y - 1.0).abs() < 1e-5);
    }
}
