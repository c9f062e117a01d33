#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

impl SpriteVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(SpriteVertex, position) as wgpu::BufferAddress,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // tex_coords
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(SpriteVertex, tex_coords) as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // color
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(SpriteVertex, color) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }

    /// Four corners of a centred quad rotated `angle_deg` counter-clockwise,
    /// wound bottom-left, bottom-right, top-right, top-left.
    pub fn rotated_quad(
        center: [f32; 2],
        size: [f32; 2],
        angle_deg: f32,
        color: [f32; 4],
    ) -> [SpriteVertex; 4] {
        let half_w = size[0] * 0.5;
        let half_h = size[1] * 0.5;
        let mut corners = [
            [-half_w, -half_h],
            [half_w, -half_h],
            [half_w, half_h],
            [-half_w, half_h],
        ];
        let radians = angle_deg.to_radians();
        if radians != 0.0 {
            let (sin_r, cos_r) = radians.sin_cos();
            for c in &mut corners {
                let (x, y) = (c[0], c[1]);
                c[0] = x * cos_r - y * sin_r;
                c[1] = x * sin_r + y * cos_r;
            }
        }

        let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
        let mut out = [SpriteVertex {
            position: [0.0, 0.0],
            tex_coords: [0.0, 0.0],
            color,
        }; 4];
        for (i, vertex) in out.iter_mut().enumerate() {
            vertex.position = [center[0] + corners[i][0], center[1] + corners[i][1]];
            vertex.tex_coords = uvs[i];
        }
        out
    }

    /// Index pattern for a quad starting at `base`.
    pub fn quad_indices(base: u32) -> [u32; 6] {
        [base, base + 1, base + 2, base, base + 2, base + 3]
    }
}
