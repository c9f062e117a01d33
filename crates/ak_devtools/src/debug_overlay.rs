//! In-game egui layer drawn on top of the sprite pass.
//!
//! The score HUD is always drawn in the bottom-left corner of the screen, which
//! is the viewport's bottom-left corner in world space. The debug window is
//! toggled with F3.
//!
//! egui needs a `RenderPass<'static>` while `begin_render_pass` borrows the
//! encoder, so a frame is split into phases:
//!
//!   1. `prepare()` -- run egui UI logic, produce tessellated primitives
//!   2. `upload()`  -- upload textures and update GPU buffers (borrows encoder mutably)
//!   3. `paint()`   -- render into a new render pass with `forget_lifetime()`
//!   4. `cleanup()` -- free textures egui no longer references

use ak_core::time::TimeState;
use winit::window::Window;

/// Text drawn by the HUD every frame.
#[derive(Debug, Clone, Default)]
pub struct HudText {
    pub score: String,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayStats {
    pub sprite_count: u32,
    pub draw_calls: u32,
    pub bullets: u32,
    pub chests_remaining: u32,
    pub view_left: i32,
    pub view_bottom: i32,
    pub player_position: (f32, f32),
    pub player_angle: f32,
    /// Connected gamepad name, if any
    pub joystick: Option<String>,
    pub audio_enabled: bool,
}

pub struct DebugOverlay {
    pub egui_ctx: egui::Context,
    pub egui_winit_state: egui_winit::State,
    pub egui_renderer: egui_wgpu::Renderer,
    pub visible: bool,
}

impl DebugOverlay {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Window,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_winit_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            visible: false,
        }
    }

    pub fn handle_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> bool {
        let response = self.egui_winit_state.on_window_event(window, event);
        response.consumed
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::info!("Debug overlay: {}", if self.visible { "ON" } else { "OFF" });
    }

    pub fn prepare(
        &mut self,
        window: &Window,
        time: &TimeState,
        hud: &HudText,
        stats: &OverlayStats,
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.egui_winit_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new(egui::Id::new("score_hud"))
                .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -20.0])
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(&hud.score)
                            .color(egui::Color32::WHITE)
                            .size(14.0),
                    );
                });

            if self.visible {
                egui::Window::new("Debug")
                    .default_pos([10.0, 10.0])
                    .show(ctx, |ui| {
                        ui.label(format!("FPS: {:.1}", time.smoothed_fps));
                        ui.label(format!("Frame time: {:.2} ms", time.smoothed_frame_time_ms));
                        ui.label(format!("Steps this frame: {}", time.steps_this_frame));
                        ui.label(format!("Total steps: {}", time.fixed_step_count));
                        ui.separator();
                        ui.label(format!("Sprites: {}", stats.sprite_count));
                        ui.label(format!("Draw calls: {}", stats.draw_calls));
                        ui.label(format!("Bullets: {}", stats.bullets));
                        ui.label(format!("Chests left: {}", stats.chests_remaining));
                        ui.separator();
                        ui.label(format!(
                            "Viewport: ({}, {})",
                            stats.view_left, stats.view_bottom
                        ));
                        ui.label(format!(
                            "Player: ({:.1}, {:.1}) @ {:.1}\u{b0}",
                            stats.player_position.0, stats.player_position.1, stats.player_angle
                        ));
                        ui.label(match &stats.joystick {
                            Some(name) => format!("Joystick: {name}"),
                            None => "Joystick: none".to_string(),
                        });
                        ui.label(if stats.audio_enabled {
                            "Audio: on"
                        } else {
                            "Audio: off"
                        });
                    });
            }
        });

        self.egui_winit_state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (primitives, full_output.textures_delta)
    }

    /// Upload textures and update buffers. Call before creating the egui render pass.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        primitives: &[egui::ClippedPrimitive],
        textures_delta: &egui::TexturesDelta,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer
            .update_buffers(device, queue, encoder, primitives, screen_descriptor);
    }

    /// Render into an existing render pass. Call after `upload()`.
    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        primitives: &[egui::ClippedPrimitive],
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.egui_renderer
            .render(render_pass, primitives, screen_descriptor);
    }

    /// Free textures that egui no longer needs. Call after rendering.
    pub fn cleanup(&mut self, textures_delta: &egui::TexturesDelta) {
        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}
