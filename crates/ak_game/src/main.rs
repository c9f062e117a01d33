//! The Adventurous Knight: main loop and application entry point.
//!
//! winit drives the event loop via `ApplicationHandler`. Each redraw:
//!
//!   1. `begin_frame()` measures the wall-clock delta and feeds the accumulator
//!   2. `while should_step()` runs one game frame per fixed 60 Hz slice
//!   3. the sprite mesh is rebuilt from the game state
//!   4. the camera follows the scrolled viewport, sprites are drawn, then the
//!      egui layer (score HUD, debug window) is composited on top
//!
//! The config file is polled for changes between frames; `R` reloads it by
//! hand. Either way the game restarts with the new settings.

mod audio;
mod bullet;
mod config;
mod game;
mod gamepad;
mod physics;
mod player;
#[cfg(test)]
mod replay;
mod sprite;
mod viewport;
mod world;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use wgpu::util::DeviceExt;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use ak_core::input::{InputState, Key, KeyEvent, KeyTransition, MouseBtn};
use ak_core::time::TimeState;
use ak_devtools::{DebugOverlay, HudText, OverlayStats};
use ak_platform::window::PlatformConfig;
use ak_render::{Camera2D, GpuContext, SpritePipeline, SpriteVertex, Texture};
use audio::AudioPlayer;
use config::{ConfigWatcher, GameConfig, SpriteDef};
use game::{GameState, Sound};
use gamepad::{Gamepad, JoystickEvent};
use sprite::SpriteKind;

const CONFIG_PATH: &str = "assets/config/game.json";

/// A contiguous run of indices that share the same texture binding.
#[derive(Debug, Clone, Copy)]
struct DrawCall {
    kind: SpriteKind,
    index_start: u32,
    index_count: u32,
}

struct GpuSpriteTexture {
    bind_group: wgpu::BindGroup,
    /// White for real images; the configured fill for the 1x1 fallback.
    tint: [f32; 4],
}

struct EngineState {
    window: Arc<Window>,
    gpu: GpuContext,
    time: TimeState,
    input: InputState,
    camera: Camera2D,
    sprite_pipeline: SpritePipeline,
    overlay: DebugOverlay,

    config_path: PathBuf,
    config_watcher: ConfigWatcher,
    game: GameState,
    gamepad: Gamepad,
    pending_joystick: Vec<JoystickEvent>,
    audio: AudioPlayer,
    textures: HashMap<SpriteKind, GpuSpriteTexture>,
    clear_color: wgpu::Color,

    // The sprite mesh is rebuilt on the CPU after each simulated frame and
    // streamed into these buffers. They grow (power-of-two) but never shrink.
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    mesh_vertex_capacity: usize,
    mesh_index_capacity: usize,
    draw_calls: Vec<DrawCall>,
    sprite_count: usize,
}

impl EngineState {
    fn new(window: Arc<Window>, config_path: PathBuf, config: GameConfig) -> Result<Self, String> {
        let gpu = GpuContext::new(window.clone())?;
        let sprite_pipeline = SpritePipeline::new(&gpu.device, gpu.surface_format);
        let overlay = DebugOverlay::new(&gpu.device, gpu.surface_format, &window);

        let mut camera = Camera2D::new(gpu.size.0, gpu.size.1);
        camera.set_origin(0, 0);
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform Buffer"),
                contents: bytemuck::cast_slice(&[camera.build_uniform()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group =
            sprite_pipeline.create_camera_bind_group(&gpu.device, &camera_buffer);
        let vertex_buffer = create_vertex_buffer(&gpu.device, 1);
        let index_buffer = create_index_buffer(&gpu.device, 1);

        let audio = AudioPlayer::new(std::path::Path::new(&config.chest_sound));
        let textures = load_sprite_textures(&gpu, &sprite_pipeline, &config);
        let clear_color = background_clear_color(config.background_color);

        let mut state = Self {
            window,
            gpu,
            time: TimeState::new(),
            input: InputState::new(),
            camera,
            sprite_pipeline,
            overlay,
            config_watcher: ConfigWatcher::new(config_path.clone()),
            config_path,
            game: GameState::new(config),
            gamepad: Gamepad::new(),
            pending_joystick: Vec::new(),
            audio,
            textures,
            clear_color,
            vertex_buffer,
            index_buffer,
            camera_buffer,
            camera_bind_group,
            mesh_vertex_capacity: 0,
            mesh_index_capacity: 0,
            draw_calls: Vec::new(),
            sprite_count: 0,
        };
        state.ensure_mesh_capacity(4, 6);
        state.follow_viewport();
        state.rebuild_mesh();
        Ok(state)
    }

    /// Reload the config and start a new game with it.
    fn restart(&mut self, reason: &str) {
        let mut config = if self.config_path.exists() {
            match config::load_config_from_path(&self.config_path) {
                Ok(config) => config,
                Err(err) => {
                    log::error!("Config reload failed ({reason}): {err}");
                    return;
                }
            }
        } else {
            GameConfig::default()
        };

        let current = &self.game.config().screen;
        if config.screen.width != current.width || config.screen.height != current.height {
            log::warn!("Screen size changes take effect on the next launch");
            config.screen.width = current.width;
            config.screen.height = current.height;
        }

        self.textures = load_sprite_textures(&self.gpu, &self.sprite_pipeline, &config);
        self.clear_color = background_clear_color(config.background_color);
        if config.chest_sound != self.game.config().chest_sound {
            self.audio = AudioPlayer::new(std::path::Path::new(&config.chest_sound));
        }
        self.game = GameState::new(config);
        self.follow_viewport();
        self.rebuild_mesh();
        log::info!("Game restarted ({reason})");
    }

    fn follow_viewport(&mut self) {
        let (left, _, bottom, _) = self.game.viewport.projection();
        self.camera.set_origin(left, bottom);
    }

    /// Forward this frame's input edges to the game.
    fn dispatch_input_events(&mut self) {
        forward_key_events(&mut self.game, self.input.key_events());

        for click in self.input.clicks().to_vec() {
            self.game.on_mouse_press(click.x, click.y);
        }

        for event in std::mem::take(&mut self.pending_joystick) {
            match event {
                JoystickEvent::ButtonPressed(button) => self.game.on_joybutton_press(button),
                JoystickEvent::ButtonReleased(button) => self.game.on_joybutton_release(button),
                JoystickEvent::HatMotion(x, y) => self.game.on_joyhat_motion(x, y),
            }
        }
    }

    fn rebuild_mesh(&mut self) {
        let (vertices, indices, draw_calls) = self.build_mesh();
        self.ensure_mesh_capacity(vertices.len(), indices.len());
        self.sprite_count = vertices.len() / 4;
        self.draw_calls = draw_calls;

        if !vertices.is_empty() {
            self.gpu
                .queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
        if !indices.is_empty() {
            self.gpu
                .queue
                .write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&indices));
        }
    }

    fn build_mesh(&self) -> (Vec<SpriteVertex>, Vec<u32>, Vec<DrawCall>) {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut draw_calls = Vec::with_capacity(8);

        for sprite in self.game.draw_order() {
            let Some(texture) = self.textures.get(&sprite.kind) else {
                continue;
            };
            let base_index = vertices.len() as u32;
            vertices.extend_from_slice(&SpriteVertex::rotated_quad(
                [sprite.center_x, sprite.center_y],
                [sprite.width, sprite.height],
                sprite.angle,
                texture.tint,
            ));
            let draw_start = indices.len() as u32;
            indices.extend_from_slice(&SpriteVertex::quad_indices(base_index));
            push_draw_call(&mut draw_calls, sprite.kind, draw_start, 6);
        }

        (vertices, indices, draw_calls)
    }

    fn ensure_mesh_capacity(&mut self, vertex_count: usize, index_count: usize) {
        let needed_vertices = vertex_count.max(1);
        if needed_vertices > self.mesh_vertex_capacity {
            self.mesh_vertex_capacity = needed_vertices.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.gpu.device, self.mesh_vertex_capacity);
        }

        let needed_indices = index_count.max(1);
        if needed_indices > self.mesh_index_capacity {
            self.mesh_index_capacity = needed_indices.next_power_of_two();
            self.index_buffer = create_index_buffer(&self.gpu.device, self.mesh_index_capacity);
        }
    }

    fn overlay_stats(&self) -> OverlayStats {
        let player = &self.game.player.sprite;
        OverlayStats {
            sprite_count: self.sprite_count as u32,
            draw_calls: self.draw_calls.len() as u32,
            bullets: self.game.bullets.len() as u32,
            chests_remaining: self.game.chests.len() as u32,
            view_left: self.game.viewport.left,
            view_bottom: self.game.viewport.bottom,
            player_position: (player.center_x, player.center_y),
            player_angle: player.angle,
            joystick: self.gamepad.name.clone(),
            audio_enabled: self.audio.is_enabled(),
        }
    }

    /// Run the simulation for this redraw. Returns false when the game asked to quit.
    fn simulate(&mut self) -> bool {
        self.time.begin_frame();

        if self.config_watcher.should_reload() {
            self.restart("file watcher");
        }

        self.pending_joystick.extend(self.gamepad.poll());
        self.input.stick = self.gamepad.axes();

        while self.time.should_step() {
            // Edge-triggered input belongs to the first step of the frame only.
            if self.time.steps_this_frame == 1 {
                if self.input.is_just_pressed(Key::Escape) {
                    return false;
                }
                if self.input.is_just_pressed(Key::F3) {
                    self.overlay.toggle();
                }
                if self.input.is_just_pressed(Key::R) {
                    self.restart("manual trigger (R)");
                }
                self.dispatch_input_events();
            }

            let events = self.game.update(self.input.stick);
            if events.chests_collected > 0 {
                log::debug!(
                    "Collected {} chest(s), score {}",
                    events.chests_collected,
                    self.game.score
                );
            }
            if events.movement.blocked() {
                log::trace!("Player blocked: {:?}", events.movement);
            }
            if events.sound == Some(Sound::ChestCollected) {
                self.audio.play_chest();
            }
            if events.viewport_changed {
                self.follow_viewport();
            }
        }

        if self.time.steps_this_frame > 0 {
            self.rebuild_mesh();
        }
        true
    }

    fn render(&mut self) {
        self.gpu.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.build_uniform()]),
        );

        let Some(frame) = self.gpu.begin_frame() else {
            return;
        };

        let hud = HudText {
            score: self.game.score_text(),
        };
        let stats = self.overlay_stats();
        let (egui_primitives, egui_textures_delta) =
            self.overlay
                .prepare(&self.window, &self.time, &hud, &stats);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.size.0, self.gpu.size.1],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut last_bound: Option<SpriteKind> = None;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            render_pass.set_pipeline(&self.sprite_pipeline.render_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            for draw in &self.draw_calls {
                let Some(texture) = self.textures.get(&draw.kind) else {
                    continue;
                };
                if last_bound != Some(draw.kind) {
                    render_pass.set_bind_group(1, &texture.bind_group, &[]);
                    last_bound = Some(draw.kind);
                }
                render_pass.draw_indexed(
                    draw.index_start..(draw.index_start + draw.index_count),
                    0,
                    0..1,
                );
            }
        }

        self.overlay.upload(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &egui_primitives,
            &egui_textures_delta,
            &screen_descriptor,
        );

        {
            let mut egui_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();

            self.overlay
                .paint(&mut egui_pass, &egui_primitives, &screen_descriptor);
        }

        self.overlay.cleanup(&egui_textures_delta);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}

struct App {
    config_path: PathBuf,
    state: Option<EngineState>,
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            state: None,
            fatal: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<EngineState> {
        let config = config::load_or_default(&self.config_path);
        let platform = PlatformConfig {
            title: config.screen.title.clone(),
            width: config.screen.width,
            height: config.screen.height,
        };
        let window = ak_platform::window::create_window(event_loop, &platform)
            .context("Failed to create window")?;
        EngineState::new(window, self.config_path.clone(), config)
            .map_err(anyhow::Error::msg)
            .context("Failed to initialise renderer")
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(err) => {
                log::error!("{err:#}");
                self.fatal = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        let egui_consumed = state.overlay.handle_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    state.camera.viewport = (w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.input.mouse_position = (position.x, position.y);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } if !egui_consumed => {
                if let Some(button) = map_mouse_button(button) {
                    match button_state {
                        ElementState::Pressed => state.input.mouse_down(button),
                        ElementState::Released => state.input.mouse_up(button),
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }

                if !state.simulate() {
                    log::info!("Escape pressed, exiting.");
                    event_loop.exit();
                    return;
                }
                state.render();

                // Only clear edge-triggered input after a fixed step consumed it.
                if state.time.steps_this_frame > 0 {
                    state.input.end_frame();
                }
            }

            _ => {}
        }
    }
}

fn load_sprite_textures(
    gpu: &GpuContext,
    pipeline: &SpritePipeline,
    config: &GameConfig,
) -> HashMap<SpriteKind, GpuSpriteTexture> {
    let sprites = &config.sprites;
    [
        (SpriteKind::Wall, &sprites.wall),
        (SpriteKind::Player, &sprites.player),
        (SpriteKind::Chest, &sprites.chest),
        (SpriteKind::Bullet, &sprites.bullet),
    ]
    .into_iter()
    .map(|(kind, def)| (kind, load_sprite_texture(gpu, pipeline, def)))
    .collect()
}

/// Load the sprite's image, or fall back to a flat 1x1 texture in its fill colour.
fn load_sprite_texture(
    gpu: &GpuContext,
    pipeline: &SpritePipeline,
    def: &SpriteDef,
) -> GpuSpriteTexture {
    let loaded = std::fs::read(&def.asset)
        .map_err(|e| format!("Failed to read texture '{}': {e}", def.asset))
        .and_then(|bytes| Texture::from_bytes(&gpu.device, &gpu.queue, &bytes, &def.asset));

    let (texture, tint) = match loaded {
        Ok(texture) => (texture, [1.0, 1.0, 1.0, 1.0]),
        Err(err) => {
            log::warn!("{err}. Drawing a flat colour instead.");
            let texture = Texture::from_rgba8(
                &gpu.device,
                &gpu.queue,
                &[255, 255, 255, 255],
                1,
                1,
                &def.asset,
            );
            (texture, def.color)
        }
    };
    let bind_group = pipeline.create_texture_bind_group(&gpu.device, &texture);
    GpuSpriteTexture { bind_group, tint }
}

/// Clear colours are linear while the configured colour is sRGB.
fn background_clear_color(rgb: [u8; 3]) -> wgpu::Color {
    let to_linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    wgpu::Color {
        r: to_linear(rgb[0]),
        g: to_linear(rgb[1]),
        b: to_linear(rgb[2]),
        a: 1.0,
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertex_capacity: usize) -> wgpu::Buffer {
    let byte_len = (vertex_capacity * std::mem::size_of::<SpriteVertex>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Vertex Buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, index_capacity: usize) -> wgpu::Buffer {
    let byte_len = (index_capacity * std::mem::size_of::<u32>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Index Buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Append a draw call, merging with the previous one when the sprite kind
/// matches and indices are contiguous. Sprites are emitted grouped by kind, so
/// a frame is normally four draw calls.
fn push_draw_call(
    draw_calls: &mut Vec<DrawCall>,
    kind: SpriteKind,
    index_start: u32,
    index_count: u32,
) {
    if let Some(last) = draw_calls.last_mut() {
        if last.kind == kind && last.index_start + last.index_count == index_start {
            last.index_count += index_count;
            return;
        }
    }
    draw_calls.push(DrawCall {
        kind,
        index_start,
        index_count,
    });
}

/// Replay key transitions in the order they arrived.
fn forward_key_events(game: &mut GameState, events: &[KeyEvent]) {
    for event in events {
        match event.transition {
            KeyTransition::Pressed => game.on_key_press(event.key),
            KeyTransition::Released => game.on_key_release(event.key),
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::F3 => Some(Key::F3),
        KeyCode::KeyR => Some(Key::R),
        _ => None,
    }
}

fn map_mouse_button(button: MouseButton) -> Option<MouseBtn> {
    match button {
        MouseButton::Left => Some(MouseBtn::Left),
        MouseButton::Right => Some(MouseBtn::Right),
        MouseButton::Middle => Some(MouseBtn::Middle),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("The Adventurous Knight starting...");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(PathBuf::from(CONFIG_PATH));
    event_loop.run_app(&mut app).context("Event loop error")?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_calls_merge_contiguous_runs_of_one_kind() {
        let mut calls = Vec::new();
        push_draw_call(&mut calls, SpriteKind::Wall, 0, 6);
        push_draw_call(&mut calls, SpriteKind::Wall, 6, 6);
        push_draw_call(&mut calls, SpriteKind::Player, 12, 6);
        push_draw_call(&mut calls, SpriteKind::Chest, 18, 6);
        push_draw_call(&mut calls, SpriteKind::Chest, 24, 6);

        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].index_count, 12);
        assert_eq!(calls[2].index_start, 18);
        assert_eq!(calls[2].index_count, 12);
    }

    #[test]
    fn british_racing_green_converts_to_linear() {
        let color = background_clear_color([0, 66, 37]);
        assert_eq!(color.r, 0.0);
        assert!((color.g - 0.0545).abs() < 1e-3);
        assert!((color.b - 0.0185).abs() < 1e-3);
    }

    #[test]
    fn key_released_and_pressed_again_before_a_step_keeps_thrust() {
        let mut game = GameState::new(GameConfig {
            chest_seed: Some(3),
            ..GameConfig::default()
        });
        let mut input = InputState::new();

        input.key_down(Key::Up);
        forward_key_events(&mut game, input.key_events());
        input.end_frame();
        assert_eq!(game.player.speed, game.config().movement_speed);

        // Both edges land between two fixed steps.
        input.key_up(Key::Up);
        input.key_down(Key::Up);
        forward_key_events(&mut game, input.key_events());

        assert_eq!(game.player.speed, game.config().movement_speed);
    }

    #[test]
    fn key_pressed_and_released_before_a_step_ends_released() {
        let mut game = GameState::new(GameConfig {
            chest_seed: Some(3),
            ..GameConfig::default()
        });
        let mut input = InputState::new();

        input.key_down(Key::Left);
        input.key_up(Key::Left);
        forward_key_events(&mut game, input.key_events());

        assert_eq!(game.player.sprite.change_angle, 0.0);
    }

    #[test]
    fn only_game_keys_are_mapped() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(map_key(KeyCode::KeyR), Some(Key::R));
        assert_eq!(map_key(KeyCode::KeyQ), None);
        assert_eq!(map_mouse_button(MouseButton::Back), None);
    }
}
