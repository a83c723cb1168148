mod app;
mod config;
mod constants;
mod driver;
mod input;
mod render;
mod spider;
mod ui;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use config::SpiderConfig;
use driver::AnimationDriver;
use render::RenderContext;

/// A spider that walks across a dot grid following the pointer.
#[derive(Parser, Debug)]
#[command(name = "spider-web", version)]
struct Args {
    /// JSON file with initial settings. Missing fields use defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Serve puffin profiling data on the default puffin_http port.
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref());

    let _profiler = if args.profile { start_profiler() } else { None };

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Startup never fails on a bad config file; the problem is logged instead.
fn load_config(path: Option<&Path>) -> SpiderConfig {
    let Some(path) = path else {
        tracing::info!("using default configuration");
        return SpiderConfig::default();
    };
    match SpiderConfig::load(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            config
        }
        Err(err) => {
            tracing::warn!("{err:#}; using default configuration");
            SpiderConfig::default()
        }
    }
}

fn start_profiler() -> Option<puffin_http::Server> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            tracing::info!(%addr, "puffin server listening");
            Some(server)
        }
        Err(err) => {
            tracing::warn!(%err, "failed to start puffin server");
            None
        }
    }
}

struct App {
    state: Option<AppState>,
    /// Configuration used until the window exists
    initial_config: SpiderConfig,
    error: Option<anyhow::Error>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Rendering
    render: RenderContext,

    // Simulation
    driver: AnimationDriver,
    config: SpiderConfig,

    // UI state
    settings: ui::SettingsPanel,
    styled_dark: bool,

    // Input state
    input: input::InputState,

    // Timing
    start_time: Instant,
}

impl App {
    fn new(config: SpiderConfig) -> Self {
        Self {
            state: None,
            initial_config: config,
            error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = self.initial_config;
        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = match app::create_window(event_loop, config.is_dark_mode) {
            Ok(ctx) => ctx,
            Err(err) => {
                tracing::error!("{err:#}");
                self.error = Some(err);
                event_loop.exit();
                return;
            }
        };

        let mut driver = AnimationDriver::new();
        let size = window.inner_size().to_logical::<f32>(window.scale_factor());
        driver.resize(Vec2::new(size.width, size.height));

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            render: RenderContext::new(),
            driver,
            config,
            settings: ui::SettingsPanel::new(),
            styled_dark: config.is_dark_mode,
            input: input::InputState::new(),
            start_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.window, &state.gl_surface, &state.gl_context);
                let logical = size.to_logical::<f32>(state.window.scale_factor());
                state.driver.resize(Vec2::new(logical.width, logical.height));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                state.input.keys_pressed.insert(key);
                            }
                            ElementState::Released => {
                                state.input.keys_pressed.remove(&key);
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if !egui_consumed.consumed {
                    let pointer = input::to_logical(position, state.window.scale_factor());
                    state.driver.set_pointer(pointer);
                }
            }
            WindowEvent::Touch(touch) => {
                if !egui_consumed.consumed {
                    let location = input::to_logical(touch.location, state.window.scale_factor());
                    if let Some(pointer) = state.input.handle_touch(touch.id, touch.phase, location) {
                        state.driver.set_pointer(pointer);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        // Handle input
        let actions = input::process_keyboard(&mut self.input);
        if actions.toggle_fullscreen {
            app::toggle_fullscreen(&self.window);
        }
        if actions.toggle_settings {
            self.settings.toggle();
        }
        input::apply_toggles(&actions, &mut self.config);

        // Advance the simulation
        let now = self.start_time.elapsed().as_secs_f64();
        self.driver.frame(now, &self.config);

        // Scene and UI
        let gl = &self.gl;
        let driver = &self.driver;
        let render = &mut self.render;
        let config = &mut self.config;
        let settings = &mut self.settings;
        self.egui_glow.run(&self.window, |ctx| {
            {
                let scene = driver.scene(config);
                render.render_frame(gl, ctx, scene.as_ref(), config);
            }
            if ui::draw_settings(ctx, settings, config) {
                tracing::debug!(?config, "settings changed");
            }
        });

        if self.config.is_dark_mode != self.styled_dark {
            self.styled_dark = self.config.is_dark_mode;
            self.egui_glow
                .egui_ctx
                .set_style(ui::style::themed_style(self.styled_dark));
        }

        self.egui_glow.paint(&self.window);

        if let Err(err) = self.gl_surface.swap_buffers(&self.gl_context) {
            tracing::warn!(%err, "failed to swap buffers");
        }
    }
}
