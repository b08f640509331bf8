use std::sync::mpsc;
use std::thread;
use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use hotspot_core::{
    AnchorPoint, AnnotationEngine, Camera, OrbitControls, Scene, SceneNode, ViewerConfig,
};

mod gpu;
use gpu::GpuState;

// Pixels per wheel "line" when the platform reports line deltas
const WHEEL_LINE_PX: f32 = 100.0;

/// Everything the frame loop mutates, apart from the GPU.
struct Viewer {
    scene: Scene,
    camera: Camera,
    orbit: OrbitControls,
    engine: AnnotationEngine,
    anchors: Vec<AnchorPoint>,
    model_rx: mpsc::Receiver<SceneNode>,
    cursor: Option<(f32, f32)>,
    dragging: bool,
}

impl Viewer {
    fn new(config: &ViewerConfig, width: f32, height: f32) -> Self {
        let scene = Scene::from_config(config);
        let (tx, model_rx) = mpsc::channel();
        let model = config.model.clone();
        let spawned = thread::Builder::new()
            .name("model-loader".into())
            .spawn(move || {
                let started = Instant::now();
                let node = Scene::load_model(&model);
                log::info!("[scene] model ready in {:?}", started.elapsed());
                _ = tx.send(node);
            });
        if let Err(e) = spawned {
            log::error!("[scene] could not start model loader: {e}");
        }

        Self {
            scene,
            camera: config.build_camera(width, height),
            orbit: config.build_orbit(),
            engine: AnnotationEngine::new(config.annotations),
            anchors: config.anchor_points(),
            model_rx,
            cursor: None,
            dragging: false,
        }
    }

    fn handle_input(&mut self, event: &WindowEvent, viewport_height: f32) {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.dragging = *state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x as f32, position.y as f32);
                if let (true, Some((lx, ly))) = (self.dragging, self.cursor) {
                    self.orbit
                        .rotate_by_pixels(pos.0 - lx, pos.1 - ly, viewport_height);
                }
                self.cursor = Some(pos);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.dragging = false;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports "scroll up" as positive; the orbit expects DOM wheel sign
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
                };
                self.orbit.dolly(dy);
            }
            _ => {}
        }
    }

    fn frame(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        if let Ok(node) = self.model_rx.try_recv() {
            self.scene.attach_model(node);
        }
        self.orbit.update(&mut self.camera);

        let viewport = gpu.viewport();
        self.camera.set_aspect(viewport.width, viewport.height);
        let colliders = self.scene.colliders();
        self.engine
            .update(&self.camera, &mut self.anchors, &colliders, viewport);

        gpu.render(&self.camera, &self.scene, &self.anchors)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = ViewerConfig::default();
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Hotspot viewer (native)")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let viewport = gpu.viewport();
    let mut viewer = Viewer::new(&config, viewport.width, viewport.height);
    log::info!("[hotspot] {} anchors", viewer.anchors.len());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent { event, .. } => {
            viewer.handle_input(&event, gpu.viewport().height);
        }
        Event::AboutToWait => match viewer.frame(&mut gpu) {
            Ok(_) => gpu.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.resize(gpu.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("frame skipped: {e:?}"),
        },
        _ => {}
    })?;
    Ok(())
}
