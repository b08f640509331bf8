#![cfg(target_arch = "wasm32")]
use hotspot_core::{AnnotationEngine, Scene, Viewport, ViewerConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod markers;
mod render;
mod style;

use constants::CANVAS_SELECTOR;

fn wire_resize(canvas: &web::HtmlCanvasElement, viewport: &Rc<RefCell<Viewport>>) {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    let viewport = viewport.clone();
    dom::add_window_listener("resize", move || {
        if let Some(vp) = dom::window_viewport() {
            *viewport.borrow_mut() = vp;
        }
        dom::sync_canvas_backing_size(&canvas);
    });
}

/// Resolve on the next macrotask so the first frames render before the
/// model exists.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
        }
    });
    _ = JsFuture::from(promise).await;
}

fn spawn_model_load(scene: Rc<RefCell<Scene>>, config: &ViewerConfig) {
    let model = config.model.clone();
    spawn_local(async move {
        next_tick().await;
        let started = Instant::now();
        let node = Scene::load_model(&model);
        scene.borrow_mut().attach_model(node);
        log::info!(
            "[scene] model ready in {:.1} ms",
            started.elapsed().as_secs_f64() * 1000.0
        );
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hotspot-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::query_canvas(&document, CANVAS_SELECTOR)?;

    let config = ViewerConfig::default();
    config.validate()?;

    let viewport = dom::window_viewport().unwrap_or(Viewport::new(
        canvas.client_width() as f32,
        canvas.client_height() as f32,
    ));
    let viewport = Rc::new(RefCell::new(viewport));
    wire_resize(&canvas, &viewport);

    let scene = Rc::new(RefCell::new(Scene::from_config(&config)));
    let camera = {
        let vp = viewport.borrow();
        config.build_camera(vp.width, vp.height)
    };
    let orbit = Rc::new(RefCell::new(config.build_orbit()));
    let anchors = config.anchor_points();
    let markers = markers::MarkerElements::bind(&document, &anchors);
    log::info!(
        "[hotspot] {} anchors, {} marker elements bound",
        anchors.len(),
        markers.bound()
    );

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        drag: Rc::new(RefCell::new(events::DragState::default())),
    });

    spawn_model_load(scene.clone(), &config);

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        scene,
        camera,
        orbit,
        engine: AnnotationEngine::new(config.annotations),
        anchors,
        markers,
        viewport,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
