//! Animated dot-grid hero background.
//!
//! Renders a full-viewport grid of dots on a canvas layered behind the
//! page hero: dots grow and pulse near the cursor, fade out toward the
//! hero header's center, and random dots flare with a glow for ambient
//! motion. Pure frame logic lives in [`core`]; this file owns setup, DOM
//! wiring and teardown.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
use {
    crate::core::constants::MOBILE_BREAKPOINT_PX, crate::core::grid::DotGrid,
    crate::core::scene::Scene, anyhow::anyhow, std::cell::RefCell, std::rc::Rc,
    wasm_bindgen::prelude::*, web_sys as web,
};

/// Live effect session. Owns every scheduled callback and timer: the frame
/// loop, the mousemove listener, and the sparkle interval with its
/// visibility gate.
#[cfg(target_arch = "wasm32")]
pub struct Session {
    frame_loop: frame::FrameLoop,
    pointer: Option<events::PointerListener>,
    sparkle: events::SparkleTimer,
    scene: Rc<RefCell<Scene>>,
    document: web::Document,
}

#[cfg(target_arch = "wasm32")]
impl Session {
    /// Cancel the pending animation frame, clear the sparkle interval,
    /// detach all listeners and drop every in-flight hover animation.
    pub fn destroy(mut self) {
        self.frame_loop.cancel();
        if let Some(pointer) = &self.pointer {
            pointer.detach();
        }
        self.sparkle.shutdown(&self.document);
        self.scene.borrow_mut().hover.clear();
        log::info!("dots effect destroyed");
    }
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    match mount() {
        Ok(Some(session)) => SESSION.with(|slot| *slot.borrow_mut() = Some(session)),
        Ok(None) => {}
        Err(e) => log::error!("dots setup error: {e:?}"),
    }
    Ok(())
}

/// Tear the effect down. Exposed so the host page can remove the layer;
/// a no-op when the effect never mounted.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn destroy() {
    if let Some(session) = SESSION.with(|slot| slot.borrow_mut().take()) {
        session.destroy();
    }
}

#[cfg(target_arch = "wasm32")]
fn mount() -> anyhow::Result<Option<Session>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    let (width, height) = dom::viewport_size(&window);
    if width <= MOBILE_BREAKPOINT_PX {
        log::info!("viewport {width}px at or below breakpoint, dots effect disabled");
        return Ok(None);
    }

    let container = document
        .query_selector(constants::CONTAINER_SELECTOR)
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("{} not found", constants::CONTAINER_SELECTOR))?;

    let canvas = dom::create_canvas(&document, &container, width, height)?;
    let ctx = dom::context_2d(&canvas)?;

    let palette = render::Palette {
        active: dom::css_custom_property(
            &window,
            &document,
            constants::ACTIVE_COLOR_PROP,
            constants::FALLBACK_ACTIVE_COLOR,
        ),
        inactive: dom::css_custom_property(
            &window,
            &document,
            constants::INACTIVE_COLOR_PROP,
            constants::FALLBACK_INACTIVE_COLOR,
        ),
    };

    // Header bounds are captured once here and never refreshed; see
    // DESIGN.md.
    let header = document
        .query_selector(constants::HEADER_SELECTOR)
        .ok()
        .flatten()
        .map(|el| dom::element_bounds(&el));
    if header.is_none() {
        log::info!(
            "{} not found, header fade disabled",
            constants::HEADER_SELECTOR
        );
    }

    let grid = DotGrid::new(width, height);
    let scene = Rc::new(RefCell::new(Scene::new(
        grid,
        header,
        js_sys::Date::now() as u64,
    )));

    let pointer = match document
        .query_selector(constants::HOVER_REGION_SELECTOR)
        .ok()
        .flatten()
    {
        Some(region) => Some(events::wire_pointer(region, scene.clone())),
        None => {
            log::info!(
                "{} not found, pointer activation disabled",
                constants::HOVER_REGION_SELECTOR
            );
            None
        }
    };

    let sparkle = events::wire_sparkle_timer(&document, scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        canvas,
        ctx,
        palette,
        last_instant: instant::Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    {
        let scene = scene.borrow();
        log::info!(
            "dots effect mounted: {}x{} grid",
            scene.grid.cols(),
            scene.grid.rows()
        );
    }

    Ok(Some(Session {
        frame_loop,
        pointer,
        sparkle,
        scene,
        document,
    }))
}
