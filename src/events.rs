use crate::core::constants::SPARKLES_PER_SEC;
use crate::core::scene::Scene;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse-move wiring on the hover region. Keeps the closure alive so the
/// listener can be detached on teardown instead of being forgotten.
pub struct PointerListener {
    target: web::Element,
    closure: Closure<dyn FnMut(web::MouseEvent)>,
}

pub fn wire_pointer(region: web::Element, scene: Rc<RefCell<Scene>>) -> PointerListener {
    // Canvas is full-viewport, so client coordinates are canvas
    // coordinates.
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        scene
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        region.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
    {
        log::error!("failed to attach mousemove listener: {e:?}");
    }
    PointerListener {
        target: region,
        closure,
    }
}

impl PointerListener {
    pub fn detach(&self) {
        _ = self
            .target
            .remove_event_listener_with_callback("mousemove", self.closure.as_ref().unchecked_ref());
    }
}

type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Fixed-rate sparkle trigger (10 ticks/s), cleared while the page is
/// hidden and restarted on visibility regain. In-flight flares keep
/// stepping in the frame loop; only new triggers pause.
pub struct SparkleTimer {
    interval_id: Rc<Cell<Option<i32>>>,
    tick: SharedClosure,
    visibility: Option<Closure<dyn FnMut()>>,
}

pub fn wire_sparkle_timer(document: &web::Document, scene: Rc<RefCell<Scene>>) -> SparkleTimer {
    let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: SharedClosure = Rc::new(RefCell::new(None));
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        scene.borrow_mut().spawn_sparkle();
    }) as Box<dyn FnMut()>));

    start_interval(&interval_id, &tick);

    let id_for_visibility = interval_id.clone();
    let tick_for_visibility = tick.clone();
    let visibility = Closure::wrap(Box::new(move || {
        let hidden = dom::window_document().map(|d| d.hidden()).unwrap_or(false);
        if hidden {
            stop_interval(&id_for_visibility);
        } else {
            start_interval(&id_for_visibility, &tick_for_visibility);
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) = document
        .add_event_listener_with_callback("visibilitychange", visibility.as_ref().unchecked_ref())
    {
        log::error!("failed to attach visibilitychange listener: {e:?}");
    }

    SparkleTimer {
        interval_id,
        tick,
        visibility: Some(visibility),
    }
}

fn start_interval(id: &Rc<Cell<Option<i32>>>, tick: &SharedClosure) {
    if id.get().is_some() {
        return;
    }
    let Some(window) = web::window() else { return };
    let tick_ref = tick.borrow();
    let Some(cb) = tick_ref.as_ref() else { return };
    let period_ms = (1000.0 / SPARKLES_PER_SEC) as i32;
    match window
        .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), period_ms)
    {
        Ok(handle) => id.set(Some(handle)),
        Err(e) => log::error!("failed to start sparkle timer: {e:?}"),
    }
}

fn stop_interval(id: &Rc<Cell<Option<i32>>>) {
    if let Some(handle) = id.take() {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle);
        }
    }
}

impl SparkleTimer {
    /// Clear the interval, detach the visibility listener and drop both
    /// closures.
    pub fn shutdown(&mut self, document: &web::Document) {
        stop_interval(&self.interval_id);
        if let Some(cb) = self.visibility.take() {
            _ = document.remove_event_listener_with_callback(
                "visibilitychange",
                cb.as_ref().unchecked_ref(),
            );
        }
        self.tick.borrow_mut().take();
    }
}
