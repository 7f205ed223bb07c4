use crate::core::scene::Scene;
use crate::render::{self, Palette};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the single composited render pass: base grid first,
/// sparkle overlay on top, in one deterministic order.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub palette: Palette,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        scene.advance(dt);

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        render::clear(&self.ctx, width, height);

        for index in 0..scene.grid.len() {
            let dot = scene.eval_dot(index);
            render::draw_dot(&self.ctx, &dot, &self.palette);
        }
        // Cleanup after drawing: entries not re-marked this frame are gone
        // before the next one starts.
        scene.sweep();

        for (position, scale) in scene.sparkles() {
            render::draw_sparkle(&self.ctx, position, scale);
        }
    }
}

/// Handle to the self-rescheduling requestAnimationFrame loop. Terminal
/// state is reached only through `cancel`.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let raf_for_tick = raf_id.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(window) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => raf_for_tick.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => raf_id.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
            }
        }
    }

    FrameLoop { raf_id, tick }
}

impl FrameLoop {
    /// Cancel the pending animation frame and drop the tick closure so the
    /// loop can never fire again.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}
