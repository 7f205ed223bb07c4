use crate::constants::CANVAS_CLASS;
use crate::core::influence::HeaderBounds;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Create the full-viewport canvas layered behind the hero content and
/// attach it to the container. Backing size matches the viewport once, at
/// setup.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
    width: f32,
    height: f32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a canvas"))?;
    canvas.set_class_name(CANVAS_CLASS);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| anyhow!("context is not CanvasRenderingContext2d"))
}

/// Read a CSS custom property from the document root, falling back when
/// the page does not define it.
pub fn css_custom_property(
    window: &web::Window,
    document: &web::Document,
    name: &str,
    fallback: &str,
) -> String {
    let Some(root) = document.document_element() else {
        return fallback.to_string();
    };
    let style = match window.get_computed_style(&root) {
        Ok(Some(style)) => style,
        _ => return fallback.to_string(),
    };
    match style.get_property_value(name) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Bounding rect of an element in client coordinates, as core-space
/// header bounds.
pub fn element_bounds(element: &web::Element) -> HeaderBounds {
    let rect = element.get_bounding_client_rect();
    HeaderBounds {
        x: rect.left() as f32,
        y: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
