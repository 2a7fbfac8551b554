use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::navigation::{NavError, Section, Viewport};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Current vertical scroll offset of the window, 0.0 when unavailable.
pub fn current_offset() -> f64 {
    window()
        .ok()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Keeps a window `scroll` listener registered for as long as it lives.
///
/// The listener is removed in `Drop`, so holding the guard in an effect
/// destructor releases it on every teardown path.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Registers `on_scroll`, which receives the window's vertical offset
    /// on every scroll event.
    pub fn attach<F>(on_scroll: F) -> Result<Self, DomError>
    where
        F: Fn(f64) + 'static,
    {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(move || on_scroll(current_offset()));
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
}

/// [`Viewport`] backed by the browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn reveal(&self, section: Section) -> Result<(), NavError> {
        let element = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(section.id()))
            .ok_or(NavError::TargetNotFound(section.id()))?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn scroll_to_top(&self) {
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// True when the document has an element with `id`.
pub fn element_exists(id: &str) -> Result<bool, DomError> {
    let document = window()?.document().ok_or(DomError::NoDocument)?;
    Ok(document.get_element_by_id(id).is_some())
}
