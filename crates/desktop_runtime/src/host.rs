//! Host-side runtime helpers for executing reducer effects and querying browser viewport state.
//!
//! Effect execution and environment queries live behind this typed boundary so the reducer stays
//! pure and the service bundle can be swapped for fakes in tests.

use std::rc::Rc;

use desktop_app_contract::{panel_primary_input_dom_id, AppServices, PanelId};
use platform_host::{AudioPort, FileBrowserService};
use wasm_bindgen::JsCast;

use crate::model::WindowRect;
use crate::reducer::RuntimeEffect;

/// Height reserved for the taskbar when maximizing.
pub const TASKBAR_ALLOWANCE_PX: i32 = 60;
/// Margin kept around a maximized window.
pub const MAXIMIZE_MARGIN_PX: i32 = 20;

#[derive(Clone)]
/// Host service bundle injected at application start.
pub struct DesktopHostContext {
    audio: Rc<dyn AudioPort>,
    files: Rc<dyn FileBrowserService>,
}

impl DesktopHostContext {
    /// Creates a host context around the injected platform services.
    pub fn new(audio: Rc<dyn AudioPort>, files: Rc<dyn FileBrowserService>) -> Self {
        Self { audio, files }
    }

    /// Capability bundle handed to mounted panels.
    pub fn app_services(&self) -> AppServices {
        AppServices {
            audio: self.audio.clone(),
            files: self.files.clone(),
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(sound) => self.audio.play(sound),
            RuntimeEffect::FocusPanelInput(panel) => focus_panel_input(panel),
        }
    }

    /// Full browser viewport; drag/resize clamping happens against this rect.
    pub fn viewport_rect(&self) -> WindowRect {
        let (w, h) = browser_inner_size();
        WindowRect { x: 0, y: 0, w, h }
    }

    /// Viewport available to a maximized window: fixed margins plus the taskbar allowance.
    pub fn maximize_viewport_rect(&self) -> WindowRect {
        let (w, h) = browser_inner_size();
        WindowRect {
            x: MAXIMIZE_MARGIN_PX,
            y: MAXIMIZE_MARGIN_PX,
            w: w - MAXIMIZE_MARGIN_PX * 2,
            h: h - TASKBAR_ALLOWANCE_PX - MAXIMIZE_MARGIN_PX * 2,
        }
    }
}

fn browser_inner_size() -> (i32, i32) {
    let Some(window) = web_sys::window() else {
        return (1280, 720);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0) as i32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0) as i32;
    (width, height)
}

fn focus_panel_input(panel: PanelId) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(&panel_primary_input_dom_id(panel)) {
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    }
}
