//! WebAssembly bindings that keep navbar CSS custom properties in sync.
//!
//! ## Example
//!
//! ```js
//! import init, { NavbarSync, install } from 'navsync';
//!
//! await init();
//!
//! // Page-lifetime listeners with default options
//! install();
//!
//! // Or manage the listeners explicitly
//! const sync = new NavbarSync({ elementId: 'topbar' });
//! sync.attach();
//! sync.syncNow();
//! console.log(sync.lastWidth, sync.lastHeight);
//! sync.detach();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use navsync_core::{SyncOptions, Synchronizer, Trigger};
use wasm_bindgen::prelude::*;
use web_sys::Window;

mod dom;
mod listeners;
mod types;

pub use dom::{DomGeometry, RootStyle};
pub use types::SyncOptionsJs;

use listeners::Listeners;

type DomSynchronizer = Synchronizer<DomGeometry, RootStyle>;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log_level());

    #[cfg(feature = "auto-install")]
    auto_install();
}

/// Per-sync `debug!` output is only wanted in debug builds.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(feature = "auto-install")]
fn auto_install() {
    if let Err(e) = install() {
        log::warn!("navsync: install failed: {:?}", JsValue::from(e));
    }
}

/// Keeps the navbar custom properties in sync with its rendered size.
#[wasm_bindgen]
pub struct NavbarSync {
    window: Window,
    state: Rc<RefCell<DomSynchronizer>>,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl NavbarSync {
    /// Create a synchronizer. `options` may be omitted for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<NavbarSync, JsError> {
        let opts = if options.is_undefined() || options.is_null() {
            SyncOptions::default()
        } else {
            let js: SyncOptionsJs = serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsError::new(&format!("Invalid sync options: {}", e)))?;
            js.into_core()
        };
        Self::with_options(opts)
    }

    /// Create a synchronizer from a JSON options string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<NavbarSync, JsError> {
        let js: SyncOptionsJs = serde_json::from_str(json)
            .map_err(|e| JsError::new(&format!("Invalid JSON: {}", e)))?;
        Self::with_options(js.into_core())
    }

    /// Register `load` and `resize` listeners on the window.
    ///
    /// If the page has already finished loading, `load` will not fire again,
    /// so the load-time sync runs immediately instead. Attaching twice is a
    /// no-op.
    pub fn attach(&mut self) -> Result<(), JsError> {
        if self.listeners.is_some() {
            return Ok(());
        }
        let listeners = Listeners::register(&self.window, &self.state)
            .map_err(|e| JsError::new(&format!("Failed to add listener: {:?}", e)))?;
        self.listeners = Some(listeners);

        if self.page_loaded() {
            listeners::run_logged(&self.state, Trigger::Load);
        }
        Ok(())
    }

    /// Remove the listeners. Published properties are left in place.
    pub fn detach(&mut self) -> Result<(), JsError> {
        match self.listeners.take() {
            Some(listeners) => listeners
                .unregister(&self.window)
                .map_err(|e| JsError::new(&format!("Failed to remove listener: {:?}", e))),
            None => Ok(()),
        }
    }

    /// Whether listeners are currently registered.
    #[wasm_bindgen(getter = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.listeners.is_some()
    }

    /// Synchronize now. Returns false when the target element is absent.
    #[wasm_bindgen(js_name = syncNow)]
    pub fn sync_now(&self) -> Result<bool, JsError> {
        let mut state = self
            .state
            .try_borrow_mut()
            .map_err(|_| JsError::new("Synchronization already in progress"))?;
        let outcome = state
            .run(Trigger::Manual)
            .map_err(|e| JsError::new(&format!("Sync error: {}", e)))?;
        Ok(outcome.is_updated())
    }

    /// Width last published, if any.
    #[wasm_bindgen(getter = lastWidth)]
    pub fn last_width(&self) -> Option<i32> {
        self.state.borrow().last().map(|m| m.width)
    }

    /// Height last published, if any.
    #[wasm_bindgen(getter = lastHeight)]
    pub fn last_height(&self) -> Option<i32> {
        self.state.borrow().last().map(|m| m.height)
    }

    /// Last published measurement as `{ width, height }`, or `null`.
    #[wasm_bindgen(js_name = lastMeasurement)]
    pub fn last_measurement(&self) -> Result<JsValue, JsError> {
        match self.state.borrow().last() {
            Some(m) => serde_wasm_bindgen::to_value(&m)
                .map_err(|e| JsError::new(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }

    /// Id of the measured element.
    #[wasm_bindgen(getter = elementId)]
    pub fn element_id(&self) -> String {
        self.state.borrow().options().element_id.clone()
    }
}

impl NavbarSync {
    fn page_loaded(&self) -> bool {
        self.window
            .document()
            .map(|doc| doc.ready_state() == "complete")
            .unwrap_or(false)
    }

    /// Create a synchronizer bound to the global window and document.
    pub fn with_options(options: SyncOptions) -> Result<NavbarSync, JsError> {
        options
            .validate()
            .map_err(|e| JsError::new(&format!("Invalid sync options: {}", e)))?;

        let window = web_sys::window().ok_or_else(|| JsError::new("No global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("Window has no document"))?;

        let state = DomSynchronizer::new(
            DomGeometry::new(document.clone()),
            RootStyle::new(document),
            options,
        );
        Ok(NavbarSync {
            window,
            state: Rc::new(RefCell::new(state)),
            listeners: None,
        })
    }
}

impl Drop for NavbarSync {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            let _ = listeners.unregister(&self.window);
        }
    }
}

/// Attach default listeners for the lifetime of the page.
#[wasm_bindgen]
pub fn install() -> Result<(), JsError> {
    let mut sync = NavbarSync::with_options(SyncOptions::default())?;
    sync.attach()?;
    // Leaked on purpose: the listeners live as long as the page.
    std::mem::forget(sync);
    Ok(())
}

/// Get the crate version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
