//! Window event registration.

use std::cell::RefCell;
use std::rc::Rc;

use navsync_core::Trigger;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::DomSynchronizer;

type Handler = Closure<dyn FnMut(Event)>;

/// Registered `load` and `resize` handlers. Dropping without
/// [`unregister`](Listeners::unregister) leaves dangling JS references.
pub(crate) struct Listeners {
    load: Handler,
    resize: Handler,
}

impl Listeners {
    pub(crate) fn register(
        window: &Window,
        state: &Rc<RefCell<DomSynchronizer>>,
    ) -> Result<Self, JsValue> {
        let load = handler(state, Trigger::Load);
        let resize = handler(state, Trigger::Resize);

        window.add_event_listener_with_callback("load", load.as_ref().unchecked_ref())?;
        if let Err(e) =
            window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        {
            if window
                .remove_event_listener_with_callback("load", load.as_ref().unchecked_ref())
                .is_err()
            {
                load.forget();
            }
            return Err(e);
        }
        Ok(Self { load, resize })
    }

    pub(crate) fn unregister(self, window: &Window) -> Result<(), JsValue> {
        let load =
            window.remove_event_listener_with_callback("load", self.load.as_ref().unchecked_ref());
        let resize = window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        if load.is_err() || resize.is_err() {
            // A handler may still be registered; its closure must outlive it.
            self.load.forget();
            self.resize.forget();
        }
        load.and(resize)
    }
}

/// One synchronous sync per event, no coalescing.
fn handler(state: &Rc<RefCell<DomSynchronizer>>, trigger: Trigger) -> Handler {
    let state = Rc::clone(state);
    Closure::wrap(Box::new(move |_event: Event| {
        run_logged(&state, trigger);
    }) as Box<dyn FnMut(Event)>)
}

/// Run one sync. Failures are logged and absorbed; the next event retries.
pub(crate) fn run_logged(state: &RefCell<DomSynchronizer>, trigger: Trigger) {
    let Ok(mut sync) = state.try_borrow_mut() else {
        log::warn!("navsync: {} fired during a sync, skipped", trigger);
        return;
    };
    if let Err(e) = sync.run(trigger) {
        log::warn!("navsync: {} sync failed: {}", trigger, e);
    }
}
