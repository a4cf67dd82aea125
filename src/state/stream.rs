//! Equipment SSE Stream
//!
//! Server-sent-events subscription that nudges the equipment list to
//! refetch when listings change. The browser handles reconnection for
//! `EventSource`, so unlike a WebSocket there is no backoff logic here.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::api;

/// Handle to an open equipment stream. Closed explicitly on component
/// cleanup, and on drop as a backstop.
pub struct EquipmentStream {
    source: Option<EventSource>,
}

impl EquipmentStream {
    pub fn close(&self) {
        if let Some(source) = &self.source {
            source.close();
        }
    }
}

impl Drop for EquipmentStream {
    fn drop(&mut self) {
        self.close();
    }
}

/// Subscribe to `GET /api/equipment/stream`. Every event invokes the
/// callback; the equipment page responds by refetching its current view.
pub fn subscribe_equipment_stream(on_event: impl Fn() + 'static) -> EquipmentStream {
    let source = match EventSource::new(&api::equipment_stream_url()) {
        Ok(source) => source,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Equipment stream unavailable: {:?}", e).into(),
            );
            return EquipmentStream { source: None };
        }
    };

    let on_message = Closure::wrap(Box::new(move |_: MessageEvent| {
        on_event();
    }) as Box<dyn FnMut(MessageEvent)>);
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    // EventSource reconnects on its own; just log the interruption.
    let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
        web_sys::console::warn_1(&"Equipment stream interrupted, retrying".into());
    }) as Box<dyn FnMut(web_sys::Event)>);
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    EquipmentStream {
        source: Some(source),
    }
}
