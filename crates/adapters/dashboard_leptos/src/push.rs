//! Push channel client — a `WebSocket` delivering device snapshots.
//!
//! Each text frame is a complete device list. Frames go through a
//! [`ViewUpdater`] and the resulting buttons replace the signal's value.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use blueswitch_app::services::view_updater::{DeviceButton, ViewUpdater};

/// Guard that closes the `WebSocket` on drop (if connected).
pub struct PushConnection {
    socket: Option<WebSocket>,
    _on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _on_close: Option<Closure<dyn FnMut(CloseEvent)>>,
}

impl PushConnection {
    pub(crate) fn inert() -> Self {
        Self {
            socket: None,
            _on_message: None,
            _on_close: None,
        }
    }
}

impl Drop for PushConnection {
    fn drop(&mut self) {
        if let Some(socket) = &self.socket {
            socket.set_onmessage(None);
            socket.set_onclose(None);
            if let Err(err) = socket.close() {
                tracing::debug!(error = ?err, "failed to close push channel");
            }
        }
    }
}

/// Subscribe to device snapshots pushed on `url`.
///
/// Returns a read signal holding the buttons of the latest snapshot, plus a
/// guard that keeps the connection alive. Drop the guard to disconnect.
///
/// If the socket cannot be created the signal stays empty and the guard is
/// inert. A closed socket is not reopened.
pub fn use_device_buttons(url: &str) -> (ReadSignal<Vec<DeviceButton>>, PushConnection) {
    let (buttons, set_buttons) = signal(Vec::<DeviceButton>::new());

    let socket = match WebSocket::new(url) {
        Ok(s) => s,
        Err(err) => {
            tracing::error!(url, error = ?err, "failed to open push channel");
            return (buttons, PushConnection::inert());
        }
    };
    tracing::info!(url, "push channel opened");

    let mut updater = ViewUpdater::new();
    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |msg: MessageEvent| {
        let Some(text) = msg.data().as_string() else {
            tracing::debug!("ignoring non-text push frame");
            return;
        };
        match updater.receive(&text) {
            Ok(latest) => set_buttons.set(latest.to_vec()),
            Err(err) => tracing::warn!(%err, "ignoring malformed device snapshot"),
        }
    });

    let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
        tracing::warn!(
            code = event.code(),
            reason = %event.reason(),
            "push channel closed"
        );
    });

    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    let conn = PushConnection {
        socket: Some(socket),
        _on_message: Some(on_message),
        _on_close: Some(on_close),
    };

    (buttons, conn)
}
