//! # blueswitch-dashboard
//!
//! Browser dashboard built with leptos (client-side rendering).
//!
//! Opens the push channel, renders one button per device of each snapshot,
//! and posts a connect/disconnect request when a button is clicked.
//! Requests are fire-and-forget; the next snapshot shows their effect.

use leptos::prelude::*;

pub mod api;
mod components;
pub mod config;
pub mod logging;
pub mod push;

use blueswitch_app::services::toggle_service::ToggleService;

use api::HttpToggleSender;
use components::DeviceList;
use config::DashboardConfig;
use push::PushConnection;

/// Push channel URL for the current page, if the page has a location.
fn push_url(config: &DashboardConfig) -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;
    Some(config.socket_url(&protocol, &host))
}

/// Root application component.
#[component]
pub fn App(
    /// Configuration read from the host page.
    config: DashboardConfig,
) -> impl IntoView {
    let (buttons, connection) = match push_url(&config) {
        Some(url) => push::use_device_buttons(&url),
        None => {
            tracing::error!("page has no location, push channel not opened");
            (signal(Vec::new()).0, PushConnection::inert())
        }
    };
    // Dropped (closing the socket) when the app is unmounted.
    let _connection = StoredValue::new_local(connection);

    let service = ToggleService::new(HttpToggleSender::new(config.api_base));

    view! { <DeviceList buttons service/> }
}
