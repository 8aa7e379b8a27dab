use leptos::prelude::*;

use blueswitch_dashboard::config::DashboardConfig;
use blueswitch_dashboard::{App, logging};

fn main() {
    let config = DashboardConfig::load();
    logging::init(&config.log_filter);

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
