//! Device buttons — one per device of the latest snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use blueswitch_app::services::toggle_service::ToggleService;
use blueswitch_app::services::view_updater::DeviceButton;

use crate::api::HttpToggleSender;

/// Renders the buttons of the latest snapshot.
///
/// The list is rebuilt from scratch whenever the signal changes, so no
/// element of an earlier snapshot outlives a newer one.
#[component]
pub fn DeviceList(
    /// Buttons of the latest snapshot, in device order.
    buttons: ReadSignal<Vec<DeviceButton>>,
    /// Service issuing the toggle requests.
    service: ToggleService<HttpToggleSender>,
) -> impl IntoView {
    move || {
        buttons
            .get()
            .into_iter()
            .map(|button| {
                let service = service.clone();
                view! { <DeviceToggle button service/> }
            })
            .collect_view()
    }
}

/// A single device button. The class mirrors the connection state.
#[component]
fn DeviceToggle(
    /// The device to display.
    button: DeviceButton,
    /// Service issuing the toggle request on click.
    service: ToggleService<HttpToggleSender>,
) -> impl IntoView {
    let class = button.class.clone();
    let label = button.label.clone();

    let on_click = move |_| {
        let service = service.clone();
        let button = button.clone();
        spawn_local(async move {
            service.activate(&button).await;
        });
    };

    view! {
        <button class=class on:click=on_click>
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueswitch_app::services::view_updater::ViewUpdater;

    fn buttons(message: &str) -> Vec<DeviceButton> {
        ViewUpdater::new().receive(message).unwrap().to_vec()
    }

    fn render(buttons: ReadSignal<Vec<DeviceButton>>) -> String {
        let service = ToggleService::new(HttpToggleSender::new(""));
        view! { <DeviceList buttons service/> }.to_html()
    }

    #[test]
    fn should_render_one_button_per_device_with_state_class() {
        Owner::new().with(|| {
            let (list, _) = signal(buttons(
                r#"[{"name":"Kitchen","address":"AA:BB","state":"connected"},
                    {"name":"Desk","address":"CC:DD","state":"disconnected"}]"#,
            ));

            let html = render(list);

            assert_eq!(html.matches("<button").count(), 2);
            assert!(html.contains(r#"class="connected""#));
            assert!(html.contains(r#"class="disconnected""#));
            let kitchen = html.find("Kitchen").unwrap();
            let desk = html.find("Desk").unwrap();
            assert!(kitchen < desk);
        });
    }

    #[test]
    fn should_render_only_latest_snapshot() {
        Owner::new().with(|| {
            let (list, set_list) = signal(buttons(
                r#"[{"name":"Kitchen","address":"AA:BB","state":"connected"}]"#,
            ));
            assert!(render(list).contains("Kitchen"));

            set_list.set(buttons(
                r#"[{"name":"Speaker","address":"EE:FF","state":"connecting"}]"#,
            ));
            let html = render(list);

            assert_eq!(html.matches("<button").count(), 1);
            assert!(html.contains("Speaker"));
            assert!(html.contains(r#"class="connecting""#));
            assert!(!html.contains("Kitchen"));
        });
    }

    #[test]
    fn should_render_nothing_for_empty_snapshot() {
        Owner::new().with(|| {
            let (list, _) = signal(buttons("[]"));
            assert_eq!(render(list).matches("<button").count(), 0);
        });
    }
}
