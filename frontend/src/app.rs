use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::notification_host::NotificationHost;
use crate::data_definitions::notifications::use_notifications_provider;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_notifications_provider();
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
        NotificationHost {}
    }
}
