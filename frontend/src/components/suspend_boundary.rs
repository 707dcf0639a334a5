use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator { label: "Loading...".to_string() }
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(label: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "color:#374151; font-size: 16px; border: 1px solid #D1D5DB; padding: 8px 12px; border-radius: 5px; margin: 10px;",
            "{label}"
        }
    }
}
