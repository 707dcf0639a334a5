use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::data_definitions::notifications::{NotificationLevel, Notifications};

/// Renders the notification list; each entry stays until dismissed.
#[component]
pub fn NotificationHost() -> Element {
    let mut notifications = use_context::<Notifications>();
    let items = notifications.items();

    rsx! {
        div {
            id: "x-notification-host",
            style: "
                position: fixed;
                right: 20px;
                bottom: 20px;
                display: flex;
                flex-direction: column;
                gap: 10px;
                z-index: 2000;
                max-width: 420px;
            ",
            for notification in items.read().iter().cloned() {
                div {
                    key: "{notification.id}",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: flex-start;
                        gap: 10px;
                        padding: 12px 14px;
                        border-radius: 8px;
                        background-color: white;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.15);
                        border-left: 6px solid {level_color(notification.level)};
                        font-size: 15px;
                        line-height: 1.4;
                    ",
                    div { style: "flex: 1 1 auto; white-space: pre-wrap;", "{notification.message}" }
                    button {
                        style: "border: none; background: none; cursor: pointer; padding: 0;",
                        title: "Dismiss",
                        onclick: move |_| notifications.dismiss(notification.id),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px; color: #374151;" }
                    }
                }
            }
        }
    }
}

fn level_color(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "#4F46E5",
        NotificationLevel::Error => "#B91C1C",
    }
}
