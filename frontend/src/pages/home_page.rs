use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_editor_icons::MdTableChart;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    let mut table_id = use_signal(String::new);
    let mut open_table = move || {
        let id = table_id.read().trim().to_string();
        if id.is_empty() {
            return;
        }
        table_id.set(String::new());
        navigator().push(Route::TableDetailPage { table_id: id });
    };

    rsx! {
        Title { "Indicators - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 46px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Economic indicators"
            }
            div {
                style: "
                    color: #111827;
                    font-size: 22px;
                    line-height: 1.6;
                    max-width: 620px;
                ",
                "Open a table to search indicators with the advanced filter and add them to it."
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 520px;
                    padding: 12px 16px;
                    border-radius: 9999px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    background-color: white;
                ",
                Icon { icon: MdTableChart, style: "width: 22px; height: 22px; color: #4F46E5;" }
                input {
                    r#type: "text",
                    placeholder: "Table id",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        font-size: 20px;
                    ",
                    value: "{table_id}",
                    oninput: move |event: Event<FormData>| table_id.set(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            open_table();
                        }
                    },
                }
                button {
                    style: "
                        border: none;
                        border-radius: 9999px;
                        background-color: #4F46E5;
                        color: white;
                        padding: 8px 18px;
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    onclick: move |_| open_table(),
                    "Open"
                }
            }
        }
    }
}
