//! Value control for one clause: free text, true/false or a closed choice.

use common::{
    filter_catalog::FilterCatalog,
    value_input::{ValueInput, resolve_value_input},
};
use dioxus::prelude::*;

#[component]
pub fn ValueInputField(
    field: ReadSignal<String>,
    value: ReadSignal<String>,
    catalog: ReadSignal<FilterCatalog>,
    error: ReadSignal<Option<String>>,
    on_value: Callback<String>,
) -> Element {
    let input = use_memo(move || resolve_value_input(&field.read(), &catalog.read()));
    let border_color = use_memo(move || if error.read().is_some() { "#B91C1C" } else { "rgba(0,0,0,0.4)" });

    let control = match input() {
        ValueInput::Nothing => return rsx! {},
        ValueInput::FreeText => rsx! {
            input {
                r#type: "text",
                placeholder: "Value",
                style: "{CONTROL_STYLE} border: 1px solid {border_color()};",
                value: "{value}",
                oninput: move |e: Event<FormData>| on_value.call(e.value()),
            }
        },
        closed => rsx! {
            select {
                style: "{CONTROL_STYLE} border: 1px solid {border_color()};",
                value: "{value}",
                onchange: move |e: Event<FormData>| on_value.call(e.value()),
                option { value: "", disabled: true, selected: value.read().is_empty(), "Select a value" }
                for item in closed.options() {
                    option {
                        key: "{item.id}",
                        value: "{item.id}",
                        selected: *value.read() == item.id,
                        "{item.label}"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px; min-width: 220px;",
            {control}
            {error.read().clone().map(|message| rsx! {
                span { style: "color: #B91C1C; font-size: 13px;", "{message}" }
            })}
        }
    }
}

pub(crate) const CONTROL_STYLE: &str = "
    height: 36px;
    padding: 4px 10px;
    border-radius: 6px;
    font-size: 15px;
    background: white;
";
