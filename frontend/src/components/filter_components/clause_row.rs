use common::{
    filter_catalog::FilterCatalog,
    filter_expression::{BooleanOperator, ClauseInput, ClauseRef, ValidationErrors},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDelete};

use crate::components::filter_components::value_input_field::{CONTROL_STYLE, ValueInputField};

/// One row of the expression: optional operator, field selector, value.
/// The base clause has no operator and cannot be removed.
#[component]
pub fn ClauseRow(
    clause: ClauseRef,
    operator: Option<BooleanOperator>,
    field: ReadSignal<String>,
    value: ReadSignal<String>,
    catalog: ReadSignal<FilterCatalog>,
    errors: ReadSignal<ValidationErrors>,
    on_operator: Callback<String>,
    on_field: Callback<String>,
    on_value: Callback<String>,
    on_remove: Option<Callback<()>>,
) -> Element {
    let operator_error = use_memo(move || errors.read().message_for(clause, ClauseInput::Operator).map(|m| m.to_string()));
    let field_error = use_memo(move || errors.read().message_for(clause, ClauseInput::Field).map(|m| m.to_string()));
    let value_error = use_memo(move || errors.read().message_for(clause, ClauseInput::Value).map(|m| m.to_string()));
    let field_options = use_memo(move || {
        let catalog = catalog.read();
        catalog.groups().iter().map(|g| (g.group.clone(), catalog.display_name(&g.group))).collect::<Vec<_>>()
    });

    rsx! {
        div {
            class: "x-clause-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 10px;
                padding: 6px 0;
            ",

            // OPERATOR
            div {
                style: "width: 90px; flex-shrink: 0; display: flex; flex-direction: column; gap: 2px;",
                {match operator {
                    Some(op) => rsx! {
                        select {
                            style: "{CONTROL_STYLE} border: 1px solid rgba(0,0,0,0.4); width: 90px;",
                            value: "{op}",
                            onchange: move |e: Event<FormData>| on_operator.call(e.value()),
                            for candidate in BooleanOperator::ALL {
                                option {
                                    key: "{candidate}",
                                    value: "{candidate}",
                                    selected: candidate == op,
                                    "{candidate}"
                                }
                            }
                        }
                    },
                    None => rsx! {
                        span { style: "font-size: 15px; line-height: 36px; color: #374151;", "Where" }
                    },
                }}
                {operator_error().map(|message| rsx! {
                    span { style: "color: #B91C1C; font-size: 13px;", "{message}" }
                })}
            }

            // FIELD
            div {
                style: "display: flex; flex-direction: column; gap: 2px; min-width: 200px;",
                select {
                    style: "{CONTROL_STYLE} border: 1px solid rgba(0,0,0,0.4);",
                    disabled: !catalog.read().is_loaded(),
                    value: "{field}",
                    onchange: move |e: Event<FormData>| on_field.call(e.value()),
                    for (key, label) in field_options() {
                        option {
                            key: "{key}",
                            value: "{key}",
                            selected: *field.read() == key,
                            "{label}"
                        }
                    }
                }
                {field_error().map(|message| rsx! {
                    span { style: "color: #B91C1C; font-size: 13px;", "{message}" }
                })}
            }

            // VALUE
            ValueInputField {
                field,
                value,
                catalog,
                error: value_error(),
                on_value,
            }

            // REMOVE
            {on_remove.map(|on_remove| rsx! {
                button {
                    style: "border: none; background: none; cursor: pointer; height: 36px;",
                    title: "Remove condition",
                    onclick: move |_| on_remove.call(()),
                    Icon { icon: MdDelete, style: "width: 22px; height: 22px; color: #6B7280;" }
                }
            })}
        }
    }
}
