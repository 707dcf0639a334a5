//! Search results grouped by frequency, with checkboxes for adding them to a
//! table. Selections may only come from one frequency at a time.

use common::{
    search_result::{SearchResultItem, SearchResultSet},
    selection::{SelectionAction, SelectionState},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_editor_icons::MdTableChart, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::{
    api::indicator_api::add_indicators_to_table,
    components::filter_components::advanced_filter_form::{AdvancedFilterForm, PRIMARY_BUTTON_STYLE, SECONDARY_BUTTON_STYLE},
    data_definitions::{catalog_mode::CatalogMode, notifications::Notifications},
    routes::Route,
};


#[derive(Clone, Copy)]
struct SelectionContext {
    selection: ReadSignal<SelectionState>,
    apply: Callback<SelectionAction>,
}

#[component]
pub fn FrequencySelectionList(table_id: ReadSignal<String>, results: ReadSignal<SearchResultSet>, generation: ReadSignal<u64>) -> Element {
    let mut notifications = use_context::<Notifications>();

    // results currently shown; refining narrows this without touching `results`
    let mut shown = use_signal(|| results.peek().clone());
    let mut selection = use_signal(|| SelectionState::for_results(&results.peek()));
    let mut is_refining = use_signal(|| false);
    let mut is_submitting = use_signal(|| false);

    // every new search result starts from a clean selection, even if it is equal to the last one
    use_effect(move || {
        let _ = generation.read();
        let fresh = results.read().clone();
        selection.set(SelectionState::for_results(&fresh));
        shown.set(fresh);
        is_refining.set(false);
    });

    let apply = Callback::new(move |action: SelectionAction| {
        let outcome = selection.write().apply(action);
        if let Err(rejected) = outcome {
            dioxus::logger::tracing::info!("selection rejected: {:?}", rejected);
            notifications.push_error(rejected.to_string());
        }
    });
    use_context_provider(|| SelectionContext { selection: selection.into(), apply });

    let on_refined = Callback::new(move |refined: SearchResultSet| {
        let narrowed = shown.peek().intersect(&refined);
        selection.set(SelectionState::for_results(&narrowed));
        shown.set(narrowed);
        is_refining.set(false);
    });

    let submit = move |_| {
        if *is_submitting.peek() {
            return;
        }
        let table = table_id.peek().clone();
        let request = match selection.peek().build_add_request(&table, &shown.peek()) {
            Ok(request) => request,
            Err(e) => {
                notifications.push_error(e.to_string());
                return;
            }
        };
        is_submitting.set(true);
        spawn(async move {
            let count = request.indicators.len();
            let response = add_indicators_to_table(request).await;
            is_submitting.set(false);
            if let Err(e) = &response {
                dioxus::logger::tracing::error!("add to table failed: {:#?}", e);
            }
            let added = response.is_ok();
            let feedback = selection.write().finish_add(response, count);
            notifications.push_feedback(feedback);
            if added {
                navigator().push(Route::TableDetailPage { table_id: table });
            }
        });
    };

    let selected_count = use_memo(move || selection.read().selected_count());
    let is_narrowed = use_memo(move || *shown.read() != *results.read());
    let frequencies = use_memo(move || shown.read().frequencies().map(|f| f.to_string()).collect::<Vec<_>>());

    rsx! {
        div {
            id: "x-frequency-selection-list",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                margin-top: 16px;
            ",

            // CONTROLS
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                div {
                    style: "font-size: 15px; color: #374151; flex: 1 1 auto;",
                    "{shown.read().total_items()} result(s), {selected_count} selected"
                }
                if is_narrowed() {
                    button {
                        style: "{SECONDARY_BUTTON_STYLE}",
                        onclick: move |_| {
                            let fresh = results.peek().clone();
                            selection.set(SelectionState::for_results(&fresh));
                            shown.set(fresh);
                        },
                        "Show all results"
                    }
                }
                button {
                    style: "{SECONDARY_BUTTON_STYLE}",
                    disabled: shown.read().is_empty(),
                    onclick: move |_| {
                        let next = !*is_refining.peek();
                        is_refining.set(next);
                    },
                    Icon { icon: MdFilterList, style: "width: 18px; height: 18px;" }
                    "Refine within results"
                }
                button {
                    style: "{PRIMARY_BUTTON_STYLE}",
                    disabled: is_submitting() || selected_count() == 0,
                    onclick: submit,
                    Icon { icon: MdTableChart, style: "width: 18px; height: 18px;" }
                    if is_submitting() { "Adding..." } else { "Add to table" }
                }
            }

            if is_refining() {
                AdvancedFilterForm {
                    table_id,
                    mode: CatalogMode::Narrow(vec![shown.read().frequency_group()]),
                    on_results: on_refined,
                }
            }

            if shown.read().is_empty() {
                div {
                    style: "font-size: 18px; color: #6B7280; padding: 24px; text-align: center;",
                    "No indicators match this filter."
                }
            } else {
                for frequency in frequencies() {
                    FrequencyGroup {
                        key: "{frequency}",
                        frequency: frequency.clone(),
                        items: shown.read().items(&frequency).to_vec(),
                    }
                }
            }
        }
    }
}

#[component]
fn FrequencyGroup(frequency: ReadSignal<String>, items: ReadSignal<Vec<SearchResultItem>>) -> Element {
    let context = use_context::<SelectionContext>();
    let selection = context.selection;
    let apply = context.apply;

    let all_selected = use_memo(move || selection.read().is_all_selected(&frequency.read()));
    let available = use_memo(move || selection.read().is_frequency_available(&frequency.read()));
    let header_color = use_memo(move || if available() { "rgb(28, 33, 45)" } else { "rgba(28, 33, 45, 0.4)" });

    rsx! {
        section {
            style: "
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 10px;
                background-color: white;
                padding: 8px 12px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    cursor: pointer;
                    padding: 4px;
                    color: {header_color()};
                ",
                onclick: move |_| apply.call(SelectionAction::ToggleAll { frequency: frequency.read().clone() }),
                Checkbox { checked: all_selected() }
                div { style: "font-size: 18px; font-weight: 500;", "{frequency}" }
                div { style: "font-size: 15px; color: rgba(28, 33, 45, 0.7);", "({items.read().len()})" }
            }
            if items.read().is_empty() {
                div { style: "font-size: 15px; color: #6B7280; padding: 4px 40px;", "No matches" }
            }
            ul {
                for (index, item) in items.read().iter().cloned().enumerate() {
                    li {
                        key: "{item.id}-{index}",
                        class: "x-selection-row",
                        style: "
                            display: flex;
                            flex-direction: row;
                            align-items: center;
                            gap: 10px;
                            cursor: pointer;
                            padding: 4px 4px 4px 24px;
                        ",
                        onclick: move |_| apply.call(SelectionAction::Toggle { frequency: frequency.read().clone(), index }),
                        Checkbox { checked: selection.read().is_selected(&frequency.read(), index) }
                        div {
                            style: "font-size: 16px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                            "{item.name}"
                        }
                        div { style: "flex: 1 1 auto;" }
                        div {
                            style: "font-size: 14px; color: rgba(28, 33, 45, 0.7); flex-shrink: 0;",
                            "{item.code}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Checkbox(checked: bool) -> Element {
    rsx! {
        if checked {
            Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" }
        } else {
            Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" }
        }
    }
}
