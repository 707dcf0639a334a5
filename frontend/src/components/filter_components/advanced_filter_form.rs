//! Advanced indicator filter: builds a boolean expression over indicator
//! metadata and runs it against the advanced search endpoint.
//!
//! Without `on_results` the form shows its own selectable result list. With
//! `on_results` the raw result goes to the caller and nothing is rendered
//! below the form.

use common::{
    filter_catalog::FilterCatalog,
    filter_expression::{ClauseInput, ClauseRef, ExpressionError, FilterExpression, ValidationErrors, parse_operator_input},
    search_panel::SearchPanel,
    search_result::SearchResultSet,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_content_icons::MdAdd}};

use crate::{
    api::indicator_api::{get_indicator_metadata, search_indicators_advanced},
    components::{
        error_boundary::ComponentErrorDisplay,
        filter_components::{clause_row::ClauseRow, frequency_selection_list::FrequencySelectionList},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::{catalog_mode::CatalogMode, notifications::Notifications},
};


#[component]
pub fn AdvancedFilterForm(
    table_id: ReadSignal<String>,
    mode: ReadSignal<CatalogMode>,
    initial_expression: Option<FilterExpression>,
    on_results: Option<Callback<SearchResultSet>>,
    on_submitted: Option<Callback<FilterExpression>>,
) -> Element {
    let mut notifications = use_context::<Notifications>();

    // narrow mode never needs the metadata universe
    let metadata = use_resource(move || {
        let full = *mode.read() == CatalogMode::Full;
        async move {
            if full {
                get_indicator_metadata().await.map(Some)
            } else {
                Ok(None)
            }
        }
    });
    let catalog = use_memo(move || match (&*mode.read(), &*metadata.read()) {
        (CatalogMode::Narrow(groups), _) => FilterCatalog::narrowed(groups.clone()),
        (CatalogMode::Full, Some(Ok(Some(metadata_set)))) => FilterCatalog::from_metadata_set(metadata_set),
        _ => FilterCatalog::placeholder(),
    });
    let metadata_error = use_memo(move || match &*metadata.read() {
        Some(Err(e)) => Some(format!("{:#?}", e)),
        _ => None,
    });

    let mut expression = use_signal(move || initial_expression.unwrap_or_default());
    let mut validation = use_signal(ValidationErrors::default);
    let mut is_submitting = use_signal(|| false);
    let mut panel = use_signal(SearchPanel::default);

    // once the catalog arrives, an expression without a base field starts on its first field
    use_effect(move || {
        let catalog = catalog.read();
        if catalog.is_loaded() && expression.peek().base.field.is_empty() {
            expression.write().set_base_field(catalog.first_field());
        }
    });

    let can_submit = use_memo(move || catalog.read().is_loaded() && !is_submitting());

    let mut submit = move || {
        if !can_submit() {
            return;
        }
        let expr = expression.peek().clone();
        if let Err(errors) = expr.validate(&catalog.peek()) {
            dioxus::logger::tracing::info!("advanced filter: {}", errors);
            validation.set(errors);
            return;
        }
        validation.set(ValidationErrors::default());
        is_submitting.set(true);
        spawn(async move {
            let response = search_indicators_advanced(expr.clone()).await;
            is_submitting.set(false);
            match (response, on_results) {
                (Ok(result), Some(on_results)) => {
                    dioxus::logger::tracing::info!("advanced filter: {} result(s)", result.total_items());
                    if let Some(on_submitted) = on_submitted {
                        on_submitted.call(expr);
                    }
                    on_results.call(result);
                }
                (response, _) => {
                    match &response {
                        Ok(result) => dioxus::logger::tracing::info!("advanced filter: {} result(s)", result.total_items()),
                        Err(e) => dioxus::logger::tracing::error!("advanced filter: search failed: {:#?}", e),
                    }
                    let succeeded = response.is_ok();
                    if let Some(feedback) = panel.write().receive(response) {
                        notifications.push_feedback(feedback);
                    }
                    if succeeded {
                        if let Some(on_submitted) = on_submitted {
                            on_submitted.call(expr);
                        }
                    }
                }
            }
        });
    };

    let base_field = use_memo(move || expression.read().base.field.clone());
    let base_value = use_memo(move || expression.read().base.value.clone());
    let clause_count = use_memo(move || expression.read().additional_fields.len());

    rsx! {
        div {
            id: "x-advanced-filter-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                background-color: white;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 10px;
            ",

            if !catalog.read().is_loaded() {
                {match metadata_error() {
                    Some(error_txt) => rsx! {
                        ComponentErrorDisplay { title: "Could not load indicator metadata".to_string(), error_txt }
                    },
                    None => rsx! { LoadingIndicator { label: "Loading filter fields...".to_string() } },
                }}
            }

            ClauseRow {
                clause: ClauseRef::Base,
                operator: None,
                field: base_field(),
                value: base_value(),
                catalog: catalog(),
                errors: validation(),
                on_operator: move |_: String| {},
                on_field: move |field: String| {
                    expression.write().set_base_field(field);
                    validation.write().clear_field_change(ClauseRef::Base);
                },
                on_value: move |value: String| {
                    expression.write().set_base_value(value);
                    validation.write().clear_input(ClauseRef::Base, ClauseInput::Value);
                },
            }

            for index in 0..clause_count() {
                AdditionalClauseRow {
                    key: "{index}",
                    index,
                    expression,
                    catalog: catalog(),
                    validation,
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 12px; padding-top: 8px;",
                button {
                    style: "{SECONDARY_BUTTON_STYLE}",
                    disabled: !catalog.read().is_loaded(),
                    onclick: move |_| {
                        let catalog = catalog.peek();
                        expression.write().add_clause(&catalog);
                    },
                    Icon { icon: MdAdd, style: "width: 18px; height: 18px;" }
                    "Add condition"
                }
                button {
                    style: "{PRIMARY_BUTTON_STYLE}",
                    disabled: !can_submit(),
                    onclick: move |_| submit(),
                    Icon { icon: MdSearch, style: "width: 18px; height: 18px;" }
                    if is_submitting() { "Searching..." } else { "Search" }
                }
            }
        }

        if on_results.is_none() {
            {panel.read().results().cloned().map(|result_set| rsx! {
                FrequencySelectionList {
                    table_id,
                    results: result_set,
                    generation: panel.read().generation(),
                }
            })}
        }
    }
}

/// Row for additional clause `index`, editing the shared expression signal.
#[component]
fn AdditionalClauseRow(
    index: usize,
    mut expression: Signal<FilterExpression>,
    catalog: ReadSignal<FilterCatalog>,
    mut validation: Signal<ValidationErrors>,
) -> Element {
    let clause = use_memo(move || expression.read().additional_fields.get(index).cloned().unwrap_or_default());
    let report = move |result: Result<(), ExpressionError>| {
        if let Err(e) = result {
            dioxus::logger::tracing::error!("advanced filter: {}", e);
        }
    };

    rsx! {
        ClauseRow {
            clause: ClauseRef::Additional(index),
            operator: Some(clause.read().boolean),
            field: clause.read().field.clone(),
            value: clause.read().value.clone(),
            catalog,
            errors: validation(),
            on_operator: move |raw: String| {
                match parse_operator_input(index, &raw) {
                    Ok(op) => {
                        report(expression.write().set_clause_operator(index, op));
                        validation.write().clear_input(ClauseRef::Additional(index), ClauseInput::Operator);
                    }
                    Err(errors) => validation.write().issues.extend(errors.issues),
                }
            },
            on_field: move |field: String| {
                report(expression.write().set_clause_field(index, field));
                validation.write().clear_field_change(ClauseRef::Additional(index));
            },
            on_value: move |value: String| {
                report(expression.write().set_clause_value(index, value));
                validation.write().clear_input(ClauseRef::Additional(index), ClauseInput::Value);
            },
            on_remove: Callback::new(move |_: ()| {
                report(expression.write().remove_clause(index).map(|_| ()));
                // indices shift after removal
                validation.set(ValidationErrors::default());
            }),
        }
    }
}

pub(crate) const PRIMARY_BUTTON_STYLE: &str = "
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 8px 18px;
    border: none;
    border-radius: 9999px;
    background-color: #4F46E5;
    color: white;
    font-size: 15px;
    cursor: pointer;
";

pub(crate) const SECONDARY_BUTTON_STYLE: &str = "
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 8px 18px;
    border: 1px solid #4F46E5;
    border-radius: 9999px;
    background-color: white;
    color: #4F46E5;
    font-size: 15px;
    cursor: pointer;
";
