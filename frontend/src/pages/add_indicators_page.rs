use common::filter_expression::FilterExpression;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowBack};

use crate::{
    components::{filter_components::advanced_filter_form::AdvancedFilterForm, suspend_boundary::SuspendWrapper},
    data_definitions::{catalog_mode::CatalogMode, url_param::UrlParam},
    routes::Route,
};

/// Advanced filter over all indicators, adding the picked ones to a table.
#[component]
pub fn AddIndicatorsPage(table_id: String, expression: UrlParam<Option<FilterExpression>>) -> Element {
    // keep the last submitted expression in the url, so reloading restores the form
    let table_id_for_route = table_id.clone();
    let on_submitted = Callback::new(move |submitted: FilterExpression| {
        navigator().replace(Route::AddIndicatorsPage {
            table_id: table_id_for_route.clone(),
            expression: Some(submitted).into(),
        });
    });

    rsx! {
        Title { "Add indicators to table {table_id}" }
        div {
            id: "x-add-indicators-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 28px 36px;
                background: #F5F6F8;
                min-height: 100%;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                Link {
                    to: Route::TableDetailPage { table_id: table_id.clone() },
                    style: "display: flex; color: #4F46E5;",
                    Icon { icon: MdArrowBack, style: "width: 24px; height: 24px;" }
                }
                h1 {
                    style: "font-size: 30px; font-weight: 500; margin: 0; color: #0F172A;",
                    "Add indicators to table {table_id}"
                }
            }
            p {
                style: "font-size: 16px; color: #374151; margin: 0; max-width: 760px;",
                "Conditions are applied in order: each one is combined with everything before it. Results are grouped by frequency; pick indicators from one frequency at a time."
            }
            SuspendWrapper {
                AdvancedFilterForm {
                    table_id: table_id.clone(),
                    mode: CatalogMode::Full,
                    initial_expression: expression.0.clone(),
                    on_submitted,
                }
            }
        }
    }
}
