use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdAdd};

use crate::routes::Route;

/// Landing view for one table; entry point to the indicator filter.
#[component]
pub fn TableDetailPage(table_id: String) -> Element {
    rsx! {
        Title { "Table {table_id}" }
        div {
            id: "x-table-detail-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                padding: 28px 36px;
                background: #F5F6F8;
                min-height: 100%;
            ",
            h1 {
                style: "font-size: 34px; font-weight: 500; margin: 0; color: #0F172A;",
                "Table {table_id}"
            }
            p {
                style: "font-size: 18px; color: #374151; margin: 0; max-width: 640px;",
                "Find indicators by name, code, source, region or any other metadata and add them to this table."
            }
            Link {
                to: Route::add_indicators_page(table_id.clone()),
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    width: fit-content;
                    padding: 10px 20px;
                    border-radius: 9999px;
                    background-color: #4F46E5;
                    color: white;
                    text-decoration: none;
                    font-size: 16px;
                ",
                Icon { icon: MdAdd, style: "width: 20px; height: 20px;" }
                "Add indicators"
            }
        }
    }
}
