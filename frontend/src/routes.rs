use common::filter_expression::FilterExpression;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::add_indicators_page::AddIndicatorsPage;
use crate::pages::home_page::HomePage;
use crate::pages::table_page::TableDetailPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/tables/:table_id")]
    TableDetailPage { table_id: String },


    #[route("/tables/:table_id/add_indicators/:expression")]
    AddIndicatorsPage {
        table_id: String,
        expression: UrlParam<Option<FilterExpression>>,
    },

}

impl Route {
    pub fn add_indicators_page(table_id: String) -> Self {
        Self::AddIndicatorsPage {
            table_id,
            expression: UrlParam::from(None),
        }
    }
}
