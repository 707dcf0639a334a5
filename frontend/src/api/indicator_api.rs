//! Client API calls for the indicator endpoints.

use common::{
    filter_expression::FilterExpression,
    metadata_set::MetadataSet,
    search_result::{AddIndicatorsRequest, SearchResultSet},
};
use dioxus::prelude::*;


#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None }
}

#[server]
pub async fn get_indicator_metadata() -> Result<MetadataSet, ServerFnError> {
    let client = backend::rest_utils::rest_client::get_api_client().map_err(server_error)?;
    let x = backend::api::indicators::get_indicator_metadata(&client).await;
    x.map_err(server_error)
}

#[server]
pub async fn search_indicators_advanced(expression: FilterExpression) -> Result<SearchResultSet, ServerFnError> {
    let client = backend::rest_utils::rest_client::get_api_client().map_err(server_error)?;
    let x = backend::api::indicators::search_indicators_advanced(&client, expression).await;
    x.map_err(server_error)
}

#[server]
pub async fn add_indicators_to_table(request: AddIndicatorsRequest) -> Result<(), ServerFnError> {
    let client = backend::rest_utils::rest_client::get_api_client().map_err(server_error)?;
    let x = backend::api::indicators::add_indicators_to_table(&client, request).await;
    x.map_err(server_error)
}
