use anyhow::Context;
use common::{
    filter_expression::FilterExpression,
    search_result::{RawSearchResultSet, SearchResultSet},
};

use crate::{api::indicators::ADVANCED_SEARCH_PATH, rest_utils::rest_client::IndicatorApiClient};

/// Run a boolean filter expression. The expression is sent as-is; ids in the
/// response are normalized to numbers before the set is returned.
pub async fn search_indicators_advanced(client: &IndicatorApiClient, expression: FilterExpression) -> anyhow::Result<SearchResultSet> {
    let raw = client.post_json::<_, RawSearchResultSet>(ADVANCED_SEARCH_PATH, &expression).await?;
    let result = SearchResultSet::from_raw(raw).context("Advanced search returned an unusable result")?;
    tracing::info!(
        "advanced search: {} result(s) in {} frequency group(s)",
        result.total_items(),
        result.groups.len()
    );
    Ok(result)
}
