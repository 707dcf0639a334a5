use common::search_result::AddIndicatorsRequest;

use crate::{api::indicators::ADD_TO_TABLE_PATH, rest_utils::rest_client::IndicatorApiClient};

/// Add indicators to a table. The call either succeeds for all ids or fails.
pub async fn add_indicators_to_table(client: &IndicatorApiClient, request: AddIndicatorsRequest) -> anyhow::Result<()> {
    if request.indicators.is_empty() {
        anyhow::bail!("No indicators selected");
    }
    tracing::info!("adding {} indicator(s) to table {}", request.indicators.len(), request.table_id);
    client.post_json_discard(ADD_TO_TABLE_PATH, &request).await
}
