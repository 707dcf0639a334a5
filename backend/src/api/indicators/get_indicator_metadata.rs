use common::metadata_set::{IndicatorMetadataResponse, MetadataSet};

use crate::{api::indicators::METADATA_PATH, rest_utils::rest_client::IndicatorApiClient};

/// Fetch the distinct metadata values used to build the filter catalog.
pub async fn get_indicator_metadata(client: &IndicatorApiClient) -> anyhow::Result<MetadataSet> {
    let response = client.get_json::<IndicatorMetadataResponse>(METADATA_PATH).await?;
    Ok(response.metadataset)
}
