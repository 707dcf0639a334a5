//! Indicator metadata, advanced search and add-to-table endpoints.

mod get_indicator_metadata;
pub use get_indicator_metadata::get_indicator_metadata;

mod search_indicators_advanced;
pub use search_indicators_advanced::search_indicators_advanced;

mod add_indicators_to_table;
pub use add_indicators_to_table::add_indicators_to_table;

pub const METADATA_PATH: &str = "indicators/";
pub const ADVANCED_SEARCH_PATH: &str = "indicators/advanced-search/";
pub const ADD_TO_TABLE_PATH: &str = "tables/add-indicators/";
