use common::filter_catalog::FilterGroup;

/// Which fields the filter form offers.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogMode {
    /// Everything the metadata set exposes.
    Full,
    /// Search within an existing result set, over the given groups only.
    Narrow(Vec<FilterGroup>),
}
