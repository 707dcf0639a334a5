//! Metadata-set payload returned by the indicator metadata endpoint.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One distinct value of a metadata category, as the API sends it.
///
/// Base years come back as numbers, everything else as strings, so the value
/// is kept untagged and only stringified when a filter item is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetadataSet {
    pub category: Option<Vec<MetadataValue>>,
    pub base_year: Option<Vec<MetadataValue>>,
    pub region: Option<Vec<MetadataValue>>,
    pub country: Option<Vec<MetadataValue>>,
    pub source: Option<Vec<MetadataValue>>,
    pub frequency: Option<Vec<MetadataValue>>,
    pub unit: Option<Vec<MetadataValue>>,
}

impl MetadataSet {
    /// Categories in the order they are offered as filter fields.
    pub fn categories(&self) -> [(&'static str, Option<&Vec<MetadataValue>>); 7] {
        [
            ("category", self.category.as_ref()),
            ("base_year", self.base_year.as_ref()),
            ("region", self.region.as_ref()),
            ("country", self.country.as_ref()),
            ("source", self.source.as_ref()),
            ("frequency", self.frequency.as_ref()),
            ("unit", self.unit.as_ref()),
        ]
    }
}

/// Response of the metadata endpoint. The `indicators` list is part of the
/// payload but unused here, so it is left to serde to skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IndicatorMetadataResponse {
    #[serde(default)]
    pub metadataset: MetadataSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_mixed_value_types() {
        let raw = serde_json::json!({
            "indicators": [{"id": 1, "name": "CPI"}],
            "metadataset": {
                "base_year": [2010, 2015],
                "source": ["Eurostat", "OECD"],
                "unit": null
            }
        });
        let parsed: IndicatorMetadataResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(
            parsed.metadataset.base_year,
            Some(vec![MetadataValue::Int(2010), MetadataValue::Int(2015)])
        );
        assert_eq!(parsed.metadataset.unit, None);
        assert_eq!(parsed.metadataset.region, None);
    }

    #[test]
    fn values_stringify_without_quotes() {
        assert_eq!(MetadataValue::Int(2015).to_string(), "2015");
        assert_eq!(MetadataValue::Float(1.5).to_string(), "1.5");
        assert_eq!(MetadataValue::Bool(true).to_string(), "true");
        assert_eq!(MetadataValue::String("Monthly".into()).to_string(), "Monthly");
    }

    #[test]
    fn missing_metadataset_defaults_to_empty() {
        let parsed: IndicatorMetadataResponse = serde_json::from_str(r#"{"indicators": []}"#).unwrap();
        assert_eq!(parsed.metadataset, MetadataSet::default());
    }
}
