use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter_catalog::FilterGroup;

/// Id as the search endpoint sends it: an integer, a float such as `7.0`, or
/// a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIndicatorId {
    Int(u64),
    Float(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSearchResultItem {
    pub id: RawIndicatorId,
    pub name: String,
    pub code: String,
}

/// Search response keyed by frequency label, before id normalization.
pub type RawSearchResultSet = BTreeMap<String, Vec<RawSearchResultItem>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct SearchResultItem {
    pub id: u64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("search result {name:?} in {frequency:?} has a non-numeric id {id:?}")]
pub struct ResultNormalizationError {
    pub frequency: String,
    pub name: String,
    pub id: String,
}

impl RawIndicatorId {
    /// Any non-negative whole number, whatever form it arrived in.
    pub fn to_numeric(&self) -> Option<u64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) => whole_number(*f),
            Self::String(s) => {
                let s = s.trim();
                s.parse().ok().or_else(|| s.parse::<f64>().ok().and_then(whole_number))
            }
        }
    }
}

impl Display for RawIndicatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

fn whole_number(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchResultSet {
    pub groups: BTreeMap<String, Vec<SearchResultItem>>,
}

impl SearchResultSet {
    /// Coerce every id to a number. One bad id fails the whole set, so a
    /// caller never ends up holding a partially converted result.
    pub fn from_raw(raw: RawSearchResultSet) -> Result<Self, ResultNormalizationError> {
        let mut groups = BTreeMap::new();
        for (frequency, items) in raw {
            let mut normalized = Vec::with_capacity(items.len());
            for item in items {
                let Some(id) = item.id.to_numeric() else {
                    return Err(ResultNormalizationError {
                        frequency,
                        name: item.name,
                        id: item.id.to_string(),
                    });
                };
                normalized.push(SearchResultItem { id, name: item.name, code: item.code });
            }
            groups.insert(frequency, normalized);
        }
        Ok(Self { groups })
    }

    /// True for `{}` and for a set whose frequencies are all empty.
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(|items| items.is_empty())
    }

    pub fn total_items(&self) -> usize {
        self.groups.values().map(|items| items.len()).sum()
    }

    pub fn frequencies(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|k| k.as_str())
    }

    pub fn items(&self, frequency: &str) -> &[SearchResultItem] {
        self.groups.get(frequency).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn item(&self, frequency: &str, index: usize) -> Option<&SearchResultItem> {
        self.groups.get(frequency).and_then(|items| items.get(index))
    }

    /// Keep only items whose id also appears in `other`. Frequencies left
    /// without items are kept so the "no matches" state is per group.
    pub fn intersect(&self, other: &SearchResultSet) -> SearchResultSet {
        let keep = other.groups.values().flatten().map(|item| item.id).collect::<BTreeSet<_>>();
        let groups = self
            .groups
            .iter()
            .map(|(frequency, items)| {
                let items = items.iter().filter(|item| keep.contains(&item.id)).cloned().collect();
                (frequency.clone(), items)
            })
            .collect();
        SearchResultSet { groups }
    }

    /// Frequency labels as a category field, for searching within this set.
    pub fn frequency_group(&self) -> FilterGroup {
        FilterGroup::category("frequency", self.frequencies())
    }
}

/// Body of the add-to-table call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddIndicatorsRequest {
    #[serde(rename = "tableId")]
    pub table_id: String,
    pub indicators: Vec<u64>,
}
