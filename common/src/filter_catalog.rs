//! Searchable field catalog derived from the metadata set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::metadata_set::MetadataSet;

pub const TEXT_FIELDS: [&str; 3] = ["name", "description", "code"];
pub const BOOLEAN_FIELDS: [&str; 3] = ["seasonally_adjusted", "is_custom", "currentPrices"];

pub const PLACEHOLDER_LABEL: &str = "Loading…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Text,
    Boolean,
    Category,
}

impl FieldKind {
    /// Kind of one of the fixed fields, or `None` for anything else.
    pub fn of_fixed_field(field: &str) -> Option<Self> {
        if TEXT_FIELDS.contains(&field) {
            Some(Self::Text)
        } else if BOOLEAN_FIELDS.contains(&field) {
            Some(Self::Boolean)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct FilterItem {
    pub id: String,
    pub label: String,
}

impl FilterItem {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { id: value.clone(), label: value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct FilterGroup {
    pub group: String,
    pub kind: FieldKind,
    pub items: Vec<FilterItem>,
}

impl FilterGroup {
    pub fn fixed(group: &str, kind: FieldKind) -> Self {
        Self { group: group.to_string(), kind, items: vec![] }
    }

    /// Category group with distinct values, first occurrence wins.
    pub fn category<S: ToString>(group: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        let mut seen = BTreeSet::new();
        let items = values
            .into_iter()
            .map(|v| v.to_string())
            .filter(|v| seen.insert(v.clone()))
            .map(FilterItem::new)
            .collect();
        Self { group: group.into(), kind: FieldKind::Category, items }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCatalog {
    groups: Vec<FilterGroup>,
    loaded: bool,
}

impl FilterCatalog {
    /// Full catalog: fixed text and boolean fields, then one group per
    /// non-empty metadata category.
    pub fn from_metadata_set(metadata: &MetadataSet) -> Self {
        let mut groups = fixed_text_groups();
        groups.extend(BOOLEAN_FIELDS.iter().map(|f| FilterGroup::fixed(f, FieldKind::Boolean)));
        for (name, values) in metadata.categories() {
            let Some(values) = values else { continue };
            if values.is_empty() {
                continue;
            }
            groups.push(FilterGroup::category(name, values.iter()));
        }
        Self { groups, loaded: true }
    }

    /// Catalog for searching within an existing result set. Only the text
    /// fields and the caller's groups are offered, never the metadata universe.
    pub fn narrowed(caller_groups: impl IntoIterator<Item = FilterGroup>) -> Self {
        let mut groups = fixed_text_groups();
        for group in caller_groups {
            if groups.iter().any(|g| g.group == group.group) {
                continue;
            }
            groups.push(group);
        }
        Self { groups, loaded: true }
    }

    /// Stand-in while the metadata set is loading, so the field selector
    /// always has a value.
    pub fn placeholder() -> Self {
        Self {
            groups: vec![FilterGroup { group: String::new(), kind: FieldKind::Text, items: vec![] }],
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FilterGroup> {
        if !self.loaded {
            return None;
        }
        self.groups.iter().find(|g| g.group == field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn first_field(&self) -> &str {
        self.groups.first().map(|g| g.group.as_str()).unwrap_or("")
    }

    /// Text shown in the field selector for a group key.
    pub fn display_name(&self, field: &str) -> String {
        if !self.loaded {
            return PLACEHOLDER_LABEL.to_string();
        }
        field.to_string()
    }
}

fn fixed_text_groups() -> Vec<FilterGroup> {
    TEXT_FIELDS.iter().map(|f| FilterGroup::fixed(f, FieldKind::Text)).collect()
}
