//! Picks the value control for a filter field.

use crate::filter_catalog::{FieldKind, FilterCatalog, FilterItem};

pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["true", "false"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueInput {
    FreeText,
    TrueFalse,
    Choice(Vec<FilterItem>),
    Nothing,
}

impl ValueInput {
    /// Options a closed control offers, in display order.
    pub fn options(&self) -> Vec<FilterItem> {
        match self {
            Self::TrueFalse => TRUE_FALSE_OPTIONS.iter().map(|v| FilterItem::new(*v)).collect(),
            Self::Choice(items) => items.clone(),
            Self::FreeText | Self::Nothing => vec![],
        }
    }
}

/// Fixed text fields, then fixed boolean fields, then the catalog's items.
pub fn resolve_value_input(field: &str, catalog: &FilterCatalog) -> ValueInput {
    match FieldKind::of_fixed_field(field) {
        Some(FieldKind::Text) => return ValueInput::FreeText,
        Some(FieldKind::Boolean) => return ValueInput::TrueFalse,
        _ => {}
    }
    match catalog.get(field) {
        Some(group) if group.kind == FieldKind::Text => ValueInput::FreeText,
        Some(group) if group.kind == FieldKind::Boolean => ValueInput::TrueFalse,
        Some(group) if !group.items.is_empty() => ValueInput::Choice(group.items.clone()),
        _ => ValueInput::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter_catalog::{BOOLEAN_FIELDS, FilterGroup, TEXT_FIELDS},
        metadata_set::{MetadataSet, MetadataValue},
    };
    use pretty_assertions::assert_eq;

    fn catalog() -> FilterCatalog {
        FilterCatalog::from_metadata_set(&MetadataSet {
            unit: Some(vec![MetadataValue::String("%".into()), MetadataValue::String("EUR".into())]),
            ..Default::default()
        })
    }

    #[test]
    fn text_fields_take_free_text() {
        for field in TEXT_FIELDS {
            assert_eq!(resolve_value_input(field, &catalog()), ValueInput::FreeText);
        }
    }

    #[test]
    fn boolean_fields_offer_exactly_true_and_false() {
        for field in BOOLEAN_FIELDS {
            let input = resolve_value_input(field, &catalog());
            assert_eq!(input, ValueInput::TrueFalse);
            let values = input.options().into_iter().map(|i| i.id).collect::<Vec<_>>();
            assert_eq!(values, vec!["true".to_string(), "false".to_string()]);
        }
    }

    #[test]
    fn boolean_fields_resolve_even_outside_the_catalog() {
        let narrowed = FilterCatalog::narrowed(Vec::<FilterGroup>::new());
        assert_eq!(resolve_value_input("is_custom", &narrowed), ValueInput::TrueFalse);
    }

    #[test]
    fn category_fields_offer_their_items() {
        let input = resolve_value_input("unit", &catalog());
        assert_eq!(input, ValueInput::Choice(vec![FilterItem::new("%"), FilterItem::new("EUR")]));
    }

    #[test]
    fn unknown_or_empty_fields_render_nothing() {
        assert_eq!(resolve_value_input("region", &catalog()), ValueInput::Nothing);
        assert_eq!(resolve_value_input("", &FilterCatalog::placeholder()), ValueInput::Nothing);
        let empty = FilterCatalog::narrowed([FilterGroup::category("frequency", Vec::<String>::new())]);
        assert_eq!(resolve_value_input("frequency", &empty), ValueInput::Nothing);
        assert!(ValueInput::Nothing.options().is_empty());
    }
}
