//! Boolean filter expression: a base clause plus chained additional clauses.
//!
//! Clauses are combined strictly left to right with the running result, so
//! `base AND a OR b` means `(base AND a) OR b`. There is no operator
//! precedence.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter_catalog::FilterCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash, PartialOrd, Ord)]
pub enum BooleanOperator {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "NOT")]
    Not,
}

impl BooleanOperator {
    pub const ALL: [BooleanOperator; 3] = [Self::And, Self::Or, Self::Not];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl Display for BooleanOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown boolean operator: {0:?}")]
pub struct ParseOperatorError(pub String);

impl FromStr for BooleanOperator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            "NOT" => Ok(Self::Not),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
pub struct BaseClause {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
pub struct AdditionalClause {
    pub boolean: BooleanOperator,
    pub field: String,
    pub value: String,
}

/// The structured query sent verbatim to the advanced search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
pub struct FilterExpression {
    pub base: BaseClause,
    #[serde(rename = "additionalFields", default)]
    pub additional_fields: Vec<AdditionalClause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("no additional clause at index {index} (have {len})")]
    ClauseOutOfRange { index: usize, len: usize },
}

/// Which clause a validation issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseRef {
    Base,
    Additional(usize),
}

/// Which input of the clause is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseInput {
    Operator,
    Field,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseIssue {
    pub clause: ClauseRef,
    pub input: ClauseInput,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Default)]
#[error("{} invalid input(s) in filter expression", .issues.len())]
pub struct ValidationErrors {
    pub issues: Vec<ClauseIssue>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// First message for one input of one clause, for inline display.
    pub fn message_for(&self, clause: ClauseRef, input: ClauseInput) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.clause == clause && i.input == input)
            .map(|i| i.message.as_str())
    }

    /// Drop the issues of one input once the user has edited it.
    pub fn clear_input(&mut self, clause: ClauseRef, input: ClauseInput) {
        self.issues.retain(|i| !(i.clause == clause && i.input == input));
    }

    /// A field change also resets the value, so both issues go.
    pub fn clear_field_change(&mut self, clause: ClauseRef) {
        self.clear_input(clause, ClauseInput::Field);
        self.clear_input(clause, ClauseInput::Value);
    }

    fn push(&mut self, clause: ClauseRef, input: ClauseInput, message: impl Into<String>) {
        self.issues.push(ClauseIssue { clause, input, message: message.into() });
    }
}

impl FilterExpression {
    /// Fresh expression with the base clause on the catalog's first field.
    pub fn for_catalog(catalog: &FilterCatalog) -> Self {
        Self {
            base: BaseClause { field: catalog.first_field().to_string(), value: String::new() },
            additional_fields: vec![],
        }
    }

    pub fn set_base_field(&mut self, field: impl Into<String>) {
        self.base.field = field.into();
        self.base.value.clear();
    }

    pub fn set_base_value(&mut self, value: impl Into<String>) {
        self.base.value = value.into();
    }

    pub fn add_clause(&mut self, catalog: &FilterCatalog) {
        self.additional_fields.push(AdditionalClause {
            boolean: BooleanOperator::And,
            field: catalog.first_field().to_string(),
            value: String::new(),
        });
    }

    pub fn remove_clause(&mut self, index: usize) -> Result<AdditionalClause, ExpressionError> {
        self.check_index(index)?;
        Ok(self.additional_fields.remove(index))
    }

    pub fn set_clause_field(&mut self, index: usize, field: impl Into<String>) -> Result<(), ExpressionError> {
        let clause = self.clause_mut(index)?;
        clause.field = field.into();
        clause.value.clear();
        Ok(())
    }

    pub fn set_clause_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), ExpressionError> {
        self.clause_mut(index)?.value = value.into();
        Ok(())
    }

    pub fn set_clause_operator(&mut self, index: usize, operator: BooleanOperator) -> Result<(), ExpressionError> {
        self.clause_mut(index)?.boolean = operator;
        Ok(())
    }

    /// Check every clause against the catalog. All problems are collected so
    /// each one can be shown next to its input.
    pub fn validate(&self, catalog: &FilterCatalog) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_clause(&mut errors, ClauseRef::Base, &self.base.field, &self.base.value, catalog);
        for (i, clause) in self.additional_fields.iter().enumerate() {
            check_clause(&mut errors, ClauseRef::Additional(i), &clause.field, &clause.value, catalog);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Fold the clauses left to right over match sets returned by `matcher`.
    /// Reference for the evaluation order the search endpoint applies.
    #[cfg(test)]
    fn evaluate<T, F>(&self, mut matcher: F) -> std::collections::BTreeSet<T>
    where
        T: Ord + Clone,
        F: FnMut(&str, &str) -> std::collections::BTreeSet<T>,
    {
        let mut acc = matcher(&self.base.field, &self.base.value);
        for clause in &self.additional_fields {
            let matched = matcher(&clause.field, &clause.value);
            acc = match clause.boolean {
                BooleanOperator::And => acc.intersection(&matched).cloned().collect(),
                BooleanOperator::Or => acc.union(&matched).cloned().collect(),
                BooleanOperator::Not => acc.difference(&matched).cloned().collect(),
            };
        }
        acc
    }

    fn check_index(&self, index: usize) -> Result<(), ExpressionError> {
        if index >= self.additional_fields.len() {
            return Err(ExpressionError::ClauseOutOfRange { index, len: self.additional_fields.len() });
        }
        Ok(())
    }

    fn clause_mut(&mut self, index: usize) -> Result<&mut AdditionalClause, ExpressionError> {
        self.check_index(index)?;
        Ok(&mut self.additional_fields[index])
    }
}

fn check_clause(errors: &mut ValidationErrors, clause: ClauseRef, field: &str, value: &str, catalog: &FilterCatalog) {
    if !catalog.contains(field) {
        let message = if field.is_empty() { "Select a field".to_string() } else { format!("Unknown field: {field}") };
        errors.push(clause, ClauseInput::Field, message);
    }
    if value.trim().is_empty() {
        errors.push(clause, ClauseInput::Value, "Value is required");
    }
}

/// Parse an operator coming from a form control, recording a failure against
/// the clause instead of dropping it.
pub fn parse_operator_input(index: usize, raw: &str) -> Result<BooleanOperator, ValidationErrors> {
    raw.parse::<BooleanOperator>().map_err(|e| {
        let mut errors = ValidationErrors::default();
        errors.push(ClauseRef::Additional(index), ClauseInput::Operator, e.to_string());
        errors
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{
        filter_catalog::FilterGroup,
        metadata_set::{MetadataSet, MetadataValue},
    };
    use pretty_assertions::assert_eq;

    fn catalog() -> FilterCatalog {
        FilterCatalog::from_metadata_set(&MetadataSet {
            source: Some(vec![MetadataValue::String("Eurostat".into())]),
            frequency: Some(vec![MetadataValue::String("MONTHLY".into())]),
            ..Default::default()
        })
    }

    #[test]
    fn new_expression_starts_on_first_field() {
        let expr = FilterExpression::for_catalog(&catalog());
        assert_eq!(expr.base, BaseClause { field: "name".into(), value: "".into() });
        assert!(expr.additional_fields.is_empty());
    }

    #[test]
    fn changing_base_field_resets_value() {
        let mut expr = FilterExpression::for_catalog(&catalog());
        expr.set_base_value("inflation");
        expr.set_base_field("source");
        assert_eq!(expr.base.value, "");
        assert_eq!(expr.base.field, "source");
    }

    #[test]
    fn changing_clause_field_resets_value() {
        let catalog = catalog();
        let mut expr = FilterExpression::for_catalog(&catalog);
        expr.add_clause(&catalog);
        expr.set_clause_value(0, "CPI").unwrap();
        expr.set_clause_field(0, "frequency").unwrap();
        assert_eq!(expr.additional_fields[0].value, "");
        assert_eq!(expr.additional_fields[0].field, "frequency");
    }

    #[test]
    fn added_clause_defaults_to_and_on_first_field() {
        let catalog = catalog();
        let mut expr = FilterExpression::for_catalog(&catalog);
        expr.add_clause(&catalog);
        assert_eq!(
            expr.additional_fields,
            vec![AdditionalClause { boolean: BooleanOperator::And, field: "name".into(), value: "".into() }]
        );
    }

    #[test]
    fn removing_clause_keeps_order() {
        let catalog = catalog();
        let mut expr = FilterExpression::for_catalog(&catalog);
        for value in ["a", "b", "c"] {
            expr.add_clause(&catalog);
            let last = expr.additional_fields.len() - 1;
            expr.set_clause_value(last, value).unwrap();
        }
        let removed = expr.remove_clause(1).unwrap();
        assert_eq!(removed.value, "b");
        let values = expr.additional_fields.iter().map(|c| c.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["a", "c"]);
        assert_eq!(expr.remove_clause(5), Err(ExpressionError::ClauseOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn serializes_exactly_as_the_search_endpoint_expects() {
        let mut expr = FilterExpression::default();
        expr.set_base_field("source");
        expr.set_base_value("Eurostat");
        expr.additional_fields.push(AdditionalClause {
            boolean: BooleanOperator::And,
            field: "frequency".into(),
            value: "MONTHLY".into(),
        });
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(
            json,
            r#"{"base":{"field":"source","value":"Eurostat"},"additionalFields":[{"boolean":"AND","field":"frequency","value":"MONTHLY"}]}"#
        );
    }

    #[test]
    fn validation_reports_every_problem_inline() {
        let catalog = catalog();
        let mut expr = FilterExpression::for_catalog(&catalog);
        expr.add_clause(&catalog);
        expr.set_clause_field(0, "region").unwrap();
        expr.set_clause_value(0, "EU").unwrap();
        let errors = expr.validate(&catalog).unwrap_err();
        assert_eq!(errors.issues.len(), 2);
        assert_eq!(errors.message_for(ClauseRef::Base, ClauseInput::Value), Some("Value is required"));
        assert_eq!(
            errors.message_for(ClauseRef::Additional(0), ClauseInput::Field),
            Some("Unknown field: region")
        );
        assert_eq!(errors.message_for(ClauseRef::Additional(0), ClauseInput::Value), None);
    }

    #[test]
    fn whitespace_value_is_rejected() {
        let catalog = catalog();
        let mut expr = FilterExpression::for_catalog(&catalog);
        expr.set_base_value("   ");
        assert!(expr.validate(&catalog).is_err());
        expr.set_base_value("CPI");
        assert_eq!(expr.validate(&catalog), Ok(()));
    }

    #[test]
    fn nothing_validates_against_placeholder_catalog() {
        let placeholder = FilterCatalog::placeholder();
        let mut expr = FilterExpression::for_catalog(&placeholder);
        expr.set_base_value("CPI");
        let errors = expr.validate(&placeholder).unwrap_err();
        assert_eq!(errors.message_for(ClauseRef::Base, ClauseInput::Field), Some("Select a field"));
    }

    #[test]
    fn narrowed_catalog_validates_caller_fields() {
        let catalog = FilterCatalog::narrowed([FilterGroup::category("frequency", ["Monthly"])]);
        let mut expr = FilterExpression::for_catalog(&catalog);
        expr.set_base_field("frequency");
        expr.set_base_value("Monthly");
        assert_eq!(expr.validate(&catalog), Ok(()));
        expr.set_base_field("source");
        expr.set_base_value("OECD");
        assert!(expr.validate(&catalog).is_err());
    }

    #[test]
    fn operator_parsing_is_strict() {
        assert_eq!("OR".parse::<BooleanOperator>(), Ok(BooleanOperator::Or));
        assert!("and".parse::<BooleanOperator>().is_err());
        let errors = parse_operator_input(2, "XOR").unwrap_err();
        assert!(errors.message_for(ClauseRef::Additional(2), ClauseInput::Operator).is_some());
        assert!(serde_json::from_str::<BooleanOperator>(r#""XOR""#).is_err());
    }

    #[test]
    fn clauses_combine_left_to_right_without_precedence() {
        // base = {1,2,3}, a = {2}, b = {4}
        let mut expr = FilterExpression::default();
        expr.set_base_field("base");
        expr.additional_fields = vec![
            AdditionalClause { boolean: BooleanOperator::And, field: "a".into(), value: "x".into() },
            AdditionalClause { boolean: BooleanOperator::Or, field: "b".into(), value: "x".into() },
        ];
        let matcher = |field: &str, _value: &str| -> BTreeSet<u32> {
            match field {
                "base" => [1, 2, 3].into(),
                "a" => [2].into(),
                "b" => [4].into(),
                _ => BTreeSet::new(),
            }
        };
        // (base AND a) OR b = {2, 4}; precedence would give base AND (a OR b) = {2}
        assert_eq!(expr.evaluate(matcher), BTreeSet::from([2, 4]));

        expr.additional_fields[1].boolean = BooleanOperator::Not;
        assert_eq!(expr.evaluate(matcher), BTreeSet::from([2]));
    }

    #[test]
    fn editing_an_input_clears_only_its_issues() {
        let catalog = catalog();
        let mut expr = FilterExpression::for_catalog(&catalog);
        expr.add_clause(&catalog);
        expr.set_clause_field(0, "bogus").unwrap();
        let mut errors = expr.validate(&catalog).unwrap_err();
        assert!(errors.message_for(ClauseRef::Base, ClauseInput::Value).is_some());
        assert!(errors.message_for(ClauseRef::Additional(0), ClauseInput::Field).is_some());

        errors.clear_input(ClauseRef::Base, ClauseInput::Value);
        assert_eq!(errors.message_for(ClauseRef::Base, ClauseInput::Value), None);
        assert!(errors.message_for(ClauseRef::Additional(0), ClauseInput::Field).is_some());

        errors.clear_field_change(ClauseRef::Additional(0));
        assert!(errors.is_empty());
    }
}
