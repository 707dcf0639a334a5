//! Route segments carrying structured state (CBOR, URL-safe base64).

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};


/// Route segment wrapper: the router needs `Display`, `FromStr` and `Default`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        ciborium::into_writer(&self.0, &mut serialized).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", URL_SAFE_NO_PAD.encode(serialized))
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Route segment is not base64: {}", err),
            Self::Cbor(err) => write!(f, "Route segment does not decode: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE_NO_PAD.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filter_expression::{AdditionalClause, BaseClause, BooleanOperator, FilterExpression};
    use pretty_assertions::assert_eq;

    #[test]
    fn expression_survives_the_url() {
        let expression = FilterExpression {
            base: BaseClause { field: "name".into(), value: "consumer prices / CPI?".into() },
            additional_fields: vec![AdditionalClause {
                boolean: BooleanOperator::Not,
                field: "is_custom".into(),
                value: "true".into(),
            }],
        };
        let segment = UrlParam(Some(expression.clone())).to_string();
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        let parsed: UrlParam<Option<FilterExpression>> = segment.parse().unwrap();
        assert_eq!(parsed.0, Some(expression));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("%%%".parse::<UrlParam<Option<FilterExpression>>>().is_err());
        assert!("AAAA".parse::<UrlParam<FilterExpression>>().is_err());
    }
}
