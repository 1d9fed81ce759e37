//! Agnostic attribute value type shared by subject, resource, action and
//! environment attribute maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single attribute value carried in an [`crate::model::context::EvaluationContext`].
///
/// Kept deliberately small: the core never interprets these values itself
/// (that is the injected [`crate::predicate::Predicate`]'s job), so the enum
/// only needs to round-trip through the JSON wire format described in the
/// policy-document schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AttributeValue {
    #[serde(rename = "bool")]
    Bool(bool),
    #[serde(rename = "long")]
    Long(i64),
    #[serde(rename = "double")]
    Double(f64),
    #[serde(rename = "string")]
    String(String),
    #[serde(rename = "list")]
    List(Vec<AttributeValue>),
    #[serde(rename = "map")]
    Map(HashMap<String, AttributeValue>),
    #[serde(rename = "null")]
    Null,
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::String(v.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Long(v)
    }
}

pub type Attributes = HashMap<String, AttributeValue>;
