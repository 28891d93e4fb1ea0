//! Detail endpoint payloads
//!
//! The endpoint answers either with a job record or with `{"error": "..."}`.
//! Scalars arrive as strings, numbers or null depending on the column, so
//! every scalar is normalised to `Option<String>` here: `None` means the
//! field is absent and must not be displayed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::SourceError;

/// A major (or other sub-item) related to the looked-up job
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RelatedItem {
    #[serde(rename = "MajorID", default, deserialize_with = "scalar")]
    pub id: Option<String>,
    #[serde(rename = "Major_name", default, deserialize_with = "scalar")]
    pub name: Option<String>,
    #[serde(rename = "CreditHrs", default, deserialize_with = "scalar")]
    pub credit_hours: Option<String>,
}

impl RelatedItem {
    /// An outer join with no matching major yields a row with every column null
    pub fn is_placeholder(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}

/// Full record for one job
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "JobID", default, deserialize_with = "scalar")]
    pub id: Option<String>,
    #[serde(rename = "Job_name", default, deserialize_with = "scalar")]
    pub name: Option<String>,
    #[serde(rename = "Final_degree", default, deserialize_with = "scalar")]
    pub degree_label: Option<String>,
    #[serde(rename = "years_needed", default, deserialize_with = "scalar")]
    pub years_needed: Option<String>,
    #[serde(rename = "avgCost", default, deserialize_with = "scalar")]
    pub cost_estimate: Option<String>,
    #[serde(rename = "majors", default, deserialize_with = "nullable_list")]
    pub related_items: Vec<RelatedItem>,
}

/// Result of one detail lookup
#[derive(Debug)]
pub enum DetailOutcome {
    Found(DetailRecord),
    /// The endpoint answered with an explicit error payload
    NotFound { message: String },
    /// Transport failure, non-success status or malformed body
    Failed(SourceError),
}

/// Classify a detail response body
pub fn parse_detail(body: &str) -> DetailOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return DetailOutcome::Failed(e.into()),
    };

    if !value.is_object() {
        return DetailOutcome::Failed(SourceError::Malformed(
            "expected a JSON object".to_string(),
        ));
    }

    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return DetailOutcome::NotFound { message };
    }

    match DetailRecord::deserialize(value) {
        Ok(record) => DetailOutcome::Found(record),
        Err(e) => DetailOutcome::Failed(e.into()),
    }
}

fn normalize_scalar(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() || s == "null" => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected a scalar, found {}", other)),
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    normalize_scalar(value).map_err(serde::de::Error::custom)
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<RelatedItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RelatedItem>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
