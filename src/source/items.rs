//! Item collection parsing and client-side filtering

use serde_json::Value;

use crate::error::SourceError;
use crate::matcher::contains_ignore_case;

/// Field carrying the display label of each item
const NAME_FIELD: &str = "Job_name";

/// Extract item names from the collection body, in source order
///
/// Entries without a string name are skipped.
pub fn parse_items(body: &str) -> Result<Vec<String>, SourceError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Err(SourceError::Malformed(
            "expected a JSON array of items".to_string(),
        ));
    };

    Ok(entries
        .iter()
        .filter_map(|entry| entry.get(NAME_FIELD)?.as_str())
        .map(str::to_string)
        .collect())
}

/// Keep names containing `query` (ignoring case), first `limit` in order
pub fn filter_suggestions<I>(names: I, query: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }

    names
        .into_iter()
        .filter(|name| contains_ignore_case(name, query))
        .take(limit)
        .collect()
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod items_tests;
