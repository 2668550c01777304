use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Raw cell value as it arrives from the copy spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Truthiness used for boolean-ish copy fields (`showLabels`).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Display form used when a raw value has to be shown as text.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => crate::core::format_number(*value),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of chart data. Field order is preserved from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, RawValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, keeping insertion order.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    /// Field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the label text of the record, or an empty string when absent.
    #[must_use]
    pub fn label(&self, field: &str) -> String {
        self.get(field)
            .map(RawValue::to_display_string)
            .unwrap_or_default()
    }

    /// Parses a JSON array of objects into records.
    pub fn many_from_json_str(input: &str) -> ChartResult<Vec<Self>> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse records json: {e}")))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RawValue, Record};

    #[test]
    fn json_records_keep_field_order() {
        let records = Record::many_from_json_str(r#"[{"label":"X","zeta":"1","alpha":2}]"#)
            .expect("valid json");
        let names: Vec<&str> = records[0].field_names().collect();
        assert_eq!(names, vec!["label", "zeta", "alpha"]);
        assert_eq!(records[0].get("alpha"), Some(&RawValue::Number(2.0)));
    }

    #[test]
    fn truthiness_follows_copy_conventions() {
        assert!(RawValue::from("yes").is_truthy());
        assert!(!RawValue::from("").is_truthy());
        assert!(!RawValue::from(0.0).is_truthy());
        assert!(RawValue::from(1.0).is_truthy());
        assert!(RawValue::from(true).is_truthy());
        assert_eq!(RawValue::from(30.0).to_display_string(), "30");
    }
}
