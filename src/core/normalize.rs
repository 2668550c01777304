use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::{RawValue, Record};
use crate::error::{ChartError, ChartResult};

/// Field that carries the category label in every chart's data sheet.
pub const LABEL_FIELD: &str = "label";

/// Field names that are never treated as stacked segments.
pub const RESERVED_STACK_FIELDS: [&str; 3] = [LABEL_FIELD, "values", "total"];

/// What to do with field values that do not coerce to a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Reject the data set with `ChartError::InvalidData`.
    #[default]
    Strict,
    /// Keep the legacy behavior: the value becomes `NaN` and rendering degrades silently.
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeRow {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

/// One stacked sub-range of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub offset_start: f64,
    pub offset_end: f64,
    pub value: f64,
}

/// A column whose segments are contiguous from 0 up to `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedColumn {
    pub label: String,
    pub total: f64,
    pub segments: Vec<Segment>,
}

/// Declared segment order for stacked-column data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSchema {
    pub label_field: String,
    pub series: Vec<String>,
}

impl StackSchema {
    #[must_use]
    pub fn new(series: Vec<String>) -> Self {
        Self {
            label_field: LABEL_FIELD.to_owned(),
            series,
        }
    }

    /// Derives the segment order from the first record's field order,
    /// skipping the reserved names.
    pub fn from_records(records: &[Record]) -> ChartResult<Self> {
        let first = records.first().ok_or_else(|| {
            ChartError::InvalidData("stacked schema requires at least one record".to_owned())
        })?;
        let series = first
            .field_names()
            .filter(|name| !RESERVED_STACK_FIELDS.contains(name))
            .map(str::to_owned)
            .collect();
        Ok(Self::new(series))
    }
}

/// Chart-specific description of which fields feed the numeric series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesSpec {
    Pie { amount_field: String },
    Slopegraph { start_field: String, end_field: String },
    StackedColumn(StackSchema),
}

impl SeriesSpec {
    #[must_use]
    pub fn pie() -> Self {
        Self::Pie {
            amount_field: "amt".to_owned(),
        }
    }

    #[must_use]
    pub fn slopegraph() -> Self {
        Self::Slopegraph {
            start_field: "start".to_owned(),
            end_field: "end".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NormalizedSeries {
    Pie(Vec<PieSlice>),
    Slopegraph(Vec<SlopeRow>),
    StackedColumn(Vec<StackedColumn>),
}

impl NormalizedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Pie(slices) => slices.len(),
            Self::Slopegraph(rows) => rows.len(),
            Self::StackedColumn(columns) => columns.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Coerces raw records into per-chart numeric series. Never mutates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataNormalizer {
    policy: CoercionPolicy,
}

impl DataNormalizer {
    #[must_use]
    pub fn new(policy: CoercionPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(self) -> CoercionPolicy {
        self.policy
    }

    pub fn normalize(self, records: &[Record], spec: &SeriesSpec) -> ChartResult<NormalizedSeries> {
        let series = match spec {
            SeriesSpec::Pie { amount_field } => {
                NormalizedSeries::Pie(self.normalize_pie(records, amount_field)?)
            }
            SeriesSpec::Slopegraph {
                start_field,
                end_field,
            } => NormalizedSeries::Slopegraph(self.normalize_slopegraph(
                records,
                start_field,
                end_field,
            )?),
            SeriesSpec::StackedColumn(schema) => {
                NormalizedSeries::StackedColumn(self.normalize_stacked(records, schema)?)
            }
        };
        debug!(records = records.len(), policy = ?self.policy, "normalized series");
        Ok(series)
    }

    pub fn normalize_pie(self, records: &[Record], amount_field: &str) -> ChartResult<Vec<PieSlice>> {
        records
            .iter()
            .map(|record| {
                Ok(PieSlice {
                    label: record.label(LABEL_FIELD),
                    amount: self.coerce_field(record, amount_field)?,
                })
            })
            .collect()
    }

    pub fn normalize_slopegraph(
        self,
        records: &[Record],
        start_field: &str,
        end_field: &str,
    ) -> ChartResult<Vec<SlopeRow>> {
        records
            .iter()
            .map(|record| {
                Ok(SlopeRow {
                    label: record.label(LABEL_FIELD),
                    start: self.coerce_field(record, start_field)?,
                    end: self.coerce_field(record, end_field)?,
                })
            })
            .collect()
    }

    /// Stacks every schema series in declared order, starting at 0.
    pub fn normalize_stacked(
        self,
        records: &[Record],
        schema: &StackSchema,
    ) -> ChartResult<Vec<StackedColumn>> {
        records
            .iter()
            .map(|record| {
                let mut offset = 0.0;
                let mut segments = Vec::with_capacity(schema.series.len());
                for name in &schema.series {
                    if record.get(name).is_none() {
                        return Err(ChartError::InvalidData(format!(
                            "record `{}` has no stacked field `{name}`",
                            record.label(&schema.label_field)
                        )));
                    }
                    let value = self.coerce_field(record, name)?;
                    let offset_end = offset + value;
                    segments.push(Segment {
                        name: name.clone(),
                        offset_start: offset,
                        offset_end,
                        value,
                    });
                    offset = offset_end;
                }
                Ok(StackedColumn {
                    label: record.label(&schema.label_field),
                    total: offset,
                    segments,
                })
            })
            .collect()
    }

    fn coerce_field(self, record: &Record, field: &str) -> ChartResult<f64> {
        let value = record.get(field).map_or(f64::NAN, coerce_number);
        if value.is_finite() {
            return Ok(value);
        }
        match self.policy {
            CoercionPolicy::Strict => Err(ChartError::InvalidData(format!(
                "field `{field}` of record `{}` is not a finite number",
                record.label(LABEL_FIELD)
            ))),
            CoercionPolicy::Permissive => {
                warn!(field, label = %record.label(LABEL_FIELD), value, "non-finite value kept");
                Ok(value)
            }
        }
    }
}

/// Loose numeric coercion of a spreadsheet cell.
///
/// Surrounding whitespace is ignored, an empty cell is 0, and decimal,
/// exponent, `Infinity` and `0x`/`0o`/`0b` literals are accepted. Anything
/// else is `NaN`.
#[must_use]
pub fn coerce_number(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Bool(value) => f64::from(u8::from(*value)),
        RawValue::Number(value) => *value,
        RawValue::Text(text) => coerce_text(text),
    }
}

fn coerce_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    Some(
        u64::from_str_radix(digits, radix)
            .map(|value| value as f64)
            .unwrap_or(f64::NAN),
    )
}
