//! Data adapter: flattens heterogeneous JSON collections into a sample and
//! re-pairs scores with their ids on the way out.
//!
//! Accepted shapes:
//! - `[1.0, 2.0, ...]`: ids are positional indices.
//! - `[[v, ...], ...]`: first element is the value.
//! - `[[id, v, ...], ...]` with `use_id`: first element is the id.
//! - `{"id": v, ...}` or `{"id": [v, ...], ...}`: keys are ids with
//!   `use_id`, positional indices otherwise.
//!
//! Booleans count as `0` and `1`. The engine never looks at ids; they only
//! travel alongside the values.

use serde::Serialize;
use serde_json::{Map, Value};

use deviate_core::config::OutputConfig;
use deviate_core::errors::InputError;

/// A flattened sample with one id per value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub ids: Vec<Value>,
    pub values: Vec<f64>,
}

/// One scored observation, in original position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub id: Value,
    pub value: f64,
    pub zscore: f64,
}

impl Dataset {
    /// Dataset with positional ids `0..n`.
    pub fn from_values(values: Vec<f64>) -> Self {
        let ids = (0..values.len()).map(Value::from).collect();
        Self { ids, values }
    }

    /// Parse JSON text, then flatten it with [`Dataset::from_json`].
    pub fn from_json_str(input: &str, use_id: bool) -> Result<Self, InputError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value, use_id)
    }

    /// Flatten a JSON array or object into ids and values.
    pub fn from_json(input: &Value, use_id: bool) -> Result<Self, InputError> {
        match input {
            Value::Array(items) => Self::from_array(items, use_id),
            Value::Object(map) => Self::from_object(map, use_id),
            other => Err(InputError::UnsupportedShape {
                found: json_kind(other).to_string(),
            }),
        }
    }

    fn from_array(items: &[Value], use_id: bool) -> Result<Self, InputError> {
        let mut dataset = Self {
            ids: Vec::with_capacity(items.len()),
            values: Vec::with_capacity(items.len()),
        };

        for (position, item) in items.iter().enumerate() {
            let (id, value) = match item {
                Value::Array(inner) => match inner.as_slice() {
                    [] => return Err(InputError::EmptyEntry { position }),
                    [id, value, ..] if use_id => (id.clone(), numeric(value, position)?),
                    [value, ..] => (Value::from(position), numeric(value, position)?),
                },
                scalar => (Value::from(position), numeric(scalar, position)?),
            };
            dataset.ids.push(id);
            dataset.values.push(value);
        }

        Ok(dataset)
    }

    fn from_object(map: &Map<String, Value>, use_id: bool) -> Result<Self, InputError> {
        let mut dataset = Self {
            ids: Vec::with_capacity(map.len()),
            values: Vec::with_capacity(map.len()),
        };

        for (position, (key, item)) in map.iter().enumerate() {
            let value = match item {
                Value::Array(inner) => match inner.first() {
                    Some(first) => numeric(first, position)?,
                    None => return Err(InputError::EmptyEntry { position }),
                },
                scalar => numeric(scalar, position)?,
            };
            let id = if use_id {
                Value::String(key.clone())
            } else {
                Value::from(position)
            };
            dataset.ids.push(id);
            dataset.values.push(value);
        }

        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pair each value with its id and z-score, in original order.
    pub fn records(&self, zscores: &[f64]) -> Vec<ScoredRecord> {
        debug_assert_eq!(zscores.len(), self.values.len());
        self.ids
            .iter()
            .zip(&self.values)
            .zip(zscores)
            .map(|((id, &value), &zscore)| ScoredRecord {
                id: id.clone(),
                value,
                zscore,
            })
            .collect()
    }
}

/// Shape scored records for output.
///
/// With `use_list`, rows are `[value, zscore]`, or `[id, value, zscore]`
/// when `use_id` is set. Otherwise an object maps each id to
/// `[value, zscore]`.
pub fn format_output(records: &[ScoredRecord], output: &OutputConfig) -> Value {
    if output.effective_use_list() {
        let use_id = output.effective_use_id();
        let rows = records
            .iter()
            .map(|r| {
                let mut row = Vec::with_capacity(3);
                if use_id {
                    row.push(r.id.clone());
                }
                row.push(Value::from(r.value));
                row.push(Value::from(r.zscore));
                Value::Array(row)
            })
            .collect();
        Value::Array(rows)
    } else {
        let map = records
            .iter()
            .map(|r| {
                (
                    id_key(&r.id),
                    Value::Array(vec![Value::from(r.value), Value::from(r.zscore)]),
                )
            })
            .collect::<Map<String, Value>>();
        Value::Object(map)
    }
}

/// Empty output in the configured shape.
pub fn empty_output(output: &OutputConfig) -> Value {
    if output.effective_use_list() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn numeric(value: &Value, position: usize) -> Result<f64, InputError> {
    match value {
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => other.as_f64().ok_or_else(|| InputError::NotNumeric {
            position,
            found: other.to_string(),
        }),
    }
}

fn id_key(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
