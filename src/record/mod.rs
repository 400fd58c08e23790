//! Record value objects
//!
//! Each record ties one fact to an experiment name, a role, a title and a
//! description, and serializes to exactly one log row. The log is the source
//! of truth; records are the shape facts take on their way in.

mod image_record;
mod parameter_record;
mod text_record;

pub use image_record::ImageRecord;
pub use parameter_record::ParameterRecord;
pub use text_record::TextRecord;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether a fact belongs to an experiment's inputs or outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Experiment input.
    Input,
    /// Experiment output.
    Output,
}

impl Role {
    /// Lowercase name as stored in the log.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Case-insensitive parse; anything outside {input, output} is an
    /// `InvalidArgument`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            other => Err(Error::InvalidArgument(format!(
                "role must be 'input' or 'output', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator for the kind of fact a log row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Named input/output parameter.
    Parameter,
    /// Persisted image file.
    Image,
    /// Free-form note.
    Text,
}

/// Parameter value: a closed set of serializable variants, each tagged with
/// a stable kind name stored alongside the value for later display.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Floating-point or integral number.
    Number(f64),
    /// Text value.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Ordered sequence of values.
    Sequence(Vec<ParamValue>),
    /// String-keyed mapping of values.
    Mapping(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Stable kind name recorded in the log's `value_type` column.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// JSON rendering used for both storage and display.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Number(n) => serde_json::json!(n),
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            other => f.write_str(&other.to_json().to_string()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for ParamValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}
