//! Tabular log backend
//!
//! One ordered table, one row per recorded fact. The only operations exposed
//! are the primitives the record store needs: append, equality filter by
//! experiment name, purge-by-name, and whole-file CSV load/save. Rows are
//! immutable once appended.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{RecordKind, Role};
use crate::Result;

/// One log row: the column union over all record kinds, plus the commit
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    experiment: String,
    input_or_output: Option<Role>,
    kind: RecordKind,
    parameter_name: Option<String>,
    parameter_value: Option<String>,
    value_type: Option<String>,
    filename: Option<String>,
    title: String,
    description: String,
    recorded_at: DateTime<Utc>,
}

impl LogRow {
    /// Create a row with the required columns; kind-specific columns start
    /// empty.
    #[must_use]
    pub fn new(
        experiment: impl Into<String>,
        kind: RecordKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            experiment: experiment.into(),
            input_or_output: None,
            kind,
            parameter_name: None,
            parameter_value: None,
            value_type: None,
            filename: None,
            title: title.into(),
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    /// Set the input/output role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.input_or_output = Some(role);
        self
    }

    /// Set the parameter columns.
    #[must_use]
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        self.parameter_name = Some(name.into());
        self.parameter_value = Some(value.into());
        self.value_type = Some(value_type.into());
        self
    }

    /// Set the image filename column.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Experiment name this row belongs to.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    /// Record kind discriminator.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Input/output role, if the kind carries one.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.input_or_output
    }

    /// Parameter name, for parameter rows.
    #[must_use]
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    /// Serialized parameter value, for parameter rows.
    #[must_use]
    pub fn parameter_value(&self) -> Option<&str> {
        self.parameter_value.as_deref()
    }

    /// Parameter value kind name, for parameter rows.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    /// Image file path, for image rows.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Row title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Row description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the row was built.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Ordered, append-only collection of log rows with whole-file persistence.
#[derive(Debug, Clone, Default)]
pub struct ExperimentLog {
    rows: Vec<LogRow>,
}

impl ExperimentLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the full log from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a row fails to
    /// deserialize.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(Self { rows })
    }

    /// Save the full log to a CSV file, overwriting it wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or a row fails to
    /// serialize. The writer is flushed before returning; the file handle is
    /// released on every exit path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(crate::Error::Io)?;
        Ok(())
    }

    /// Append one row, preserving insertion order.
    pub fn append(&mut self, row: LogRow) {
        self.rows.push(row);
    }

    /// All rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }

    /// The ordered subsequence of rows whose experiment name equals `name`.
    #[must_use]
    pub fn rows_for(&self, name: &str) -> Vec<&LogRow> {
        self.rows
            .iter()
            .filter(|row| row.experiment() == name)
            .collect()
    }

    /// Whether any row belongs to `name`.
    #[must_use]
    pub fn contains_experiment(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.experiment() == name)
    }

    /// Drop every row belonging to `name`. Returns the number removed.
    pub fn purge(&mut self, name: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.experiment() != name);
        before - self.rows.len()
    }

    /// Total row count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the log has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
