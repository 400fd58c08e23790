//! Parameter Record - one named input/output value

use super::{ParamValue, RecordKind, Role};
use crate::storage::LogRow;

/// Parameter Record ties one named value to an experiment.
///
/// The value's kind name is captured alongside the value itself so a report
/// can show what was stored without re-parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRecord {
    experiment: String,
    role: Role,
    name: String,
    value: ParamValue,
    title: String,
    description: String,
}

impl ParameterRecord {
    /// Create a new parameter record.
    #[must_use]
    pub fn new(
        experiment: impl Into<String>,
        role: Role,
        name: impl Into<String>,
        value: ParamValue,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            experiment: experiment.into(),
            role,
            name: name.into(),
            value,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Get the experiment name.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    /// Get the input/output role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Get the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parameter value.
    #[must_use]
    pub const fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Serialize to exactly one log row.
    #[must_use]
    pub fn to_row(&self) -> LogRow {
        LogRow::new(
            &self.experiment,
            RecordKind::Parameter,
            &self.title,
            &self.description,
        )
        .with_role(self.role)
        .with_parameter(&self.name, self.value.to_string(), self.value.kind_name())
    }
}
