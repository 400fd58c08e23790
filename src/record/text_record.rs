//! Text Record - free-form note attached to an experiment

use super::RecordKind;
use crate::storage::LogRow;

/// Text Record: a titled note with no role and no value columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    experiment: String,
    title: String,
    description: String,
}

impl TextRecord {
    /// Create a new text record.
    #[must_use]
    pub fn new(
        experiment: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            experiment: experiment.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Get the experiment name.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
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
            RecordKind::Text,
            &self.title,
            &self.description,
        )
    }
}
