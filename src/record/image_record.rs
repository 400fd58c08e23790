//! Image Record - one persisted image file

use std::path::{Path, PathBuf};

use super::{RecordKind, Role};
use crate::codec::{ImageCodec, ImageData};
use crate::storage::LogRow;
use crate::Result;

/// Image Record ties one image file to an experiment.
///
/// The record owns the side effect of persisting its pixel data: [`persist`]
/// runs before the row is appended to the log, so a crash between the two
/// leaves an orphan file but never a row referencing a missing file.
///
/// [`persist`]: ImageRecord::persist
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    experiment: String,
    role: Role,
    image: ImageData,
    path: PathBuf,
    title: String,
    description: String,
}

impl ImageRecord {
    /// Create a new image record. `path` is the full destination path,
    /// already inside the experiment's images directory.
    #[must_use]
    pub fn new(
        experiment: impl Into<String>,
        role: Role,
        image: ImageData,
        path: PathBuf,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            experiment: experiment.into(),
            role,
            image,
            path,
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

    /// Get the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
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

    /// Write the pixel data to the destination path through `codec`.
    ///
    /// # Errors
    ///
    /// Propagates the codec's IO failure.
    pub fn persist(&self, codec: &dyn ImageCodec) -> Result<()> {
        codec.persist(&self.image, &self.path)
    }

    /// Serialize to exactly one log row. The row references the file by
    /// path, not by content.
    #[must_use]
    pub fn to_row(&self) -> LogRow {
        LogRow::new(
            &self.experiment,
            RecordKind::Image,
            &self.title,
            &self.description,
        )
        .with_role(self.role)
        .with_filename(self.path.to_string_lossy())
    }
}
