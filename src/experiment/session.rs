//! Experiment session handle

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use super::store::StoreState;
use crate::codec::{ImageCodec, ImageData, RawCodec};
use crate::record::{ImageRecord, ParamValue, ParameterRecord, Role, TextRecord};
use crate::Result;

/// Name of the image subdirectory under an experiment's root.
const IMAGES_DIR: &str = "images";

/// One open recording session for an experiment name.
///
/// Created by [`ExperimentStore::new_experiment`]; dropped when the caller is
/// done (there is no explicit close). Each addition is converted to a log row
/// and committed through the owning store, which flushes synchronously. The
/// in-session record lists exist for rendering convenience only; the log is
/// the source of truth.
///
/// [`ExperimentStore::new_experiment`]: super::ExperimentStore::new_experiment
pub struct Experiment {
    state: Rc<RefCell<StoreState>>,
    name: String,
    root_dir: PathBuf,
    images_dir: PathBuf,
    images: Vec<ImageRecord>,
    parameters: Vec<ParameterRecord>,
}

impl Experiment {
    /// Build a session bound to `state`, creating the experiment's root and
    /// images directories eagerly and idempotently.
    pub(crate) fn create(
        state: Rc<RefCell<StoreState>>,
        name: &str,
        data_dir: &Path,
    ) -> Result<Self> {
        let root_dir = data_dir.join(name);
        let images_dir = root_dir.join(IMAGES_DIR);
        fs::create_dir_all(&images_dir)?;

        Ok(Self {
            state,
            name: name.to_string(),
            root_dir,
            images_dir,
            images: Vec::new(),
            parameters: Vec::new(),
        })
    }

    /// Experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root directory, `<base>/experiments/<name>`.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Images directory, `<root>/images`.
    #[must_use]
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Images added during this session.
    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Parameters added during this session.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterRecord] {
        &self.parameters
    }

    /// Persist an image under the images directory and commit its row,
    /// writing the pixel data through the default byte-dump codec.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `role` is not `input` or `output`
    /// (case-insensitive); in that case no file is written and no row is
    /// committed. IO and flush failures propagate.
    pub fn add_image(
        &mut self,
        image: ImageData,
        role: &str,
        filename: &str,
        title: &str,
        description: &str,
    ) -> Result<()> {
        self.add_image_with(&RawCodec, image, role, filename, title, description)
    }

    /// Like [`add_image`](Self::add_image), with an injected codec.
    ///
    /// The file write happens before the row commit: a crash between the two
    /// leaves an orphan file, never a row referencing a missing file.
    ///
    /// # Errors
    ///
    /// Same contract as [`add_image`](Self::add_image).
    pub fn add_image_with(
        &mut self,
        codec: &dyn ImageCodec,
        image: ImageData,
        role: &str,
        filename: &str,
        title: &str,
        description: &str,
    ) -> Result<()> {
        // Validate before any side effect.
        let role: Role = role.parse()?;

        let path = self.images_dir.join(filename);
        let record = ImageRecord::new(&self.name, role, image, path, title, description);
        record.persist(codec)?;

        debug!(experiment = %self.name, filename, "image persisted");
        self.state.borrow_mut().commit_row(record.to_row())?;
        self.images.push(record);
        Ok(())
    }

    /// Record an input parameter.
    ///
    /// # Errors
    ///
    /// Propagates the commit's flush failure.
    pub fn add_input_parameter(
        &mut self,
        name: &str,
        value: impl Into<ParamValue>,
        title: &str,
        description: &str,
    ) -> Result<()> {
        self.add_parameter(Role::Input, name, value.into(), title, description)
    }

    /// Record an output parameter.
    ///
    /// # Errors
    ///
    /// Propagates the commit's flush failure.
    pub fn add_output_parameter(
        &mut self,
        name: &str,
        value: impl Into<ParamValue>,
        title: &str,
        description: &str,
    ) -> Result<()> {
        self.add_parameter(Role::Output, name, value.into(), title, description)
    }

    fn add_parameter(
        &mut self,
        role: Role,
        name: &str,
        value: ParamValue,
        title: &str,
        description: &str,
    ) -> Result<()> {
        let record = ParameterRecord::new(&self.name, role, name, value, title, description);
        self.state.borrow_mut().commit_row(record.to_row())?;
        self.parameters.push(record);
        Ok(())
    }

    /// Record a free-form note.
    ///
    /// # Errors
    ///
    /// Propagates the commit's flush failure.
    pub fn add_note(&mut self, title: &str, description: &str) -> Result<()> {
        let record = TextRecord::new(&self.name, title, description);
        self.state.borrow_mut().commit_row(record.to_row())
    }
}

#[cfg(test)]
mod tests {
    use crate::experiment::{ExperimentStore, StoreOptions};
    use crate::record::{RecordKind, Role};
    use crate::Error;

    fn image() -> crate::codec::ImageData {
        crate::codec::ImageData::new(2, 2, vec![9, 8, 7, 6])
    }

    #[test]
    fn test_session_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExperimentStore::open(dir.path(), StoreOptions::default()).unwrap();
        let session = store.new_experiment("trial-1").unwrap();

        assert!(session.root_dir().is_dir());
        assert!(session.images_dir().is_dir());
        assert!(session.root_dir().ends_with("experiments/trial-1"));
    }

    #[test]
    fn test_invalid_role_commits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExperimentStore::open(dir.path(), StoreOptions::default()).unwrap();
        let mut session = store.new_experiment("trial-1").unwrap();

        let result = session.add_image(image(), "sideways", "out.png", "t", "d");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(store.rows_for_experiment("trial-1").len(), 0);
        assert!(!session.images_dir().join("out.png").exists());
        assert!(session.images().is_empty());
    }

    #[test]
    fn test_add_image_writes_file_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExperimentStore::open(dir.path(), StoreOptions::default()).unwrap();
        let mut session = store.new_experiment("trial-1").unwrap();

        session
            .add_image(image(), "OUTPUT", "out.png", "fig1", "final frame")
            .unwrap();

        assert!(session.images_dir().join("out.png").exists());
        let rows = store.rows_for_experiment("trial-1");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind(), RecordKind::Image);
        assert_eq!(rows[0].role(), Some(Role::Output));
        assert_eq!(session.images().len(), 1);
    }

    #[test]
    fn test_parameters_round_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExperimentStore::open(dir.path(), StoreOptions::default()).unwrap();
        let mut session = store.new_experiment("trial-1").unwrap();

        session
            .add_input_parameter("lr", 0.01, "LR", "step size")
            .unwrap();
        session
            .add_output_parameter("accuracy", 0.93, "Acc", "val accuracy")
            .unwrap();

        let rows = store.rows_for_experiment("trial-1");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role(), Some(Role::Input));
        assert_eq!(rows[1].role(), Some(Role::Output));
        assert_eq!(session.parameters().len(), 2);
    }

    #[test]
    fn test_add_note_commits_text_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExperimentStore::open(dir.path(), StoreOptions::default()).unwrap();
        let mut session = store.new_experiment("trial-1").unwrap();

        session.add_note("observation", "diverged at epoch 3").unwrap();

        let rows = store.rows_for_experiment("trial-1");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind(), RecordKind::Text);
    }
}
