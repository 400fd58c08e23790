//! Experiment Store - append-only log with uniqueness over experiment names

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::session::Experiment;
use crate::report;
use crate::storage::{ExperimentLog, LogRow};
use crate::{Error, Result};

/// Name of the log file under the base directory.
const LOG_FILE: &str = "experiments.csv";

/// Name of the per-experiment data directory under the base directory.
const DATA_DIR: &str = "experiments";

/// Extension of rendered reports.
const REPORT_EXT: &str = "md";

/// Store configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Reopening an existing experiment name purges its prior rows instead
    /// of failing with `AlreadyExists`. Defaults to false.
    pub overwrite_if_experiment_exists: bool,
}

/// Shared state behind the store and its session handles.
///
/// Single-threaded by design: one process, one store instance per log file,
/// no overlap between a commit and a read of the same store.
pub(crate) struct StoreState {
    log_path: PathBuf,
    data_dir: PathBuf,
    log: ExperimentLog,
    options: StoreOptions,
}

impl StoreState {
    /// Append one row and flush the whole log synchronously. This is the
    /// durability boundary: the row is durable only once this returns Ok.
    ///
    /// On a flush failure the in-memory log is ahead of the on-disk log;
    /// the caller must retry the whole commit, not just the flush.
    pub(crate) fn commit_row(&mut self, row: LogRow) -> Result<()> {
        debug!(
            experiment = row.experiment(),
            kind = ?row.kind(),
            "committing row"
        );
        self.log.append(row);
        self.log.save(&self.log_path)
    }

    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Append-only record store over a single tabular log file.
///
/// Loads `<base>/experiments.csv` on open when both the log file and the
/// `<base>/experiments/` data directory exist; otherwise starts empty and
/// creates the data directory. Every commit rewrites the log file wholesale.
pub struct ExperimentStore {
    state: Rc<RefCell<StoreState>>,
}

impl ExperimentStore {
    /// Open a store rooted at `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the data directory does not exist and cannot be
    /// created (a non-recoverable startup error), or a log file error if the
    /// existing log cannot be loaded.
    pub fn open<P: AsRef<Path>>(base_dir: P, options: StoreOptions) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let log_path = base_dir.join(LOG_FILE);
        let data_dir = base_dir.join(DATA_DIR);

        let log = if log_path.exists() && data_dir.exists() {
            let log = ExperimentLog::load(&log_path)?;
            info!(rows = log.len(), path = %log_path.display(), "loaded experiment log");
            log
        } else {
            fs::create_dir_all(&data_dir)?;
            info!(path = %data_dir.display(), "initialized empty experiment store");
            ExperimentLog::new()
        };

        Ok(Self {
            state: Rc::new(RefCell::new(StoreState {
                log_path,
                data_dir,
                log,
                options,
            })),
        })
    }

    /// Start a new recording session for `name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` trims to empty, `AlreadyExists`
    /// if the log already holds rows for `name` and overwrite is not
    /// enabled, or `Io`/`Csv` if the overwrite purge cannot be flushed or
    /// the session's directories cannot be created.
    pub fn new_experiment(&self, name: &str) -> Result<Experiment> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "a new experiment needs a non-empty name".to_string(),
            ));
        }

        let data_dir = {
            let mut state = self.state.borrow_mut();
            if state.log.contains_experiment(name) {
                if !state.options.overwrite_if_experiment_exists {
                    return Err(Error::AlreadyExists(name.to_string()));
                }
                // The purge is itself a flushed operation: no mixture of old
                // and new rows for this name can survive a crash after this
                // point.
                let removed = state.log.purge(name);
                let log_path = state.log_path.clone();
                state.log.save(&log_path)?;
                warn!(experiment = name, removed, "overwrote existing experiment");
            }
            state.data_dir().to_path_buf()
        };

        info!(experiment = name, "starting new experiment session");
        Experiment::create(Rc::clone(&self.state), name, &data_dir)
    }

    /// Append one row and flush the whole log synchronously.
    ///
    /// # Errors
    ///
    /// Propagates the flush failure; see [`StoreState::commit_row`] for the
    /// retry contract.
    pub fn commit_row(&self, row: LogRow) -> Result<()> {
        self.state.borrow_mut().commit_row(row)
    }

    /// The ordered subsequence of log rows recorded for `name`.
    #[must_use]
    pub fn rows_for_experiment(&self, name: &str) -> Vec<LogRow> {
        self.state
            .borrow()
            .log
            .rows_for(name)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Total number of rows in the log.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.state.borrow().log.len()
    }

    /// Render the named experiment's rows as a markdown report written to
    /// `<base>/experiments/<name>/<name>.md`. Returns the report path. The
    /// name is trimmed the same way [`new_experiment`](Self::new_experiment)
    /// trims it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no rows exist for `name`, or `Io` if the
    /// report file cannot be written.
    pub fn render_report(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        let rows = self.rows_for_experiment(name);
        if rows.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "no rows recorded for experiment '{name}'"
            )));
        }

        let document = report::build_document(name, &rows)?;
        let report_path = self
            .state
            .borrow()
            .data_dir()
            .join(name)
            .join(format!("{name}.{REPORT_EXT}"));

        let mut rendered = document.render()?;
        rendered.push('\n');
        fs::write(&report_path, rendered)?;
        info!(experiment = name, path = %report_path.display(), "wrote report");
        Ok(report_path)
    }
}
