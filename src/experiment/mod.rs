//! Experiment record store and session handles
//!
//! [`ExperimentStore`] owns the append-only log and enforces the
//! experiment-name uniqueness/overwrite policy. [`Experiment`] is the
//! per-name recording session it hands out: additions flow through the
//! session into the store, and every committed row is flushed to disk before
//! the call returns.
//!
//! ```rust,no_run
//! use experiment_history::experiment::{ExperimentStore, StoreOptions};
//!
//! let store = ExperimentStore::open(".", StoreOptions::default())?;
//! let mut session = store.new_experiment("trial-1")?;
//! session.add_input_parameter("learning_rate", 0.001, "LR", "step size")?;
//! store.render_report("trial-1")?;
//! # Ok::<(), experiment_history::Error>(())
//! ```

mod session;
mod store;

pub use session::Experiment;
pub use store::{ExperimentStore, StoreOptions};
