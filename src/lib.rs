//! # experiment-history: append-only experiment tracking with markdown reports
//!
//! Records structured experiments (named collections of input/output
//! parameters and images) to a durable tabular log, and renders a chosen
//! experiment as a markdown report embedding tables, images and text.
//!
//! Two core pieces:
//!
//! - the **record store** ([`experiment::ExperimentStore`]): an append-only
//!   log with uniqueness/overwrite semantics over experiment names, flushed
//!   to disk on every commit;
//! - the **document model** ([`markdown::Document`]): composable renderable
//!   elements (tables, lists, images, links, text) with the formatting
//!   algorithms used to materialize a report.
//!
//! ## Example
//!
//! ```rust,no_run
//! use experiment_history::experiment::{ExperimentStore, StoreOptions};
//!
//! experiment_history::logging::init();
//!
//! let store = ExperimentStore::open(".", StoreOptions::default())?;
//! let mut session = store.new_experiment("resnet-sweep-3")?;
//! session.add_input_parameter("learning_rate", 0.001, "LR", "step size")?;
//! session.add_output_parameter("accuracy", 0.93, "Acc", "validation accuracy")?;
//! let report = store.render_report("resnet-sweep-3")?;
//! println!("report at {}", report.display());
//! # Ok::<(), experiment_history::Error>(())
//! ```
//!
//! Single-threaded and synchronous by design: one process owns a given log
//! file, and every store operation runs to completion before returning.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod codec;
pub mod error;
pub mod experiment;
pub mod logging;
pub mod markdown;
pub mod record;
pub mod report;
pub mod storage;

pub use error::{Error, Result};
