//! Experiment Tracking Example
//!
//! Records a small experiment (parameters, an image, a note) and renders its
//! markdown report.
//!
//! Run with: cargo run --example track_experiment

use anyhow::Result;
use experiment_history::codec::ImageData;
use experiment_history::experiment::{ExperimentStore, StoreOptions};

fn main() -> Result<()> {
    experiment_history::logging::init();

    println!("=== experiment-history tracking ===\n");

    let options = StoreOptions {
        overwrite_if_experiment_exists: true,
    };
    let store = ExperimentStore::open(".", options)?;

    // -------------------------------------------------------------------------
    // 1. Start a session and record inputs
    // -------------------------------------------------------------------------
    println!("1. Recording inputs...");

    let mut session = store.new_experiment("resnet-sweep-3")?;
    session.add_input_parameter("learning_rate", 0.001, "LR", "optimizer step size")?;
    session.add_input_parameter("batch_size", 32, "Batch", "samples per step")?;
    session.add_input_parameter("optimizer", "adam", "Optimizer", "")?;

    // -------------------------------------------------------------------------
    // 2. Record outputs
    // -------------------------------------------------------------------------
    println!("2. Recording outputs...");

    session.add_output_parameter("accuracy", 0.93, "Acc", "validation accuracy")?;

    let gradient = ImageData::new(4, 1, vec![0, 85, 170, 255]);
    session.add_image(gradient, "output", "gradient.raw", "fig1", "sample gradient")?;

    session.add_note("observation", "validation accuracy plateaued after epoch 7")?;

    // -------------------------------------------------------------------------
    // 3. Render the report
    // -------------------------------------------------------------------------
    println!("3. Rendering report...");

    let report = store.render_report("resnet-sweep-3")?;
    println!("   {} rows logged", store.row_count());
    println!("   report at {}", report.display());

    Ok(())
}
