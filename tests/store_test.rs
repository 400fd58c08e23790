//! Record store integration tests
//!
//! Exercises the uniqueness/overwrite policy, durability round-trips and the
//! report layout against a real filesystem (tempfile scratch directories).

use experiment_history::codec::ImageData;
use experiment_history::experiment::{ExperimentStore, StoreOptions};
use experiment_history::record::{RecordKind, Role};
use experiment_history::Error;

fn open(dir: &std::path::Path, overwrite: bool) -> ExperimentStore {
    let options = StoreOptions {
        overwrite_if_experiment_exists: overwrite,
    };
    ExperimentStore::open(dir, options).expect("store open failed")
}

// =============================================================================
// Uniqueness / overwrite policy
// =============================================================================

#[test]
fn test_distinct_names_never_raise_already_exists() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);

    let mut first = store.new_experiment("n1").unwrap();
    first.add_input_parameter("p", 1.0, "t", "d").unwrap();

    let mut second = store.new_experiment("n2").unwrap();
    second.add_input_parameter("q", 2.0, "t", "d").unwrap();

    assert_eq!(store.rows_for_experiment("n1").len(), 1);
    assert_eq!(store.rows_for_experiment("n2").len(), 1);
}

#[test]
fn test_reopening_committed_name_fails_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);

    let mut session = store.new_experiment("x").unwrap();
    session.add_input_parameter("p", 1.0, "t", "d").unwrap();

    let result = store.new_experiment("x");
    assert!(matches!(result, Err(Error::AlreadyExists(_))));
}

#[test]
fn test_overwrite_purges_prior_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), true);

    let mut session = store.new_experiment("x").unwrap();
    session.add_input_parameter("old", 1.0, "t", "d").unwrap();
    session.add_input_parameter("older", 2.0, "t", "d").unwrap();
    drop(session);

    let mut session = store.new_experiment("x").unwrap();
    session.add_input_parameter("new", 3.0, "t", "d").unwrap();

    let rows = store.rows_for_experiment("x");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].parameter_name(), Some("new"));
}

#[test]
fn test_overwrite_purge_is_flushed_before_new_rows() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = open(dir.path(), false);
        let mut session = store.new_experiment("x").unwrap();
        session.add_input_parameter("old", 1.0, "t", "d").unwrap();
    }

    {
        // Reopen with overwrite and purge, committing nothing afterwards.
        let store = open(dir.path(), true);
        let _session = store.new_experiment("x").unwrap();
    }

    // A fresh load must not see the purged rows: the purge itself hit disk.
    let store = open(dir.path(), false);
    assert!(store.rows_for_experiment("x").is_empty());
}

#[test]
fn test_uncommitted_name_does_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);

    // No rows committed for "x" yet, so a second session is allowed.
    let _first = store.new_experiment("x").unwrap();
    assert!(store.new_experiment("x").is_ok());
}

// =============================================================================
// Durability round-trips
// =============================================================================

#[test]
fn test_reload_preserves_rows_and_order() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = open(dir.path(), false);
        let mut session = store.new_experiment("trial").unwrap();
        for i in 0..5 {
            session
                .add_input_parameter(&format!("p{i}"), f64::from(i), "t", "d")
                .unwrap();
        }
        session.add_note("note", "free text").unwrap();
    }

    let store = open(dir.path(), false);
    let rows = store.rows_for_experiment("trial");
    assert_eq!(rows.len(), 6);
    for (i, row) in rows.iter().take(5).enumerate() {
        assert_eq!(row.parameter_name(), Some(format!("p{i}").as_str()));
    }
    assert_eq!(rows[5].kind(), RecordKind::Text);
}

#[test]
fn test_reload_preserves_row_fields() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = open(dir.path(), false);
        let mut session = store.new_experiment("trial").unwrap();
        session
            .add_output_parameter("accuracy", 0.93, "Acc", "validation accuracy")
            .unwrap();
    }

    let store = open(dir.path(), false);
    let rows = store.rows_for_experiment("trial");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].role(), Some(Role::Output));
    assert_eq!(rows[0].parameter_value(), Some("0.93"));
    assert_eq!(rows[0].value_type(), Some("number"));
    assert_eq!(rows[0].title(), "Acc");
}

// =============================================================================
// Image side effects
// =============================================================================

#[test]
fn test_invalid_role_writes_no_file_and_no_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);
    let mut session = store.new_experiment("trial").unwrap();

    let image = ImageData::new(1, 1, vec![255]);
    let result = session.add_image(image, "sideways", "img.raw", "t", "d");

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(store.rows_for_experiment("trial").is_empty());
    assert!(!session.images_dir().join("img.raw").exists());
}

#[test]
fn test_image_file_lands_in_images_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);
    let mut session = store.new_experiment("trial").unwrap();

    let image = ImageData::new(2, 1, vec![1, 2]);
    session
        .add_image(image, "input", "frame.raw", "fig", "first frame")
        .unwrap();

    let expected = dir
        .path()
        .join("experiments")
        .join("trial")
        .join("images")
        .join("frame.raw");
    assert!(expected.exists());

    let rows = store.rows_for_experiment("trial");
    assert_eq!(rows[0].filename(), Some(expected.to_string_lossy().as_ref()));
}

// =============================================================================
// Report rendering
// =============================================================================

#[test]
fn test_report_written_to_experiment_root() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);
    let mut session = store.new_experiment("trial").unwrap();
    session
        .add_input_parameter("lr", 0.001, "LR", "step size")
        .unwrap();

    let path = store.render_report("trial").unwrap();
    assert_eq!(
        path,
        dir.path().join("experiments").join("trial").join("trial.md")
    );

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# trial"));
    assert!(content.contains("Parameter Name"));
    assert!(content.contains("lr"));
}

#[test]
fn test_render_report_trims_name_like_new_experiment() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);
    let mut session = store.new_experiment("  trial  ").unwrap();
    session
        .add_input_parameter("lr", 0.001, "LR", "step size")
        .unwrap();

    let path = store.render_report(" trial ").unwrap();
    assert_eq!(
        path,
        dir.path().join("experiments").join("trial").join("trial.md")
    );
}

#[test]
fn test_report_embeds_image_references() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path(), false);
    let mut session = store.new_experiment("trial").unwrap();

    let image = ImageData::new(1, 1, vec![0]);
    session
        .add_image(image, "output", "result.raw", "fig1", "final result")
        .unwrap();

    let path = store.render_report("trial").unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("![alt text][fig1]"));
    assert!(content.contains("\"final result\""));
}
