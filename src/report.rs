//! Report renderer
//!
//! Turns an experiment's stored rows into a markdown document: a header, one
//! reference-style image per image row, a parameter table, and a paragraph
//! per text row.

use crate::markdown::{
    Document, Emphasis, EmphasisKind, Header, HeaderLevel, ImageRef, Table, Text,
};
use crate::record::RecordKind;
use crate::storage::LogRow;
use crate::Result;

/// Parameter table column headers, in order.
const PARAMETER_COLUMNS: [&str; 5] =
    ["Parameter Name", "Input/Output", "Value", "Title", "Description"];

/// Build the report document for `name` from its filtered log rows.
///
/// One table row per parameter record, one image reference per image record,
/// one emphasized-title paragraph per text record, all in row order.
///
/// # Errors
///
/// Returns `InvalidArgument` if a malformed row carries more table values
/// than columns (not produced by this crate's record types).
pub fn build_document(name: &str, rows: &[LogRow]) -> Result<Document> {
    let mut document = Document::new();
    document.add_header(Header::new(HeaderLevel::H1, name));
    document.add_rule();

    let mut table = Table::new(PARAMETER_COLUMNS.map(String::from).to_vec())?;

    for row in rows {
        match row.kind() {
            RecordKind::Image => {
                if let Some(filename) = row.filename() {
                    document.add_image(ImageRef::new(row.title(), filename, row.description()));
                }
            }
            RecordKind::Parameter => {
                let role = row.role().map(|r| r.to_string()).unwrap_or_default();
                table.add_row(vec![
                    row.parameter_name().unwrap_or_default().to_string(),
                    role,
                    row.parameter_value().unwrap_or_default().to_string(),
                    row.title().to_string(),
                    row.description().to_string(),
                ])?;
            }
            RecordKind::Text => {
                document.add_emphasis(Emphasis::new(EmphasisKind::Bold, row.title()));
                document.add_text(Text::from(row.description()));
            }
        }
    }

    document.add_table(table);
    Ok(document)
}
