//! Styled XLSX export for decision matrices.
//!
//! The export is a pure transform: document in, one spreadsheet file out.
//! `grid` lays the document out as styled rows, `style` holds the fixed
//! style table, `writer` assembles the OOXML package.

mod grid;
mod style;
mod writer;

pub use writer::export_xlsx;

use std::path::{Path, PathBuf};

/// Spreadsheet extension produced by the exporter.
const XLSX_EXT: &str = "xlsx";

/// Derive the spreadsheet output path from the source document path.
///
/// A recognized `.json` extension is replaced; anything else gets the
/// spreadsheet extension appended.
pub fn xlsx_output_path(source: &Path) -> PathBuf {
    let is_json = source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        source.with_extension(XLSX_EXT)
    } else {
        let mut os = source.as_os_str().to_os_string();
        os.push(".");
        os.push(XLSX_EXT);
        PathBuf::from(os)
    }
}
