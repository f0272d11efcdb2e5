//! OOXML package writer.
//!
//! Emits the minimal part set for a single-sheet workbook. Parts are
//! built as strings and streamed into the zip archive; cell text goes in
//! as inline strings so no shared-strings table is needed.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

use crate::matrix::DecisionMatrix;

use super::grid::{GridCell, LABEL_COLUMN_WIDTH, OPTION_COLUMN_WIDTH, SheetGrid};
use super::style::{self, CellStyle};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Decision Matrix";

/// Failure to write the spreadsheet file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to assemble workbook: {0}")]
    Zip(#[from] ZipError),
}

/// Render the matrix to a spreadsheet at `out_path`, replacing any
/// existing file. The archive is written to a sibling temp file first and
/// renamed over the target, so a failed pass never leaves a truncated
/// spreadsheet behind.
pub fn export_xlsx(matrix: &DecisionMatrix, out_path: &Path) -> Result<(), RenderError> {
    let grid = SheetGrid::from_matrix(matrix);
    let tmp_path = tmp_sibling(out_path);

    let result = write_package(&grid, &tmp_path).and_then(|()| {
        fs::rename(&tmp_path, out_path).map_err(|source| RenderError::Io {
            path: out_path.to_path_buf(),
            source,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

fn write_package(grid: &SheetGrid, path: &Path) -> Result<(), RenderError> {
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    let parts: [(&str, String); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/styles.xml", style::styles_xml()),
        ("xl/worksheets/sheet1.xml", worksheet_xml(grid)),
    ];

    for (name, content) in parts {
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes()).map_err(io_err)?;
    }

    zip.finish()?;
    Ok(())
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
        escape_xml(SHEET_NAME)
    )
}

fn worksheet_xml(grid: &SheetGrid) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    // Fixed column widths: narrow label column, uniform option columns.
    content.push_str("\n    <cols>");
    content.push_str(&format!(
        "\n        <col min=\"1\" max=\"1\" width=\"{LABEL_COLUMN_WIDTH}\" customWidth=\"1\"/>"
    ));
    if grid.option_columns > 0 {
        content.push_str(&format!(
            "\n        <col min=\"2\" max=\"{}\" width=\"{OPTION_COLUMN_WIDTH}\" customWidth=\"1\"/>",
            1 + grid.option_columns
        ));
    }
    content.push_str("\n    </cols>");

    content.push_str("\n    <sheetData>");
    for (row_idx, row) in grid.rows.iter().enumerate() {
        content.push_str(&format!("\n        <row r=\"{}\">", row_idx + 1));
        for (col_idx, cell) in row.iter().enumerate() {
            write_cell(&mut content, row_idx, col_idx, cell);
        }
        content.push_str("\n        </row>");
    }
    content.push_str("\n    </sheetData>\n</worksheet>");
    content
}

/// Write one `<c>` element. Empty cells still carry their style so the
/// fill and border render; non-empty text goes in as an inline string.
fn write_cell(content: &mut String, row: usize, col: usize, cell: &GridCell) {
    let cell_ref = cell_reference(row, col);
    let style_attr = match cell.style {
        CellStyle::Default => String::new(),
        style => format!(" s=\"{}\"", style.xf_id()),
    };

    if cell.text.is_empty() {
        content.push_str(&format!("\n            <c r=\"{cell_ref}\"{style_attr}/>"));
    } else {
        content.push_str(&format!(
            "\n            <c r=\"{cell_ref}\"{style_attr} t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
            escape_xml(&cell.text)
        ));
    }
}

/// A1-style reference for a zero-based (row, col) pair.
fn cell_reference(row: usize, col: usize) -> String {
    let mut letters = String::new();
    let mut n = col;
    loop {
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    format!("{letters}{}", row + 1)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
