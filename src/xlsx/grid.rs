//! Tabular layout: document model to styled rows.

use crate::matrix::{CellColor, DecisionMatrix};

use super::style::CellStyle;

/// Width of the first (decision/criteria) column.
pub const LABEL_COLUMN_WIDTH: u32 = 25;
/// Uniform width of every option column.
pub const OPTION_COLUMN_WIDTH: u32 = 30;

/// One laid-out cell: text plus the style it renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub text: String,
    pub style: CellStyle,
}

impl GridCell {
    fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// The fully laid-out sheet: rows top to bottom, each row's cells left to
/// right. Row 0 is the header, row 1 the descriptions, then one row per
/// criterion in document order.
#[derive(Debug)]
pub struct SheetGrid {
    pub rows: Vec<Vec<GridCell>>,
    pub option_columns: usize,
}

impl SheetGrid {
    /// Lay out a document. Criterion cells are looked up per option
    /// label; labels the criterion does not score render as empty neutral
    /// cells, and cell entries for unknown labels are silently ignored.
    pub fn from_matrix(matrix: &DecisionMatrix) -> Self {
        let columns = 1 + matrix.options.len();
        let mut rows = Vec::with_capacity(2 + matrix.criteria.len());

        let mut header = Vec::with_capacity(columns);
        header.push(GridCell::new(
            &matrix.decision.statement,
            CellStyle::DecisionHeader,
        ));
        for option in &matrix.options {
            header.push(GridCell::new(&option.label, CellStyle::OptionHeader));
        }
        rows.push(header);

        let mut descriptions = Vec::with_capacity(columns);
        descriptions.push(GridCell::new(
            &matrix.decision.description,
            CellStyle::DecisionDescription,
        ));
        for option in &matrix.options {
            descriptions.push(GridCell::new(
                &option.description,
                CellStyle::OptionDescription,
            ));
        }
        rows.push(descriptions);

        for criterion in &matrix.criteria {
            let mut row = Vec::with_capacity(columns);
            row.push(GridCell::new(&criterion.name, CellStyle::CriterionName));
            for option in &matrix.options {
                let cell = criterion.cells.get(&option.label);
                let text = cell.map(|c| c.text.clone()).unwrap_or_default();
                let style = match cell.and_then(|c| c.color) {
                    Some(CellColor::Red) => CellStyle::RedCell,
                    Some(CellColor::Yellow) => CellStyle::YellowCell,
                    Some(CellColor::Green) => CellStyle::GreenCell,
                    None => CellStyle::NeutralCell,
                };
                row.push(GridCell::new(text, style));
            }
            rows.push(row);
        }

        Self {
            rows,
            option_columns: matrix.options.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Cell, Criterion, Decision, OptionEntry};
    use std::collections::HashMap;

    fn option(label: &str, description: &str) -> OptionEntry {
        OptionEntry {
            label: label.into(),
            description: description.into(),
        }
    }

    fn cell(text: &str, color: Option<CellColor>) -> Cell {
        Cell {
            text: text.into(),
            color,
        }
    }

    fn pick_db() -> DecisionMatrix {
        DecisionMatrix {
            decision: Decision {
                statement: "Pick DB".into(),
                description: "ctx".into(),
            },
            options: vec![option("A", "a"), option("B", "b")],
            criteria: vec![Criterion {
                name: "Cost".into(),
                cells: HashMap::from([
                    ("A".into(), cell("cheap", Some(CellColor::Green))),
                    ("B".into(), cell("pricey", Some(CellColor::Red))),
                ]),
            }],
        }
    }

    #[test]
    fn test_shape() {
        let matrix = pick_db();
        let grid = SheetGrid::from_matrix(&matrix);
        assert_eq!(grid.rows.len(), 2 + matrix.criteria.len());
        for row in &grid.rows {
            assert_eq!(row.len(), 1 + matrix.options.len());
        }
    }

    #[test]
    fn test_pick_db_layout() {
        let grid = SheetGrid::from_matrix(&pick_db());

        let texts: Vec<Vec<&str>> = grid
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.text.as_str()).collect())
            .collect();
        assert_eq!(texts[0], ["Pick DB", "A", "B"]);
        assert_eq!(texts[1], ["ctx", "a", "b"]);
        assert_eq!(texts[2], ["Cost", "cheap", "pricey"]);

        assert_eq!(grid.rows[2][1].style, CellStyle::GreenCell);
        assert_eq!(grid.rows[2][2].style, CellStyle::RedCell);
    }

    #[test]
    fn test_header_and_description_styles() {
        let grid = SheetGrid::from_matrix(&pick_db());
        assert_eq!(grid.rows[0][0].style, CellStyle::DecisionHeader);
        assert_eq!(grid.rows[0][1].style, CellStyle::OptionHeader);
        assert_eq!(grid.rows[1][0].style, CellStyle::DecisionDescription);
        assert_eq!(grid.rows[1][2].style, CellStyle::OptionDescription);
        assert_eq!(grid.rows[2][0].style, CellStyle::CriterionName);
    }

    #[test]
    fn test_empty_document_two_rows() {
        let matrix = DecisionMatrix {
            decision: Decision {
                statement: "s".into(),
                description: "d".into(),
            },
            options: vec![],
            criteria: vec![],
        };
        let grid = SheetGrid::from_matrix(&matrix);
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0].len(), 1);
        assert_eq!(grid.option_columns, 0);
    }

    #[test]
    fn test_missing_cell_is_empty_neutral() {
        let mut matrix = pick_db();
        matrix.criteria[0].cells.remove("B");

        let grid = SheetGrid::from_matrix(&matrix);
        assert_eq!(grid.rows[2][2].text, "");
        assert_eq!(grid.rows[2][2].style, CellStyle::NeutralCell);
    }

    #[test]
    fn test_unknown_label_is_inert() {
        let mut matrix = pick_db();
        matrix.criteria[0]
            .cells
            .insert("Ghost".into(), cell("ignored", Some(CellColor::Yellow)));

        let grid = SheetGrid::from_matrix(&matrix);
        // Still one label column plus two option columns, nothing extra.
        assert_eq!(grid.rows[2].len(), 3);
        assert!(grid.rows[2].iter().all(|c| c.text != "ignored"));
    }

    #[test]
    fn test_neutral_cell_without_color() {
        let mut matrix = pick_db();
        matrix.criteria[0].cells.insert("A".into(), cell("ok", None));

        let grid = SheetGrid::from_matrix(&matrix);
        assert_eq!(grid.rows[2][1].text, "ok");
        assert_eq!(grid.rows[2][1].style, CellStyle::NeutralCell);
    }
}
