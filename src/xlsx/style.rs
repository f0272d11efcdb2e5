//! Fixed style table for the exported sheet and its styles.xml part.
//!
//! The layout only ever uses a fixed set of styles, so the component
//! tables (fonts, fills, borders, cellXfs) are static and every xf id is
//! known up front. Index 0 of each table is the mandatory default; fill
//! ids 0 and 1 must be `none` and `gray125`.

/// Style applied to one laid-out cell. The discriminant is the cellXfs
/// index written into the worksheet part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CellStyle {
    Default = 0,
    DecisionHeader = 1,
    OptionHeader = 2,
    DecisionDescription = 3,
    OptionDescription = 4,
    CriterionName = 5,
    NeutralCell = 6,
    RedCell = 7,
    YellowCell = 8,
    GreenCell = 9,
}

impl CellStyle {
    pub fn xf_id(self) -> u32 {
        self as u32
    }
}

// Fill tones (ARGB). The three assessment tones are the fixed pastel
// mapping for red/yellow/green source colors.
pub const DECISION_HEADER_FILL: &str = "FF2F5597";
pub const OPTION_HEADER_FILL: &str = "FF4472C4";
pub const DECISION_DESC_FILL: &str = "FFD9E2F3";
pub const OPTION_DESC_FILL: &str = "FFDEEBF7";
pub const CRITERIA_FILL: &str = "FFF2F2F2";
pub const RED_FILL: &str = "FFFFCCCC";
pub const YELLOW_FILL: &str = "FFFFFFCC";
pub const GREEN_FILL: &str = "FFCCFFCC";

/// Thin border tone applied to every populated cell.
pub const BORDER_COLOR: &str = "FFD9D9D9";

/// Font ids within the fonts table.
const FONT_DEFAULT: u32 = 0;
const FONT_BOLD_LIGHT: u32 = 1;
const FONT_ITALIC: u32 = 2;
const FONT_BOLD: u32 = 3;

/// Solid fills, in table order starting at fill id 2.
const SOLID_FILLS: [&str; 8] = [
    DECISION_HEADER_FILL,
    OPTION_HEADER_FILL,
    DECISION_DESC_FILL,
    OPTION_DESC_FILL,
    CRITERIA_FILL,
    RED_FILL,
    YELLOW_FILL,
    GREEN_FILL,
];

/// One cellXfs entry: font id, fill id, horizontally centered or not.
/// Every non-default xf uses the thin border and wrap/top alignment.
struct XfDef {
    font: u32,
    fill: u32,
    centered: bool,
}

/// Non-default cellXfs entries, in `CellStyle` discriminant order.
const XFS: [XfDef; 9] = [
    // DecisionHeader
    XfDef { font: FONT_BOLD_LIGHT, fill: 2, centered: false },
    // OptionHeader
    XfDef { font: FONT_BOLD_LIGHT, fill: 3, centered: true },
    // DecisionDescription
    XfDef { font: FONT_ITALIC, fill: 4, centered: false },
    // OptionDescription
    XfDef { font: FONT_DEFAULT, fill: 5, centered: false },
    // CriterionName
    XfDef { font: FONT_BOLD, fill: 6, centered: false },
    // NeutralCell (no fill override, inherits sheet default)
    XfDef { font: FONT_DEFAULT, fill: 0, centered: false },
    // RedCell
    XfDef { font: FONT_DEFAULT, fill: 7, centered: false },
    // YellowCell
    XfDef { font: FONT_DEFAULT, fill: 8, centered: false },
    // GreenCell
    XfDef { font: FONT_DEFAULT, fill: 9, centered: false },
];

/// Build the complete xl/styles.xml part.
pub fn styles_xml() -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    // Fonts: default, bold-light (headers), italic (decision description),
    // bold (criterion names).
    xml.push_str("\n    <fonts count=\"4\">");
    xml.push_str("\n        <font><sz val=\"11\"/><name val=\"Calibri\"/></font>");
    xml.push_str(
        "\n        <font><b/><sz val=\"11\"/><color rgb=\"FFFFFFFF\"/><name val=\"Calibri\"/></font>",
    );
    xml.push_str("\n        <font><i/><sz val=\"11\"/><name val=\"Calibri\"/></font>");
    xml.push_str("\n        <font><b/><sz val=\"11\"/><name val=\"Calibri\"/></font>");
    xml.push_str("\n    </fonts>");

    // Fills: the format's mandatory none + gray125 prelude, then the palette.
    xml.push_str(&format!("\n    <fills count=\"{}\">", 2 + SOLID_FILLS.len()));
    xml.push_str("\n        <fill><patternFill patternType=\"none\"/></fill>");
    xml.push_str("\n        <fill><patternFill patternType=\"gray125\"/></fill>");
    for argb in SOLID_FILLS {
        xml.push_str(&format!(
            "\n        <fill><patternFill patternType=\"solid\"><fgColor rgb=\"{argb}\"/><bgColor indexed=\"64\"/></patternFill></fill>"
        ));
    }
    xml.push_str("\n    </fills>");

    // Borders: default, then thin light-gray on all four sides.
    xml.push_str("\n    <borders count=\"2\">");
    xml.push_str("\n        <border><left/><right/><top/><bottom/><diagonal/></border>");
    xml.push_str(&format!(
        "\n        <border><left style=\"thin\"><color rgb=\"{c}\"/></left><right style=\"thin\"><color rgb=\"{c}\"/></right><top style=\"thin\"><color rgb=\"{c}\"/></top><bottom style=\"thin\"><color rgb=\"{c}\"/></bottom><diagonal/></border>",
        c = BORDER_COLOR
    ));
    xml.push_str("\n    </borders>");

    xml.push_str(
        "\n    <cellStyleXfs count=\"1\">\n        <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/>\n    </cellStyleXfs>",
    );

    xml.push_str(&format!("\n    <cellXfs count=\"{}\">", 1 + XFS.len()));
    xml.push_str("\n        <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>");
    for xf in &XFS {
        let horizontal = if xf.centered {
            " horizontal=\"center\""
        } else {
            ""
        };
        xml.push_str(&format!(
            "\n        <xf numFmtId=\"0\" fontId=\"{font}\" fillId=\"{fill}\" borderId=\"1\" xfId=\"0\" applyFont=\"1\" applyFill=\"1\" applyBorder=\"1\" applyAlignment=\"1\"><alignment{horizontal} vertical=\"top\" wrapText=\"1\"/></xf>",
            font = xf.font,
            fill = xf.fill,
        ));
    }
    xml.push_str("\n    </cellXfs>");

    xml.push_str(
        "\n    <cellStyles count=\"1\">\n        <cellStyle name=\"Normal\" xfId=\"0\" builtinId=\"0\"/>\n    </cellStyles>",
    );
    xml.push_str("\n</styleSheet>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xf_ids_are_stable() {
        assert_eq!(CellStyle::Default.xf_id(), 0);
        assert_eq!(CellStyle::DecisionHeader.xf_id(), 1);
        assert_eq!(CellStyle::OptionHeader.xf_id(), 2);
        assert_eq!(CellStyle::NeutralCell.xf_id(), 6);
        assert_eq!(CellStyle::GreenCell.xf_id(), 9);
    }

    #[test]
    fn test_styles_xml_has_fixed_tones() {
        let xml = styles_xml();
        for argb in SOLID_FILLS {
            assert!(xml.contains(argb), "missing fill tone: {argb}");
        }
        assert!(xml.contains(BORDER_COLOR));
    }

    #[test]
    fn test_styles_xml_fill_prelude() {
        let xml = styles_xml();
        let none = xml.find("patternType=\"none\"").unwrap();
        let gray = xml.find("patternType=\"gray125\"").unwrap();
        let first_solid = xml.find("patternType=\"solid\"").unwrap();
        assert!(none < gray && gray < first_solid);
    }

    #[test]
    fn test_styles_xml_counts() {
        let xml = styles_xml();
        assert!(xml.contains("<fills count=\"10\">"));
        assert!(xml.contains("<cellXfs count=\"10\">"));
        assert_eq!(xml.matches("<alignment").count(), 9);
        // Only the option header is horizontally centered.
        assert_eq!(xml.matches("horizontal=\"center\"").count(), 1);
    }

    #[test]
    fn test_assessment_tones_match_source_colors() {
        assert_eq!(RED_FILL, "FFFFCCCC");
        assert_eq!(YELLOW_FILL, "FFFFFFCC");
        assert_eq!(GREEN_FILL, "FFCCFFCC");
    }

    #[test]
    fn test_styles_xml_is_deterministic() {
        assert_eq!(styles_xml(), styles_xml());
    }
}
