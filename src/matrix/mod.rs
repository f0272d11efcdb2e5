//! Decision matrix document model.
//!
//! The document is a value: loaded fresh from disk on every use, consumed
//! by the exporter or the HTTP endpoint, then discarded. There is no
//! caching and no diffing against a previous version.

mod load;
mod resolve;

pub use load::load_matrix;
pub use resolve::resolve_file;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A decision matrix: one decision, the options under consideration, and
/// a set of criteria scored per option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionMatrix {
    pub decision: Decision,
    /// Display order (spreadsheet columns, left to right).
    pub options: Vec<OptionEntry>,
    /// Display order (spreadsheet rows, top to bottom).
    pub criteria: Vec<Criterion>,
}

/// The question being decided and its framing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub statement: String,
    pub description: String,
}

/// One candidate option. `label` is the join key into criterion cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionEntry {
    pub label: String,
    pub description: String,
}

/// One row of assessments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    /// Assessment per option label. Labels the criterion does not score
    /// render as empty neutral cells; keys matching no option are inert.
    #[serde(default)]
    pub cells: HashMap<String, Cell>,
}

/// One criterion-by-option assessment entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<CellColor>,
}

/// Semantic cell colors. Anything else in the source document is treated
/// as neutral rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    Red,
    Yellow,
    Green,
}

impl CellColor {
    /// Case-insensitive color name lookup; unknown names map to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            _ => None,
        }
    }
}

fn lenient_color<'de, D>(de: D) -> Result<Option<CellColor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(CellColor::parse))
}
