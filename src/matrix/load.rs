//! Document loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::DecisionMatrix;

/// Failure to produce a document from a source file. Both cases are
/// reported to the caller, never silently defaulted.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a decision matrix document.
pub fn load_matrix(path: &Path) -> Result<DecisionMatrix, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"decision": {{"statement": "s", "description": "d"}}, "options": [], "criteria": []}}"#
        )
        .unwrap();

        let matrix = load_matrix(file.path()).unwrap();
        assert_eq!(matrix.decision.statement, "s");
        assert!(matrix.options.is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_matrix(Path::new("/nonexistent/matrix.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_matrix(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }
}
