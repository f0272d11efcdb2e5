//! Source file resolution at startup.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Conventional directory scanned when no file argument is given.
pub const DECISIONS_DIR: &str = ".decisions";

/// Startup file-resolution failure. Fatal: the process exits 1.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(
        "no decision matrix file found; pass a file argument or create one in ./{DECISIONS_DIR}/"
    )]
    NoFile,
    #[error("file not found: {0}")]
    NotFound(PathBuf),
}

/// Resolve the source document: the explicit argument, or the first
/// `.json` file (lexicographic, for a stable pick) under `./.decisions/`.
pub fn resolve_file(arg: Option<&Path>) -> Result<PathBuf, ResolveError> {
    let path = match arg {
        Some(p) => p.to_path_buf(),
        None => find_default_file(Path::new(DECISIONS_DIR)).ok_or(ResolveError::NoFile)?,
    };
    if !path.is_file() {
        return Err(ResolveError::NotFound(path));
    }
    Ok(path)
}

fn find_default_file(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
