//! The load-and-export pass.

use anyhow::Result;

use crate::matrix::load_matrix;
use crate::xlsx::export_xlsx;

use super::ServeContext;

/// One full pass: parse the source document and rewrite the spreadsheet.
pub fn refresh(ctx: &ServeContext) -> Result<()> {
    let matrix = load_matrix(&ctx.source)?;
    export_xlsx(&matrix, &ctx.output)?;
    Ok(())
}

/// Run a pass and report the outcome on the watch status line.
pub fn refresh_and_report(ctx: &ServeContext) {
    match refresh(ctx) {
        Ok(()) => {
            crate::logger::status_success(&format!("exported {}", ctx.output.display()));
        }
        Err(e) => {
            let detail: Vec<String> = e.chain().skip(1).map(|c| format!("  {c}")).collect();
            crate::logger::status_error(&e.to_string(), &detail.join("\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn ctx(dir: &Path) -> ServeContext {
        ServeContext {
            source: dir.join("db.json"),
            output: dir.join("db.xlsx"),
        }
    }

    #[test]
    fn test_refresh_writes_spreadsheet() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("db.json"),
            r#"{
                "decision": {"statement": "s", "description": "d"},
                "options": [{"label": "A", "description": "a"}],
                "criteria": []
            }"#,
        )
        .unwrap();

        let ctx = ctx(dir.path());
        refresh(&ctx).unwrap();
        assert!(ctx.output.is_file());
    }

    #[test]
    fn test_refresh_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(dir.path());
        assert!(refresh(&ctx).is_err());
        assert!(!ctx.output.exists());
    }

    #[test]
    fn test_refresh_parse_error_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("db.json"),
            r#"{
                "decision": {"statement": "s", "description": "d"},
                "options": [],
                "criteria": []
            }"#,
        )
        .unwrap();

        let ctx = ctx(dir.path());
        refresh(&ctx).unwrap();
        let first = fs::read(&ctx.output).unwrap();

        fs::write(&ctx.source, "{ not json").unwrap();
        assert!(refresh(&ctx).is_err());
        assert_eq!(fs::read(&ctx.output).unwrap(), first);
    }
}
