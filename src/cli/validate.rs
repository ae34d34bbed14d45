use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::validation::check;

/// Validate a token file without generating output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Token files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    for file in &args.files {
        let project = super::load_project(file, printer)?;
        let checked = check(&project.tokens)?;
        printer.success(
            "Valid",
            &format!(
                "{} ({})",
                display_path(file),
                plural(checked.family_count(), "family", "families")
            ),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_valid_files_pass() {
        let dir = TempDir::new().unwrap();
        let yaml = write(
            &dir,
            "a.yaml",
            "borderWidth:\n  modes:\n    - name: default\n      tokens: { unit: px, value: 1 }\n",
        );
        let json = write(&dir, "b.json", "{}");

        let args = ValidateArgs {
            files: vec![yaml, json],
        };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_stops_at_first_invalid_file() {
        let dir = TempDir::new().unwrap();
        let bad = write(
            &dir,
            "bad.yaml",
            "color:\n  alpha: { lo: 1.5 }\n  modes:\n    - name: light\n      tokens: {}\n",
        );

        let args = ValidateArgs { files: vec![bad] };
        let err = run(args, &Printer::new()).unwrap_err();
        assert_eq!(err.path(), Some("color.alpha.lo"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let args = ValidateArgs {
            files: vec![dir.path().join("missing.yaml")],
        };
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, crate::error::DtokError::Io { .. }));
    }
}
