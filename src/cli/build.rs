//! Build command implementation.
//!
//! Loads a token file, generates the IR and writes CSS (or the IR itself as
//! JSON) to a file or stdout.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::color::ColorFormat;
use crate::error::{DtokError, Result};
use crate::generator::generate;
use crate::output::{display_path, plural, Printer};
use crate::transform::to_css;

/// Compile a token file to CSS custom properties
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Token file (YAML or JSON)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Colour encoding, overriding the file's `options.colorFormat`
    #[arg(long, value_enum)]
    pub color_format: Option<ColorFormat>,

    /// Selector for the base block, overriding `options.selectors.root`
    #[arg(long)]
    pub root_selector: Option<String>,

    /// Emit the intermediate representation as JSON instead of CSS
    #[arg(long)]
    pub ir: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut project = super::load_project(&args.file, printer)?;

    if let Some(format) = args.color_format {
        project.options.color_format = format;
    }
    if let Some(root) = args.root_selector {
        project.options.selectors.root = root;
    }

    let ir = generate(&project.tokens, &project.options)?;
    printer.status(
        "Generated",
        &format!(
            "{} ({} override {})",
            plural(ir.len(), "token", "tokens"),
            ir.override_tokens.len(),
            if ir.override_tokens.len() == 1 { "mode" } else { "modes" }
        ),
    );

    let mut rendered = if args.ir {
        serde_json::to_string_pretty(&ir).map_err(|e| DtokError::Internal {
            message: format!("IR serialization failed: {}", e),
        })?
    } else {
        to_css(&ir, &project.options.selectors)
    };
    rendered.push('\n');

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DtokError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(path, &rendered).map_err(|e| DtokError::Io {
                path: path.clone(),
                message: format!("Failed to write output: {}", e),
            })?;
            printer.success("Finished", &format!("wrote {}", display_path(path)));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TOKENS: &str = r#"
spacing:
  modes:
    - name: default
      isDefault: true
      tokens: { unit: px, base: 8, min: 4, range: 2 }
color:
  modes:
    - name: light
      tokens:
        bg: { l: 1, c: 0, h: 0 }
    - name: dark
      tokens:
        bg: { l: 0, c: 0, h: 0 }
"#;

    fn args(dir: &TempDir, content: &str) -> BuildArgs {
        let file = dir.path().join("tokens.yaml");
        fs::write(&file, content).unwrap();
        BuildArgs {
            file,
            output: Some(dir.path().join("dist/tokens.css")),
            color_format: None,
            root_selector: None,
            ir: false,
        }
    }

    #[test]
    fn test_build_writes_css() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, TOKENS);
        let output = args.output.clone().unwrap();

        run(args, &Printer::new()).unwrap();

        let css = fs::read_to_string(output).unwrap();
        assert!(css.starts_with(":root {\n  --clr-bg: oklch(1 0 0);\n"));
        assert!(css.contains("  --sp-2: 16px;\n"));
        assert!(css.contains("[data-color-mode=\"dark\"] {\n  --clr-bg: oklch(0 0 0);\n}"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_flags_override_file_options() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, TOKENS);
        args.color_format = Some(ColorFormat::Hex);
        args.root_selector = Some("html".to_string());
        let output = args.output.clone().unwrap();

        run(args, &Printer::new()).unwrap();

        let css = fs::read_to_string(output).unwrap();
        assert!(css.starts_with("html {\n  --clr-bg: #ffffff;\n"));
    }

    #[test]
    fn test_ir_output_is_json() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, TOKENS);
        args.ir = true;
        let output = args.output.clone().unwrap();

        run(args, &Printer::new()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["tokens"]["sp-1"]["value"], "8px");
        assert_eq!(json["modes"]["color"]["overrides"][0], "dark");
    }

    #[test]
    fn test_invalid_file_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let args = args(
            &dir,
            "spacing:\n  modes:\n    - name: default\n      tokens: { unit: px, base: 8, min: 4, range: 0 }\n",
        );
        let output = args.output.clone().unwrap();

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(err.is_validation());
        assert!(!output.exists());
    }
}
