pub mod build;
pub mod completions;
pub mod contrast;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::ProjectFile;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// dtok - Design token compiler
#[derive(Parser, Debug)]
#[command(name = "dtok")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log generator decisions to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a token file to CSS custom properties
    Build(build::BuildArgs),

    /// Validate a token file without generating output
    Validate(validate::ValidateArgs),

    /// Check lightness separation between background and foreground colours
    CheckContrast(contrast::ContrastArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load a project file, reporting it on the status line.
fn load_project(path: &Path, printer: &Printer) -> Result<ProjectFile> {
    printer.status("Loading", &display_path(path));
    ProjectFile::load(path)
}
