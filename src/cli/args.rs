//! Defines the command-line arguments for the crashgen CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. Invoked with no
//! arguments, the tool reads `crash-template` from the working directory and
//! writes the generated family next to it.

use clap::Parser;
use std::path::PathBuf;

use crate::template::Template;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "crashgen",
    version,
    about = "Generates the crash stability test family for the test161 harness."
)]
pub struct CrashgenArgs {
    /// Path to the template file.
    #[arg(long, default_value = Template::DEFAULT_FILENAME)]
    pub template: PathBuf,

    /// Directory the generated files are written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print each generated file.
    #[arg(short, long)]
    pub verbose: bool,
}
