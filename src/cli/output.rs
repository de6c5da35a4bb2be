//! Handles all user-facing output for the CLI.
//!
//! Centralizing the reporting here keeps the terminal experience consistent:
//! generated files are listed in verbose mode and the run always ends with a
//! single colored summary line.

use std::path::{Path, PathBuf};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints the generation report for a successful run.
pub fn report_generated(template: &Path, written: &[PathBuf], verbose: bool) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    if verbose {
        for path in written {
            println!("  {}", path.display());
        }
    }

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    println!("Generated {} files from {}", written.len(), template.display());
    let _ = stdout.reset();
}
