//! The crashgen command-line interface.
//!
//! This module is the entry point for the binary: it parses arguments,
//! drives the generator, and renders any diagnostic before exiting
//! non-zero.

use std::{path::PathBuf, process};

use clap::Parser;
use miette::Report;

use crate::cli::args::CrashgenArgs;
use crate::diagnostics::CrashgenError;
use crate::generator::Generator;
use crate::template::Template;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = CrashgenArgs::parse();

    match generate(&args) {
        Ok(written) => output::report_generated(&args.template, &written, args.verbose),
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
            process::exit(1);
        }
    }
}

/// Loads the template and emits the full variant family.
fn generate(args: &CrashgenArgs) -> Result<Vec<PathBuf>, CrashgenError> {
    let template = Template::load(&args.template)?;
    Generator::new(&template, &args.out_dir).generate_family()
}
