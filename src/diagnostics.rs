//! Unified, `miette`-based diagnostics for the generator.
//!
//! Every failure mode of the pipeline is represented by one variant of
//! [`CrashgenError`]. All errors are fatal: the generator stops at the first
//! one and leaves any files it has already written in place.

use std::{fmt, io, path::PathBuf, sync::Arc};

use miette::{Diagnostic, NamedSource, SourceCode};
use thiserror::Error;

/// Shared source handle for diagnostics that display the searched document.
pub type SourceArc = Arc<NamedSource<String>>;

/// Unified error type for all generator failure modes.
#[derive(Debug, Error)]
pub enum CrashgenError {
    /// The template file is missing or unreadable.
    #[error("failed to read template '{path}'", path = .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An options block was requested but the document has no separator
    /// line past the header.
    #[error("no '---' separator line found past the first line of '{name}'")]
    SeparatorMissing { name: String, src: SourceArc },
    /// A generated file could not be written.
    #[error("failed to write '{path}'", path = .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CrashgenError {
    pub fn template_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CrashgenError::TemplateRead {
            path: path.into(),
            source,
        }
    }

    /// Builds a `SeparatorMissing` diagnostic that renders the document the
    /// separator was searched in.
    pub fn separator_missing(name: &str, searched: &str) -> Self {
        CrashgenError::SeparatorMissing {
            name: name.to_string(),
            src: Arc::new(NamedSource::new(name, searched.to_string())),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CrashgenError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

impl Diagnostic for CrashgenError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            CrashgenError::TemplateRead { .. } => "crashgen::template_read",
            CrashgenError::SeparatorMissing { .. } => "crashgen::separator_missing",
            CrashgenError::OutputWrite { .. } => "crashgen::output_write",
        };
        Some(Box::new(code) as Box<dyn fmt::Display + 'a>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            CrashgenError::TemplateRead { .. } => {
                "the generator expects a 'crash-template' file in the working directory; \
                 pass --template to point it elsewhere"
            }
            CrashgenError::SeparatorMissing { .. } => {
                "options blocks are inserted after the first '---' line following the header; \
                 add a separator line to the template"
            }
            CrashgenError::OutputWrite { .. } => return None,
        };
        Some(Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            CrashgenError::SeparatorMissing { src, .. } => Some(src.as_ref() as &dyn SourceCode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Report;

    use super::*;

    #[test]
    fn separator_missing_renders_code_and_help() {
        let err = CrashgenError::separator_missing("crash-template", "header\nbody\n");
        let report = Report::new(err);
        let output = format!("{report:?}");
        assert!(output.contains("crashgen::separator_missing"));
        assert!(output.contains("separator"));
    }

    #[test]
    fn template_read_chains_the_io_cause() {
        let cause = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = CrashgenError::template_read("crash-template", cause);
        let report = Report::new(err);
        let output = format!("{report:?}");
        assert!(output.contains("failed to read template"));
        assert!(output.contains("no such file"));
    }
}
