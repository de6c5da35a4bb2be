//! Variant planning and file emission for the crash test family.
//!
//! The driver walks the identifier range, derives each document pair from
//! the template, and writes every file unconditionally. All inputs arrive
//! as explicit parameters; there is no hidden shared state, so two runs
//! over the same template produce byte-identical output.

use std::{
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use crate::diagnostics::CrashgenError;
use crate::template::{self, Template};

/// Identifiers of the unconditional variant pairs.
pub const IDENTIFIERS: RangeInclusive<char> = 'a'..='o';

/// Identifier of the pair that carries the sys161 options block.
pub const ALL_IDENTIFIER: &str = "all";

/// Options block inserted into the `all` pair: runs the combined suite
/// under a sys161 RAM cap.
pub const ALL_SYS161_OPTIONS: &str = "sys161:\n  ram: 2M";

const OUTPUT_STEM: &str = "crash-";
const OUTPUT_EXT: &str = ".t";

/// Emits the crash test family derived from one template.
#[derive(Debug)]
pub struct Generator<'a> {
    template: &'a Template,
    out_dir: &'a Path,
}

impl<'a> Generator<'a> {
    pub fn new(template: &'a Template, out_dir: &'a Path) -> Generator<'a> {
        Generator { template, out_dir }
    }

    /// Generates every variant pair: one per identifier in [`IDENTIFIERS`],
    /// then the `all` pair with the RAM limit inserted.
    ///
    /// Returns the written paths in generation order. The first error aborts
    /// the remaining generation; files already written stay in place.
    pub fn generate_family(&self) -> Result<Vec<PathBuf>, CrashgenError> {
        let mut written = Vec::new();
        for id in IDENTIFIERS {
            written.extend(self.create_variant(&id.to_string(), None)?);
        }
        written.extend(self.create_variant(ALL_IDENTIFIER, Some(ALL_SYS161_OPTIONS))?);
        Ok(written)
    }

    /// Writes the two sibling files for one identifier.
    ///
    /// The primary document gets the full substitution list; the F sibling
    /// keeps the template's original suite and console entries and only
    /// renames the placeholder. Both receive the options block when given.
    pub fn create_variant(
        &self,
        id: &str,
        options: Option<&str>,
    ) -> Result<[PathBuf; 2], CrashgenError> {
        let content = template::apply_fork_substitutions(&self.template.with_identifier(id));
        let content = self.maybe_insert_options(content, options)?;
        let primary = self.write_output(id, &content)?;

        let f_id = format!("{id}F");
        let f_content = self.template.with_identifier(&f_id);
        let f_content = self.maybe_insert_options(f_content, options)?;
        let sibling = self.write_output(&f_id, &f_content)?;

        Ok([primary, sibling])
    }

    fn maybe_insert_options(
        &self,
        content: String,
        options: Option<&str>,
    ) -> Result<String, CrashgenError> {
        let Some(options) = options else {
            return Ok(content);
        };
        template::insert_options_block(&content, options)
            .ok_or_else(|| CrashgenError::separator_missing(self.template.name(), &content))
    }

    fn write_output(&self, id: &str, content: &str) -> Result<PathBuf, CrashgenError> {
        let path = self.out_dir.join(format!("{OUTPUT_STEM}{id}{OUTPUT_EXT}"));
        fs::write(&path, content).map_err(|source| CrashgenError::output_write(&path, source))?;
        Ok(path)
    }
}
