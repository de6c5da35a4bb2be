//! Template loading and the textual substitution rules.
//!
//! A [`Template`] is an immutable text blob read once from disk. Every
//! generated document is derived from it by an ordered list of literal
//! substring replacements plus an optional line-indexed insertion; nothing
//! here parses the configuration format itself.

use std::{fs, path::Path};

use crate::diagnostics::CrashgenError;

/// Separator line that delimits the configuration header of a document.
pub const SEPARATOR: &str = "---";

/// Placeholder token the identifier substitution rewrites.
const IDENTIFIER_ANCHOR: &str = "-template";

// Ordered rewrite rules for the non-F variants. Each one is an
// all-occurrence replacement and a silent no-op when its anchor is absent.
const CRASH_SUITE_ANCHOR: &str = ", crash]";
const CRASH_SUITE_FORK: &str = ", crash-fork]";
const CONSOLE_ANCHOR: &str = "[console]";
const CONSOLE_WITH_FORKTEST: &str = "[console, /asst2/process/forktest.t]";

/// The source configuration text all variants are derived from, paired with
/// its display name for diagnostics.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Filename read from the working directory when no override is given.
    pub const DEFAULT_FILENAME: &'static str = "crash-template";

    /// Reads the template from disk. A missing or unreadable file is fatal.
    pub fn load(path: &Path) -> Result<Template, CrashgenError> {
        let content = fs::read_to_string(path)
            .map_err(|source| CrashgenError::template_read(path, source))?;
        Ok(Template {
            name: path.display().to_string(),
            content,
        })
    }

    /// Builds a template from in-memory text.
    pub fn from_parts(name: impl Into<String>, content: impl Into<String>) -> Template {
        Template {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces every `-template` placeholder with `-<id>`.
    pub fn with_identifier(&self, id: &str) -> String {
        self.content
            .replace(IDENTIFIER_ANCHOR, &format!("-{id}"))
    }
}

/// Rewrites the crash suite reference to its forking sibling and attaches
/// the forktest dependency to the console entry. Skipped for F-variants.
pub fn apply_fork_substitutions(content: &str) -> String {
    content
        .replace(CRASH_SUITE_ANCHOR, CRASH_SUITE_FORK)
        .replace(CONSOLE_ANCHOR, CONSOLE_WITH_FORKTEST)
}

/// Inserts `options` (surrounding whitespace trimmed) as a new line
/// immediately after the first separator line found past line 0.
///
/// Splitting on `'\n'` keeps a trailing empty segment, so a final newline
/// survives the rejoin. Returns `None` when no separator exists past the
/// first line; a separator on line 0 alone does not count.
pub fn insert_options_block(content: &str, options: &str) -> Option<String> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let idx = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == SEPARATOR)?
        + 1;
    lines.insert(idx + 1, options.trim());
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_substitution_replaces_every_occurrence() {
        let t = Template::from_parts("t", "crash-template\nruns crash-template again\n");
        assert_eq!(t.with_identifier("c"), "crash-c\nruns crash-c again\n");
    }

    #[test]
    fn identifier_substitution_without_anchor_is_a_no_op() {
        let t = Template::from_parts("t", "no placeholder here\n");
        assert_eq!(t.with_identifier("c"), "no placeholder here\n");
    }

    #[test]
    fn fork_substitutions_rewrite_suite_and_console() {
        let out = apply_fork_substitutions("tags: [stability, crash]\n[console]\n");
        assert_eq!(
            out,
            "tags: [stability, crash-fork]\n[console, /asst2/process/forktest.t]\n"
        );
    }

    #[test]
    fn fork_substitutions_without_anchors_are_a_no_op() {
        let out = apply_fork_substitutions("tags: [other]\nno console entry\n");
        assert_eq!(out, "tags: [other]\nno console entry\n");
    }

    #[test]
    fn options_block_lands_immediately_after_the_separator() {
        let out = insert_options_block("header\n---\nbody\n", "sys161:\n  ram: 2M").unwrap();
        assert_eq!(out, "header\n---\nsys161:\n  ram: 2M\nbody\n");
    }

    #[test]
    fn options_are_trimmed_before_insertion() {
        let out = insert_options_block("header\n---\nbody", "\nram: 2M\n").unwrap();
        assert_eq!(out, "header\n---\nram: 2M\nbody");
    }

    #[test]
    fn separator_on_line_zero_does_not_count() {
        assert!(insert_options_block("---\nbody\n", "x").is_none());
    }

    #[test]
    fn second_separator_is_found_when_the_document_opens_with_one() {
        let out = insert_options_block("---\nkey: value\n---\nbody", "x").unwrap();
        assert_eq!(out, "---\nkey: value\n---\nx\nbody");
    }

    #[test]
    fn separator_match_ignores_surrounding_whitespace() {
        let out = insert_options_block("header\n  ---  \nbody", "x").unwrap();
        assert_eq!(out, "header\n  ---  \nx\nbody");
    }

    #[test]
    fn missing_separator_yields_none() {
        assert!(insert_options_block("header\nbody\n", "x").is_none());
    }
}
