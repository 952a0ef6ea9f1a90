//! Import specifier extraction.
//!
//! Scanning is pattern based (no AST). [`SpecifierScanner`] is the seam
//! between extraction and rewriting, so a parser-backed scanner can replace
//! [`RegexScanner`] without touching alias resolution.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Syntactic shape a specifier was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import x from "…"`, `import "…"`
    Static,
    /// `import("…")`
    Dynamic,
    /// `require("…")`
    Require,
}

/// One import construct found in source text.
///
/// Both ranges are byte offsets into the scanned text; `specifier` lies
/// inside `construct` and excludes the quote characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierMatch {
    pub kind: ImportKind,
    pub construct: Range<usize>,
    pub specifier: Range<usize>,
}

impl SpecifierMatch {
    /// The quoted module string, verbatim.
    pub fn specifier<'a>(&self, source: &'a str) -> &'a str {
        &source[self.specifier.clone()]
    }

    /// The whole matched construct.
    pub fn construct<'a>(&self, source: &'a str) -> &'a str {
        &source[self.construct.clone()]
    }
}

/// Extracts import specifiers from source text.
///
/// Implementations must return non-overlapping matches ordered by position
/// and must not fail: text that does not look like an import is skipped.
pub trait SpecifierScanner {
    fn scan(&self, source: &str) -> Vec<SpecifierMatch>;
}

// Alternatives are tried leftmost-first: `import(` must win over the static
// form at the same offset. Specifiers never span lines. A dynamic import may
// carry an options argument (`import("./x.json", { with: ... })`), so its
// construct ends at the first `,` or `)` after the string.
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"\bimport\s*\(\s*['"](?P<dynamic>[^'"\n]+)['"]\s*[,)]"#,
        r#"|\bimport\s+(?:[^'"]+\s+from\s+)?['"](?P<static>[^'"\n]+)['"]"#,
        r#"|\brequire\s*\(\s*['"](?P<require>[^'"\n]+)['"]\s*\)"#,
    ))
    .expect("import pattern is a valid regex")
});

/// Regex-backed scanner recognizing static imports, dynamic `import()` and
/// `require()` calls with single- or double-quoted specifiers.
///
/// # Example
///
/// ```
/// use fob_alias::{ImportKind, RegexScanner, SpecifierScanner};
///
/// let source = r#"import a from "./a"; const b = require('../b');"#;
/// let found: Vec<_> = RegexScanner
///     .scan(source)
///     .into_iter()
///     .map(|m| (m.kind, m.specifier(source).to_string()))
///     .collect();
///
/// assert_eq!(
///     found,
///     vec![
///         (ImportKind::Static, "./a".to_string()),
///         (ImportKind::Require, "../b".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexScanner;

impl SpecifierScanner for RegexScanner {
    fn scan(&self, source: &str) -> Vec<SpecifierMatch> {
        IMPORT_PATTERN
            .captures_iter(source)
            .filter_map(|caps| {
                let construct = caps.get(0)?.range();
                let (kind, specifier) = [
                    (ImportKind::Dynamic, "dynamic"),
                    (ImportKind::Static, "static"),
                    (ImportKind::Require, "require"),
                ]
                .into_iter()
                .find_map(|(kind, group)| caps.name(group).map(|m| (kind, m.range())))?;

                Some(SpecifierMatch {
                    kind,
                    construct,
                    specifier,
                })
            })
            .collect()
    }
}
