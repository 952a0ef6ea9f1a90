//! Rewriting relative import specifiers into alias specifiers.

use std::path::Path;

use path_clean::PathClean;
use tracing::debug;

use crate::alias_map::AliasMap;
use crate::scanner::{ImportKind, RegexScanner, SpecifierScanner};

/// A single specifier substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub kind: ImportKind,
    pub original: String,
    pub replacement: String,
}

/// Outcome of rewriting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// Rewritten text, or the original text when nothing changed.
    pub text: String,
    /// `true` iff at least one specifier was replaced.
    pub modified: bool,
    /// Substitutions in source order.
    pub rewrites: Vec<Rewrite>,
}

impl RewriteResult {
    fn unchanged(source: &str) -> Self {
        Self {
            text: source.to_string(),
            modified: false,
            rewrites: Vec::new(),
        }
    }
}

/// `./x` and `../x` are relative; everything else (bare packages, existing
/// aliases, absolute paths, URLs) is left alone.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Rewrites relative imports of one file at a time.
///
/// The rewriter holds no per-file state, so one instance can be reused for a
/// whole tree. Output is a fixed point: rewritten specifiers are alias
/// specifiers, which are never relative, so a second pass changes nothing.
///
/// # Example
///
/// ```
/// use fob_alias::{AliasMap, ImportRewriter};
/// use std::path::Path;
///
/// let aliases = AliasMap::from_entries([("@", "/p/src")]).unwrap();
/// let rewriter = ImportRewriter::new(&aliases);
///
/// let result = rewriter.rewrite(
///     Path::new("/p/src/components/Btn.tsx"),
///     r#"import { fmt } from "../utils/fmt";"#,
/// );
///
/// assert!(result.modified);
/// assert_eq!(result.text, r#"import { fmt } from "@/utils/fmt";"#);
/// ```
#[derive(Debug, Clone)]
pub struct ImportRewriter<'a, S = RegexScanner> {
    aliases: &'a AliasMap,
    scanner: S,
}

impl<'a> ImportRewriter<'a> {
    pub fn new(aliases: &'a AliasMap) -> Self {
        Self::with_scanner(aliases, RegexScanner)
    }
}

impl<'a, S: SpecifierScanner> ImportRewriter<'a, S> {
    /// Use a custom specifier scanner instead of [`RegexScanner`].
    pub fn with_scanner(aliases: &'a AliasMap, scanner: S) -> Self {
        Self { aliases, scanner }
    }

    pub fn aliases(&self) -> &AliasMap {
        self.aliases
    }

    /// Rewrite every relative specifier in `source` that resolves into an
    /// alias directory.
    ///
    /// `file_path` is the absolute path of the file `source` was read from;
    /// relative specifiers are resolved against its parent directory. Only
    /// the specifier text is replaced: quotes and the rest of the import
    /// construct are copied through untouched.
    pub fn rewrite(&self, file_path: &Path, source: &str) -> RewriteResult {
        let base = file_path.parent().unwrap_or_else(|| Path::new(""));

        let mut text = String::with_capacity(source.len());
        let mut rewrites = Vec::new();
        let mut cursor = 0;

        for found in self.scanner.scan(source) {
            // Overlapping matches from a misbehaving scanner are dropped.
            if found.specifier.start < cursor || found.specifier.end > source.len() {
                continue;
            }

            let specifier = found.specifier(source);
            let Some(replacement) = self.alias_for(base, specifier) else {
                continue;
            };

            debug!(
                file = %file_path.display(),
                from = specifier,
                to = %replacement,
                "rewriting import"
            );

            text.push_str(&source[cursor..found.specifier.start]);
            text.push_str(&replacement);
            cursor = found.specifier.end;

            rewrites.push(Rewrite {
                kind: found.kind,
                original: specifier.to_string(),
                replacement,
            });
        }

        if rewrites.is_empty() {
            return RewriteResult::unchanged(source);
        }

        text.push_str(&source[cursor..]);
        RewriteResult {
            text,
            modified: true,
            rewrites,
        }
    }

    fn alias_for(&self, base: &Path, specifier: &str) -> Option<String> {
        if !is_relative_specifier(specifier) {
            return None;
        }

        let target = base.join(specifier).clean();
        self.aliases.resolve(&target)
    }
}

/// Rewrite one file's text with the default scanner.
///
/// Shorthand for `ImportRewriter::new(aliases).rewrite(file_path, source)`.
pub fn rewrite(file_path: &Path, source: &str, aliases: &AliasMap) -> RewriteResult {
    ImportRewriter::new(aliases).rewrite(file_path, source)
}
