//! Ordered alias configuration.
//!
//! An [`AliasMap`] maps alias names (`"@"`, `"~types"`) to absolute target
//! directories. Entries keep their insertion order, which is the tie-break when
//! several alias directories contain the same path: the first-listed alias
//! wins.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use path_clean::PathClean;

use crate::error::{AliasError, Result};

/// Ordered mapping from alias name to absolute directory.
///
/// Built once per run and then only read. Directories are normalized
/// lexically on insertion (`.` and `..` collapsed, symlinks untouched).
///
/// # Example
///
/// ```
/// use fob_alias::AliasMap;
///
/// let mut aliases = AliasMap::new();
/// aliases.insert("@", "/project/src").unwrap();
/// aliases.insert("~types", "/project/src/types").unwrap();
///
/// assert_eq!(aliases.len(), 2);
/// assert_eq!(aliases.iter().next().unwrap().0, "@");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: IndexMap<String, PathBuf>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(name, dir)` pairs, keeping their order.
    pub fn from_entries<I, N, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<Path>,
    {
        let mut map = Self::new();
        for (name, dir) in entries {
            map.insert(name, dir)?;
        }
        Ok(map)
    }

    /// Append an alias.
    ///
    /// # Errors
    ///
    /// Fails if the name is empty, already present, or would itself read as a
    /// relative specifier (`.`, `..`, `./x`), or if the directory is not
    /// absolute.
    pub fn insert(&mut self, name: impl Into<String>, dir: impl AsRef<Path>) -> Result<()> {
        let name = name.into();
        let dir = dir.as_ref();

        if name.is_empty() {
            return Err(AliasError::EmptyName);
        }
        if is_relative_name(&name) {
            return Err(AliasError::RelativeName(name));
        }
        if self.entries.contains_key(&name) {
            return Err(AliasError::Duplicate(name));
        }
        if !dir.is_absolute() {
            return Err(AliasError::RelativeTarget {
                alias: name,
                target: dir.to_path_buf(),
            });
        }

        self.entries.insert(name, dir.clean());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate aliases in the order they were defined.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, dir)| (name.as_str(), dir.as_path()))
    }

    /// Map an absolute path onto the first alias containing it.
    ///
    /// See [`resolve_alias`](crate::resolve_alias).
    pub fn resolve(&self, target: &Path) -> Option<String> {
        crate::resolver::resolve_alias(self, target)
    }
}

// `<name>/<rest>` must never start with `./` or `../`, otherwise a rewritten
// file would be rewritten again on the next run.
fn is_relative_name(name: &str) -> bool {
    name == "." || name == ".." || name.starts_with("./") || name.starts_with("../")
}

impl fmt::Display for AliasMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, dir)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} → {}", name, dir.display())?;
        }
        Ok(())
    }
}

/// A single `NAME=DIR` alias definition as written on the command line or in
/// a config file.
///
/// The directory may be relative; it is anchored with
/// [`AliasDefinition::anchor`] before going into an [`AliasMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDefinition {
    pub name: String,
    pub dir: PathBuf,
}

impl AliasDefinition {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Resolve the directory against `root`. Absolute directories are kept.
    pub fn anchor(&self, root: &Path) -> PathBuf {
        root.join(&self.dir).clean()
    }
}

impl FromStr for AliasDefinition {
    type Err = AliasError;

    /// Split at the first `=`, so directories may themselves contain `=`.
    fn from_str(s: &str) -> Result<Self> {
        let (name, dir) = s
            .split_once('=')
            .ok_or_else(|| AliasError::InvalidDefinition(s.to_string()))?;
        let (name, dir) = (name.trim(), dir.trim());

        if name.is_empty() {
            return Err(AliasError::EmptyName);
        }
        if dir.is_empty() {
            return Err(AliasError::InvalidDefinition(s.to_string()));
        }

        Ok(Self::new(name, dir))
    }
}

impl fmt::Display for AliasDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.dir.display())
    }
}
