//! Lazy traversal of candidate source files under a project root.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Walks a project tree and yields files whose extension is in the configured
/// set, skipping excluded directory names.
///
/// Directory symlinks are not followed. Symlinks that point at regular files
/// are yielded like regular files. Siblings are visited in file-name order.
///
/// ```no_run
/// use fob_alias_cli::walk::SourceWalker;
///
/// let walker = SourceWalker::new("/project")
///     .extensions(["ts", "tsx"])
///     .exclude(["node_modules"]);
///
/// for path in walker.walk().flatten() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SourceWalker {
    root: PathBuf,
    extensions: Vec<String>,
    exclude: Vec<String>,
}

impl SourceWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Extensions to accept, with or without the leading dot.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Directory names to skip entirely.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a new traversal.
    ///
    /// Errors for unreadable entries are yielded in place; the walk continues
    /// past them.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) if self.is_source_file(&entry) => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            })
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude.iter().any(|excluded| excluded == name))
    }

    fn is_source_file(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());

        is_file && has_source_extension(entry.path(), &self.extensions)
    }
}

/// Whether `path` ends in one of `extensions` (given without the dot).
pub fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn collect(walker: &SourceWalker) -> Vec<String> {
        walker
            .walk()
            .map(|path| {
                path.unwrap()
                    .strip_prefix(walker.root())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_has_source_extension() {
        let exts = vec!["ts".to_string(), "tsx".to_string()];
        assert!(has_source_extension(Path::new("a/b.ts"), &exts));
        assert!(has_source_extension(Path::new("b.tsx"), &exts));
        assert!(!has_source_extension(Path::new("b.d"), &exts));
        assert!(!has_source_extension(Path::new("Makefile"), &exts));
        assert!(!has_source_extension(Path::new("b.TS"), &exts));
    }

    #[test]
    fn test_walk_filters_extensions_and_sorts() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/b.ts");
        touch(temp.path(), "src/a.tsx");
        touch(temp.path(), "src/c.css");
        touch(temp.path(), "README.md");

        let walker = SourceWalker::new(temp.path()).extensions([".ts", "tsx"]);
        assert_eq!(collect(&walker), vec!["src/a.tsx", "src/b.ts"]);
    }

    #[test]
    fn test_walk_skips_excluded_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "node_modules/pkg/index.js");
        touch(temp.path(), "src/node_modules.js");
        touch(temp.path(), "src/index.js");

        let walker = SourceWalker::new(temp.path())
            .extensions(["js"])
            .exclude(["node_modules"]);
        assert_eq!(collect(&walker), vec!["src/index.js", "src/node_modules.js"]);
    }

    #[test]
    fn test_excluded_name_as_root_is_still_walked() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "dist/index.js");

        let walker = SourceWalker::new(temp.path().join("dist"))
            .extensions(["js"])
            .exclude(["dist"]);
        assert_eq!(collect(&walker), vec!["index.js"]);
    }

    #[test]
    fn test_walk_is_restartable_from_the_walker() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.ts");

        let walker = SourceWalker::new(temp.path()).extensions(["ts"]);
        assert_eq!(walker.walk().count(), 1);
        assert_eq!(walker.walk().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_yields_error_for_unreadable_directory_and_continues() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/locked/x.ts");
        touch(temp.path(), "b/y.ts");
        let locked = temp.path().join("a/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let walker = SourceWalker::new(temp.path()).extensions(["ts"]);
        let results: Vec<_> = walker.walk().collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert!(results[1].as_ref().unwrap().ends_with("b/y.ts"));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_symlinks() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "real/a.ts");
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("linked_dir"))
            .unwrap();
        std::os::unix::fs::symlink(temp.path().join("real/a.ts"), temp.path().join("b.ts"))
            .unwrap();

        let walker = SourceWalker::new(temp.path()).extensions(["ts"]);
        assert_eq!(collect(&walker), vec!["b.ts", "real/a.ts"]);
    }
}
