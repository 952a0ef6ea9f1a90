//! Alias resolution: map an absolute path onto an alias specifier.

use std::path::Path;

use path_clean::PathClean;
use tracing::trace;

use crate::alias_map::AliasMap;

/// Resolve an absolute path to an alias specifier (e.g.
/// `/project/src/utils/fmt` → `@/utils/fmt`).
///
/// Aliases are tried in definition order and the first one whose directory
/// contains `target` wins, so with `@ → /p/src` listed before
/// `~sub → /p/src/sub`, `/p/src/sub/a` resolves to `@/sub/a`.
///
/// Containment is tested on whole path components: `/p/src2` is not inside
/// `/p/src`. A path equal to an alias directory resolves to `"<alias>/"`.
/// The returned specifier always uses `/` separators.
///
/// Returns `None` when no alias directory contains the path.
pub fn resolve_alias(aliases: &AliasMap, target: &Path) -> Option<String> {
    let target = target.clean();

    for (name, dir) in aliases.iter() {
        let Ok(rest) = target.strip_prefix(dir) else {
            continue;
        };

        let relative = rest
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let specifier = format!("{name}/{relative}").replace('\\', "/");

        trace!(path = %target.display(), alias = name, %specifier, "resolved alias");
        return Some(specifier);
    }

    trace!(path = %target.display(), "no alias contains path");
    None
}
