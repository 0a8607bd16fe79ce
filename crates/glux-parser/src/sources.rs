//! Java source discovery under the configured source roots.

use glux_core::{GluxError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

fn build_exclude_set(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for p in patterns {
        let glob = Glob::new(p)
            .map_err(|e| GluxError::SourceScan(format!("invalid exclude glob '{p}': {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| GluxError::SourceScan(format!("invalid exclude glob set: {e}")))
}

/// Collect `*.java` files below each source root, as (project-relative path, contents).
///
/// Hidden files and `.gitignore`d paths are skipped, as are paths matching an
/// exclude glob. Missing roots contribute nothing. The result is sorted by path.
pub fn collect_java_sources(
    project_root: &Path,
    source_dirs: &[PathBuf],
    exclude: &[String],
) -> Result<Vec<(PathBuf, String)>> {
    let exclude_set = build_exclude_set(exclude)?;
    let mut files = Vec::new();

    for dir in source_dirs {
        let root = project_root.join(dir);
        if !root.is_dir() {
            tracing::debug!("source root {} does not exist, skipping", root.display());
            continue;
        }

        let walker = ignore::WalkBuilder::new(&root)
            .hidden(true)
            .git_ignore(true)
            .require_git(false)
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("java") {
                continue;
            }
            let rel_path = path.strip_prefix(project_root).unwrap_or(path);
            if let Some(ref exc) = exclude_set
                && exc.is_match(rel_path)
            {
                continue;
            }

            match std::fs::read_to_string(path) {
                Ok(source) => files.push((rel_path.to_path_buf(), source)),
                Err(e) => tracing::info!("skipping unreadable source {}: {}", path.display(), e),
            }
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    files.dedup_by(|a, b| a.0 == b.0);
    Ok(files)
}
