//! Tree-sitter based marker discovery for glux.
//!
//! Walks the configured Java source roots and extracts every occurrence of the
//! marker annotation together with the declaration it decorates and its
//! `packageName` attribute. Validation of the occurrences happens in `glux-gen`.

pub mod markers;
pub mod sources;
pub mod treesitter;

use glux_core::Result;
use glux_core::config::TriggerConfig;
use glux_core::model::MarkerOccurrence;
use std::path::Path;

/// Scan every Java source under the configured roots for marker occurrences.
///
/// Results are ordered by file path, then line.
pub fn scan_project(project_root: &Path, config: &TriggerConfig) -> Result<Vec<MarkerOccurrence>> {
    let files = sources::collect_java_sources(project_root, &config.source_dirs, &config.exclude)?;
    tracing::debug!("scanning {} Java files for @{}", files.len(), config.marker);

    let mut occurrences = Vec::new();
    for (path, source) in &files {
        occurrences.extend(markers::find_markers(path, source, &config.marker)?);
    }
    occurrences.sort_by(|a, b| {
        a.site
            .file
            .cmp(&b.site.file)
            .then(a.site.line.cmp(&b.site.line))
    });
    Ok(occurrences)
}
