//! Font file name parsing: `FontFamily-Style.ext` → constant name + asset path.

use glux_core::diagnostics::DiagnosticSink;
use glux_core::model::FontAsset;
use glux_core::{GluxError, Result, java};
use std::collections::HashMap;
use std::path::Path;

/// Parse one file name into a [`FontAsset`].
///
/// The name must split on `.` into exactly two non-empty segments. The stem is
/// upper-cased with `-` replaced by `_` to form the constant name.
pub fn parse_font_name(file_name: &str, path_prefix: &str) -> Result<FontAsset> {
    let invalid = |reason: String| GluxError::InvalidAssetName {
        file_name: file_name.to_string(),
        reason,
    };

    let segments: Vec<&str> = file_name.split('.').collect();
    let [stem, extension] = segments.as_slice() else {
        return Err(invalid(format!(
            "expected 2 dot-separated segments, found {}",
            segments.len()
        )));
    };
    if stem.is_empty() || extension.is_empty() {
        return Err(invalid("empty name or extension".to_string()));
    }

    let identifier = stem.replace('-', "_").to_uppercase();
    if !java::is_identifier(&identifier) {
        return Err(invalid(format!(
            "{identifier} is not a valid Java identifier"
        )));
    }

    Ok(FontAsset {
        file_name: file_name.to_string(),
        identifier,
        asset_path: format!("{}/{}", path_prefix.trim_end_matches('/'), file_name),
    })
}

/// Parse every font file in `dir`, sorted by file name.
///
/// Hidden entries and subdirectories are skipped with a note. Two files that
/// map to the same constant name are rejected.
pub fn read_font_assets(
    dir: &Path,
    path_prefix: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<FontAsset>> {
    let unreadable = |e: std::io::Error| GluxError::AssetDirectoryUnresolvable {
        path: dir.to_path_buf(),
        reason: format!("not readable: {e}"),
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let raw_name = entry.file_name();
        let Some(name) = raw_name.to_str() else {
            return Err(GluxError::InvalidAssetName {
                file_name: raw_name.to_string_lossy().into_owned(),
                reason: "file name is not valid UTF-8".to_string(),
            });
        };
        if name.starts_with('.') {
            sink.note(format!("skipping hidden file {name}"));
            continue;
        }
        if entry.path().is_dir() {
            sink.note(format!("skipping subdirectory {name}"));
            continue;
        }
        names.push(name.to_string());
    }
    names.sort();

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut assets = Vec::with_capacity(names.len());
    for name in names {
        let asset = parse_font_name(&name, path_prefix)?;
        if let Some(first) = seen.get(&asset.identifier) {
            return Err(GluxError::DuplicateIdentifier {
                identifier: asset.identifier,
                first: first.clone(),
                second: name,
            });
        }
        seen.insert(asset.identifier.clone(), name);
        assets.push(asset);
    }

    tracing::debug!("parsed {} font assets in {}", assets.len(), dir.display());
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_regular_font() {
        let asset = parse_font_name("Roboto-Regular.ttf", "fonts").unwrap();
        assert_eq!(asset.identifier, "ROBOTO_REGULAR");
        assert_eq!(asset.asset_path, "fonts/Roboto-Regular.ttf");
        assert_eq!(asset.file_name, "Roboto-Regular.ttf");
    }

    #[test]
    fn test_parse_multi_hyphen_and_prefix_slash() {
        let asset = parse_font_name("Open-Sans-Bold-Italic.otf", "fonts/").unwrap();
        assert_eq!(asset.identifier, "OPEN_SANS_BOLD_ITALIC");
        assert_eq!(asset.asset_path, "fonts/Open-Sans-Bold-Italic.otf");
    }

    #[test]
    fn test_three_segments_rejected() {
        let err = parse_font_name("Roboto.Regular.ttf", "fonts").unwrap_err();
        assert!(matches!(err, GluxError::InvalidAssetName { .. }));
        assert!(err.to_string().contains("Roboto.Regular.ttf"));
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_no_extension_rejected() {
        let err = parse_font_name("Roboto", "fonts").unwrap_err();
        assert!(err.to_string().contains("Roboto"));
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(parse_font_name("Roboto.", "fonts").is_err());
        assert!(parse_font_name(".ttf", "fonts").is_err());
    }

    #[test]
    fn test_parse_unicode_stems() {
        let asset = parse_font_name("Café-Bold.ttf", "fonts").unwrap();
        assert_eq!(asset.identifier, "CAFÉ_BOLD");
        assert_eq!(asset.asset_path, "fonts/Café-Bold.ttf");
        let asset = parse_font_name("Noto-日本.otf", "fonts").unwrap();
        assert_eq!(asset.identifier, "NOTO_日本");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_name_rejected() {
        use glux_core::diagnostics::Diagnostics;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"Rob\xffoto-Regular.ttf");
        std::fs::write(tmp.path().join(raw), b"").unwrap();

        let err = read_font_assets(tmp.path(), "fonts", &mut Diagnostics::new()).unwrap_err();
        match err {
            GluxError::InvalidAssetName { file_name, reason } => {
                assert_eq!(file_name, "Rob\u{fffd}oto-Regular.ttf");
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_identifier_rejected() {
        let err = parse_font_name("8bit-Regular.ttf", "fonts").unwrap_err();
        assert!(err.to_string().contains("8BIT_REGULAR"));
        assert!(parse_font_name("Roboto Regular.ttf", "fonts").is_err());
    }
}
