//! Write the generated unit to the generated-sources root.

use crate::emitter::GeneratedUnit;
use glux_core::{GluxError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The file on disk already had identical contents.
    Unchanged(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(p) | Self::Unchanged(p) => p,
        }
    }
}

/// Get the path the unit is written to below `output_root`.
pub fn unit_path(output_root: &Path, unit: &GeneratedUnit) -> PathBuf {
    output_root.join(unit.relative_path())
}

/// Render and write the unit, creating parent directories as needed.
///
/// Content goes to a temporary file next to the target and is renamed into
/// place, so a failed write never leaves a partial file behind.
pub fn write_unit(output_root: &Path, unit: &GeneratedUnit) -> Result<WriteOutcome> {
    let path = unit_path(output_root, unit);
    let content = unit.render();
    let io_err = |source: std::io::Error| GluxError::EmissionIo {
        path: path.clone(),
        source,
    };

    if fs::read(&path).is_ok_and(|existing| existing == content.as_bytes()) {
        return Ok(WriteOutcome::Unchanged(path));
    }

    let dir = path.parent().unwrap_or(output_root);
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(&path).map_err(|e| io_err(e.error))?;

    Ok(WriteOutcome::Written(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::GeneratedUnit;
    use glux_core::config::OutputConfig;
    use glux_core::model::{DeclarationKind, DeclarationSite, FontAsset, GenerationRequest};

    fn unit() -> GeneratedUnit {
        let request = GenerationRequest {
            package_name: "com.example.app".to_string(),
            site: DeclarationSite {
                file: PathBuf::from("App.java"),
                line: 1,
                kind: DeclarationKind::Class,
                name: Some("App".to_string()),
            },
        };
        let assets = vec![FontAsset {
            file_name: "Roboto-Regular.ttf".to_string(),
            identifier: "ROBOTO_REGULAR".to_string(),
            asset_path: "fonts/Roboto-Regular.ttf".to_string(),
        }];
        GeneratedUnit::build(&request, &assets, &OutputConfig::default())
    }

    #[test]
    fn test_write_creates_package_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = write_unit(tmp.path(), &unit()).unwrap();
        let expected = tmp.path().join("com/example/app/font/Font.java");
        assert_eq!(outcome, WriteOutcome::Written(expected.clone()));
        let written = fs::read_to_string(&expected).unwrap();
        assert_eq!(written, unit().render());
    }

    #[test]
    fn test_second_write_is_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        write_unit(tmp.path(), &unit()).unwrap();
        let outcome = write_unit(tmp.path(), &unit()).unwrap();
        assert!(matches!(outcome, WriteOutcome::Unchanged(_)));
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let tmp = tempfile::tempdir().unwrap();
        write_unit(tmp.path(), &unit()).unwrap();
        let dir = tmp.path().join("com/example/app/font");
        let entries: Vec<_> = fs::read_dir(dir).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_unwritable_root_is_emission_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("out");
        fs::write(&blocker, b"not a directory").unwrap();
        let err = write_unit(&blocker, &unit()).unwrap_err();
        assert!(matches!(err, GluxError::EmissionIo { .. }));
    }
}
