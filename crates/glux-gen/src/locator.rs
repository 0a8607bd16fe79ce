//! Resolve the font asset directory.

use glux_core::config::AssetsConfig;
use glux_core::{GluxError, Result};
use std::path::{Path, PathBuf};

/// Conventional fonts directory of an Android module.
pub const FONTS_SUBDIR: &str = "src/main/assets/fonts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    /// The fonts directory itself.
    Explicit(PathBuf),
    /// Climb `levels` parents from `anchor` to reach the module root, then
    /// descend into [`FONTS_SUBDIR`].
    Anchored { anchor: PathBuf, levels: usize },
}

impl AssetLocation {
    /// Pick the lookup mode from config: explicit `dir` wins over `anchor`,
    /// and with neither the module's conventional fonts directory is used.
    pub fn from_config(project_root: &Path, config: &AssetsConfig) -> Self {
        if let Some(dir) = &config.dir {
            Self::Explicit(project_root.join(dir))
        } else if let Some(anchor) = &config.anchor {
            Self::Anchored {
                anchor: project_root.join(anchor),
                levels: config.anchor_levels,
            }
        } else {
            Self::Explicit(project_root.join(FONTS_SUBDIR))
        }
    }

    /// Resolve to an existing, readable directory.
    pub fn resolve(&self) -> Result<PathBuf> {
        let dir = match self {
            Self::Explicit(dir) => dir.clone(),
            Self::Anchored { anchor, levels } => {
                let anchor = std::fs::canonicalize(anchor).map_err(|e| {
                    GluxError::AssetDirectoryUnresolvable {
                        path: anchor.clone(),
                        reason: format!("anchor is not accessible: {e}"),
                    }
                })?;
                let mut root = anchor.as_path();
                for climbed in 0..*levels {
                    root = root
                        .parent()
                        .ok_or_else(|| GluxError::AssetDirectoryUnresolvable {
                            path: anchor.clone(),
                            reason: format!(
                                "anchor has only {climbed} parent directories, {levels} required"
                            ),
                        })?;
                }
                root.join(FONTS_SUBDIR)
            }
        };
        check_readable_dir(&dir)?;
        Ok(dir)
    }
}

fn check_readable_dir(dir: &Path) -> Result<()> {
    let unresolvable = |reason: String| GluxError::AssetDirectoryUnresolvable {
        path: dir.to_path_buf(),
        reason,
    };
    let metadata = std::fs::metadata(dir).map_err(|e| unresolvable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(unresolvable("not a directory".to_string()));
    }
    std::fs::read_dir(dir).map_err(|e| unresolvable(format!("not readable: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_location() {
        let loc = AssetLocation::from_config(Path::new("/work/app"), &AssetsConfig::default());
        assert_eq!(
            loc,
            AssetLocation::Explicit(PathBuf::from("/work/app/src/main/assets/fonts"))
        );
    }

    #[test]
    fn test_explicit_dir_wins_over_anchor() {
        let config = AssetsConfig {
            dir: Some(PathBuf::from("fonts")),
            anchor: Some(PathBuf::from("build/classes")),
            ..AssetsConfig::default()
        };
        let loc = AssetLocation::from_config(Path::new("/work"), &config);
        assert_eq!(loc, AssetLocation::Explicit(PathBuf::from("/work/fonts")));
    }

    #[test]
    fn test_explicit_resolves_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let fonts = tmp.path().join("fonts");
        fs::create_dir(&fonts).unwrap();
        assert_eq!(AssetLocation::Explicit(fonts.clone()).resolve().unwrap(), fonts);
    }

    #[test]
    fn test_missing_dir_is_unresolvable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = AssetLocation::Explicit(tmp.path().join("missing"))
            .resolve()
            .unwrap_err();
        assert!(matches!(err, GluxError::AssetDirectoryUnresolvable { .. }));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("fonts");
        fs::write(&file, b"").unwrap();
        let err = AssetLocation::Explicit(file).resolve().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_anchored_walks_up_to_module_root() {
        let tmp = tempfile::tempdir().unwrap();
        let module = tmp.path().join("app");
        let fonts = module.join(FONTS_SUBDIR);
        fs::create_dir_all(&fonts).unwrap();
        // Layout of a javac class output directory inside an Android module.
        let anchor = module.join("build/intermediates/javac/debug/classes/dv");
        fs::create_dir_all(&anchor).unwrap();

        let loc = AssetLocation::Anchored { anchor, levels: 6 };
        let resolved = loc.resolve().unwrap();
        assert_eq!(resolved, fs::canonicalize(&fonts).unwrap());
    }

    #[test]
    fn test_anchored_missing_anchor() {
        let tmp = tempfile::tempdir().unwrap();
        let loc = AssetLocation::Anchored {
            anchor: tmp.path().join("build/classes"),
            levels: 2,
        };
        let err = loc.resolve().unwrap_err();
        assert!(matches!(err, GluxError::AssetDirectoryUnresolvable { .. }));
    }

    #[test]
    fn test_anchored_too_many_levels() {
        let loc = AssetLocation::Anchored {
            anchor: PathBuf::from("/"),
            levels: 1,
        };
        let err = loc.resolve().unwrap_err();
        assert!(err.to_string().contains("parent directories"));
    }
}
