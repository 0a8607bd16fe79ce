//! Configuration for marker discovery, asset lookup and code emission.
//!
//! Load order: `.glux/config.toml` → environment variables → defaults.
//! CLI flags are applied on top by the binary.

use crate::java;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level glux configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GluxConfig {
    pub trigger: TriggerConfig,
    pub assets: AssetsConfig,
    pub output: OutputConfig,
}

/// Where to look for the marker annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Simple name of the marker annotation.
    pub marker: String,
    /// Source roots scanned for Java files, relative to the project root.
    pub source_dirs: Vec<PathBuf>,
    /// Glob patterns (relative to the project root) excluded from the scan.
    pub exclude: Vec<String>,
}

/// Font asset directory lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Explicit fonts directory. Relative paths resolve against the project root.
    /// Defaults to `src/main/assets/fonts`.
    pub dir: Option<PathBuf>,
    /// Legacy lookup: walk `anchor_levels` parents up from this path, then into
    /// `src/main/assets/fonts`. Ignored when `dir` is set.
    pub anchor: Option<PathBuf>,
    pub anchor_levels: usize,
    /// Prefix of the asset path stored in each constant.
    pub path_prefix: String,
}

/// Generated unit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Generated sources root. Relative paths resolve against the project root.
    pub dir: PathBuf,
    /// Sub-package appended to the requested package name.
    pub package_suffix: String,
    pub class_name: String,
    /// Attribute in the app's `R.attr` table used by the styling interceptor.
    pub font_attr: String,
    pub setup: SetupMode,
}

/// How the generated `setupFont` hands over the styling interceptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupMode {
    /// `setupFont` returns the configured `ViewPump`; the caller installs it.
    #[default]
    Config,
    /// `setupFont` calls `ViewPump.init` itself.
    Install,
}

impl FromStr for SetupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "config" => Ok(Self::Config),
            "install" => Ok(Self::Install),
            other => Err(format!(
                "unknown setup mode '{other}' (expected config or install)"
            )),
        }
    }
}

impl fmt::Display for SetupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Install => write!(f, "install"),
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            marker: "Font".to_string(),
            source_dirs: vec![PathBuf::from("src/main/java")],
            exclude: Vec::new(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            anchor: None,
            anchor_levels: 6,
            path_prefix: "fonts".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("build/generated/source/glux"),
            package_suffix: "font".to_string(),
            class_name: "Font".to_string(),
            font_attr: "fontPath".to_string(),
            setup: SetupMode::Config,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    target: &mut T,
) {
    if let Some(v) = lookup(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl GluxConfig {
    /// Load config from `.glux/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::load_with_env(project_root, |var| std::env::var(var).ok())
    }

    /// Like [`GluxConfig::load`], reading overrides through `lookup`.
    pub fn load_with_env(
        project_root: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let config_path = project_root.join(".glux").join("config.toml");

        let mut config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment variable overrides
        if let Some(dir) = lookup("GLUX_ASSETS_DIR") {
            config.assets.dir = Some(PathBuf::from(dir));
        }
        env_override(&lookup, "GLUX_OUTPUT_DIR", &mut config.output.dir);
        env_override(
            &lookup,
            "GLUX_PACKAGE_SUFFIX",
            &mut config.output.package_suffix,
        );
        env_override(&lookup, "GLUX_SETUP", &mut config.output.setup);

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce uncompilable output.
    pub fn validate(&self) -> Result<()> {
        if !java::is_identifier(&self.trigger.marker) {
            anyhow::bail!("trigger.marker '{}' is not a Java identifier", self.trigger.marker);
        }
        if !java::is_package_name(&self.output.package_suffix) {
            anyhow::bail!(
                "output.package_suffix '{}' is not a valid package name",
                self.output.package_suffix
            );
        }
        if !java::is_identifier(&self.output.class_name) {
            anyhow::bail!(
                "output.class_name '{}' is not a Java identifier",
                self.output.class_name
            );
        }
        if !java::is_identifier(&self.output.font_attr) {
            anyhow::bail!(
                "output.font_attr '{}' is not a Java identifier",
                self.output.font_attr
            );
        }
        if self.assets.path_prefix.trim_matches('/').is_empty() {
            anyhow::bail!("assets.path_prefix must not be empty");
        }
        if self.assets.anchor.is_some() && self.assets.anchor_levels == 0 {
            anyhow::bail!("assets.anchor_levels must be at least 1 when an anchor is set");
        }
        Ok(())
    }
}
