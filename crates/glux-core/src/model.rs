//! Data model for a single generation pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Kind of Java declaration a marker annotation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
    Method,
    Constructor,
    Field,
    Parameter,
    LocalVariable,
    Package,
    Other,
}

impl DeclarationKind {
    /// Only plain classes may request generation.
    pub const fn is_class_like(self) -> bool {
        matches!(self, Self::Class)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::AnnotationType => "annotation type",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Field => "field",
            Self::Parameter => "parameter",
            Self::LocalVariable => "local variable",
            Self::Package => "package",
            Self::Other => "declaration",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a marker annotation was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclarationSite {
    pub file: PathBuf,
    /// 1-based line of the annotation.
    pub line: usize,
    pub kind: DeclarationKind,
    /// Declared name, when the declaration has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl fmt::Display for DeclarationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({}", self.file.display(), self.line, self.kind)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_str(")")
    }
}

/// A raw marker annotation as extracted from source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerOccurrence {
    pub site: DeclarationSite,
    /// Value of the `packageName` attribute, `None` if absent.
    pub package_name: Option<String>,
}

/// The one validated request for generation in a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub package_name: String,
    pub site: DeclarationSite,
}

impl GenerationRequest {
    /// Package of the generated unit: `<package_name>.<suffix>`.
    pub fn target_package(&self, suffix: &str) -> String {
        format!("{}.{}", self.package_name, suffix)
    }
}

/// One font file discovered in the asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontAsset {
    /// File name as found on disk, e.g. `Roboto-Regular.ttf`.
    pub file_name: String,
    /// Constant name, e.g. `ROBOTO_REGULAR`.
    pub identifier: String,
    /// Path relative to the assets root, e.g. `fonts/Roboto-Regular.ttf`.
    pub asset_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(kind: DeclarationKind, name: Option<&str>) -> DeclarationSite {
        DeclarationSite {
            file: PathBuf::from("src/main/java/com/example/App.java"),
            line: 7,
            kind,
            name: name.map(String::from),
        }
    }

    #[test]
    fn test_only_class_is_class_like() {
        assert!(DeclarationKind::Class.is_class_like());
        assert!(!DeclarationKind::Interface.is_class_like());
        assert!(!DeclarationKind::Method.is_class_like());
        assert!(!DeclarationKind::Record.is_class_like());
    }

    #[test]
    fn test_site_display() {
        let s = site(DeclarationKind::Class, Some("App"));
        assert_eq!(
            s.to_string(),
            "src/main/java/com/example/App.java:7 (class App)"
        );
        let anon = site(DeclarationKind::Other, None);
        assert_eq!(
            anon.to_string(),
            "src/main/java/com/example/App.java:7 (declaration)"
        );
    }

    #[test]
    fn test_target_package() {
        let request = GenerationRequest {
            package_name: "com.example.app".to_string(),
            site: site(DeclarationKind::Class, Some("App")),
        };
        assert_eq!(request.target_package("font"), "com.example.app.font");
    }
}
