//! Errors that abort a generation pass.

use crate::model::DeclarationSite;
use std::path::PathBuf;

/// Naming pattern every font file has to follow.
pub const EXPECTED_FONT_NAME: &str = "FontFamily-Style.ext";

pub type Result<T> = std::result::Result<T, GluxError>;

/// Every kind is fatal to the current pass; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum GluxError {
    #[error("no @{marker} declaration found, exactly one is required in the application")]
    MissingRequest { marker: String },

    #[error(
        "@{marker} can be used only once in the application, found {}: {}",
        .sites.len(),
        join_sites(.sites)
    )]
    MultipleRequests {
        marker: String,
        sites: Vec<DeclarationSite>,
    },

    #[error("@{marker} can only be applied to a class, found it on {site}")]
    InvalidDeclarationKind {
        marker: String,
        site: DeclarationSite,
    },

    #[error("@{marker} at {site} is missing its packageName")]
    MissingPackageName {
        marker: String,
        site: DeclarationSite,
    },

    #[error("packageName \"{package}\" at {site} is not a valid Java package name")]
    InvalidPackageName {
        package: String,
        site: DeclarationSite,
    },

    #[error("cannot resolve font asset directory {}: {reason}", .path.display())]
    AssetDirectoryUnresolvable { path: PathBuf, reason: String },

    #[error(
        "font {file_name} in the wrong format name ({reason}), format name is '{}'",
        EXPECTED_FONT_NAME
    )]
    InvalidAssetName { file_name: String, reason: String },

    #[error("fonts {first} and {second} both map to constant {identifier}")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("failed to write generated unit {}: {source}", .path.display())]
    EmissionIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan sources: {0}")]
    SourceScan(String),
}

impl GluxError {
    /// Declaration the error points at, when there is one.
    pub fn site(&self) -> Option<&DeclarationSite> {
        match self {
            Self::InvalidDeclarationKind { site, .. }
            | Self::MissingPackageName { site, .. }
            | Self::InvalidPackageName { site, .. } => Some(site),
            _ => None,
        }
    }
}

fn join_sites(sites: &[DeclarationSite]) -> String {
    sites
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
