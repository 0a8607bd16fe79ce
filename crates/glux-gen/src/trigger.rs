//! Validate marker occurrences into the single generation request.

use glux_core::model::{GenerationRequest, MarkerOccurrence};
use glux_core::{GluxError, Result, java};

/// Accept exactly one marker, on a class, with a valid `packageName`.
pub fn detect_request(
    mut occurrences: Vec<MarkerOccurrence>,
    marker: &str,
) -> Result<GenerationRequest> {
    let occurrence = match occurrences.len() {
        0 => {
            return Err(GluxError::MissingRequest {
                marker: marker.to_string(),
            });
        }
        1 => occurrences.remove(0),
        _ => {
            return Err(GluxError::MultipleRequests {
                marker: marker.to_string(),
                sites: occurrences.into_iter().map(|o| o.site).collect(),
            });
        }
    };

    let site = occurrence.site;
    if !site.kind.is_class_like() {
        return Err(GluxError::InvalidDeclarationKind {
            marker: marker.to_string(),
            site,
        });
    }

    let package_name = match occurrence.package_name {
        Some(p) if !p.is_empty() => p,
        _ => {
            return Err(GluxError::MissingPackageName {
                marker: marker.to_string(),
                site,
            });
        }
    };
    if !java::is_package_name(&package_name) {
        return Err(GluxError::InvalidPackageName {
            package: package_name,
            site,
        });
    }

    Ok(GenerationRequest { package_name, site })
}
