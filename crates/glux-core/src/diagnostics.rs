//! The ERROR/NOTE diagnostics channel.
//!
//! A pass reports every fatal error through a [`DiagnosticSink`] before it returns,
//! plus informational notes (skipped entries, unchanged output). The CLI forwards
//! to `tracing`; tests collect into [`Diagnostics`].

use crate::model::DeclarationSite;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Aborts the pass.
    Error,
    /// Informational only.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Note => write!(f, "note"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub site: Option<DeclarationSite>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.site {
            Some(site) => write!(f, "{}: {} [{}]", self.severity, self.message, site),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Destination for diagnostics emitted during a pass.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    fn error(&mut self, message: String) {
        self.report(Diagnostic {
            severity: Severity::Error,
            message,
            site: None,
        });
    }

    fn note(&mut self, message: String) {
        self.report(Diagnostic {
            severity: Severity::Note,
            message,
            site: None,
        });
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Note)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`: ERROR as `error!`, NOTE as `info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let site = diagnostic.site.as_ref().map(ToString::to_string);
        match diagnostic.severity {
            Severity::Error => match site {
                Some(site) => tracing::error!(%site, "{}", diagnostic.message),
                None => tracing::error!("{}", diagnostic.message),
            },
            Severity::Note => match site {
                Some(site) => tracing::info!(%site, "{}", diagnostic.message),
                None => tracing::info!("{}", diagnostic.message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_by_severity() {
        let mut diags = Diagnostics::new();
        diags.note("skipping hidden file .DS_Store".to_string());
        assert!(!diags.has_errors());
        diags.error("no @Font declaration found".to_string());
        assert!(diags.has_errors());
        assert_eq!(diags.entries().len(), 2);
        assert_eq!(diags.errors().count(), 1);
        assert_eq!(diags.notes().count(), 1);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic {
            severity: Severity::Error,
            message: "boom".to_string(),
            site: None,
        };
        assert_eq!(d.to_string(), "error: boom");
    }
}
