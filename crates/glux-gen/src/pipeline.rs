//! One generation pass: trigger → locate → parse names → emit.
//!
//! Every stage runs once, in order. The first error moves the pass to
//! [`PassState::Failed`], is reported through the diagnostics sink and is
//! returned; nothing is written unless every stage succeeded.

use crate::emitter::GeneratedUnit;
use crate::locator::AssetLocation;
use crate::names::read_font_assets;
use crate::trigger::detect_request;
use crate::writer::{WriteOutcome, unit_path, write_unit};
use glux_core::config::GluxConfig;
use glux_core::diagnostics::{Diagnostic, DiagnosticSink, Severity};
use glux_core::model::{FontAsset, GenerationRequest};
use glux_core::{GluxError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    Idle,
    Generating,
    Success,
    Failed,
}

/// What to do with the generated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    /// Write it to the generated-sources root.
    Write,
    /// Validate and render, but write nothing.
    DryRun,
}

/// Result of a successful pass.
#[derive(Debug)]
pub struct PassReport {
    pub request: GenerationRequest,
    pub assets_dir: PathBuf,
    pub unit: GeneratedUnit,
    /// Where the unit goes (or would go) on disk.
    pub output_path: PathBuf,
    /// `None` in [`PassMode::DryRun`].
    pub outcome: Option<WriteOutcome>,
}

pub struct GenerationPass<'a> {
    project_root: &'a Path,
    config: &'a GluxConfig,
    state: PassState,
}

impl<'a> GenerationPass<'a> {
    pub fn new(project_root: &'a Path, config: &'a GluxConfig) -> Self {
        Self {
            project_root,
            config,
            state: PassState::Idle,
        }
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    /// Run the whole pass. Errors are reported to `sink` before being returned.
    pub fn run(&mut self, mode: PassMode, sink: &mut dyn DiagnosticSink) -> Result<PassReport> {
        self.state = PassState::Generating;
        match self.execute(mode, sink) {
            Ok(report) => {
                self.state = PassState::Success;
                Ok(report)
            }
            Err(err) => {
                self.state = PassState::Failed;
                report_error(&err, sink);
                Err(err)
            }
        }
    }

    fn execute(&self, mode: PassMode, sink: &mut dyn DiagnosticSink) -> Result<PassReport> {
        let occurrences = glux_parser::scan_project(self.project_root, &self.config.trigger)?;
        let request = detect_request(occurrences, &self.config.trigger.marker)?;
        tracing::debug!(
            "generation requested for {} at {}",
            request.package_name,
            request.site
        );

        let assets_dir =
            AssetLocation::from_config(self.project_root, &self.config.assets).resolve()?;
        let assets = read_font_assets(&assets_dir, &self.config.assets.path_prefix, sink)?;
        if assets.is_empty() {
            sink.note(format!("no fonts found in {}", assets_dir.display()));
        }

        let unit = GeneratedUnit::build(&request, &assets, &self.config.output);
        let output_root = self.project_root.join(&self.config.output.dir);
        let output_path = unit_path(&output_root, &unit);

        let outcome = match mode {
            PassMode::Write => {
                let outcome = write_unit(&output_root, &unit)?;
                if let WriteOutcome::Unchanged(path) = &outcome {
                    sink.note(format!("{} is up to date", path.display()));
                }
                Some(outcome)
            }
            PassMode::DryRun => None,
        };

        tracing::info!(
            "{}.{}: {} font constants",
            unit.package,
            unit.class_name,
            unit.constants.len()
        );

        Ok(PassReport {
            request,
            assets_dir,
            unit,
            output_path,
            outcome,
        })
    }
}

/// Locate and parse the fonts directory without requiring a marker.
pub fn list_fonts(
    project_root: &Path,
    config: &GluxConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<(PathBuf, Vec<FontAsset>)> {
    let result = match AssetLocation::from_config(project_root, &config.assets).resolve() {
        Ok(dir) => read_font_assets(&dir, &config.assets.path_prefix, &mut *sink)
            .map(|assets| (dir, assets)),
        Err(err) => Err(err),
    };
    if let Err(err) = &result {
        report_error(err, sink);
    }
    result
}

fn report_error(err: &GluxError, sink: &mut dyn DiagnosticSink) {
    sink.report(Diagnostic {
        severity: Severity::Error,
        message: err.to_string(),
        site: err.site().cloned(),
    });
}
