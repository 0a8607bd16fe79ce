//! CLI binary for glux: generate the `Font` constants class of an Android module.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glux_core::config::{GluxConfig, SetupMode};
use glux_core::diagnostics::TracingSink;
use glux_gen::{GenerationPass, PassMode, WriteOutcome};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "glux", about = "Android font constant generator")]
struct Cli {
    /// Android module root (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the font constants class
    Generate {
        #[command(flatten)]
        assets: AssetArgs,

        /// Generated sources root, relative to the project root
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// How setupFont hands over the interceptor: config, install
        #[arg(long)]
        setup: Option<SetupMode>,

        /// Print the generated class instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the fonts that would become constants
    List {
        #[command(flatten)]
        assets: AssetArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the marker and the fonts directory without writing anything
    Check {
        #[command(flatten)]
        assets: AssetArgs,
    },
}

/// Fonts directory lookup overrides.
#[derive(Args)]
struct AssetArgs {
    /// Fonts directory, relative to the project root
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Legacy lookup: climb parents from this path, then into src/main/assets/fonts
    #[arg(long, conflicts_with = "assets")]
    anchor: Option<PathBuf>,

    /// Number of parents to climb from the anchor
    #[arg(long)]
    anchor_levels: Option<usize>,
}

impl AssetArgs {
    fn apply(self, config: &mut GluxConfig) {
        if let Some(dir) = self.assets {
            config.assets.dir = Some(dir);
            config.assets.anchor = None;
        }
        if let Some(anchor) = self.anchor {
            config.assets.anchor = Some(anchor);
            config.assets.dir = None;
        }
        if let Some(levels) = self.anchor_levels {
            config.assets.anchor_levels = levels;
        }
    }
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let mut config = GluxConfig::load(&project_root).with_context(|| {
        format!(
            "failed to load config from {}",
            project_root.join(".glux/config.toml").display()
        )
    })?;

    match cli.command {
        Commands::Generate {
            assets,
            out,
            setup,
            dry_run,
        } => {
            assets.apply(&mut config);
            if let Some(out) = out {
                config.output.dir = out;
            }
            if let Some(setup) = setup {
                config.output.setup = setup;
            }
            config.validate().context("invalid options")?;
            cmd_generate(&project_root, &config, dry_run)
        }
        Commands::List { assets, json } => {
            assets.apply(&mut config);
            config.validate().context("invalid options")?;
            cmd_list(&project_root, &config, json)
        }
        Commands::Check { assets } => {
            assets.apply(&mut config);
            config.validate().context("invalid options")?;
            cmd_check(&project_root, &config)
        }
    }
}

fn cmd_generate(project_root: &Path, config: &GluxConfig, dry_run: bool) -> Result<()> {
    let mode = if dry_run {
        PassMode::DryRun
    } else {
        PassMode::Write
    };
    let report = GenerationPass::new(project_root, config)
        .run(mode, &mut TracingSink)
        .context("font generation failed")?;

    let count = report.unit.constants.len();
    match &report.outcome {
        None => print!("{}", report.unit.render()),
        Some(WriteOutcome::Written(path)) => {
            println!("Wrote {} ({} fonts)", path.display(), count);
        }
        Some(WriteOutcome::Unchanged(path)) => {
            println!("{} is up to date ({} fonts)", path.display(), count);
        }
    }
    Ok(())
}

fn cmd_list(project_root: &Path, config: &GluxConfig, json: bool) -> Result<()> {
    let (dir, fonts) = glux_gen::list_fonts(project_root, config, &mut TracingSink)
        .context("failed to read fonts")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&fonts)?);
        return Ok(());
    }

    println!("{} fonts in {}", fonts.len(), dir.display());
    let width = fonts.iter().map(|f| f.identifier.len()).max().unwrap_or(0);
    for font in &fonts {
        println!("  {:<width$}  {}", font.identifier, font.asset_path);
    }
    Ok(())
}

fn cmd_check(project_root: &Path, config: &GluxConfig) -> Result<()> {
    let report = GenerationPass::new(project_root, config)
        .run(PassMode::DryRun, &mut TracingSink)
        .context("check failed")?;

    println!("Request:  {} at {}", report.request.package_name, report.request.site);
    println!("Fonts:    {} in {}", report.unit.constants.len(), report.assets_dir.display());
    println!(
        "Output:   {}.{} -> {}",
        report.unit.package,
        report.unit.class_name,
        report.output_path.display()
    );

    let current = std::fs::read_to_string(&report.output_path)
        .is_ok_and(|existing| existing == report.unit.render());
    if current {
        println!("Status:   up to date");
    } else {
        println!("Status:   needs generation (run `glux generate`)");
    }
    Ok(())
}
