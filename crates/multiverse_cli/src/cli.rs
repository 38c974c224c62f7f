use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use multiverse_core::render::render_multiverse;
use multiverse_core::{MoveRequest, PresetCatalog};

#[derive(Debug, Parser)]
#[command(
    name = "multiverse",
    about = "Play and inspect multiverse chess positions",
    version
)]
pub struct Cli {
    /// Preset catalog to use instead of the built-in one.
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the preset names in the catalog.
    Presets,

    /// Print the starting boards of a preset.
    Show {
        /// Preset name, case-insensitive.
        preset: String,
    },

    /// Play moves from a preset and print the result.
    Play(PlayArgs),
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Preset name, case-insensitive.
    pub preset: String,

    /// Moves such as `N(0T1)g1>(0T1)f3`, applied in order.
    #[arg(required = true)]
    pub moves: Vec<String>,

    /// Print the move history as JSON instead of the boards.
    #[arg(long)]
    pub json: bool,
}

fn load_catalog(path: Option<&PathBuf>) -> Result<PresetCatalog> {
    match path {
        Some(path) => PresetCatalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => PresetCatalog::builtin().context("loading built-in catalog"),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_ref())?;
    match cli.command {
        Commands::Presets => {
            for preset in catalog.iter() {
                println!(
                    "{:<40} {}x{}  timelines {:?}",
                    preset.name, preset.width, preset.height, preset.timelines
                );
            }
            Ok(())
        }
        Commands::Show { preset } => {
            let mv = catalog.get(&preset)?.build()?;
            print!("{}", render_multiverse(&mv));
            Ok(())
        }
        Commands::Play(args) => run_play(&catalog, args),
    }
}

fn run_play(catalog: &PresetCatalog, args: PlayArgs) -> Result<()> {
    let mut mv = catalog.get(&args.preset)?.build()?;
    for (n, text) in args.moves.iter().enumerate() {
        let request: MoveRequest = text.parse()?;
        let outcome = mv
            .apply(&request)
            .with_context(|| format!("move {} `{text}`", n + 1))?;
        info!(%request, travel = ?outcome.travel, "applied");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(mv.history())?);
    } else {
        print!("{}", render_multiverse(&mv));
    }
    Ok(())
}
