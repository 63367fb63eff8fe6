use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use restack_engine::LevelCatalog;

mod catalog;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play an interactive ten-round session
    Play(play::PlayArg),
    /// Print the active level catalog
    Catalog(catalog::CatalogArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(play::PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Catalog(arg) => catalog::run(&arg)?,
    }
    Ok(())
}

/// Loads the catalog from a JSON file, or falls back to the built-in one.
fn load_catalog(path: Option<&Path>) -> anyhow::Result<LevelCatalog> {
    let catalog: LevelCatalog = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open level catalog {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("malformed level catalog {}", path.display()))?
        }
        None => LevelCatalog::standard(),
    };
    catalog.validate().context("unusable level catalog")?;
    Ok(catalog)
}
