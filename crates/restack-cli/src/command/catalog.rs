use std::path::PathBuf;

use clap::Args;
use restack_engine::Tier;

#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArg {
    /// JSON file with a custom level catalog (replaces the built-in one)
    #[arg(long)]
    levels: Option<PathBuf>,
}

pub fn run(arg: &CatalogArg) -> anyhow::Result<()> {
    let catalog = super::load_catalog(arg.levels.as_deref())?;
    for tier in Tier::ALL {
        println!("{tier}:");
        for level in catalog.levels(tier) {
            println!(
                "  {:<12} {} blocks, optimal {} moves",
                level.id,
                level.block_count(),
                level.optimal
            );
        }
    }
    Ok(())
}
