//! `roadnet` — export a city's road network as a weighted adjacency list.
//!
//! ```text
//! roadnet export                                   # NYC, drive, nyc_road_network.txt
//! roadnet export --place "Cork, Ireland" --network-type walk -o cork.txt --mapping cork.csv
//! roadnet export --overpass-json saved.json --all-components
//! roadnet check nyc_road_network.txt
//! roadnet paths nyc_road_network.txt --source 1 --target 500
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod analyze;
mod cli;
mod config;
mod logging;
mod pipeline;


use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("roadnet error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export(args) => {
            let cfg = config::load(cli.config.as_deref())?;
            let mut settings = cfg.export;
            args.apply(&mut settings);

            let mut provider = cfg.provider;
            if let Some(dir) = &args.cache_dir {
                provider.cache_dir = Some(dir.clone());
            }

            let source = pipeline::select_source(&args.source, &settings, &provider)?;
            let summary = pipeline::run_export(source.as_ref(), &settings, &mut |msg| println!("{msg}"))?;
            tracing::debug!(?summary, "export summary");
        }
        Command::Check { file } => analyze::check(&file)?,
        Command::Paths { file, source, target } => analyze::paths(&file, source, target)?,
        Command::Mst { file, source } => analyze::mst(&file, source)?,
        Command::Traverse { file, source, order, limit } => analyze::traverse(&file, source, order, limit)?,
    }
    Ok(())
}
