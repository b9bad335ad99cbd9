use anyhow::{Context, Result};
use clap::Parser;
use routescan::{RouteError, RouteExtractor, cli, workspace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // stdout carries the JSON result only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("ROUTESCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(dir) = args.workspace {
        let options = workspace::ScanOptions::new(args.no_ignore);
        let projects = workspace::scan_workspace(&dir, options)
            .with_context(|| format!("scan workspace {}", dir.display()))?;
        println!("{}", serde_json::to_string(&projects)?);
        return Ok(());
    }

    let file = args.file.ok_or(RouteError::MissingInput)?;
    let mut extractor = RouteExtractor::new()?;
    let routes = extractor
        .extract_file(&file)
        .with_context(|| format!("extract routes from {}", file.display()))?;
    tracing::debug!(count = routes.len(), file = %file.display(), "resolved routes");
    println!("{}", serde_json::to_string(&routes)?);
    Ok(())
}
