use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glsl_include::{IncludeResolver, DEFAULT_INCLUDE_KEYWORD};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "glsl-include")]
#[command(about = "Flatten a shader by inlining its include directives")]
#[command(version)]
struct Args {
    /// Top-level shader file
    file: String,

    /// Keyword marking an include line; must start the line
    #[arg(long, default_value = DEFAULT_INCLUDE_KEYWORD)]
    keyword: String,

    /// Write the flattened source here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log every inlined file and every skipped duplicate include
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "glsl_include=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut resolver = IncludeResolver::new(args.keyword)?;
    let resolved = resolver
        .resolve_with_report(&args.file)
        .with_context(|| format!("failed to resolve includes of {}", args.file))?;

    if args.report {
        for file in &resolved.visited {
            tracing::info!(file = %file, "inlined");
        }
        for skipped in &resolved.skipped {
            tracing::info!(
                file = %skipped.file,
                line = skipped.line,
                include = %skipped.path,
                "skipped duplicate include"
            );
        }
    }

    match args.output {
        Some(path) => std::fs::write(&path, &resolved.source)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", resolved.source),
    }

    Ok(())
}
