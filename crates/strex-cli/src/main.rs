use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use strex_core::{RenderOptions, ReportRenderer, Verbosity, read_results};

mod args;

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_logging(args.debug);

    let options = RenderOptions {
        verbosity: if args.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        },
        disable_headers: args.disable_headers,
        color: args.color.clone(),
    };

    // Reject a bad --color before reading input or writing anything.
    let renderer = ReportRenderer::new(&options)?;
    let results = read_results(&args.results)?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&results)? + "\n",
        args::OutputFormat::Text => renderer.render(&results)?,
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    Ok(())
}
