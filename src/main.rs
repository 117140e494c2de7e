use std::io::{stdin, stdout};

use anyhow::Context;
use clap::Parser;
use tradate::convert::{open_source, prompt_for_source, Converter};
use tradate::Strategy;

#[derive(Parser, Debug)]
#[command(name = "tradate", about = "Convert traditional dates to YYYYMMDD, one per line")]
struct Args {
    /// File to read dates from, `-` for stdin. Prompted for when absent.
    input: Option<String>,

    /// How each line is cut into month, day and year
    #[arg(short, long, value_enum, default_value_t = Strategy::Collapse)]
    strategy: Strategy,

    /// Log to stderr, filtered by RUST_LOG (defaults to debug)
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let name = match args.input {
        Some(name) => name,
        None => prompt_for_source(stdin().lock(), stdout()).context("Unable to read filename")?,
    };

    let source = open_source(&name)?;
    Converter::new(args.strategy)
        .run(source, stdout().lock())
        .with_context(|| format!("Unable to convert dates from {name}"))?;

    Ok(())
}
