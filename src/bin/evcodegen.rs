// Evcodegen CLI
// Reads Linux input headers and prints the generated Rust tables to stdout

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

/// Generate typed Rust enums from Linux input event headers
#[derive(Parser, Debug)]
#[command(name = "evcodegen")]
#[command(author = "evcodegen contributors")]
#[command(version)]
#[command(about = "Generate Rust input event code tables from kernel headers", long_about = None)]
struct Args {
    /// Header files to scan, in order (e.g. input-event-codes.h input.h)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // stdout carries the generated code, so logs always go to stderr
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    for path in &args.files {
        log::debug!("input: {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    evcodegen_core::generate(args.files.as_slice(), &mut out)
        .with_context(|| format!("generating tables from {} file(s)", args.files.len()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}
