//! `tel2cir` - convert a Telesis package/net list into an LTspice netlist.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use telesis_netlist::{parse, render};

/// Convert a Telesis package/net list into an LTspice netlist
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source netlist (.tel or .txt)
    #[arg(value_name = "NETLIST")]
    input: PathBuf,

    /// Destination path; defaults to the source with a .cir extension
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let netlist = parse(&content)
        .with_context(|| format!("{} is not a Telesis netlist", args.input.display()))?;
    debug!(
        "parsed {} components, {} connected designators",
        netlist.values.len(),
        netlist.connections.len()
    );

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("cir"));
    let name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());

    let lines = render(&netlist, &name);
    info!("writing {} lines to {}", lines.len(), output.display());
    fs::write(&output, lines.join("\n"))
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
