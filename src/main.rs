mod data;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use data::{parser, stats};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    // Zero raw arguments is the only usage error. All-junk input is not: it
    // proceeds and reports zeros over an empty sample set.
    if args.is_empty() {
        eprintln!("Please provide data values as command-line arguments.");
        return ExitCode::FAILURE;
    }

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &[String]) -> Result<()> {
    let samples = parser::parse_tokens(args);
    log::debug!("parsed {} of {} tokens", samples.len(), args.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &samples).context("writing report to stdout")?;
    Ok(())
}

/// Write the three statistics lines. Values use `f64`'s default `Display`
/// (shortest round-trip form, so `20.0` prints as `20`).
fn write_report(out: &mut impl Write, samples: &[f64]) -> io::Result<()> {
    writeln!(out, "Average: {}", stats::average(samples))?;
    writeln!(out, "Max: {}", stats::max(samples))?;
    writeln!(out, "Min: {}", stats::min(samples))?;
    Ok(())
}
