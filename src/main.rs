use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use regionhue::cli::{Args, Command, DecodeArgs, NamesArgs, PreviewTarget, SequenceArgs};
use regionhue::color::Color;
use regionhue::pipeline::assign::{assign_regions, AssignMode, RegionColor};
use regionhue::preview::{self, LogPreview, PreviewSink, TerminalPreview};
use regionhue::PaletteService;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let service = PaletteService::default();
    let regions = match args.command {
        Command::Sequence(seq) => run_sequence(&service, seq),
        Command::Names(names) => run_names(&service, names)?,
        Command::Decode(decode) => return run_decode(decode),
    };

    let mut out = io::stdout().lock();
    for region in &regions {
        if region.name.is_empty() {
            writeln!(out, "{}", region.color)?;
        } else {
            writeln!(out, "{}\t{}", region.name, region.color)?;
        }
    }
    out.flush()?;
    drop(out);

    if let Some(target) = args.preview {
        let mut sink: Box<dyn PreviewSink> = match target {
            PreviewTarget::Terminal => Box::new(TerminalPreview::stdout()),
            PreviewTarget::Log => Box::new(LogPreview),
        };
        for region in &regions {
            sink.emit(&region.color.to_hex(), &region.name);
        }
    }
    if args.grid {
        preview::show_grid(&regions).context("failed to draw swatch grid")?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_sequence(service: &PaletteService, args: SequenceArgs) -> Vec<RegionColor> {
    service
        .generate_sequence(args.count, args.seed)
        .into_iter()
        .map(|color| RegionColor {
            name: String::new(),
            color,
        })
        .collect()
}

fn run_names(service: &PaletteService, args: NamesArgs) -> Result<Vec<RegionColor>> {
    let names = if args.names.is_empty() {
        read_names(io::stdin().lock())?
    } else {
        args.names
    };
    let mode = if args.sequential {
        AssignMode::Sequential { seed: args.seed }
    } else {
        AssignMode::Named
    };
    Ok(assign_regions(service, &names, mode))
}

/// One name per line; blank lines are skipped and surrounding whitespace
/// trimmed.
fn read_names(input: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read region names from stdin")?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    let color: Color = args
        .hex
        .parse()
        .with_context(|| format!("cannot decode {:?}", args.hex))?;
    println!("{} {} {}", color.r, color.g, color.b);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_names_skips_blank_lines() {
        let input = "Slovakia\n\n  Czechia  \nAustria\n";
        let names = read_names(input.as_bytes()).unwrap();
        assert_eq!(names, ["Slovakia", "Czechia", "Austria"]);
    }
}
