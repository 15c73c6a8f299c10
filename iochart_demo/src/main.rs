// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders line, column and pie charts from `iochart_geometry` layouts to SVG files.

mod render;
mod scenarios;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use iochart_geometry::{ChartOptions, Palette};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "iochart_demo",
    version,
    about = "Render line, column and pie charts to SVG"
)]
struct Cli {
    /// JSON file holding one chart options object or an array of them.
    /// Without it, a set of built-in charts is rendered.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Directory the SVG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Log more (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionsFile {
    Many(Vec<ChartOptions>),
    One(ChartOptions),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let charts = match &cli.options {
        Some(path) => load_options(path)?,
        None => scenarios::builtin(),
    };
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    let palette = Palette::DEFAULT;
    for (index, options) in charts.iter().enumerate() {
        let path = cli.out_dir.join(file_name(index, options));
        let svg = render::render_chart(options, &palette);
        fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), kind = %options.kind, "wrote chart");
    }
    eprintln!("Wrote {} charts to {}", charts.len(), cli.out_dir.display());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(path: &Path) -> Result<Vec<ChartOptions>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_options(&text).with_context(|| format!("parsing chart options in {}", path.display()))
}

fn parse_options(text: &str) -> Result<Vec<ChartOptions>> {
    Ok(match serde_json::from_str(text)? {
        OptionsFile::Many(charts) => charts,
        OptionsFile::One(chart) => vec![chart],
    })
}

/// `NN-slug.svg`, where the slug comes from the title or, failing that, the chart kind.
fn file_name(index: usize, options: &ChartOptions) -> String {
    let slug = options.title.as_deref().map(slugify).unwrap_or_default();
    if slug.is_empty() {
        format!("{index:02}-{}.svg", options.kind)
    } else {
        format!("{index:02}-{slug}.svg")
    }
}

fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
