//! Curve SVG CLI
//!
//! Usage:
//!   curve-svg [OPTIONS] <CURVE>
//!
//! Options:
//!   -d, --depth <N>          Depth added to the curve's minimum depth
//!   -t, --thickness <F>      Stroke thickness in curve units
//!   -c, --color <C>          Stroke color
//!   -p, --precision <N>      Decimal places in the output
//!       --options <FILE>     Render options file (TOML format)
//!       --compact            Emit the document on a single line
//!   -o, --output <FILE>      Write to a file instead of stdout
//!   -v, --verbose            Log render details to stderr
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use curve_svg::{render, CurveFile, Error, RenderOptions};

#[derive(Parser)]
#[command(name = "curve-svg")]
#[command(about = "Render recursively generated curves as SVG polylines")]
struct Cli {
    /// Curve file (TOML format)
    curve: PathBuf,

    /// Depth added to the curve's minimum depth
    #[arg(short, long)]
    depth: Option<u32>,

    /// Stroke thickness in curve units
    #[arg(short, long)]
    thickness: Option<f64>,

    /// Stroke color (any CSS color token)
    #[arg(short, long)]
    color: Option<String>,

    /// Number of decimal places in the output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Render options file (TOML format); flags override its values
    #[arg(long)]
    options: Option<PathBuf>,

    /// Emit the document on a single line
    #[arg(long)]
    compact: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log render details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = build_options(cli)?;
    options.validate()?;

    let curve = CurveFile::from_file(&cli.curve)?;
    curve.resolve_depth(options.depth)?;
    tracing::info!(
        curve = curve.name.as_deref().unwrap_or("<unnamed>"),
        depth = options.depth,
        "loaded curve"
    );

    let svg = render(&curve, &options);
    match &cli.output {
        Some(path) => fs::write(path, svg)?,
        None => println!("{}", svg),
    }
    Ok(())
}

fn build_options(cli: &Cli) -> Result<RenderOptions, Error> {
    let mut options = match &cli.options {
        Some(path) => RenderOptions::from_file(path)?,
        None => RenderOptions::default(),
    };
    if let Some(depth) = cli.depth {
        options = options.with_depth(depth);
    }
    if let Some(thickness) = cli.thickness {
        options = options.with_thickness(thickness);
    }
    if let Some(color) = &cli.color {
        options = options.with_color(color.clone());
    }
    if let Some(precision) = cli.precision {
        options = options.with_precision(precision);
    }
    if cli.compact {
        options = options.with_pretty_print(false);
    }
    Ok(options)
}
