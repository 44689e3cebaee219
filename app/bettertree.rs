//! Command-line interface for bettertree.
//!
//! This binary stands in for the host shell: it picks the root directory,
//! merges stored preferences with the arguments, renders the tree and prints
//! or saves the result.

use bettertree::fs::absolute_root;
use bettertree::output::{self, OutputFormat as RenderFormat};
use bettertree::preferences::{InvocationArgs, Preferences};
use bettertree::{OrderingPolicy, TraversalConfig, TreeError, TreeResult, generate_tree};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;

/// bettertree — print a directory as a tree
#[derive(Parser)]
#[command(name = "bettertree", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Max depth, -1 for unlimited (defaults to the stored preference)
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Extra names to exclude, comma separated
    #[arg(short, long)]
    exclude: Option<String>,

    /// Annotate entries with their size ("false" to disable)
    #[arg(long)]
    show_size: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Sort entries by name instead of keeping directory order
    #[arg(long)]
    sorted: bool,

    /// Remove colour markers from the output
    #[arg(long)]
    strip_colors: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preferences file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (requires the `logging` feature)
    #[arg(short, long, action = ArgAction::Count)]
    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl From<OutputFormat> for RenderFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => RenderFormat::Text,
            OutputFormat::Markdown => RenderFormat::Markdown,
            OutputFormat::Json => RenderFormat::Json,
        }
    }
}

impl Cli {
    fn traversal_config(&self, preferences: &Preferences) -> TraversalConfig {
        let args = InvocationArgs {
            depth: self.depth,
            exclude: self.exclude.clone(),
            show_size: self.show_size.clone(),
        };
        let mut config = preferences.merge(&args);
        if self.sorted {
            config.ordering = OrderingPolicy::Sorted;
        }
        config
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bettertree={}", level)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TreeError> {
    let preferences = Preferences::load(cli.config.as_deref())?;
    let config = cli.traversal_config(&preferences);
    let root = absolute_root(&cli.root)?;
    let mut result = generate_tree(root, config)?;
    if cli.strip_colors {
        result.tree = output::strip_color_markers(&result.tree);
    }
    emit(&result, cli)
}

fn emit(result: &TreeResult, cli: &Cli) -> Result<(), TreeError> {
    let format = RenderFormat::from(cli.format);
    match &cli.output {
        Some(path) => output::write_result_to_file(result, format, path, cli.pretty),
        None => {
            let out = output::format_result(result, format, cli.pretty)?;
            print!("{}", out);
            if !out.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
