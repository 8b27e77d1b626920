//! CLI binary for pdf2png.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, prints status lines, and turns errors into exit
//! codes. Every failure exits with status 1.

use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2png::config::MAX_DPI;
use pdf2png::{
    convert, ConversionConfig, ConversionProgressCallback, Pdf2PngError, PdfInput, RenamedPage,
    DEFAULT_DPI, DEFAULT_RASTERIZER,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: pdf2png <pdf_file>";

const AFTER_HELP: &str = r#"EXAMPLES:
  # report.pdf → report/000.png, report/001.png, …
  pdf2png report.pdf

  # Lower resolution
  pdf2png --dpi 150 report.pdf

  # Write under another directory and drop pages from an earlier run
  pdf2png --output-root /srv/pages --clean report.pdf

  # Machine-readable summary
  pdf2png --json report.pdf > report.json

REQUIREMENTS:
  pdftoppm from poppler-utils must be on PATH, or pass --rasterizer with the
  path of a compatible program. It is invoked as:
    <rasterizer> -png -r <dpi> <pdf_file> <base>/<base>

NOTES:
  The output directory is never emptied unless --clean is given. A rerun on
  a shorter document leaves the higher-numbered pages of the earlier run.
"#;

/// Convert a PDF into a directory of zero-padded PNG pages.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2png",
    version,
    about = "Convert a PDF into a directory of zero-padded PNG pages",
    long_about = "Rasterize every page of a PDF with pdftoppm and rename the results to \
000.png, 001.png, … inside a directory named after the PDF.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file to convert.
    pdf_file: PathBuf,

    /// Rendering DPI.
    #[arg(long, default_value_t = DEFAULT_DPI,
          value_parser = clap::value_parser!(u32).range(1..=MAX_DPI as i64))]
    dpi: u32,

    /// Rasterizer program (pdftoppm-compatible).
    #[arg(long, default_value = DEFAULT_RASTERIZER)]
    rasterizer: String,

    /// Create the per-document directory under this directory instead of
    /// the current one.
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Remove 000.png, 001.png, … left by an earlier run before converting.
    #[arg(long)]
    clean: bool,

    /// Print a JSON summary instead of status lines.
    #[arg(long)]
    json: bool,

    /// Disable the spinner shown while the rasterizer runs.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

// ── CLI progress callback ────────────────────────────────────────────────────

/// Prints one `Renamed … -> …` line per page and shows a spinner while the
/// rasterizer is running.
struct CliProgress {
    spinner: Option<ProgressBar>,
    print_renames: bool,
}

impl CliProgress {
    fn new(show_spinner: bool, print_renames: bool) -> Arc<Self> {
        let spinner = show_spinner.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  {elapsed}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
            );
            bar.set_prefix("Rasterizing");
            bar
        });
        Arc::new(Self {
            spinner,
            print_renames,
        })
    }

    /// Remove the spinner line; safe to call more than once.
    fn clear(&self) {
        if let Some(bar) = &self.spinner {
            if !bar.is_finished() {
                bar.finish_and_clear();
            }
        }
    }
}

impl ConversionProgressCallback for CliProgress {
    fn on_rasterize_start(&self, program: &str, dpi: u32) {
        if let Some(bar) = &self.spinner {
            bar.set_message(format!("{program} at {dpi} DPI…"));
            bar.enable_steady_tick(Duration::from_millis(80));
        }
    }

    fn on_rasterize_complete(&self, _page_count: usize) {
        self.clear();
    }

    fn on_page_renamed(&self, page: &RenamedPage) {
        if self.print_renames {
            println!("Renamed {} -> {}", page.source_name(), page.target_name());
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            if !is_positional_count_error(&e) {
                eprint!("{}", e.render());
            }
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = if cli.verbose { "debug" } else { "error" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = PdfInput::new(&cli.pdf_file)?;

    let chatty = !cli.quiet && !cli.json;
    let progress = CliProgress::new(chatty && !cli.no_progress, chatty);

    if chatty {
        println!("Converting {} to PNG images...", input.path().display());
    }

    let config = build_config(cli, Arc::clone(&progress))?;
    let result = convert(&input, &config);
    progress.clear();
    let output = result?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if !cli.quiet {
        println!("Conversion completed successfully!");
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli, progress: Arc<CliProgress>) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder()
        .dpi(cli.dpi)
        .rasterizer(cli.rasterizer.clone())
        .clean(cli.clean)
        .progress_callback(progress);

    if let Some(ref root) = cli.output_root {
        builder = builder.output_root(root.clone());
    }

    Ok(builder.build()?)
}

/// Missing `<pdf_file>` or a second positional; these only get the usage
/// line, every other parse error also prints clap's explanation.
fn is_positional_count_error(e: &clap::Error) -> bool {
    match e.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => matches!(
            e.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if !arg.starts_with('-')
        ),
        _ => false,
    }
}

/// Console message for a failed run.
///
/// Library errors already embed their io cause in `Display`, so only
/// foreign errors get the alternate (source-chain) format.
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Pdf2PngError>() {
        Some(Pdf2PngError::FileNotFound { path }) => {
            format!("Error: File '{}' not found.", path.display())
        }
        Some(Pdf2PngError::NotAPdf { .. }) => "Error: Please provide a PDF file.".to_string(),
        Some(e @ Pdf2PngError::ConversionFailed { .. }) => {
            format!("Error during conversion: {e}")
        }
        Some(e) => format!("Unexpected error: {e}"),
        None => format!("Unexpected error: {err:#}"),
    }
}
