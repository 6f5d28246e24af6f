//! pdfoutline CLI - heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::heading::document_stem;
use pdfoutline::render::to_json;
use pdfoutline::{
    discover_inputs, load_classifier, run_batch, BatchConfig, JsonFormat, LayoutDocument,
    LevelClassifier, NumberingClassifier, OutlineBuilder, OutlineOptions,
};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract heading outlines from PDF layout dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Outline a single layout file
    Outline {
        /// Input layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Classifier model (section numbering if not specified)
        #[arg(long, value_name = "PATH", env = "PDFOUTLINE_MODEL")]
        model: Option<PathBuf>,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Outline every layout file in a directory
    Batch {
        /// Input directory
        #[arg(long, value_name = "DIR", env = "PDFOUTLINE_INPUT")]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(long, value_name = "DIR", env = "PDFOUTLINE_OUTPUT")]
        output: Option<PathBuf>,

        /// Classifier model
        #[arg(long, value_name = "PATH", env = "PDFOUTLINE_MODEL")]
        model: Option<PathBuf>,

        /// Process one document at a time
        #[arg(long)]
        sequential: bool,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Show every line with its heading verdict
    Inspect {
        /// Input layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Only this page (1-indexed)
        #[arg(long, value_name = "N")]
        page: Option<u32>,

        /// Print normalized lines as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            model,
            compact,
        }) => cmd_outline(&input, output.as_deref(), model.as_deref(), compact),
        Some(Commands::Batch {
            input,
            output,
            model,
            sequential,
            compact,
        }) => {
            let config = resolve_batch_config(
                BatchConfig::detect(),
                input,
                output,
                model,
                sequential,
                compact,
            );
            cmd_batch(&config)
        }
        Some(Commands::Inspect { input, page, json }) => cmd_inspect(&input, page, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_batch(&BatchConfig::detect()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Explicit arguments override the detected directory layout.
fn resolve_batch_config(
    detected: BatchConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    model: Option<PathBuf>,
    sequential: bool,
    compact: bool,
) -> BatchConfig {
    let mut config = BatchConfig::new(
        input.unwrap_or(detected.input_dir),
        output.unwrap_or(detected.output_dir),
    );
    config.model_path = model.or(detected.model_path);
    if sequential {
        config = config.sequential();
    }
    if compact {
        config = config.with_format(JsonFormat::Compact);
    }
    config
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    model: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = load_classifier(model)?;
    log::debug!("Outlining {} with {} classifier", input.display(), classifier.name());
    let outline = pdfoutline::outline_file(input, classifier.as_ref())?;
    let json = to_json(&outline, json_format(compact))?;

    if let Some(output_path) = output {
        fs::write(output_path, &json)?;
        println!(
            "{} {} ({} headings)",
            "Written to".green(),
            output_path.display(),
            outline.len()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(config: &BatchConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}: {}", "Input".bold(), config.input_dir.display());
    println!("{}: {}", "Output".bold(), config.output_dir.display());
    match config.model_path {
        Some(ref model) => println!("{}: {}", "Model".bold(), model.display()),
        None => println!("{}: {}", "Model".bold(), "section numbering".dimmed()),
    }
    println!();

    let classifier = load_classifier(config.model_path.as_deref())?;
    let total = discover_inputs(&config.input_dir)?.len();
    log::info!(
        "Batch of {} files with {} classifier ({}, {:?} JSON)",
        total,
        classifier.name(),
        if config.parallel { "parallel" } else { "sequential" },
        config.json_format
    );

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = run_batch(
        config,
        &OutlineOptions::default(),
        classifier.as_ref(),
        &|input, _| {
            pb.set_message(document_stem(input));
            pb.inc(1);
        },
    )?;
    pb.finish_and_clear();

    println!(
        "{} {} of {} documents",
        "Done!".green().bold(),
        report.written.len(),
        report.total()
    );
    for failure in &report.failed {
        println!(
            "  {} {}: {}",
            "✗".red(),
            failure.input.display(),
            failure.error
        );
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} documents failed", report.failed.len()).into())
    }
}

fn cmd_inspect(
    input: &Path,
    page: Option<u32>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = LayoutDocument::open(input)?;
    let classifier = NumberingClassifier::default();
    let builder = OutlineBuilder::new(&classifier);

    let lines: Vec<_> = builder
        .normalized_lines(&document.pages)
        .into_iter()
        .filter(|line| page.map_or(true, |p| line.page == p))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    let first_page_text = document.pages.first().map(|p| p.plain_text());
    let title = builder.title(first_page_text.as_deref(), &document_stem(input));

    println!("{}", "Layout Inspection".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), document.page_count());
    println!("{}: {}", "Title".bold(), title);
    println!();

    let min_score = builder.filter().config().min_score;
    let mut headings = 0;
    for line in &lines {
        let verdict = builder.filter().evaluate(line);
        let label = format!("{:<28}", verdict.to_string());
        if verdict.is_heading(min_score) {
            headings += 1;
            println!("{:>4}  {}  {}", line.page, label.green(), line.text.bold());
        } else {
            println!("{:>4}  {}  {}", line.page, label.dimmed(), line.text);
        }
    }

    println!();
    println!(
        "{}: {} of {} lines",
        "Headings".bold(),
        headings,
        lines.len()
    );

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "pdfoutline".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Heading outline extraction tool");
    println!();
    println!("License: MIT");
}
