//! Directory batch processing.
//!
//! Every `*.json` layout dump in the input directory becomes one
//! `<stem>.json` outline in the output directory. Documents are independent:
//! a failure is logged and recorded, and the rest of the batch continues.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::classify::LevelClassifier;
use crate::error::{Error, Result};
use crate::heading::document_stem;
use crate::model::LayoutDocument;
use crate::options::OutlineOptions;
use crate::outline::OutlineBuilder;
use crate::render::{write_json, JsonFormat};

/// Root of the container directory layout.
pub const CONTAINER_ROOT: &str = "/app";

/// File name of the classifier model.
pub const MODEL_FILE_NAME: &str = "heading_classifier.json";

/// Where a batch reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Directory scanned for layout dumps
    pub input_dir: PathBuf,

    /// Directory receiving outline files
    pub output_dir: PathBuf,

    /// Classifier model, if any
    pub model_path: Option<PathBuf>,

    /// Output JSON style
    pub json_format: JsonFormat,

    /// Process documents on the rayon pool
    pub parallel: bool,
}

impl BatchConfig {
    /// Create a config for explicit directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            model_path: None,
            json_format: JsonFormat::Pretty,
            parallel: true,
        }
    }

    /// Pick the container layout when `/app/input` exists, the local one otherwise.
    pub fn detect() -> Self {
        let container = Path::new(CONTAINER_ROOT);
        if container.join("input").is_dir() {
            Self::container(container)
        } else {
            Self::local(Path::new("."))
        }
    }

    /// `<root>/input`, `<root>/output`, `<root>/heading_classifier.json`.
    pub fn container(root: &Path) -> Self {
        Self::new(root.join("input"), root.join("output"))
            .with_existing_model(root.join(MODEL_FILE_NAME))
    }

    /// `<base>/app/input`, `<base>/app/output`, `<base>/heading_classifier.json`.
    pub fn local(base: &Path) -> Self {
        let app = base.join("app");
        Self::new(app.join("input"), app.join("output"))
            .with_existing_model(base.join(MODEL_FILE_NAME))
    }

    /// Use a classifier model.
    pub fn with_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Use a classifier model only if the file exists.
    pub fn with_existing_model(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.model_path = if path.is_file() { Some(path) } else { None };
        self
    }

    /// Set the output JSON style.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Process documents one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// A document that could not be processed.
#[derive(Debug)]
pub struct BatchFailure {
    /// Input layout file
    pub input: PathBuf,

    /// What went wrong
    pub error: Error,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Outline files written, in input order
    pub written: Vec<PathBuf>,

    /// Documents that failed, in input order
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of documents attempted.
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// Check if every document succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Layout dumps (`*.json`) directly inside `dir`, sorted by path.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Outline one layout file and write `<stem>.json` into `output_dir`.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    builder: &OutlineBuilder<'_>,
    format: JsonFormat,
) -> Result<PathBuf> {
    let document = LayoutDocument::open(input)?;
    let stem = document_stem(input);
    let outline = builder.build_from_source(&document, &stem)?;

    let output = output_dir.join(format!("{}.json", stem));
    write_json(&outline, &output, format)?;
    log::info!(
        "{} -> {} ({} headings)",
        input.display(),
        output.display(),
        outline.len()
    );
    Ok(output)
}

/// Separate inputs whose output name is already taken by an earlier input.
///
/// Returns the inputs to process and, for each skipped input, the input
/// that keeps the name.
fn split_duplicate_stems(inputs: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<(PathBuf, PathBuf)>) {
    let mut owners: HashMap<String, PathBuf> = HashMap::new();
    let mut unique = Vec::with_capacity(inputs.len());
    let mut duplicates = Vec::new();

    for input in inputs {
        match owners.entry(document_stem(&input)) {
            Entry::Occupied(owner) => duplicates.push((input, owner.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(input.clone());
                unique.push(input);
            }
        }
    }
    (unique, duplicates)
}

/// Process every layout dump of `config.input_dir`.
///
/// `progress` is called once per document as it finishes, possibly from
/// several threads. Inputs that map to the same `<stem>.json` are only
/// processed once: the first in sorted order wins and the rest are
/// reported as failures.
pub fn run_batch(
    config: &BatchConfig,
    options: &OutlineOptions,
    classifier: &dyn LevelClassifier,
    progress: &(dyn Fn(&Path, &Result<PathBuf>) + Sync),
) -> Result<BatchReport> {
    fs::create_dir_all(&config.output_dir)?;

    let inputs = discover_inputs(&config.input_dir)?;
    if inputs.is_empty() {
        log::warn!("No layout files found in {}", config.input_dir.display());
        return Ok(BatchReport::default());
    }
    log::info!(
        "Processing {} documents with {} classifier",
        inputs.len(),
        classifier.name()
    );

    let mut report = BatchReport::default();
    let (inputs, duplicates) = split_duplicate_stems(inputs);
    for (input, first) in duplicates {
        let error = Error::Other(format!(
            "output {}.json already produced by {}",
            document_stem(&input),
            first.display()
        ));
        log::error!("Skipping {}: {}", input.display(), error);
        let result: Result<PathBuf> = Err(error);
        progress(&input, &result);
        if let Err(error) = result {
            report.failed.push(BatchFailure { input, error });
        }
    }

    let builder = OutlineBuilder::with_options(classifier, options.clone());
    let run = |input: PathBuf| {
        let result = process_file(&input, &config.output_dir, &builder, config.json_format);
        progress(&input, &result);
        (input, result)
    };

    let results: Vec<(PathBuf, Result<PathBuf>)> = if config.parallel {
        inputs.into_par_iter().map(run).collect()
    } else {
        inputs.into_iter().map(run).collect()
    };

    for (input, result) in results {
        match result {
            Ok(output) => report.written.push(output),
            Err(error) => {
                log::error!("Failed to process {}: {}", input.display(), error);
                report.failed.push(BatchFailure { input, error });
            }
        }
    }
    Ok(report)
}
