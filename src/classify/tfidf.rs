//! Inference for an exported TF-IDF + linear classifier.
//!
//! The model is fitted elsewhere and exported as JSON:
//!
//! ```json
//! {
//!   "classes": ["H1", "H2", "H3"],
//!   "vocabulary": {"introduction": 0, "background": 1},
//!   "idf": [1.5, 2.1],
//!   "coef": [[0.9, -0.2], [-0.4, 1.1], [-0.5, -0.9]],
//!   "intercept": [0.1, 0.0, -0.1],
//!   "ngram_range": [1, 2],
//!   "sublinear_tf": false,
//!   "norm": "l2"
//! }
//! ```
//!
//! Two-class models may carry a single coefficient row; a positive decision
//! then selects the second class.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::LevelClassifier;
use crate::error::{Error, Result};

/// Tokens of two or more word characters.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Vector normalization applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Divide by the sum of absolute values
    L1,
    /// Divide by the Euclidean length
    L2,
}

/// Exported parameters of a fitted TF-IDF + linear model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfModel {
    /// Level labels, in model column order
    pub classes: Vec<String>,

    /// Term to feature column
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature column
    pub idf: Vec<f64>,

    /// One coefficient row per class (or a single row for two classes)
    pub coef: Vec<Vec<f64>>,

    /// One intercept per coefficient row
    pub intercept: Vec<f64>,

    /// Lowercase text before tokenizing
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Inclusive n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Use 1 + ln(tf) instead of raw counts
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Row normalization, `null` for none
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

impl TfidfModel {
    /// Check that all parameter shapes agree.
    pub fn validate(&self) -> Result<()> {
        let features = self.idf.len();

        if self.classes.is_empty() {
            return Err(Error::Model("no classes".to_string()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::Model(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        if let Some((term, col)) = self.vocabulary.iter().find(|(_, col)| **col >= features) {
            return Err(Error::Model(format!(
                "term {:?} maps to column {} but idf has {} entries",
                term, col, features
            )));
        }

        let rows = self.coef.len();
        let binary = self.classes.len() == 2 && rows == 1;
        if rows != self.classes.len() && !binary {
            return Err(Error::Model(format!(
                "{} coefficient rows for {} classes",
                rows,
                self.classes.len()
            )));
        }
        if let Some(row) = self.coef.iter().find(|row| row.len() != features) {
            return Err(Error::Model(format!(
                "coefficient row has {} entries, expected {}",
                row.len(),
                features
            )));
        }
        if self.intercept.len() != rows {
            return Err(Error::Model(format!(
                "{} intercepts for {} coefficient rows",
                self.intercept.len(),
                rows
            )));
        }

        Ok(())
    }
}

/// Level classifier backed by a [`TfidfModel`].
#[derive(Debug, Clone)]
pub struct TfidfClassifier {
    model: TfidfModel,
}

impl TfidfClassifier {
    /// Build a classifier from a validated model.
    pub fn from_model(model: TfidfModel) -> Result<Self> {
        model.validate()?;
        Ok(Self { model })
    }

    /// Load a model exported as JSON.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let model: TfidfModel = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Model(e.to_string()))?;
        Self::from_model(model)
    }

    /// Parse a model from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let model: TfidfModel =
            serde_json::from_str(json).map_err(|e| Error::Model(e.to_string()))?;
        Self::from_model(model)
    }

    /// The underlying model parameters.
    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    /// Sparse TF-IDF feature vector of a text, ordered by column.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let model = &self.model;
        let doc = if model.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = TOKEN_PATTERN.find_iter(&doc).map(|m| m.as_str()).collect();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        let (min_n, max_n) = model.ngram_range;
        for n in min_n..=max_n {
            for gram in tokens.windows(n) {
                if let Some(&col) = model.vocabulary.get(&gram.join(" ")) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, tf)| {
                let tf = if model.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (col, tf * model.idf[col])
            })
            .collect();

        let length = match model.norm {
            Some(Norm::L2) => features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => features.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            None => 1.0,
        };
        if length > 0.0 {
            for (_, w) in &mut features {
                *w /= length;
            }
        }

        features
    }

    /// Raw decision value per coefficient row.
    pub fn decision_function(&self, text: &str) -> Vec<f64> {
        let features = self.transform(text);
        self.model
            .coef
            .iter()
            .zip(&self.model.intercept)
            .map(|(row, intercept)| {
                features
                    .iter()
                    .map(|&(col, w)| row[col] * w)
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }

    /// Predicted label for one text.
    pub fn predict_one(&self, text: &str) -> &str {
        let decision = self.decision_function(text);
        let classes = &self.model.classes;

        // A single row stands for two classes only when two are declared.
        let idx = if decision.len() == 1 && classes.len() == 2 {
            usize::from(decision[0] > 0.0)
        } else {
            let mut best = 0;
            for (i, value) in decision.iter().enumerate().skip(1) {
                if *value > decision[best] {
                    best = i;
                }
            }
            best
        };
        &classes[idx]
    }
}

impl LevelClassifier for TfidfClassifier {
    fn name(&self) -> &str {
        "tfidf"
    }

    fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        Ok(texts
            .iter()
            .map(|text| self.predict_one(text).to_string())
            .collect())
    }
}
