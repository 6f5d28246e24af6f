//! Heading candidate filter.
//!
//! A line is judged by an ordered decision list: rejection guards first, then
//! acceptance guards, and only when neither fires a weighted layout score.
//! Any rejection beats any acceptance, so a citation marker inside a large,
//! bold line still rejects it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{is_lowercase, is_title_case, is_uppercase, starts_uppercase};
use crate::model::NormalizedLine;
use crate::options::HeadingConfig;

static CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());
static SECTION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)*\.?\s").unwrap());

/// Tokens that mark a descriptive sentence rather than a heading.
const LINKING_VERBS: [&str; 7] = ["is", "are", "was", "has", "have", "were", "will"];

const BULLETS: [char; 3] = ['•', '-', '→'];
const TERMINAL_PUNCTUATION: [char; 5] = ['.', ';', ',', '!', '?'];

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after trimming
    Empty,
    /// Too many words for a heading
    TooManyWords,
    /// Contains a period and reads like a sentence
    SentenceLike,
    /// Entirely lowercase
    Lowercase,
    /// Contains a linking verb such as "is" or "have"
    LinkingVerb,
    /// Contains a bracketed citation marker like "[12]"
    Citation,
    /// Starts with a bullet or arrow
    Bullet,
    /// Ends with sentence punctuation
    TerminalPunctuation,
}

/// Which pattern accepted a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Starts with a section number such as "2.3.4 "
    SectionNumber,
    /// Ends with a colon
    TrailingColon,
    /// Title Case
    TitleCase,
    /// All caps, longer than two characters
    Uppercase,
}

/// Outcome of running the filter cascade on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// A rejection guard fired
    Reject(Rejection),
    /// An acceptance guard fired
    Accept(Acceptance),
    /// No guard fired; the weighted layout score decides
    Score(f64),
}

impl Verdict {
    /// Whether the verdict makes the line a heading candidate.
    pub fn is_heading(&self, min_score: f64) -> bool {
        match *self {
            Verdict::Reject(_) => false,
            Verdict::Accept(_) => true,
            Verdict::Score(score) => score >= min_score,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Empty => "empty",
            Rejection::TooManyWords => "too many words",
            Rejection::SentenceLike => "sentence with period",
            Rejection::Lowercase => "all lowercase",
            Rejection::LinkingVerb => "linking verb",
            Rejection::Citation => "citation marker",
            Rejection::Bullet => "bullet",
            Rejection::TerminalPunctuation => "terminal punctuation",
        };
        f.write_str(reason)
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Acceptance::SectionNumber => "section number",
            Acceptance::TrailingColon => "trailing colon",
            Acceptance::TitleCase => "title case",
            Acceptance::Uppercase => "uppercase",
        };
        f.write_str(reason)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Reject(reason) => write!(f, "reject ({})", reason),
            Verdict::Accept(reason) => write!(f, "accept ({})", reason),
            Verdict::Score(score) => write!(f, "score {:.2}", score),
        }
    }
}

/// Heading candidate filter with configurable thresholds.
#[derive(Debug, Clone, Default)]
pub struct HeadingFilter {
    config: HeadingConfig,
}

impl HeadingFilter {
    /// Create a filter with the given thresholds.
    pub fn new(config: HeadingConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &HeadingConfig {
        &self.config
    }

    /// Run the cascade and report which stage decided.
    pub fn evaluate(&self, line: &NormalizedLine) -> Verdict {
        let text = line.text.trim();
        if let Some(reason) = self.rejection(text) {
            return Verdict::Reject(reason);
        }
        if let Some(reason) = acceptance(text) {
            return Verdict::Accept(reason);
        }
        Verdict::Score(self.layout_score(line))
    }

    /// Whether the line is a heading candidate.
    pub fn is_heading(&self, line: &NormalizedLine) -> bool {
        self.evaluate(line).is_heading(self.config.min_score)
    }

    fn rejection(&self, text: &str) -> Option<Rejection> {
        if text.is_empty() {
            return Some(Rejection::Empty);
        }

        let word_count = text.split_whitespace().count();
        if word_count > self.config.max_words {
            return Some(Rejection::TooManyWords);
        }
        if text.contains('.') && word_count > self.config.max_sentence_words {
            return Some(Rejection::SentenceLike);
        }
        if is_lowercase(text) {
            return Some(Rejection::Lowercase);
        }
        let lowered = text.to_lowercase();
        if lowered
            .split_whitespace()
            .any(|token| LINKING_VERBS.contains(&token))
        {
            return Some(Rejection::LinkingVerb);
        }
        if CITATION.is_match(text) {
            return Some(Rejection::Citation);
        }
        if text.starts_with(BULLETS) {
            return Some(Rejection::Bullet);
        }
        if text.ends_with(TERMINAL_PUNCTUATION) && !text.ends_with(':') {
            return Some(Rejection::TerminalPunctuation);
        }

        None
    }

    /// Weighted layout score of a line, regardless of the guards.
    ///
    /// Contributions: large font +0.4, bold +0.3, fewer than ten words +0.2,
    /// top of page +0.1, all caps +0.2, centred +0.1, mostly capitalized
    /// words +0.1.
    pub fn layout_score(&self, line: &NormalizedLine) -> f64 {
        let config = &self.config;
        let text = line.text.trim();
        let words: Vec<&str> = text.split_whitespace().collect();

        let mut score = 0.0;
        if line
            .font_size
            .is_some_and(|size| size >= config.large_font_size)
        {
            score += 0.4;
        }
        if line.is_bold {
            score += 0.3;
        }
        if words.len() < 10 {
            score += 0.2;
        }
        if line.y_norm.is_some_and(|y| y < config.top_region) {
            score += 0.1;
        }
        if is_all_caps(text) {
            score += 0.2;
        }
        let (low, high) = config.center_band;
        if line
            .center_ratio()
            .is_some_and(|center| low < center && center < high)
        {
            score += 0.1;
        }
        if !words.is_empty() {
            let capitalized = words.iter().filter(|w| starts_uppercase(w)).count();
            if capitalized as f64 / words.len() as f64 > config.capitalized_ratio {
                score += 0.1;
            }
        }

        score
    }
}

fn acceptance(text: &str) -> Option<Acceptance> {
    if has_section_number(text) {
        Some(Acceptance::SectionNumber)
    } else if text.ends_with(':') {
        Some(Acceptance::TrailingColon)
    } else if is_title_case(text) {
        Some(Acceptance::TitleCase)
    } else if is_all_caps(text) {
        Some(Acceptance::Uppercase)
    } else {
        None
    }
}

/// True if the text starts with a section number such as "1 ", "1.1 " or "2.3. ".
pub fn has_section_number(text: &str) -> bool {
    SECTION_NUMBER.is_match(text)
}

fn is_all_caps(text: &str) -> bool {
    is_uppercase(text) && text.chars().count() > 2
}

/// Whether a line is a heading candidate under the default thresholds.
pub fn is_heading(line: &NormalizedLine) -> bool {
    HeadingFilter::default().is_heading(line)
}

/// Layout score of a line under the default thresholds.
pub fn layout_score(line: &NormalizedLine) -> f64 {
    HeadingFilter::default().layout_score(line)
}
