//! Model-free level assignment from section numbering.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LevelClassifier;
use crate::error::Result;

static SECTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\.?\s").unwrap());

/// Assigns `H{n}` from the depth of a leading section number.
///
/// "3 Results" is H1, "3.2 Method" is H2, "3.2.1 Setup" is H3; depth is capped
/// at `max_level`. Unnumbered headings are H1.
#[derive(Debug, Clone)]
pub struct NumberingClassifier {
    max_level: u8,
}

impl NumberingClassifier {
    /// Create a classifier with the given deepest level (at least 1).
    pub fn new(max_level: u8) -> Self {
        Self {
            max_level: max_level.max(1),
        }
    }

    /// Level number for one heading.
    pub fn level_of(&self, text: &str) -> u8 {
        let depth = SECTION_PREFIX
            .captures(text.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().split('.').count())
            .unwrap_or(1);
        depth.min(self.max_level as usize) as u8
    }
}

impl Default for NumberingClassifier {
    fn default() -> Self {
        Self::new(4)
    }
}

impl LevelClassifier for NumberingClassifier {
    fn name(&self) -> &str {
        "numbering"
    }

    fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        Ok(texts
            .iter()
            .map(|text| format!("H{}", self.level_of(text)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_follow_numbering_depth() {
        let classifier = NumberingClassifier::default();
        assert_eq!(classifier.level_of("Introduction"), 1);
        assert_eq!(classifier.level_of("3 Results"), 1);
        assert_eq!(classifier.level_of("3. Results"), 1);
        assert_eq!(classifier.level_of("3.2 Method"), 2);
        assert_eq!(classifier.level_of("3.2.1 Setup"), 3);
        assert_eq!(classifier.level_of("1.2.3.4.5 Deep"), 4);
    }

    #[test]
    fn test_max_level_floor() {
        let classifier = NumberingClassifier::new(0);
        assert_eq!(classifier.level_of("1.1 Scope"), 1);
    }

    #[test]
    fn test_predict_preserves_order() {
        let classifier = NumberingClassifier::new(3);
        let texts = vec![
            "2.1.1 Detail".to_string(),
            "Summary".to_string(),
            "2.1 Overview".to_string(),
        ];
        assert_eq!(
            classifier.predict(&texts).unwrap(),
            vec!["H3", "H1", "H2"]
        );
    }
}
