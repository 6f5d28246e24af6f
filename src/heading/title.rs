//! Document title extraction from page 1.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::title_case;

/// Leading numbering or decoration: digits, whitespace, periods, hyphens.
static TITLE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\s.\-]+").unwrap());

/// Number of leading page-1 lines considered by [`extract_title`].
pub const DEFAULT_TITLE_SCAN_LINES: usize = 5;

const MIN_TITLE_CHARS: usize = 3;
const MAX_TITLE_CHARS: usize = 200;

/// Pick a title from page-1 text, or derive one from `fallback_name`.
pub fn extract_title(first_page_text: &str, fallback_name: &str) -> String {
    find_title(first_page_text, DEFAULT_TITLE_SCAN_LINES)
        .unwrap_or_else(|| fallback_title(fallback_name))
}

/// First qualifying line among the leading `scan_lines` lines of the text.
///
/// A line qualifies when its trimmed length is strictly between 3 and 200
/// characters and something remains once its numbering prefix is stripped.
pub fn find_title(first_page_text: &str, scan_lines: usize) -> Option<String> {
    first_page_text
        .split('\n')
        .take(scan_lines)
        .map(str::trim)
        .filter(|line| {
            let len = line.chars().count();
            len > MIN_TITLE_CHARS && len < MAX_TITLE_CHARS
        })
        .map(|line| TITLE_PREFIX.replace(line, "").trim().to_string())
        .find(|title| !title.is_empty())
}

/// Title derived from a file name: underscores become spaces, then title case.
pub fn fallback_title(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

/// Document name of a layout file, without the layout and PDF extensions.
///
/// `report.layout.json`, `report.pdf.json`, `report.json` and `report.pdf`
/// all yield `report`.
pub fn document_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    for suffix in [".layout", ".pdf"] {
        if let Some(inner) = stem.strip_suffix(suffix) {
            if !inner.is_empty() {
                return inner.to_string();
            }
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_only_line_is_skipped() {
        let text = "2024\nAcme Corp Annual Report\nPrepared by Finance";
        assert_eq!(extract_title(text, "report"), "Acme Corp Annual Report");
    }

    #[test]
    fn test_prefix_stripped() {
        let text = "1. - Project Charter\nBody";
        assert_eq!(extract_title(text, "x"), "Project Charter");
    }

    #[test]
    fn test_short_and_long_lines_skipped() {
        let long = "A".repeat(200);
        let text = format!("Hi\n{}\n\nOverview Document", long);
        assert_eq!(extract_title(&text, "x"), "Overview Document");

        let just_under = "B".repeat(199);
        assert_eq!(extract_title(&just_under, "x"), just_under);
        assert_eq!(extract_title("Abcd", "x"), "Abcd");
        assert_eq!(extract_title("Abc", "fallback"), "Fallback");
    }

    #[test]
    fn test_only_first_five_lines_scanned() {
        let text = "1\n2\n3\n\n5\nLate Title";
        assert_eq!(extract_title(text, "quarterly_plan"), "Quarterly Plan");
        assert_eq!(find_title(text, 6), Some("Late Title".to_string()));
    }

    #[test]
    fn test_fallback_title() {
        assert_eq!(fallback_title("annual_report_2024"), "Annual Report 2024");
        assert_eq!(fallback_title("RFP_draft"), "Rfp Draft");
        assert_eq!(extract_title("", "my_file"), "My File");
    }

    #[test]
    fn test_document_stem() {
        assert_eq!(document_stem(Path::new("in/report.layout.json")), "report");
        assert_eq!(document_stem(Path::new("in/report.pdf.json")), "report");
        assert_eq!(document_stem(Path::new("report.json")), "report");
        assert_eq!(document_stem(Path::new("report.pdf")), "report");
        assert_eq!(document_stem(Path::new("v1.2_notes.json")), "v1.2_notes");
    }
}
