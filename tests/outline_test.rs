//! Integration tests for the outline pipeline.

use std::sync::Mutex;

use pdfoutline::error::Result;
use pdfoutline::heading::{Acceptance, Rejection};
use pdfoutline::{
    is_heading, DocumentOutline, HeadingFilter, LayoutDocument, LayoutPage, LevelClassifier,
    NormalizedLine, NumberingClassifier, OutlineBuilder, OutlineEntry, RawLine, RawSpan, Verdict,
};

/// Classifier that records every call and answers from a fixed table.
struct RecordingClassifier {
    answers: Vec<(&'static str, &'static str)>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingClassifier {
    fn new(answers: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            answers,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl LevelClassifier for RecordingClassifier {
    fn name(&self) -> &str {
        "recording"
    }

    fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(texts.to_vec());
        Ok(texts
            .iter()
            .map(|text| {
                self.answers
                    .iter()
                    .find(|(t, _)| t == text)
                    .map(|(_, level)| level.to_string())
                    .unwrap_or_else(|| "H3".to_string())
            })
            .collect())
    }
}

fn span_line(text: &str, size: f64, font: &str, x: f64, y: f64, width: f64) -> RawLine {
    RawLine::new(vec![RawSpan::new(text, size, font, (x, y)).with_width(width)])
}

fn body_page(number: u32, lines: &[&str]) -> LayoutPage {
    let mut page = LayoutPage::letter(number);
    for (i, text) in lines.iter().enumerate() {
        page.add_line(span_line(text, 10.0, "Times-Roman", 72.0, 300.0 + 14.0 * i as f64, 400.0));
    }
    page
}

#[test]
fn test_scenario_no_candidates() {
    let pages = vec![body_page(
        1,
        &[
            "the committee met twice during the quarter.",
            "minutes were circulated to all members.",
        ],
    )];
    let classifier = RecordingClassifier::new(vec![]);

    let outline = OutlineBuilder::new(&classifier)
        .build(&pages, "committee_minutes")
        .unwrap();

    assert_eq!(outline.title, "the committee met twice during the quarter.");
    assert!(outline.outline.is_empty());
    assert!(classifier.calls().is_empty());
}

#[test]
fn test_scenario_numbered_heading() {
    let line = NormalizedLine::new("1. Introduction", 1)
        .with_font_size(14.0)
        .with_bold(true)
        .with_y_norm(0.1);
    assert!(is_heading(&line));
    assert_eq!(
        HeadingFilter::default().evaluate(&line),
        Verdict::Accept(Acceptance::SectionNumber)
    );
}

#[test]
fn test_scenario_linking_verb_sentence() {
    let line = NormalizedLine::new("The system is designed to improve performance.", 1)
        .with_font_size(16.0)
        .with_bold(true);
    assert!(!is_heading(&line));
    assert_eq!(
        HeadingFilter::default().evaluate(&line),
        Verdict::Reject(Rejection::LinkingVerb)
    );
}

#[test]
fn test_scenario_uppercase_heading() {
    let line = NormalizedLine::new("RESULTS", 4);
    assert_eq!(
        HeadingFilter::default().evaluate(&line),
        Verdict::Accept(Acceptance::Uppercase)
    );
}

#[test]
fn test_scenario_title_skips_numbering_line() {
    let page = body_page(1, &[]).with_text("2024\nAcme Corp Annual Report\nConfidential");
    let classifier = NumberingClassifier::default();
    let outline = OutlineBuilder::new(&classifier)
        .build(&[page], "report")
        .unwrap();
    assert_eq!(outline.title, "Acme Corp Annual Report");
}

#[test]
fn test_scenario_levels_zip_in_order() {
    let mut first = LayoutPage::letter(1);
    first.add_line(span_line("Introduction", 16.0, "Arial-Bold", 72.0, 90.0, 120.0));
    let mut second = LayoutPage::letter(2);
    second.add_line(span_line("1.1 Background", 13.0, "Arial-Bold", 72.0, 90.0, 140.0));

    let classifier =
        RecordingClassifier::new(vec![("Introduction", "H1"), ("1.1 Background", "H2")]);
    let outline = OutlineBuilder::new(&classifier)
        .build(&[first, second], "paper")
        .unwrap();

    assert_eq!(
        outline.outline,
        vec![
            OutlineEntry::new("H1", "Introduction", 1),
            OutlineEntry::new("H2", "1.1 Background", 2),
        ]
    );
    assert_eq!(
        classifier.calls(),
        vec![vec!["Introduction".to_string(), "1.1 Background".to_string()]]
    );
}

#[test]
fn test_score_fallback_uses_layout() {
    let mut page = LayoutPage::letter(1);
    // Neither guard fires for these lines; only the layout differs
    page.add_line(span_line("Results and discussion", 14.0, "Arial-Bold", 72.0, 100.0, 200.0));
    page.add_line(span_line("Results and discussion", 10.0, "Arial", 72.0, 500.0, 200.0));

    let classifier = NumberingClassifier::default();
    let candidates = OutlineBuilder::new(&classifier).candidates(&[page]);
    assert_eq!(candidates.len(), 1);
}

#[test]
fn test_outline_is_deterministic() {
    let json = r#"{"pages": [
        {"width": 612, "height": 792, "blocks": [
            {"lines": [{"spans": [{"text": "Project Charter", "size": 20, "font": "Helvetica-Bold", "origin": [200, 60], "width": 210}]}]},
            {"lines": [{"spans": [{"text": "1 Purpose", "size": 14, "font": "Helvetica-Bold", "origin": [72, 120], "width": 80}]}]},
            {"lines": [{"spans": [{"text": "This charter is binding for all teams.", "size": 10, "font": "Helvetica", "origin": [72, 140], "width": 300}]}]}
        ]},
        {"width": 612, "height": 792, "blocks": [
            {"lines": [{"spans": [{"text": "1.1 ", "size": 12, "font": "Helvetica-Bold", "origin": [72, 80], "width": 20},
                                  {"text": "Scope", "size": 12, "font": "Helvetica", "origin": [92, 80], "width": 40}]}]},
            {"lines": [{"spans": [{"text": "2 Milestones:", "size": 14, "font": "Helvetica-Bold", "origin": [72, 400], "width": 110}]}]}
        ]}
    ]}"#;
    let document = LayoutDocument::from_json_str(json).unwrap();
    let classifier = NumberingClassifier::default();
    let builder = OutlineBuilder::new(&classifier);

    let first = builder.build_from_source(&document, "charter").unwrap();
    let second = builder.build_from_source(&document, "charter").unwrap();
    assert_eq!(first, second);

    let expected = DocumentOutline {
        title: "Project Charter".to_string(),
        outline: vec![
            OutlineEntry::new("H1", "Project Charter", 1),
            OutlineEntry::new("H1", "1 Purpose", 1),
            OutlineEntry::new("H2", "1.1 Scope", 2),
            OutlineEntry::new("H1", "2 Milestones:", 2),
        ],
    };
    assert_eq!(first, expected);
}

#[test]
fn test_font_size_below_threshold_is_not_rounded_up() {
    let dump = |size: &str| {
        format!(
            r#"{{"pages": [{{"width": 612, "height": 792, "blocks": [
                {{"lines": [{{"spans": [{{"text": "Table of contents", "size": {}, "font": "Helvetica", "origin": [72, 700], "width": 100}}]}}]}}
            ]}}]}}"#,
            size
        )
    };
    let classifier = NumberingClassifier::default();
    let builder = OutlineBuilder::new(&classifier);

    let near = LayoutDocument::from_json_str(&dump("11.99999999")).unwrap();
    assert!(builder.candidates(&near.pages).is_empty());

    let at = LayoutDocument::from_json_str(&dump("12.0")).unwrap();
    assert_eq!(builder.candidates(&at.pages).len(), 1);

    let mut page = LayoutPage::letter(1);
    page.add_line(span_line("Table of contents", 11.9999999, "Helvetica", 72.0, 700.0, 100.0));
    assert!(builder.candidates(&[page]).is_empty());
}

#[test]
fn test_outline_pages_follow_document_order() {
    let json = r#"{"pages": [
        {"number": 3, "width": 612, "height": 792, "blocks": [
            {"lines": [{"spans": [{"text": "1 Scope", "size": 14, "font": "Helvetica-Bold", "origin": [72, 80], "width": 60}]}]}
        ]},
        {"number": 1, "width": 612, "height": 792, "blocks": [
            {"lines": [{"spans": [{"text": "2 Terms", "size": 14, "font": "Helvetica-Bold", "origin": [72, 80], "width": 60}]}]}
        ]},
        {"width": 612, "height": 792, "blocks": [
            {"lines": [{"spans": [{"text": "3 Notes", "size": 14, "font": "Helvetica-Bold", "origin": [72, 80], "width": 60}]}]}
        ]}
    ]}"#;
    let document = LayoutDocument::from_json_str(json).unwrap();
    let classifier = NumberingClassifier::default();
    let outline = OutlineBuilder::new(&classifier)
        .build_from_source(&document, "terms")
        .unwrap();

    let pages: Vec<u32> = outline.outline.iter().map(|e| e.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}
