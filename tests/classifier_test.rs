//! Integration tests for level classifiers loaded from model files.

use std::fs;

use pdfoutline::classify::TfidfModel;
use pdfoutline::{load_classifier, outline_file, Error, LevelClassifier, TfidfClassifier};
use tempfile::tempdir;

const MODEL: &str = r#"{
    "classes": ["H1", "H2", "H3"],
    "vocabulary": {"introduction": 0, "conclusion": 1, "1": 2, "method": 3, "setup": 4, "data": 5},
    "idf": [1.2, 1.2, 1.0, 1.5, 1.8, 1.8],
    "coef": [
        [1.5, 1.5, 0.0, 0.0, -0.5, -0.5],
        [-0.5, -0.5, 0.0, 1.5, 0.0, 0.0],
        [-0.5, -0.5, 0.0, -0.5, 1.5, 1.5]
    ],
    "intercept": [0.0, 0.0, 0.0],
    "ngram_range": [1, 1],
    "norm": "l2"
}"#;

const LAYOUT: &str = r#"{"pages": [{"width": 612, "height": 792, "blocks": [
    {"lines": [{"spans": [{"text": "Introduction", "size": 16, "font": "Arial-Bold", "origin": [72, 80], "width": 100}]}]},
    {"lines": [{"spans": [{"text": "2.1 Method", "size": 13, "font": "Arial-Bold", "origin": [72, 200], "width": 80}]}]},
    {"lines": [{"spans": [{"text": "2.1.1 Setup Data", "size": 12, "font": "Arial-Bold", "origin": [72, 300], "width": 120}]}]},
    {"lines": [{"spans": [{"text": "CONCLUSION", "size": 16, "font": "Arial-Bold", "origin": [72, 600], "width": 110}]}]}
]}]}"#;

#[test]
fn test_load_tfidf_model_from_file() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("heading_classifier.json");
    fs::write(&model_path, MODEL).unwrap();

    let classifier = load_classifier(Some(model_path.as_path())).unwrap();
    assert_eq!(classifier.name(), "tfidf");

    let levels = classifier
        .predict(&["CONCLUSION".to_string(), "2.1.1 Setup".to_string()])
        .unwrap();
    assert_eq!(levels, vec!["H1", "H3"]);
}

#[test]
fn test_outline_with_tfidf_model() {
    let dir = tempdir().unwrap();
    let layout_path = dir.path().join("study.layout.json");
    fs::write(&layout_path, LAYOUT).unwrap();

    let classifier = TfidfClassifier::from_json_str(MODEL).unwrap();
    let outline = outline_file(&layout_path, &classifier).unwrap();

    let levels: Vec<(&str, &str)> = outline
        .outline
        .iter()
        .map(|e| (e.level.as_str(), e.text.as_str()))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("H1", "Introduction"),
            ("H2", "2.1 Method"),
            ("H3", "2.1.1 Setup Data"),
            ("H1", "CONCLUSION"),
        ]
    );
}

#[test]
fn test_model_round_trips_through_serde() {
    let model: TfidfModel = serde_json::from_str(MODEL).unwrap();
    assert!(model.lowercase);
    assert!(!model.sublinear_tf);

    let json = serde_json::to_string(&model).unwrap();
    let reloaded = TfidfClassifier::from_json_str(&json).unwrap();
    assert_eq!(reloaded.model().classes, model.classes);
}

#[test]
fn test_invalid_model_file() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("broken.json");
    fs::write(&model_path, r#"{"classes": ["H1", "H2"], "idf": [1.0]}"#).unwrap();

    assert!(matches!(
        load_classifier(Some(model_path.as_path())),
        Err(Error::Model(_))
    ));
}
