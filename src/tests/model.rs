use super::Document;
use crate::section::DEFAULT_SECTION;
use std::fs;
use tempfile::tempdir;

const BOARD: &str = "# Switches\nNET \"SW<0>\" LOC = \"N25\";\n# LEDs\nNET \"LED<0>\" LOC = \"D11\";\nNET \"SW<0>\" LOC = \"N25\";\n";

#[test]
fn test_open_records_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.ucf");
    fs::write(&path, BOARD).unwrap();

    let doc = Document::open(&path).unwrap();

    assert_eq!(doc.source(), Some(path.as_path()));
    assert_eq!(doc.lines().len(), 5);
    assert_eq!(doc.sections().len(), 2);
}

#[test]
fn test_parse_bytes_has_no_source() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    assert!(doc.source().is_none());
    assert_eq!(doc.sections()[0].title, "Switches");
    assert!(doc.sections().iter().all(|section| !section.is_default()));
}

#[test]
fn test_read_api_for_unknown_names() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    assert!(doc.signal("SW<9>").is_none());
    assert!(doc.location("SW<9>").is_none());
    assert!(doc.section("VGA").is_none());
    assert!(doc.signals_in("VGA").is_empty());
    assert!(doc.signals_in(DEFAULT_SECTION).is_empty());
}

#[test]
fn test_signal_index_keeps_declaration_order() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    let names: Vec<&str> = doc.signal_index().names().collect();
    assert_eq!(names, vec!["SW<0>", "LED<0>"]);
    assert!(doc.signal_index().contains("LED<0>"));
    assert_eq!(doc.signal_index().iter().count(), 2);
}

#[test]
fn test_default_selection_enables_everything() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    let selection = doc.default_selection();

    assert_eq!(selection.len(), 2);
    assert_eq!(selection.enabled_count(), 2);
    assert!(selection.disabled().is_empty());
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempdir().unwrap();
    assert!(Document::open(&dir.path().join("nope.ucf"))
        .unwrap_err()
        .is_io());
}
