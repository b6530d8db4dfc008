use super::TogglePlan;
use crate::model::Document;
use crate::toggle::ToggleEngine;

const BOARD: &str = "# Switches\nNET \"SW<0>\" LOC = \"N25\";\n# LEDs\nNET \"LED<0>\" LOC = \"D11\";\n";

#[test]
fn test_plan_captures_disabled_signals() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    let mut selection = doc.default_selection();
    selection.set("LED<0>", false);

    let plan = TogglePlan::from_selection(&selection);

    assert_eq!(plan.disabled.len(), 1);
    assert!(plan.disabled.contains("LED<0>"));
}

#[test]
fn test_plan_json_shape() {
    let plan: TogglePlan = serde_json::from_str(r#"{"disabled":["SW<0>","LED<0>"]}"#).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    assert_eq!(json, r#"{"disabled":["LED<0>","SW<0>"]}"#);

    let empty: TogglePlan = serde_json::from_str("{}").unwrap();
    assert!(empty.disabled.is_empty());
}

#[test]
fn test_restore_resets_other_signals() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    let mut selection = doc.default_selection();
    selection.select_none();

    let plan: TogglePlan = serde_json::from_str(r#"{"disabled":["SW<0>","GHOST"]}"#).unwrap();
    plan.restore(&mut selection);

    assert!(!selection.is_enabled("SW<0>"));
    assert!(selection.is_enabled("LED<0>"));
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_apply_plan_to_document() {
    let doc = Document::parse_bytes(BOARD.as_bytes());
    let plan: TogglePlan = serde_json::from_str(r#"{"disabled":["SW<0>"]}"#).unwrap();

    let out = plan.apply(&doc, &ToggleEngine::default());

    assert_eq!(out[1].text, "# NET \"SW<0>\" LOC = \"N25\";\n");
    assert_eq!(out[3].text, "NET \"LED<0>\" LOC = \"D11\";\n");
}
