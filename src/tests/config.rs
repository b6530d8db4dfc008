use super::Config;
use crate::destination::SaveModeKind;
use crate::formats::CommentMarker;

#[test]
fn test_defaults() {
    let cfg = Config::parse("").unwrap();
    assert_eq!(cfg.disable_marker, "#");
    assert_eq!(cfg.default_mode, "named");
    assert_eq!(cfg.prefs_file, "ucfedit_prefs.json");
    assert_eq!(cfg.fallback_project_name, "project");
    assert_eq!(cfg.marker(), CommentMarker::Hash);
    assert_eq!(cfg.mode(), SaveModeKind::Named);
}

#[test]
fn test_overrides() {
    let cfg = Config::parse("disable_marker = \"//\"\ndefault_mode = \"overwrite\"\n").unwrap();
    assert_eq!(cfg.marker(), CommentMarker::Slashes);
    assert_eq!(cfg.mode(), SaveModeKind::Overwrite);
    assert_eq!(cfg.prefs_file, "ucfedit_prefs.json");
}

#[test]
fn test_unknown_values_fall_back() {
    let cfg = Config::parse("disable_marker = \"--\"\ndefault_mode = \"append\"\n").unwrap();
    assert_eq!(cfg.marker(), CommentMarker::Hash);
    assert_eq!(cfg.mode(), SaveModeKind::Named);
}
