use super::UcfFormat;
use crate::formats::{CommentMarker, Format};

#[test]
fn test_both_markers_are_comments() {
    let format = UcfFormat;
    assert!(format.is_comment("# Switches"));
    assert!(format.is_comment("   // LEDs"));
    assert!(format.is_comment("#NET \"SW<0>\" LOC = \"P11\";"));
    assert!(!format.is_comment("NET \"SW<0>\" LOC = \"P11\"; # trailing"));
    assert!(!format.is_comment(""));
}

#[test]
fn test_section_title_strips_markers() {
    let format = UcfFormat;
    assert_eq!(format.section_title("# Switches"), Some("Switches"));
    assert_eq!(format.section_title("  ## ---- LEDs ----  "), Some("---- LEDs ----"));
    assert_eq!(format.section_title("// Buttons"), Some("Buttons"));
    assert_eq!(format.section_title("#"), None);
    assert_eq!(format.section_title("//   "), None);
    assert_eq!(format.section_title("NET \"A\";"), None);
}

#[test]
fn test_declared_signal_is_exact() {
    let format = UcfFormat;
    assert_eq!(
        format.declared_signal("NET \"SW<0>\" LOC = \"P11\";"),
        Some("SW<0>")
    );
    assert_eq!(
        format.declared_signal("  net \"clk\" LOC = \"B8\";"),
        Some("clk")
    );
    assert_eq!(format.declared_signal("NET SW LOC = \"P11\";"), None);
    assert_eq!(format.declared_signal("TIMESPEC TS_clk = PERIOD 20 ns;"), None);
    assert_eq!(format.declared_signal("# NET \"SW<0>\";"), None);
}

#[test]
fn test_location_with_and_without_quotes() {
    let format = UcfFormat;
    assert_eq!(format.location("NET \"SW<0>\" LOC = \"P11\";"), Some("P11"));
    assert_eq!(format.location("NET \"SW<0>\" LOC=N25 | IOSTANDARD=LVCMOS33;"), Some("N25"));
    assert_eq!(format.location("NET \"clk\" CLOCK_DEDICATED_ROUTE = FALSE;"), None);
}

#[test]
fn test_comment_marker_lookup() {
    assert_eq!(CommentMarker::parse("#"), Some(CommentMarker::Hash));
    assert_eq!(CommentMarker::parse(" // "), Some(CommentMarker::Slashes));
    assert_eq!(CommentMarker::parse("--"), None);
    assert_eq!(CommentMarker::default().as_str(), "#");
}
