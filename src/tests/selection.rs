use super::{Preset, Selection};

fn board() -> Selection {
    Selection::all_enabled(["SW<0>", "SW<1>", "LED<0>", "BTN<0>", "HSYNC", "PS2C"])
}

#[test]
fn test_starts_all_enabled() {
    let selection = board();
    assert_eq!(selection.len(), 6);
    assert_eq!(selection.enabled_count(), 6);
    assert!(selection.disabled().is_empty());
}

#[test]
fn test_sw_led_preset() {
    let mut selection = board();
    selection.apply_preset(Preset::SwLed);

    assert!(selection.is_enabled("SW<0>"));
    assert!(selection.is_enabled("LED<0>"));
    assert!(!selection.is_enabled("BTN<0>"));
    assert!(!selection.is_enabled("HSYNC"));
    assert_eq!(selection.enabled_count(), 3);
}

#[test]
fn test_sw_led_btn_preset() {
    let mut selection = board();
    selection.apply_preset(Preset::SwLedBtn);

    assert!(selection.is_enabled("BTN<0>"));
    assert_eq!(selection.disabled().len(), 2);
}

#[test]
fn test_bulk_presets_and_invert() {
    let mut selection = board();

    selection.apply_preset(Preset::None);
    assert_eq!(selection.enabled_count(), 0);

    selection.set("HSYNC", true);
    selection.invert();
    assert!(!selection.is_enabled("HSYNC"));
    assert_eq!(selection.enabled_count(), 5);

    selection.apply_preset(Preset::All);
    assert_eq!(selection.enabled_count(), 6);
}

#[test]
fn test_unknown_names_are_ignored() {
    let mut selection = board();
    assert!(!selection.set("VGA_RED<0>", false));
    assert!(selection.set("PS2C", false));
    assert!(!selection.is_enabled("VGA_RED<0>"));
    assert_eq!(selection.len(), 6);
    assert_eq!(selection.disabled().into_iter().collect::<Vec<_>>(), vec!["PS2C"]);
}

#[test]
fn test_preset_prefixes() {
    assert_eq!(Preset::SwLed.prefixes(), Some(&["SW<", "LED<"][..]));
    assert!(Preset::All.prefixes().is_none());
}
