//! Property tests for the toggle engine over generated constraint files.

use proptest::prelude::*;
use std::collections::HashSet;
use ucfedit::lines::render;
use ucfedit::model::Document;
use ucfedit::toggle::ToggleEngine;

const NAMES: [&str; 6] = ["SW<0>", "SW<1>", "LED<0>", "BTN<0>", "HSYNC", "clk"];

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..NAMES.len(), "[A-Z][0-9]{1,2}")
            .prop_map(|(i, pin)| format!("NET \"{}\" LOC = \"{pin}\";", NAMES[i])),
        (0..NAMES.len()).prop_map(|i| format!("  net \"{}\" IOSTANDARD = LVCMOS33;", NAMES[i])),
        (0..NAMES.len()).prop_map(|i| format!("# NET \"{}\" LOC = \"A1\";", NAMES[i])),
        "[A-Za-z ]{0,12}".prop_map(|title| format!("# {title}")),
        "[A-Za-z ]{0,12}".prop_map(|title| format!("// {title}")),
        Just(String::new()),
        Just("CONFIG PART = XC3S100E-CP132;".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    (prop::collection::vec(line(), 0..24), any::<bool>(), any::<bool>()).prop_map(
        |(lines, crlf, terminated)| {
            let ending = if crlf { "\r\n" } else { "\n" };
            let mut text = lines.join(ending);
            if terminated && !lines.is_empty() {
                text.push_str(ending);
            }
            text
        },
    )
}

fn disabled() -> impl Strategy<Value = HashSet<String>> {
    prop::collection::hash_set(
        prop_oneof![
            (0..NAMES.len()).prop_map(|i| NAMES[i].to_string()),
            Just("CONFIG".to_string()),
        ],
        0..4,
    )
}

proptest! {
    #[test]
    fn toggling_keeps_line_count(text in document(), set in disabled()) {
        let doc = Document::parse_bytes(text.as_bytes());
        let out = doc.toggled(&ToggleEngine::default(), &set);

        prop_assert_eq!(out.len(), doc.lines().len());
        for (position, line) in out.iter().enumerate() {
            prop_assert_eq!(line.position, position);
        }
    }

    #[test]
    fn disabling_is_idempotent(text in document(), set in disabled()) {
        let doc = Document::parse_bytes(text.as_bytes());
        let engine = ToggleEngine::default();

        let once = engine.apply(doc.lines().lines(), doc.signal_index(), &set);
        let twice = engine.apply(&once, doc.signal_index(), &set);

        prop_assert_eq!(render(&once), render(&twice));
    }

    #[test]
    fn empty_set_round_trips(text in document()) {
        let doc = Document::parse_bytes(text.as_bytes());
        let out = doc.toggled(&ToggleEngine::default(), &HashSet::new());

        prop_assert_eq!(render(&out), render(doc.lines().lines()));
    }

    #[test]
    fn only_disabled_declarations_change(text in document(), set in disabled()) {
        let doc = Document::parse_bytes(text.as_bytes());
        let out = doc.toggled(&ToggleEngine::default(), &set);

        let touched: HashSet<usize> = set
            .iter()
            .filter_map(|name| doc.signal(name))
            .flat_map(|signal| signal.positions.iter().copied())
            .collect();

        for (before, after) in doc.lines().lines().iter().zip(&out) {
            if touched.contains(&before.position) {
                prop_assert_eq!(after.text.clone(), format!("# {}", before.text));
            } else {
                prop_assert_eq!(&after.text, &before.text);
            }
        }
    }
}

#[test]
fn terminated_files_round_trip_byte_for_byte() {
    for text in [
        "# Switches\nNET \"SW<0>\" LOC = \"N25\";\n\nNET \"SW<1>\" LOC = \"L3\";\n",
        "# Switches\r\nNET \"SW<0>\" LOC = \"N25\";\r\n\r\nNET \"SW<1>\" LOC = \"L3\";\r\n",
    ] {
        let doc = Document::parse_bytes(text.as_bytes());
        let out = doc.toggled(&ToggleEngine::default(), &HashSet::new());
        assert_eq!(render(&out), text);
    }
}
