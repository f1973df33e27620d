//! End-to-end loading of theme scripts from disk.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tincture::{
    load_theme, ExecutionLimits, KeywordClass, LexerState, ScriptError, StyleSlot, ThemeLoader,
    ThemeProperty,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn write_theme(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, source).unwrap();
    path
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
fn test_standard_fixture() {
    let theme = load_theme(fixture("night.theme")).unwrap();

    assert_eq!(theme.name(), "night");
    assert_eq!(theme.description(), "Night owl");
    assert_eq!(theme.categories(), ["dark", "vim"]);
    assert!(!theme.is_base16_flavor());
    assert!(theme.base16_palette().is_none());
    assert_eq!(theme.canvas().color(), "#011627");

    let comment = theme.style_for(LexerState::BlockComment).unwrap();
    assert_eq!(comment, &ThemeProperty::new("#637777", false, true));

    let keywords = &theme.properties().keywords;
    assert_eq!(keywords.len(), 3);
    assert_eq!(
        keywords.iter().map(|k| k.class.css_class()).collect::<Vec<_>>(),
        ["kwa", "kwb", "kwc"]
    );
    assert!(theme.keyword(KeywordClass::new(1).unwrap()).unwrap().is_bold());
}

#[test]
fn test_base16_fixture() {
    let theme = load_theme(fixture("base16/ocean.theme")).unwrap();

    assert_eq!(theme.name(), "ocean");
    assert!(theme.is_base16_flavor());
    assert!(theme.canvas().is_default());

    let palette = theme.base16_palette().unwrap();
    assert_eq!(palette.get(0), Some("#2b303b"));
    assert_eq!(palette.get(0x0E), Some("#b48ead"));
    assert!(palette.iter().all(|slot| slot.starts_with('#')));

    // Slot tables reference palette globals.
    assert_eq!(theme.properties().default.color(), "#c0c5ce");
    assert_eq!(
        theme.keyword(KeywordClass::new(1).unwrap()).unwrap().color(),
        "#b48ead"
    );
}

#[test]
fn test_broken_fixture_is_evaluation_failure() {
    let err = load_theme(fixture("broken.theme")).unwrap_err();
    match err {
        ScriptError::EvaluationFailed(message) => {
            assert!(message.contains("broken.theme"), "{message}");
        }
        other => panic!("expected EvaluationFailed, got {other:?}"),
    }
}

// =============================================================================
// Leniency
// =============================================================================

#[test]
fn test_description_and_default_only() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "min.theme",
        r##"Description = "X"
Default = { Colour = "#112233" }"##,
    );
    let theme = load_theme(&path).unwrap();

    assert_eq!(theme.description(), "X");
    assert_eq!(theme.properties().default.color(), "#112233");
    for slot in StyleSlot::ALL {
        if slot != StyleSlot::Default {
            assert_eq!(theme.properties().get(slot), &ThemeProperty::default());
        }
    }
    assert!(theme.properties().keywords.is_empty());
    assert!(theme.categories().is_empty());
}

#[test]
fn test_omitted_attributes_are_false() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "a.theme", r##"Number = { Colour = "#abcdef" }"##);
    let number = load_theme(&path)
        .unwrap()
        .style_for(LexerState::Number)
        .cloned()
        .unwrap();

    assert_eq!(number.color(), "#abcdef");
    assert!(!number.is_bold());
    assert!(!number.is_italic());
}

#[test]
fn test_keywords_with_non_table_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "kw.theme",
        r##"Keywords = { { Colour = "#ff0000" }, "not a table" }"##,
    );
    let theme = load_theme(&path).unwrap();

    assert_eq!(theme.properties().keywords.len(), 1);
    assert_eq!(
        theme.keyword(KeywordClass::new(1).unwrap()).unwrap().color(),
        "#ff0000"
    );
}

#[test]
fn test_function_entries_do_not_truncate_lists() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "fn.theme",
        r##"Keywords = { { Colour = "#aa0000" }, print, { Colour = "#00aa00" } }
Categories = { "dark", print, "warm" }"##,
    );
    let theme = load_theme(&path).unwrap();

    let keywords: Vec<_> = theme
        .properties()
        .keywords
        .iter()
        .map(|k| (k.class.css_class(), k.property.color().to_string()))
        .collect();
    assert_eq!(
        keywords,
        [
            ("kwa".to_string(), "#aa0000".to_string()),
            ("kwc".to_string(), "#00aa00".to_string()),
        ]
    );
    assert_eq!(theme.categories(), ["dark", "warm"]);
}

#[test]
fn test_base00_without_canvas() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "b.theme", r##"base00 = "#000000""##);
    let theme = load_theme(&path).unwrap();

    assert!(theme.is_base16_flavor());
    assert_eq!(theme.canvas(), &ThemeProperty::default());
}

#[test]
fn test_empty_script_is_bare_standard_theme() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "empty.lua", "");
    let theme = load_theme(&path).unwrap();

    assert_eq!(theme.name(), "empty");
    assert!(!theme.is_base16_flavor());
    assert!(StyleSlot::ALL
        .iter()
        .all(|slot| theme.properties().get(*slot).is_default()));
}

#[test]
fn test_script_can_compute_with_symbols() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "sym.theme",
        r##"
Description = "states: " .. HL_KEYWORD .. "/" .. HL_FORMAT_TRUECOLOR
if HL_INPUT_FILE == "" and not IgnoreCase then
  Operator = { Colour = "#010101", Bold = true }
end
"##,
    );
    let theme = load_theme(&path).unwrap();

    assert_eq!(theme.description(), "states: 11/12");
    assert!(theme.style_for(LexerState::Operator).unwrap().is_bold());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_syntax_error_produces_no_theme() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "bad.theme", "Default = { Colour = ");
    assert!(matches!(
        load_theme(&path),
        Err(ScriptError::EvaluationFailed(_))
    ));
}

#[test]
fn test_runtime_error_reports_line() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "err.theme", "Description = 'ok'\nlocal x = nil + 1\n");
    let err = load_theme(&path).unwrap_err();
    let message = err.diagnostic().unwrap();
    assert!(message.contains("err.theme:2:"), "{message}");
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_theme(dir.path().join("nope.theme")).unwrap_err();
    assert!(matches!(err, ScriptError::Read { .. }));
}

#[test]
fn test_infinite_loop_is_stopped() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "spin.theme", "while true do end");
    let loader = ThemeLoader::with_limits(ExecutionLimits {
        instructions: Some(1_000_000),
        memory: None,
    });
    assert!(matches!(
        loader.load(&path),
        Err(ScriptError::EvaluationFailed(_))
    ));
}

#[test]
fn test_fallback_returns_bundled_theme() {
    let theme = ThemeLoader::new().load_or_fallback(fixture("broken.theme"));
    assert_eq!(theme.name(), tincture::BUNDLED_THEME_NAME);
    assert_eq!(theme, ThemeLoader::bundled_default());
}
