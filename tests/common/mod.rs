//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Write;

use kitchen_engine::{App, Catalog, KitchenConfig, UiOptions, UrlTemplates};
use kitchen_types::{CombinationRecord, EmojiCodepoint};

pub fn code(raw: &str) -> EmojiCodepoint {
    EmojiCodepoint::new(raw).expect("valid codepoint")
}

pub fn record(left: &str, right: &str, date: &str) -> CombinationRecord {
    CombinationRecord::new(code(left), code(right), date)
}

/// Five emoji: 1f600 pairs with 2764-fe0f and 1f48b, 2b50 pairs with
/// itself, 1f603 pairs with nothing.
pub fn small_catalog() -> Catalog {
    let heart_smile = record("1f600", "2764-fe0f", "20220203");
    let kiss_smile = record("1f48b", "1f600", "20211115");
    let star_star = record("2b50", "2b50", "20201001");
    Catalog::from_parts(
        ["1f600", "1f603", "2764-fe0f", "1f48b", "2b50"]
            .iter()
            .map(|raw| code(raw))
            .collect(),
        vec![
            (code("1f600"), vec![heart_smile.clone(), kiss_smile.clone()]),
            (code("1f603"), vec![]),
            (code("2764-fe0f"), vec![heart_smile]),
            (code("1f48b"), vec![kiss_smile]),
            (code("2b50"), vec![star_star]),
        ],
    )
    .expect("valid catalog")
}

pub fn ascii_options() -> UiOptions {
    UiOptions {
        ascii_only: true,
        high_contrast: false,
    }
}

pub fn small_app(options: UiOptions) -> App {
    App::with_catalog(small_catalog(), UrlTemplates::default(), options)
}

pub fn bundled_app() -> App {
    App::from_config(&KitchenConfig::default()).expect("bundled catalog loads")
}

pub fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
