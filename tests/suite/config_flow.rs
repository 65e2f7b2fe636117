//! Startup from configuration files.

use kitchen_core::BUNDLED_CATALOG_JSON;
use kitchen_engine::{App, KitchenConfig, UiOptions};

use crate::common::{code, record, write_temp};

#[test]
fn url_overrides_reach_the_engine() {
    let file = write_temp(
        r#"
[app]
ascii_only = true

[urls]
glyph_base = "https://mirror.example.com/svg/"
combo_base = "https://mirror.example.com/kitchen"
"#,
    );
    let config = KitchenConfig::load_from(file.path()).expect("config parses");
    let app = App::from_config(&config).expect("app builds");

    assert_eq!(
        app.ui_options(),
        UiOptions {
            ascii_only: true,
            high_contrast: false,
        }
    );
    assert_eq!(
        app.urls().glyph_image_url(&code("1f600")),
        "https://mirror.example.com/svg/emoji_u1f600.svg"
    );
    assert_eq!(
        app.urls()
            .combo_image_url(&record("1f600", "2764-fe0f", "20220203")),
        "https://mirror.example.com/kitchen/20220203/u1f600/u1f600_u2764-ufe0f.png"
    );
}

#[test]
fn catalog_override_is_loaded_from_disk() {
    let catalog = write_temp(BUNDLED_CATALOG_JSON);
    let config_text = format!(
        "[catalog]\npath = {:?}\n",
        catalog.path().display().to_string()
    );
    let file = write_temp(&config_text);
    let config = KitchenConfig::load_from(file.path()).expect("config parses");

    let app = App::from_config(&config).expect("override loads");
    assert_eq!(app.catalog().record_count(), 3254);
}

#[test]
fn broken_catalog_override_is_fatal() {
    let catalog = write_temp("{}");
    let config_text = format!(
        "[catalog]\npath = {:?}\n",
        catalog.path().display().to_string()
    );
    let file = write_temp(&config_text);
    let config = KitchenConfig::load_from(file.path()).expect("config parses");

    let err = App::from_config(&config).unwrap_err();
    assert!(
        format!("{err:#}").contains("has no catalog entry"),
        "{err:#}"
    );
}

#[test]
fn missing_catalog_override_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.json");
    let file = write_temp(&format!(
        "[catalog]\npath = {:?}\n",
        missing.display().to_string()
    ));
    let config = KitchenConfig::load_from(file.path()).expect("config parses");
    assert!(App::from_config(&config).is_err());
}
