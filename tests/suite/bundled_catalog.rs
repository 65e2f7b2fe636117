//! Properties of the compiled-in combination table.

use kitchen_core::{KNOWN_SUPPORTED_EMOJI, UrlTemplates};
use kitchen_engine::Catalog;

use crate::common::{code, record};

fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled catalog loads")
}

#[test]
fn every_supported_emoji_has_combinations() {
    let catalog = bundled();
    assert_eq!(catalog.len(), KNOWN_SUPPORTED_EMOJI.len());
    for code in catalog.supported() {
        assert!(!catalog.combos_for(code).is_empty(), "{code} has no entry");
    }
}

#[test]
fn supported_order_matches_palette() {
    let catalog = bundled();
    let order: Vec<&str> = catalog.supported().iter().map(|c| c.as_str()).collect();
    assert_eq!(order, KNOWN_SUPPORTED_EMOJI);
    assert_eq!(catalog.position(&code("1f600")), Some(0));
}

#[test]
fn every_record_is_mirrored_under_its_partner() {
    let catalog = bundled();
    for anchor in catalog.supported() {
        for stored in catalog.combos_for(anchor) {
            let partner = stored.partner_of(anchor).expect("record involves its anchor");
            assert!(
                catalog.combos_for(partner).contains(stored),
                "{}_{} missing under {partner}",
                stored.left(),
                stored.right()
            );
        }
    }
}

#[test]
fn lookup_is_symmetric_over_the_whole_table() {
    let catalog = bundled();
    for anchor in catalog.supported() {
        for stored in catalog.combos_for(anchor) {
            let partner = stored.partner_of(anchor).expect("record involves its anchor");
            let forward = catalog.find_combo(anchor, partner);
            let backward = catalog.find_combo(partner, anchor);
            assert!(forward.is_some());
            assert_eq!(forward, backward, "{anchor} / {partner}");
        }
    }
}

#[test]
fn smiley_entry_has_expected_shape() {
    let catalog = bundled();
    let smile = code("1f600");
    let records = catalog.combos_for(&smile);
    assert_eq!(records.len(), 16);
    assert_eq!(records[0], record("1f923", "1f600", "20220815"));
    assert!(catalog.find_combo(&smile, &smile).is_none());

    let heart = code("2764-fe0f");
    assert_eq!(
        catalog.find_combo(&smile, &heart),
        Some(&record("1f600", "2764-fe0f", "20201001"))
    );
}

#[test]
fn self_combination_resolves_only_when_stored() {
    let catalog = bundled();
    let grin = code("1f603");
    let found = catalog.find_combo(&grin, &grin).expect("self record");
    assert_eq!(found.left(), &grin);
    assert_eq!(found.right(), &grin);
}

#[test]
fn glyph_urls_drop_variation_selectors() {
    let urls = UrlTemplates::default();
    assert!(urls.glyph_image_url(&code("1f600")).ends_with("/emoji_u1f600.svg"));
    assert!(urls.glyph_image_url(&code("263a-fe0f")).ends_with("/emoji_u263a.svg"));
}

#[test]
fn combo_url_matches_published_layout() {
    let urls = UrlTemplates::default();
    assert_eq!(
        urls.combo_image_url(&record("1f600", "2764-fe0f", "20220203")),
        "https://www.gstatic.com/android/keyboard/emojikitchen/20220203/u1f600/u1f600_u2764-ufe0f.png"
    );
}
