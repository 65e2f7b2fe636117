//! Click sequences driven through the engine.

use kitchen_engine::{MiddlePanel, PanelSide, Selection};

use crate::common::{ascii_options, bundled_app, code, small_app};

#[test]
fn left_click_twice_returns_to_empty() {
    let mut app = bundled_app();
    let smile = code("1f600");
    assert!(app.click_left(&smile));
    assert!(app.click_left(&smile));
    assert_eq!(app.selection(), &Selection::Empty);
}

#[test]
fn right_click_toggles_partner() {
    let mut app = bundled_app();
    let smile = code("1f600");
    let heart = code("2764-fe0f");
    app.click_left(&smile);
    app.click_right(&heart);
    assert_eq!(app.selection().left(), Some(&smile));
    assert_eq!(app.selection().right(), Some(&heart));

    app.click_right(&heart);
    assert_eq!(app.selection(), &Selection::LeftOnly { left: smile });
}

#[test]
fn right_panel_is_disabled_until_left_is_chosen() {
    let app = bundled_app();
    assert!(app.panel(PanelSide::Right).iter().all(|item| !item.enabled));
    assert!(app.panel(PanelSide::Left).iter().all(|item| item.enabled));
}

#[test]
fn right_panel_enables_exactly_the_partners() {
    let mut app = bundled_app();
    let smile = code("1f600");
    app.click_left(&smile);

    let enabled: Vec<_> = app
        .panel(PanelSide::Right)
        .into_iter()
        .filter(|item| item.enabled)
        .map(|item| item.codepoint)
        .collect();
    assert_eq!(enabled.len(), app.catalog().partners(&smile).len());
    for partner in &enabled {
        assert!(app.catalog().find_combo(&smile, partner).is_some());
    }
    assert!(!enabled.contains(&smile));
}

#[test]
fn every_enabled_right_item_can_be_clicked() {
    let mut app = bundled_app();
    let smile = code("1f600");
    app.click_left(&smile);
    let partners: Vec<_> = app
        .panel(PanelSide::Right)
        .into_iter()
        .filter_map(|item| item.on_click)
        .collect();

    for click in partners {
        assert!(app.click(click.side, &click.codepoint));
        assert!(matches!(app.middle_panel(), MiddlePanel::Combination(_)));
        assert!(app.click(click.side, &click.codepoint));
        assert_eq!(app.selection().right(), None);
    }
}

#[test]
fn gallery_lists_every_record_of_the_left_emoji() {
    let mut app = small_app(ascii_options());
    app.click_left(&code("1f600"));
    match app.middle_panel() {
        MiddlePanel::Gallery { left, combos } => {
            assert_eq!(left, code("1f600"));
            let alts: Vec<_> = combos.iter().map(|view| view.alt_text.as_str()).collect();
            assert_eq!(alts, ["1f600_2764-fe0f", "1f48b_1f600"]);
        }
        other => panic!("expected gallery, got {other:?}"),
    }
}

#[test]
fn self_pair_can_be_selected() {
    let mut app = small_app(ascii_options());
    let star = code("2b50");
    app.click_left(&star);
    assert!(app.click_right(&star));
    let combo = app.selection().combo().expect("combination");
    assert_eq!(combo.left(), &star);
    assert_eq!(combo.right(), &star);
}

#[test]
fn status_line_tracks_selection() {
    let mut app = small_app(ascii_options());
    app.click_left(&code("1f600"));
    let status = app.status().expect("status after selection");
    assert_eq!(status.text, "1f600: 2 combination partner(s)");

    app.click_right(&code("1f48b"));
    let status = app.status().expect("status after pair");
    assert_eq!(status.text, "1f48b_1f600 (released 20211115)");

    app.clear_selection();
    assert!(app.status().is_none());
}
