//! Rendering tests using the vt100 virtual terminal.

mod common;

use insta::assert_snapshot;
use ratatui::Terminal;

use kitchen_engine::{App, GridGeometry, PanelSide, UiOptions};
use kitchen_tui::{Palette, draw};

use common::{ascii_options, code, small_app};
use vt100_backend::VT100Backend;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 24;

fn render(app: &mut App) -> Terminal<VT100Backend> {
    let backend = VT100Backend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal
}

fn grid(app: &App, side: PanelSide) -> GridGeometry {
    app.view().grid(side).expect("grid recorded during draw")
}

/// Screen cell at the top-left of item `index` in a grid.
fn cell_at<'a>(
    terminal: &'a Terminal<VT100Backend>,
    grid: GridGeometry,
    index: usize,
) -> &'a vt100::Cell {
    let row = grid.y + (index / grid.columns - grid.scroll_row) as u16;
    let col = grid.x + (index % grid.columns) as u16 * grid.cell_width;
    terminal
        .backend()
        .screen()
        .cell(row, col)
        .expect("cell on screen")
}

fn rgb(color: ratatui::style::Color) -> vt100::Color {
    match color {
        ratatui::style::Color::Rgb(r, g, b) => vt100::Color::Rgb(r, g, b),
        other => panic!("expected an RGB color, got {other:?}"),
    }
}

#[test]
fn empty_selection_shows_panels_and_hints() {
    let mut app = small_app(ascii_options());
    let terminal = render(&mut app);
    let screen = terminal.backend().contents();

    for text in ["Left", "Kitchen", "Right", "Pick an emoji on the left", "quit"] {
        assert!(screen.contains(text), "missing {text:?} in\n{screen}");
    }
    assert!(screen.contains("1f600"));
    assert!(screen.contains("2764-fe0f"));
}

#[test]
fn draw_records_grid_geometry_for_both_panels() {
    let mut app = small_app(ascii_options());
    let _terminal = render(&mut app);

    let left = grid(&app, PanelSide::Left);
    let right = grid(&app, PanelSide::Right);
    assert_eq!(left.len, 5);
    assert_eq!(right.len, 5);
    // Widest label is "2764-fe0f" plus a gutter column.
    assert_eq!(left.cell_width, 10);
    assert!(left.columns >= 1);
    assert!(right.x > left.x + left.width);
}

#[test]
fn disabled_items_are_dimmed_and_partners_are_not() {
    let mut app = small_app(ascii_options());
    app.click_left(&code("1f600"));
    let terminal = render(&mut app);
    let palette = Palette::standard();
    let right = grid(&app, PanelSide::Right);

    // Index 1 (1f603) has no combination with 1f600.
    let disabled = cell_at(&terminal, right, 1);
    assert_eq!(disabled.fgcolor(), rgb(palette.text_disabled));
    assert!(!disabled.inverse());

    // Index 3 (1f48b) is a partner.
    let enabled = cell_at(&terminal, right, 3);
    assert_eq!(enabled.fgcolor(), rgb(palette.text_primary));
}

#[test]
fn selected_left_item_is_highlighted_and_cursor_is_reversed() {
    let mut app = small_app(ascii_options());
    app.click_left(&code("1f600"));
    let terminal = render(&mut app);
    let palette = Palette::standard();

    let selected = cell_at(&terminal, grid(&app, PanelSide::Left), 0);
    assert_eq!(selected.bgcolor(), rgb(palette.bg_highlight));
    assert!(selected.bold());
    // Focus moved right, so the left grid shows no cursor.
    assert!(!selected.inverse());

    // The right cursor jumped to the first partner, 2764-fe0f.
    assert_eq!(app.cursor(PanelSide::Right), 2);
    let cursor = cell_at(&terminal, grid(&app, PanelSide::Right), 2);
    assert!(cursor.inverse());
}

#[test]
fn gallery_then_combination_in_middle_panel() {
    let mut app = small_app(ascii_options());
    app.click_left(&code("1f600"));
    let screen = render(&mut app).backend().contents();
    assert!(screen.contains("1f600 combines with 2 emoji"), "{screen}");
    assert!(screen.contains("1f48b_1f600"), "{screen}");

    app.click_right(&code("2764-fe0f"));
    let screen = render(&mut app).backend().contents();
    assert!(screen.contains("released 2022-02-03"), "{screen}");
    assert!(screen.contains("1f600_2764-fe0f (released 20220203)"), "{screen}");
}

#[test]
fn mouse_click_lands_on_rendered_cell() {
    let mut app = small_app(ascii_options());
    let _terminal = render(&mut app);
    let left = grid(&app, PanelSide::Left);

    assert!(app.click_at(left.x + left.cell_width, left.y));
    assert_eq!(app.selection().left(), Some(&code("1f603")));

    // Re-render so the right grid reflects the new selection, then click a
    // disabled cell: nothing changes.
    let _terminal = render(&mut app);
    let right = grid(&app, PanelSide::Right);
    assert!(!app.click_at(right.x, right.y));
    assert_eq!(app.selection().right(), None);
}

#[test]
fn ascii_key_hints_status_bar() {
    let mut app = small_app(ascii_options());
    let terminal = render(&mut app);
    let status_row = terminal
        .backend()
        .screen()
        .rows(0, WIDTH)
        .nth(usize::from(HEIGHT - 1))
        .expect("status row");
    assert_snapshot!(
        status_row.trim(),
        @"hjkl move | Tab switch | Enter select | Esc clear | y copy | q quit"
    );
}

#[test]
fn status_errors_are_prefixed() {
    let mut app = small_app(ascii_options());
    app.finish_copy("https://example.com", Err("no display".to_string()));
    let screen = render(&mut app).backend().contents();
    assert!(screen.contains("Error: Copy failed: no display"), "{screen}");
}

#[test]
fn glyph_mode_renders_emoji() {
    let mut app = small_app(UiOptions::default());
    let screen = render(&mut app).backend().contents();
    assert!(screen.contains('\u{1f600}'), "{screen}");
    assert!(!screen.contains("1f600"), "{screen}");
}

#[test]
fn high_contrast_uses_plain_black_background() {
    let mut app = small_app(UiOptions {
        ascii_only: true,
        high_contrast: true,
    });
    let terminal = render(&mut app);
    let status_cell = terminal
        .backend()
        .screen()
        .cell(HEIGHT - 1, WIDTH - 1)
        .expect("cell on screen");
    assert_eq!(status_cell.bgcolor(), vt100::Color::Idx(0));

    let mut app = small_app(ascii_options());
    let terminal = render(&mut app);
    let status_cell = terminal
        .backend()
        .screen()
        .cell(HEIGHT - 1, WIDTH - 1)
        .expect("cell on screen");
    assert_eq!(status_cell.bgcolor(), rgb(Palette::standard().bg_dark));
}
