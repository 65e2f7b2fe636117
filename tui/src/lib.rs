//! TUI rendering for the emoji kitchen using ratatui.

mod clipboard;
mod input;
mod theme;

pub use clipboard::{copy_to_clipboard, service_copy_request};
pub use input::{apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use kitchen_engine::{
    App, CombinationView, EmojiCodepoint, GridGeometry, ListItem, MiddlePanel, PanelSide,
    StatusKind, UiOptions,
};

/// Terminal columns for one emoji cell in glyph mode: two for the glyph,
/// the rest is gutter.
const GLYPH_CELL_WIDTH: u16 = 4;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(rows[0]);

    draw_grid(frame, app, PanelSide::Left, columns[0], &palette);
    draw_middle(frame, app, columns[1], &palette, &glyphs);
    draw_grid(frame, app, PanelSide::Right, columns[2], &palette);
    draw_status_bar(frame, app, rows[1], &palette, &glyphs);
}

/// Text shown for an emoji: the glyph, or the codepoint in ASCII mode or
/// when the codepoint does not decode.
#[must_use]
pub fn cell_label(code: &EmojiCodepoint, options: UiOptions) -> String {
    if options.ascii_only {
        return code.as_str().to_string();
    }
    code.to_glyph()
        .unwrap_or_else(|| code.as_str().to_string())
}

/// Pad or cut `label` to exactly `width` terminal columns.
fn fit_cell(label: &str, width: usize) -> String {
    let label_width = label.width();
    if label_width <= width {
        return format!("{label}{}", " ".repeat(width - label_width));
    }
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in label.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn cell_width(app: &App) -> u16 {
    let options = app.ui_options();
    if !options.ascii_only {
        return GLYPH_CELL_WIDTH;
    }
    let widest = app
        .catalog()
        .supported()
        .iter()
        .map(|code| code.as_str().width())
        .max()
        .unwrap_or(1);
    u16::try_from(widest + 1).unwrap_or(u16::MAX)
}

fn panel_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Line::from(Span::styled(
            format!(" {title} "),
            styles::panel_title(palette, focused),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(palette, focused))
        .style(Style::default().bg(palette.bg_panel))
}

fn draw_grid(frame: &mut Frame, app: &mut App, side: PanelSide, area: Rect, palette: &Palette) {
    let focused = app.focus() == side;
    let block = panel_block(side.label(), focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = app.panel(side);
    let cell_width = cell_width(app);
    let columns = usize::from((inner.width / cell_width.max(1)).max(1));
    let height = usize::from(inner.height.max(1));

    let cursor = app.cursor(side);
    let cursor_row = cursor / columns;
    let scroll_row = (cursor_row + 1).saturating_sub(height);

    let options = app.ui_options();
    let lines: Vec<Line> = items
        .chunks(columns)
        .skip(scroll_row)
        .take(height)
        .enumerate()
        .map(|(row, chunk)| {
            let spans = chunk
                .iter()
                .enumerate()
                .map(|(col, item)| {
                    let index = (scroll_row + row) * columns + col;
                    grid_cell(item, focused && index == cursor, cell_width, options, palette)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    let columns_u16 = u16::try_from(columns).unwrap_or(u16::MAX);
    app.set_grid_geometry(
        side,
        GridGeometry {
            x: inner.x,
            y: inner.y,
            width: columns_u16.saturating_mul(cell_width).min(inner.width),
            height: inner.height,
            cell_width,
            columns,
            scroll_row,
            len: items.len(),
        },
    );
}

fn grid_cell(
    item: &ListItem,
    cursor: bool,
    width: u16,
    options: UiOptions,
    palette: &Palette,
) -> Span<'static> {
    let label = cell_label(&item.codepoint, options);
    let text = fit_cell(&label, usize::from(width));
    Span::styled(
        text,
        styles::cell(palette, item.enabled, item.highlighted, cursor),
    )
}

fn draw_middle(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel_block("Kitchen", false, palette).padding(Padding::horizontal(1));
    let options = app.ui_options();

    let (lines, alignment) = match app.middle_panel() {
        MiddlePanel::Empty => (empty_lines(palette), Alignment::Center),
        MiddlePanel::Gallery { left, combos } => (
            gallery_lines(&left, &combos, options, palette, glyphs),
            Alignment::Left,
        ),
        MiddlePanel::Combination(view) => (
            combination_lines(&view, options, palette, glyphs),
            Alignment::Left,
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn empty_lines(palette: &Palette) -> Vec<Line<'static>> {
    let hint = Style::default().fg(palette.text_muted);
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "Emoji Kitchen",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Pick an emoji on the left,", hint)),
        Line::from(Span::styled("then a partner on the right.", hint)),
    ]
}

fn gallery_lines(
    left: &EmojiCodepoint,
    combos: &[CombinationView],
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(cell_label(left, options), styles::alt_text(palette)),
            Span::styled(
                format!(" combines with {} emoji", combos.len()),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        Line::from(""),
    ];

    lines.extend(combos.iter().map(|view| {
        let record = &view.record;
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.bullet),
                Style::default().fg(palette.text_muted),
            ),
            Span::raw(format!(
                "{} {} {}  ",
                cell_label(record.left(), options),
                glyphs.plus,
                cell_label(record.right(), options),
            )),
            Span::styled(
                view.alt_text.clone(),
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(
                format!("  {}", format_date(record.date())),
                Style::default().fg(palette.date),
            ),
        ])
    }));
    lines
}

fn combination_lines(
    view: &CombinationView,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let record = &view.record;
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} {} {} {} ?",
                cell_label(record.left(), options),
                glyphs.plus,
                cell_label(record.right(), options),
                glyphs.equals,
            ),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(view.alt_text.clone(), styles::alt_text(palette))),
        Line::from(Span::styled(
            format!("released {}", format_date(record.date())),
            Style::default().fg(palette.date),
        )),
        Line::from(""),
        Line::from(Span::styled(view.image_url.clone(), styles::url(palette))),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", styles::key_highlight(palette)),
            Span::styled(" copy URL", styles::key_hint(palette)),
        ]),
    ]
}

/// `YYYYMMDD` as `YYYY-MM-DD`; anything else verbatim.
fn format_date(date: &str) -> String {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..])
    } else {
        date.to_string()
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(status) = app.status() {
        let (prefix, color) = match status.kind {
            StatusKind::Error => ("Error: ", palette.error),
            StatusKind::Info => ("", palette.text_secondary),
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{prefix}{}", status.text),
                Style::default().fg(color),
            ),
        ])
    } else {
        let key = styles::key_highlight(palette);
        let hint = styles::key_hint(palette);
        let sep = format!(" {} ", glyphs.separator);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(glyphs.arrows, key),
            Span::styled(" move", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("Tab", key),
            Span::styled(" switch", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("Enter", key),
            Span::styled(" select", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("Esc", key),
            Span::styled(" clear", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("y", key),
            Span::styled(" copy", hint),
            Span::styled(sep, hint),
            Span::styled("q", key),
            Span::styled(" quit", hint),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use kitchen_engine::{EmojiCodepoint, UiOptions};

    use super::{cell_label, fit_cell, format_date};

    fn code(raw: &str) -> EmojiCodepoint {
        EmojiCodepoint::new(raw).expect("valid codepoint")
    }

    #[test]
    fn cell_label_respects_ascii_mode() {
        let ascii = UiOptions {
            ascii_only: true,
            high_contrast: false,
        };
        assert_eq!(cell_label(&code("2764-fe0f"), ascii), "2764-fe0f");
        assert_eq!(
            cell_label(&code("2764-fe0f"), UiOptions::default()),
            "\u{2764}\u{fe0f}"
        );
    }

    #[test]
    fn fit_cell_pads_and_cuts_by_display_width() {
        assert_eq!(fit_cell("ab", 4), "ab  ");
        assert_eq!(fit_cell("abcdef", 4), "abcd");
        // A wide glyph that would straddle the edge is dropped.
        assert_eq!(fit_cell("a\u{1f600}", 2), "a ");
    }

    #[test]
    fn dates_are_dashed_when_well_formed() {
        assert_eq!(format_date("20220203"), "2022-02-03");
        assert_eq!(format_date("2022"), "2022");
    }
}
