use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

/// Draw the full keyboard shortcuts help overlay.
pub fn draw(frame: &mut Frame, area: Rect, _app: &InteractiveApp) {
    let width: u16 = 70;
    let height: u16 = 18;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let separator_style = Style::default().fg(Color::DarkGray);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{:<24}", "Listing"), header_style),
            Span::styled(format!("{:<24}", "Detail"), header_style),
            Span::styled("Dashboard", header_style),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<24}", "─".repeat(10)), separator_style),
            Span::styled(format!("{:<24}", "─".repeat(10)), separator_style),
            Span::styled("─".repeat(10), separator_style),
        ]),
        build_help_row("j/k", "Move up/down", "1-3", "Switch tab", "Tab", "Switch tab", key_style, desc_style),
        build_help_row("←/→", "Category tab", "j/k", "Scroll", "j/k", "Move", key_style, desc_style),
        build_help_row("1-5", "Jump to tab", "r", "Register", "d", "Delete event", key_style, desc_style),
        build_help_row("/", "Search", "Esc", "Back to list", "x", "Cancel reg.", key_style, desc_style),
        build_help_row("Enter", "Open details", "", "", "Esc", "Back to list", key_style, desc_style),
        build_help_row("c", "Create event", "", "", "", "", key_style, desc_style),
        build_help_row("d", "Dashboard", "", "", "", "", key_style, desc_style),
        build_help_row("x", "Dismiss toasts", "", "", "", "", key_style, desc_style),
        build_help_row("q", "Quit", "", "", "", "", key_style, desc_style),
        Line::from(""),
        Line::from(vec![
            Span::styled("Forms: ", header_style),
            Span::styled("Tab", key_style),
            Span::styled(" next field, ", desc_style),
            Span::styled("Enter", key_style),
            Span::styled(" submit, ", desc_style),
            Span::styled("Esc", key_style),
            Span::styled(" cancel", desc_style),
        ]),
    ];

    let content = Paragraph::new(lines);
    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    frame.render_widget(content, content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}

/// Build a single row across the three view columns.
fn build_help_row<'a>(
    list_key: &'a str,
    list_desc: &'a str,
    detail_key: &'a str,
    detail_desc: &'a str,
    dash_key: &'a str,
    dash_desc: &'a str,
    key_style: Style,
    desc_style: Style,
) -> Line<'a> {
    let mut spans = Vec::new();

    if list_key.is_empty() {
        spans.push(Span::styled(format!("{:<24}", ""), desc_style));
    } else {
        spans.push(Span::styled(format!("{:<7}", list_key), key_style));
        spans.push(Span::styled(format!("{:<17}", list_desc), desc_style));
    }

    if detail_key.is_empty() {
        spans.push(Span::styled(format!("{:<24}", ""), desc_style));
    } else {
        spans.push(Span::styled(format!("{:<5}", detail_key), key_style));
        spans.push(Span::styled(format!("{:<19}", detail_desc), desc_style));
    }

    if !dash_key.is_empty() {
        spans.push(Span::styled(format!("{:<5}", dash_key), key_style));
        spans.push(Span::styled(dash_desc, desc_style));
    }

    Line::from(spans)
}
