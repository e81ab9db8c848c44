use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::listing::truncate;
use crate::interactive::app::{InteractiveApp, View};

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    // Left: app name plus the current event, if any
    let left = match app.view {
        View::Detail => {
            if let Some(event) = app.detail_event() {
                vec![
                    Span::styled(
                        " BikeEvents ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        truncate(&event.title, width / 2),
                        Style::default().fg(Color::White),
                    ),
                ]
            } else {
                vec![Span::styled(
                    " BikeEvents ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )]
            }
        }
        View::Dashboard => vec![
            Span::styled(
                " BikeEvents ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("My Dashboard", Style::default().fg(Color::White)),
        ],
        View::Listing => vec![Span::styled(
            " BikeEvents ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )],
    };

    // Right: status indicators
    let mut right_parts = Vec::new();

    let tab_label = app
        .list_tab
        .map(|t| t.label())
        .unwrap_or("all");
    right_parts.push(Span::styled(
        format!("tab:{}", tab_label.to_lowercase()),
        Style::default().fg(Color::DarkGray),
    ));

    if !app.search_query.is_empty() {
        right_parts.push(Span::styled(
            format!(" search:{}", truncate(&app.search_query, 12)),
            Style::default().fg(Color::Yellow),
        ));
    }

    right_parts.push(Span::styled(
        format!(" {} events", app.store.len()),
        Style::default().fg(Color::DarkGray),
    ));
    right_parts.push(Span::raw(" "));

    let right_text_len: usize = right_parts.iter().map(|s| s.content.len()).sum();
    let left_text_len: usize = left.iter().map(|s| s.content.len()).sum();
    let pad = width.saturating_sub(left_text_len + right_text_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right_parts);

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
