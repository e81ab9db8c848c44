use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::{InteractiveApp, RegisterFormState};
use crate::interactive::layout::centered_popup;
use crate::interactive::panels::listing::truncate;

/// Draw the registration dialog.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 56;
    let height: u16 = 11;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let title = app
        .detail_event()
        .map(|e| format!(" Register for {} ", truncate(&e.title, 38)))
        .unwrap_or_else(|| " Register ".to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let form = &app.register_form;
    let max_value_width = (inner.width as usize).saturating_sub(22);

    for (i, label) in RegisterFormState::LABELS.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(2) {
            break;
        }

        let is_active = i == form.active_field && !form.submitting;
        let value = form.field(i);
        let shown = if value.is_empty() && is_active {
            "<type here>".to_string()
        } else {
            truncate(value, max_value_width)
        };

        let label_style = if is_active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if is_active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let indicator = if is_active { "▶ " } else { "  " };

        let line = Line::from(vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<18}", label), label_style),
            Span::styled(shown, value_style),
        ]);
        let row_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    // Validation error, if any
    if let Some(error) = &form.error {
        let error_area = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(2),
            inner.width,
            1,
        );
        let error_widget = Paragraph::new(Line::from(Span::styled(
            truncate(error, inner.width as usize),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_widget, error_area);
    }

    // Hints / submitting state at the bottom
    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = if form.submitting {
        Line::from(Span::styled(
            "Submitting registration...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Tab: Next field  Enter: Submit  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(hints), hints_area);
}
