use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::{CreateFormState, InteractiveApp};
use crate::interactive::layout::centered_popup;
use crate::interactive::panels::listing::truncate;

/// Draw the event creation form popup.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 64;
    let height: u16 = 18;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create New Event ")
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let form = &app.create_form;
    let max_value_width = (inner.width as usize).saturating_sub(22);

    for (i, label) in CreateFormState::LABELS.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(2) {
            break;
        }

        let is_active = i == form.active_field && !form.submitting;
        let raw = form.field_display(i);
        let shown = if raw.is_empty() {
            placeholder(i).to_string()
        } else {
            truncate(&raw, max_value_width)
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

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = if form.submitting {
        Line::from(Span::styled(
            "Creating event...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        let hint = match form.active_field {
            CreateFormState::TYPE_FIELD | CreateFormState::DIFFICULTY_FIELD => {
                "←/→: Change  Tab: Next field  Esc: Cancel"
            }
            CreateFormState::DESCRIPTION_FIELD => {
                "Ctrl+E: External editor  Tab: Next field  Esc: Cancel"
            }
            i if i + 1 == CreateFormState::FIELD_COUNT => {
                "Enter: Create event  Shift+Tab: Back  Esc: Cancel"
            }
            _ => "Tab: Next field  Enter: Next  Esc: Cancel",
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    };
    frame.render_widget(Paragraph::new(hints), hints_area);
}

fn placeholder(field: usize) -> &'static str {
    match field {
        0 => "<event title>",
        2 => "YYYY-MM-DD",
        3 => "8:00 AM",
        4 => "4:00 PM",
        5 => "<venue name>",
        6 => "<full address>",
        7 => "<describe your event>",
        9 => "25 miles",
        10 => "unlimited",
        11 => "helmet; water; spare tube",
        _ => "",
    }
}
