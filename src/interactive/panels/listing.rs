use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::models::{EventRecord, EventType};

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

pub fn type_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Mountain => Color::Yellow,
        EventType::Road => Color::Cyan,
        EventType::Cross => Color::Green,
        EventType::Endurance => Color::Magenta,
        EventType::Other => Color::Gray,
    }
}

pub fn capacity_span(event: &EventRecord) -> Span<'static> {
    let text = event.capacity_text();
    let color = if event.is_fully_booked() {
        Color::Red
    } else if event.spots_left().map_or(false, |left| left <= 10) {
        Color::Yellow
    } else {
        Color::Green
    };
    Span::styled(text, Style::default().fg(color))
}

const TAB_LABELS: [&str; 5] = ["All", "Mountain", "Road", "Cross-Country", "Endurance"];

fn tab_index(tab: Option<EventType>) -> usize {
    match tab {
        None => 0,
        Some(EventType::Mountain) => 1,
        Some(EventType::Road) => 2,
        Some(EventType::Cross) => 3,
        Some(EventType::Endurance) => 4,
        Some(EventType::Other) => 0,
    }
}

pub fn draw_listing(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    draw_tab_bar(frame, chunks[0], app);
    draw_event_list(frame, chunks[1], app);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let titles: Vec<Line> = TAB_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| Line::from(format!("{} {}", i + 1, label)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(tab_index(app.list_tab))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_event_list(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let title = if app.search_query.is_empty() {
        " Upcoming Events ".to_string()
    } else {
        format!(" Events matching \"{}\" ", app.search_query)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    if app.filtered_events.is_empty() {
        let empty = Paragraph::new("No events found. Press / to change your search, or c to create one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(32).max(10);

    let items: Vec<ListItem> = app
        .filtered_events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let selected = i == app.selected_index;
            let marker = if selected { "▶ " } else { "  " };

            let title_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:<width$}", truncate(&event.title, title_width), width = title_width),
                    title_style,
                ),
                Span::styled(
                    format!(" {:<13}", event.event_type.label()),
                    Style::default().fg(type_color(event.event_type)),
                ),
                Span::raw(" "),
                capacity_span(event),
            ]);
            let meta = Line::from(vec![
                Span::raw("    "),
                Span::styled(event.date.clone(), Style::default().fg(Color::DarkGray)),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::styled(event.location.clone(), Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(vec![line, meta])
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
