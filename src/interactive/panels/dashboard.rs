use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use super::listing::{capacity_span, truncate, type_color};
use crate::interactive::app::{DashTab, InteractiveApp};
use crate::models::{EventRecord, EventStatus};

pub fn draw_dashboard(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    draw_tab_bar(frame, chunks[0], app);
    match app.dash_tab {
        DashTab::Organizing => draw_organizing(frame, chunks[1], app),
        DashTab::Attending => draw_attending(frame, chunks[1], app),
    }
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let titles = vec![
        Line::from(format!("Organizing ({})", app.organized.len())),
        Line::from(format!("Attending ({})", app.attending.len())),
    ];
    let index = match app.dash_tab {
        DashTab::Organizing => 0,
        DashTab::Attending => 1,
    };

    let tabs = Tabs::new(titles)
        .select(index)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {}'s Dashboard ", app.organizer))
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

fn event_item(event: &EventRecord, selected: bool, width: usize) -> ListItem<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let title_width = width.saturating_sub(30).max(10);

    let title_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
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
}

/// Organized events, partitioned into Upcoming and Past by status.
fn draw_organizing(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Events I'm Organizing ")
        .border_style(Style::default().fg(Color::Cyan));

    if app.organized.is_empty() {
        let empty = Paragraph::new("You haven't created any events yet. Press c to create one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let width = area.width as usize;
    let mut items: Vec<ListItem> = Vec::new();

    for status in [EventStatus::Upcoming, EventStatus::Past] {
        let group: Vec<(usize, &EventRecord)> = app
            .organized
            .iter()
            .enumerate()
            .filter(|(_, e)| e.status == status)
            .collect();
        if group.is_empty() {
            continue;
        }

        let (label, color) = match status {
            EventStatus::Upcoming => ("Upcoming", Color::Green),
            EventStatus::Past => ("Past", Color::DarkGray),
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} ({})", label, group.len()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))));

        for (index, event) in group {
            items.push(event_item(event, index == app.dash_selected, width));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_attending(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Events I'm Attending ")
        .border_style(Style::default().fg(Color::Cyan));

    if app.attending.is_empty() {
        let empty = Paragraph::new("You're not registered for any events yet.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let width = area.width as usize;
    let items: Vec<ListItem> = app
        .attending
        .iter()
        .enumerate()
        .map(|(i, event)| event_item(event, i == app.dash_selected, width))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
