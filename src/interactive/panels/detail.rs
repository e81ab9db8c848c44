use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::listing::{capacity_span, type_color};
use crate::interactive::app::{DetailTab, InteractiveApp};
use crate::models::EventRecord;

/// Right-hand preview of the selected event on the listing view.
pub fn draw_preview(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(event) = app.get_selected_event() else {
        let empty = Paragraph::new("No event selected").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty.block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            event.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(info_lines(event));
    lines.push(Line::from(""));
    for text_line in event.description.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Full details & registration",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

/// The full-screen detail view with its Details / Requirements / Schedule tabs.
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(event) = app.detail_event() else {
        let block = Block::default().borders(Borders::ALL).title(" Event ");
        let empty = Paragraph::new("Event not found").style(Style::default().fg(Color::Red));
        frame.render_widget(empty.block(block), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    draw_hero(frame, chunks[0], event);
    draw_tab_bar(frame, chunks[1], app.detail_tab);
    match app.detail_tab {
        DetailTab::Details => draw_details_tab(frame, chunks[2], event, app.detail_scroll),
        DetailTab::Requirements => draw_requirements_tab(frame, chunks[2], event, app.detail_scroll),
        DetailTab::Schedule => draw_schedule_tab(frame, chunks[2], event, app.detail_scroll),
    }
}

fn info_lines(event: &EventRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                event.event_type.label().to_string(),
                Style::default()
                    .fg(type_color(event.event_type))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Capacity: ", Style::default().fg(Color::DarkGray)),
            capacity_span(event),
        ]),
        Line::from(vec![
            Span::styled("When: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                match &event.time {
                    Some(time) => format!("{} · {}", event.date, time),
                    None => event.date.clone(),
                },
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Where: ", Style::default().fg(Color::DarkGray)),
            Span::styled(event.location.clone(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    if let Some(organizer) = &event.organizer {
        lines.push(Line::from(vec![
            Span::styled("Organizer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(organizer.clone(), Style::default().fg(Color::Green)),
        ]));
    }
    lines
}

fn draw_hero(frame: &mut Frame, area: Rect, event: &EventRecord) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        event.title.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(info_lines(event));

    if event.is_fully_booked() {
        lines.push(Line::from(Span::styled(
            "Fully booked. Registration closed.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Press r to register",
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, active: DetailTab) {
    let titles: Vec<Line> = DetailTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let index = DetailTab::ALL.iter().position(|t| *t == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(index)
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

fn draw_details_tab(frame: &mut Frame, area: Rect, event: &EventRecord, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About This Event ")
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = event
        .description
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();

    let mut extras = Vec::new();
    if let Some(difficulty) = &event.difficulty {
        extras.push(("Difficulty", difficulty.clone(), Color::Yellow));
    }
    if let Some(distance) = &event.distance {
        extras.push(("Distance", distance.clone(), Color::White));
    }
    if let Some(elevation) = &event.elevation {
        extras.push(("Elevation Gain", elevation.clone(), Color::White));
    }
    if let Some(address) = &event.address {
        extras.push(("Address", address.clone(), Color::White));
    }
    if !extras.is_empty() {
        lines.push(Line::from(""));
        for (label, value, color) in extras {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(color)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_requirements_tab(frame: &mut Frame, area: Rect, event: &EventRecord, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" What You'll Need ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match &event.requirements {
        Some(reqs) if !reqs.is_empty() => reqs
            .iter()
            .map(|req| {
                Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::styled(req.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect(),
        _ => vec![Line::from(Span::styled(
            "No special requirements listed for this event.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_schedule_tab(frame: &mut Frame, area: Rect, event: &EventRecord, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Event Schedule ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match &event.schedule {
        Some(schedule) if !schedule.is_empty() => schedule
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<10}", item.time),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(item.activity.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect(),
        _ => vec![Line::from(Span::styled(
            "The schedule hasn't been published yet.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(block);
    frame.render_widget(paragraph, area);
}
