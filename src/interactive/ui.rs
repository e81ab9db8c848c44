use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{DashTab, InteractiveApp, View};
use super::layout::{app_layout, panel_layout};
use super::notifications;
use super::panels::dashboard::draw_dashboard;
use super::panels::detail::{draw_detail, draw_preview};
use super::panels::header::draw_header;
use super::panels::listing::draw_listing;
use super::popups::draw_popup;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();
    let layout = app_layout(area, app.visible_notifications());

    draw_header(frame, layout.header, app);

    match app.view {
        View::Listing => {
            let panels = panel_layout(layout.main);
            draw_listing(frame, panels.left, app);
            if panels.right.width > 0 {
                draw_preview(frame, panels.right, app);
            }
        }
        View::Detail => draw_detail(frame, layout.main, app),
        View::Dashboard => draw_dashboard(frame, layout.main, app),
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    // Popups render over everything else
    draw_popup(frame, area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hint = match app.view {
        View::Listing => "j/k: Move  ←/→: Category  /: Search  Enter: Details  c: Create  d: Dashboard  ?: Help  q: Quit",
        View::Detail => "1-3: Tabs  j/k: Scroll  r: Register  Esc: Back  ?: Help",
        View::Dashboard => match app.dash_tab {
            DashTab::Organizing => "Tab: Attending  j/k: Move  d: Delete  c: Create  Esc: Back  ?: Help",
            DashTab::Attending => "Tab: Organizing  j/k: Move  x: Cancel registration  Esc: Back  ?: Help",
        },
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hint),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
