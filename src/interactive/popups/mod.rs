pub mod confirm;
pub mod create;
pub mod help;
pub mod register;
pub mod search;

use ratatui::{layout::Rect, Frame};

use crate::interactive::app::{InteractiveApp, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::Search => search::draw(frame, area, app),
        Popup::Register => register::draw(frame, area, app),
        Popup::CreateEvent => create::draw(frame, area, app),
        Popup::Confirmation(_) => confirm::draw(frame, area, app),
        Popup::Help => help::draw(frame, area, app),
    }
}
