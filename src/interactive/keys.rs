use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::app::{Popup, View};

#[derive(Debug, Clone, Copy)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    ScrollUp,
    ScrollDown,
    NextTab,
    PrevTab,
    SelectTab(usize),

    // View switching
    Open,
    Back,
    Dashboard,

    // Event actions
    Search,
    NewEvent,
    Register,
    Delete,
    CancelRegistration,

    // Popup editing
    Confirm,
    Cancel,
    TypeChar(char),
    Backspace,
    NextField,
    PrevField,
    CycleLeft,
    CycleRight,
    ExternalEditor,

    // General
    Help,
    DismissNotification,
    Quit,

    None,
}

pub fn map_key(key: KeyEvent, view: View, popup: &Option<Popup>) -> Action {
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    match view {
        View::Listing => map_listing_key(key),
        View::Detail => map_detail_key(key),
        View::Dashboard => map_dashboard_key(key),
    }
}

fn map_listing_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('h') | KeyCode::Left => Action::PrevTab,
        KeyCode::Char('l') | KeyCode::Right => Action::NextTab,
        KeyCode::Char(c @ '1'..='5') => Action::SelectTab(c as usize - '1' as usize),
        KeyCode::Enter => Action::Open,
        KeyCode::Char('/') => Action::Search,
        KeyCode::Char('c') => Action::NewEvent,
        KeyCode::Char('d') => Action::Dashboard,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_detail_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Back,
        KeyCode::Tab => Action::NextTab,
        KeyCode::Char(c @ '1'..='3') => Action::SelectTab(c as usize - '1' as usize),
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('r') | KeyCode::Enter => Action::Register,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_dashboard_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Back,
        KeyCode::Tab => Action::NextTab,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Open,
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Char('x') => Action::CancelRegistration,
        KeyCode::Char('c') => Action::NewEvent,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Search => match key.code {
            KeyCode::Enter => Action::Confirm,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::TypeChar(c),
            _ => Action::None,
        },
        Popup::Register => match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PrevField,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::TypeChar(c),
            _ => Action::None,
        },
        Popup::CreateEvent => match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PrevField,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Left => Action::CycleLeft,
            KeyCode::Right => Action::CycleRight,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::ExternalEditor
            }
            KeyCode::Char(c) => Action::TypeChar(c),
            _ => Action::None,
        },
        Popup::Confirmation(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}
