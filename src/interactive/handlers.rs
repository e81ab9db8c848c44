use std::env;
use std::io;
use std::process::Command;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{ConfirmAction, CreateFormState, InteractiveApp, Popup, View};
use super::event::{Event, EventHandler};
use super::keys::{map_key, Action};
use crate::logging::{log_debug, log_error, log_info};

pub async fn run_interactive_mode() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = InteractiveApp::new();
    let events = EventHandler::new(100);
    log_info(&format!(
        "Interactive session started with {} catalog events",
        app.store.len()
    ));

    loop {
        // Hand the terminal to $EDITOR before drawing, if requested
        if app.pending_editor {
            app.pending_editor = false;
            let current = app.create_form.description.clone();
            let edited = launch_external_editor(&mut terminal, &current)?;
            app.handle_external_editor_result(edited);
        }

        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(Box::new(e));
        }

        // A queued submit runs after the submitting frame is on screen.
        if let Some(pending) = app.take_pending_submit() {
            log_debug(&format!("Running submit: {:?}", pending));
            app.perform_submit(pending).await;
            continue;
        }

        match events.recv()? {
            Event::Key(key_event) => {
                let action = map_key(key_event, app.view, &app.popup);
                apply_action(&mut app, action);
            }
            Event::Tick => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting interactive mode");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

pub fn apply_action(app: &mut InteractiveApp, action: Action) {
    if let Some(popup) = app.popup {
        apply_popup_action(app, popup, action);
        return;
    }

    match app.view {
        View::Listing => apply_listing_action(app, action),
        View::Detail => apply_detail_action(app, action),
        View::Dashboard => apply_dashboard_action(app, action),
    }
}

fn apply_listing_action(app: &mut InteractiveApp, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveDown => app.move_selection_down(),
        Action::MoveUp => app.move_selection_up(),
        Action::NextTab => app.next_tab(),
        Action::PrevTab => app.prev_tab(),
        Action::SelectTab(i) => app.select_tab(i),
        Action::Open => app.open_detail(),
        Action::Search => app.open_search(),
        Action::NewEvent => app.open_creation(),
        Action::Dashboard => app.open_dashboard(),
        Action::DismissNotification => app.dismiss_notifications(),
        Action::Help => app.popup = Some(Popup::Help),
        _ => {}
    }
}

fn apply_detail_action(app: &mut InteractiveApp, action: Action) {
    match action {
        Action::Back => app.back_to_listing(),
        Action::NextTab => app.next_detail_tab(),
        Action::SelectTab(i) => app.select_detail_tab(i),
        Action::ScrollDown => app.detail_scroll = app.detail_scroll.saturating_add(1),
        Action::ScrollUp => app.detail_scroll = app.detail_scroll.saturating_sub(1),
        Action::Register => app.open_registration(),
        Action::DismissNotification => app.dismiss_notifications(),
        Action::Help => app.popup = Some(Popup::Help),
        _ => {}
    }
}

fn apply_dashboard_action(app: &mut InteractiveApp, action: Action) {
    match action {
        Action::Back => app.back_to_listing(),
        Action::NextTab => app.toggle_dash_tab(),
        Action::MoveDown => app.dash_move_down(),
        Action::MoveUp => app.dash_move_up(),
        Action::Open => {
            if let Some(id) = app.dash_selected_event().map(|e| e.id) {
                app.open_detail_for(id);
            }
        }
        Action::Delete => app.request_delete(),
        Action::CancelRegistration => app.cancel_registration(),
        Action::NewEvent => app.open_creation(),
        Action::Help => app.popup = Some(Popup::Help),
        _ => {}
    }
}

fn apply_popup_action(app: &mut InteractiveApp, popup: Popup, action: Action) {
    match popup {
        Popup::Search => match action {
            Action::Confirm => app.apply_search(),
            Action::Cancel => app.cancel_search(),
            Action::TypeChar(c) => app.search_input.push(c),
            Action::Backspace => {
                app.search_input.pop();
            }
            _ => {}
        },
        Popup::Register => {
            if app.register_form.submitting {
                return;
            }
            match action {
                Action::Cancel => app.close_registration(),
                Action::NextField => {
                    app.register_form.active_field = (app.register_form.active_field + 1)
                        % super::app::RegisterFormState::FIELD_COUNT;
                }
                Action::PrevField => {
                    let count = super::app::RegisterFormState::FIELD_COUNT;
                    app.register_form.active_field =
                        (app.register_form.active_field + count - 1) % count;
                }
                Action::TypeChar(c) => app.register_form.field_mut().push(c),
                Action::Backspace => {
                    app.register_form.field_mut().pop();
                }
                Action::Confirm => app.submit_registration(),
                _ => {}
            }
        }
        Popup::CreateEvent => {
            if app.create_form.submitting {
                return;
            }
            match action {
                Action::Cancel => app.close_creation(),
                Action::NextField => {
                    app.create_form.active_field =
                        (app.create_form.active_field + 1) % CreateFormState::FIELD_COUNT;
                }
                Action::PrevField => {
                    let count = CreateFormState::FIELD_COUNT;
                    app.create_form.active_field =
                        (app.create_form.active_field + count - 1) % count;
                }
                Action::TypeChar(c) => {
                    if let Some(field) = app.create_form.text_field_mut() {
                        field.push(c);
                    }
                }
                Action::Backspace => {
                    if let Some(field) = app.create_form.text_field_mut() {
                        field.pop();
                    }
                }
                Action::CycleLeft | Action::CycleRight => {
                    let forward = matches!(action, Action::CycleRight);
                    match app.create_form.active_field {
                        CreateFormState::TYPE_FIELD => app.create_form.cycle_type(forward),
                        CreateFormState::DIFFICULTY_FIELD => {
                            app.create_form.cycle_difficulty(forward)
                        }
                        _ => {}
                    }
                }
                Action::ExternalEditor => {
                    if app.create_form.active_field == CreateFormState::DESCRIPTION_FIELD {
                        app.pending_editor = true;
                    }
                }
                Action::Confirm => {
                    // Enter advances until the last field, then submits
                    if app.create_form.active_field + 1 < CreateFormState::FIELD_COUNT {
                        app.create_form.active_field += 1;
                    } else {
                        app.submit_creation();
                    }
                }
                _ => {}
            }
        }
        Popup::Confirmation(ConfirmAction::DeleteEvent(id)) => match action {
            Action::Confirm => app.confirm_delete(id),
            Action::Cancel => app.popup = None,
            _ => {}
        },
        Popup::Help => {
            if let Action::Cancel = action {
                app.popup = None;
            }
        }
    }
}

fn launch_external_editor(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    content: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let temp_file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    std::fs::write(temp_file.path(), content)?;

    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "nano".to_string());

    // Suspend the TUI
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    log_debug(&format!("Launching editor: {}", editor));
    let status = Command::new(&editor).arg(temp_file.path()).status();

    // Restore the TUI
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    match status {
        Ok(status) if status.success() => {
            let edited = std::fs::read_to_string(temp_file.path())?;
            Ok(Some(edited.trim_end().to_string()))
        }
        Ok(_) => Ok(None),
        Err(e) => {
            log_error(&format!("Failed to launch editor '{}': {}", editor, e));
            Ok(None)
        }
    }
}
