use std::time::Instant;

use chrono::NaiveDate;

use crate::catalog::sample::{sample_attending, sample_organized};
use crate::catalog::EventStore;
use crate::config::get_organizer;
use crate::constants::DIFFICULTY_LEVELS;
use crate::error::{EventsError, EventsResult};
use crate::filtering::EventFilter;
use crate::models::{EventDraft, EventRecord, EventType, RegistrationForm};

/// Which "page" the session is on. Mirrors the original route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Listing,
    Detail,
    Dashboard,
}

/// Sub-tabs of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Details,
    Requirements,
    Schedule,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Details, DetailTab::Requirements, DetailTab::Schedule];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Details => "Details",
            DetailTab::Requirements => "Requirements",
            DetailTab::Schedule => "Schedule",
        }
    }
}

/// Dashboard sub-tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTab {
    Organizing,
    Attending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Loading,
    Info,
}

pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
    pub dismissed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteEvent(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Search,
    Register,
    CreateEvent,
    Confirmation(ConfirmAction),
    Help,
}

/// A submit the key handler has queued; the main loop awaits it so the
/// submitting state gets at least one frame on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSubmit {
    Registration(u32),
    Creation,
}

/// Registration dialog state. Exists only while the dialog is open; the
/// form is dropped on close or successful submit.
#[derive(Default)]
pub struct RegisterFormState {
    pub form: RegistrationForm,
    pub active_field: usize,
    pub submitting: bool,
    pub error: Option<String>,
}

impl RegisterFormState {
    pub const FIELD_COUNT: usize = 4;
    pub const LABELS: [&'static str; 4] = ["Full Name", "Email", "Phone", "Emergency Contact"];

    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.form.name,
            1 => &self.form.email,
            2 => &self.form.phone,
            _ => &self.form.emergency_contact,
        }
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.active_field {
            0 => &mut self.form.name,
            1 => &mut self.form.email,
            2 => &mut self.form.phone,
            _ => &mut self.form.emergency_contact,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Creation form state. Text fields hold raw input; type and difficulty
/// are cycled rather than typed.
#[derive(Default)]
pub struct CreateFormState {
    pub title: String,
    pub event_type: EventType,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub address: String,
    pub description: String,
    pub difficulty: Option<usize>,
    pub distance: String,
    pub max_participants: String,
    pub requirements: String,
    pub active_field: usize,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CreateFormState {
    pub const FIELD_COUNT: usize = 12;
    pub const LABELS: [&'static str; 12] = [
        "Title",
        "Type",
        "Date",
        "Start Time",
        "End Time",
        "Location",
        "Address",
        "Description",
        "Difficulty",
        "Distance",
        "Max Participants",
        "Requirements",
    ];

    pub const TYPE_FIELD: usize = 1;
    pub const DESCRIPTION_FIELD: usize = 7;
    pub const DIFFICULTY_FIELD: usize = 8;

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The active field's text buffer, or None for the cycled fields.
    pub fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            0 => Some(&mut self.title),
            2 => Some(&mut self.date),
            3 => Some(&mut self.start_time),
            4 => Some(&mut self.end_time),
            5 => Some(&mut self.location),
            6 => Some(&mut self.address),
            7 => Some(&mut self.description),
            9 => Some(&mut self.distance),
            10 => Some(&mut self.max_participants),
            11 => Some(&mut self.requirements),
            _ => None,
        }
    }

    pub fn field_display(&self, index: usize) -> String {
        match index {
            0 => self.title.clone(),
            1 => self.event_type.label().to_string(),
            2 => self.date.clone(),
            3 => self.start_time.clone(),
            4 => self.end_time.clone(),
            5 => self.location.clone(),
            6 => self.address.clone(),
            7 => self.description.clone(),
            8 => self
                .difficulty
                .and_then(|i| DIFFICULTY_LEVELS.get(i).copied())
                .unwrap_or("None")
                .to_string(),
            9 => self.distance.clone(),
            10 => self.max_participants.clone(),
            _ => self.requirements.clone(),
        }
    }

    pub fn cycle_type(&mut self, forward: bool) {
        let types = EventType::ALL;
        let pos = types.iter().position(|t| *t == self.event_type).unwrap_or(0);
        let next = if forward {
            (pos + 1) % types.len()
        } else {
            (pos + types.len() - 1) % types.len()
        };
        self.event_type = types[next];
    }

    pub fn cycle_difficulty(&mut self, forward: bool) {
        // None -> Beginner -> ... -> Expert -> None
        let count = DIFFICULTY_LEVELS.len();
        self.difficulty = match (self.difficulty, forward) {
            (None, true) => Some(0),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(_), true) => None,
            (None, false) => Some(count - 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
    }

    /// Build a draft from the raw field buffers.
    pub fn to_draft(&self) -> EventsResult<EventDraft> {
        let date = match self.date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| EventsError::validation("date", "must be YYYY-MM-DD"))?,
            ),
        };
        let max_participants = match self.max_participants.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| EventsError::validation("max participants", "must be a number"))?,
            ),
        };
        let requirements: Vec<String> = self
            .requirements
            .split(';')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();

        Ok(EventDraft {
            title: self.title.clone(),
            event_type: self.event_type,
            date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            difficulty: self
                .difficulty
                .and_then(|i| DIFFICULTY_LEVELS.get(i).map(|d| d.to_string())),
            distance: Some(self.distance.trim().to_string()).filter(|d| !d.is_empty()),
            max_participants,
            requirements,
        })
    }
}

pub struct InteractiveApp {
    pub store: EventStore,
    pub view: View,

    // Listing view
    pub list_tab: Option<EventType>,
    pub filtered_events: Vec<EventRecord>,
    pub selected_index: usize,
    pub search_query: String,
    pub search_input: String,

    // Detail view
    pub detail_event_id: Option<u32>,
    pub detail_tab: DetailTab,
    pub detail_scroll: u16,

    // Dashboard view
    pub dash_tab: DashTab,
    pub organized: Vec<EventRecord>,
    pub attending: Vec<EventRecord>,
    pub dash_selected: usize,

    pub popup: Option<Popup>,
    pub register_form: RegisterFormState,
    pub create_form: CreateFormState,
    pub notifications: Vec<Notification>,
    pub pending_submit: Option<PendingSubmit>,
    pub pending_editor: bool,
    pub organizer: String,
    pub should_quit: bool,
}

impl InteractiveApp {
    pub fn new() -> Self {
        Self::with_store(EventStore::seeded())
    }

    pub fn with_store(store: EventStore) -> Self {
        let mut app = Self {
            store,
            view: View::Listing,
            list_tab: None,
            filtered_events: Vec::new(),
            selected_index: 0,
            search_query: String::new(),
            search_input: String::new(),
            detail_event_id: None,
            detail_tab: DetailTab::Details,
            detail_scroll: 0,
            dash_tab: DashTab::Organizing,
            organized: sample_organized(),
            attending: sample_attending(),
            dash_selected: 0,
            popup: None,
            register_form: RegisterFormState::default(),
            create_form: CreateFormState::default(),
            notifications: Vec::new(),
            pending_submit: None,
            pending_editor: false,
            organizer: get_organizer(),
            should_quit: false,
        };
        app.apply_filters();
        app
    }

    // -----------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------

    pub fn apply_filters(&mut self) {
        let filter = EventFilter {
            event_type: self.list_tab,
            query: Some(self.search_query.clone()).filter(|q| !q.is_empty()),
            status: None,
        };
        self.filtered_events = filter.apply(self.store.list_events());

        if self.selected_index >= self.filtered_events.len() && !self.filtered_events.is_empty() {
            self.selected_index = self.filtered_events.len() - 1;
        }
    }

    pub fn get_selected_event(&self) -> Option<&EventRecord> {
        self.filtered_events.get(self.selected_index)
    }

    pub fn move_selection_down(&mut self) {
        if !self.filtered_events.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.filtered_events.len();
        }
    }

    pub fn move_selection_up(&mut self) {
        if !self.filtered_events.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.filtered_events.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    /// Tabs run All, Mountain, Road, Cross, Endurance (left to right).
    pub fn next_tab(&mut self) {
        self.list_tab = match self.list_tab {
            None => Some(EventType::Mountain),
            Some(EventType::Mountain) => Some(EventType::Road),
            Some(EventType::Road) => Some(EventType::Cross),
            Some(EventType::Cross) => Some(EventType::Endurance),
            Some(EventType::Endurance) | Some(EventType::Other) => None,
        };
        self.selected_index = 0;
        self.apply_filters();
    }

    pub fn prev_tab(&mut self) {
        self.list_tab = match self.list_tab {
            None => Some(EventType::Endurance),
            Some(EventType::Mountain) => None,
            Some(EventType::Road) => Some(EventType::Mountain),
            Some(EventType::Cross) => Some(EventType::Road),
            Some(EventType::Endurance) | Some(EventType::Other) => Some(EventType::Cross),
        };
        self.selected_index = 0;
        self.apply_filters();
    }

    pub fn select_tab(&mut self, index: usize) {
        self.list_tab = match index {
            1 => Some(EventType::Mountain),
            2 => Some(EventType::Road),
            3 => Some(EventType::Cross),
            4 => Some(EventType::Endurance),
            _ => None,
        };
        self.selected_index = 0;
        self.apply_filters();
    }

    // -----------------------------------------------------------------
    // Detail
    // -----------------------------------------------------------------

    pub fn open_detail(&mut self) {
        if let Some(event) = self.get_selected_event() {
            self.detail_event_id = Some(event.id);
            self.detail_tab = DetailTab::Details;
            self.detail_scroll = 0;
            self.view = View::Detail;
        }
    }

    pub fn open_detail_for(&mut self, id: u32) {
        if self.store.get_event(id).is_ok() {
            self.detail_event_id = Some(id);
            self.detail_tab = DetailTab::Details;
            self.detail_scroll = 0;
            self.view = View::Detail;
        } else {
            self.notify(NotificationKind::Error, format!("Event {} not found", id));
        }
    }

    pub fn detail_event(&self) -> Option<&EventRecord> {
        self.detail_event_id.and_then(|id| self.store.get_event(id).ok())
    }

    pub fn next_detail_tab(&mut self) {
        let tabs = DetailTab::ALL;
        let pos = tabs.iter().position(|t| *t == self.detail_tab).unwrap_or(0);
        self.detail_tab = tabs[(pos + 1) % tabs.len()];
        self.detail_scroll = 0;
    }

    pub fn select_detail_tab(&mut self, index: usize) {
        if let Some(tab) = DetailTab::ALL.get(index) {
            self.detail_tab = *tab;
            self.detail_scroll = 0;
        }
    }

    pub fn back_to_listing(&mut self) {
        self.view = View::Listing;
        self.detail_event_id = None;
    }

    // -----------------------------------------------------------------
    // Registration dialog
    // -----------------------------------------------------------------

    /// Open the registration dialog for the detail event. Fully booked
    /// events never open the form; they get a waitlist hint instead.
    pub fn open_registration(&mut self) {
        let Some(event) = self.detail_event() else { return };

        if event.is_fully_booked() {
            self.notify(
                NotificationKind::Info,
                "This event is fully booked. Check back for waitlist openings.".to_string(),
            );
            return;
        }

        self.register_form.reset();
        self.popup = Some(Popup::Register);
    }

    /// Validate and queue the registration submit. Ignored while a
    /// previous submit is still running.
    pub fn submit_registration(&mut self) {
        if self.register_form.submitting {
            return;
        }
        let Some(id) = self.detail_event_id else { return };

        if let Err(e) = self.register_form.form.validate() {
            self.register_form.error = Some(e.to_string());
            return;
        }

        self.register_form.error = None;
        self.register_form.submitting = true;
        self.notify(NotificationKind::Loading, "Submitting registration...".to_string());
        self.pending_submit = Some(PendingSubmit::Registration(id));
    }

    pub fn close_registration(&mut self) {
        if !self.register_form.submitting {
            self.popup = None;
            self.register_form.reset();
        }
    }

    // -----------------------------------------------------------------
    // Creation form
    // -----------------------------------------------------------------

    pub fn open_creation(&mut self) {
        self.create_form.reset();
        self.popup = Some(Popup::CreateEvent);
    }

    pub fn submit_creation(&mut self) {
        if self.create_form.submitting {
            return;
        }

        if let Err(e) = self.create_form.to_draft().and_then(|d| d.validate()) {
            self.create_form.error = Some(e.to_string());
            return;
        }

        self.create_form.error = None;
        self.create_form.submitting = true;
        self.notify(NotificationKind::Loading, "Creating event...".to_string());
        self.pending_submit = Some(PendingSubmit::Creation);
    }

    pub fn close_creation(&mut self) {
        if !self.create_form.submitting {
            self.popup = None;
            self.create_form.reset();
        }
    }

    pub fn handle_external_editor_result(&mut self, edited: Option<String>) {
        if let Some(text) = edited {
            self.create_form.description = text;
        }
    }

    // -----------------------------------------------------------------
    // Pending submits (awaited by the main loop)
    // -----------------------------------------------------------------

    pub fn take_pending_submit(&mut self) -> Option<PendingSubmit> {
        self.pending_submit.take()
    }

    pub async fn perform_submit(&mut self, pending: PendingSubmit) {
        match pending {
            PendingSubmit::Registration(id) => {
                let form = self.register_form.form.clone();
                match self.store.register(id, &form).await {
                    Ok(()) => {
                        self.popup = None;
                        self.register_form.reset();
                        self.apply_filters();
                        if let Ok(event) = self.store.get_event(id) {
                            self.attending.push(event.clone());
                        }
                        self.notify(
                            NotificationKind::Success,
                            "Registration successful! See you at the event.".to_string(),
                        );
                    }
                    Err(e) => {
                        self.register_form.submitting = false;
                        self.notify(NotificationKind::Error, format!("Registration failed: {}", e));
                    }
                }
            }
            PendingSubmit::Creation => {
                let draft = match self.create_form.to_draft() {
                    Ok(draft) => draft,
                    Err(e) => {
                        self.create_form.submitting = false;
                        self.create_form.error = Some(e.to_string());
                        return;
                    }
                };
                match self.store.create_event(draft).await {
                    Ok(id) => {
                        self.popup = None;
                        self.create_form.reset();
                        self.apply_filters();
                        if let Ok(event) = self.store.get_event(id) {
                            let mut organized = event.clone();
                            organized.organizer = Some(self.organizer.clone());
                            self.organized.push(organized);
                        }
                        self.notify(
                            NotificationKind::Success,
                            "Event created successfully!".to_string(),
                        );
                    }
                    Err(e) => {
                        self.create_form.submitting = false;
                        self.notify(NotificationKind::Error, format!("Creation failed: {}", e));
                    }
                }
            }
        }
    }

    // -----------------------------------------------------------------
    // Dashboard
    // -----------------------------------------------------------------

    pub fn open_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.dash_tab = DashTab::Organizing;
        self.dash_selected = 0;
    }

    pub fn dash_list(&self) -> &[EventRecord] {
        match self.dash_tab {
            DashTab::Organizing => &self.organized,
            DashTab::Attending => &self.attending,
        }
    }

    pub fn dash_selected_event(&self) -> Option<&EventRecord> {
        self.dash_list().get(self.dash_selected)
    }

    pub fn toggle_dash_tab(&mut self) {
        self.dash_tab = match self.dash_tab {
            DashTab::Organizing => DashTab::Attending,
            DashTab::Attending => DashTab::Organizing,
        };
        self.dash_selected = 0;
    }

    pub fn dash_move_down(&mut self) {
        let len = self.dash_list().len();
        if len > 0 {
            self.dash_selected = (self.dash_selected + 1) % len;
        }
    }

    pub fn dash_move_up(&mut self) {
        let len = self.dash_list().len();
        if len > 0 {
            if self.dash_selected == 0 {
                self.dash_selected = len - 1;
            } else {
                self.dash_selected -= 1;
            }
        }
    }

    /// Ask for confirmation before deleting the selected organized event.
    pub fn request_delete(&mut self) {
        if self.dash_tab != DashTab::Organizing {
            return;
        }
        if let Some(event) = self.dash_selected_event() {
            self.popup = Some(Popup::Confirmation(ConfirmAction::DeleteEvent(event.id)));
        }
    }

    /// Confirmed deletion: the record leaves the organizer list.
    pub fn confirm_delete(&mut self, id: u32) {
        self.popup = None;
        let Some(index) = self.organized.iter().position(|e| e.id == id) else {
            self.notify(NotificationKind::Error, format!("Event {} not found", id));
            return;
        };
        let removed = self.organized.remove(index);
        if self.dash_selected >= self.organized.len() && !self.organized.is_empty() {
            self.dash_selected = self.organized.len() - 1;
        }
        self.notify(
            NotificationKind::Success,
            format!("Deleted \"{}\"", removed.title),
        );
    }

    /// Cancelling a registration is immediate; no confirmation dialog.
    pub fn cancel_registration(&mut self) {
        if self.dash_tab != DashTab::Attending {
            return;
        }
        if self.dash_selected >= self.attending.len() {
            return;
        }
        let removed = self.attending.remove(self.dash_selected);
        if self.dash_selected >= self.attending.len() && !self.attending.is_empty() {
            self.dash_selected = self.attending.len() - 1;
        }
        self.notify(
            NotificationKind::Success,
            format!("Registration for \"{}\" cancelled", removed.title),
        );
    }

    // -----------------------------------------------------------------
    // Search popup
    // -----------------------------------------------------------------

    pub fn open_search(&mut self) {
        self.search_input = self.search_query.clone();
        self.popup = Some(Popup::Search);
    }

    pub fn apply_search(&mut self) {
        self.search_query = self.search_input.trim().to_string();
        self.popup = None;
        self.selected_index = 0;
        self.apply_filters();
    }

    pub fn cancel_search(&mut self) {
        self.search_input.clear();
        self.popup = None;
    }

    // -----------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        // A new terminal notification replaces any running loading one.
        if kind != NotificationKind::Loading {
            self.notifications
                .retain(|n| n.kind != NotificationKind::Loading);
        }
        self.notifications.push(Notification {
            kind,
            message,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    pub fn dismiss_notifications(&mut self) {
        for n in &mut self.notifications {
            n.dismissed = true;
        }
    }

    /// Called on every tick; expires finished toasts after 5 seconds.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| {
            if n.dismissed {
                return false;
            }
            match n.kind {
                NotificationKind::Success | NotificationKind::Info | NotificationKind::Error => {
                    n.created_at.elapsed().as_secs() < 5
                }
                NotificationKind::Loading => true,
            }
        });
    }

    pub fn visible_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.dismissed).count()
    }
}

impl Default for InteractiveApp {
    fn default() -> Self {
        Self::new()
    }
}
