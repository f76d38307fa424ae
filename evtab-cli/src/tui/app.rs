//! Table controller state.
//!
//! Holds the store mirror, the edit-state set and the pending new row, and
//! applies user actions in the order: call the API, patch the store, adjust
//! UI state. Rendering derives the whole table from this state every frame,
//! so a row shows input fields exactly when its id is in the edit-state set
//! (the pending new row renders editable by presence alone).

use std::collections::{HashMap, HashSet};

use crossterm::event::KeyCode;

use evtab_core::{Event, EventDraft, EventId, EventStore};

use crate::client::EventsApi;

/// Which input cell of an editable row has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Start,
    End,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Start,
            Field::Start => Field::End,
            Field::End => Field::Name,
        }
    }
}

/// One editable row's input buffers.
#[derive(Debug, Clone, Default)]
pub struct RowForm {
    pub name: String,
    pub start: String,
    pub end: String,
    pub field: Field,
}

impl RowForm {
    fn from_event(event: &Event) -> Self {
        RowForm {
            name: event.event_name.clone(),
            start: event.start_date.to_string(),
            end: event.end_date.to_string(),
            field: Field::Name,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            Field::Name => &mut self.name,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
        }
    }
}

/// Everything a key press can mean, resolved against the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Up,
    Down,
    AddRow,
    Edit(EventId),
    SaveExisting(EventId),
    CancelExisting(EventId),
    SaveNew,
    CancelNew,
    Delete(EventId),
    Refresh,
    Input(char),
    Backspace,
    NextField,
    Quit,
}

/// Status line content shown below the table.
#[derive(Debug, Clone)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn error(message: impl Into<String>) -> Self {
        Status {
            message: message.into(),
            is_error: true,
        }
    }
}

pub struct App<C> {
    client: C,
    pub store: EventStore,
    pub edit_states: HashSet<EventId>,
    pub forms: HashMap<EventId, RowForm>,
    pub new_row: Option<RowForm>,
    pub selected: usize,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl<C: EventsApi> App<C> {
    pub fn new(client: C) -> Self {
        App {
            client,
            store: EventStore::new(),
            edit_states: HashSet::new(),
            forms: HashMap::new(),
            new_row: None,
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Initial fetch: populate the store before the first frame.
    pub async fn load(&mut self) -> anyhow::Result<()> {
        let events = self.client.list_events().await?;
        self.store.set_all(events);
        Ok(())
    }

    /// Total rows rendered: store records plus the pending new row.
    pub fn row_count(&self) -> usize {
        self.store.len() + usize::from(self.new_row.is_some())
    }

    /// Id of the selected row, or None for the pending new row / empty table.
    pub fn selected_id(&self) -> Option<&EventId> {
        self.store.all().get(self.selected).map(|e| &e.id)
    }

    pub fn selected_is_new_row(&self) -> bool {
        self.new_row.is_some() && self.selected == self.store.len()
    }

    pub fn selected_is_editing(&self) -> bool {
        if self.selected_is_new_row() {
            return true;
        }
        self.selected_id()
            .is_some_and(|id| self.edit_states.contains(id))
    }

    /// Map a key press to an action, keyed by the selected row.
    ///
    /// When the selected row is editable, printable keys feed its input
    /// buffers; otherwise they are table-level commands.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        if self.selected_is_editing() {
            let action = match key {
                KeyCode::Enter => match self.selected_id() {
                    Some(id) => Action::SaveExisting(id.clone()),
                    None => Action::SaveNew,
                },
                KeyCode::Esc => match self.selected_id() {
                    Some(id) => Action::CancelExisting(id.clone()),
                    None => Action::CancelNew,
                },
                KeyCode::Tab => Action::NextField,
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Up => Action::Up,
                KeyCode::Down => Action::Down,
                KeyCode::Char(c) => Action::Input(c),
                _ => return None,
            };
            return Some(action);
        }

        let action = match key {
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Char('a') => Action::AddRow,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Enter => Action::Edit(self.selected_id()?.clone()),
            KeyCode::Char('d') | KeyCode::Delete => Action::Delete(self.selected_id()?.clone()),
            _ => return None,
        };
        Some(action)
    }

    /// Apply one action to completion. The caller awaits this before reading
    /// further input, so flows never interleave.
    pub async fn apply(&mut self, action: Action) {
        self.status = None;
        match action {
            Action::Up => self.selected = self.selected.saturating_sub(1),
            Action::Down => {
                if self.selected + 1 < self.row_count() {
                    self.selected += 1;
                }
            }
            Action::Quit => self.should_quit = true,
            Action::AddRow => self.add_row(),
            Action::Edit(id) => self.start_edit(id).await,
            Action::SaveExisting(id) => self.save_existing(id).await,
            Action::CancelExisting(id) => self.cancel_existing(&id),
            Action::SaveNew => self.save_new().await,
            Action::CancelNew => {
                self.new_row = None;
                self.clamp_selection();
            }
            Action::Delete(id) => self.delete(id).await,
            Action::Refresh => self.refresh().await,
            Action::Input(c) => {
                if let Some(form) = self.active_form_mut() {
                    form.buffer_mut().push(c);
                }
            }
            Action::Backspace => {
                if let Some(form) = self.active_form_mut() {
                    form.buffer_mut().pop();
                }
            }
            Action::NextField => {
                if let Some(form) = self.active_form_mut() {
                    form.field = form.field.next();
                }
            }
        }
    }

    /// Append the pending new row. No-op while one is already pending.
    fn add_row(&mut self) {
        if self.new_row.is_some() {
            return;
        }
        self.new_row = Some(RowForm::default());
        self.selected = self.row_count() - 1;
    }

    /// Enter edit mode using the authoritative record, not the possibly
    /// stale mirror. The fetched record also refreshes the store entry.
    async fn start_edit(&mut self, id: EventId) {
        match self.client.get_event(&id).await {
            Ok(event) => {
                self.forms.insert(id.clone(), RowForm::from_event(&event));
                self.edit_states.insert(id);
                self.store.update(event);
            }
            Err(err) => self.fail(err),
        }
    }

    async fn save_existing(&mut self, id: EventId) {
        let Some(form) = self.forms.get(&id) else {
            return;
        };
        let draft = match EventDraft::parse(&form.name, &form.start, &form.end) {
            Ok(draft) => draft,
            Err(err) => {
                self.status = Some(Status::error(err.to_string()));
                return;
            }
        };

        match self.client.update_event(&id, &draft).await {
            Ok(updated) => {
                self.store.update(updated);
                self.edit_states.remove(&id);
                self.forms.remove(&id);
            }
            Err(err) => self.fail(err),
        }
    }

    /// Leave edit mode without saving. The next frame re-renders the row
    /// from the store, so nothing needs fetching.
    fn cancel_existing(&mut self, id: &EventId) {
        self.edit_states.remove(id);
        self.forms.remove(id);
    }

    async fn save_new(&mut self) {
        let Some(form) = &self.new_row else {
            return;
        };
        let draft = match EventDraft::parse(&form.name, &form.start, &form.end) {
            Ok(draft) => draft,
            Err(err) => {
                self.status = Some(Status::error(err.to_string()));
                return;
            }
        };

        match self.client.create_event(&draft).await {
            Ok(created) => {
                self.store.add(created);
                self.new_row = None;
                self.clamp_selection();
            }
            Err(err) => self.fail(err),
        }
    }

    async fn delete(&mut self, id: EventId) {
        match self.client.delete_event(&id).await {
            Ok(()) => {
                self.store.remove(&id);
                self.edit_states.remove(&id);
                self.forms.remove(&id);
                self.clamp_selection();
            }
            Err(err) => self.fail(err),
        }
    }

    /// Re-list and replace the mirror, dropping edit state for rows the
    /// server no longer has.
    async fn refresh(&mut self) {
        match self.client.list_events().await {
            Ok(events) => {
                self.store.set_all(events);
                let store = &self.store;
                self.edit_states.retain(|id| store.get(id).is_some());
                self.forms.retain(|id, _| store.get(id).is_some());
                self.clamp_selection();
            }
            Err(err) => self.fail(err),
        }
    }

    fn active_form_mut(&mut self) -> Option<&mut RowForm> {
        if self.selected_is_new_row() {
            return self.new_row.as_mut();
        }
        let id = self.store.all().get(self.selected)?.id.clone();
        if self.edit_states.contains(&id) {
            self.forms.get_mut(&id)
        } else {
            None
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    fn fail(&mut self, err: anyhow::Error) {
        tracing::warn!("action failed: {err:#}");
        self.status = Some(Status::error(format!("{err:#}")));
    }
}
