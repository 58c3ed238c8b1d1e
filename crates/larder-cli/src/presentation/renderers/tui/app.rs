use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use larder_runtime::{Controller, SaveOutcome};
use larder_store::ErrorKind;
use larder_types::{ItemId, Location, ValidationError, format_date, parse_date_relative};

use crate::presentation::presenters::present_shelves;
use crate::presentation::view_models::{ItemViewModel, ShelvesViewModel, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FormField {
    #[default]
    Name,
    Date,
    Location,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Date,
            FormField::Date => FormField::Location,
            FormField::Location => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Location,
            FormField::Date => FormField::Name,
            FormField::Location => FormField::Date,
        }
    }
}

/// Text buffers of the open modal. The controller holds the parsed draft.
pub(crate) struct FormState {
    pub editing: bool,
    pub name: String,
    pub date: String,
    pub location: Location,
    pub focus: FormField,
    pub error: Option<String>,
}

pub(crate) struct AppState {
    pub today: NaiveDate,
    pub screen: ShelvesViewModel,
    pub column: Location,
    rows: [usize; 3],
    pub form: Option<FormState>,
    /// Name of the item awaiting delete confirmation.
    pub confirm: Option<String>,
    pub message: Option<StatusBadge>,
    pub live: bool,
    pub should_quit: bool,
    focus_on: Option<String>,
}

impl AppState {
    pub fn new(controller: &Controller, today: NaiveDate) -> Self {
        Self {
            today,
            screen: present_shelves(&controller.shelves(today), today),
            column: Location::Fridge,
            rows: [0; 3],
            form: None,
            confirm: None,
            message: None,
            live: controller.is_live(),
            should_quit: false,
            focus_on: None,
        }
    }

    /// Re-present the shelves and clamp the cursor to what is left.
    pub fn refresh(&mut self, controller: &Controller) {
        self.screen = present_shelves(&controller.shelves(self.today), self.today);
        self.live = controller.is_live();
        self.confirm = controller.pending_delete().map(|item| item.name.clone());
        if !controller.modal().is_open() {
            self.form = None;
        }

        if let Some(id) = self.focus_on.take() {
            for (location, shelf) in Location::ALL.into_iter().zip(&self.screen.shelves) {
                if let Some(row) = shelf.items.iter().position(|item| item.id == id) {
                    self.column = location;
                    self.rows[location.index()] = row;
                }
            }
        }

        for location in Location::ALL {
            let len = self.shelf(location).len();
            let row = &mut self.rows[location.index()];
            *row = (*row).min(len.saturating_sub(1));
        }
    }

    pub fn shelf(&self, location: Location) -> &[ItemViewModel] {
        self.screen
            .shelves
            .get(location.index())
            .map(|shelf| shelf.items.as_slice())
            .unwrap_or_default()
    }

    /// Highlighted row of a column, `None` when the column is empty.
    pub fn selected_row(&self, location: Location) -> Option<usize> {
        if self.shelf(location).is_empty() {
            None
        } else {
            Some(self.rows[location.index()])
        }
    }

    pub fn selected(&self) -> Option<&ItemViewModel> {
        self.selected_row(self.column)
            .and_then(|row| self.shelf(self.column).get(row))
    }

    /// Apply pending sync snapshots and roll over to a new day.
    pub fn tick(&mut self, controller: &mut Controller, today: NaiveDate) {
        let update = controller.poll_sync();
        if let Some(error) = update.errors.last() {
            self.message = Some(StatusBadge::warning(format!("Sync: {}", error)));
        }
        if update.changed {
            self.message = Some(StatusBadge::info("Updated from another device"));
        }
        if update.changed || today != self.today {
            self.today = today;
            self.refresh(controller);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, controller: &mut Controller) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.form.is_some() {
            self.handle_form_key(key, controller);
        } else if self.confirm.is_some() {
            self.handle_confirm_key(key, controller);
        } else {
            self.handle_browse_key(key, controller);
        }

        self.refresh(controller);
    }

    fn handle_browse_key(&mut self, key: KeyEvent, controller: &mut Controller) {
        let index = self.column.index();
        let len = self.shelf(self.column).len();

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.column = self.column.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.column = self.column.next(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.rows[index] = (self.rows[index] + 1).min(len.saturating_sub(1));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.rows[index] = self.rows[index].saturating_sub(1);
            }
            KeyCode::Char('a') => {
                controller.open_for_add(self.today);
                self.open_form(controller, false);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let Some(id) = self.selected_id() else {
                    return;
                };
                if controller.open_for_edit(&id) {
                    self.open_form(controller, true);
                } else {
                    self.message = Some(StatusBadge::warning("Item no longer exists"));
                }
            }
            KeyCode::Char('d') => {
                let Some(id) = self.selected_id() else {
                    return;
                };
                if !controller.request_delete(&id) {
                    self.message = Some(StatusBadge::warning("Item no longer exists"));
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, controller: &mut Controller) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.message = Some(match controller.confirm_delete() {
                    Ok(Some(item)) => StatusBadge::success(format!("Deleted {}", item.name)),
                    Ok(None) => StatusBadge::warning("Item no longer exists"),
                    Err(err) => StatusBadge::error(format!("Storage failure: {}", err)),
                });
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                controller.decline_delete();
                self.message = Some(StatusBadge::info("Kept"));
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, controller: &mut Controller) {
        match key.code {
            KeyCode::Esc => {
                controller.cancel();
                self.form = None;
                return;
            }
            KeyCode::Enter => {
                self.submit(controller);
                return;
            }
            _ => {}
        }

        let today = self.today;
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match (key.code, form.focus) {
            (KeyCode::Tab, _) | (KeyCode::Down, _) => form.focus = form.focus.next(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => form.focus = form.focus.prev(),
            (KeyCode::Left, FormField::Location) => {
                form.location = form.location.prev();
                controller.set_location(form.location);
            }
            (KeyCode::Right, FormField::Location) => {
                form.location = form.location.next();
                controller.set_location(form.location);
            }
            (KeyCode::Backspace, FormField::Name) => {
                form.name.pop();
                controller.set_name(form.name.clone());
            }
            (KeyCode::Backspace, FormField::Date) => {
                form.date.pop();
                controller.set_date(parse_date_relative(&form.date, today).ok());
            }
            (KeyCode::Char(c), FormField::Name) => {
                form.name.push(c);
                controller.set_name(form.name.clone());
            }
            (KeyCode::Char(c), FormField::Date) => {
                form.date.push(c);
                controller.set_date(parse_date_relative(&form.date, today).ok());
            }
            _ => {}
        }
    }

    fn submit(&mut self, controller: &mut Controller) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match parse_date_relative(&form.date, self.today) {
            Ok(date) => controller.set_date(Some(date)),
            Err(err) => {
                controller.set_date(None);
                // A blank name is reported first, like everywhere else.
                if err != ValidationError::MissingDate && !form.name.trim().is_empty() {
                    form.error = Some(err.to_string());
                    return;
                }
            }
        }

        match controller.save() {
            Ok(SaveOutcome::Added(item)) => {
                self.message = Some(StatusBadge::success(format!(
                    "Added {} to {}",
                    item.name, item.location
                )));
                self.focus_on = Some(item.id.to_string());
            }
            Ok(SaveOutcome::Updated(item)) => {
                self.message = Some(StatusBadge::success(format!("Updated {}", item.name)));
                self.focus_on = Some(item.id.to_string());
            }
            Ok(SaveOutcome::Vanished(_)) => {
                self.message = Some(StatusBadge::warning(
                    "Item was deleted elsewhere, changes discarded",
                ));
            }
            Ok(SaveOutcome::Idle) => {}
            Err(err) if err.kind() == ErrorKind::Validation => {
                if let Some(form) = self.form.as_mut() {
                    form.error = Some(err.to_string());
                }
            }
            Err(err) => {
                self.message = Some(StatusBadge::error(format!("Storage failure: {}", err)));
            }
        }
    }

    fn open_form(&mut self, controller: &Controller, editing: bool) {
        let Some(draft) = controller.draft() else {
            return;
        };
        self.form = Some(FormState {
            editing,
            name: draft.name.clone(),
            date: draft.date.map(format_date).unwrap_or_default(),
            location: draft.location,
            focus: FormField::Name,
            error: None,
        });
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.selected().map(|item| ItemId::new(item.id.clone()))
    }
}
