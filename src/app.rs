//! Application state and core logic for unbored.
//!
//! `App` holds everything the render pass needs: the filter form, the
//! current suggestion, the saved selection set, focus and cursor state,
//! and any notice to display. Key handling mutates the state and returns
//! a [`Command`] when the event loop has to act on the outside world, so
//! the whole update cycle is testable without a live terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{error, info, warn};

use crate::error::Error;
use crate::filters::{FilterForm, Filters};
use crate::models::{Activity, ActivityType, Entry, entry};
use crate::store::Store;

/// Which part of the UI owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The activity-type selector row.
    Types,
    /// The suggestion + saved list.
    List,
    /// The filter form overlay.
    Filters,
}

/// State of the one outstanding (or last finished) API call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    /// Request in flight; the suggestion panel shows a waiting indicator.
    Fetching,
    /// The API said nothing matches the current filters.
    NoMatch,
    /// The call failed; shown inline in the suggestion panel.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient banner above the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
}

/// Work the event loop must do outside the state value.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    /// Issue one API call with the current filters.
    Fetch,
    OpenLink(String),
}

/// Application state
pub struct App {
    store: Store,
    pub entries: Vec<Entry>,
    pub suggestion: Option<Activity>,
    pub fetch_state: FetchState,
    pub focus: Focus,
    /// 0 = Any, 1..=9 indexes into `ActivityType::ALL`.
    pub type_index: usize,
    /// Cursor over the combined rows (suggestion first when present).
    pub cursor: usize,
    pub form: FilterForm,
    pub notice: Option<Notice>,
    /// Form snapshot taken when the filter panel opened, to detect changes.
    form_on_open: Option<Vec<String>>,
}

impl App {
    pub fn new(store: Store) -> Self {
        let (entries, notice) = match store.load() {
            Ok(entries) => (entries, None),
            Err(err) => {
                warn!(%err, "could not load the saved list");
                (
                    Vec::new(),
                    Some(Notice {
                        text: format!("Could not load the saved list: {}", err),
                        level: NoticeLevel::Error,
                    }),
                )
            }
        };

        Self {
            store,
            entries,
            suggestion: None,
            fetch_state: FetchState::Idle,
            focus: Focus::Types,
            type_index: 0,
            cursor: 0,
            form: FilterForm::default(),
            notice,
            form_on_open: None,
        }
    }

    /// The category picked on the selector row (`None` = any).
    pub fn current_kind(&self) -> Option<ActivityType> {
        if self.type_index == 0 {
            None
        } else {
            Some(ActivityType::ALL[self.type_index - 1])
        }
    }

    /// The normalized filter value for the next API call.
    pub fn filters(&self) -> Filters {
        self.form.values(self.current_kind())
    }

    /// Rows in the list panel: the suggestion (when present) then entries.
    pub fn row_count(&self) -> usize {
        self.suggestion_rows() + self.entries.len()
    }

    fn suggestion_rows(&self) -> usize {
        usize::from(self.suggestion.is_some())
    }

    /// Is the suggestion already in the selection set?
    pub fn suggestion_selected(&self) -> bool {
        self.suggestion
            .as_ref()
            .is_some_and(|a| entry::is_selected(&self.entries, a))
    }

    /// Handle one key press. Returns the command the event loop must run.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Command> {
        match self.focus {
            Focus::Filters => self.on_filters_key(key),
            Focus::Types => self.on_types_key(key),
            Focus::List => self.on_list_key(key),
        }
    }

    fn on_types_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char('q') => return Some(Command::Quit),
            KeyCode::Char('f') => self.open_filters(),
            KeyCode::Left | KeyCode::Char('h') => {
                let count = ActivityType::ALL.len() + 1;
                self.type_index = (self.type_index + count - 1) % count;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.type_index = (self.type_index + 1) % (ActivityType::ALL.len() + 1);
            }
            KeyCode::Enter => return Some(Command::Fetch),
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                if self.row_count() > 0 {
                    self.focus = Focus::List;
                    self.cursor = self.cursor.min(self.row_count() - 1);
                }
            }
            _ => {}
        }
        None
    }

    fn on_list_key(&mut self, key: KeyEvent) -> Option<Command> {
        let offset = self.suggestion_rows();
        match key.code {
            KeyCode::Char('q') => return Some(Command::Quit),
            KeyCode::Char('f') => self.open_filters(),
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Types,
            KeyCode::Up | KeyCode::Char('k')
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if self.cursor == 0 {
                    self.focus = Focus::Types;
                } else {
                    self.cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j')
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if self.cursor + 1 < self.row_count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_at_cursor(),
            KeyCode::Char('d') => {
                if self.cursor >= offset {
                    self.entries = entry::remove(std::mem::take(&mut self.entries), self.cursor - offset);
                    self.clamp_cursor();
                    self.persist();
                }
            }
            KeyCode::Char('x') => {
                if self.cursor >= offset {
                    self.entries =
                        entry::toggle_done(std::mem::take(&mut self.entries), self.cursor - offset);
                    self.persist();
                }
            }
            KeyCode::Char('K') => self.move_entry_up(),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_entry_up(),
            KeyCode::Char('J') => self.move_entry_down(),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_entry_down()
            }
            KeyCode::Char('o') => {
                if let Some(activity) = self.activity_at_cursor()
                    && activity.has_link()
                {
                    return Some(Command::OpenLink(activity.link.clone()));
                }
            }
            _ => {}
        }
        None
    }

    fn on_filters_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => return self.close_filters(),
            KeyCode::Up | KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form.next_field(),
            KeyCode::Backspace => self.form.active_field_mut().pop_char(),
            KeyCode::Delete => self.form.clear_active(),
            KeyCode::Char(c) => self.form.active_field_mut().push_char(c),
            _ => {}
        }
        None
    }

    fn open_filters(&mut self) {
        self.form_on_open = Some(self.form_snapshot());
        self.focus = Focus::Filters;
    }

    /// Close the panel; if any value changed while it was open, re-issue
    /// the API call so the displayed result matches the filters.
    fn close_filters(&mut self) -> Option<Command> {
        self.focus = Focus::Types;
        let changed = self
            .form_on_open
            .take()
            .is_some_and(|before| before != self.form_snapshot());
        if changed { Some(Command::Fetch) } else { None }
    }

    fn form_snapshot(&self) -> Vec<String> {
        self.form.fields.iter().map(|f| f.buffer.clone()).collect()
    }

    fn toggle_at_cursor(&mut self) {
        let Some(activity) = self.activity_at_cursor().cloned() else {
            return;
        };
        self.entries = entry::toggle(std::mem::take(&mut self.entries), &activity);
        self.clamp_cursor();
        self.persist();
    }

    fn move_entry_up(&mut self) {
        let offset = self.suggestion_rows();
        if self.cursor > offset {
            let index = self.cursor - offset;
            self.entries = entry::move_up(std::mem::take(&mut self.entries), index);
            self.cursor -= 1;
            self.persist();
        }
    }

    fn move_entry_down(&mut self) {
        let offset = self.suggestion_rows();
        if self.cursor >= offset && self.cursor - offset + 1 < self.entries.len() {
            let index = self.cursor - offset;
            self.entries = entry::move_down(std::mem::take(&mut self.entries), index);
            self.cursor += 1;
            self.persist();
        }
    }

    /// The activity under the cursor, whichever panel it lives in.
    pub fn activity_at_cursor(&self) -> Option<&Activity> {
        let offset = self.suggestion_rows();
        if self.cursor < offset {
            self.suggestion.as_ref()
        } else {
            self.entries.get(self.cursor - offset).map(|e| &e.activity)
        }
    }

    fn clamp_cursor(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.cursor = 0;
            self.focus = Focus::Types;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }

    /// Mark the start of an API call so the next frame shows the waiting
    /// indicator.
    pub fn begin_fetch(&mut self) {
        self.fetch_state = FetchState::Fetching;
        self.notice = None;
    }

    /// Fold the API call's outcome back into the state.
    pub fn finish_fetch(&mut self, outcome: Result<Activity, Error>) {
        match outcome {
            Ok(activity) => {
                info!(key = %activity.id(), "fetched suggestion");
                self.suggestion = Some(activity);
                self.fetch_state = FetchState::Idle;
                self.focus = Focus::List;
                self.cursor = 0;
            }
            Err(Error::NoMatch) => {
                // The empty state, not an error.
                self.suggestion = None;
                self.fetch_state = FetchState::NoMatch;
                self.clamp_cursor();
            }
            Err(Error::Network(msg)) => {
                warn!(%msg, "fetch failed");
                self.suggestion = None;
                self.fetch_state = FetchState::Failed(msg);
                self.clamp_cursor();
            }
            Err(err) => {
                error!(%err, "fetch produced an unusable response");
                self.suggestion = None;
                self.fetch_state = FetchState::Idle;
                self.clamp_cursor();
                self.notice = Some(Notice {
                    text: err.to_string(),
                    level: NoticeLevel::Error,
                });
            }
        }
    }

    /// Write the selection set back after a mutation. A failed write is a
    /// banner, never a crash.
    fn persist(&mut self) {
        match self.store.save(&self.entries) {
            Ok(()) => {
                if self
                    .notice
                    .as_ref()
                    .is_some_and(|n| n.level == NoticeLevel::Error)
                {
                    self.notice = None;
                }
            }
            Err(err) => {
                error!(%err, "could not save the selection list");
                self.notice = Some(Notice {
                    text: format!("Could not save the list: {}", err),
                    level: NoticeLevel::Error,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(Some(dir.path().to_path_buf())).unwrap();
        (App::new(store), dir)
    }

    fn juggle() -> Activity {
        serde_json::from_str(
            r#"{"activity":"Learn to juggle","type":"recreational","participants":1,"price":0,"link":"","accessibility":0.1}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_starts_empty_without_a_save_file() {
        let (app, _dir) = test_app();
        assert!(app.entries.is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_fetched_row_renders_description_and_no_link_action() {
        let (mut app, _dir) = test_app();
        app.finish_fetch(Ok(juggle()));

        let shown = app.activity_at_cursor().unwrap();
        assert_eq!(shown.activity, "Learn to juggle");
        assert!(!shown.has_link());
        // No link, so 'o' must not produce an open command.
        assert_eq!(app.on_key(key(KeyCode::Char('o'))), None);
    }

    #[test]
    fn test_toggle_twice_leaves_selection_unchanged() {
        let (mut app, _dir) = test_app();
        app.finish_fetch(Ok(juggle()));

        assert_eq!(app.on_key(key(KeyCode::Enter)), None);
        assert_eq!(app.entries.len(), 1);
        assert!(app.suggestion_selected());

        app.on_key(key(KeyCode::Enter));
        assert!(app.entries.is_empty());
        assert!(!app.suggestion_selected());
    }

    #[test]
    fn test_no_match_reaches_empty_state_not_banner() {
        let (mut app, _dir) = test_app();
        app.finish_fetch(Ok(juggle()));
        app.finish_fetch(Err(Error::NoMatch));

        assert_eq!(app.fetch_state, FetchState::NoMatch);
        assert!(app.suggestion.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_format_error_raises_banner() {
        let (mut app, _dir) = test_app();
        app.finish_fetch(Err(Error::Format("not json".to_string())));

        let notice = app.notice.expect("banner");
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_network_failure_is_inline_not_banner() {
        let (mut app, _dir) = test_app();
        app.finish_fetch(Err(Error::Network("timed out".to_string())));

        assert!(matches!(app.fetch_state, FetchState::Failed(_)));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_reorder_round_trips_through_storage() {
        let (mut app, dir) = test_app();
        for (k, desc) in [("1", "bake"), ("2", "walk"), ("3", "paint")] {
            let mut a = juggle();
            a.key = k.to_string();
            a.activity = desc.to_string();
            app.finish_fetch(Ok(a));
            app.on_key(key(KeyCode::Enter));
        }
        // Saved order is newest-first: paint, walk, bake. Move "walk" up.
        // Row 0 is the still-displayed suggestion, so walk is two rows down.
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Char('K')));
        let keys: Vec<&str> = app.entries.iter().map(|e| e.activity.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "3", "1"]);

        let store = Store::open(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(store.load().unwrap(), app.entries);
    }

    #[test]
    fn test_done_flag_persists() {
        let (mut app, dir) = test_app();
        app.finish_fetch(Ok(juggle()));
        app.on_key(key(KeyCode::Enter)); // save it
        app.on_key(key(KeyCode::Down)); // onto the saved row
        app.on_key(key(KeyCode::Char('x')));
        assert!(app.entries[0].done);

        let store = Store::open(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.load().unwrap()[0].done);
    }

    #[test]
    fn test_save_failure_raises_banner_and_keeps_state() {
        let (mut app, dir) = test_app();
        // A directory squatting the save path makes every write fail.
        std::fs::create_dir(dir.path().join("unbored.json")).unwrap();

        app.finish_fetch(Ok(juggle()));
        app.on_key(key(KeyCode::Enter));

        let notice = app.notice.as_ref().expect("banner");
        assert_eq!(notice.level, NoticeLevel::Error);
        // The in-memory selection survives the failed write.
        assert_eq!(app.entries.len(), 1);
        assert!(app.suggestion_selected());
    }

    #[test]
    fn test_type_selector_cycles_and_feeds_filters() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.current_kind(), None);

        app.on_key(key(KeyCode::Right));
        assert_eq!(app.current_kind(), Some(ActivityType::Education));

        app.on_key(key(KeyCode::Left));
        app.on_key(key(KeyCode::Left));
        assert_eq!(app.current_kind(), Some(ActivityType::Busywork));
        assert_eq!(
            app.filters().query_params(),
            vec![("type", "busywork".to_string())]
        );
    }

    #[test]
    fn test_enter_on_types_requests_a_fetch() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.on_key(key(KeyCode::Enter)), Some(Command::Fetch));
    }

    #[test]
    fn test_editing_filters_refetches_on_close() {
        let (mut app, _dir) = test_app();
        app.on_key(key(KeyCode::Char('f')));
        assert_eq!(app.focus, Focus::Filters);

        // Type a participant count, then close.
        app.on_key(key(KeyCode::Char('3')));
        assert_eq!(app.on_key(key(KeyCode::Esc)), Some(Command::Fetch));
        assert_eq!(app.filters().participants, Some(3));

        // Re-opening and closing without changes must not refetch.
        app.on_key(key(KeyCode::Char('f')));
        assert_eq!(app.on_key(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_open_link_when_present() {
        let (mut app, _dir) = test_app();
        let mut a = juggle();
        a.link = "https://en.wikipedia.org/wiki/Juggling".to_string();
        app.finish_fetch(Ok(a.clone()));

        assert_eq!(
            app.on_key(key(KeyCode::Char('o'))),
            Some(Command::OpenLink(a.link))
        );
    }

    #[test]
    fn test_quit_from_both_panes() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        app.finish_fetch(Ok(juggle()));
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Some(Command::Quit));
    }
}
