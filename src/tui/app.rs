use std::collections::BTreeSet;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::model::config::{Align, Config};
use crate::ops::task_ops::{Severity, StoreError, TaskStore};

use super::entry::EntryState;
use super::input;
use super::render;
use super::theme::Theme;

/// Two clicks on the same row within this window toggle it
pub const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Which widget receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry,
    List,
}

/// A user-level command, reachable from keys, buttons and the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    DeleteSelected,
    ToggleSelected,
    ClearAll,
}

impl Action {
    /// Label on the dedicated button
    pub fn button_label(self) -> &'static str {
        match self {
            Action::Submit => "Save",
            Action::DeleteSelected => "Delete selected",
            Action::ToggleSelected => "Done / undo",
            Action::ClearAll => "Clear all",
        }
    }

    /// Label in the context menu
    pub fn menu_label(self) -> &'static str {
        match self {
            Action::Submit => "Save",
            Action::DeleteSelected => "Delete",
            Action::ToggleSelected => "Done / undo",
            Action::ClearAll => "Clear all",
        }
    }
}

/// Buttons under the list, left to right
pub const LIST_BUTTONS: [Action; 3] = [
    Action::DeleteSelected,
    Action::ToggleSelected,
    Action::ClearAll,
];

/// Context menu entries, top to bottom
pub const MENU_ACTIONS: [Action; 3] = [
    Action::DeleteSelected,
    Action::ToggleSelected,
    Action::ClearAll,
];

/// A modal message raised by a rejected action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl From<StoreError> for Notice {
    fn from(err: StoreError) -> Self {
        Notice {
            severity: err.severity(),
            message: err.to_string(),
        }
    }
}

/// Open context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    /// Highlighted entry in `MENU_ACTIONS`
    pub cursor: usize,
    /// Screen cell the menu opens from
    pub anchor: Position,
}

/// Cursor, selection and scroll of the task list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub cursor: usize,
    pub selected: BTreeSet<usize>,
    /// Fixed end of a shift-extended range
    pub anchor: Option<usize>,
    pub scroll: usize,
}

/// Screen regions from the last frame, for mouse dispatch
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub entry: Rect,
    pub save_button: Rect,
    /// Inner list area (without borders)
    pub list: Rect,
    pub buttons: Vec<(Action, Rect)>,
    pub menu: Option<Rect>,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub theme: Theme,
    pub title: String,
    pub align: Align,
    pub focus: Focus,
    pub entry: EntryState,
    pub list: ListState,
    pub menu: Option<ContextMenu>,
    pub notice: Option<Notice>,
    pub show_help: bool,
    pub should_quit: bool,
    pub hit: HitAreas,
    /// Row and time of the previous left click
    pub last_click: Option<(usize, Instant)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::with_toggle_mode(config.tasks.toggle),
            theme: Theme::from_config(&config.ui),
            title: config.ui.title.clone(),
            align: config.ui.align,
            focus: Focus::Entry,
            entry: EntryState::default(),
            list: ListState::default(),
            menu: None,
            notice: None,
            show_help: false,
            should_quit: false,
            hit: HitAreas::default(),
            last_click: None,
        }
    }

    /// Run an action against the store, raising a notice if it is rejected
    pub fn perform(&mut self, action: Action) {
        self.menu = None;
        let result = match action {
            Action::Submit => self.submit(),
            Action::DeleteSelected => self.delete_selected(),
            Action::ToggleSelected => self.toggle_selected(),
            Action::ClearAll => self.clear_all(),
        };
        if let Err(err) = result {
            self.raise(err);
        }
    }

    fn submit(&mut self) -> Result<(), StoreError> {
        let first_new_row = self.store.len();
        let group_id = self.store.add_batch(&self.entry.buffer)?;
        tracing::info!(
            group = %group_id,
            tasks = self.store.len() - first_new_row,
            "added batch"
        );
        self.entry.clear();
        self.reset_selection(first_new_row);
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<(), StoreError> {
        let removed = self
            .store
            .delete_selected(self.list.selected.iter().copied())?;
        tracing::info!(removed, remaining = self.store.len(), "deleted selected groups");
        self.reset_selection(self.list.cursor);
        Ok(())
    }

    fn toggle_selected(&mut self) -> Result<(), StoreError> {
        let changed = self
            .store
            .toggle_selected(self.list.selected.iter().copied())?;
        tracing::info!(rows = ?changed, "toggled done");
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        let removed = self.store.clear_all()?;
        tracing::info!(removed, "cleared all tasks");
        self.reset_selection(0);
        Ok(())
    }

    fn raise(&mut self, err: StoreError) {
        match err.severity() {
            Severity::Warning => tracing::warn!(%err, "action rejected"),
            Severity::Info => tracing::info!(%err, "nothing to do"),
        }
        self.notice = Some(Notice::from(err));
    }

    /// After rows were added or removed: drop the selection, which may
    /// now point at different tasks, and put the cursor back in range.
    fn reset_selection(&mut self, cursor: usize) {
        self.list.selected.clear();
        self.list.anchor = None;
        self.list.cursor = cursor.min(self.store.len().saturating_sub(1));
        self.last_click = None;
    }

    // -----------------------------------------------------------------------
    // List selection
    // -----------------------------------------------------------------------

    /// Select exactly `row`, like a plain click
    pub fn select_only(&mut self, row: usize) {
        if row >= self.store.len() {
            return;
        }
        self.list.cursor = row;
        self.list.anchor = Some(row);
        self.list.selected.clear();
        self.list.selected.insert(row);
    }

    /// Select the range between the anchor and `row`, like a shift-click
    pub fn extend_selection_to(&mut self, row: usize) {
        if row >= self.store.len() {
            return;
        }
        let anchor = self.list.anchor.unwrap_or(self.list.cursor);
        self.list.anchor = Some(anchor);
        self.list.cursor = row;
        self.list.selected = (anchor.min(row)..=anchor.max(row)).collect();
    }

    /// Add or remove `row` from the selection, like a ctrl-click
    pub fn toggle_row_selected(&mut self, row: usize) {
        if row >= self.store.len() {
            return;
        }
        self.list.cursor = row;
        self.list.anchor = Some(row);
        if !self.list.selected.remove(&row) {
            self.list.selected.insert(row);
        }
    }

    pub fn select_all(&mut self) {
        self.list.selected = (0..self.store.len()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.list.selected.clear();
        self.list.anchor = None;
    }

    /// Move the list cursor by `delta` rows, selecting or extending
    pub fn move_cursor(&mut self, delta: isize, extend: bool) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let target = self.list.cursor.saturating_add_signed(delta).min(len - 1);
        if extend {
            self.extend_selection_to(target);
        } else {
            self.select_only(target);
        }
    }

    /// Keep the cursor row within a window of `height` rows
    pub fn scroll_list_to_cursor(&mut self, height: usize) {
        let len = self.store.len();
        let max_scroll = len.saturating_sub(height);
        self.list.scroll = self.list.scroll.min(max_scroll);
        if height == 0 || len == 0 {
            return;
        }
        let cursor = self.list.cursor;
        if cursor < self.list.scroll {
            self.list.scroll = cursor;
        } else if cursor >= self.list.scroll + height {
            self.list.scroll = cursor + 1 - height;
        }
    }

    // -----------------------------------------------------------------------
    // Context menu
    // -----------------------------------------------------------------------

    pub fn open_menu(&mut self, anchor: Position) {
        self.menu = Some(ContextMenu { cursor: 0, anchor });
    }

    pub fn move_menu_cursor(&mut self, delta: isize) {
        if let Some(menu) = &mut self.menu {
            let last = MENU_ACTIONS.len() - 1;
            menu.cursor = menu.cursor.saturating_add_signed(delta).min(last);
        }
    }

    pub fn activate_menu(&mut self) {
        if let Some(menu) = self.menu.take() {
            self.perform(MENU_ACTIONS[menu.cursor]);
        }
    }

    /// Screen position to open a keyboard-invoked menu at: beside the cursor row
    pub fn menu_anchor_for_cursor(&self) -> Position {
        let area = self.hit.list;
        let offset = self.list.cursor.saturating_sub(self.list.scroll) as u16;
        let y = area.y + offset.min(area.height.saturating_sub(1));
        Position::new(area.x + area.width / 3, y)
    }
}

/// Run the TUI application
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if config.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let keyboard_enhanced =
        config.ui.kitty_keyboard && supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(keyboard_enhanced);
        original_hook(panic_info);
    }));

    tracing::info!(keyboard_enhanced, mouse = config.ui.mouse, "session started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(tasks = app.store.len(), "session ended");

    restore_terminal(keyboard_enhanced)?;
    terminal.show_cursor()?;

    result
}

fn restore_terminal(keyboard_enhanced: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if keyboard_enhanced {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        stdout,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Blocks until the next event; nothing happens between user actions
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
            Event::Mouse(mouse) => input::handle_mouse(app, mouse, Instant::now()),
            Event::Paste(text) => input::handle_paste(app, &text),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
