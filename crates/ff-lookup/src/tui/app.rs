//! Main application state and event loop

use super::search::{spawn_worker, LookupRequest, LookupResponse};
use super::ui;
use anyhow::Result;
use crossterm::{
    cursor::SetCursorStyle,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ff_lookup_core::dashboard::DashboardData;
use ff_lookup_core::{
    Navigation, PlayerLookup, Reveal, SearchController, SubmitError, Validation, ViewState,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Simple single-line text input with cursor
#[derive(Default, Clone)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| self.cursor + c.len_utf8())
                .unwrap_or(self.cursor);
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| self.cursor + c.len_utf8())
                .unwrap_or(self.text.len());
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle a key event, returns true if the text or cursor changed
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let has_ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = modifiers.contains(KeyModifiers::ALT);

        match code {
            KeyCode::Char('a') if has_ctrl => self.cursor = 0,
            KeyCode::Home => self.cursor = 0,
            KeyCode::Char('e') if has_ctrl => self.cursor = self.text.len(),
            KeyCode::End => self.cursor = self.text.len(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            // Regular char (no Ctrl/Alt modifiers)
            KeyCode::Char(c) if !has_ctrl && !has_alt => self.insert_char(c),
            _ => return false,
        }
        true
    }
}

/// Toast notification state
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
    pub is_error: bool,
}

impl Toast {
    pub fn new(message: String, duration: Duration) -> Self {
        Self {
            message,
            expires_at: Instant::now() + duration,
            is_error: false,
        }
    }

    pub fn error(message: String, duration: Duration) -> Self {
        Self {
            is_error: true,
            ..Self::new(message, duration)
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Settings the dashboard starts with
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub reveal_step: Duration,
    pub sidebar_open: bool,
    pub operator: String,
}

/// Application state
pub struct App {
    /// UID input line
    pub input: TextInput,
    /// Search phase, held results and outfit view
    pub search: SearchController,
    /// Active section and sidebar visibility
    pub nav: Navigation,
    /// Static content around the lookup panel
    pub dashboard: DashboardData,
    pub reveal: Reveal,
    /// When the current results arrived (drives the staggered reveal)
    pub results_at: Option<Instant>,
    /// When the in-flight lookup started (drives the spinner)
    pub loading_since: Option<Instant>,
    /// How long the last completed lookup took
    pub last_duration: Option<Duration>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    /// Channel to send lookups to worker
    request_tx: Sender<LookupRequest>,
    /// Channel to receive finished lookups from worker
    response_rx: Receiver<LookupResponse>,
}

impl App {
    pub fn new(lookup: Arc<dyn PlayerLookup>, options: AppOptions) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<LookupRequest>();
        let (response_tx, response_rx) = mpsc::channel::<LookupResponse>();

        spawn_worker(lookup, request_rx, response_tx);

        Self {
            input: TextInput::default(),
            search: SearchController::new(),
            nav: Navigation::new(options.sidebar_open),
            dashboard: DashboardData::sample(&options.operator),
            reveal: Reveal::new(options.reveal_step),
            results_at: None,
            loading_since: None,
            last_duration: None,
            toast: None,
            should_quit: false,
            request_tx,
            response_rx,
        }
    }

    /// Push the edited text into the controller
    fn sync_input(&mut self) {
        self.search.set_input(self.input.text.clone());
        if !self.search.is_loading() {
            self.loading_since = None;
        }
        if self.search.bundle().is_none() {
            self.results_at = None;
        }
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.search.clear();
        self.loading_since = None;
        self.results_at = None;
    }

    fn submit(&mut self) {
        match self.search.submit() {
            Ok(ticket) => {
                self.results_at = None;
                self.loading_since = Some(Instant::now());
                let _ = self.request_tx.send(LookupRequest {
                    id: ticket.id,
                    uid: ticket.uid,
                });
            }
            Err(SubmitError::Busy) => {
                self.toast = Some(Toast::new(
                    "Lookup already in progress".to_string(),
                    Duration::from_secs(2),
                ));
            }
            Err(SubmitError::Invalid(Validation::Empty)) => {
                self.toast = Some(Toast::error(
                    "Enter a UID first".to_string(),
                    Duration::from_secs(2),
                ));
            }
            // The inline validation line already explains the problem
            Err(SubmitError::Invalid(_)) => {}
        }
    }

    /// Poll for finished lookups from worker (non-blocking)
    pub fn poll_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            if !self.search.complete(response.id, response.outcome) {
                continue;
            }
            self.loading_since = None;
            self.last_duration = Some(response.duration);
            if self.search.view() == ViewState::Results {
                self.results_at = Some(Instant::now());
            }
        }
    }

    /// Number of result sections currently on screen
    pub fn visible_sections(&self, total: usize) -> usize {
        match self.results_at {
            Some(at) => self.reveal.visible(at.elapsed(), total),
            None => 0,
        }
    }

    /// Clear expired toast
    fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// Handle input event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Char('b') if ctrl => self.nav.toggle_sidebar(),
            KeyCode::Char('o') if ctrl => {
                if self.search.bundle().is_some() {
                    self.search.toggle_outfit_view();
                }
            }
            KeyCode::Tab => self.nav.next(),
            KeyCode::BackTab => self.nav.prev(),
            code => {
                if self.input.handle_key(code, key.modifiers) {
                    self.sync_input();
                }
            }
        }
    }
}

/// Run the TUI application
pub fn run(lookup: Arc<dyn PlayerLookup>, options: AppOptions) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetCursorStyle::BlinkingBar)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(lookup, options);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update_toast();

        app.poll_responses();

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(16))? {
            let event = event::read()?;
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use ff_lookup_core::{MockLookup, OutfitView, Tab};
    use std::thread;

    pub(crate) fn test_app(delay: Duration) -> App {
        App::new(
            Arc::new(MockLookup::new(delay)),
            AppOptions {
                reveal_step: Duration::ZERO,
                sidebar_open: true,
                operator: "Tester".to_string(),
            },
        )
    }

    pub(crate) fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub(crate) fn ctrl(app: &mut App, c: char) {
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )));
    }

    pub(crate) fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Poll until the in-flight lookup lands or give up after a few seconds
    pub(crate) fn wait_idle(app: &mut App) {
        for _ in 0..500 {
            app.poll_responses();
            if !app.search.is_loading() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("lookup did not finish");
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "1234".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_char_before();
        assert_eq!(input.text, "124");
        assert_eq!(input.cursor, 2);

        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.text, "24");

        assert!(!input.handle_key(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(input.text, "24");
    }

    #[test]
    fn test_typing_updates_validation() {
        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, "12ab");
        assert_eq!(app.search.input(), "12ab");
        assert_eq!(app.search.view(), ViewState::Invalid);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.view(), ViewState::Invalid);
        assert!(app.loading_since.is_none());
    }

    #[test]
    fn test_enter_runs_lookup() {
        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, "1234567890");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.view(), ViewState::Loading);

        wait_idle(&mut app);
        assert_eq!(app.search.view(), ViewState::Results);
        assert!(app.results_at.is_some());
        assert!(app.last_duration.is_some());
        assert_eq!(app.visible_sections(5), 5);
    }

    #[test]
    fn test_sentinel_shows_not_found() {
        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, "99999999");
        press(&mut app, KeyCode::Enter);
        wait_idle(&mut app);
        assert_eq!(app.search.view(), ViewState::NotFound);
        assert!(app.results_at.is_none());
    }

    #[test]
    fn test_enter_while_loading_is_rejected() {
        let mut app = test_app(Duration::from_millis(200));
        type_text(&mut app, "1234567890");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Lookup already in progress")
        );
        wait_idle(&mut app);
        assert_eq!(app.search.view(), ViewState::Results);
    }

    #[test]
    fn test_clear_while_loading_drops_result() {
        let mut app = test_app(Duration::from_millis(50));
        type_text(&mut app, "1234567890");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'u');
        assert_eq!(app.search.view(), ViewState::Idle);
        assert_eq!(app.input.text, "");

        thread::sleep(Duration::from_millis(150));
        app.poll_responses();
        assert_eq!(app.search.view(), ViewState::Idle);
        assert!(app.search.bundle().is_none());
    }

    #[test]
    fn test_backspacing_to_empty_clears_results() {
        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, "12345678");
        press(&mut app, KeyCode::Enter);
        wait_idle(&mut app);
        assert!(app.search.bundle().is_some());

        for _ in 0..8 {
            press(&mut app, KeyCode::Backspace);
        }
        assert_eq!(app.search.view(), ViewState::Idle);
        assert!(app.search.bundle().is_none());
        assert!(app.results_at.is_none());
    }

    #[test]
    fn test_empty_enter_shows_toast() {
        let mut app = test_app(Duration::ZERO);
        press(&mut app, KeyCode::Enter);
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.is_error);
        assert_eq!(toast.message, "Enter a UID first");
    }

    #[test]
    fn test_outfit_toggle_needs_results() {
        let mut app = test_app(Duration::ZERO);
        ctrl(&mut app, 'o');
        assert_eq!(app.search.outfit_view(), OutfitView::Image);

        type_text(&mut app, "12345678");
        press(&mut app, KeyCode::Enter);
        wait_idle(&mut app);
        ctrl(&mut app, 'o');
        assert_eq!(app.search.outfit_view(), OutfitView::Detail);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = test_app(Duration::ZERO);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.nav.active(), Tab::Accounts);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.nav.active(), Tab::Home);

        ctrl(&mut app, 'b');
        assert!(!app.nav.sidebar_open());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(Duration::ZERO);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);

        let mut app = test_app(Duration::ZERO);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
