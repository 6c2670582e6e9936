use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::config::{ClipboardBackend, Config};
use crate::notification::NotificationState;
use crate::provider::{FetchRequest, FetchResponse};
use crate::share;
use crate::spin::{SpinWheel, TICK_INTERVAL_MS, Ticker};
use crate::suggestion::{Mode, Suggestion, SuggestionRequest};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Location,
    Preferences,
    Ingredients,
}

impl FormFocus {
    /// First field of a mode's form
    pub fn first_for(mode: Mode) -> Self {
        match mode {
            Mode::EatOut => FormFocus::Location,
            Mode::CookHome => FormFocus::Ingredients,
        }
    }

    /// Next field in tab order, wrapping within the mode's form
    pub fn next(self, mode: Mode) -> Self {
        match mode {
            Mode::EatOut => match self {
                FormFocus::Location => FormFocus::Preferences,
                _ => FormFocus::Location,
            },
            Mode::CookHome => FormFocus::Ingredients,
        }
    }
}

/// An open spinner popup: the wheel plus its tick thread
///
/// The ticker only exists while a spin is running; a settled or idle wheel
/// has no thread behind it.
pub struct SpinSession {
    pub wheel: SpinWheel,
    ticker: Option<Ticker>,
    tick_rx: Option<Receiver<()>>,
}

impl SpinSession {
    pub fn new(wheel: SpinWheel) -> Self {
        Self {
            wheel,
            ticker: None,
            tick_rx: None,
        }
    }

    /// Start the wheel and its tick thread
    ///
    /// Returns false if the wheel refused (already spinning or settled).
    pub fn start(&mut self) -> bool {
        if !self.wheel.start() {
            return false;
        }
        let (ticker, tick_rx) = Ticker::spawn(Duration::from_millis(TICK_INTERVAL_MS));
        self.ticker = Some(ticker);
        self.tick_rx = Some(tick_rx);
        true
    }

    /// Ticks queued since the last poll
    pub fn pending_ticks(&self) -> usize {
        self.tick_rx
            .as_ref()
            .map(|rx| rx.try_iter().count())
            .unwrap_or(0)
    }

    /// Stop the tick thread, leaving the wheel as it is
    pub fn stop_ticker(&mut self) {
        if let Some(ticker) = &self.ticker {
            ticker.cancel();
        }
        self.ticker = None;
        self.tick_rx = None;
    }

    /// Cancel everything: tick thread and wheel state
    pub fn close(&mut self) {
        self.stop_ticker();
        self.wheel.close();
    }
}

/// Application state
pub struct App {
    pub mode: Mode,
    pub location: TextArea<'static>,
    pub preferences: TextArea<'static>,
    pub ingredients: TextArea<'static>,
    pub focus: FormFocus,
    pub suggestions: Vec<Suggestion>,
    pub loading: bool,
    pub error: Option<String>,
    /// Outcome of the last spin; highlights the matching card
    pub chosen_id: Option<String>,
    pub spin: Option<SpinSession>,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub request_tx: Option<Sender<FetchRequest>>,
    pub response_rx: Option<Receiver<FetchResponse>>,
    /// Monotonic ID of the latest request, used to filter stale responses
    pub request_id: u64,
    pub in_flight_request_id: Option<u64>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance seeded from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            mode: Mode::EatOut,
            location: form_textarea(&config.form.location),
            preferences: form_textarea(&config.form.preferences),
            ingredients: form_textarea(""),
            focus: FormFocus::first_for(Mode::EatOut),
            suggestions: Vec::new(),
            loading: false,
            error: None,
            chosen_id: None,
            spin: None,
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            should_quit: false,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Override the startup mode (CLI flag)
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.focus = FormFocus::first_for(mode);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Build a provider request from the form, if the form is complete
    pub fn current_request(&self) -> Option<SuggestionRequest> {
        match self.mode {
            Mode::EatOut => {
                let location = textarea_text(&self.location);
                let preferences = textarea_text(&self.preferences);
                if location.is_empty() || preferences.is_empty() {
                    return None;
                }
                Some(SuggestionRequest::EatOut {
                    location,
                    preferences,
                })
            }
            Mode::CookHome => {
                let ingredients = textarea_text(&self.ingredients);
                if ingredients.is_empty() {
                    return None;
                }
                Some(SuggestionRequest::CookHome { ingredients })
            }
        }
    }

    /// Submit the form: cancel any in-flight request and fetch suggestions
    ///
    /// Result state is reset up front so stale cards never sit next to a
    /// fresh loading indicator.
    pub fn submit(&mut self) {
        let Some(request) = self.current_request() else {
            self.notification.show(match self.mode {
                Mode::EatOut => "Enter a location and preferences first.",
                Mode::CookHome => "List some ingredients first.",
            });
            return;
        };

        self.cancel_in_flight_request();
        self.close_spinner();
        self.suggestions.clear();
        self.error = None;
        self.chosen_id = None;

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let sent = if let Some(ref tx) = self.request_tx {
            tx.send(FetchRequest::Fetch {
                request,
                request_id,
            })
            .is_ok()
        } else {
            false
        };

        if sent {
            self.loading = true;
            self.in_flight_request_id = Some(request_id);
            log::debug!("Sent fetch request {}", request_id);
        } else {
            self.error = Some("The suggestion worker is not running.".to_string());
        }
    }

    /// Cancel any in-flight request
    ///
    /// Returns true if a cancel was sent.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id
            && let Some(ref tx) = self.request_tx
            && tx.send(FetchRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {}", request_id);
            self.in_flight_request_id = None;
            self.loading = false;
            return true;
        }
        false
    }

    /// Drain worker responses and apply the ones that are still current
    pub fn poll_provider(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };
        let responses: Vec<FetchResponse> = rx.try_iter().collect();
        for response in responses {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Suggestions {
                suggestions,
                request_id,
            } => {
                if Some(request_id) != self.in_flight_request_id {
                    log::debug!("Dropping stale suggestions for request {}", request_id);
                    return;
                }
                self.suggestions = suggestions;
                self.loading = false;
                self.error = None;
                self.in_flight_request_id = None;
            }
            FetchResponse::Error {
                message,
                request_id,
            } => {
                if Some(request_id) != self.in_flight_request_id {
                    log::debug!("Dropping stale error for request {}", request_id);
                    return;
                }
                self.error = Some(message);
                self.loading = false;
                self.in_flight_request_id = None;
            }
            FetchResponse::Cancelled { request_id } => {
                // Cancellation already cleared loading state on this side
                log::debug!("Request {} acknowledged as cancelled", request_id);
            }
        }
    }

    /// Open the spinner popup over the current suggestions
    ///
    /// A spin only makes sense with a real choice, so fewer than two
    /// suggestions is a no-op.
    pub fn open_spinner(&mut self) {
        if self.spin.is_some() || self.loading || self.suggestions.len() < 2 {
            return;
        }
        if let Some(wheel) = SpinWheel::new(self.suggestions.clone()) {
            self.spin = Some(SpinSession::new(wheel));
        }
    }

    /// Start the spin inside the open popup
    pub fn start_spin(&mut self) {
        if let Some(session) = &mut self.spin {
            session.start();
        }
    }

    /// Close the spinner popup, cancelling any running spin
    ///
    /// A settled outcome survives the close so the card stays highlighted.
    pub fn close_spinner(&mut self) {
        if let Some(mut session) = self.spin.take() {
            session.close();
        }
    }

    /// Apply queued ticks to the running spin
    pub fn poll_spin(&mut self) {
        let Some(session) = &mut self.spin else {
            return;
        };
        let pending = session.pending_ticks();
        let mut settled_id = None;
        for _ in 0..pending {
            if let Some(chosen) = session.wheel.tick() {
                settled_id = Some(chosen.id.clone());
            }
        }
        if let Some(id) = settled_id {
            session.stop_ticker();
            self.chosen_id = Some(id);
        }
    }

    /// The suggestion picked by the last spin, if it is still in the list
    pub fn chosen_suggestion(&self) -> Option<&Suggestion> {
        let id = self.chosen_id.as_deref()?;
        self.suggestions.iter().find(|s| s.id == id)
    }

    /// Copy the chosen suggestion's share text to the clipboard
    pub fn share_chosen(&mut self) {
        let Some(suggestion) = self.chosen_suggestion().cloned() else {
            self.notification
                .show("Nothing to share yet. Spin the wheel first!");
            return;
        };
        match share::share_suggestion(&suggestion, self.clipboard_backend) {
            Ok(()) => self.notification.show("Suggestion copied to clipboard!"),
            Err(err) => self.notification.show(format!("Could not copy: {err}")),
        }
    }

    /// Switch between eat-out and cook-at-home
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.focus = FormFocus::first_for(self.mode);
    }

    /// Move focus to the next form field
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next(self.mode);
    }

    /// The textarea the cursor lives in
    pub fn focused_textarea(&mut self) -> &mut TextArea<'static> {
        match self.focus {
            FormFocus::Location => &mut self.location,
            FormFocus::Preferences => &mut self.preferences,
            FormFocus::Ingredients => &mut self.ingredients,
        }
    }

    /// Periodic housekeeping, called once per event loop iteration
    pub fn on_tick(&mut self) {
        self.notification.tick();
        self.poll_provider();
        self.poll_spin();
    }
}

/// Single-line textarea seeded with an initial value, cursor at the end
fn form_textarea(initial: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![initial.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Trimmed form field contents
fn textarea_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().join(" ").trim().to_string()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
