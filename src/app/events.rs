use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // An open spinner popup captures all keys
        if self.spin.is_some() {
            self.handle_spinner_key(key);
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        // Everything else edits the focused form field
        self.focused_textarea().input(key);
    }

    /// Keys while the spinner popup is open
    fn handle_spinner_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.close_spinner(),
            KeyCode::Enter | KeyCode::Char(' ') => self.start_spin(),
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.share_chosen();
            }
            _ => {}
        }
    }

    /// Global keys on the main screen
    ///
    /// Returns true if the key was handled, false if it belongs to the
    /// focused textarea.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C / Esc: exit
        if (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            || key.code == KeyCode::Esc
        {
            self.should_quit = true;
            return true;
        }

        // Ctrl+T: toggle eat-out / cook-at-home
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_mode();
            return true;
        }

        // Ctrl+S: open the spinner over the current suggestions
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.open_spinner();
            return true;
        }

        // Ctrl+Y: share the chosen suggestion
        if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.share_chosen();
            return true;
        }

        // Enter: submit the form
        if key.code == KeyCode::Enter {
            self.submit();
            return true;
        }

        // Tab: next form field
        if key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::CONTROL) {
            self.cycle_focus();
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
