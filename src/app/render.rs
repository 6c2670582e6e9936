use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::spin::SpinPhase;
use crate::suggestion::{Mode, Suggestion, SuggestionDetails};
use crate::widgets::popup;

use super::state::{App, FormFocus, SpinSession};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let form_height = match self.mode {
            Mode::EatOut => 6,
            Mode::CookHome => 3,
        };

        let [header_area, mode_area, form_area, status_area, body_area, hints_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(form_height),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        self.render_header(frame, header_area);
        self.render_mode_line(frame, mode_area);
        self.render_form(frame, form_area);
        self.render_status_line(frame, status_area);
        self.render_body(frame, body_area);
        self.render_hints(frame, hints_area);

        if self.spin.is_some() {
            self.render_spinner_popup(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "LunchSpin",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Can't decide? Let the wheel pick your next meal!",
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(header, area);
    }

    fn render_mode_line(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw("Mode: "),
            Span::styled(
                self.mode.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Ctrl+T to switch)", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        match self.mode {
            Mode::EatOut => {
                let [location_area, preferences_area] =
                    Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(area);

                let focus = self.focus;
                style_field(&mut self.location, " Where are you? ", focus == FormFocus::Location);
                style_field(
                    &mut self.preferences,
                    " What are you craving? ",
                    focus == FormFocus::Preferences,
                );
                frame.render_widget(&self.location, location_area);
                frame.render_widget(&self.preferences, preferences_area);
            }
            Mode::CookHome => {
                let focus = self.focus;
                style_field(
                    &mut self.ingredients,
                    " What's in your kitchen? ",
                    focus == FormFocus::Ingredients,
                );
                frame.render_widget(&self.ingredients, area);
            }
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = if self.loading {
            Line::from(Span::styled(
                "Cooking up some tasty ideas...",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(message) = self.notification.message() {
            Line::from(Span::styled(message, Style::default().fg(Color::Green)))
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            let text = vec![
                Line::from(Span::styled(
                    "Oops! Something went wrong.",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
                Line::default(),
                Line::from(Span::styled(
                    "Press Enter to try again.",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
            return;
        }

        if self.suggestions.is_empty() {
            let hint = if self.loading {
                ""
            } else {
                "Fill in the form and press Enter to get suggestions."
            };
            let paragraph =
                Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
            frame.render_widget(paragraph, area);
            return;
        }

        let mut lines = vec![Line::from(Span::styled(
            "Here are your tasty suggestions!",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for suggestion in &self.suggestions {
            lines.push(Line::default());
            lines.extend(self.card_lines(suggestion));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    /// Lines for one suggestion card; the spin outcome gets a marker
    fn card_lines<'a>(&'a self, suggestion: &'a Suggestion) -> Vec<Line<'a>> {
        let chosen = self.chosen_id.as_deref() == Some(suggestion.id.as_str());
        let (marker, title_style) = if chosen {
            (
                "» ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().add_modifier(Modifier::BOLD))
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(suggestion.label(), title_style),
        ])];
        lines.push(Line::from(Span::styled(
            format!("  {}", suggestion.commentary()),
            Style::default().fg(Color::Gray),
        )));

        match &suggestion.details {
            SuggestionDetails::EatOut { maps_query, .. } => {
                lines.push(Line::from(Span::styled(
                    format!("  Maps: {maps_query}"),
                    Style::default().fg(Color::Blue),
                )));
            }
            SuggestionDetails::CookHome {
                ingredients_needed,
                basic_steps,
                ..
            } => {
                lines.push(Line::from(Span::styled(
                    format!("  Key ingredients: {}", ingredients_needed.join(", ")),
                    Style::default().fg(Color::Green),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  Steps: {basic_steps}"),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        lines
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.spin.is_some() {
            "Enter/Space spin | Ctrl+Y share | Esc close"
        } else {
            "Enter submit | Tab next field | Ctrl+T mode | Ctrl+S spin | Ctrl+Y share | Esc quit"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
            area,
        );
    }

    fn render_spinner_popup(&self, frame: &mut Frame) {
        let Some(session) = &self.spin else {
            return;
        };

        let height = (session.wheel.len() as u16).saturating_add(8);
        let area = popup::centered(frame.area(), 48, height);
        popup::clear_under(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Spin the Wheel! ")
            .border_style(Style::default().fg(Color::Yellow));

        let mut lines = vec![
            Line::from(Span::styled(
                "Let fate decide your next delicious meal.",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
        ];
        lines.extend(wheel_lines(session));
        lines.push(Line::default());
        lines.push(spinner_footer(session));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// One line per candidate with the cycling position highlighted
fn wheel_lines(session: &SpinSession) -> Vec<Line<'_>> {
    let highlight = session.wheel.phase() != SpinPhase::Idle;
    session
        .wheel
        .suggestions()
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            if highlight && index == session.wheel.current_index() {
                Line::from(Span::styled(
                    format!("▶ {}", suggestion.label()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(format!("  {}", suggestion.label())))
            }
        })
        .collect()
}

fn spinner_footer(session: &SpinSession) -> Line<'_> {
    match session.wheel.phase() {
        SpinPhase::Idle => Line::from(Span::styled(
            "Press Enter to spin, Esc to close.",
            Style::default().fg(Color::DarkGray),
        )),
        SpinPhase::Spinning => Line::from(Span::styled(
            "Spinning...",
            Style::default().fg(Color::Yellow),
        )),
        SpinPhase::Settled => {
            let label = session
                .wheel
                .chosen()
                .map(Suggestion::label)
                .unwrap_or_default();
            Line::from(Span::styled(
                format!("It's {label}! Ctrl+Y to share, Esc to close."),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}

/// Focus-aware bordered block on a form textarea
fn style_field(textarea: &mut tui_textarea::TextArea<'static>, title: &'static str, focused: bool) {
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
