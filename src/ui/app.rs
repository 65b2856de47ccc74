//! Main UI Application
//!
//! Renders the game screen and routes keyboard input to the session.
//! The engine stays observer-free; this layer reads its getters after
//! each operation and redraws.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Game, GameState};

/// Main UI application
pub struct App {
    /// Current contents of the guess field
    input: String,
    /// Whether the last submit was wrong (shows the try-again hint)
    guess_error: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            guess_error: false,
        }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match game.state().clone() {
            GameState::Playing => self.handle_playing_input(key, game),
            GameState::Finished { .. } => self.handle_finished_input(key, game),
            GameState::Quit => Ok(true),
        }
    }

    fn handle_playing_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter => {
                let guess = self.input.trim().to_string();
                if guess.is_empty() {
                    return Ok(false);
                }
                if game.submit_word(&guess)? {
                    self.input.clear();
                    self.guess_error = false;
                } else {
                    self.guess_error = true;
                }
            }
            KeyCode::Tab => {
                // Skip: next word, no score change
                game.skip_word()?;
                self.input.clear();
                self.guess_error = false;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.guess_error = false;
            }
            KeyCode::Esc => {
                game.quit();
            }
            KeyCode::Char(c) => {
                self.guess_error = false;
                self.input.push(c);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_finished_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                game.play_again()?;
                self.input.clear();
                self.guess_error = false;
            }
            KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('q') => {
                game.quit();
            }
            _ => {}
        }
        Ok(false)
    }

    /// Render the current frame
    pub fn render(&self, frame: &mut Frame, game: &Game) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match game.state() {
            GameState::Playing => self.render_playing(frame, game),
            GameState::Finished { final_score } => {
                self.render_playing(frame, game);
                self.render_final_score_popup(frame, *final_score);
            }
            GameState::Quit => {}
        }
    }

    fn render_playing(&self, frame: &mut Frame, game: &Game) {
        let engine = game.engine();
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // title
                Constraint::Length(2),  // score / round counters
                Constraint::Min(5),     // scrambled word + instruction
                Constraint::Length(3),  // guess input
                Constraint::Length(2),  // key hints
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "U N J U M B L E",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let counters = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Score: {}", engine.score()),
                Style::default().fg(Color::Green),
            ),
            Span::raw("    "),
            Span::styled(
                format!("Word {} of {}", engine.round_count(), engine.max_rounds()),
                Style::default().fg(Color::Gray),
            ),
        ]))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(counters, chunks[1]);

        let word_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                spaced_letters(engine.scrambled_word()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Unscramble the word using all the letters.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let word_para = Paragraph::new(word_lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(word_para, chunks[2]);

        self.render_input_field(frame, chunks[3]);

        let hints = Paragraph::new(Line::from(Span::styled(
            "[Enter] Submit   [Tab] Skip   [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(hints, chunks[4]);
    }

    fn render_input_field(&self, frame: &mut Frame, area: Rect) {
        // Keep the field a fixed width in the middle of the row
        let field = centered_rect(50, 100, area);

        let (title, border_style) = if self.guess_error {
            (" Try again! ", Style::default().fg(Color::Red))
        } else {
            (" Your guess ", Style::default().fg(Color::White))
        };

        let input = Paragraph::new(format!("{}_", self.input)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
        frame.render_widget(input, field);
    }

    fn render_final_score_popup(&self, frame: &mut Frame, final_score: u32) {
        let area = centered_rect(40, 40, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Congratulations! ")
            .border_style(Style::default().fg(Color::Yellow));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let menu = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("You scored: {}", final_score),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[P] Play Again",
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled("[E] Exit", Style::default().fg(Color::Gray))),
        ])
        .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(menu, inner);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Spread a word's letters out ("tca" -> "t c a") so the scramble is
/// easier to read at terminal font sizes.
fn spaced_letters(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Helper to create a centered rect using percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
