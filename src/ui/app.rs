//! Main application state and event loop glue.

use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::{CounterBar, FlashcardWidget, KeyHints};
use crate::session::{Flow, Intent, Session};
use crate::view::CardView;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    pub running: bool,
    pub theme: Theme,
    pub session: Session,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        Self {
            running: true,
            theme,
            session,
        }
    }

    /// Apply an intent and stop running on quit.
    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("Applying {:?}", intent);
        if self.session.apply(intent) == Flow::Quit {
            self.running = false;
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(intent) = Intent::from_key(key) {
                        self.dispatch(intent);
                    }
                }
                // Layout is recomputed from the frame area on the next draw.
                Event::Resize(width, height) => {
                    log::debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }
        }
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear with background
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg_dark)),
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Length(1),   // Header
            Constraint::Length(1),   // Spacing
            Constraint::Min(5),      // Card
            Constraint::Length(1),   // Counters
            Constraint::Length(1),   // Hints
        ])
        .split(area);

        let view = CardView::of(&self.session);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Vocabulary", self.theme.counter()),
            Span::styled(
                format!("  [{}]", self.theme.name.display_name()),
                self.theme.key_hint(),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        frame.render_widget(
            FlashcardWidget::new(&view, &self.theme),
            centered_rect(80, 100, chunks[2]),
        );
        frame.render_widget(
            CounterBar::new(view.total_words, view.cursor, &self.theme),
            chunks[3],
        );
        frame.render_widget(KeyHints::new(view.legend, &self.theme), chunks[4]);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, Deck};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app(cards: Vec<Card>) -> App {
        let session = Session::new(Deck::new(cards), StdRng::seed_from_u64(5));
        App::new(session, Theme::default())
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_term_counters_and_hints() {
        let app = app(vec![Card::new("lucid", "clear"), Card::new("terse", "brief")]);
        let text = draw(&app, 100, 20);

        assert!(text.contains("lucid"));
        assert!(!text.contains("clear"));
        assert!(text.contains("Total Words: 2"));
        assert!(text.contains("index: 0"));
        assert!(text.contains("Random Word"));
    }

    #[test]
    fn test_draws_meaning_after_toggle() {
        let mut app = app(vec![Card::new("lucid", "clear"), Card::new("terse", "brief")]);
        app.dispatch(Intent::Next);
        app.dispatch(Intent::ToggleMeaning);
        let text = draw(&app, 100, 20);

        assert!(text.contains("terse"));
        assert!(text.contains("Meaning: brief"));
        assert!(text.contains("index: 1"));
    }

    #[test]
    fn test_draws_placeholder_for_empty_deck() {
        let app = app(Vec::new());
        let text = draw(&app, 100, 20);

        assert!(text.contains("no cards loaded"));
        assert!(text.contains("Total Words: 0"));
    }

    #[test]
    fn test_draws_in_small_terminal() {
        let app = app(vec![Card::new("lucid", "clear")]);
        let text = draw(&app, 30, 10);
        assert!(text.contains("lucid"));
    }

    #[test]
    fn test_quit_stops_running() {
        let mut app = app(vec![Card::new("lucid", "clear")]);
        app.dispatch(Intent::ToggleMeaning);
        assert!(app.running);
        app.dispatch(Intent::Quit);
        assert!(!app.running);
    }
}
