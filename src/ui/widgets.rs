//! Custom widgets for the flashcard TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::view::CardView;

// ══════════════════════════════════════════════════════════════════════════
// Flashcard Widget
// ══════════════════════════════════════════════════════════════════════════

/// The term, and below it the meaning when visible.
pub struct FlashcardWidget<'a> {
    view: &'a CardView<'a>,
    theme: &'a Theme,
}

impl<'a> FlashcardWidget<'a> {
    pub fn new(view: &'a CardView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

/// Rows `text` occupies once wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    textwrap::wrap(text, width as usize).len() as u16
}

impl Widget for FlashcardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.card_border())
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("WORD", self.theme.label()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let text_width = inner.width.saturating_sub(4);
        let term_style = if self.view.is_placeholder {
            self.theme.placeholder()
        } else {
            self.theme.term()
        };

        let mut lines = vec![Line::from(Span::styled(self.view.term, term_style))];
        let mut content_height = wrapped_height(self.view.term, text_width);

        if let Some(meaning) = self.view.meaning {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Meaning: ", self.theme.label()),
                Span::styled(meaning, self.theme.meaning()),
            ]));
            content_height += 1 + wrapped_height(&format!("Meaning: {}", meaning), text_width);
        }

        // Center vertically
        let vertical_padding = inner.height.saturating_sub(content_height) / 2;

        let content_area = Rect {
            x: inner.x + 2,
            y: inner.y + vertical_padding,
            width: text_width,
            height: inner.height.saturating_sub(vertical_padding),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(self.theme.colors.text))
            .render(content_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Counter Bar Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct CounterBar<'a> {
    total_words: usize,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> CounterBar<'a> {
    pub fn new(total_words: usize, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            total_words,
            cursor,
            theme,
        }
    }
}

impl Widget for CounterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

        let total_text = Line::from(vec![
            Span::styled("Total Words: ", self.theme.label()),
            Span::styled(self.total_words.to_string(), self.theme.counter()),
        ]);
        Paragraph::new(total_text)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let index_text = Line::from(vec![
            Span::styled("index: ", self.theme.label()),
            Span::styled(self.cursor.to_string(), self.theme.counter()),
        ]);
        Paragraph::new(index_text)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

/// Key legend. Drops descriptions when the full legend is wider than the area.
pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    fn full_width(&self) -> usize {
        self.hints
            .iter()
            .map(|(key, desc)| key.width() + desc.width() + 4)
            .sum()
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let compact = self.full_width() > area.width as usize;

        let spans: Vec<Span> = self
            .hints
            .iter()
            .flat_map(|(key, desc)| {
                let mut spans = vec![Span::styled(*key, self.theme.key_highlight())];
                if compact {
                    spans.push(Span::raw(" "));
                } else {
                    spans.push(Span::styled(format!(" {} ", desc), self.theme.key_hint()));
                }
                spans.push(Span::styled("│ ", Style::default().fg(self.theme.colors.text_dim)));
                spans
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::LEGEND;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_key_hints_full_legend_when_wide() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);

        KeyHints::new(&LEGEND, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Random Word"));
        assert!(text.contains("ctrl+c"));
    }

    #[test]
    fn test_key_hints_compact_when_narrow() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        KeyHints::new(&LEGEND, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(!text.contains("Random Word"));
        assert!(text.contains("ctrl+c"));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("short", 20), 1);
        assert_eq!(wrapped_height("a fairly long line of words", 10), 3);
        assert_eq!(wrapped_height("anything", 0), 0);
    }
}
