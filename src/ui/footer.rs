use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    modal_open: bool,
}

impl Footer {
    pub fn new(modal_open: bool) -> Self {
        Self { modal_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.modal_open {
            " Esc: Close │ Tab: Focus │ Up/Down: Scroll │ Ctrl+Q: Quit"
        } else {
            " Enter: Classify │ F2: Health │ F3: Model │ Ctrl+U: Clear │ Ctrl+Q: Quit"
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_modal_state() {
        assert!(Footer::new(false).hints().contains("Enter: Classify"));
        assert!(Footer::new(true).hints().contains("Esc: Close"));
    }
}
