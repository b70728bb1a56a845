//! Geometry and rendering for an open dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};

use super::state::ModalFocus;
use super::{Modal, PointerTarget};

const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 4;
const CLOSE_LABEL: &str = "[x]";
const CLOSE_WIDTH: u16 = 3;

/// Screen regions of an open dialog.
///
/// Computed from the frame area and content size alone, so rendering and
/// pointer hit-testing always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// The whole overlay; everything outside `dialog` belongs to it.
    pub backdrop: Rect,
    pub dialog: Rect,
    pub body: Rect,
    pub close_button: Rect,
}

impl ModalLayout {
    pub fn compute(area: Rect, content_width: u16, content_height: u16) -> Self {
        let width = content_width
            .saturating_add(4)
            .max(MIN_WIDTH)
            .min(area.width.saturating_sub(4));
        let height = content_height
            .saturating_add(2)
            .max(MIN_HEIGHT)
            .min(area.height.saturating_sub(2));
        let dialog = centered_rect_by_size(area, width, height);

        let body = Rect {
            x: dialog.x.saturating_add(1),
            y: dialog.y.saturating_add(1),
            width: dialog.width.saturating_sub(2),
            height: dialog.height.saturating_sub(2),
        };
        let close_button = Rect {
            x: dialog.x + dialog.width.saturating_sub(CLOSE_WIDTH + 1),
            y: dialog.y,
            width: CLOSE_WIDTH.min(dialog.width),
            height: dialog.height.min(1),
        };

        Self {
            backdrop: area,
            dialog,
            body,
            close_button,
        }
    }

    /// The topmost element under `(column, row)`, or `None` off-screen.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<PointerTarget> {
        if !contains(self.backdrop, column, row) {
            return None;
        }
        if contains(self.close_button, column, row) {
            return Some(PointerTarget::CloseButton);
        }
        if contains(self.dialog, column, row) {
            return Some(PointerTarget::Dialog);
        }
        Some(PointerTarget::Backdrop)
    }

    pub fn max_scroll(&self, content_lines: usize) -> u16 {
        let lines = u16::try_from(content_lines).unwrap_or(u16::MAX);
        lines.saturating_sub(self.body.height)
    }

    pub fn page(&self) -> u16 {
        self.body.height.max(1)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draw `modal` over everything rendered so far. Closed dialogs draw nothing.
pub fn render_modal(frame: &mut Frame, modal: &Modal, layout: &ModalLayout, content: Vec<Line>) {
    let Some(focus) = modal.state().focus() else {
        return;
    };

    frame
        .buffer_mut()
        .set_style(layout.backdrop, Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(Clear, layout.dialog);

    let border_color = match focus {
        ModalFocus::Body => ACCENT,
        ModalFocus::CloseButton => POPUP_BORDER,
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", modal.title()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let body = Paragraph::new(content)
        .style(Style::default().fg(HEADER_TEXT))
        .block(block)
        .scroll((modal.state().scroll(), 0));
    frame.render_widget(body, layout.dialog);

    let close_style = match focus {
        ModalFocus::CloseButton => Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ModalFocus::Body => Style::default().fg(POPUP_BORDER),
    };
    frame.render_widget(Paragraph::new(CLOSE_LABEL).style(close_style), layout.close_button);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn dialog_is_centered_inside_backdrop() {
        let layout = ModalLayout::compute(area(), 40, 10);
        assert_eq!(layout.backdrop, area());
        assert_eq!(layout.dialog.width, 44);
        assert_eq!(layout.dialog.height, 12);
        assert_eq!(layout.dialog.x, 28);
        assert_eq!(layout.dialog.y, 14);
        assert_eq!(layout.body, Rect::new(29, 15, 42, 10));
    }

    #[test]
    fn small_content_gets_minimum_size() {
        let layout = ModalLayout::compute(area(), 2, 1);
        assert_eq!(layout.dialog.width, MIN_WIDTH);
        assert_eq!(layout.dialog.height, MIN_HEIGHT);
    }

    #[test]
    fn large_content_is_bounded_by_area() {
        let layout = ModalLayout::compute(area(), 500, 500);
        assert_eq!(layout.dialog.width, 96);
        assert_eq!(layout.dialog.height, 38);
    }

    #[test]
    fn hit_test_identifies_targets() {
        let layout = ModalLayout::compute(area(), 40, 10);
        assert_eq!(layout.hit_test(0, 0), Some(PointerTarget::Backdrop));
        assert_eq!(layout.hit_test(99, 39), Some(PointerTarget::Backdrop));
        assert_eq!(
            layout.hit_test(layout.body.x, layout.body.y),
            Some(PointerTarget::Dialog)
        );
        // Border cells belong to the dialog too.
        assert_eq!(
            layout.hit_test(layout.dialog.x, layout.dialog.y),
            Some(PointerTarget::Dialog)
        );
        assert_eq!(
            layout.hit_test(layout.close_button.x + 1, layout.close_button.y),
            Some(PointerTarget::CloseButton)
        );
        assert_eq!(layout.hit_test(100, 0), None);
    }

    #[test]
    fn close_button_sits_on_top_border() {
        let layout = ModalLayout::compute(area(), 40, 10);
        assert_eq!(layout.close_button.y, layout.dialog.y);
        assert_eq!(
            layout.close_button.x + layout.close_button.width,
            layout.dialog.x + layout.dialog.width - 1
        );
    }

    #[test]
    fn max_scroll_counts_hidden_lines() {
        let layout = ModalLayout::compute(Rect::new(0, 0, 100, 12), 40, 50);
        assert_eq!(layout.body.height, 8);
        assert_eq!(layout.max_scroll(50), 42);
        assert_eq!(layout.max_scroll(3), 0);
        assert_eq!(layout.page(), 8);
    }
}
