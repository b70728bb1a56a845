use crate::ui::app::{App, DialogKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::modal::render_modal;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.orchestrator().base_url()).widget(), header);

    let regions = body_regions(body);
    draw_url_input(frame, app, regions.input);
    frame.render_widget(status_line(app), regions.status);
    frame.render_widget(
        Paragraph::new(output_lines(app)).wrap(Wrap { trim: false }),
        regions.output,
    );

    let modal_open = app.topmost_modal().is_some();
    frame.render_widget(Footer::new(modal_open).widget(footer), footer);

    for kind in DialogKind::STACK {
        let modal = app.modal(kind);
        if !modal.is_open() {
            continue;
        }
        let content = app
            .dialog_content(kind)
            .into_iter()
            .map(Line::from)
            .collect();
        render_modal(frame, modal, &app.modal_layout(kind), content);
    }
}

fn draw_url_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Article URL ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);

    // Keep the cursor inside the visible window.
    let visible = inner.width.saturating_sub(1) as usize;
    let offset = app.cursor().saturating_sub(visible);
    let offset_cols = u16::try_from(offset).unwrap_or(u16::MAX);

    let url = app.view().url.as_str();
    let text = if url.is_empty() {
        Span::styled("https://example.com/article", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(url.to_string(), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).block(block).scroll((0, offset_cols)),
        area,
    );

    if app.topmost_modal().is_none() && inner.width > 0 && inner.height > 0 {
        let column = u16::try_from(app.cursor() - offset).unwrap_or(0);
        frame.set_cursor_position(Position::new(inner.x + column, inner.y));
    }
}

fn status_line(app: &App) -> Paragraph<'static> {
    if app.view().loading {
        let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
        return Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Classifying...", Style::default().fg(HEADER_TEXT)),
        ]));
    }
    Paragraph::new(Line::from(Span::styled(
        " Press Enter to classify",
        Style::default().fg(MUTED_TEXT),
    )))
}

fn output_lines(app: &App) -> Vec<Line<'static>> {
    let view = app.view();
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if view.has_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                " Error: ",
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Span::styled(view.error.clone(), Style::default().fg(STATUS_ERROR)),
        ]));
    }

    if let Some(summary) = view.summary() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Summary", heading)));
        for text in summary.lines() {
            lines.push(Line::from(format!(" {}", text)));
        }
    }

    if let Some(result) = &view.result {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Result", heading)));
        for text in result.to_pretty_json().lines() {
            lines.push(Line::from(Span::styled(
                format!(" {}", text),
                Style::default().fg(HEADER_TEXT),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, ResponseBody};
    use crate::config::ServiceConfig;
    use crate::orchestrator::{completion_channel, Completion, Flow, Orchestrator};
    use serde_json::json;

    fn app_with_result(body: serde_json::Value) -> App {
        let client = ApiClient::new(&ServiceConfig::default()).unwrap();
        let (tx, _rx) = completion_channel();
        let mut orchestrator = Orchestrator::new(client, "https://example.com", tx);
        let generation = orchestrator.classify_url();
        orchestrator.apply(Completion {
            flow: Flow::Classify,
            generation,
            outcome: Ok(body),
        });
        App::new(orchestrator)
    }

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
            .collect()
    }

    #[tokio::test]
    async fn text_summary_is_listed_above_result() {
        let app = app_with_result(json!({"summary": "Leans left"}));
        let lines = texts(&output_lines(&app));
        let heading = lines.iter().position(|l| l == " Summary").unwrap();
        assert_eq!(lines[heading + 1], " Leans left");
        assert!(lines.iter().any(|l| l == " Result"));
        assert!(matches!(app.view().result, Some(ResponseBody::SingleObject(_))));
    }

    #[tokio::test]
    async fn boolean_summary_shows_heading_without_text() {
        let app = app_with_result(json!({"summary": true}));
        let lines = texts(&output_lines(&app));
        let heading = lines.iter().position(|l| l == " Summary").unwrap();
        assert_eq!(lines[heading + 1], "");
        assert!(!lines.iter().any(|l| l == " true"));
    }
}
