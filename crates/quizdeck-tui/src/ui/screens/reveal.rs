use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use quizdeck_engine::Attempt;

use crate::{
    app::AppState,
    ui::{components::StatusBar, Layout, Theme},
};

/// Answer reveal screen: shows correctness of the committed selection
///
/// Every correct answer is marked, so the true answer is visible even when
/// the user picked wrong. This screen only moves forward.
pub struct RevealScreen;

impl RevealScreen {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        let Some(attempt) = state.attempt.as_ref() else {
            return;
        };

        Self::render_header(frame, header_area, attempt);

        let content_area = Layout::centered_list(content_area, 80);
        Self::render_verdict(frame, content_area, attempt);

        Self::render_status_bar(frame, status_area, attempt);
    }

    fn render_header(frame: &mut Frame, area: Rect, attempt: &Attempt) {
        let position = attempt
            .current_index()
            .map(|i| format!("Question {}/{}", i + 1, attempt.total()))
            .unwrap_or_default();

        let title = Line::from(vec![
            Span::styled("quizdeck", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled(attempt.quiz().title.clone(), Theme::text()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled(position, Theme::text_dim()),
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(header, area);
    }

    fn render_verdict(frame: &mut Frame, area: Rect, attempt: &Attempt) {
        let Some(question) = attempt.current_question() else {
            return;
        };
        let selected = attempt.selected();

        let picked_correct = selected
            .and_then(|id| question.answer(id))
            .is_some_and(|a| a.is_correct);

        let verdict = if picked_correct {
            Span::styled("Correct!", Theme::correct())
        } else {
            Span::styled("Incorrect", Theme::incorrect())
        };

        let mut lines = vec![
            Line::from(verdict),
            Line::from(""),
            Line::from(Span::styled(question.text.clone(), Theme::text())),
            Line::from(""),
        ];

        for answer in &question.answers {
            let is_selected = selected == Some(answer.id);
            let cursor = if is_selected { "▶ " } else { "  " };

            let (mark, style) = if answer.is_correct {
                ("✓ ", Theme::correct())
            } else if is_selected {
                ("✗ ", Theme::incorrect())
            } else {
                ("  ", Theme::text_dim())
            };

            lines.push(Line::from(vec![
                Span::styled(cursor.to_string(), Theme::text_dim()),
                Span::styled(format!("{}{}", mark, answer.text), style),
            ]));
        }

        let verdict_widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_focused())
                .title(Span::styled(" Answer ", Theme::title())),
        );

        frame.render_widget(verdict_widget, area);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, attempt: &Attempt) {
        let is_last = attempt
            .current_index()
            .is_some_and(|i| i + 1 == attempt.total());
        let next_label = if is_last { "Finish" } else { "Next question" };

        let status = StatusBar::new()
            .hints(vec![("Enter", next_label), ("q", "Quit")])
            .right(format!("score {}", attempt.score()));

        frame.render_widget(status, area);
    }
}
