use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use quizdeck_engine::Attempt;

use crate::{
    app::AppState,
    ui::{
        components::{ListSelector, ListSelectorExt, StatusBar},
        Layout, Theme,
    },
};

/// Question screen: presents the current question and captures a selection
pub struct QuestionScreen;

impl QuestionScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        // Split the borrow so the list cursor can be rendered statefully
        let AppState {
            attempt, ui_state, ..
        } = state;
        let Some(attempt) = attempt.as_ref() else {
            return;
        };

        Self::render_header(frame, header_area, attempt);

        let content_area = Layout::centered_list(content_area, 80);
        let (prompt_area, answers_area) = Layout::question(content_area);
        Self::render_prompt(frame, prompt_area, attempt);

        if let Some(question) = attempt.current_question() {
            let marked = attempt.selected();
            let items: Vec<(String, bool)> = question
                .answers
                .iter()
                .map(|answer| {
                    let is_marked = marked == Some(answer.id);
                    let bullet = if is_marked { "(●)" } else { "( )" };
                    (format!("{} {}", bullet, answer.text), is_marked)
                })
                .collect();

            let selector = ListSelector::new(" Answers ").items(items);
            frame.render_list_selector(answers_area, selector, &mut ui_state.list_state);
        }

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

    fn render_prompt(frame: &mut Frame, area: Rect, attempt: &Attempt) {
        let text = attempt
            .current_question()
            .map(|q| q.text.clone())
            .unwrap_or_default();

        let prompt = Paragraph::new(Line::from(Span::styled(text, Theme::text())))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            );

        frame.render_widget(prompt, area);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, attempt: &Attempt) {
        let hints = vec![
            ("↑/k", "Up"),
            ("↓/j", "Down"),
            ("Space", "Mark"),
            ("Enter", "Submit"),
            ("Esc", "Abandon"),
            ("q", "Quit"),
        ];

        let right = if attempt.selected().is_none() {
            "mark an answer to submit".to_string()
        } else {
            format!("score {}", attempt.score())
        };

        let status = StatusBar::new().hints(hints).right(right);

        frame.render_widget(status, area);
    }
}
