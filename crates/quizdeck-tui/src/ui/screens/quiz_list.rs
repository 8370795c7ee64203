use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    app::AppState,
    ui::{
        components::{quiz_list_hints, ListSelector, ListSelectorExt, StatusBar},
        Layout, Theme,
    },
};

/// Quiz selection screen
pub struct QuizListScreen;

impl QuizListScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        Self::render_header(frame, header_area);
        Self::render_list(frame, content_area, state);
        Self::render_status_bar(frame, status_area, state);
    }

    fn render_header(frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled("quizdeck", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled("Select a Quiz", Theme::text()),
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(header, area);
    }

    fn render_list(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let list_area = Layout::centered_list(area, 80);

        let items: Vec<(String, bool)> = state
            .catalog
            .quizzes()
            .iter()
            .map(|quiz| {
                let display = format!(
                    "{}  {} ({} questions) · {}",
                    quiz.icon.glyph(),
                    quiz.title,
                    quiz.len(),
                    quiz.description,
                );
                (display, false)
            })
            .collect();

        let selector = ListSelector::new(" Quizzes ").items(items);

        frame.render_list_selector(list_area, selector, &mut state.ui_state.list_state);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
        let quiz_count = format!("{} quizzes", state.catalog.len());

        let status = StatusBar::new().hints(quiz_list_hints()).right(quiz_count);

        frame.render_widget(status, area);
    }
}
