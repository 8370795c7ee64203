use chrono::Utc;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    app::AppState,
    ui::{components::StatusBar, Layout, Theme},
};

/// Final score screen, absorbing until restart
pub struct SummaryScreen;

impl SummaryScreen {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let (_, content_area, status_area) = Layout::main(area);

        let Some(attempt) = state.attempt.as_ref() else {
            return;
        };

        let popup_area = Layout::centered_popup(content_area, 44, 9);
        frame.render_widget(Clear, popup_area);

        let score = attempt.score() as usize;
        let total = attempt.total();
        let percent = (score * 100) / total.max(1);

        let elapsed = Utc::now().signed_duration_since(attempt.started_at());
        let elapsed = format!(
            "{}m {:02}s",
            elapsed.num_minutes(),
            elapsed.num_seconds().max(0) % 60
        );

        let score_style = if score == total {
            Theme::correct()
        } else if score * 2 >= total {
            Theme::text()
        } else {
            Theme::incorrect()
        };

        let lines = vec![
            Line::from(Span::styled(attempt.quiz().title.clone(), Theme::title())),
            Line::from(""),
            Line::from(Span::styled(
                format!("Score: {} / {}  ({}%)", score, total, percent),
                score_style,
            )),
            Line::from(Span::styled(
                format!("Time: {}", elapsed),
                Theme::text_dim(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return to the quiz list",
                Theme::text_dim(),
            )),
        ];

        let summary = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_focused())
                .title(Span::styled(" Summary ", Theme::title())),
        );

        frame.render_widget(summary, popup_area);

        let status = StatusBar::new().hints(vec![("Enter/r", "Back to list"), ("q", "Quit")]);
        frame.render_widget(status, status_area);
    }
}
