use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::Layout;

/// Help overlay showing keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Layout::centered_popup(area, 46, 19);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keybindings",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Quiz list",
                Style::default().fg(Color::Yellow),
            )]),
            Self::key_line("j/↓ k/↑", "Move"),
            Self::key_line("Enter", "Start quiz"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Question",
                Style::default().fg(Color::Yellow),
            )]),
            Self::key_line("j/↓ k/↑", "Move over answers"),
            Self::key_line("Space", "Mark answer"),
            Self::key_line("Enter", "Submit answer"),
            Self::key_line("Esc", "Abandon quiz"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Reveal / Summary",
                Style::default().fg(Color::Yellow),
            )]),
            Self::key_line("Enter", "Next / back to list"),
            Line::from(""),
            Self::key_line("?", "Toggle this help"),
            Self::key_line("q", "Quit"),
        ];

        let help_widget = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Help ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(help_widget, popup_area);
    }

    fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("  {:>8}", key), Style::default().fg(Color::Green)),
            Span::styled(format!("  {}", desc), Style::default().fg(Color::White)),
        ])
    }
}
