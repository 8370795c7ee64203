use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::Theme;

/// One-line status bar: key hints on the left, an optional note (score,
/// selection prompt, counts) on the right. The right side wins when the
/// terminal is too narrow; the hints get truncated instead.
pub struct StatusBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
    right_text: Option<String>,
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self {
            hints: Vec::new(),
            right_text: None,
        }
    }

    /// Add keyboard hints as (key, description) pairs
    pub fn hints<I>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.hints = hints.into_iter().collect();
        self
    }

    /// Set text to display on the right side
    pub fn right<S: Into<String>>(mut self, text: S) -> Self {
        self.right_text = Some(text.into());
        self
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (key, desc) in &self.hints {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{key}]"), Theme::status_bar_key()));
            spans.push(Span::raw(format!(" {desc}")));
        }
        Line::from(spans)
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Theme::status_bar());

        // Right side first so the hints know how much room is left
        let mut hint_width = area.width.saturating_sub(2);
        if let Some(right) = &self.right_text {
            let line = Line::styled(right.clone(), Theme::status_bar());
            let width = line.width() as u16;
            if width + 2 < area.width {
                let x = area.right().saturating_sub(width + 1);
                buf.set_line(x, area.y, &line, width);
                hint_width = hint_width.saturating_sub(width + 2);
            }
        }

        buf.set_line(area.x + 1, area.y, &self.hint_line(), hint_width);
    }
}

/// Default hints for the quiz list
pub fn quiz_list_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑/k", "Up"),
        ("↓/j", "Down"),
        ("Enter", "Start"),
        ("q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bar: StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);

        (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn test_hints_render_as_key_description_pairs() {
        let out = rendered(StatusBar::new().hints(vec![("Enter", "Start")]), 30);
        assert!(out.contains("[Enter] Start"), "got: {out:?}");
    }

    #[test]
    fn test_right_text_is_right_aligned() {
        let out = rendered(StatusBar::new().right("score 2"), 30);
        assert!(out.trim_end().ends_with("score 2"), "got: {out:?}");
    }

    #[test]
    fn test_right_text_dropped_when_too_narrow() {
        let out = rendered(
            StatusBar::new()
                .hints(vec![("Enter", "Start")])
                .right("a very long right side note"),
            12,
        );
        assert!(!out.contains("note"), "got: {out:?}");
        assert!(out.contains("[Enter]"), "got: {out:?}");
    }
}
