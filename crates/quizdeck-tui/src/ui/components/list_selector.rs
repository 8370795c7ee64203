use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::ui::Theme;

/// A generic list selector component
///
/// Items carry a `marked` flag: on the quiz list nothing is marked, on the
/// question screen the answer the user has picked is.
pub struct ListSelector<'a> {
    items: Vec<ListItem<'a>>,
    title: &'a str,
}

const CURSOR: &str = "▶ ";

impl<'a> ListSelector<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            items: Vec::new(),
            title,
        }
    }

    /// Add items from an iterator of (display_text, marked) tuples
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        self.items = items
            .into_iter()
            .map(|(text, marked)| {
                let text = text.into();
                let style = if marked {
                    Theme::list_item_marked()
                } else {
                    Theme::list_item()
                };

                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();
        self
    }
}

impl StatefulWidget for ListSelector<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_focused())
            .title(Span::styled(self.title, Theme::title()));

        let list = List::new(self.items)
            .block(block)
            .highlight_style(Theme::list_item_selected())
            .highlight_symbol(CURSOR);

        StatefulWidget::render(list, area, buf, state);
    }
}

/// Extension trait to render ListSelector more easily
pub trait ListSelectorExt {
    fn render_list_selector(&mut self, area: Rect, selector: ListSelector, state: &mut ListState);
}

impl ListSelectorExt for ratatui::Frame<'_> {
    fn render_list_selector(&mut self, area: Rect, selector: ListSelector, state: &mut ListState) {
        self.render_stateful_widget(selector, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn test_cursor_marks_the_selected_row() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();
        state.select(Some(1));

        let selector =
            ListSelector::new(" Answers ").items(vec![("first", false), ("second", false)]);
        StatefulWidget::render(selector, area, &mut buf, &mut state);

        // Rows 1 and 2 are inside the border
        let first = row(&buf, 1, 20);
        let second = row(&buf, 2, 20);
        assert!(!first.contains('▶'), "got: {first:?}");
        assert!(second.contains("▶ second"), "got: {second:?}");
    }
}
