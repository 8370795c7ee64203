use ratatui::widgets::ListState;

use quizdeck_catalog::Catalog;
use quizdeck_engine::{Advance, Attempt, Phase};

/// Screen enumeration
///
/// Derived from the attempt phase rather than stored, so there is exactly
/// one active destination at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    QuizList,
    Question,
    Reveal,
    Summary,
}

/// UI-specific transient state
pub struct UiState {
    /// Cursor for the quiz list and the answer list
    pub list_state: ListState,

    /// Is help overlay visible?
    pub help_visible: bool,

    /// Error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            list_state,
            help_visible: false,
            error_message: None,
        }
    }
}

/// Global application state
pub struct AppState {
    /// The immutable quiz catalog, fixed at startup
    pub catalog: Catalog,

    /// The active attempt, if a quiz has been selected
    pub attempt: Option<Attempt>,

    /// UI state
    pub ui_state: UiState,

    /// Whether app should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            attempt: None,
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    /// The screen currently displayed, derived from the attempt phase
    pub fn screen(&self) -> Screen {
        match &self.attempt {
            None => Screen::QuizList,
            Some(attempt) => match attempt.phase() {
                Phase::Answering { .. } => Screen::Question,
                Phase::Revealed { .. } => Screen::Reveal,
                Phase::Finished => Screen::Summary,
            },
        }
    }

    /// Length of the list the cursor currently moves over
    pub fn current_list_len(&self) -> usize {
        match self.screen() {
            Screen::QuizList => self.catalog.len(),
            Screen::Question => self
                .attempt
                .as_ref()
                .and_then(|a| a.current_question())
                .map(|q| q.answers.len())
                .unwrap_or(0),
            Screen::Reveal | Screen::Summary => 0,
        }
    }

    /// Move selection up
    pub fn list_up(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }

        let i = match self.ui_state.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.ui_state.list_state.select(Some(i));
    }

    /// Move selection down
    pub fn list_down(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }

        let i = match self.ui_state.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.ui_state.list_state.select(Some(i));
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> Option<usize> {
        self.ui_state.list_state.selected()
    }

    fn reset_cursor(&mut self) {
        self.ui_state.list_state.select(Some(0));
    }

    /// Start an attempt for the quiz at the given catalog index
    pub fn start_attempt(&mut self, index: usize) -> bool {
        match self.catalog.get(index) {
            Some(quiz) => {
                self.attempt = Some(Attempt::new(quiz.clone()));
                self.reset_cursor();
                true
            }
            None => false,
        }
    }

    /// Start an attempt by quiz title (CLI fast path), case-insensitive
    pub fn start_attempt_by_title(&mut self, title: &str) -> bool {
        match self.catalog.by_title(title) {
            Some(quiz) => {
                self.attempt = Some(Attempt::new(quiz.clone()));
                self.reset_cursor();
                true
            }
            None => false,
        }
    }

    /// Confirm the list row under the cursor: on the quiz list this starts
    /// an attempt, on the question screen it marks the answer.
    pub fn confirm_cursor(&mut self) {
        match self.screen() {
            Screen::QuizList => {
                if let Some(idx) = self.selected_index() {
                    self.start_attempt(idx);
                }
            }
            Screen::Question => {
                let answer = self
                    .selected_index()
                    .zip(self.attempt.as_ref().and_then(|a| a.current_question()))
                    .and_then(|(idx, q)| q.answers.get(idx))
                    .map(|a| a.id);

                if let (Some(id), Some(attempt)) = (answer, self.attempt.as_mut()) {
                    attempt.select(id);
                }
            }
            Screen::Reveal | Screen::Summary => {}
        }
    }

    /// Commit the marked answer and move to the reveal
    pub fn submit(&mut self) {
        if let Some(attempt) = self.attempt.as_mut() {
            // No-op when nothing is marked yet
            attempt.submit();
        }
    }

    /// Leave the reveal towards the next question or the summary
    pub fn next(&mut self) {
        let moved = self.attempt.as_mut().and_then(|a| a.advance());
        if let Some(Advance::Question(_)) = moved {
            self.reset_cursor();
        }
    }

    /// Discard the attempt and return to the quiz list
    pub fn restart(&mut self) {
        self.attempt = None;
        self.reset_cursor();
    }

    /// Go back one screen
    ///
    /// Returns false when there is nowhere to go back to (the quiz list),
    /// which the caller treats as quit. Backing out of the reveal is
    /// suppressed: the attempt always moves forward from there.
    pub fn go_back(&mut self) -> bool {
        match self.screen() {
            Screen::QuizList => false,
            Screen::Question | Screen::Summary => {
                self.restart();
                true
            }
            Screen::Reveal => true,
        }
    }

    /// Show an error message
    pub fn show_error(&mut self, msg: String) {
        self.ui_state.error_message = Some(msg);
    }

    /// Dismiss the error message
    pub fn dismiss_error(&mut self) {
        self.ui_state.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::builtin())
    }

    fn mark_and_submit(state: &mut AppState) {
        state.confirm_cursor();
        state.submit();
    }

    #[test]
    fn test_screen_follows_attempt_phase() {
        let mut state = state();
        assert_eq!(state.screen(), Screen::QuizList);

        state.start_attempt(0);
        assert_eq!(state.screen(), Screen::Question);

        mark_and_submit(&mut state);
        assert_eq!(state.screen(), Screen::Reveal);

        state.next();
        assert_eq!(state.screen(), Screen::Question);

        // Run out the remaining questions
        while state.screen() == Screen::Question {
            mark_and_submit(&mut state);
            state.next();
        }
        assert_eq!(state.screen(), Screen::Summary);

        state.restart();
        assert_eq!(state.screen(), Screen::QuizList);
        assert!(state.attempt.is_none());
    }

    #[test]
    fn test_submit_without_mark_stays_on_question() {
        let mut state = state();
        state.start_attempt(0);

        state.submit();
        assert_eq!(state.screen(), Screen::Question);
    }

    #[test]
    fn test_go_back_from_question_discards_attempt() {
        let mut state = state();
        state.start_attempt(0);
        mark_and_submit(&mut state);
        state.next();

        assert!(state.go_back());
        assert_eq!(state.screen(), Screen::QuizList);
        assert!(state.attempt.is_none());
    }

    #[test]
    fn test_go_back_is_suppressed_on_reveal() {
        let mut state = state();
        state.start_attempt(0);
        mark_and_submit(&mut state);
        assert_eq!(state.screen(), Screen::Reveal);

        assert!(state.go_back());
        assert_eq!(state.screen(), Screen::Reveal);
    }

    #[test]
    fn test_go_back_on_quiz_list_means_quit() {
        let mut state = state();
        assert!(!state.go_back());
    }

    #[test]
    fn test_list_wraps_around() {
        let mut state = state();
        let len = state.catalog.len();

        state.list_up();
        assert_eq!(state.selected_index(), Some(len - 1));
        state.list_down();
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_cursor_resets_between_questions() {
        let mut state = state();
        state.start_attempt(0);

        state.list_down();
        state.list_down();
        assert_eq!(state.selected_index(), Some(2));

        mark_and_submit(&mut state);
        state.next();
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_start_attempt_by_title() {
        let mut state = state();
        assert!(!state.start_attempt_by_title("nope"));
        assert_eq!(state.screen(), Screen::QuizList);

        assert!(state.start_attempt_by_title("science"));
        assert_eq!(state.screen(), Screen::Question);
        assert_eq!(state.attempt.as_ref().unwrap().quiz().title, "Science");
    }
}
