use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::{Action, Screen};

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        // Shifted characters already arrive shifted ('?' not Shift+'/'),
        // and some terminals report SHIFT alongside them
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };

        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Context for keybindings, one per screen plus a global fallback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    QuizList,
    Question,
    Reveal,
    Summary,
}

impl From<Screen> for KeyContext {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::QuizList => Self::QuizList,
            Screen::Question => Self::Question,
            Screen::Reveal => Self::Reveal,
            Screen::Summary => Self::Summary,
        }
    }
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::new(KeyCode::Esc), Action::GoBack);
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        bindings.insert(KeyContext::Global, global);

        // Quiz list bindings
        let mut quiz_list = HashMap::new();
        quiz_list.insert(KeyBinding::new(KeyCode::Char('j')), Action::ListDown);
        quiz_list.insert(KeyBinding::new(KeyCode::Down), Action::ListDown);
        quiz_list.insert(KeyBinding::new(KeyCode::Char('k')), Action::ListUp);
        quiz_list.insert(KeyBinding::new(KeyCode::Up), Action::ListUp);
        quiz_list.insert(KeyBinding::new(KeyCode::Enter), Action::ListSelect);
        bindings.insert(KeyContext::QuizList, quiz_list);

        // Question bindings: move over answers, mark one, submit
        let mut question = HashMap::new();
        question.insert(KeyBinding::new(KeyCode::Char('j')), Action::ListDown);
        question.insert(KeyBinding::new(KeyCode::Down), Action::ListDown);
        question.insert(KeyBinding::new(KeyCode::Char('k')), Action::ListUp);
        question.insert(KeyBinding::new(KeyCode::Up), Action::ListUp);
        question.insert(KeyBinding::new(KeyCode::Char(' ')), Action::ListSelect);
        question.insert(KeyBinding::new(KeyCode::Enter), Action::Submit);
        bindings.insert(KeyContext::Question, question);

        // Reveal bindings: forward only
        let mut reveal = HashMap::new();
        reveal.insert(KeyBinding::new(KeyCode::Enter), Action::Next);
        reveal.insert(KeyBinding::new(KeyCode::Char('n')), Action::Next);
        reveal.insert(KeyBinding::new(KeyCode::Char(' ')), Action::Next);
        bindings.insert(KeyContext::Reveal, reveal);

        // Summary bindings
        let mut summary = HashMap::new();
        summary.insert(KeyBinding::new(KeyCode::Enter), Action::Restart);
        summary.insert(KeyBinding::new(KeyCode::Char('r')), Action::Restart);
        bindings.insert(KeyContext::Summary, summary);

        Self { bindings }
    }

    /// Look up action for key event in given context
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        // First check context-specific bindings
        if let Some(context_bindings) = self.bindings.get(&context) {
            if let Some(action) = context_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        // Fall back to global bindings
        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .cloned()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_enter_depends_on_context() {
        let bindings = KeyBindings::new();
        let enter = key(KeyCode::Enter);

        assert_eq!(
            bindings.get_action(KeyContext::QuizList, &enter),
            Some(Action::ListSelect)
        );
        assert_eq!(
            bindings.get_action(KeyContext::Question, &enter),
            Some(Action::Submit)
        );
        assert_eq!(
            bindings.get_action(KeyContext::Reveal, &enter),
            Some(Action::Next)
        );
        assert_eq!(
            bindings.get_action(KeyContext::Summary, &enter),
            Some(Action::Restart)
        );
    }

    #[test]
    fn test_global_fallback() {
        let bindings = KeyBindings::new();

        assert_eq!(
            bindings.get_action(KeyContext::Question, &key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            bindings.get_action(KeyContext::Reveal, &key(KeyCode::Esc)),
            Some(Action::GoBack)
        );
    }

    #[test]
    fn test_shifted_char_still_matches() {
        let bindings = KeyBindings::new();
        let question_mark = KeyEvent {
            code: KeyCode::Char('?'),
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };

        assert_eq!(
            bindings.get_action(KeyContext::QuizList, &question_mark),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_unbound_key_maps_to_nothing() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.get_action(KeyContext::QuizList, &key(KeyCode::Char('z'))),
            None
        );
    }
}
