//! Shared types for quizdeck
//!
//! This crate contains the quiz data model used across the quizdeck crates.
//! Quizzes, questions, and answers are immutable once built; their equality
//! is by id, not by structure, so selection checks stay correct even when
//! two answers carry the same text.

use serde::Deserialize;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique id of a quiz within a catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuizId(pub u64);

/// Unique id of a question within a catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub u64);

/// Unique id of an answer within a catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerId(pub u64);

// ============================================================================
// Quiz Tree
// ============================================================================

/// A single answer option
#[derive(Clone, Debug)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    pub is_correct: bool,
}

impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Answer {}

/// A question with its ordered answer options (length >= 1)
#[derive(Clone, Debug)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Look up an answer of this question by id
    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }

    /// Whether the given id belongs to one of this question's answers
    pub fn has_answer(&self, id: AnswerId) -> bool {
        self.answer(id).is_some()
    }

    /// Iterate over the correct answers of this question
    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_correct)
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

/// A quiz with its ordered questions (length >= 1)
#[derive(Clone, Debug)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub icon: QuizIcon,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Number of questions in this quiz
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

impl PartialEq for Quiz {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Quiz {}

// ============================================================================
// Icons
// ============================================================================

/// Symbolic icon attached to a quiz, rendered as a single glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizIcon {
    Function,
    Star,
    Atom,
    Globe,
    Bolt,
    #[default]
    Book,
}

impl QuizIcon {
    /// Terminal glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Function => "ƒ",
            Self::Star => "★",
            Self::Atom => "⚛",
            Self::Globe => "◍",
            Self::Bolt => "↯",
            Self::Book => "▤",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: u64, text: &str, is_correct: bool) -> Answer {
        Answer {
            id: AnswerId(id),
            text: text.to_string(),
            is_correct,
        }
    }

    #[test]
    fn test_answer_equality_is_by_id() {
        // Same text, different ids: must not compare equal
        let a = answer(1, "42", true);
        let b = answer(2, "42", false);
        assert_ne!(a, b);

        // Same id: equal even if the copies diverge structurally
        let c = answer(1, "forty-two", false);
        assert_eq!(a, c);
    }

    #[test]
    fn test_question_answer_lookup() {
        let q = Question {
            id: QuestionId(10),
            text: "pick one".to_string(),
            answers: vec![answer(1, "no", false), answer(2, "yes", true)],
        };

        assert!(q.has_answer(AnswerId(2)));
        assert!(!q.has_answer(AnswerId(3)));
        assert_eq!(q.answer(AnswerId(1)).unwrap().text, "no");

        let correct: Vec<_> = q.correct_answers().collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].id, AnswerId(2));
    }
}
