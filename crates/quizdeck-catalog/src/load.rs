//! TOML catalog file format
//!
//! ```toml
//! [[quiz]]
//! title = "Mathematics"
//! description = "Math equations and theories"
//! icon = "function"
//!
//! [[quiz.question]]
//! text = "What is 5 + 3?"
//! answer = [
//!     { text = "6" },
//!     { text = "8", correct = true },
//! ]
//! ```

use serde::Deserialize;

use quizdeck_types::QuizIcon;

use crate::{Catalog, CatalogError};

/// Top-level catalog document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "quiz")]
    quizzes: Vec<QuizDef>,
}

/// Plain quiz definition, before id allocation and validation
#[derive(Debug, Deserialize)]
pub struct QuizDef {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: QuizIcon,
    #[serde(default, rename = "question")]
    pub questions: Vec<QuestionDef>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionDef {
    pub text: String,
    #[serde(default, rename = "answer")]
    pub answers: Vec<AnswerDef>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerDef {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

pub(crate) fn from_toml_str(s: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(s)?;
    Catalog::assemble(file.quizzes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [[quiz]]
        title = "Capitals"
        description = "World capitals"
        icon = "globe"

        [[quiz.question]]
        text = "Capital of France?"
        answer = [
            { text = "Lyon" },
            { text = "Paris", correct = true },
        ]
    "#;

    #[test]
    fn test_load_valid_document() {
        let catalog = from_toml_str(VALID).unwrap();
        assert_eq!(catalog.len(), 1);

        let quiz = catalog.get(0).unwrap();
        assert_eq!(quiz.title, "Capitals");
        assert_eq!(quiz.icon, QuizIcon::Globe);
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].answers.len(), 2);
        assert_eq!(quiz.questions[0].correct_answers().count(), 1);
    }

    #[test]
    fn test_load_rejects_missing_correct_answer() {
        let doc = r#"
            [[quiz]]
            title = "Broken"

            [[quiz.question]]
            text = "?"
            answer = [{ text = "a" }, { text = "b" }]
        "#;
        assert!(matches!(
            from_toml_str(doc),
            Err(CatalogError::BadCorrectCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_load_rejects_quiz_without_questions() {
        let doc = r#"
            [[quiz]]
            title = "Hollow"
        "#;
        assert!(matches!(
            from_toml_str(doc),
            Err(CatalogError::NoQuestions { quiz }) if quiz == "Hollow"
        ));
    }

    #[test]
    fn test_load_rejects_question_without_answers() {
        let doc = r#"
            [[quiz]]
            title = "Hollow"

            [[quiz.question]]
            text = "no options here"
            answer = []
        "#;
        assert!(matches!(
            from_toml_str(doc),
            Err(CatalogError::NoAnswers { question, .. }) if question == "no options here"
        ));
    }

    #[test]
    fn test_load_rejects_empty_document() {
        assert!(matches!(from_toml_str(""), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        assert!(matches!(
            from_toml_str("not = [valid"),
            Err(CatalogError::Parse(_))
        ));
    }
}
