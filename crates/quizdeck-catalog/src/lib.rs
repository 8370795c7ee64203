//! Quiz catalog for quizdeck
//!
//! A [`Catalog`] is the ordered, immutable set of quizzes available to the
//! application. It is built exactly once at startup, either from the
//! built-in quiz set or from a TOML file, and every construction path runs
//! the same validation: a catalog is non-empty, every quiz has at least one
//! question, and every question has exactly one correct answer.

mod builtin;
mod load;

pub use load::{AnswerDef, QuestionDef, QuizDef};

use thiserror::Error;

use quizdeck_types::{Answer, AnswerId, Question, QuestionId, Quiz, QuizId};

/// Errors produced while assembling or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no quizzes")]
    Empty,

    #[error("quiz '{quiz}' has no questions")]
    NoQuestions { quiz: String },

    #[error("question '{question}' in quiz '{quiz}' has no answers")]
    NoAnswers { quiz: String, question: String },

    #[error("question '{question}' in quiz '{quiz}' has {count} correct answers, expected exactly one")]
    BadCorrectCount {
        quiz: String,
        question: String,
        count: usize,
    },

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The ordered, immutable set of quizzes
#[derive(Clone, Debug)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
}

impl Catalog {
    /// The built-in quiz set
    pub fn builtin() -> Self {
        // The built-in set is validated by tests; assembly cannot fail here.
        builtin::catalog()
    }

    /// Load a catalog from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        load::from_toml_str(s)
    }

    /// Load a catalog from a TOML file
    pub fn from_path(path: &std::path::Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = load::from_toml_str(&contents)?;
        tracing::debug!(
            quizzes = catalog.len(),
            path = %path.display(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// Assemble and validate a catalog from plain definitions, allocating
    /// ids sequentially so uniqueness holds by construction.
    pub fn assemble(defs: Vec<QuizDef>) -> Result<Self, CatalogError> {
        if defs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut next_id: u64 = 0;
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let mut quizzes = Vec::with_capacity(defs.len());
        for def in defs {
            if def.questions.is_empty() {
                return Err(CatalogError::NoQuestions { quiz: def.title });
            }

            let quiz_id = QuizId(alloc());
            let mut questions = Vec::with_capacity(def.questions.len());
            for q in def.questions {
                if q.answers.is_empty() {
                    return Err(CatalogError::NoAnswers {
                        quiz: def.title.clone(),
                        question: q.text,
                    });
                }

                let correct = q.answers.iter().filter(|a| a.correct).count();
                if correct != 1 {
                    return Err(CatalogError::BadCorrectCount {
                        quiz: def.title.clone(),
                        question: q.text,
                        count: correct,
                    });
                }

                let question_id = QuestionId(alloc());
                let answers = q
                    .answers
                    .into_iter()
                    .map(|a| Answer {
                        id: AnswerId(alloc()),
                        text: a.text,
                        is_correct: a.correct,
                    })
                    .collect();

                questions.push(Question {
                    id: question_id,
                    text: q.text,
                    answers,
                });
            }

            quizzes.push(Quiz {
                id: quiz_id,
                title: def.title,
                description: def.description,
                icon: def.icon,
                questions,
            });
        }

        Ok(Self { quizzes })
    }

    /// All quizzes, in catalog order
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quiz> {
        self.quizzes.get(index)
    }

    pub fn by_id(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Case-insensitive title lookup, used for the CLI fast path
    pub fn by_title(&self, title: &str) -> Option<&Quiz> {
        self.quizzes
            .iter()
            .find(|q| q.title.eq_ignore_ascii_case(title))
    }
}
