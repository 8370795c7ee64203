//! The built-in quiz set

use quizdeck_types::QuizIcon;

use crate::{AnswerDef, Catalog, QuestionDef, QuizDef};

fn quiz(title: &str, description: &str, icon: QuizIcon, questions: Vec<QuestionDef>) -> QuizDef {
    QuizDef {
        title: title.to_string(),
        description: description.to_string(),
        icon,
        questions,
    }
}

fn question(text: &str, answers: &[(&str, bool)]) -> QuestionDef {
    QuestionDef {
        text: text.to_string(),
        answers: answers
            .iter()
            .map(|(text, correct)| AnswerDef {
                text: text.to_string(),
                correct: *correct,
            })
            .collect(),
    }
}

pub(crate) fn catalog() -> Catalog {
    let quizzes = vec![
        quiz(
            "Mathematics",
            "Math equations and theories",
            QuizIcon::Function,
            vec![
                question(
                    "What is √16?",
                    &[("2", false), ("4", true), ("6", false), ("8", false)],
                ),
                question(
                    "What is 5 + 3?",
                    &[("6", false), ("7", false), ("8", true), ("9", false)],
                ),
                question(
                    "What is the derivative of x²?",
                    &[("x", false), ("2x", true), ("x²/2", false), ("2", false)],
                ),
            ],
        ),
        quiz(
            "Marvel Super Heroes",
            "Are you a true fan?",
            QuizIcon::Star,
            vec![
                question(
                    "What is Tony Stark's alter ego?",
                    &[
                        ("Iron Man", true),
                        ("Captain America", false),
                        ("Hawkeye", false),
                        ("Doctor Strange", false),
                    ],
                ),
                question(
                    "Which metal is bonded to Wolverine's skeleton?",
                    &[
                        ("Vibranium", false),
                        ("Adamantium", true),
                        ("Uru", false),
                        ("Titanium", false),
                    ],
                ),
                question(
                    "Who is worthy of wielding Mjolnir?",
                    &[
                        ("Loki", false),
                        ("Odin's accountant", false),
                        ("Thor", true),
                        ("Ultron", false),
                    ],
                ),
            ],
        ),
        quiz(
            "Science",
            "Explore the world of science",
            QuizIcon::Atom,
            vec![
                question(
                    "What is the chemical symbol for water?",
                    &[
                        ("CO₂", false),
                        ("H₂O", true),
                        ("NaCl", false),
                        ("O₂", false),
                    ],
                ),
                question(
                    "Which planet is known as the Red Planet?",
                    &[
                        ("Venus", false),
                        ("Jupiter", false),
                        ("Mars", true),
                        ("Mercury", false),
                    ],
                ),
                question(
                    "What force keeps planets in orbit around the Sun?",
                    &[
                        ("Magnetism", false),
                        ("Friction", false),
                        ("Inertia", false),
                        ("Gravity", true),
                    ],
                ),
            ],
        ),
    ];

    Catalog::assemble(quizzes).expect("built-in catalog is valid")
}
