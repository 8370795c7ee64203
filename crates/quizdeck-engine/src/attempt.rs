use chrono::{DateTime, Utc};

use quizdeck_types::{AnswerId, Question, Quiz};

/// The active destination of an attempt, with exactly the data it needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Presenting a question, selection not yet committed
    Answering {
        index: usize,
        selected: Option<AnswerId>,
    },
    /// Showing correctness of the committed selection
    Revealed { index: usize, selected: AnswerId },
    /// All questions answered; absorbing until restart
    Finished,
}

/// What [`Attempt::advance`] moved to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index
    Question(usize),
    /// The attempt is complete
    Finished,
}

/// A single run through one quiz
///
/// Created when a quiz is selected, discarded when the user returns to the
/// quiz list. `index` is in range whenever the phase carries one, and the
/// score only ever increments by one inside [`advance`](Self::advance),
/// the single authoritative scoring point.
#[derive(Clone, Debug)]
pub struct Attempt {
    quiz: Quiz,
    score: u32,
    started_at: DateTime<Utc>,
    phase: Phase,
}

impl Attempt {
    /// Start an attempt at the first question
    pub fn new(quiz: Quiz) -> Self {
        debug_assert!(!quiz.is_empty());
        tracing::debug!(quiz = %quiz.title, "starting attempt");

        Self {
            quiz,
            score: 0,
            started_at: Utc::now(),
            phase: Phase::Answering {
                index: 0,
                selected: None,
            },
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in the quiz
    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Index of the question currently presented or revealed
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Answering { index, .. } | Phase::Revealed { index, .. } => Some(index),
            Phase::Finished => None,
        }
    }

    /// The question currently presented or revealed
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.quiz.question(i))
    }

    /// The selection in flight (committed or not)
    pub fn selected(&self) -> Option<AnswerId> {
        match self.phase {
            Phase::Answering { selected, .. } => selected,
            Phase::Revealed { selected, .. } => Some(selected),
            Phase::Finished => None,
        }
    }

    /// Mark an answer of the current question
    ///
    /// Replaces any previous selection. Rejected (returns false) outside
    /// the answering phase or when the id does not belong to the current
    /// question.
    pub fn select(&mut self, answer: AnswerId) -> bool {
        let Phase::Answering { index, selected } = &mut self.phase else {
            return false;
        };

        let index = *index;
        match self.quiz.question(index) {
            Some(q) if q.has_answer(answer) => {
                *selected = Some(answer);
                true
            }
            _ => false,
        }
    }

    /// Commit the current selection and reveal correctness
    ///
    /// A no-op (returns false) when nothing is selected or the attempt is
    /// not in the answering phase. The score is not touched here; it is
    /// awarded at the reveal-to-next transition.
    pub fn submit(&mut self) -> bool {
        match self.phase {
            Phase::Answering {
                index,
                selected: Some(selected),
            } => {
                self.phase = Phase::Revealed { index, selected };
                true
            }
            _ => false,
        }
    }

    /// Leave the reveal: award the score for this question, then move to
    /// the next question or finish.
    ///
    /// Returns `None` when the attempt is not in the revealed phase.
    pub fn advance(&mut self) -> Option<Advance> {
        let Phase::Revealed { index, selected } = self.phase else {
            return None;
        };

        let correct = self
            .quiz
            .question(index)
            .and_then(|q| q.answer(selected))
            .is_some_and(|a| a.is_correct);
        if correct {
            self.score += 1;
        }

        let next = index + 1;
        if next < self.quiz.len() {
            self.phase = Phase::Answering {
                index: next,
                selected: None,
            };
            Some(Advance::Question(next))
        } else {
            tracing::debug!(
                quiz = %self.quiz.title,
                score = self.score,
                total = self.total(),
                "attempt finished"
            );
            self.phase = Phase::Finished;
            Some(Advance::Finished)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdeck_catalog::Catalog;

    fn math_quiz() -> Quiz {
        Catalog::builtin().by_title("Mathematics").unwrap().clone()
    }

    fn correct_id(attempt: &Attempt) -> AnswerId {
        attempt
            .current_question()
            .unwrap()
            .correct_answers()
            .next()
            .unwrap()
            .id
    }

    fn wrong_id(attempt: &Attempt) -> AnswerId {
        attempt
            .current_question()
            .unwrap()
            .answers
            .iter()
            .find(|a| !a.is_correct)
            .unwrap()
            .id
    }

    #[test]
    fn test_starts_at_first_question_with_zero_score() {
        let attempt = Attempt::new(math_quiz());
        assert_eq!(attempt.current_index(), Some(0));
        assert_eq!(attempt.score(), 0);
        assert_eq!(attempt.selected(), None);
    }

    #[test]
    fn test_all_correct_scores_full_marks() {
        let mut attempt = Attempt::new(math_quiz());
        let total = attempt.total();

        for _ in 0..total {
            assert!(attempt.select(correct_id(&attempt)));
            assert!(attempt.submit());
            assert!(attempt.advance().is_some());
        }

        assert!(attempt.is_finished());
        assert_eq!(attempt.score() as usize, total);
    }

    #[test]
    fn test_one_wrong_scores_n_minus_one() {
        let mut attempt = Attempt::new(math_quiz());
        let total = attempt.total();

        for i in 0..total {
            let pick = if i == 1 {
                wrong_id(&attempt)
            } else {
                correct_id(&attempt)
            };
            assert!(attempt.select(pick));
            assert!(attempt.submit());
            attempt.advance().unwrap();
        }

        assert!(attempt.is_finished());
        assert_eq!(attempt.score() as usize, total - 1);
    }

    #[test]
    fn test_mathematics_example_scores_two_of_three() {
        // √16 -> 4 (correct), 5+3 -> 9 (wrong), d/dx x² -> 2x (correct)
        let mut attempt = Attempt::new(math_quiz());

        attempt.select(correct_id(&attempt));
        attempt.submit();
        assert_eq!(attempt.advance(), Some(Advance::Question(1)));

        let nine = attempt
            .current_question()
            .unwrap()
            .answers
            .iter()
            .find(|a| a.text == "9")
            .unwrap()
            .id;
        attempt.select(nine);
        attempt.submit();
        assert_eq!(attempt.advance(), Some(Advance::Question(2)));

        attempt.select(correct_id(&attempt));
        attempt.submit();
        assert_eq!(attempt.advance(), Some(Advance::Finished));

        assert_eq!(attempt.score(), 2);
        assert_eq!(attempt.total(), 3);
    }

    #[test]
    fn test_submit_without_selection_is_a_no_op() {
        let mut attempt = Attempt::new(math_quiz());
        assert!(!attempt.submit());
        assert_eq!(
            *attempt.phase(),
            Phase::Answering {
                index: 0,
                selected: None
            }
        );
    }

    #[test]
    fn test_select_rejects_foreign_answer_id() {
        let mut attempt = Attempt::new(math_quiz());
        let other_question_answer = attempt.quiz().questions[1].answers[0].id;

        assert!(!attempt.select(other_question_answer));
        assert_eq!(attempt.selected(), None);
    }

    #[test]
    fn test_reselect_replaces_previous_selection() {
        let mut attempt = Attempt::new(math_quiz());
        let wrong = wrong_id(&attempt);
        let correct = correct_id(&attempt);

        assert!(attempt.select(wrong));
        assert!(attempt.select(correct));
        assert_eq!(attempt.selected(), Some(correct));
    }

    #[test]
    fn test_last_question_advances_to_finished_not_out_of_range() {
        let mut attempt = Attempt::new(math_quiz());
        let total = attempt.total();

        for _ in 0..total - 1 {
            attempt.select(correct_id(&attempt));
            attempt.submit();
            attempt.advance().unwrap();
        }

        assert_eq!(attempt.current_index(), Some(total - 1));
        attempt.select(correct_id(&attempt));
        attempt.submit();
        assert_eq!(attempt.advance(), Some(Advance::Finished));
        assert_eq!(attempt.current_index(), None);
        assert!(attempt.current_question().is_none());
    }

    #[test]
    fn test_score_awarded_exactly_once_per_question() {
        let mut attempt = Attempt::new(math_quiz());
        attempt.select(correct_id(&attempt));

        // Submitting never scores
        attempt.submit();
        assert_eq!(attempt.score(), 0);

        // Advancing scores once; repeating it in the wrong phase does not
        attempt.advance().unwrap();
        assert_eq!(attempt.score(), 1);
        assert!(attempt.advance().is_none());
        assert_eq!(attempt.score(), 1);
    }

    #[test]
    fn test_transitions_outside_their_phase_are_no_ops() {
        let mut attempt = Attempt::new(math_quiz());
        let correct = correct_id(&attempt);

        // Advance before reveal
        assert!(attempt.advance().is_none());

        attempt.select(correct);
        attempt.submit();

        // Select and double-submit while revealed
        assert!(!attempt.select(correct));
        assert!(!attempt.submit());
        assert_eq!(attempt.score(), 0);

        // Everything after finish
        while !attempt.is_finished() {
            attempt.select(correct_id(&attempt));
            attempt.submit();
            attempt.advance();
        }
        assert!(!attempt.select(correct));
        assert!(!attempt.submit());
        assert!(attempt.advance().is_none());
    }
}
