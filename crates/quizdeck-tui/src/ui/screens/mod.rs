mod question;
mod quiz_list;
mod reveal;
mod summary;

pub use question::QuestionScreen;
pub use quiz_list::QuizListScreen;
pub use reveal::RevealScreen;
pub use summary::SummaryScreen;
