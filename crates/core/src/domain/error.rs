use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid difficulty: {0}. difficulty must be a positive integer")]
    InvalidDifficulty(i64),

    #[error("invalid page: {0}. pages start at 1")]
    InvalidPage(i64),

    #[error("question text must not be empty")]
    EmptyQuestionText,

    #[error("answer text must not be empty")]
    EmptyAnswerText,

    #[error("text is too long: {0} characters")]
    TextTooLong(usize),
}
