use super::DomainError;

const MAX_TEXT_LEN: usize = 2_000;

fn normalize(value: String, empty: DomainError) -> Result<String, DomainError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(empty);
    }

    let len = trimmed.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(DomainError::TextTooLong(len));
    }

    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionText(String);

impl QuestionText {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        normalize(value.into(), DomainError::EmptyQuestionText).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        normalize(value.into(), DomainError::EmptyAnswerText).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
