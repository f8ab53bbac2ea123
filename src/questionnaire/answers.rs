use super::catalog::QuestionId;
use std::collections::BTreeMap;

/// Wire value sent for questions skipped because their condition is false
pub const HIDDEN_ANSWER: &str = "Não";

/// Current answer of one question
///
/// `Hidden` marks a question that was structurally skipped. It only becomes the
/// literal "Não" at the wire boundary, so it never compares equal to a real "Não".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Answer {
    #[default]
    Unset,
    Hidden,
    Answered(String),
}

impl Answer {
    pub fn answered(text: impl Into<String>) -> Self {
        Answer::Answered(text.into())
    }

    /// Value as sent to the backend
    pub fn wire_value(&self) -> &str {
        match self {
            Answer::Unset => "",
            Answer::Hidden => HIDDEN_ANSWER,
            Answer::Answered(text) => text,
        }
    }

    /// Text typed or selected by the adopter, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Answer::Answered(text) => Some(text),
            _ => None,
        }
    }

    /// True for a non-empty adopter answer
    pub fn is_answered(&self) -> bool {
        matches!(self, Answer::Answered(text) if !text.is_empty())
    }
}

/// Answers of one questionnaire instance, ordered by question id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.entries.get(&id)
    }

    pub fn set(&mut self, id: QuestionId, answer: Answer) {
        self.entries.insert(id, answer);
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Adopter text for `id`; hidden and unset entries yield `None`
    pub fn text(&self, id: QuestionId) -> Option<&str> {
        self.get(id).and_then(Answer::text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &Answer)> {
        self.entries.iter().map(|(id, answer)| (*id, answer))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Answer)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
