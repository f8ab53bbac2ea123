use super::catalog::QuestionId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("question {0} is not part of the catalog")]
    UnknownQuestion(QuestionId),

    #[error("question {0} has more than one visibility rule")]
    DuplicateRule(QuestionId),

    #[error("visibility rules form a cycle through question {0}")]
    CyclicRules(QuestionId),
}
