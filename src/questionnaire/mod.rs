//! Adoption questionnaire
//!
//! The adopter-side engine decides which questions are visible and keeps hidden
//! answers defaulted. The formatter turns a finished questionnaire into the
//! submission payload, and the review renderer decides what an organization sees
//! of a submitted form. Both sides share one id-keyed [`RuleTable`].

pub mod answers;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod review;
pub mod rules;
pub mod session;

pub use answers::{Answer, AnswerSet, HIDDEN_ANSWER};
pub use catalog::{Question, QuestionCatalog, QuestionId, QuestionKind, QuestionRecord};
pub use engine::{Questionnaire, answer_field, question_of_field};
pub use error::QuestionnaireError;
pub use formatter::{
    AdoptionTarget, AnswerEntry, SubmissionPayload, answers_from_submission, format_answers,
    format_submission,
};
pub use review::{
    ExpansionState, RenderedAnswer, ReviewRenderer, SubmittedAnswer, load_review_catalog,
};
pub use rules::{RuleTable, VisibilityRule};
pub use session::{AdoptionBackend, QuestionnaireSession, SessionError, SessionState};
