//! Domain models - the `questoes` row, request payloads and validation

pub mod question;
pub mod validation;

pub use question::{NewQuestion, Question, QuestionId, QuestionPatch, QuestionPayload};
pub use validation::ValidationError;
