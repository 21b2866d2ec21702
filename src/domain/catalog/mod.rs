//! Question catalog and submitted responses.

#[allow(clippy::module_inception)]
mod catalog;
mod question;
mod response;

pub use catalog::{QuestionCatalog, STANDARD_CATALOG};
pub use question::{OrgScope, Question, ResponseType, ValidationRules};
pub use response::{FileRef, ResponseSet, ResponseValue};
