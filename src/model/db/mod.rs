//! DB-compatible (e.g. de/serialisable) record kinds.
//!
//! Each kind follows the same shape: an `XCore` holding the stored fields,
//! an `X` wrapper adding the database-assigned `_id`, and a `NewX` alias
//! for records not yet inserted.

mod candidate;
pub use candidate::{Candidate, CandidateCore, NewCandidate};

mod interview;
pub use interview::{Interview, InterviewCore, NewInterview};

mod question;
pub use question::{NewQuestion, Question, QuestionCore};

mod template;
pub use template::{InterviewTemplate, InterviewTemplateCore, NewInterviewTemplate};
