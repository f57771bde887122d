pub mod candidate;
pub mod document;
pub mod job;
pub mod matching;
pub mod report;

pub use candidate::{Candidate, CandidateSource, CandidateStatus};
pub use document::{Document, DocumentKind};
pub use job::{EmploymentType, Job};
pub use matching::{ChatRole, ChatTurn, JobMatchResult, SourcedProfile, SourcingResult};
pub use report::{ComplianceReport, OsintReport, RiskAssessment, RiskLevel};
