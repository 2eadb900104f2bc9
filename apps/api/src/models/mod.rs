pub mod resume;

pub use resume::{MatchResult, ResumeRecord};
