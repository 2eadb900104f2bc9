// Requirement matching: stored resume -> language analysis -> set-intersection score.

pub mod handlers;
pub mod scoring;
