//! Input parsing: resume text and job store files

pub mod jobs;
pub mod resume;
