//! Report structures and rendering

pub mod report;
