//! Skill extraction and match scoring module

pub mod catalog;
pub mod extractor;
pub mod normalize;
pub mod scorer;
pub mod similarity;
