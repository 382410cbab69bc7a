pub mod categorize;
pub mod normalize;
pub mod prompt;
pub mod range;
pub mod summary;
