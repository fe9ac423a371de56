pub mod prune;
pub mod term_category;
pub mod timestamp;
pub mod vocabulary;
