pub mod aggregate;
pub mod clean;
pub mod entries_over_time;
pub mod extract_terms;
pub mod general_statistics;
pub mod report;
pub mod term_statistics;
