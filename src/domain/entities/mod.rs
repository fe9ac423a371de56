pub mod license_catalog;
pub mod ontology;
pub mod registry_entry;
pub mod term_reference;
pub mod term_statistics;
