pub mod corpus_source;
pub mod license_source;
pub mod ontology_source;
