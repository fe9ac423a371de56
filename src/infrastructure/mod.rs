pub mod corpus;
pub mod licenses;
pub mod ontology;
