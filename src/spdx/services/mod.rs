mod dependency_digger;
mod identifier_resolver;
mod relationship_classifier;

pub use dependency_digger::{DependencyDigger, DigReport, EdgeEntry, RootEntry};
pub use identifier_resolver::{Element, IdentifierResolver};
pub use relationship_classifier::{ClassifiedRelationships, RelationshipClassifier};
