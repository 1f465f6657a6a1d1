use crate::spdx::domain::{Relationship, RelationshipKind};

/// Relationships partitioned by type, each bucket in document order.
///
/// Relationships of any other type are left out of every bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedRelationships<'a> {
    pub describes: Vec<&'a Relationship>,
    pub contains: Vec<&'a Relationship>,
    pub depends_on: Vec<&'a Relationship>,
    pub generated_from: Vec<&'a Relationship>,
}

impl<'a> ClassifiedRelationships<'a> {
    /// CONTAINS edges whose source element is `id`, in document order
    pub fn contained_by(&self, id: &str) -> impl Iterator<Item = &'a Relationship> + '_ {
        let id = id.to_string();
        self.contains
            .iter()
            .copied()
            .filter(move |rel| rel.spdx_element_id == id)
    }
}

/// RelationshipClassifier service for bucketing relationships by type
///
/// Classification looks only at `relationshipType`; endpoints are never
/// inspected, so relationships to unknown identifiers are kept.
pub struct RelationshipClassifier;

impl RelationshipClassifier {
    /// Single stable pass over `relationships`
    pub fn classify(relationships: &[Relationship]) -> ClassifiedRelationships<'_> {
        let mut classified = ClassifiedRelationships::default();

        for rel in relationships {
            match rel.kind() {
                RelationshipKind::Describes => classified.describes.push(rel),
                RelationshipKind::Contains => classified.contains.push(rel),
                RelationshipKind::DependsOn => classified.depends_on.push(rel),
                RelationshipKind::GeneratedFrom => classified.generated_from.push(rel),
                RelationshipKind::Other => {}
            }
        }

        tracing::debug!(
            describes = classified.describes.len(),
            contains = classified.contains.len(),
            depends_on = classified.depends_on.len(),
            generated_from = classified.generated_from.len(),
            total = relationships.len(),
            "classified relationships"
        );

        classified
    }
}
