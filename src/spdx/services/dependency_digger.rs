use super::identifier_resolver::IdentifierResolver;
use super::relationship_classifier::{ClassifiedRelationships, RelationshipClassifier};
use crate::spdx::domain::{Document, Relationship};

/// One DESCRIBES edge with the files found under its related element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    /// Label of the describing element (often the raw document identifier)
    pub source: String,
    /// Label of the described element
    pub related: String,
    /// File labels owned by the described element, in discovery order
    pub files: Vec<String>,
}

/// One GENERATED_FROM or DEPENDS_ON edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEntry {
    /// Source label, `None` when it repeats the label of the previous edge in the section
    pub heading: Option<String>,
    /// Label of the related element
    pub related: String,
    /// File labels owned by the related element
    pub files: Vec<String>,
}

/// Structured result of digging a document's relationship graph.
///
/// Rendering to text is left to the dig formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigReport {
    pub roots: Vec<RootEntry>,
    /// The document has no CONTAINS edges at all; callers list every file instead
    pub containment_missing: bool,
    pub generated_from: Vec<EdgeEntry>,
    pub depends_on: Vec<EdgeEntry>,
}

/// DependencyDigger walks DESCRIBES, GENERATED_FROM and DEPENDS_ON edges and
/// expands each reached element into the files it owns.
///
/// CONTAINS edges are never walked on their own: they only back the file
/// expansion of packages that do not list `hasFiles` inline. Expansion is a
/// single level deep, so cyclic relationship graphs terminate.
pub struct DependencyDigger<'a> {
    resolver: IdentifierResolver<'a>,
    relationships: ClassifiedRelationships<'a>,
}

impl<'a> DependencyDigger<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            resolver: IdentifierResolver::new(document),
            relationships: RelationshipClassifier::classify(&document.relationships),
        }
    }

    /// Digs the whole document
    pub fn dig(&self) -> DigReport {
        let roots = self
            .relationships
            .describes
            .iter()
            .map(|rel| RootEntry {
                source: self.resolver.resolve_label(&rel.spdx_element_id),
                related: self.resolver.resolve_label(&rel.related_spdx_element),
                files: self.expand(&rel.related_spdx_element, rel),
            })
            .collect();

        DigReport {
            roots,
            containment_missing: self.relationships.contains.is_empty(),
            generated_from: self.edge_section(&self.relationships.generated_from),
            depends_on: self.edge_section(&self.relationships.depends_on),
        }
    }

    /// Builds the entries of one edge section.
    ///
    /// Only an immediately repeated source label is suppressed; the same label
    /// shows again once another label came in between.
    fn edge_section(&self, relationships: &[&'a Relationship]) -> Vec<EdgeEntry> {
        let mut previous: Option<String> = None;

        relationships
            .iter()
            .map(|rel| {
                let source = self.resolver.resolve_label(&rel.spdx_element_id);
                let heading = if previous.as_deref() == Some(source.as_str()) {
                    None
                } else {
                    previous = Some(source.clone());
                    Some(source)
                };

                EdgeEntry {
                    heading,
                    related: self.resolver.resolve_label(&rel.related_spdx_element),
                    files: self.expand(&rel.related_spdx_element, rel),
                }
            })
            .collect()
    }

    /// Package-or-file expansion of `id`, reached through `rel`.
    ///
    /// An inline `hasFiles` list wins. Otherwise containment is looked up from
    /// both ends of `rel`, because generators record CONTAINS from either the
    /// package itself or its sibling element.
    fn expand(&self, id: &str, rel: &Relationship) -> Vec<String> {
        if let Some(package) = self.resolver.resolve_package(id) {
            if !package.has_files.is_empty() {
                return package
                    .has_files
                    .iter()
                    .map(|file_id| self.resolver.resolve_label(file_id))
                    .collect();
            }
        }

        self.relationships
            .contained_by(&rel.spdx_element_id)
            .chain(self.relationships.contained_by(&rel.related_spdx_element))
            .map(|contains| self.resolver.resolve_label(&contains.related_spdx_element))
            .collect()
    }
}
