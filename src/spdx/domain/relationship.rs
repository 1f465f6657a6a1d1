use super::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// Relationship types the dig traversal understands.
///
/// Any other `relationshipType` value maps to [`RelationshipKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Describes,
    Contains,
    DependsOn,
    GeneratedFrom,
    Other,
}

impl RelationshipKind {
    pub fn from_type(relationship_type: &str) -> Self {
        match relationship_type {
            "DESCRIBES" => RelationshipKind::Describes,
            "CONTAINS" => RelationshipKind::Contains,
            "DEPENDS_ON" => RelationshipKind::DependsOn,
            "GENERATED_FROM" => RelationshipKind::GeneratedFrom,
            _ => RelationshipKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Describes => "DESCRIBES",
            RelationshipKind::Contains => "CONTAINS",
            RelationshipKind::DependsOn => "DEPENDS_ON",
            RelationshipKind::GeneratedFrom => "GENERATED_FROM",
            RelationshipKind::Other => "OTHER",
        }
    }
}

/// Directed, typed edge between two SPDX element identifiers.
///
/// Endpoints are kept as raw strings: they may reference elements that are
/// not present in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relationship {
    #[serde(
        rename = "spdxElementId",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty",
    )]
    pub spdx_element_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub related_spdx_element: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub relationship_type: String,
}

impl Relationship {
    pub fn new(
        spdx_element_id: impl Into<String>,
        relationship_type: impl Into<String>,
        related_spdx_element: impl Into<String>,
    ) -> Self {
        Self {
            spdx_element_id: spdx_element_id.into(),
            related_spdx_element: related_spdx_element.into(),
            relationship_type: relationship_type.into(),
        }
    }

    pub fn kind(&self) -> RelationshipKind {
        RelationshipKind::from_type(&self.relationship_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_recognized_types() {
        assert_eq!(
            Relationship::new("a", "DESCRIBES", "b").kind(),
            RelationshipKind::Describes
        );
        assert_eq!(
            Relationship::new("a", "CONTAINS", "b").kind(),
            RelationshipKind::Contains
        );
        assert_eq!(
            Relationship::new("a", "DEPENDS_ON", "b").kind(),
            RelationshipKind::DependsOn
        );
        assert_eq!(
            Relationship::new("a", "GENERATED_FROM", "b").kind(),
            RelationshipKind::GeneratedFrom
        );
    }

    #[test]
    fn test_kind_unrecognized_type_is_other() {
        assert_eq!(
            Relationship::new("a", "LICENSED_UNDER", "b").kind(),
            RelationshipKind::Other
        );
        // matching is exact, not case-insensitive
        assert_eq!(
            Relationship::new("a", "contains", "b").kind(),
            RelationshipKind::Other
        );
    }

    #[test]
    fn test_deserialize_relationship() {
        let rel: Relationship = serde_json::from_str(
            r#"{"spdxElementId":"SPDXRef-DOCUMENT","relatedSpdxElement":"SPDXRef-A","relationshipType":"DESCRIBES"}"#,
        )
        .unwrap();
        assert_eq!(rel.spdx_element_id, "SPDXRef-DOCUMENT");
        assert_eq!(rel.related_spdx_element, "SPDXRef-A");
        assert_eq!(rel.kind(), RelationshipKind::Describes);
    }
}
