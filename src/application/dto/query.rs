use crate::spdx::domain::Document;

/// Query enumeration for the reports the tool can produce
///
/// Both the CLI (which selects a query) and the formatter factory (which
/// renders it) understand this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Document metadata summary
    Meta,
    /// Flat file listing
    Files,
    /// Flat package listing
    Packages,
    /// License and copyright listing per package
    PackageIp,
    /// Flat relationship listing
    Relationships,
    /// Relationship graph walk
    Dig,
}

impl Query {
    /// Size of the collection a flat listing renders
    ///
    /// Returns `None` for reports that are not bound to one collection.
    pub fn collection_len(&self, document: &Document) -> Option<usize> {
        match self {
            Query::Files => Some(document.file_count()),
            Query::Packages | Query::PackageIp => Some(document.package_count()),
            Query::Relationships => Some(document.relationship_count()),
            Query::Meta | Query::Dig => None,
        }
    }

    /// Whether a row limit applies to this query
    pub fn accepts_limit(&self) -> bool {
        !matches!(self, Query::Meta | Query::Dig)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::Meta => write!(f, "meta"),
            Query::Files => write!(f, "files"),
            Query::Packages => write!(f, "packages"),
            Query::PackageIp => write!(f, "package licenses"),
            Query::Relationships => write!(f, "relationships"),
            Query::Dig => write!(f, "dig"),
        }
    }
}
