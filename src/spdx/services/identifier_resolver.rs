use crate::spdx::domain::{Document, File, Package};
use std::collections::HashMap;

/// Element a SPDX identifier resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Package(&'a Package),
    File(&'a File),
}

impl Element<'_> {
    /// Human-readable label: package name/version or file name
    pub fn label(&self) -> String {
        match self {
            Element::Package(package) => package.label(),
            Element::File(file) => file.file_name.clone(),
        }
    }
}

/// IdentifierResolver maps opaque SPDX identifiers to packages and files.
///
/// The index is built once per document. Packages take precedence over files,
/// and the first element carrying a given identifier wins, which is what a
/// linear scan over packages then files would return.
pub struct IdentifierResolver<'a> {
    index: HashMap<&'a str, Element<'a>>,
}

impl<'a> IdentifierResolver<'a> {
    pub fn new(document: &'a Document) -> Self {
        let mut index = HashMap::with_capacity(document.packages.len() + document.files.len());

        for package in &document.packages {
            index
                .entry(package.spdx_id.as_str())
                .or_insert(Element::Package(package));
        }
        for file in &document.files {
            index
                .entry(file.spdx_id.as_str())
                .or_insert(Element::File(file));
        }

        Self { index }
    }

    /// Returns the package or file owning `id`, if any
    pub fn resolve_entity(&self, id: &str) -> Option<Element<'a>> {
        self.index.get(id).copied()
    }

    /// Returns the package owning `id`, if `id` names a package
    pub fn resolve_package(&self, id: &str) -> Option<&'a Package> {
        match self.resolve_entity(id) {
            Some(Element::Package(package)) => Some(package),
            _ => None,
        }
    }

    /// Display label for `id`.
    ///
    /// Dangling identifiers degrade to the identifier itself.
    pub fn resolve_label(&self, id: &str) -> String {
        self.resolve_entity(id)
            .map(|element| element.label())
            .unwrap_or_else(|| id.to_string())
    }
}
