pub mod document;
pub mod file;
pub mod package;
pub mod relationship;
mod serde_helpers;

pub use document::{CreationInfo, Document, ExtractedLicensingInfo};
pub use file::{Checksum, File};
pub use package::{ExternalRef, Package};
pub use relationship::{Relationship, RelationshipKind};
