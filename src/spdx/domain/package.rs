use super::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// Name prefixes some SPDX generators emit when they put a checksum in the
/// package `name` field. Matched case-insensitively against the start of the name.
const CHECKSUM_NAME_PREFIXES: [&str; 3] = ["sha1", "sha256", "sha512"];

/// External reference attached to a package (purl, cpe, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalRef {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub reference_category: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub reference_locator: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub reference_type: String,
}

/// SPDX package entry
///
/// Every attribute is optional in the JSON document; absent fields load as
/// empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    #[serde(
        rename = "SPDXID",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty",
    )]
    pub spdx_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub version_info: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub supplier: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub originator: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license_concluded: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license_declared: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub copyright_text: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub download_location: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub homepage: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "std::ops::Not::not")]
    pub files_analyzed: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub primary_package_purpose: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub has_files: Vec<String>,
}

impl Package {
    /// Whether the nominal name is a checksum placeholder rather than a real name
    pub fn has_checksum_name(&self) -> bool {
        let name = self.name.to_lowercase();
        CHECKSUM_NAME_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
    }

    /// Name shown to the user.
    ///
    /// Falls back to `description` when the nominal name is a checksum placeholder.
    pub fn display_name(&self) -> &str {
        if self.has_checksum_name() {
            &self.description
        } else {
            &self.name
        }
    }

    /// Version shown to the user.
    ///
    /// Falls back to `primaryPackagePurpose` when the nominal name is a checksum placeholder.
    pub fn display_version(&self) -> &str {
        if self.has_checksum_name() {
            &self.primary_package_purpose
        } else {
            &self.version_info
        }
    }

    /// Homepage, or the download location when no homepage is declared
    pub fn display_homepage(&self) -> &str {
        if self.homepage.is_empty() {
            &self.download_location
        } else {
            &self.homepage
        }
    }

    /// Supplier, or the originator when no supplier is declared
    pub fn display_supplier(&self) -> &str {
        if self.supplier.is_empty() {
            &self.originator
        } else {
            &self.supplier
        }
    }

    /// `<display name> <display version>`, or just the name when the version is empty
    pub fn label(&self) -> String {
        let version = self.display_version();
        if version.is_empty() {
            self.display_name().to_string()
        } else {
            format!("{} {}", self.display_name(), version)
        }
    }
}
