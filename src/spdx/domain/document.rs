use super::serde_helpers::null_as_default;
use super::{File, Package, Relationship};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who created the document and when
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license_list_version: String,
}

/// License text found in the scanned sources but not on the SPDX license list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedLicensingInfo {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub extracted_text: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Document aggregate representing one loaded SPDX JSON file.
///
/// Read-only once loaded: queries borrow it and never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(
        rename = "SPDXID",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty",
    )]
    pub spdx_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub spdx_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creation_info: CreationInfo,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub data_license: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub has_extracted_licensing_infos: Vec<ExtractedLicensingInfo>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub document_namespace: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub document_describes: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl Document {
    /// True for the zero-value document returned when the input path does not exist
    pub fn is_empty(&self) -> bool {
        *self == Document::default()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
