use super::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// Checksum of a file (algorithm + value)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Checksum {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub algorithm: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub checksum_value: String,
}

/// SPDX file entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct File {
    #[serde(
        rename = "SPDXID",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty",
    )]
    pub spdx_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license_concluded: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub copyright_text: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub license_info_in_files: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<Checksum>,
}

impl File {
    /// First listed checksum, if any
    pub fn primary_checksum(&self) -> Option<&Checksum> {
        self.checksums.first()
    }
}
