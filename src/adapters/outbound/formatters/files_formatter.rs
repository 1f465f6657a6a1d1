use super::palette::Palette;
use super::table::Table;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::spdx::domain::{Document, File};

/// FilesFormatter adapter rendering the files section as a table
pub struct FilesFormatter {
    palette: Palette,
}

impl FilesFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Renders the first `count` files; the footer always reports the full total
    pub fn files_table(&self, files: &[File], count: usize) -> String {
        let mut table = Table::new([
            "#",
            "FileName",
            "LicenseConcluded",
            "LicenseInfoInFiles",
            "SPDXId",
            "CopyrightText",
            "checksum",
            "Algorithm",
        ]);

        for (idx, file) in files.iter().take(count).enumerate() {
            let (checksum, algorithm) = file
                .primary_checksum()
                .map(|c| (c.checksum_value.clone(), c.algorithm.clone()))
                .unwrap_or_default();

            table.add_row(vec![
                (idx + 1).to_string(),
                file.file_name.clone(),
                file.license_concluded.clone(),
                file.license_info_in_files.join(", "),
                file.spdx_id.clone(),
                file.copyright_text.clone(),
                checksum,
                algorithm,
            ]);
        }

        if !files.is_empty() {
            table.set_footer(
                self.palette
                    .blue(&format!("There are {} Files", files.len())),
            );
        }
        table.render()
    }
}

impl ReportFormatter for FilesFormatter {
    fn format(&self, document: &Document, limit: Option<usize>) -> Result<String> {
        let total = document.file_count();
        if total == 0 {
            return Ok(String::new());
        }
        let count = limit.map_or(total, |n| n.min(total));
        Ok(self.files_table(&document.files, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spdx::domain::Checksum;

    fn file(id: &str, name: &str) -> File {
        File {
            spdx_id: id.to_string(),
            file_name: name.to_string(),
            license_concluded: "MIT".to_string(),
            license_info_in_files: vec!["MIT".to_string(), "BSD-3-Clause".to_string()],
            checksums: vec![Checksum {
                algorithm: "SHA1".to_string(),
                checksum_value: "d6a770ba38583ed4bb4525bd96e50461655d2758".to_string(),
            }],
            ..Default::default()
        }
    }

    fn document() -> Document {
        Document {
            files: vec![
                file("SPDXRef-File-1", "./a.c"),
                file("SPDXRef-File-2", "./b.c"),
                file("SPDXRef-File-3", "./c.c"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_all_files() {
        let output = FilesFormatter::new(Palette::plain())
            .format(&document(), None)
            .unwrap();

        assert!(output.contains("./a.c"));
        assert!(output.contains("./c.c"));
        assert!(output.contains("MIT, BSD-3-Clause"));
        assert!(output.contains("d6a770ba38583ed4bb4525bd96e50461655d2758"));
        assert!(output.contains("There are 3 Files"));
    }

    #[test]
    fn test_format_limit_takes_leading_files() {
        let output = FilesFormatter::new(Palette::plain())
            .format(&document(), Some(2))
            .unwrap();

        assert!(output.contains("./a.c"));
        assert!(output.contains("./b.c"));
        assert!(!output.contains("./c.c"));
        assert!(output.contains("There are 3 Files"));
    }

    #[test]
    fn test_format_limit_is_clamped() {
        let formatter = FilesFormatter::new(Palette::plain());
        assert_eq!(
            formatter.format(&document(), Some(50)).unwrap(),
            formatter.format(&document(), None).unwrap()
        );
    }

    #[test]
    fn test_format_file_without_checksums() {
        let doc = Document {
            files: vec![File {
                spdx_id: "SPDXRef-File-x".to_string(),
                file_name: "./x".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let output = FilesFormatter::new(Palette::plain())
            .format(&doc, None)
            .unwrap();
        assert!(output.contains("./x"));
    }

    #[test]
    fn test_format_no_files_is_empty() {
        let output = FilesFormatter::new(Palette::plain())
            .format(&Document::default(), Some(3))
            .unwrap();
        assert!(output.is_empty());
    }
}
