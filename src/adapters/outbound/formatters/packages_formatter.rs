use super::palette::Palette;
use super::table::Table;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::spdx::domain::Document;

/// Columns of the full package listing
const PACKAGE_COLUMNS: [&str; 11] = [
    "#",
    "Name",
    "Supplier",
    "VersionInfo",
    "Homepage",
    "LicenseDeclared",
    "LicenseConcluded",
    "FilesAnalyzed",
    "DownloadLocation",
    "CopyrightText",
    "Spdxid",
];

/// Columns of the intellectual-property listing
const IP_COLUMNS: [&str; 6] = [
    "#",
    "Name",
    "VersionInfo",
    "LicenseDeclared",
    "LicenseConcluded",
    "CopyrightText",
];

/// PackagesFormatter adapter rendering the packages section as a table
///
/// Names and versions go through the package display rules, so packages
/// named after a checksum show their description instead.
pub struct PackagesFormatter {
    palette: Palette,
}

impl PackagesFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl ReportFormatter for PackagesFormatter {
    fn format(&self, document: &Document, limit: Option<usize>) -> Result<String> {
        let total = document.package_count();
        if total == 0 {
            return Ok(String::new());
        }
        let count = limit.map_or(total, |n| n.min(total));

        let mut table = Table::new(PACKAGE_COLUMNS);
        for (idx, pkg) in document.packages.iter().take(count).enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                pkg.display_name().to_string(),
                pkg.display_supplier().to_string(),
                pkg.display_version().to_string(),
                pkg.display_homepage().to_string(),
                pkg.license_declared.clone(),
                pkg.license_concluded.clone(),
                pkg.files_analyzed.to_string(),
                pkg.download_location.clone(),
                pkg.copyright_text.clone(),
                pkg.spdx_id.clone(),
            ]);
        }
        table.set_footer(self.palette.blue(&format!("There are {} pkgs", total)));

        Ok(table.render())
    }
}

/// PackageIpFormatter adapter rendering copyright and license data per package
pub struct PackageIpFormatter {
    palette: Palette,
}

impl PackageIpFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl ReportFormatter for PackageIpFormatter {
    fn format(&self, document: &Document, limit: Option<usize>) -> Result<String> {
        let total = document.package_count();
        if total == 0 {
            return Ok(String::new());
        }
        let count = limit.map_or(total, |n| n.min(total));

        let mut table = Table::new(IP_COLUMNS);
        for (idx, pkg) in document.packages.iter().take(count).enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                pkg.display_name().to_string(),
                pkg.display_version().to_string(),
                self.palette.yellow(&pkg.license_declared),
                self.palette.yellow(&pkg.license_concluded),
                pkg.copyright_text.clone(),
            ]);
        }
        table.set_footer(self.palette.blue(&format!("There are {} pkgs", total)));

        Ok(table.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spdx::domain::Package;

    fn document() -> Document {
        Document {
            packages: vec![
                Package {
                    spdx_id: "SPDXRef-Package-curl".to_string(),
                    name: "curl".to_string(),
                    version_info: "8.4.0".to_string(),
                    originator: "Person: Daniel Stenberg".to_string(),
                    download_location: "https://curl.se/download/curl-8.4.0.tar.gz".to_string(),
                    license_declared: "curl".to_string(),
                    license_concluded: "NOASSERTION".to_string(),
                    copyright_text: "Copyright (c) Daniel Stenberg".to_string(),
                    files_analyzed: true,
                    ..Default::default()
                },
                Package {
                    spdx_id: "SPDXRef-Package-blob".to_string(),
                    name: "sha256:4f3c2b".to_string(),
                    version_info: "irrelevant".to_string(),
                    description: "base-layer".to_string(),
                    primary_package_purpose: "CONTAINER".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_packages_applies_display_rules() {
        let output = PackagesFormatter::new(Palette::plain())
            .format(&document(), None)
            .unwrap();

        assert!(output.contains("curl"));
        assert!(output.contains("Person: Daniel Stenberg"));
        // homepage column falls back to the download location
        assert_eq!(
            output
                .matches("https://curl.se/download/curl-8.4.0.tar.gz")
                .count(),
            2
        );
        assert!(output.contains("base-layer"));
        assert!(output.contains("CONTAINER"));
        assert!(!output.contains("sha256:4f3c2b"));
        assert!(!output.contains("irrelevant"));
        assert!(output.contains("true"));
        assert!(output.contains("There are 2 pkgs"));
    }

    #[test]
    fn test_format_packages_limit() {
        let output = PackagesFormatter::new(Palette::plain())
            .format(&document(), Some(1))
            .unwrap();

        assert!(output.contains("SPDXRef-Package-curl"));
        assert!(!output.contains("SPDXRef-Package-blob"));
        assert!(output.contains("There are 2 pkgs"));
    }

    #[test]
    fn test_format_package_ip() {
        let output = PackageIpFormatter::new(Palette::plain())
            .format(&document(), None)
            .unwrap();

        assert!(output.contains("LicenseDeclared"));
        assert!(output.contains("NOASSERTION"));
        assert!(output.contains("Copyright (c) Daniel Stenberg"));
        assert!(output.contains("base-layer"));
        assert!(!output.contains("Supplier"));
    }

    #[test]
    fn test_format_no_packages_is_empty() {
        let doc = Document::default();
        assert!(PackagesFormatter::new(Palette::plain())
            .format(&doc, None)
            .unwrap()
            .is_empty());
        assert!(PackageIpFormatter::new(Palette::plain())
            .format(&doc, None)
            .unwrap()
            .is_empty());
    }
}
