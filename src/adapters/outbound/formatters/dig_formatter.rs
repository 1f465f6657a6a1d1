use super::files_formatter::FilesFormatter;
use super::palette::Palette;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::spdx::domain::Document;
use crate::spdx::services::{DependencyDigger, DigReport, EdgeEntry};
use std::fmt::Write;

/// DigFormatter adapter rendering the relationship graph walk as indented text
///
/// Sections appear in a fixed order: DESCRIBES roots, GENERATED_FROM edges,
/// then DEPENDS_ON edges. Empty edge sections are omitted entirely.
pub struct DigFormatter {
    palette: Palette,
}

impl DigFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn banner(&self, title: &str) -> String {
        self.palette.bold(&format!("═══ {} ═══", title))
    }

    fn render(&self, document: &Document, report: &DigReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{}", self.banner("DESCRIBES/CONTAINS"))?;
        for root in &report.roots {
            writeln!(
                out,
                "Root: {} {} {}",
                self.palette.yellow(&root.source),
                self.palette.red("DESCRIBES"),
                self.palette.yellow(&root.related)
            )?;
            write_files(&mut out, &root.files, "    ")?;
        }

        if report.containment_missing {
            writeln!(
                out,
                "{}",
                self.palette
                    .gray("No CONTAINS relationships found; listing all files")
            )?;
            if !document.files.is_empty() {
                let files = FilesFormatter::new(self.palette);
                out.push_str(&files.files_table(&document.files, document.files.len()));
            }
        }

        if !report.generated_from.is_empty() {
            writeln!(out, "{}", self.banner("GENERATED_FROM"))?;
            for entry in &report.generated_from {
                self.write_heading(&mut out, entry, "GENERATED_FROM")?;
                write_files(&mut out, &entry.files, "    ")?;
            }
        }

        if !report.depends_on.is_empty() {
            writeln!(out, "{}", self.banner("DEPENDS_ON/CONTAINS"))?;
            for (idx, entry) in report.depends_on.iter().enumerate() {
                self.write_heading(&mut out, entry, "DEPENDS_ON")?;
                writeln!(
                    out,
                    "  Pkg {} {}",
                    idx + 1,
                    self.palette.blue(&entry.related)
                )?;
                write_files(&mut out, &entry.files, "      ")?;
            }
        }

        Ok(out)
    }

    fn write_heading(&self, out: &mut String, entry: &EdgeEntry, marker: &str) -> Result<()> {
        if let Some(heading) = &entry.heading {
            writeln!(
                out,
                "{} {}",
                self.palette.yellow(heading),
                self.palette.green(marker)
            )?;
        }
        Ok(())
    }
}

/// File lines are numbered from 1 within each list
fn write_files(out: &mut String, files: &[String], indent: &str) -> Result<()> {
    for (idx, file) in files.iter().enumerate() {
        writeln!(out, "{}{}. {}", indent, idx + 1, file)?;
    }
    Ok(())
}

impl ReportFormatter for DigFormatter {
    /// The dig report always covers the whole document; `limit` does not apply
    fn format(&self, document: &Document, _limit: Option<usize>) -> Result<String> {
        let report = DependencyDigger::new(document).dig();
        self.render(document, &report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spdx::domain::{File, Package, Relationship};

    fn file(id: &str, name: &str) -> File {
        File {
            spdx_id: id.to_string(),
            file_name: name.to_string(),
            ..Default::default()
        }
    }

    fn package(id: &str, name: &str, version: &str) -> Package {
        Package {
            spdx_id: id.to_string(),
            name: name.to_string(),
            version_info: version.to_string(),
            ..Default::default()
        }
    }

    fn dig(document: &Document) -> String {
        DigFormatter::new(Palette::plain())
            .format(document, None)
            .unwrap()
    }

    #[test]
    fn test_dig_lists_inline_files_under_root() {
        let mut pkg = package("SPDXRef-A", "pkgA", "1.0");
        pkg.has_files = vec!["SPDXRef-f1".to_string(), "SPDXRef-f2".to_string()];
        let doc = Document {
            packages: vec![pkg],
            files: vec![file("SPDXRef-f1", "a.c"), file("SPDXRef-f2", "b.c")],
            relationships: vec![
                Relationship::new("SPDXRef-DOCUMENT", "DESCRIBES", "SPDXRef-A"),
                Relationship::new("SPDXRef-A", "CONTAINS", "SPDXRef-f1"),
            ],
            ..Default::default()
        };

        let output = dig(&doc);
        let expected = "\
═══ DESCRIBES/CONTAINS ═══
Root: SPDXRef-DOCUMENT DESCRIBES pkgA 1.0
    1. a.c
    2. b.c
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_dig_without_contains_falls_back_to_files_table() {
        let doc = Document {
            files: vec![
                file("SPDXRef-f1", "a.c"),
                file("SPDXRef-f2", "b.c"),
                file("SPDXRef-f3", "c.c"),
            ],
            ..Default::default()
        };

        let output = dig(&doc);
        assert!(output.contains("No CONTAINS relationships found; listing all files"));
        assert!(output.contains("a.c"));
        assert!(output.contains("b.c"));
        assert!(output.contains("c.c"));
        assert!(output.contains("There are 3 Files"));
    }

    #[test]
    fn test_dig_depends_on_section() {
        let doc = Document {
            packages: vec![
                package("SPDXRef-app", "app", "2.0"),
                package("SPDXRef-lib", "libz", "1.3"),
                package("SPDXRef-ssl", "openssl", ""),
            ],
            files: vec![file("SPDXRef-z", "libz.so")],
            relationships: vec![
                Relationship::new("SPDXRef-app", "DEPENDS_ON", "SPDXRef-lib"),
                Relationship::new("SPDXRef-app", "DEPENDS_ON", "SPDXRef-ssl"),
                Relationship::new("SPDXRef-lib", "CONTAINS", "SPDXRef-z"),
            ],
            ..Default::default()
        };

        let output = dig(&doc);
        let expected = "\
═══ DESCRIBES/CONTAINS ═══
═══ DEPENDS_ON/CONTAINS ═══
app 2.0 DEPENDS_ON
  Pkg 1 libz 1.3
      1. libz.so
  Pkg 2 openssl
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_dig_generated_from_section() {
        let doc = Document {
            packages: vec![package("SPDXRef-bin", "bin", "1")],
            files: vec![file("SPDXRef-src", "main.c")],
            relationships: vec![
                Relationship::new("SPDXRef-bin", "GENERATED_FROM", "SPDXRef-src"),
                Relationship::new("SPDXRef-bin", "CONTAINS", "SPDXRef-src"),
            ],
            ..Default::default()
        };

        let output = dig(&doc);
        assert!(output.contains("═══ GENERATED_FROM ═══\nbin 1 GENERATED_FROM\n    1. main.c\n"));
        assert!(!output.contains("DEPENDS_ON/CONTAINS"));
    }

    #[test]
    fn test_dig_is_idempotent() {
        let doc = Document {
            packages: vec![package("SPDXRef-A", "a", "1")],
            relationships: vec![
                Relationship::new("SPDXRef-A", "DEPENDS_ON", "SPDXRef-A"),
                Relationship::new("SPDXRef-A", "CONTAINS", "SPDXRef-A"),
            ],
            ..Default::default()
        };

        assert_eq!(dig(&doc), dig(&doc));
    }
}
