use super::palette::Palette;
use super::table::Table;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::spdx::domain::Document;

/// RFC 822 style timestamp, e.g. `14 Mar 23 09:26 UTC`
const CREATED_FORMAT: &str = "%d %b %y %H:%M UTC";

/// MetaFormatter adapter rendering the document metadata as a key/value table
pub struct MetaFormatter {
    palette: Palette,
}

impl MetaFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn rows(&self, document: &Document) -> Vec<(&'static str, String)> {
        let p = &self.palette;
        let created = document
            .creation_info
            .created
            .map(|created| created.format(CREATED_FORMAT).to_string())
            .unwrap_or_default();

        let mut rows = vec![
            ("Spdx ID", document.spdx_id.clone()),
            ("Spdx version", document.spdx_version.clone()),
            ("Spdx creation date", p.yellow(&created)),
        ];
        if !document.creation_info.creators.is_empty() {
            rows.push(("created by", document.creation_info.creators.join(", ")));
        }
        rows.extend([
            ("Project Name", p.red(&document.name)),
            ("File License(not projects)", document.data_license.clone()),
            ("Document Namespace", document.document_namespace.clone()),
            ("Document Describes", document.document_describes.join(", ")),
            ("Number of Packages", p.red(&document.package_count().to_string())),
            ("Number of Files", p.red(&document.file_count().to_string())),
            (
                "Number of Relationships",
                p.red(&document.relationship_count().to_string()),
            ),
        ]);
        rows
    }
}

impl ReportFormatter for MetaFormatter {
    /// The metadata table has a fixed set of rows; `limit` does not apply
    fn format(&self, document: &Document, _limit: Option<usize>) -> Result<String> {
        let mut table = Table::new(["#", "Key", "Value"]);
        for (idx, (key, value)) in self.rows(document).into_iter().enumerate() {
            table.add_row(vec![(idx + 1).to_string(), self.palette.blue(key), value]);
        }
        Ok(table.render())
    }
}
