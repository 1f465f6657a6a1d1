use super::palette::Palette;
use super::table::Table;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::spdx::domain::{Document, RelationshipKind};

/// RelationshipsFormatter adapter rendering the raw relationship list
///
/// Identifiers are shown as written in the document; only the type column
/// is colored by relationship kind.
pub struct RelationshipsFormatter {
    palette: Palette,
}

impl RelationshipsFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn colorize_type(&self, relationship_type: &str) -> String {
        match RelationshipKind::from_type(relationship_type) {
            RelationshipKind::Describes => self.palette.red(relationship_type),
            RelationshipKind::Contains => self.palette.blue(relationship_type),
            RelationshipKind::DependsOn => self.palette.yellow(relationship_type),
            RelationshipKind::GeneratedFrom => self.palette.green(relationship_type),
            RelationshipKind::Other => self.palette.gray(relationship_type),
        }
    }
}

impl ReportFormatter for RelationshipsFormatter {
    fn format(&self, document: &Document, limit: Option<usize>) -> Result<String> {
        let total = document.relationship_count();
        if total == 0 {
            return Ok(String::new());
        }
        let count = limit.map_or(total, |n| n.min(total));

        let mut table = Table::new([
            "#",
            "SpdxElementID",
            "RelationshipType",
            "RelatedSpdxElement",
        ]);
        for (idx, rel) in document.relationships.iter().take(count).enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                rel.spdx_element_id.clone(),
                self.colorize_type(&rel.relationship_type),
                rel.related_spdx_element.clone(),
            ]);
        }
        table.set_footer(
            self.palette
                .blue(&format!("There are {} relationships", total)),
        );

        Ok(table.render())
    }
}
