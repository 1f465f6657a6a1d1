use crate::adapters::outbound::formatters::{
    DigFormatter, FilesFormatter, MetaFormatter, Palette, PackageIpFormatter, PackagesFormatter,
    RelationshipsFormatter,
};
use crate::application::dto::Query;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the formatter of each
/// query, following the Factory Pattern. It belongs in the application layer
/// as it orchestrates the selection of infrastructure adapters based on
/// application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified query
    ///
    /// # Arguments
    /// * `query` - The report to create a formatter for
    /// * `palette` - Colors used by the formatter
    ///
    /// # Examples
    /// ```
    /// use spdx_sq::adapters::outbound::formatters::Palette;
    /// use spdx_sq::application::dto::Query;
    /// use spdx_sq::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(Query::Dig, Palette::plain());
    /// ```
    pub fn create(query: Query, palette: Palette) -> Box<dyn ReportFormatter> {
        match query {
            Query::Meta => Box::new(MetaFormatter::new(palette)),
            Query::Files => Box::new(FilesFormatter::new(palette)),
            Query::Packages => Box::new(PackagesFormatter::new(palette)),
            Query::PackageIp => Box::new(PackageIpFormatter::new(palette)),
            Query::Relationships => Box::new(RelationshipsFormatter::new(palette)),
            Query::Dig => Box::new(DigFormatter::new(palette)),
        }
    }
}
