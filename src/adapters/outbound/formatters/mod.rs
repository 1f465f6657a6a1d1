/// Formatter adapters for the query reports
mod dig_formatter;
mod files_formatter;
mod meta_formatter;
mod packages_formatter;
mod palette;
mod relationships_formatter;
mod table;

pub use dig_formatter::DigFormatter;
pub use files_formatter::FilesFormatter;
pub use meta_formatter::MetaFormatter;
pub use packages_formatter::{PackageIpFormatter, PackagesFormatter};
pub use palette::Palette;
pub use relationships_formatter::RelationshipsFormatter;
pub use table::{visible_width, Table};
