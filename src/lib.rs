//! spdx-sq - query tool for SPDX JSON documents
//!
//! This library loads an SPDX 2.x JSON document and answers fixed queries
//! over it: a metadata summary, flat listings of files, packages and
//! relationships, and a "dig" report that walks the relationship graph from
//! its DESCRIBES roots down to the files each element owns. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`spdx`): Document model, identifier resolution,
//!   relationship classification and the graph walk
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use spdx_sq::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RunQueryUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = QueryRequest::new(PathBuf::from("sbom.spdx.json"), Query::Dig, None, false);
//! let response = use_case.execute(request)?;
//!
//! StdoutPresenter::new().present(&response.content)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod spdx;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        DigFormatter, FilesFormatter, MetaFormatter, PackageIpFormatter, PackagesFormatter,
        Palette, RelationshipsFormatter,
    };
    pub use crate::application::dto::{Query, QueryRequest, QueryResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::RunQueryUseCase;
    pub use crate::ports::outbound::{
        DocumentReader, OutputPresenter, ProgressReporter, ReportFormatter, SbomLocator,
    };
    pub use crate::shared::error::{ExitCode, SqError};
    pub use crate::shared::Result;
    pub use crate::spdx::domain::{
        Checksum, CreationInfo, Document, File, Package, Relationship, RelationshipKind,
    };
    pub use crate::spdx::services::{
        DependencyDigger, DigReport, IdentifierResolver, RelationshipClassifier,
    };
}
