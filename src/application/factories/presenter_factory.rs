use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Presenter for an optional `--output` path
    pub fn for_output(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
///
/// Reports go to stdout unless an output file was requested.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Arguments
    /// * `presenter_type` - The type of presenter to create
    ///
    /// # Examples
    /// ```
    /// use spdx_sq::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_file_presenter_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));

        presenter.present("Root: doc DESCRIBES app\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Root: doc DESCRIBES app\n"
        );
    }

    #[test]
    fn test_presenter_type_for_output() {
        assert_eq!(PresenterType::for_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::for_output(Some(PathBuf::from("out.txt"))),
            PresenterType::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_presenter_type_equality() {
        let stdout1 = PresenterType::Stdout;
        let stdout2 = PresenterType::Stdout;
        assert_eq!(stdout1, stdout2);

        let file1 = PresenterType::File(PathBuf::from("/tmp/report1.txt"));
        let file2 = PresenterType::File(PathBuf::from("/tmp/report1.txt"));
        assert_eq!(file1, file2);

        let file3 = PresenterType::File(PathBuf::from("/tmp/report2.txt"));
        assert_ne!(file1, file3);
    }

    #[test]
    fn test_presenter_type_clone() {
        let original = PresenterType::File(PathBuf::from("/tmp/report.txt"));
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
