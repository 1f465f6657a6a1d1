/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr) so they never mix with the
/// report itself.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);
}
