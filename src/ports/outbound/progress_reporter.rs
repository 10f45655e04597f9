/// ProgressReporter port for user-facing progress during a scan
///
/// This port keeps the use case independent of the console: the CLI wires
/// in a stderr reporter, tests wire in a capturing mock.
pub trait ProgressReporter {
    /// Reports a one-line status message (e.g. "Scanning ./model...")
    fn report(&self, message: &str);

    /// Reports merge progress over the discovered source files
    ///
    /// # Arguments
    /// * `current` - Files merged so far
    /// * `total` - Files discovered
    /// * `message` - Optional detail, typically the current file name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem, such as a source file that had to be
    /// skipped
    fn report_warning(&self, message: &str);

    /// Reports an error that ends the current operation
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
