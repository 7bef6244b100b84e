/// ProgressReporter port for reporting progress during a run
///
/// Implementations write to stderr so that stdout stays reserved for the report.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the selected probes
    ///
    /// # Arguments
    /// * `current` - Number of probes finished
    /// * `total` - Number of probes selected
    /// * `message` - Optional message, e.g. the probe being queried
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
