/// Port for step-by-step status reporting.
pub trait ProgressSink {
    /// Begin a new step; an unfinished previous step is considered done.
    fn step(&self, message: &str);

    /// Mark the current step as failed.
    fn fail(&self);

    /// Mark the current step as completed.
    fn done(&self);
}
