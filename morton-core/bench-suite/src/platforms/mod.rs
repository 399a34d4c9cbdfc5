/// A measurement result from a benchmark.
#[derive(Clone, Copy)]
pub struct Measurement {
    /// Elapsed time in microseconds.
    pub micros: f64,
}

/// A trait that abstracts the host platform's timing and output.
///
/// The suite only targets hosted environments; the trait keeps timing and
/// printing out of the measurement loops.
pub trait BenchmarkHost {
    /// The type representing a point in time.
    type TimePoint: Copy;

    /// Returns the current time point.
    fn now() -> Self::TimePoint;

    /// Calculates the duration between `start` and now.
    fn measure(start: Self::TimePoint) -> Measurement;

    /// Prints a string to the platform's standard output.
    fn print(s: &str);

    /// Returns a human-readable name of the platform.
    fn platform_name() -> &'static str;
}

mod native;
pub use native::Platform;
