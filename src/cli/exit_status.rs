use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): every file synchronized, including "no changes needed"
///   outcomes; missing-translation warnings do not affect the exit code
/// - `Error` (1): a path did not exist or a read/write failed; the run
///   aborts at the first failure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
