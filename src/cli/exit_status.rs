use std::process::ExitCode;

/// Exit status for the docskim CLI, following common conventions for
/// linter-style tools.
///
/// - `Success` (0): Report was printed (possibly for zero matched headers)
/// - `Usage` (1): Directory argument missing or not a directory
/// - `Error` (2): Run aborted by an internal error (unreadable file, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report was printed, even if no header matched the glob.
    Success,
    /// Directory argument missing or not a directory; usage was printed.
    Usage,
    /// Run aborted by an internal error (unreadable file, bad encoding).
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
