//! Mapping of the child's exit status onto the proxy's exit code

use std::process::ExitStatus;

/// Exit code used when the child could not be started or waited on
pub const FAILURE_CODE: i32 = 1;

/// How the child terminated, reduced to the code bypassh exits with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    code: i32,
}

impl ChildExit {
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self { code };
        }

        // Killed by a signal: report it the way shells do
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self { code: 128 + signal };
            }
        }

        Self { code: FAILURE_CODE }
    }
}
