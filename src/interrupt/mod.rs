//! Interrupt forwarding to the proxied child process
//!
//! The listener turns interrupts received by bypassh into notifications on a
//! channel; an [`InterruptTarget`] delivers each one to the child using the
//! native mechanism of the platform.

#[cfg(not(any(unix, windows)))]
compile_error!("bypassh supports Unix and Windows only");

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

use std::io;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delivers an interrupt to a process
pub trait InterruptTarget: Send + Sync {
    /// Send one interrupt to the process with the given pid
    fn deliver_interrupt(&self, pid: u32) -> io::Result<()>;
}

/// Create the interrupt target for the current platform
pub fn platform_target() -> Box<dyn InterruptTarget> {
    #[cfg(unix)]
    {
        Box::new(unix::SigintTarget)
    }

    #[cfg(windows)]
    {
        Box::new(windows::CtrlBreakTarget)
    }
}

/// Start listening for interrupts sent to this process.
///
/// Every interrupt becomes one `()` on `tx`. Handlers are registered before
/// this returns; the task ends when the receiver is dropped or the handle is
/// aborted. Must be called from within a tokio runtime.
pub fn spawn_listener(tx: mpsc::UnboundedSender<()>) -> io::Result<JoinHandle<()>> {
    #[cfg(unix)]
    {
        unix::spawn_listener(tx)
    }

    #[cfg(windows)]
    {
        windows::spawn_listener(tx)
    }
}
