//! Console control event forwarding for Windows

use std::io;

use tokio::signal::windows::{ctrl_break, ctrl_c};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;
use windows::Win32::System::Console::{GenerateConsoleCtrlEvent, CTRL_BREAK_EVENT};

use super::InterruptTarget;

/// Delivers `CTRL_BREAK_EVENT` addressed to the child pid
pub struct CtrlBreakTarget;

impl InterruptTarget for CtrlBreakTarget {
    fn deliver_interrupt(&self, pid: u32) -> io::Result<()> {
        // SAFETY: no pointers are passed.
        unsafe { GenerateConsoleCtrlEvent(CTRL_BREAK_EVENT, pid) }.map_err(io::Error::other)
    }
}

pub(super) fn spawn_listener(tx: mpsc::UnboundedSender<()>) -> io::Result<JoinHandle<()>> {
    let mut ctrl_c = ctrl_c()?;
    let mut ctrl_break = ctrl_break()?;

    Ok(tokio::spawn(async move {
        loop {
            let received = tokio::select! {
                r = ctrl_c.recv() => r,
                r = ctrl_break.recv() => r,
            };
            if received.is_none() {
                break;
            }

            debug!("received console interrupt");
            if tx.send(()).is_err() {
                break;
            }
        }
    }))
}
