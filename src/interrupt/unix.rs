//! SIGINT forwarding for Unix

use std::io;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::InterruptTarget;

/// Delivers `SIGINT` to the child
pub struct SigintTarget;

impl InterruptTarget for SigintTarget {
    fn deliver_interrupt(&self, pid: u32) -> io::Result<()> {
        let pid = libc::pid_t::try_from(pid)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"))?;

        // SAFETY: kill only takes plain integers.
        let rc = unsafe { libc::kill(pid, libc::SIGINT) };
        if rc == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

pub(super) fn spawn_listener(tx: mpsc::UnboundedSender<()>) -> io::Result<JoinHandle<()>> {
    let mut interrupts = signal(SignalKind::interrupt())?;

    Ok(tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            debug!("received SIGINT");
            if tx.send(()).is_err() {
                break;
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_out_of_range() {
        let err = SigintTarget.deliver_interrupt(u32::MAX).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_process() {
        // Above any configurable pid_max
        assert!(SigintTarget.deliver_interrupt(i32::MAX as u32).is_err());
    }
}
