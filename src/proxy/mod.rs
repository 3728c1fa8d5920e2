//! Child process proxy
//!
//! Runs the real ssh client with bypassh's own standard streams, forwards
//! every interrupt bypassh receives to it and reports how it exited.
//!
//! The lifecycle is encoded in the types: a [`ProxyCommand`] is started at
//! most once and becomes a [`RunningProxy`], which is consumed by waiting and
//! yields a [`ChildExit`].

mod exit;

use std::ffi::{OsStr, OsString};
use std::process::Stdio;

use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::{BypasshError, Result};
use crate::interrupt::{self, InterruptTarget};

pub use exit::{ChildExit, FAILURE_CODE};

/// A child command that has not been started yet
#[derive(Debug, Clone)]
pub struct ProxyCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ProxyCommand {
    pub fn new(program: impl Into<OsString>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Spawn the child with inherited stdin, stdout and stderr
    pub fn start(self) -> Result<RunningProxy> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| BypasshError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        debug!(pid = child.id(), "spawned {}", self.program.to_string_lossy());

        Ok(RunningProxy { child })
    }
}

/// A started child that is still owned by the proxy
#[derive(Debug)]
pub struct RunningProxy {
    child: Child,
}

impl RunningProxy {
    /// Wait for the child to exit, delivering one interrupt to it through
    /// `target` for every notification received on `interrupts`.
    pub async fn wait_forwarding(
        mut self,
        mut interrupts: mpsc::UnboundedReceiver<()>,
        target: &dyn InterruptTarget,
    ) -> Result<ChildExit> {
        let pid = self.child.id();

        let status = loop {
            tokio::select! {
                status = self.child.wait() => break status.map_err(BypasshError::Wait)?,
                Some(()) = interrupts.recv() => {
                    let Some(pid) = pid else { continue };
                    match target.deliver_interrupt(pid) {
                        Ok(()) => debug!(pid, "forwarded interrupt"),
                        Err(e) => warn!(pid, "cannot forward interrupt: {}", e),
                    }
                }
            }
        };

        debug!(?status, "child exited");
        Ok(ChildExit::from(status))
    }
}

/// Start `command`, forward interrupts to it until it exits and return its
/// exit. The interrupt listener lives only as long as the wait.
pub async fn run(command: ProxyCommand) -> Result<ChildExit> {
    let running = command.start()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let listener = match interrupt::spawn_listener(tx) {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("interrupts will not be forwarded: {}", e);
            None
        }
    };

    let target = interrupt::platform_target();
    let result = running.wait_forwarding(rx, target.as_ref()).await;

    if let Some(listener) = listener {
        listener.abort();
    }

    result
}

/// Run `command` to completion on a fresh runtime and return the exit code
/// bypassh should terminate with.
pub fn run_blocking(command: ProxyCommand) -> Result<i32> {
    let runtime = tokio::runtime::Runtime::new().map_err(BypasshError::Runtime)?;

    let exit = runtime.block_on(run(command))?;
    Ok(exit.code())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sh(script: &str) -> ProxyCommand {
        ProxyCommand::new("sh", vec!["-c".into(), script.into()])
    }

    /// Counts interrupts and kills the child once `kill_at` is reached
    struct CountingTarget {
        delivered: AtomicUsize,
        kill_at: usize,
    }

    impl InterruptTarget for CountingTarget {
        fn deliver_interrupt(&self, pid: u32) -> std::io::Result<()> {
            let n = self.delivered.fetch_add(1, Ordering::SeqCst) + 1;
            if n == self.kill_at {
                unsafe {
                    libc::kill(pid as libc::pid_t, libc::SIGKILL);
                }
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_exit_code_propagated() {
        let exit = run(sh("exit 42")).await.unwrap();
        assert_eq!(exit.code(), 42);
    }

    #[tokio::test]
    async fn test_successful_child() {
        let exit = run(ProxyCommand::new("true", Vec::new())).await.unwrap();
        assert_eq!(exit.code(), 0);
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let command = ProxyCommand::new("/nonexistent/bypassh-test-binary", Vec::new());

        let err = command.start().unwrap_err();
        assert!(matches!(err, BypasshError::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/bypassh-test-binary"));
    }

    #[test]
    fn test_run_blocking_spawn_failure() {
        let command = ProxyCommand::new("/nonexistent/bypassh-test-binary", Vec::new());
        assert!(run_blocking(command).is_err());
    }

    #[test]
    fn test_run_blocking_exit_code() {
        assert_eq!(run_blocking(sh("exit 3")).unwrap(), 3);
    }

    #[tokio::test]
    async fn test_each_interrupt_forwarded_once() {
        let target = CountingTarget {
            delivered: AtomicUsize::new(0),
            kill_at: 3,
        };
        let running = ProxyCommand::new("sleep", vec!["30".into()]).start().unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        for _ in 0..3 {
            tx.send(()).unwrap();
        }

        let exit = running.wait_forwarding(rx, &target).await.unwrap();

        assert_eq!(target.delivered.load(Ordering::SeqCst), 3);
        assert_eq!(exit.code(), 128 + libc::SIGKILL);
    }

    #[tokio::test]
    async fn test_closed_interrupt_channel_still_waits() {
        let target = CountingTarget {
            delivered: AtomicUsize::new(0),
            kill_at: usize::MAX,
        };
        let running = sh("exit 5").start().unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        drop(tx);

        let exit = running.wait_forwarding(rx, &target).await.unwrap();

        assert_eq!(exit.code(), 5);
        assert_eq!(target.delivered.load(Ordering::SeqCst), 0);
    }
}
