//! Bounded process execution.

use std::ffi::OsStr;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use wait_timeout::ChildExt;

/// Result of running a command to completion with captured output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// First non-empty line of stdout, falling back to stderr.
    pub fn first_line(&self) -> Option<&str> {
        let out = self.stdout.trim();
        let text = if out.is_empty() {
            self.stderr.trim()
        } else {
            out
        };
        text.lines().next().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Run `program` with `args`, capturing output, for at most `timeout`.
///
/// Stdin is closed. The deadline covers both the child's exit and the
/// collection of its output: a child still running at the deadline is
/// killed and reaped, and a pipe held open past it by a descendant is
/// abandoned. Either way the call fails.
pub fn execute_captured<S: AsRef<OsStr>>(
    program: &OsStr,
    args: &[S],
    timeout: Duration,
) -> anyhow::Result<CommandResult> {
    let deadline = Instant::now() + timeout;
    let display = program.to_string_lossy().into_owned();

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawn {}", display))?;

    let (tx, rx) = mpsc::channel();
    drain(Stream::Stdout, child.stdout.take(), tx.clone());
    drain(Stream::Stderr, child.stderr.take(), tx);

    let status = match child
        .wait_timeout(timeout)
        .with_context(|| format!("wait for {}", display))?
    {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            bail!("{} timed out after {:?}", display, timeout);
        }
    };

    let mut stdout = String::new();
    let mut stderr = String::new();
    for _ in 0..2 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, text)) => stdout = text,
            Ok((Stream::Stderr, text)) => stderr = text,
            Err(_) => bail!("{} output still open after {:?}", display, timeout),
        }
    }

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        success: status.success(),
    })
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Read a child pipe to the end on its own thread and send the text back.
fn drain<R: Read + Send + 'static>(
    stream: Stream,
    pipe: Option<R>,
    tx: mpsc::Sender<(Stream, String)>,
) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).into_owned()));
    });
}

/// Ask a child to stop without waiting for it.
///
/// Sends SIGTERM on unix and falls back to a hard kill elsewhere. Errors
/// are ignored.
pub fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: kill(2) with a pid we spawned and a constant signal has no memory effects
            let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
            if rc != 0 {
                tracing::debug!("SIGTERM to {} failed", pid);
            }
            let _ = child.try_wait();
            return;
        }
    }
    let _ = child.kill();
}
