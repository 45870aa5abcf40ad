// SPDX-License-Identifier: PMPL-1.0-or-later

//! Child process execution for the metadata command

use super::CollectError;
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

pub(crate) struct RunOutput {
    pub stdout: String,
    pub status: ExitStatus,
    pub timed_out: bool,
}

/// Run `program args...` with stdin closed and stdout captured.
///
/// Stderr is inherited so the tool's own messages reach the terminal. The child
/// is always reaped before returning, including after a timeout kill or a
/// failed status poll. With a timeout, output still buffered in the pipe after
/// the deadline is dropped.
pub(crate) fn run(
    program: &str,
    args: &[String],
    timeout: Option<Duration>,
) -> Result<RunOutput, CollectError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| CollectError::Launch {
            program: program.to_string(),
            source,
        })?;

    let Some(limit) = timeout else {
        let output = child.wait_with_output()?;
        return Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: output.status,
            timed_out: false,
        });
    };

    let Some(mut pipe) = child.stdout.take() else {
        reap(&mut child);
        return Err(io::Error::new(io::ErrorKind::Other, "stdout was not captured").into());
    };

    // Drain stdout off-thread in chunks so a full pipe cannot stall the child and a
    // grandchild holding the pipe open cannot hold us past the deadline.
    let (tx, rx) = mpsc::channel::<io::Result<Vec<u8>>>();
    thread::spawn(move || {
        let mut buf = [0u8; 8192];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(Ok(buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    let _ = tx.send(Err(err));
                    break;
                }
            }
        }
    });

    let deadline = Instant::now() + limit;
    let mut stdout = Vec::new();
    let mut drained = false;
    let mut timed_out = false;

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(err) => {
                reap(&mut child);
                return Err(err.into());
            }
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            timed_out = true;
            break child.wait()?;
        }
        if drained {
            thread::sleep(POLL_INTERVAL);
        } else if let Err(err) = receive(&rx, &mut stdout, &mut drained, POLL_INTERVAL) {
            reap(&mut child);
            return Err(err.into());
        }
    };

    if timed_out {
        // Keep what already arrived; do not wait on the pipe any further.
        while let Ok(chunk) = rx.try_recv() {
            stdout.extend(chunk?);
        }
    } else {
        while !drained {
            let now = Instant::now();
            if now >= deadline {
                timed_out = true;
                break;
            }
            receive(&rx, &mut stdout, &mut drained, deadline - now)?;
        }
    }

    Ok(RunOutput {
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        status,
        timed_out,
    })
}

/// Wait up to `wait` for one chunk from the reader thread.
fn receive(
    rx: &mpsc::Receiver<io::Result<Vec<u8>>>,
    stdout: &mut Vec<u8>,
    drained: &mut bool,
    wait: Duration,
) -> io::Result<()> {
    match rx.recv_timeout(wait) {
        Ok(chunk) => stdout.extend(chunk?),
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => *drained = true,
    }
    Ok(())
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
