//! External command execution with a bounded wait
//!
//! Window-manager and PCI queries shell out to tools that may be missing,
//! fail, or hang. [`SystemRunner`] turns all three into a [`RunError`].

use std::io::{ErrorKind, Read};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why a command produced no usable output
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },

    #[error("{program} timed out after {millis}ms")]
    TimedOut { program: String, millis: u128 },

    #[error("I/O error running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs a program and returns its stdout
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, RunError>;
}

/// Spawns real processes, killing them once `timeout` elapses
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, RunError> {
        let io_err = |source: std::io::Error| RunError::Io {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => RunError::NotFound(program.to_string()),
                _ => io_err(err),
            })?;

        // Drain stdout on a helper thread so a chatty child cannot block on a full pipe.
        let stdout_handle = child.stdout.take().map(|mut stream| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stream.read_to_end(&mut buf);
                buf
            })
        });

        let started = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait().map_err(io_err)? {
                break status;
            }

            if started.elapsed() >= self.timeout {
                let _ = child.kill();
                let _ = child.wait();
                if let Some(handle) = stdout_handle {
                    let _ = handle.join();
                }
                return Err(RunError::TimedOut {
                    program: program.to_string(),
                    millis: self.timeout.as_millis(),
                });
            }

            std::thread::sleep(Duration::from_millis(10));
        };

        let stdout = stdout_handle
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();

        if !status.success() {
            return Err(RunError::Failed {
                program: program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{CommandRunner, RunError};
    use std::collections::HashMap;

    /// Canned outputs keyed by program name; anything else is "not found"
    #[derive(Default)]
    pub(crate) struct FakeRunner {
        outputs: HashMap<String, Result<String, String>>,
    }

    impl FakeRunner {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_output(mut self, program: &str, stdout: &str) -> Self {
            self.outputs
                .insert(program.to_string(), Ok(stdout.to_string()));
            self
        }

        pub(crate) fn with_failure(mut self, program: &str) -> Self {
            self.outputs
                .insert(program.to_string(), Err("exit status: 1".to_string()));
            self
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, _args: &[&str]) -> Result<String, RunError> {
            match self.outputs.get(program) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(status)) => Err(RunError::Failed {
                    program: program.to_string(),
                    status: status.clone(),
                }),
                None => Err(RunError::NotFound(program.to_string())),
            }
        }
    }
}
