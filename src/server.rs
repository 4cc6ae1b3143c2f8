//! Preview file server lifecycle.
//!
//! Serving HTTP is delegated to an external program — `python3 -m
//! http.server`, present on effectively every development machine — and
//! this module is only the spawn/wait wrapper around it:
//!
//! ```text
//! python3 -m http.server 8000 --directory <dir>
//! ```
//!
//! [`FileServer::serve`] blocks until the child exits (normally when the
//! operator interrupts it) and maps the child's exit status onto the
//! wrapper's own result, so the process exit code reflects whether
//! shutdown succeeded. There is no lifecycle management beyond that: no
//! daemonizing, no pidfiles, no restart logic.

use std::io;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Fixed preview port.
pub const DEFAULT_PORT: u16 = 8000;

const SERVER_PROGRAM: &str = "python3";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("File server program not found: {0}")]
    Unavailable(String),
    #[error("Directory to serve not found: {0}")]
    MissingDir(PathBuf),
    #[error("File server exited with {0}")]
    Failed(std::process::ExitStatus),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A not-yet-started preview server for one directory.
pub struct FileServer {
    pub dir: PathBuf,
    pub port: u16,
    program: String,
}

impl FileServer {
    /// Server for `dir` on the fixed default port.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            port: DEFAULT_PORT,
            program: SERVER_PROGRAM.to_string(),
        }
    }

    /// Substitute the server program (tests use stub executables).
    #[cfg(test)]
    fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Spawn the server and block until it exits.
    ///
    /// A missing program or directory is a configuration error reported
    /// before spawning; a non-success exit status (including one caused by
    /// the port being taken) is [`ServerError::Failed`].
    pub fn serve(&self) -> Result<(), ServerError> {
        if !self.dir.is_dir() {
            return Err(ServerError::MissingDir(self.dir.clone()));
        }

        let spawned = Command::new(&self.program)
            .arg("-m")
            .arg("http.server")
            .arg(self.port.to_string())
            .arg("--directory")
            .arg(&self.dir)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ServerError::Unavailable(self.program.clone()));
            }
            Err(e) => return Err(ServerError::Io(e)),
        };

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ServerError::Failed(status))
        }
    }
}
