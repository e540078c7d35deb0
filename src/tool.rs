//! Blocking execution of external tools (ffmpeg, ffprobe).
//!
//! Every invocation is a scoped spawn -> wait -> collect. Nothing is kept
//! between calls and there is no timeout.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::{Error, Result};

/// How the child's output streams are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// stdout and stderr are captured into separate buffers.
    Separate,
    /// stderr is captured and appended to stdout.
    Merged,
    /// The child writes straight to our terminal; nothing is captured.
    Inherit,
}

/// Output captured from a tool execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A program plus its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl Into<OsString>) -> &mut Self {
        self.args.push(s.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl Into<OsString>>) -> &mut Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments exactly as they are handed to the process; paths are not
    /// re-encoded.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Short name used in error messages ("ffmpeg" for "/usr/bin/ffmpeg").
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Something that can run a [`ToolCommand`] to completion.
pub trait ToolRunner {
    /// Run the command and wait for it to exit.
    ///
    /// A non-zero exit is NOT an error here; callers inspect
    /// [`ToolOutput::code`] and decide.
    fn run(&self, cmd: &ToolCommand, capture: Capture) -> Result<ToolOutput>;
}

/// Runs commands with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, cmd: &ToolCommand, capture: Capture) -> Result<ToolOutput> {
        tracing::debug!("running: {cmd}");

        let tool = cmd.tool_name();
        let spawn_err = |e: std::io::Error| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(&tool)
            } else {
                Error::tool_failed(&tool, format!("failed to run: {e}"))
            }
        };

        let mut command = Command::new(cmd.program());
        command.args(cmd.get_args());

        if capture == Capture::Inherit {
            let status = command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_err)?;
            return Ok(ToolOutput {
                code: status.code(),
                ..ToolOutput::default()
            });
        }

        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(spawn_err)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let out = match capture {
            Capture::Merged => ToolOutput {
                code: output.status.code(),
                stdout: stdout + &stderr,
                stderr: String::new(),
            },
            _ => ToolOutput {
                code: output.status.code(),
                stdout,
                stderr,
            },
        };
        tracing::debug!("{tool} exited with {:?}", out.code);
        Ok(out)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let mut cmd = ToolCommand::new("ffmpeg");
        cmd.arg("-i").args(["in.mp4", "out.mp4"]);
        assert_eq!(cmd.to_string(), "ffmpeg -i in.mp4 out.mp4");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arguments_are_kept_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/clip\xff.mp4");
        let mut cmd = ToolCommand::new("ffprobe");
        cmd.arg(raw);
        assert_eq!(cmd.get_args()[0].as_bytes(), b"/tmp/clip\xff.mp4");
    }

    #[test]
    fn tool_name_strips_directory() {
        let cmd = ToolCommand::new("/usr/local/bin/ffprobe");
        assert_eq!(cmd.tool_name(), "ffprobe");
    }

    #[test]
    fn nonexistent_tool_is_not_found() {
        let result = SystemRunner.run(
            &ToolCommand::new("nonexistent_tool_xyz_12345"),
            Capture::Separate,
        );
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn merged_capture_appends_stderr() {
        let mut cmd = ToolCommand::new("sh");
        cmd.args(["-c", "echo out; echo err 1>&2"]);
        let out = SystemRunner.run(&cmd, Capture::Merged).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "out\nerr\n");
        assert!(out.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn separate_capture_reports_exit_code() {
        let mut cmd = ToolCommand::new("sh");
        cmd.args(["-c", "echo err 1>&2; exit 3"]);
        let out = SystemRunner.run(&cmd, Capture::Separate).unwrap();
        assert_eq!(out.code, Some(3));
        assert!(!out.success());
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr.trim(), "err");
    }
}
