use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::debug;

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' timed out after {timeout_seconds} seconds")]
    Timeout {
        command: String,
        timeout_seconds: u64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration for command execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Working directory for command execution
    pub working_directory: Option<PathBuf>,

    /// Timeout for command execution in seconds; `None` waits indefinitely
    pub timeout_seconds: Option<u64>,
}

impl ExecutionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }
}

/// A program invocation: executable, arguments and execution settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub config: ExecutionConfig,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            config: ExecutionConfig::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.working_directory = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, absent when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: exit_code == 0,
        }
    }

    pub fn success() -> Self {
        Self::new(0, "", "")
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::new(exit_code, "", stderr)
    }
}

impl From<Output> for ExecutionResult {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        }
    }
}

/// Runs external commands to completion.
///
/// Implementations block the caller until the process exits (or its timeout
/// elapses); they never run two commands at once.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError>;
}

/// Command executor for running external processes
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for CommandExecutor {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError> {
        let mut cmd = TokioCommand::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &command.config.working_directory {
            cmd.current_dir(dir);
        }

        debug!("Running `{}`", command);

        let child = cmd.spawn().map_err(|source| CommandExecutorError::SpawnFailed {
            program: command.program.clone(),
            source,
        })?;

        // Dropping the child on timeout kills it
        let output = match command.config.timeout_seconds {
            Some(timeout_secs) => timeout(Duration::from_secs(timeout_secs), child.wait_with_output())
                .await
                .map_err(|_| CommandExecutorError::Timeout {
                    command: command.to_string(),
                    timeout_seconds: timeout_secs,
                })??,
            None => child.wait_with_output().await?,
        };

        let result = ExecutionResult::from(output);
        debug!("`{}` exited with {:?}", command, result.exit_code);
        Ok(result)
    }
}
