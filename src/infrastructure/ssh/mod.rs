//! SSH connectivity probe.

use crate::infrastructure::process::{
    CommandExecutorError, CommandRunner, CommandSpec, ExecutionConfig, ExecutionResult,
};
use std::sync::Arc;

/// Runs `ssh -T <host>` with a bounded wait.
///
/// Hosting services answer `ssh -T` with a greeting on stderr and a non-zero
/// exit code even when authentication succeeds, so the result is returned as
/// is and interpretation is left to the caller.
pub struct SshProbe {
    ssh_executable: String,
    host: String,
    timeout_secs: u64,
    runner: Arc<dyn CommandRunner>,
}

impl SshProbe {
    pub fn new(runner: Arc<dyn CommandRunner>, host: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            ssh_executable: "ssh".to_string(),
            host: host.into(),
            timeout_secs,
            runner,
        }
    }

    /// Use a custom ssh executable path
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.ssh_executable = executable.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.ssh_executable)
            .args(["-T", self.host.as_str()])
            .with_config(ExecutionConfig::new().with_timeout(self.timeout_secs))
    }

    pub async fn probe(&self) -> Result<ExecutionResult, CommandExecutorError> {
        self.runner.run(&self.command()).await
    }
}
