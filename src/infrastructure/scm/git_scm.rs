use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::process::{
    CommandExecutorError, CommandRunner, CommandSpec, ExecutionResult,
};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum ScmError {
    #[error("Command execution failed: {command}, exit code: {exit_code:?}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error(transparent)]
    Execution(#[from] CommandExecutorError),

    #[error("Path is not valid UTF-8: {path}")]
    InvalidPath { path: String },
}

impl ScmError {
    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// The text worth showing to the operator: git's own stderr when the
    /// command ran, otherwise the error itself.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::CommandFailed { stderr, .. } => stderr.trim().to_string(),
            other => other.to_string(),
        }
    }
}

/// Git implementation of the repository operations, driving the `git` CLI
pub struct GitScm {
    git_executable: String,
    runner: Arc<dyn CommandRunner>,
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            git_executable: "git".to_string(),
            runner,
        }
    }

    /// Use a custom git executable path
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.git_executable = executable.into();
        self
    }

    /// Execute a git command and check for success
    async fn execute_git_command_checked(
        &self,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<ExecutionResult, ScmError> {
        let mut spec = CommandSpec::new(&self.git_executable).args(args.iter().copied());
        if let Some(dir) = working_dir {
            spec = spec.current_dir(dir);
        }

        let result = self.runner.run(&spec).await?;
        if !result.success {
            return Err(ScmError::command_failed(
                spec.to_string(),
                result.exit_code,
                result.stderr,
            ));
        }

        Ok(result)
    }

    /// `git clone <url> <dest>`
    pub async fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError> {
        let dest = dest_path.to_str().ok_or_else(|| ScmError::InvalidPath {
            path: dest_path.display().to_string(),
        })?;

        self.execute_git_command_checked(&["clone", url, dest], None)
            .await?;
        Ok(())
    }

    /// `git pull` inside the repository
    pub async fn pull(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["pull"], Some(repo_path))
            .await?;
        Ok(())
    }

    /// `git checkout <branch>` inside the repository
    pub async fn checkout(&self, repo_path: &Path, branch: &BranchName) -> Result<(), ScmError> {
        self.execute_git_command_checked(&["checkout", branch.as_str()], Some(repo_path))
            .await?;
        Ok(())
    }
}
