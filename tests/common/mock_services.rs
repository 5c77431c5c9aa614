//! Mock services for testing
//!
//! A scripted command runner that records every invocation, so use cases can
//! be exercised without `git` or `ssh` installed.

use anvil::infrastructure::process::{
    CommandExecutorError, CommandRunner, CommandSpec, ExecutionResult,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// What the mock answers for a matching command
#[derive(Debug, Clone)]
pub enum MockResponse {
    Finished(ExecutionResult),
    Timeout,
    SpawnFailure,
}

#[derive(Debug, Clone)]
struct Rule {
    command_contains: String,
    in_directory: Option<String>,
    response: MockResponse,
}

impl Rule {
    fn matches(&self, command: &CommandSpec) -> bool {
        if !command.to_string().contains(&self.command_contains) {
            return false;
        }
        match &self.in_directory {
            Some(name) => directory_name(command).as_deref() == Some(name.as_str()),
            None => true,
        }
    }
}

fn directory_name(command: &CommandSpec) -> Option<String> {
    command
        .config
        .working_directory
        .as_ref()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
}

/// Command runner answering from scripted rules; unmatched commands succeed
#[derive(Default)]
pub struct MockCommandRunner {
    rules: Mutex<Vec<Rule>>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl MockCommandRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer commands whose text contains `command_contains`
    pub fn respond_when(&self, command_contains: &str, response: MockResponse) {
        self.push_rule(command_contains, None, response);
    }

    /// Answer commands run inside a directory called `directory`
    pub fn respond_in(&self, directory: &str, command_contains: &str, response: MockResponse) {
        self.push_rule(command_contains, Some(directory.to_string()), response);
    }

    /// Fail matching commands with exit code 1 and `stderr`
    pub fn fail_when(&self, command_contains: &str, stderr: &str) {
        self.respond_when(
            command_contains,
            MockResponse::Finished(ExecutionResult::failure(1, stderr)),
        );
    }

    /// Fail matching commands run inside `directory`
    pub fn fail_in(&self, directory: &str, command_contains: &str, stderr: &str) {
        self.respond_in(
            directory,
            command_contains,
            MockResponse::Finished(ExecutionResult::failure(1, stderr)),
        );
    }

    fn push_rule(&self, command_contains: &str, in_directory: Option<String>, response: MockResponse) {
        self.rules.lock().unwrap().push(Rule {
            command_contains: command_contains.to_string(),
            in_directory,
            response,
        });
    }

    /// All recorded invocations, in order
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded invocations rendered as `command` or `command @dir`
    pub fn call_strings(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|command| match directory_name(command) {
                Some(dir) => format!("{} @{}", command, dir),
                None => command.to_string(),
            })
            .collect()
    }

    /// Recorded invocations of `program`
    pub fn calls_to(&self, program: &str) -> Vec<String> {
        self.call_strings()
            .into_iter()
            .filter(|call| call.starts_with(program))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError> {
        self.calls.lock().unwrap().push(command.clone());

        let response = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|rule| rule.matches(command))
            .map(|rule| rule.response.clone());

        match response {
            None => Ok(ExecutionResult::success()),
            Some(MockResponse::Finished(result)) => Ok(result),
            Some(MockResponse::Timeout) => Err(CommandExecutorError::Timeout {
                command: command.to_string(),
                timeout_seconds: command.config.timeout_seconds.unwrap_or_default(),
            }),
            Some(MockResponse::SpawnFailure) => Err(CommandExecutorError::SpawnFailed {
                program: command.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }),
        }
    }
}
