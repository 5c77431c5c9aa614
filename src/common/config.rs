/// Default host probed by the connectivity check
pub const DEFAULT_SSH_HOST: &str = "git@github.com";

/// Default time allowed for the connectivity probe, in seconds
pub const DEFAULT_SSH_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the external tools anvil drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnvilConfig {
    /// git executable
    pub git_executable: String,
    /// ssh executable
    pub ssh_executable: String,
    /// `user@host` used by `ssh -T`
    pub ssh_host: String,
    /// Upper bound on the connectivity probe
    pub ssh_timeout_secs: u64,
}

impl Default for AnvilConfig {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
            ssh_executable: "ssh".to_string(),
            ssh_host: DEFAULT_SSH_HOST.to_string(),
            ssh_timeout_secs: DEFAULT_SSH_TIMEOUT_SECS,
        }
    }
}

impl AnvilConfig {
    pub fn with_git_executable(mut self, executable: impl Into<String>) -> Self {
        self.git_executable = executable.into();
        self
    }

    pub fn with_ssh_executable(mut self, executable: impl Into<String>) -> Self {
        self.ssh_executable = executable.into();
        self
    }

    pub fn with_ssh_host(mut self, host: impl Into<String>) -> Self {
        self.ssh_host = host.into();
        self
    }

    pub fn with_ssh_timeout_secs(mut self, secs: u64) -> Self {
        self.ssh_timeout_secs = secs;
        self
    }
}
