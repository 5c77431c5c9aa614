use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::application::use_cases::{
    CloneRepositoriesUseCase, ConnectivityCheckUseCase, OperationReport, PullRepositoriesUseCase,
    PurgeRepositoriesUseCase, SwitchBranchesConfig, SwitchBranchesUseCase,
};
use crate::common::config::{AnvilConfig, DEFAULT_SSH_HOST, DEFAULT_SSH_TIMEOUT_SECS};
use crate::common::logging::LogConfig;
use crate::common::result::AnvilResult;
use crate::domain::entities::workspace::Workspace;
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::process::{CommandExecutor, CommandRunner};
use crate::infrastructure::scm::GitScm;
use crate::infrastructure::ssh::SshProbe;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")\ntarget: ",
    env!("BUILD_TARGET")
);

/// anvil - clone, pull, switch and purge the repositories listed in repositories.txt
#[derive(Parser, Debug)]
#[command(name = "anvil")]
#[command(about = "Helper tool for managing a local mirror of git repositories")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// git executable
    #[arg(long, global = true, env = "ANVIL_GIT", default_value = "git")]
    pub git: String,

    /// ssh executable used for the connectivity check
    #[arg(long, global = true, env = "ANVIL_SSH", default_value = "ssh")]
    pub ssh: String,

    /// Host probed by the connectivity check
    #[arg(long, global = true, env = "ANVIL_SSH_HOST", default_value = DEFAULT_SSH_HOST)]
    pub ssh_host: String,

    /// Seconds to wait for the connectivity check
    #[arg(long, global = true, env = "ANVIL_SSH_TIMEOUT", default_value_t = DEFAULT_SSH_TIMEOUT_SECS)]
    pub ssh_timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Clone repositories
    Clone,

    /// Pull repositories
    Pull,

    /// Purge repositories
    Purge,

    /// Switch all repositories to main
    Switch {
        /// Branch to try, in order (defaults to main, then master)
        #[arg(short, long = "branch", value_name = "BRANCH")]
        branches: Vec<BranchName>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Clone => "clone",
            Self::Pull => "pull",
            Self::Purge => "purge",
            Self::Switch { .. } => "switch",
        }
    }
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.cli.verbose)
            .with_ansi(!self.cli.no_color && console::colors_enabled_stderr())
    }

    pub fn config(&self) -> AnvilConfig {
        AnvilConfig::default()
            .with_git_executable(&self.cli.git)
            .with_ssh_executable(&self.cli.ssh)
            .with_ssh_host(&self.cli.ssh_host)
            .with_ssh_timeout_secs(self.cli.ssh_timeout)
    }

    pub fn workspace(&self) -> anyhow::Result<Workspace> {
        let base_dir = match &self.cli.directory {
            Some(dir) => dir.clone(),
            None => env::current_dir()?,
        };
        Ok(Workspace::new(base_dir))
    }

    /// Install logging, then run the selected command
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        self.log_config().init()?;

        let runner: Arc<dyn CommandRunner> = Arc::new(CommandExecutor::new());
        let success = self.execute(runner).await?;

        Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Run the connectivity check and the selected command with `runner`.
    ///
    /// Returns whether the command fully succeeded.
    pub async fn execute(&self, runner: Arc<dyn CommandRunner>) -> anyhow::Result<bool> {
        debug!("Arguments: {:?}", self.cli);

        let config = self.config();
        let workspace = self.workspace()?;

        let probe = SshProbe::new(runner.clone(), &config.ssh_host, config.ssh_timeout_secs)
            .with_executable(&config.ssh_executable);
        ConnectivityCheckUseCase::new(probe).execute().await;

        let result = self.dispatch(workspace, &config, runner).await;
        Ok(self.conclude(result))
    }

    async fn dispatch(
        &self,
        workspace: Workspace,
        config: &AnvilConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> AnvilResult<OperationReport> {
        let git = GitScm::new(runner).with_executable(&config.git_executable);

        match &self.cli.command {
            Commands::Clone => CloneRepositoriesUseCase::new(workspace, git).execute().await,
            Commands::Pull => PullRepositoriesUseCase::new(workspace, git).execute().await,
            Commands::Purge => PurgeRepositoriesUseCase::new(workspace).execute().await,
            Commands::Switch { branches } => {
                let switch_config =
                    SwitchBranchesConfig::default().with_candidates(branches.clone());
                SwitchBranchesUseCase::new(workspace, git, switch_config)
                    .execute()
                    .await
            }
        }
    }

    /// Log the outcome and collapse it to a single success flag
    fn conclude(&self, result: AnvilResult<OperationReport>) -> bool {
        let command = self.cli.command.name();

        match result {
            Ok(report) => {
                if !report.entries.is_empty() {
                    info!(
                        "{} finished: {} succeeded, {} failed, {} skipped",
                        command,
                        report.succeeded_count(),
                        report.failed_count(),
                        report.skipped_count()
                    );
                }
                if !report.is_success() {
                    error!("{} failed for: {}", command, report.failed_names().join(", "));
                }
                report.is_success()
            }
            Err(e) => {
                error!("Error: {}", e.report());
                false
            }
        }
    }
}
