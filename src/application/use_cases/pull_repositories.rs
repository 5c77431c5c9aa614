use super::local_repositories::{scan_root, NOT_A_DIRECTORY};
use super::report::OperationReport;
use crate::common::result::AnvilResult;
use crate::domain::entities::workspace::Workspace;
use crate::infrastructure::scm::GitScm;
use tracing::{debug, error, info};

/// ローカルの全リポジトリで `git pull` を実行するユースケース
pub struct PullRepositoriesUseCase {
    workspace: Workspace,
    git: GitScm,
}

impl PullRepositoriesUseCase {
    pub fn new(workspace: Workspace, git: GitScm) -> Self {
        Self { workspace, git }
    }

    pub async fn execute(&self) -> AnvilResult<OperationReport> {
        info!("Pulling repositories...");

        let entries = scan_root(&self.workspace)?;

        let mut report = OperationReport::new();
        for entry in entries {
            info!("Pulling repository {}", entry.name);

            if !entry.is_dir() {
                error!("Error: repository {} not found", entry.name);
                report.record_skipped(entry.name, NOT_A_DIRECTORY);
                continue;
            }

            match self.git.pull(&entry.path).await {
                Ok(()) => {
                    debug!("Pulled {}", entry.name);
                    report.record_success(entry.name);
                }
                Err(e) => {
                    let diagnostic = e.diagnostic();
                    error!("Error pulling {}: {}", entry.name, diagnostic);
                    report.record_failure(entry.name, diagnostic);
                }
            }
        }

        Ok(report)
    }
}
