use super::local_repositories::{scan_root, NOT_A_DIRECTORY};
use super::report::OperationReport;
use crate::common::result::AnvilResult;
use crate::domain::entities::workspace::Workspace;
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::scm::GitScm;
use std::path::Path;
use tracing::{debug, error, info};

/// ブランチ切り替えの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchBranchesConfig {
    /// 順に試すブランチ候補（最初に成功したもので確定）
    pub candidates: Vec<BranchName>,
}

impl Default for SwitchBranchesConfig {
    fn default() -> Self {
        Self {
            candidates: BranchName::default_candidates(),
        }
    }
}

impl SwitchBranchesConfig {
    /// 候補を差し替える。空の場合は既定の候補のまま。
    pub fn with_candidates(mut self, candidates: Vec<BranchName>) -> Self {
        if !candidates.is_empty() {
            self.candidates = candidates;
        }
        self
    }
}

/// ローカルの全リポジトリを既定ブランチへ切り替えるユースケース
pub struct SwitchBranchesUseCase {
    workspace: Workspace,
    git: GitScm,
    config: SwitchBranchesConfig,
}

impl SwitchBranchesUseCase {
    pub fn new(workspace: Workspace, git: GitScm, config: SwitchBranchesConfig) -> Self {
        Self {
            workspace,
            git,
            config,
        }
    }

    pub async fn execute(&self) -> AnvilResult<OperationReport> {
        let names: Vec<&str> = self.config.candidates.iter().map(BranchName::as_str).collect();
        info!("Switching all repositories to {}...", names.join(" or "));

        let entries = scan_root(&self.workspace)?;

        let mut report = OperationReport::new();
        for entry in entries {
            info!("Switching repository {}", entry.name);

            if !entry.is_dir() {
                error!("Error: repository {} not found", entry.name);
                report.record_skipped(entry.name, NOT_A_DIRECTORY);
                continue;
            }

            match self.switch_repository(&entry.path).await {
                Ok(branch) => {
                    debug!("Switched {} to {}", entry.name, branch);
                    report.record_success(entry.name);
                }
                Err(diagnostic) => {
                    error!("Error switching {}: {}", entry.name, diagnostic);
                    report.record_failure(entry.name, diagnostic);
                }
            }
        }

        Ok(report)
    }

    /// 候補を順にチェックアウトし、成功したブランチを返す。
    /// 全て失敗した場合は最後の失敗内容を返す。
    async fn switch_repository(&self, repo_path: &Path) -> Result<&BranchName, String> {
        let mut last_error = String::from("no branch candidates configured");

        for branch in &self.config.candidates {
            match self.git.checkout(repo_path, branch).await {
                Ok(()) => return Ok(branch),
                Err(e) => {
                    last_error = e.diagnostic();
                    debug!("Checkout of {} failed: {}", branch, last_error);
                }
            }
        }

        Err(last_error)
    }
}
