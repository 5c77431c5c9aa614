use super::report::OperationReport;
use crate::common::error::AnvilError;
use crate::common::result::{AnvilResult, ResultExt};
use crate::domain::entities::workspace::Workspace;
use crate::infrastructure::filesystem::{ManifestStore, ManifestStoreError};
use crate::infrastructure::scm::GitScm;
use tracing::{debug, error, info};

/// マニフェストに記載された全リポジトリをクローンするユースケース
pub struct CloneRepositoriesUseCase {
    workspace: Workspace,
    git: GitScm,
    manifest_store: ManifestStore,
}

impl CloneRepositoriesUseCase {
    pub fn new(workspace: Workspace, git: GitScm) -> Self {
        Self {
            workspace,
            git,
            manifest_store: ManifestStore::new(),
        }
    }

    /// クローンを実行
    ///
    /// 1件の失敗で中断せず、全エントリを試みる。
    /// 既存のクローン先は事前に確認しない（gitのエラーに任せる）。
    pub async fn execute(&self) -> AnvilResult<OperationReport> {
        info!("Cloning repositories...");

        // 1. マニフェストの存在確認
        if !self.workspace.manifest_exists() {
            return Err(AnvilError::manifest_not_found(&self.workspace.manifest_path));
        }

        // 2. ルートディレクトリの作成
        let root = &self.workspace.root_dir;
        tokio::fs::create_dir_all(root)
            .await
            .with_path_context("Failed to create repositories directory", root)?;

        // 3. マニフェストの読み込み
        let manifest = self
            .manifest_store
            .read_manifest(&self.workspace.manifest_path)
            .await
            .map_err(|e| match e {
                ManifestStoreError::NotFound { path } => AnvilError::manifest_not_found(path),
                other => other.into(),
            })?;
        debug!("Manifest lists {} repositories", manifest.len());

        // 4. 各エントリのクローン
        let mut report = OperationReport::new();
        for entry in &manifest.entries {
            let url = entry.url.as_str();
            info!("Cloning repository {}", url);

            let name = entry.directory_name();
            if name.is_empty() {
                let message = format!(
                    "cannot derive a directory name (line {})",
                    entry.line_number
                );
                error!("Error cloning {}: {}", url, message);
                report.record_failure(url, message);
                continue;
            }

            let target = self.workspace.repository_path(name);
            match self.git.clone_repository(url, &target).await {
                Ok(()) => {
                    debug!("Cloned {} into {}", url, target.display());
                    report.record_success(url);
                }
                Err(e) => {
                    let diagnostic = e.diagnostic();
                    error!("Error cloning {}: {}", url, diagnostic);
                    report.record_failure(url, diagnostic);
                }
            }
        }

        Ok(report)
    }
}
