use super::report::OperationReport;
use crate::common::error::AnvilError;
use crate::common::result::{AnvilResult, ResultExt};
use crate::domain::entities::workspace::Workspace;
use crate::infrastructure::filesystem::remove_root;
use tracing::{debug, info};

/// ルートディレクトリごと全リポジトリを削除するユースケース
///
/// エントリ単位ではなく、一括で成功か失敗のどちらか。
pub struct PurgeRepositoriesUseCase {
    workspace: Workspace,
}

impl PurgeRepositoriesUseCase {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    pub async fn execute(&self) -> AnvilResult<OperationReport> {
        info!("Purging repositories...");

        let root = &self.workspace.root_dir;
        if !self.workspace.root_exists() {
            return Err(AnvilError::root_not_found(root));
        }

        remove_root(root)
            .await
            .with_path_context("Failed to purge repositories", root)?;
        debug!("Removed {}", root.display());

        Ok(OperationReport::new())
    }
}
