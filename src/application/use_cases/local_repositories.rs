use crate::common::error::AnvilError;
use crate::common::result::{AnvilResult, ResultExt};
use crate::domain::entities::workspace::Workspace;
use crate::infrastructure::filesystem::{list_root_entries, RootEntry};

/// ルートディレクトリ直下のエントリを列挙する（pull/switch共通）
///
/// ルートが存在しない場合は前提条件エラー。
pub(crate) fn scan_root(workspace: &Workspace) -> AnvilResult<Vec<RootEntry>> {
    if !workspace.root_exists() {
        return Err(AnvilError::root_not_found(&workspace.root_dir));
    }

    list_root_entries(&workspace.root_dir)
        .with_path_context("Failed to list repositories", &workspace.root_dir)
}

/// ディレクトリでないエントリをスキップする際の理由
pub(crate) const NOT_A_DIRECTORY: &str = "not a directory";
