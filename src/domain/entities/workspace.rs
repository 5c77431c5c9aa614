use std::path::{Path, PathBuf};

/// マニフェストファイルの既定名
pub const MANIFEST_FILE_NAME: &str = "repositories.txt";

/// クローン先ルートディレクトリの既定名
pub const ROOT_DIR_NAME: &str = "repositories";

/// ワークスペース（マニフェストとローカルリポジトリ群の配置）
///
/// ディスク上のディレクトリの有無だけが状態であり、インデックス等は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// 基準ディレクトリ
    pub base_dir: PathBuf,

    /// マニフェストファイルのパス
    pub manifest_path: PathBuf,

    /// ローカルリポジトリのルートディレクトリ
    pub root_dir: PathBuf,
}

impl Workspace {
    /// 基準ディレクトリから既定の配置でWorkspaceを作成
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            manifest_path: base_dir.join(MANIFEST_FILE_NAME),
            root_dir: base_dir.join(ROOT_DIR_NAME),
            base_dir,
        }
    }

    /// リポジトリのローカルパス
    pub fn repository_path(&self, directory_name: &str) -> PathBuf {
        self.root_dir.join(directory_name)
    }

    pub fn manifest_exists(&self) -> bool {
        self.manifest_path.is_file()
    }

    pub fn root_exists(&self) -> bool {
        self.root_dir.is_dir()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
