use crate::domain::value_objects::repository_url::RepositoryUrl;

/// マニフェストの1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// マニフェスト内の行番号（1始まり）
    pub line_number: usize,

    /// リポジトリのURL
    pub url: RepositoryUrl,
}

impl ManifestEntry {
    /// 新しいManifestEntryインスタンスを作成
    pub fn new(line_number: usize, url: RepositoryUrl) -> Self {
        Self { line_number, url }
    }

    /// クローン先のディレクトリ名
    pub fn directory_name(&self) -> &str {
        self.url.directory_name()
    }
}

/// リポジトリ一覧のマニフェスト
///
/// 1行に1つのURL。`#` 以降はコメント。空行とコメントのみの行は無視される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// 記載順のエントリ
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// テキストからマニフェストを解析
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let without_comment = line.split('#').next().unwrap_or_default();
                RepositoryUrl::new(without_comment)
                    .ok()
                    .map(|url| ManifestEntry::new(index + 1, url))
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
