use std::fmt;
use thiserror::Error;

/// RepositoryUrl関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum RepositoryUrlError {
    #[error("Empty repository URL")]
    Empty,
}

/// マニフェストに記載されたリポジトリURLの値オブジェクト
///
/// URLの形式は検証しない。`git clone` が受け付けるものなら何でもよい
/// （https、ssh、scp形式、ローカルパスなど）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryUrl {
    url: String,
}

impl RepositoryUrl {
    /// 新しいRepositoryUrlインスタンスを作成
    pub fn new(url: &str) -> Result<Self, RepositoryUrlError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(RepositoryUrlError::Empty);
        }

        Ok(Self {
            url: trimmed.to_string(),
        })
    }

    /// URL文字列を取得
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// ローカルのディレクトリ名を導出
    ///
    /// 最後の `/` 以降を取り、末尾の拡張子を1つだけ取り除く。
    /// `https://example.com/org/foo.git` は `foo` になる。
    /// URLが `/` で終わる場合は空文字列になる。
    pub fn directory_name(&self) -> &str {
        let segment = self.url.rsplit('/').next().unwrap_or(&self.url);
        strip_extension(segment)
    }
}

/// 末尾の拡張子を1つ取り除く。先頭のドットは拡張子とみなさない。
fn strip_extension(segment: &str) -> &str {
    let leading_dots = segment.len() - segment.trim_start_matches('.').len();
    match segment[leading_dots..].rfind('.') {
        Some(index) => &segment[..leading_dots + index],
        None => segment,
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl TryFrom<&str> for RepositoryUrl {
    type Error = RepositoryUrlError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        Self::new(url)
    }
}
