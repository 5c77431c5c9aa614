use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// BranchName関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum BranchNameError {
    #[error("Branch name cannot be empty")]
    Empty,

    #[error("Branch name cannot contain whitespace: {0}")]
    ContainsWhitespace(String),

    #[error("Branch name cannot start with '-': {0}")]
    LeadingDash(String),
}

/// チェックアウト対象のブランチ名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// 新しいBranchNameインスタンスを作成
    ///
    /// `-` で始まる名前は `git checkout` のオプションとして解釈されるため拒否する。
    pub fn new(name: &str) -> Result<Self, BranchNameError> {
        if name.is_empty() {
            return Err(BranchNameError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(BranchNameError::ContainsWhitespace(name.to_string()));
        }
        if name.starts_with('-') {
            return Err(BranchNameError::LeadingDash(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 既定の切り替え候補（`main`、次に`master`）
    pub fn default_candidates() -> Vec<BranchName> {
        vec![Self("main".to_string()), Self("master".to_string())]
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BranchName {
    type Err = BranchNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
