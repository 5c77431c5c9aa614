use crate::common::error::AnvilError;

/// プロジェクト全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use anvil::common::result::AnvilResult;
/// use anvil::common::error::AnvilError;
///
/// fn example_function() -> AnvilResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> AnvilResult<()> {
///     Err(AnvilError::root_not_found("repositories"))
/// }
/// ```
pub type AnvilResult<T> = Result<T, AnvilError>;

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T> {
    /// io::Errorをパス付きのFileSystemErrorに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use anvil::common::result::{AnvilResult, ResultExt};
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound,
    ///     "missing",
    /// ));
    /// let mapped: AnvilResult<()> = result.with_path_context("Failed to read", "a.txt");
    /// assert!(mapped.is_err());
    /// ```
    fn with_path_context(
        self,
        message: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
    ) -> AnvilResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_path_context(
        self,
        message: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
    ) -> AnvilResult<T> {
        self.map_err(|e| AnvilError::filesystem_error_with_source(message, Some(path.into()), e))
    }
}
