use crate::infrastructure::process::CommandExecutorError;
use crate::infrastructure::ssh::SshProbe;
use tracing::{debug, error};

/// 認証成功時にsshの標準エラーに含まれる文言（小文字で比較）
pub const AUTH_SUCCESS_MARKER: &str = "successfully authenticated";

/// SSH接続確認のユースケース
///
/// 結果はログに出すだけで、後続の操作を止めることはない。
pub struct ConnectivityCheckUseCase {
    probe: SshProbe,
}

impl ConnectivityCheckUseCase {
    pub fn new(probe: SshProbe) -> Self {
        Self { probe }
    }

    /// 接続確認を実行し、認証できたかどうかを返す
    pub async fn execute(&self) -> bool {
        let host = self.probe.host();

        match self.probe.probe().await {
            Ok(result) => {
                let authenticated = result.stderr.to_lowercase().contains(AUTH_SUCCESS_MARKER);
                if authenticated {
                    debug!("SSH access to {} confirmed", host);
                } else {
                    error!("SSH access to {} failed: {}", host, result.stderr.trim());
                }
                authenticated
            }
            Err(CommandExecutorError::Timeout { .. }) => {
                error!("Timeout trying to reach {} via SSH", host);
                false
            }
            Err(e) => {
                error!("Unexpected error during SSH check: {}", e);
                false
            }
        }
    }
}
