/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Process execution (the `git` and `ssh` subprocesses)
/// - Git operations (clone, pull, checkout)
/// - SSH connectivity probing
/// - File system operations (manifest, repositories root)
pub mod filesystem;
pub mod process;
pub mod scm;
pub mod ssh;

// Re-export commonly used types
pub use filesystem::{ManifestStore, ManifestStoreError};
pub use process::{CommandExecutor, CommandRunner};
pub use scm::{GitScm, ScmError};
pub use ssh::SshProbe;
