//! # anvil - batch management of a local repository mirror
//!
//! `anvil` reads a plain-text manifest of git repository URLs and clones,
//! pulls, switches or purges the matching local copies. It drives the `git`
//! and `ssh` command-line tools one invocation at a time.
//!
//! ## Quick Start
//!
//! 1. List repositories in `repositories.txt`:
//!
//! ```text
//! # Core services
//! https://github.com/example/frontend.git
//! git@github.com:example/backend.git   # API
//! ```
//!
//! 2. Clone them into `./repositories/`:
//!
//! ```bash
//! anvil clone
//! ```
//!
//! 3. Later, update them or put them back on their default branch:
//!
//! ```bash
//! anvil pull
//! anvil switch
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: the manifest, the workspace layout and value objects
//! - [`application`]: one use case per subcommand, plus the SSH connectivity check
//! - [`infrastructure`]: subprocess execution, git and ssh wrappers, filesystem access
//! - [`presentation`]: CLI parsing and dispatch
//! - [`common`]: configuration, errors and logging setup
//!
//! ## Error Handling
//!
//! Per-repository failures are collected in an
//! [`application::use_cases::OperationReport`] and never stop the remaining
//! repositories. Failures that abort a whole operation, such as a missing
//! manifest, are reported as [`common::error::AnvilError`].
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use anvil::application::use_cases::PullRepositoriesUseCase;
//! use anvil::domain::entities::workspace::Workspace;
//! use anvil::infrastructure::{CommandExecutor, GitScm};
//!
//! # async fn example() -> anvil::Result<()> {
//! let workspace = Workspace::new(".");
//! let git = GitScm::new(Arc::new(CommandExecutor::new()));
//!
//! let report = PullRepositoriesUseCase::new(workspace, git).execute().await?;
//! println!("{} repositories updated", report.succeeded_count());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::AnvilError;
pub use crate::common::result::AnvilResult as Result;
