pub mod clone_repositories;
pub mod connectivity_check;
mod local_repositories;
pub mod pull_repositories;
pub mod purge_repositories;
pub mod report;
pub mod switch_branches;

pub use clone_repositories::CloneRepositoriesUseCase;
pub use connectivity_check::ConnectivityCheckUseCase;
pub use pull_repositories::PullRepositoriesUseCase;
pub use purge_repositories::PurgeRepositoriesUseCase;
pub use report::{EntryOutcome, EntryReport, OperationReport};
pub use switch_branches::{SwitchBranchesConfig, SwitchBranchesUseCase};
