pub mod branch_name;
pub mod repository_url;

pub use branch_name::{BranchName, BranchNameError};
pub use repository_url::{RepositoryUrl, RepositoryUrlError};
