pub mod git_scm;

pub use git_scm::{GitScm, ScmError};
