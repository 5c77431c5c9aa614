pub mod manifest;
pub mod workspace;

pub use manifest::{Manifest, ManifestEntry};
pub use workspace::Workspace;
