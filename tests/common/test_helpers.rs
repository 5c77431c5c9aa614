//! Test helper functions and utilities

use anvil::common::logging::LogConfig;
use anvil::domain::entities::workspace::Workspace;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared between the subscriber and the test
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Capture debug-level logs on the current thread until the guard drops
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = LogConfig::new(true).subscriber(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// A workspace rooted in a temporary directory
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub workspace: Workspace,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let workspace = Workspace::new(temp_dir.path());
        Self {
            _temp_dir: temp_dir,
            workspace,
        }
    }

    pub fn path(&self) -> &Path {
        self.workspace.base_dir()
    }

    pub fn write_manifest(&self, content: &str) -> &Self {
        std::fs::write(&self.workspace.manifest_path, content).expect("Failed to write manifest");
        self
    }

    /// Create `repositories/<name>/.git`
    pub fn add_repository(&self, name: &str) -> PathBuf {
        let path = self.workspace.repository_path(name);
        std::fs::create_dir_all(path.join(".git")).expect("Failed to create repository dir");
        path
    }

    /// Create a plain file directly under `repositories/`
    pub fn add_root_file(&self, name: &str) -> PathBuf {
        std::fs::create_dir_all(&self.workspace.root_dir).expect("Failed to create root");
        let path = self.workspace.root_dir.join(name);
        std::fs::write(&path, "not a repository").expect("Failed to write file");
        path
    }
}
