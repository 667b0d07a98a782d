use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rastergen::{GrayMap, GrayscaleCodec};
use tempfile::TempDir;

/// Creates a temp directory and returns it together with a path inside it.
/// The directory is cleaned up when the TempDir is dropped.
pub fn temp_out(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    (dir, path)
}

/// Writes a whitespace-delimited sample file and returns its path.
pub fn write_dat(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write sample file");
    path
}

/// Codec stub that records calls instead of touching a real encoder.
#[derive(Default)]
pub struct RecordingCodec {
    /// (side, destination) of every save call
    pub saved: Mutex<Vec<(u32, PathBuf)>>,
    pub shown: Mutex<u32>,
}

impl GrayscaleCodec for RecordingCodec {
    fn save(&self, map: &GrayMap, path: &Path) -> anyhow::Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((map.side(), path.to_path_buf()));
        Ok(())
    }

    fn show(&self, _map: &GrayMap) -> anyhow::Result<()> {
        *self.shown.lock().unwrap() += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
