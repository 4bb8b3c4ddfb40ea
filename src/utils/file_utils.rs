use std::path::{Path, PathBuf};
use uuid::Uuid;

// Uniquely named path for one subprocess report. The file is removed when
// the guard drops, so success, parse failure and timeout all clean up the
// same way. The lighthouse CLI creates the file itself; the guard only owns
// the name.
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(prefix: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{}-{}.json", prefix, Uuid::new_v4()));
        ReportFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ReportFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
