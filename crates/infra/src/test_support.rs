use std::path::PathBuf;

/// A fresh, not-yet-created directory under the system temp dir.
pub fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stockkeep-{label}-{}", uuid::Uuid::now_v7()))
}
