mod text;

pub use text::{format_frame, format_navigation, format_places};

use crate::error::OutputError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write any result as pretty JSON, creating parent directories
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(OutputError::Write)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames/2026/out.json");
        write_json(&path, &vec![1, 2, 3]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let back: Vec<i32> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }
}
