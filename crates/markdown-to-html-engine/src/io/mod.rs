use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Could not read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a markdown document
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an HTML document, creating parent directories as needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    fs::write(path, html).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.md");

        let err = read_markdown(&missing).unwrap_err();
        assert!(matches!(err, IoError::Read { ref path, .. } if *path == missing));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/deeper/out.html");

        write_html(&out, "<p>x</p>").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "<p>x</p>");
    }

    #[test]
    fn read_back_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Hi\n").unwrap();

        assert_eq!(read_markdown(&path).unwrap(), "# Hi\n");
    }
}
